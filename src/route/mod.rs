//! Route model: the pages advertised to search engines.
//!
//! | Module       | Purpose                                          |
//! |--------------|--------------------------------------------------|
//! | `freq`       | `ChangeFreq` enumeration                         |
//! | `priority`   | `Priority` crawl weight in [0.0, 1.0]            |
//! | `descriptor` | `RouteEntry` (config) and `RouteDescriptor`      |
//! | `table`      | Built-in route table and base URL                |
//!
//! A `RouteEntry` is what gets maintained by hand (in code or `dealmap.toml`).
//! Each generation run turns entries into `RouteDescriptor`s by stamping
//! them with the run's date.

mod descriptor;
mod freq;
mod priority;
mod table;

pub use descriptor::{RouteDescriptor, RouteEntry, describe_routes};
pub use freq::ChangeFreq;
pub use priority::Priority;
pub use table::{DEFAULT_BASE_URL, ROOT_PATH, default_routes};
