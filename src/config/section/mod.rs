//! Configuration section definitions.
//!
//! | Section           | Purpose                                    |
//! |-------------------|--------------------------------------------|
//! | `[site]`          | Base URL advertised to search engines      |
//! | `[build]`         | Output directories, minify                 |
//! | `[build.sitemap]` | Sitemap file name                          |
//! | `[build.robots]`  | robots.txt toggle and file name            |
//! | `[[routes]]`      | Route table (validated in `routes`)        |

pub mod build;
mod routes;
mod site;

pub use build::{BuildSectionConfig, RobotsConfig, SitemapConfig};
pub use routes::validate_routes;
pub use site::SiteSectionConfig;
