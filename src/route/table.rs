//! Built-in route table.
//!
//! Kept in sync with the front-end router by hand. Listing detail pages
//! live in the hosted backend and are not listed here.

use super::{ChangeFreq, RouteEntry};

/// Production site URL.
pub const DEFAULT_BASE_URL: &str = "https://remotework.deals";

/// The site root, which always carries priority `1.0`.
pub const ROOT_PATH: &str = "/";

/// Public pages in sitemap order.
pub fn default_routes() -> Vec<RouteEntry> {
    use ChangeFreq::{Daily, Monthly, Weekly};

    vec![
        RouteEntry::new(ROOT_PATH, 1.0, Daily),
        RouteEntry::new("/deals", 0.9, Daily),
        RouteEntry::new("/coliving", 0.8, Weekly),
        RouteEntry::new("/blog", 0.8, Weekly),
        RouteEntry::new("/about", 0.7, Monthly),
        RouteEntry::new("/contact", 0.6, Monthly),
        RouteEntry::new("/submit-deal", 0.6, Monthly),
        RouteEntry::new("/privacy", 0.3, Monthly),
        RouteEntry::new("/terms", 0.3, Monthly),
    ]
}
