//! Route entries and the descriptors generated from them.

use super::{ChangeFreq, Priority};
use crate::utils::{date::DateTimeUtc, url::join_url};
use serde::{Deserialize, Serialize};

/// A hand-maintained route, as written in `[[routes]]` or the built-in table.
///
/// # Example
///
/// ```toml
/// [[routes]]
/// path = "/about"
/// priority = 0.7
/// changefreq = "monthly"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// URL path relative to the site root (e.g., `/`, `/blog`).
    pub path: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub changefreq: ChangeFreq,
}

impl RouteEntry {
    pub fn new(path: impl Into<String>, priority: f64, changefreq: ChangeFreq) -> Self {
        Self {
            path: path.into(),
            priority: Priority(priority),
            changefreq,
        }
    }

    /// Stamp this entry with the generation date.
    pub fn describe(&self, today: DateTimeUtc) -> RouteDescriptor {
        RouteDescriptor {
            path: self.path.clone(),
            priority: self.priority,
            change_freq: self.changefreq,
            last_modified: today,
        }
    }
}

/// One public page to advertise, fixed for a single generation run.
///
/// `last_modified` is the run date rather than a content modification time.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDescriptor {
    pub path: String,
    pub priority: Priority,
    pub change_freq: ChangeFreq,
    pub last_modified: DateTimeUtc,
}

impl RouteDescriptor {
    /// Absolute URL of this route under `base_url`.
    pub fn loc(&self, base_url: &str) -> String {
        join_url(base_url, &self.path)
    }
}

/// Build descriptors for `entries`, preserving their order.
pub fn describe_routes(entries: &[RouteEntry], today: DateTimeUtc) -> Vec<RouteDescriptor> {
    entries.iter().map(|entry| entry.describe(today)).collect()
}
