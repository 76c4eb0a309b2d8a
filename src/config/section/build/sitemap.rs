//! `[build.sitemap]` configuration.

use crate::config::FieldPath;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Output path for sitemap file, relative to the output directory.
    pub path: PathBuf,
}

impl SitemapConfig {
    pub const PATH: FieldPath = FieldPath::new("build.sitemap.path");
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            path: "sitemap.xml".into(),
        }
    }
}
