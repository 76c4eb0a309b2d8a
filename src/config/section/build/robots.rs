//! `[build.robots]` configuration.

use crate::config::FieldPath;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotsConfig {
    /// Emit robots.txt from the build hook.
    pub enable: bool,
    /// Output path for robots file, relative to the output directory.
    pub path: PathBuf,
}

impl RobotsConfig {
    pub const PATH: FieldPath = FieldPath::new("build.robots.path");
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "robots.txt".into(),
        }
    }
}
