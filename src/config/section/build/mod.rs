//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! public = "public"           # `dealmap generate` writes here (relative to site root)
//! output = "dist"             # `dealmap build` emits here (relative to site root)
//! minify = false              # Join sitemap XML onto one line
//!
//! [build.sitemap]
//! path = "sitemap.xml"        # Sitemap file name
//!
//! [build.robots]
//! enable = true               # Emit robots.txt from the build hook
//! path = "robots.txt"
//! ```

mod robots;
mod sitemap;

pub use robots::RobotsConfig;
pub use sitemap::SitemapConfig;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::is_safe_relative;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Public asset directory for the standalone script output.
    pub public: PathBuf,
    /// Production build output directory for the build hook.
    pub output: PathBuf,
    /// Minify sitemap XML.
    pub minify: bool,
    /// Sitemap settings
    pub sitemap: SitemapConfig,
    /// robots.txt settings
    pub robots: RobotsConfig,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            public: "public".into(),
            output: "dist".into(),
            minify: false,
            sitemap: SitemapConfig::default(),
            robots: RobotsConfig::default(),
        }
    }
}

impl BuildSectionConfig {
    /// Validate output file names.
    ///
    /// # Checks
    /// - sitemap and robots paths stay inside the output directory
    /// - robots.txt doesn't overwrite the sitemap
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_output_name(SitemapConfig::PATH, &self.sitemap.path, diag);

        if self.robots.enable {
            check_output_name(RobotsConfig::PATH, &self.robots.path, diag);

            if self.robots.path == self.sitemap.path {
                diag.error(
                    RobotsConfig::PATH,
                    format!(
                        "`{}` is also the sitemap path",
                        self.robots.path.display()
                    ),
                );
            }
        }
    }
}

fn check_output_name(field: FieldPath, path: &std::path::Path, diag: &mut ConfigDiagnostics) {
    if !is_safe_relative(path) {
        diag.error_with_hint(
            field,
            format!("`{}` must be a relative file path", path.display()),
            "write it as `name.xml` or `dir/name.xml`; `.`, `..`, `//` and absolute paths are rejected",
        );
    }
}
