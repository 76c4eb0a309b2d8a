//! `[site]` configuration.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::route::DEFAULT_BASE_URL;
use crate::utils::url::check_base_url;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site URL, path used as prefix (e.g., "https://remotework.deals").
    pub url: String,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BASE_URL.into(),
        }
    }
}

impl SiteSectionConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");

    /// Base URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be a valid http(s) URL with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Err(reason) = check_base_url(&self.url) {
            diag.error_with_hint(
                Self::URL,
                reason,
                format!("use an absolute URL like \"{DEFAULT_BASE_URL}\""),
            );
        }
    }
}
