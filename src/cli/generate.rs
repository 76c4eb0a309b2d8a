//! Standalone sitemap script.
//!
//! Writes `sitemap.xml` straight into the public asset directory, where the
//! front-end build picks it up as a static file. robots.txt is left to the
//! build hook.

use crate::{config::SiteConfig, generator::generate_site, log, utils::date::DateTimeUtc};
use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

/// Generate and write the sitemap for `today`.
///
/// Returns the written path.
pub fn write_sitemap(config: &SiteConfig, today: DateTimeUtc) -> Result<PathBuf> {
    let sitemap_path = config.public_sitemap_path();
    let artifacts = generate_site(config, today);

    if let Some(parent) = sitemap_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(&sitemap_path, &artifacts.sitemap_xml)
        .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

    log!("sitemap"; "{} ({} urls)", sitemap_path.display(), artifacts.url_count);
    Ok(sitemap_path)
}
