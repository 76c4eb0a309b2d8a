//! Production build hook.
//!
//! Runs [`SeoPlugin`] against an [`OutputBundle`] and flushes the bundle to
//! the build output directory.

use crate::{
    config::SiteConfig,
    debug, log,
    plugin::{OutputBundle, SeoPlugin},
    utils::date::DateTimeUtc,
};
use anyhow::Result;
use std::path::PathBuf;

/// Emit sitemap.xml and robots.txt into `build.output`.
///
/// Returns the written paths.
pub fn build_assets(config: &SiteConfig, today: DateTimeUtc) -> Result<Vec<PathBuf>> {
    let mut bundle = OutputBundle::new();
    debug!("build"; "running {} for {}", SeoPlugin::NAME, config.base_url());
    SeoPlugin::new(config).generate_bundle(&mut bundle, today)?;

    let written = bundle.write_to(&config.build.output)?;
    for path in &written {
        log!("build"; "{}", path.display());
    }
    Ok(written)
}
