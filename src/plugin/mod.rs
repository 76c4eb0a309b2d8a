//! Build-time asset emission.
//!
//! The production build runs [`SeoPlugin`] once. Instead of writing files
//! itself, the plugin registers `sitemap.xml` and `robots.txt` with the
//! build through [`BuildContext`], and reports how many URLs it emitted as
//! a warning diagnostic.
//!
//! ```text
//! SeoPlugin::generate_bundle
//!   ├── emit_file("sitemap.xml")
//!   ├── emit_file("robots.txt")      (build.robots.enable)
//!   └── warn("generated sitemap with N URLs")
//! ```

mod bundle;

pub use bundle::{BundleError, EmittedAsset, OutputBundle};

use crate::config::SiteConfig;
use crate::generator::{SeoArtifacts, generate_site};
use crate::utils::date::DateTimeUtc;

/// What a build hook may do to the build it runs in.
pub trait BuildContext {
    /// Register a named output asset.
    fn emit_file(&mut self, asset: EmittedAsset) -> Result<(), BundleError>;

    /// Report a non-fatal diagnostic.
    fn warn(&mut self, message: String);
}

/// Build hook producing the sitemap and robots.txt.
pub struct SeoPlugin<'a> {
    config: &'a SiteConfig,
}

impl<'a> SeoPlugin<'a> {
    pub const NAME: &'static str = "sitemap-robots";

    pub const fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Emit this build's assets into `ctx`.
    ///
    /// Returns the generated artifacts so callers can inspect them.
    pub fn generate_bundle(
        &self,
        ctx: &mut impl BuildContext,
        today: DateTimeUtc,
    ) -> Result<SeoArtifacts, BundleError> {
        let build = &self.config.build;
        let artifacts = generate_site(self.config, today);

        ctx.emit_file(EmittedAsset::new(
            build.sitemap.path.clone(),
            artifacts.sitemap_xml.clone(),
        ))?;

        if build.robots.enable {
            ctx.emit_file(EmittedAsset::new(
                build.robots.path.clone(),
                artifacts.robots_txt.clone(),
            ))?;
        }

        ctx.warn(format!(
            "generated sitemap with {} URLs",
            artifacts.url_count
        ));

        Ok(artifacts)
    }
}
