//! Site configuration management for `dealmap.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build/     # [build], [build.sitemap], [build.robots]
//! │   ├── routes     # [[routes]] validation
//! │   └── site       # [site]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The config file is optional. Without it, the built-in base URL and route
//! table are used, so `dealmap generate` runs with no setup at all.

pub mod section;
pub mod types;

pub use section::{BuildSectionConfig, SiteSectionConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    debug,
    route::{RouteEntry, default_routes},
    utils::path::{find_config_file, normalize_path},
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing dealmap.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, empty when none was found (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file, or cwd (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site settings (base URL)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,

    /// Pages advertised in the sitemap, in output order
    #[serde(default = "default_routes")]
    pub routes: Vec<RouteEntry>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteSectionConfig::default(),
            build: BuildSectionConfig::default(),
            routes: default_routes(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. The project root is the
    /// config file's parent directory, or cwd when no config file exists.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "`{}` not found, using built-in routes", cli.config.display());
                let mut config = Self::default();
                config.root = cwd;
                config
            }
        };

        config.apply_command_options(cli);
        config.normalize_paths();
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        Self::print_unknown_fields_warning(&ignored, path);

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    ///
    /// Unknown fields never stop the run: the build hook is non-interactive.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        if fields.is_empty() {
            return;
        }

        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());

        let mut diag = ConfigDiagnostics::new();
        for field in fields {
            diag.warn(format!("unknown field in {display_path}, ignoring: {field}"));
        }
        diag.print_warnings();
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        self.site.base_url()
    }

    /// Where `dealmap generate` writes the sitemap.
    pub fn public_sitemap_path(&self) -> PathBuf {
        self.build.public.join(&self.build.sitemap.path)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            // Script variant takes no options
            Commands::Generate => {}
            Commands::Validate { .. } => {}
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        Self::update_option(&mut self.build.output, args.output.as_ref());
        Self::update_option(&mut self.site.url, args.site_url.as_ref());
        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        Self::update_option(&mut self.build.robots.enable, args.robots.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Resolve output directories against the root.
    ///
    /// File names (`build.sitemap.path`, `build.robots.path`) stay relative;
    /// they are joined onto an output directory at write time.
    fn normalize_paths(&mut self) {
        self.root = normalize_path(&self.root);
        self.build.public = normalize_path(&self.root.join(&self.build.public));
        self.build.output = normalize_path(&self.root.join(&self.build.output));
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.build.validate(&mut diag);
        section::validate_routes(&self.routes, &mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{ChangeFreq, Priority};
    use clap::Parser;

    #[test]
    fn test_parse_invalid_toml() {
        let result = SiteConfig::parse_with_ignored("[site\nurl = \"https://remotework.deals\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.base_url(), "https://remotework.deals");
        assert_eq!(config.routes, default_routes());
        assert_eq!(
            config.public_sitemap_path(),
            PathBuf::from("public/sitemap.xml")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_builtin_table() {
        let config = test_parse_config("");
        assert_eq!(config.routes, default_routes());
        assert_eq!(config.base_url(), "https://remotework.deals");
    }

    #[test]
    fn test_routes_override() {
        let config = test_parse_config(
            r#"
[site]
url = "https://staging.remotework.deals/"

[[routes]]
path = "/"
priority = 1.0
changefreq = "daily"

[[routes]]
path = "/about"
priority = 0.7
changefreq = "monthly"
"#,
        );

        assert_eq!(config.base_url(), "https://staging.remotework.deals");
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[1].path, "/about");
        assert_eq!(config.routes[1].priority, Priority(0.7));
        assert_eq!(config.routes[1].changefreq, ChangeFreq::Monthly);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\nurl = \"https://remotework.deals\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.base_url(), "https://remotework.deals");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_validate_collects_every_error() {
        let config = test_parse_config(
            r#"
[site]
url = "remotework.deals"

[[routes]]
path = "/"
priority = 0.5
"#,
        );

        let err = config.validate().unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err:?}");
        };
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_build_args_override_config() {
        let cli = Cli::try_parse_from([
            "dealmap",
            "build",
            "--output",
            "out",
            "--site-url",
            "https://preview.remotework.deals",
            "--minify",
            "--robots=false",
        ])
        .unwrap();

        let mut config = SiteConfig::default();
        config.apply_command_options(&cli);

        assert_eq!(config.build.output, PathBuf::from("out"));
        assert_eq!(config.base_url(), "https://preview.remotework.deals");
        assert!(config.build.minify);
        assert!(!config.build.robots.enable);
    }

    #[test]
    fn test_generate_ignores_build_overrides() {
        let cli = Cli::try_parse_from(["dealmap", "generate"]).unwrap();

        let mut config = SiteConfig::default();
        config.apply_command_options(&cli);

        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(!config.build.minify);
    }

    #[test]
    fn test_normalize_paths_resolves_against_root() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.root = dir.path().to_path_buf();
        config.normalize_paths();

        let root = dir.path().canonicalize().unwrap();
        assert_eq!(config.build.public, root.join("public"));
        assert_eq!(config.build.output, root.join("dist"));
        assert_eq!(
            config.public_sitemap_path(),
            root.join("public").join("sitemap.xml")
        );
    }
}
