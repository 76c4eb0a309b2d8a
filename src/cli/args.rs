//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Sitemap and robots.txt generator for the coliving deals site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory.
    /// Built-in routes and base URL are used when it does not exist.
    #[arg(short = 'C', long, global = true, default_value = "dealmap.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write sitemap.xml into the public asset directory
    #[command(visible_alias = "g")]
    Generate,

    /// Emit sitemap.xml and robots.txt as production build output
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Check a generated sitemap against the configured routes
    #[command(visible_alias = "v")]
    Validate {
        /// Sitemap to check (default: the `generate` output path)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        path: Option<PathBuf>,
    },
}

/// Build hook arguments
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Build output directory (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Override site URL, e.g. for preview deployments
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Minify the sitemap XML
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Emit robots.txt alongside the sitemap
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub robots: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_takes_no_arguments() {
        let cli = Cli::try_parse_from(["dealmap", "generate"]).unwrap();
        assert!(matches!(cli.command, Commands::Generate));
        assert!(Cli::try_parse_from(["dealmap", "generate", "extra"]).is_err());
    }

    #[test]
    fn test_build_args() {
        let cli = Cli::try_parse_from([
            "dealmap",
            "b",
            "-o",
            "out",
            "--site-url",
            "https://preview.remotework.deals",
            "--minify",
            "--robots=false",
        ])
        .unwrap();

        let Commands::Build { build_args } = cli.command else {
            panic!("expected build command");
        };
        assert_eq!(build_args.output, Some(PathBuf::from("out")));
        assert_eq!(
            build_args.site_url.as_deref(),
            Some("https://preview.remotework.deals")
        );
        assert_eq!(build_args.minify, Some(true));
        assert_eq!(build_args.robots, Some(false));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["dealmap", "validate", "-v", "-C", "site.toml"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(matches!(cli.command, Commands::Validate { .. }));
    }
}
