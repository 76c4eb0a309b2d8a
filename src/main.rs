//! dealmap - sitemap.xml and robots.txt for the coliving deals site.

#![allow(dead_code)]

mod cli;
mod config;
mod generator;
mod logger;
mod plugin;
mod route;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;
use utils::date::DateTimeUtc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;
    // One date per run, so every <lastmod> agrees
    let today = DateTimeUtc::now();

    match &cli.command {
        Commands::Generate => cli::generate::write_sitemap(&config, today).map(|_| ()),
        Commands::Build { .. } => cli::build::build_assets(&config, today).map(|_| ()),
        Commands::Validate { path } => {
            cli::validate::validate_sitemap(&config, path.as_deref()).map(|_| ())
        }
    }
}
