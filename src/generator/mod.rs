//! Search engine artifacts generated from the route table.
//!
//! - **Sitemap**: `sitemap.xml` per the sitemaps.org protocol
//! - **Robots**: `robots.txt` pointing crawlers at the sitemap
//!
//! Both the standalone `generate` command and the build hook go through
//! [`generate_site`], so the two outputs can't drift apart.

pub mod robots;
pub mod sitemap;

use crate::config::SiteConfig;
use crate::route::{RouteEntry, describe_routes};
use crate::utils::date::DateTimeUtc;
use std::borrow::Cow;

/// Output of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoArtifacts {
    pub sitemap_xml: String,
    pub robots_txt: String,
    /// Number of `<url>` elements in `sitemap_xml`.
    pub url_count: usize,
}

/// Generation options that don't change the document's content.
#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions<'a> {
    /// Sitemap file name, as referenced from robots.txt.
    pub sitemap_name: &'a str,
    pub minify: bool,
}

impl Default for GenerateOptions<'_> {
    fn default() -> Self {
        Self {
            sitemap_name: "sitemap.xml",
            minify: false,
        }
    }
}

/// Generate sitemap and robots.txt for `routes` under `base_url` on `today`.
///
/// Pure: the same inputs always produce byte-identical output.
pub fn generate(routes: &[RouteEntry], base_url: &str, today: DateTimeUtc) -> SeoArtifacts {
    generate_with(routes, base_url, today, GenerateOptions::default())
}

/// [`generate`] with explicit options.
pub fn generate_with(
    routes: &[RouteEntry],
    base_url: &str,
    today: DateTimeUtc,
    options: GenerateOptions<'_>,
) -> SeoArtifacts {
    let descriptors = describe_routes(routes, today);
    let sitemap = sitemap::Sitemap::build(&descriptors, base_url);
    let url_count = sitemap.url_count();

    let xml = sitemap.into_xml();
    let sitemap_xml = if options.minify {
        String::from_utf8_lossy(&minify_xml(xml.as_bytes(), true)).into_owned()
    } else {
        xml
    };

    SeoArtifacts {
        sitemap_xml,
        robots_txt: robots::robots_txt(base_url, options.sitemap_name),
        url_count,
    }
}

/// Generate with every setting taken from `config`.
pub fn generate_site(config: &SiteConfig, today: DateTimeUtc) -> SeoArtifacts {
    let build = &config.build;
    let sitemap_name = build.sitemap.path.to_string_lossy();
    let options = GenerateOptions {
        sitemap_name: &sitemap_name,
        minify: build.minify,
    };
    generate_with(&config.routes, config.base_url(), today, options)
}

/// Minify XML content if enabled.
pub fn minify_xml(content: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if enabled {
        let xml_str = std::str::from_utf8(content).unwrap_or("");
        let minified = xml_str
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("");
        Cow::Owned(minified.into_bytes())
    } else {
        Cow::Borrowed(content)
    }
}
