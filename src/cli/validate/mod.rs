//! Sitemap validation.
//!
//! Reads an emitted sitemap back and checks it against the configured
//! routes and base URL:
//!
//! - root is `<urlset>` in the sitemaps.org namespace
//! - one `<url>` per configured route, no unknown locations
//! - `<loc>` has no `//` after the scheme
//! - `<lastmod>` is a `YYYY-MM-DD` date
//! - `<changefreq>` and `<priority>` hold valid values, root has `1.0`

mod report;
mod scan;

use report::ValidationReport;
use scan::{ScannedUrl, scan_sitemap};

use crate::{
    config::SiteConfig,
    generator::sitemap::SITEMAP_NS,
    log,
    route::{ChangeFreq, Priority, ROOT_PATH},
    utils::{
        date::DateTimeUtc,
        url::{has_double_slash, join_url},
    },
};
use anyhow::{Context, Result, bail};
use rustc_hash::{FxHashMap, FxHashSet};
use std::{fs, path::Path};

const DOCUMENT: &str = "document";

/// Validate the sitemap at `path` (default: the `generate` output).
pub fn validate_sitemap(config: &SiteConfig, path: Option<&Path>) -> Result<ValidationReport> {
    let path = path.map_or_else(|| config.public_sitemap_path(), Path::to_path_buf);
    let xml = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read sitemap {}", path.display()))?;

    let report = check_sitemap(&xml, config)
        .with_context(|| format!("Failed to parse sitemap {}", path.display()))?;

    if report.is_ok() {
        log!("validate"; "{} ok ({} urls)", path.display(), report.url_count);
        return Ok(report);
    }

    report.print();
    log!("error"; "{}", report.summary(&path));
    bail!("sitemap validation failed");
}

/// Check sitemap text against `config`.
///
/// Malformed XML is an `Err`; content problems are collected in the report.
pub fn check_sitemap(xml: &str, config: &SiteConfig) -> Result<ValidationReport> {
    let sitemap = scan_sitemap(xml)?;
    let mut report = ValidationReport {
        url_count: sitemap.urls.len(),
        ..ValidationReport::default()
    };

    match sitemap.namespace.as_deref() {
        Some(SITEMAP_NS) => {}
        Some(other) => report.add(DOCUMENT, format!("namespace `{other}`, expected `{SITEMAP_NS}`")),
        None => report.add(DOCUMENT, "missing xmlns on <urlset>"),
    }

    if sitemap.urls.len() != config.routes.len() {
        report.add(
            DOCUMENT,
            format!(
                "{} urls, expected {}",
                sitemap.urls.len(),
                config.routes.len()
            ),
        );
    }

    // loc -> route path
    let expected: FxHashMap<String, &str> = config
        .routes
        .iter()
        .map(|route| (join_url(config.base_url(), &route.path), route.path.as_str()))
        .collect();
    let mut found = FxHashSet::default();

    for url in &sitemap.urls {
        check_url(url, &expected, &mut report);
        if !found.insert(url.loc.as_str()) {
            report.add(&url.loc, "listed more than once");
        }
    }

    for route in &config.routes {
        let loc = join_url(config.base_url(), &route.path);
        if !found.contains(loc.as_str()) {
            report.add(loc, "configured route missing from sitemap");
        }
    }

    Ok(report)
}

fn check_url(url: &ScannedUrl, expected: &FxHashMap<String, &str>, report: &mut ValidationReport) {
    let target = if url.loc.is_empty() { "<url>" } else { url.loc.as_str() };

    if url.loc.is_empty() {
        report.add(target, "missing <loc>");
    } else if has_double_slash(&url.loc) {
        report.add(target, "<loc> contains `//`");
    } else if !expected.contains_key(&url.loc) {
        report.add(target, "not a configured route");
    }

    let lastmod_ok = url.lastmod.len() == 10 && DateTimeUtc::parse(&url.lastmod).is_some();
    if !lastmod_ok {
        report.add(target, format!("<lastmod> `{}` is not YYYY-MM-DD", url.lastmod));
    }

    if ChangeFreq::parse(&url.changefreq).is_none() {
        report.add(target, format!("<changefreq> `{}` is not one of daily, weekly, monthly", url.changefreq));
    }

    match Priority::parse(&url.priority) {
        Some(priority) if !priority.is_valid() => {
            report.add(target, format!("<priority> {priority} is outside [0.0, 1.0]"));
        }
        Some(priority) => {
            let is_root = expected.get(&url.loc).is_some_and(|path| *path == ROOT_PATH);
            if is_root && priority.value() != 1.0 {
                report.add(target, format!("root priority {priority}, expected 1.0"));
            }
        }
        None => report.add(target, format!("<priority> `{}` is not a decimal", url.priority)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;
    use crate::route::RouteEntry;
    use tempfile::TempDir;

    fn small_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.routes = vec![
            RouteEntry::new("/", 1.0, ChangeFreq::Daily),
            RouteEntry::new("/about", 0.7, ChangeFreq::Monthly),
        ];
        config
    }

    fn generated(config: &SiteConfig) -> String {
        generate(&config.routes, config.base_url(), DateTimeUtc::from_ymd(2024, 1, 15)).sitemap_xml
    }

    #[test]
    fn test_generated_sitemap_is_valid() {
        let config = SiteConfig::default();
        let report = check_sitemap(&generated(&config), &config).unwrap();

        assert!(report.is_ok(), "{:?}", report.errors);
        assert_eq!(report.url_count, config.routes.len());
    }

    #[test]
    fn test_detects_missing_route() {
        let config = small_config();
        let xml = generated(&config);

        let mut more = config.clone();
        more.routes.push(RouteEntry::new("/blog", 0.8, ChangeFreq::Weekly));
        let report = check_sitemap(&xml, &more).unwrap();

        assert_eq!(report.error_count(), 2);
        assert!(report.errors.iter().any(|e| e.reason == "2 urls, expected 3"));
        assert!(
            report
                .errors
                .iter()
                .any(|e| e.target == "https://remotework.deals/blog")
        );
    }

    #[test]
    fn test_detects_bad_values() {
        let config = small_config();
        let xml = generated(&config)
            .replace("<priority>1.0</priority>", "<priority>0.9</priority>")
            .replace("<changefreq>monthly</changefreq>", "<changefreq>yearly</changefreq>")
            .replacen("<lastmod>2024-01-15</lastmod>", "<lastmod>2024-1-15</lastmod>", 1);

        let report = check_sitemap(&xml, &config).unwrap();
        let reasons: Vec<_> = report.errors.iter().map(|e| e.reason.as_str()).collect();

        assert_eq!(report.error_count(), 3, "{reasons:?}");
        assert!(reasons.iter().any(|r| r.starts_with("root priority 0.9")));
        assert!(reasons.iter().any(|r| r.starts_with("<changefreq> `yearly`")));
        assert!(reasons.iter().any(|r| r.starts_with("<lastmod> `2024-1-15`")));
    }

    #[test]
    fn test_detects_out_of_range_priority() {
        let config = small_config();
        let xml = generated(&config).replace("<priority>0.7</priority>", "<priority>1.5</priority>");

        let report = check_sitemap(&xml, &config).unwrap();
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.errors[0].target, "https://remotework.deals/about");
    }

    #[test]
    fn test_detects_double_slash_and_wrong_namespace() {
        let config = small_config();
        let xml = generated(&config)
            .replace("deals/about", "deals//about")
            .replace(SITEMAP_NS, "http://example.com/ns");

        let report = check_sitemap(&xml, &config).unwrap();
        let reasons: Vec<_> = report.errors.iter().map(|e| e.reason.as_str()).collect();

        assert!(reasons.iter().any(|r| r.starts_with("namespace")));
        assert!(reasons.contains(&"<loc> contains `//`"));
        assert!(reasons.contains(&"configured route missing from sitemap"));
    }

    #[test]
    fn test_validate_sitemap_reads_default_path() {
        let dir = TempDir::new().unwrap();
        let mut config = small_config();
        config.build.public = dir.path().join("public");

        crate::cli::generate::write_sitemap(&config, DateTimeUtc::now()).unwrap();
        let report = validate_sitemap(&config, None).unwrap();

        assert_eq!(report.url_count, 2);
    }

    #[test]
    fn test_validate_sitemap_fails_on_problems() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sitemap.xml");
        let config = small_config();
        fs::write(&path, generated(&config).replace("<priority>1.0</priority>", "")).unwrap();

        let err = validate_sitemap(&config, Some(&path)).unwrap_err();
        assert_eq!(err.to_string(), "sitemap validation failed");
    }

    #[test]
    fn test_validate_sitemap_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = validate_sitemap(&small_config(), Some(&dir.path().join("nope.xml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read sitemap"));
    }
}
