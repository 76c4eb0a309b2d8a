//! robots.txt generation.

use crate::utils::url::join_url;

/// Allow every crawler everywhere and advertise the sitemap.
///
/// ```text
/// User-agent: *
/// Allow: /
///
/// Sitemap: https://remotework.deals/sitemap.xml
/// ```
pub fn robots_txt(base_url: &str, sitemap_name: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}\n",
        join_url(base_url, sitemap_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robots_exact_content() {
        assert_eq!(
            robots_txt("https://remotework.deals", "sitemap.xml"),
            "User-agent: *\nAllow: /\n\nSitemap: https://remotework.deals/sitemap.xml\n"
        );
    }

    #[test]
    fn test_robots_trailing_slash_base() {
        let robots = robots_txt("https://remotework.deals/", "sitemap.xml");
        assert!(robots.contains("Sitemap: https://remotework.deals/sitemap.xml\n"));
    }

    #[test]
    fn test_robots_depends_only_on_base() {
        assert_eq!(
            robots_txt("https://remotework.deals", "sitemap.xml"),
            robots_txt("https://remotework.deals", "sitemap.xml")
        );
        assert_ne!(
            robots_txt("https://remotework.deals", "sitemap.xml"),
            robots_txt("https://staging.remotework.deals", "sitemap.xml")
        );
    }
}
