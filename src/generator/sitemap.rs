//! Sitemap generation.
//!
//! Renders route descriptors as a sitemaps.org document.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//! <url>
//! <loc>https://remotework.deals/about</loc>
//! <lastmod>2024-01-15</lastmod>
//! <changefreq>monthly</changefreq>
//! <priority>0.7</priority>
//! </url>
//! </urlset>
//! ```

use crate::route::RouteDescriptor;
use std::borrow::Cow;

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: String,
    changefreq: &'static str,
    priority: String,
}

impl Sitemap {
    /// One `<url>` per descriptor, in input order.
    pub fn build(routes: &[RouteDescriptor], base_url: &str) -> Self {
        let urls = routes
            .iter()
            .map(|route| UrlEntry {
                loc: route.loc(base_url),
                lastmod: route.last_modified.to_date_string(),
                changefreq: route.change_freq.as_str(),
                priority: route.priority.to_string(),
            })
            .collect();

        Self { urls }
    }

    /// Number of `<url>` elements the document will hold.
    pub fn url_count(&self) -> usize {
        self.urls.len()
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(128 + self.urls.len() * 160);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("<url>\n<loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n<lastmod>");
            xml.push_str(&entry.lastmod);
            xml.push_str("</lastmod>\n<changefreq>");
            xml.push_str(entry.changefreq);
            xml.push_str("</changefreq>\n<priority>");
            xml.push_str(&entry.priority);
            xml.push_str("</priority>\n</url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
