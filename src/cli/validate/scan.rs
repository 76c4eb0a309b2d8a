//! Read a sitemap back into its `<url>` entries.

use anyhow::{Result, bail};
use quick_xml::{Reader, escape::resolve_xml_entity, events::Event};

/// One `<url>` element as written in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedUrl {
    pub loc: String,
    pub lastmod: String,
    pub changefreq: String,
    pub priority: String,
}

/// Parsed sitemap document.
#[derive(Debug, Default)]
pub struct ScannedSitemap {
    /// `xmlns` of the root element, if the root was `<urlset>`.
    pub namespace: Option<String>,
    pub urls: Vec<ScannedUrl>,
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Loc,
    Lastmod,
    Changefreq,
    Priority,
}

impl ScannedUrl {
    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Loc => &mut self.loc,
            Field::Lastmod => &mut self.lastmod,
            Field::Changefreq => &mut self.changefreq,
            Field::Priority => &mut self.priority,
        }
    }
}

/// Parse `xml`, failing only on malformed XML or a non-`urlset` root.
pub fn scan_sitemap(xml: &str) -> Result<ScannedSitemap> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut sitemap = ScannedSitemap::default();
    let mut root_seen = false;
    let mut current: Option<ScannedUrl> = None;
    let mut field: Option<Field> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name();
                if !root_seen {
                    if name.as_ref() != b"urlset" {
                        bail!(
                            "root element is <{}>, expected <urlset>",
                            String::from_utf8_lossy(name.as_ref())
                        );
                    }
                    root_seen = true;
                    if let Some(attr) = e.try_get_attribute("xmlns")? {
                        sitemap.namespace = Some(String::from_utf8_lossy(&attr.value).into_owned());
                    }
                    continue;
                }
                match name.as_ref() {
                    b"url" => current = Some(ScannedUrl::default()),
                    b"loc" => field = Some(Field::Loc),
                    b"lastmod" => field = Some(Field::Lastmod),
                    b"changefreq" => field = Some(Field::Changefreq),
                    b"priority" => field = Some(Field::Priority),
                    _ => field = None,
                }
            }
            Event::Text(t) => {
                if let (Some(url), Some(f)) = (current.as_mut(), field) {
                    url.field_mut(f).push_str(&t.decode()?);
                }
            }
            Event::GeneralRef(r) => {
                if let (Some(url), Some(f)) = (current.as_mut(), field) {
                    let name = r.decode()?;
                    match resolve_xml_entity(&name) {
                        Some(resolved) => url.field_mut(f).push_str(resolved),
                        None => bail!("unknown entity `&{name};`"),
                    }
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"url" => sitemap.urls.extend(current.take()),
                _ => field = None,
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if !root_seen {
        bail!("document has no root element");
    }
    Ok(sitemap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;
    use crate::route::{ChangeFreq, RouteEntry};
    use crate::utils::date::DateTimeUtc;

    #[test]
    fn test_scan_generated_sitemap() {
        let routes = vec![
            RouteEntry::new("/", 1.0, ChangeFreq::Daily),
            RouteEntry::new("/about", 0.7, ChangeFreq::Monthly),
        ];
        let xml = generate(&routes, "https://remotework.deals", DateTimeUtc::from_ymd(2024, 1, 15))
            .sitemap_xml;

        let sitemap = scan_sitemap(&xml).unwrap();

        assert_eq!(
            sitemap.namespace.as_deref(),
            Some("http://www.sitemaps.org/schemas/sitemap/0.9")
        );
        assert_eq!(
            sitemap.urls[1],
            ScannedUrl {
                loc: "https://remotework.deals/about".into(),
                lastmod: "2024-01-15".into(),
                changefreq: "monthly".into(),
                priority: "0.7".into(),
            }
        );
        assert_eq!(sitemap.urls.len(), 2);
    }

    #[test]
    fn test_scan_resolves_entities() {
        let xml = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>https://remotework.deals/search?a=1&amp;b=2</loc></url>
</urlset>"#;

        let sitemap = scan_sitemap(xml).unwrap();
        assert_eq!(sitemap.urls[0].loc, "https://remotework.deals/search?a=1&b=2");
    }

    #[test]
    fn test_scan_minified() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"><url><loc>https://remotework.deals/</loc><priority>1.0</priority></url></urlset>"#;

        let sitemap = scan_sitemap(xml).unwrap();
        assert_eq!(sitemap.urls.len(), 1);
        assert_eq!(sitemap.urls[0].priority, "1.0");
        assert_eq!(sitemap.urls[0].lastmod, "");
    }

    #[test]
    fn test_scan_rejects_wrong_root() {
        let err = scan_sitemap("<sitemapindex></sitemapindex>").unwrap_err();
        assert!(err.to_string().contains("expected <urlset>"));
    }

    #[test]
    fn test_scan_rejects_empty_document() {
        assert!(scan_sitemap("").is_err());
    }

    #[test]
    fn test_scan_rejects_malformed_xml() {
        assert!(scan_sitemap("<urlset><url></urlset>").is_err());
    }
}
