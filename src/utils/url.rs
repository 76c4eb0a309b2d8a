//! URL helpers for sitemap locations.

/// Join a site base URL with a root-relative route path.
///
/// Trailing slashes on the base and leading slashes on the path collapse
/// into exactly one separator, so the root route `/` maps to `<base>/`.
///
/// # Examples
/// ```ignore
/// join_url("https://remotework.deals", "/about")  -> "https://remotework.deals/about"
/// join_url("https://remotework.deals/", "about")  -> "https://remotework.deals/about"
/// join_url("https://remotework.deals", "/")       -> "https://remotework.deals/"
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Check that `url_str` is usable as the site base URL.
///
/// Uses the `url` crate for parsing. The base must be an absolute
/// `http`/`https` URL with a host and no query or fragment.
pub fn check_base_url(url_str: &str) -> Result<(), String> {
    let parsed = url::Url::parse(url_str).map_err(|e| format!("`{url_str}` is not a URL: {e}"))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!("scheme `{}` is not http or https", parsed.scheme()));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err("URL has no host".into());
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err("URL must not carry a query string or fragment".into());
    }

    Ok(())
}

/// Whether the part of `loc` after the scheme separator contains `//`.
pub fn has_double_slash(loc: &str) -> bool {
    let rest = loc.split_once("://").map_or(loc, |(_, rest)| rest);
    rest.contains("//")
}
