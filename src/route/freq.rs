//! Sitemap `<changefreq>` values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How often a page is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

impl ChangeFreq {
    /// All accepted values, in protocol spelling.
    pub const ALL: [Self; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Parse the protocol spelling (as read back from a sitemap).
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|freq| freq.as_str() == s)
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(ChangeFreq::Daily.as_str(), "daily");
        assert_eq!(ChangeFreq::Weekly.as_str(), "weekly");
        assert_eq!(ChangeFreq::Monthly.to_string(), "monthly");
    }

    #[test]
    fn test_parse() {
        assert_eq!(ChangeFreq::parse("daily"), Some(ChangeFreq::Daily));
        assert_eq!(ChangeFreq::parse("monthly"), Some(ChangeFreq::Monthly));
        assert_eq!(ChangeFreq::parse("yearly"), None);
        assert_eq!(ChangeFreq::parse("Daily"), None);
    }

    #[test]
    fn test_deserialize_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            changefreq: ChangeFreq,
        }

        let w: Wrapper = toml::from_str("changefreq = \"monthly\"").unwrap();
        assert_eq!(w.changefreq, ChangeFreq::Monthly);

        assert!(toml::from_str::<Wrapper>("changefreq = \"hourly\"").is_err());
    }
}
