//! Sitemap `<priority>` values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative crawl importance.
///
/// Values outside [0.0, 1.0] deserialize fine and are rejected by config
/// validation, so every bad entry is reported at once.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(pub f64);

impl Priority {
    pub const MIN: Self = Self(0.0);
    pub const MAX: Self = Self(1.0);

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        (Self::MIN.0..=Self::MAX.0).contains(&self.0)
    }

    /// Parse a `<priority>` value read back from a sitemap.
    pub fn parse(s: &str) -> Option<Self> {
        s.trim().parse::<f64>().ok().map(Self)
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self(0.5)
    }
}

/// Always at least one fractional digit: `1.0`, `0.7`, `0.85`.
impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0.to_string();
        if s.contains('.') {
            f.write_str(&s)
        } else {
            write!(f, "{:.1}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_whole_numbers() {
        assert_eq!(Priority(1.0).to_string(), "1.0");
        assert_eq!(Priority(0.0).to_string(), "0.0");
    }

    #[test]
    fn test_display_fractions() {
        assert_eq!(Priority(0.7).to_string(), "0.7");
        assert_eq!(Priority(0.85).to_string(), "0.85");
        assert_eq!(Priority(0.3).to_string(), "0.3");
    }

    #[test]
    fn test_is_valid() {
        assert!(Priority(0.0).is_valid());
        assert!(Priority(1.0).is_valid());
        assert!(Priority(0.5).is_valid());
        assert!(!Priority(1.1).is_valid());
        assert!(!Priority(-0.1).is_valid());
        assert!(!Priority(f64::NAN).is_valid());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Priority::parse("0.7"), Some(Priority(0.7)));
        assert_eq!(Priority::parse(" 1.0 "), Some(Priority(1.0)));
        assert_eq!(Priority::parse("high"), None);
    }
}
