//! Validation report types and formatting.

use owo_colors::OwoColorize;
use std::path::Path;

/// A single validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The `<loc>` (or document part) that failed.
    pub target: String,
    /// Error reason/message.
    pub reason: String,
}

/// All problems found in one sitemap
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    /// Number of `<url>` elements checked.
    pub url_count: usize,
}

impl ValidationReport {
    pub fn add(&mut self, target: impl Into<String>, reason: impl Into<String>) {
        self.errors.push(ValidationError {
            target: target.into(),
            reason: reason.into(),
        });
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// One-line outcome, e.g. `public/sitemap.xml has 2 problems`.
    pub fn summary(&self, path: &Path) -> String {
        let count = self.error_count();
        let plural = if count == 1 { "" } else { "s" };
        format!("{} has {count} problem{plural}", path.display())
    }

    /// Print the full report to stderr.
    pub fn print(&self) {
        if self.errors.is_empty() {
            return;
        }
        eprintln!();
        for error in &self.errors {
            eprintln!("  {} {}", error.target.cyan(), error.reason.dimmed());
        }
        eprintln!();
    }
}
