//! # unembed
//!
//! Extraction of embedded JSON configuration objects from loosely-structured
//! text such as HTML pages with inline script initialization calls.
//!
//! The library locates a named key inside raw text and recovers the complete
//! object literal that follows it with a brace-depth scan, so no HTML or
//! JavaScript parser is needed. The recovered substring is then validated by
//! a real JSON decode before anything is written out.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unembed::{extract_to_file, ExtractOptions};
//!
//! fn main() -> unembed::Result<()> {
//!     let options = ExtractOptions::new().with_key("\"election2026\":");
//!     let extraction = extract_to_file("page.html", "election_data.json", &options)?;
//!     println!("extracted {} entries", extraction.stats.entry_count);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **No document parser**: plain substring search plus depth counting
//! - **Validated output**: the span must decode as JSON before persisting
//! - **Canonical serialization**: 2-space indent, source key order, raw UTF-8
//! - **Quote-aware mode**: optionally skip braces inside string literals

pub mod error;
pub mod extract;
pub mod locate;
pub mod render;
pub mod scan;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extract::{
    extract_file, extract_str, extract_to_file, ExtractOptions, Extraction, ExtractionStats,
    DEFAULT_KEY, DEFAULT_SUMMARY_KEY,
};
pub use render::{to_json, JsonFormat};
pub use scan::{ScanMode, Span};

use std::path::Path;

/// Builder for configuring and running an extraction.
///
/// # Example
///
/// ```no_run
/// use unembed::Unembed;
///
/// let json = Unembed::new()
///     .with_key("\"election2026\":")
///     .quote_aware()
///     .extract("page.html")?
///     .to_json()?;
/// # Ok::<(), unembed::Error>(())
/// ```
pub struct Unembed {
    options: ExtractOptions,
}

impl Unembed {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: ExtractOptions::default(),
        }
    }

    /// Set the target key literal.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.options = self.options.with_key(key);
        self
    }

    /// Skip braces inside string literals while scanning.
    pub fn quote_aware(mut self) -> Self {
        self.options = self.options.quote_aware();
        self
    }

    /// Set the summary sub-mapping key.
    pub fn with_summary_key(mut self, key: impl Into<String>) -> Self {
        self.options = self.options.with_summary_key(key);
        self
    }

    /// Emit compact output instead of pretty-printed.
    pub fn compact(mut self) -> Self {
        self.options = self.options.compact();
        self
    }

    /// Extract from a file and return a result wrapper.
    pub fn extract<P: AsRef<Path>>(self, input: P) -> Result<UnembedResult> {
        let extraction = extract_file(input, &self.options)?;
        Ok(UnembedResult {
            extraction,
            format: self.options.format,
        })
    }

    /// Extract from in-memory text.
    pub fn extract_str(self, document: &str) -> Result<UnembedResult> {
        let extraction = extract_str(document, &self.options)?;
        Ok(UnembedResult {
            extraction,
            format: self.options.format,
        })
    }
}

impl Default for Unembed {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a builder-driven extraction.
pub struct UnembedResult {
    extraction: Extraction,
    format: JsonFormat,
}

impl UnembedResult {
    /// Serialize the payload using the configured format.
    pub fn to_json(&self) -> Result<String> {
        self.extraction.to_json(self.format)
    }

    /// Get the decoded payload.
    pub fn value(&self) -> &serde_json::Value {
        &self.extraction.value
    }

    /// Get the extraction statistics.
    pub fn stats(&self) -> &ExtractionStats {
        &self.extraction.stats
    }

    /// Get the full extraction.
    pub fn extraction(&self) -> &Extraction {
        &self.extraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unembed_builder() {
        let unembed = Unembed::new()
            .with_key("\"settings\":")
            .quote_aware()
            .compact();

        assert_eq!(unembed.options.key, "\"settings\":");
        assert_eq!(unembed.options.scan_mode, ScanMode::QuoteAware);
        assert_eq!(unembed.options.format, JsonFormat::Compact);
    }

    #[test]
    fn test_unembed_builder_default() {
        let builder = Unembed::default();
        assert_eq!(builder.options.key, DEFAULT_KEY);
        assert_eq!(builder.options.summary_key, DEFAULT_SUMMARY_KEY);
    }

    #[test]
    fn test_unembed_extract_str() {
        let doc = r#"init({"key": {"divisions": {"d1": []}}})"#;
        let result = Unembed::new().with_key("\"key\":").extract_str(doc).unwrap();

        assert_eq!(result.stats().entry_count, 1);
        assert!(result.value()["divisions"].is_object());
    }

    #[test]
    fn test_unembed_extract_str_compact_output() {
        let doc = r#""key": {"a": 1}"#;
        let result = Unembed::new()
            .with_key("\"key\":")
            .compact()
            .extract_str(doc)
            .unwrap();

        assert_eq!(result.to_json().unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn test_unembed_extract_str_missing_key() {
        let result = Unembed::new().with_key("\"key\":").extract_str("nothing here");
        assert!(matches!(result, Err(Error::KeyNotFound(_))));
    }
}
