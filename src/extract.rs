//! Extraction pipeline: locate, scan, decode, and persist.
//!
//! This module wires the [`locate`](crate::locate::locate) and
//! [`scan`](crate::scan::scan) stages together and adds the thin glue around
//! them: JSON decoding of the delimited span, a summary statistic for
//! operator visibility, and writing the canonical serialization to disk.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::locate::locate;
use crate::render::{to_json, JsonFormat};
use crate::scan::{scan, ScanMode, Span};

/// Default target key, matching the inline `Drupal.settings` payload the
/// tool was built to migrate.
pub const DEFAULT_KEY: &str = "\"election2026\":";

/// Default sub-mapping whose entry count is reported after extraction.
pub const DEFAULT_SUMMARY_KEY: &str = "divisions";

/// Options for extracting an embedded payload.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Exact key literal that precedes the payload, including quote and
    /// colon punctuation.
    pub key: String,

    /// How the boundary scanner treats braces inside string literals.
    pub scan_mode: ScanMode,

    /// Top-level sub-mapping counted for the extraction summary.
    pub summary_key: String,

    /// Output serialization format.
    pub format: JsonFormat,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target key literal.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Set the scan mode.
    pub fn with_scan_mode(mut self, mode: ScanMode) -> Self {
        self.scan_mode = mode;
        self
    }

    /// Skip braces inside string literals while scanning.
    pub fn quote_aware(mut self) -> Self {
        self.scan_mode = ScanMode::QuoteAware;
        self
    }

    /// Set the summary sub-mapping key.
    pub fn with_summary_key(mut self, key: impl Into<String>) -> Self {
        self.summary_key = key.into();
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }

    /// Emit compact output instead of pretty-printed.
    pub fn compact(mut self) -> Self {
        self.format = JsonFormat::Compact;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            key: DEFAULT_KEY.to_string(),
            scan_mode: ScanMode::default(),
            summary_key: DEFAULT_SUMMARY_KEY.to_string(),
            format: JsonFormat::default(),
        }
    }
}

/// Statistics collected during extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Number of entries in the summary sub-mapping (0 when absent).
    pub entry_count: usize,

    /// Byte offset where the payload opens in the source document.
    pub payload_start: usize,

    /// Byte offset one past the payload's closing brace.
    pub payload_end: usize,

    /// Payload length in bytes.
    pub payload_len: usize,
}

impl ExtractionStats {
    fn collect(value: &Value, span: Span, summary_key: &str) -> Self {
        // Absence of the summary mapping is informational, not an error.
        let entry_count = value
            .get(summary_key)
            .and_then(Value::as_object)
            .map(|m| m.len())
            .unwrap_or(0);

        Self {
            entry_count,
            payload_start: span.start,
            payload_end: span.end,
            payload_len: span.len(),
        }
    }
}

/// Result of a successful extraction.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// The decoded payload. Owned; no further relationship to the source
    /// document.
    pub value: Value,

    /// Where the payload sat in the source document.
    pub span: Span,

    /// Extraction statistics.
    pub stats: ExtractionStats,
}

impl Extraction {
    /// Serialize the payload in the given format.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        to_json(&self.value, format)
    }
}

/// Extract and decode the payload embedded in `document`.
///
/// Pure pipeline over in-memory text; no I/O.
///
/// # Example
/// ```
/// use unembed::{extract_str, ExtractOptions};
///
/// let doc = r#"foo("key": {"a": {"b": 1}}, "other": 2)"#;
/// let options = ExtractOptions::new().with_key("\"key\":");
/// let extraction = extract_str(doc, &options).unwrap();
/// assert_eq!(extraction.value["a"]["b"], 1);
/// ```
pub fn extract_str(document: &str, options: &ExtractOptions) -> Result<Extraction> {
    let start = locate(document, &options.key)?;
    let span = scan(document, start, options.scan_mode)?;
    let payload = span.slice(document);

    let value: Value =
        serde_json::from_str(payload).map_err(|e| Error::decode(e, payload))?;

    let stats = ExtractionStats::collect(&value, span, &options.summary_key);
    log::debug!(
        "extracted payload {} ({} bytes, {} summary entries)",
        span,
        stats.payload_len,
        stats.entry_count
    );

    Ok(Extraction { value, span, stats })
}

/// Read a source document from `input` and extract its payload.
///
/// The document is read into memory once and discarded when this returns.
pub fn extract_file<P: AsRef<Path>>(input: P, options: &ExtractOptions) -> Result<Extraction> {
    let content = fs::read_to_string(input)?;
    extract_str(&content, options)
}

/// Full migration: read `input`, extract the payload, and write its
/// canonical serialization to `output`.
///
/// The output file is only touched after the payload has fully decoded;
/// on any failure the destination keeps its prior content.
///
/// # Example
/// ```no_run
/// use unembed::{extract_to_file, ExtractOptions};
///
/// let extraction = extract_to_file("page.html", "config.json", &ExtractOptions::new())?;
/// println!("entries: {}", extraction.stats.entry_count);
/// # Ok::<(), unembed::Error>(())
/// ```
pub fn extract_to_file<P, Q>(input: P, output: Q, options: &ExtractOptions) -> Result<Extraction>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let extraction = extract_file(input, options)?;
    let serialized = extraction.to_json(options.format)?;
    fs::write(output, serialized)?;
    Ok(extraction)
}
