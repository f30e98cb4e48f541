//! Boundary scanning for nested brace-delimited payloads.
//!
//! Given the offset of an opening brace, the scanner walks forward counting
//! nesting depth until the matching closing brace, yielding a [`Span`] that
//! covers exactly one complete object literal. This recovers a well-formed
//! JSON substring without parsing the enclosing script syntax at all.

use crate::error::{Error, Result};

/// A half-open byte range into a source document delimiting one payload.
///
/// Invariant: `start` points at the opening `{`, `end` is one past the
/// matching `}`, and brace depth within the range never returns to zero
/// before `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the opening brace.
    pub start: usize,
    /// Byte offset one past the matching closing brace.
    pub end: usize,
}

impl Span {
    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Borrow the delimited substring from the document. No copy is made.
    pub fn slice<'a>(&self, document: &'a str) -> &'a str {
        &document[self.start..self.end]
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// How the scanner treats braces inside quoted string literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Plain depth counter over every brace character. Blind to braces that
    /// occur inside JSON string values.
    #[default]
    BraceCount,
    /// Track double-quoted string literals (toggled on unescaped quotes) and
    /// ignore braces while inside one.
    QuoteAware,
}

/// Scan forward from an opening brace to the matching closing brace.
///
/// # Arguments
/// * `document` - Full source text
/// * `start` - Byte offset of the opening `{` (as returned by
///   [`locate`](crate::locate::locate))
/// * `mode` - Whether to skip braces inside string literals
///
/// # Returns
/// * `Ok(Span)` - Range covering the complete payload, closing brace included
/// * `Err(Error::Unbalanced)` - Document ended before depth returned to zero
///
/// Behavior is unspecified if `start` does not point at `{`; the locator
/// guarantees that precondition.
///
/// # Example
/// ```
/// use unembed::scan::{scan, ScanMode};
///
/// let doc = r#"init({"a": {"b": 1}}, "x");"#;
/// let span = scan(doc, 5, ScanMode::BraceCount).unwrap();
/// assert_eq!(span.slice(doc), r#"{"a": {"b": 1}}"#);
/// ```
pub fn scan(document: &str, start: usize, mode: ScanMode) -> Result<Span> {
    let mut depth: usize = 0;
    let mut in_string = false;
    let mut escaped = false;

    for (i, byte) in document.bytes().enumerate().skip(start) {
        if mode == ScanMode::QuoteAware {
            if escaped {
                escaped = false;
                continue;
            }
            match byte {
                b'\\' if in_string => {
                    escaped = true;
                    continue;
                }
                b'"' => {
                    in_string = !in_string;
                    continue;
                }
                _ if in_string => continue,
                _ => {}
            }
        }

        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(Span {
                        start,
                        end: i + 1,
                    });
                }
            }
            _ => {}
        }
    }

    Err(Error::Unbalanced { depth })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_flat_object() {
        let doc = r#"{"a": 1}"#;
        let span = scan(doc, 0, ScanMode::BraceCount).unwrap();
        assert_eq!(span, Span { start: 0, end: doc.len() });
        assert_eq!(span.slice(doc), doc);
    }

    #[test]
    fn test_scan_nested_object() {
        let doc = r#"foo("key": {"a": {"b": 1}}, "other": 2)"#;
        let span = scan(doc, 11, ScanMode::BraceCount).unwrap();
        assert_eq!(span.slice(doc), r#"{"a": {"b": 1}}"#);
    }

    #[test]
    fn test_scan_stops_at_first_balance_point() {
        let doc = r#"{"a": 1} {"b": 2}"#;
        let span = scan(doc, 0, ScanMode::BraceCount).unwrap();
        assert_eq!(span.slice(doc), r#"{"a": 1}"#);
    }

    #[test]
    fn test_scan_unbalanced() {
        let doc = r#"{1, {2"#;
        let result = scan(doc, 0, ScanMode::BraceCount);
        assert!(matches!(result, Err(Error::Unbalanced { depth: 2 })));
    }

    #[test]
    fn test_scan_depth_invariant() {
        let doc = r#"pre {"a": {"b": {}}, "c": {}} post"#;
        let start = doc.find('{').unwrap();
        let span = scan(doc, start, ScanMode::BraceCount).unwrap();

        // Depth stays positive throughout the span interior and lands on
        // zero exactly at the end.
        let mut depth = 0i64;
        for (i, b) in span.slice(doc).bytes().enumerate() {
            match b {
                b'{' => depth += 1,
                b'}' => depth -= 1,
                _ => {}
            }
            if i + 1 < span.len() {
                assert!(depth > 0);
            }
        }
        assert_eq!(depth, 0);
    }

    #[test]
    fn test_scan_brace_count_miscounts_brace_in_string() {
        // Documented limitation of the default mode: a closing brace inside
        // a string value terminates the scan early.
        let doc = r#"{"s": "}"}"#;
        let span = scan(doc, 0, ScanMode::BraceCount).unwrap();
        assert_eq!(span.slice(doc), r#"{"s": "}"#);
    }

    #[test]
    fn test_scan_quote_aware_ignores_brace_in_string() {
        let doc = r#"{"s": "}"}"#;
        let span = scan(doc, 0, ScanMode::QuoteAware).unwrap();
        assert_eq!(span.slice(doc), doc);
    }

    #[test]
    fn test_scan_quote_aware_escaped_quote() {
        let doc = r#"{"s": "a\"}b", "t": {}}"#;
        let span = scan(doc, 0, ScanMode::QuoteAware).unwrap();
        assert_eq!(span.slice(doc), doc);
    }

    #[test]
    fn test_scan_quote_aware_escaped_backslash() {
        // The backslash before the quote is itself escaped, so the quote
        // really does close the string.
        let doc = r#"{"s": "a\\", "t": {}}"#;
        let span = scan(doc, 0, ScanMode::QuoteAware).unwrap();
        assert_eq!(span.slice(doc), doc);
    }

    #[test]
    fn test_scan_quote_aware_unbalanced() {
        let doc = r#"{"open": "#;
        let result = scan(doc, 0, ScanMode::QuoteAware);
        assert!(matches!(result, Err(Error::Unbalanced { depth: 1 })));
    }

    #[test]
    fn test_scan_multibyte_content() {
        let doc = r#"{"division": "ঢাকা", "n": {"x": 1}}"#;
        let span = scan(doc, 0, ScanMode::BraceCount).unwrap();
        assert_eq!(span.slice(doc), doc);
    }

    #[test]
    fn test_span_display_and_len() {
        let span = Span { start: 4, end: 10 };
        assert_eq!(span.to_string(), "[4, 10)");
        assert_eq!(span.len(), 6);
        assert!(!span.is_empty());
    }
}
