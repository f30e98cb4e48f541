//! Target key location within a source document.
//!
//! The locator is a plain substring search: no parsing of the surrounding
//! HTML or script syntax happens here. The key literal is matched exactly as
//! supplied (including quote and colon punctuation), and the opening brace of
//! the payload is found by a forward search from the end of the match, so
//! whitespace or formatting between the key and the brace is tolerated.

use crate::error::{Error, Result};

/// Locate the opening brace of the JSON payload that follows `key`.
///
/// The first occurrence of `key` wins; the document is assumed to contain at
/// most one occurrence relevant to extraction.
///
/// # Arguments
/// * `document` - Full source text
/// * `key` - Exact key literal to search for (e.g., `"election2026":`)
///
/// # Returns
/// * `Ok(offset)` - Byte offset of the `{` that opens the payload
/// * `Err(Error::KeyNotFound)` - Key absent, or no `{` follows it
///
/// # Example
/// ```
/// use unembed::locate::locate;
///
/// let doc = r#"init({"config": {"a": 1}});"#;
/// let offset = locate(doc, "\"config\":").unwrap();
/// assert_eq!(&doc[offset..offset + 1], "{");
/// ```
pub fn locate(document: &str, key: &str) -> Result<usize> {
    let key_start = document
        .find(key)
        .ok_or_else(|| Error::KeyNotFound(key.to_string()))?;

    let after_key = key_start + key.len();
    let brace = document[after_key..]
        .find('{')
        // A key with no payload after it is the same terminal condition as a
        // missing key: there is nothing to extract.
        .ok_or_else(|| Error::KeyNotFound(key.to_string()))?;

    log::debug!(
        "located key {:?} at offset {}, payload opens at {}",
        key,
        key_start,
        after_key + brace
    );

    Ok(after_key + brace)
}
