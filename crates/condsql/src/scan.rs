//! Quote-aware placeholder scanning.
//!
//! The scanner walks SQL text byte by byte and splits it at every bare `?`
//! marker. A `?` inside a `'...'`, `"..."` or `` `...` `` literal is text, not
//! a marker. Inside a literal, a backslash directly before the active quote
//! character escapes it; a doubled quote closes and reopens the literal, which
//! leaves the scan state unchanged.

use crate::dialect::Marker;
use crate::error::{Error, Result};

fn is_quote(b: u8) -> bool {
    matches!(b, b'\'' | b'"' | b'`')
}

/// Split `sql` around bare `?` markers.
///
/// Returns `markers + 1` segments, so joining them with `?` reproduces the
/// input exactly. An unterminated literal yields [`Error::MalformedSql`] with
/// the byte offset of its opening quote.
pub fn split_placeholders(sql: &str) -> Result<Vec<&str>> {
    let bytes = sql.as_bytes();
    let mut segments = Vec::new();
    let mut start = 0;
    // (quote byte, offset of the opening quote)
    let mut open: Option<(u8, usize)> = None;

    for (i, &b) in bytes.iter().enumerate() {
        match open {
            Some((quote, _)) => {
                if b == quote && !(i > 0 && bytes[i - 1] == b'\\') {
                    open = None;
                }
            }
            None if is_quote(b) => open = Some((b, i)),
            None if b == b'?' => {
                segments.push(&sql[start..i]);
                start = i + 1;
            }
            None => {}
        }
    }

    if let Some((_, offset)) = open {
        return Err(Error::MalformedSql { offset });
    }
    segments.push(&sql[start..]);
    Ok(segments)
}

/// Count bare `?` markers in `sql`.
pub fn count_placeholders(sql: &str) -> Result<usize> {
    Ok(split_placeholders(sql)?.len() - 1)
}

/// Rewrite bare `?` markers into the target marker scheme.
///
/// The Nth marker (1-based) becomes `prefix + N`. Quoted literals are copied
/// through untouched.
///
/// ```
/// use condsql::{convert_placeholder, Marker};
///
/// let sql = convert_placeholder("SELECT a, b FROM t WHERE a=? AND b=?", &Marker::prefix("$")).unwrap();
/// assert_eq!(sql, "SELECT a, b FROM t WHERE a=$1 AND b=$2");
/// ```
pub fn convert_placeholder(sql: &str, marker: &Marker) -> Result<String> {
    let segments = split_placeholders(sql)?;
    let mut out = String::with_capacity(sql.len() + segments.len() * 2);
    let last = segments.len() - 1;
    for (i, segment) in segments.into_iter().enumerate() {
        out.push_str(segment);
        if i < last {
            marker.write(i + 1, &mut out);
        }
    }
    Ok(out)
}
