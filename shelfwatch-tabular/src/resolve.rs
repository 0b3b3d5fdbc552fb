//! Alias-based column resolution.
//!
//! Source exports label the same field a dozen different ways ("Unit Cost",
//! "CURRENT PRICE", "cost_per_unit"). Each canonical field carries an ordered
//! alias list; resolution normalizes both sides and takes the first alias
//! with a match. Downstream code then addresses fields by canonical name only.

/// Normalize a header for comparison: lowercase, then keep only ASCII
/// letters and digits. `"Current Price"`, `"CURRENT PRICE"`, and
/// `"currentprice"` all normalize identically.
pub fn normalize_header(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Resolve the index of the first header matching any alias.
///
/// Aliases are tried in the caller-supplied priority order; the first alias
/// with a normalized match wins. When two headers normalize identically, the
/// earlier one in `headers` wins.
pub fn resolve_index(headers: &[String], aliases: &[&str]) -> Option<usize> {
    for alias in aliases {
        let want = normalize_header(alias);
        if let Some(idx) = headers.iter().position(|h| normalize_header(h) == want) {
            return Some(idx);
        }
    }
    None
}

/// Resolve the original header string matching any alias, or `None`.
///
/// Never fails; callers decide whether absence of a match is fatal.
pub fn resolve_column<'a>(headers: &'a [String], aliases: &[&str]) -> Option<&'a str> {
    resolve_index(headers, aliases).map(|idx| headers[idx].as_str())
}
