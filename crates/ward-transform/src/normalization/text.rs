//! Join-key normalization.

/// Strip leading and trailing whitespace from a join key.
///
/// Returns `None` when the value is already clean so callers can count
/// rewrites without comparing strings twice.
pub fn normalize_join_key(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
