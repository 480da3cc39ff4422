//! Free-text predicates underneath the matching rules.
//!
//! StudioMate matches on messy free-text fields (locations, eligibility
//! blurbs, comma-separated medium lists), so every rule reduces to
//! case-insensitive substring containment over those fields. Keeping the
//! predicates here lets the scoring rules read as a point table.

/// Case-insensitive substring containment
#[inline]
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Present-and-non-empty accessor for optional text fields
///
/// Profile fields saved as empty strings count as absent.
#[inline]
pub fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Tokenize a comma-separated list: lowercase, trim, drop empty tokens
pub fn list_tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}
