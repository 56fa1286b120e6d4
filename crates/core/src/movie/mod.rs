//! Movie entity model.
//!
//! A [`Movie`] is identified by its case-folded title: two movies whose titles
//! differ only in case are the same movie, whatever their other fields say.

mod types;

pub use types::Movie;

/// Normalize a title into the key used by the catalog.
///
/// Trims surrounding whitespace and lowercases. Every lookup and insert goes
/// through this function so that "  The Matrix " and "the matrix" address the
/// same entry.
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}
