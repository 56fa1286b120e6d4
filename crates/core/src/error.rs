//! Errors raised by the movie catalog.

use thiserror::Error;

/// Errors for movie and collection operations.
///
/// Every variant carries the title or collection name the caller supplied,
/// so messages read back what was asked for rather than the normalized key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("Movie not found: {0}")]
    MovieNotFound(String),

    #[error("Movie already exists: {0}")]
    MovieAlreadyExists(String),

    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    #[error("Collection already exists: {0}")]
    CollectionAlreadyExists(String),

    #[error("Invalid movie: {0}")]
    InvalidMovie(String),
}
