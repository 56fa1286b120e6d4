//! Movie collection manager.
//!
//! [`MovieCollection`] owns the catalog, keeps named collections in sync with
//! it and answers multi-criteria searches described by a [`MovieQuery`].

mod query;
mod store;
mod types;

pub use query::MovieQuery;
pub use store::MovieCollection;
pub use types::{CollectionStats, MovieIter};
