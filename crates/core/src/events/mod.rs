//! Mutation events published by the catalog.
//!
//! Each successful mutation of a `MovieCollection` produces one
//! [`CollectionEvent`]. Presentation layers drain them from an
//! [`EventReceiver`] and decide how to show them.

mod handle;
mod types;

pub use handle::*;
pub use types::*;
