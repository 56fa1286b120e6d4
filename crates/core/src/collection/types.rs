//! Types returned by the collection manager.

use serde::{Deserialize, Serialize};

use crate::movie::Movie;

/// Iterator over a sorted snapshot of a collection.
///
/// Created fresh by `MovieCollection::iter`; later mutations of the collection
/// are not reflected.
#[derive(Debug, Clone)]
pub struct MovieIter<'a> {
    inner: std::vec::IntoIter<&'a Movie>,
}

impl<'a> MovieIter<'a> {
    pub(crate) fn new(movies: Vec<&'a Movie>) -> Self {
        Self {
            inner: movies.into_iter(),
        }
    }
}

impl<'a> Iterator for MovieIter<'a> {
    type Item = &'a Movie;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for MovieIter<'_> {}

/// Collection statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionStats {
    /// Movies in the primary store.
    pub total_movies: usize,
    /// Named collections.
    pub total_collections: usize,
    /// Movies that carry a rating.
    pub rated_movies: usize,
    /// Mean rating across rated movies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
}

/// Sort movies by their original title (case-sensitive).
pub(crate) fn sorted_by_title<'a>(movies: impl Iterator<Item = &'a Movie>) -> Vec<&'a Movie> {
    let mut movies: Vec<&Movie> = movies.collect();
    movies.sort_by(|a, b| a.title().cmp(b.title()));
    movies
}
