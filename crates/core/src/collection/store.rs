//! In-memory movie collection with named sub-collections.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::{debug, info};

use super::query::MovieQuery;
use super::types::{sorted_by_title, CollectionStats, MovieIter};
use crate::config::{validate_config, Config, ConfigError};
use crate::error::CollectionError;
use crate::events::{create_event_channel, CollectionEvent, EventHandle, EventReceiver};
use crate::movie::{normalize_title, Movie};

/// The movie catalog.
///
/// Movies are stored once, keyed by normalized title. Named collections only
/// hold normalized titles; removing a movie from the catalog untags it from
/// every named collection in the same call.
#[derive(Debug, Default)]
pub struct MovieCollection {
    movies: HashMap<String, Movie>,
    named_collections: BTreeMap<String, HashSet<String>>,
    events: Option<EventHandle>,
}

impl MovieCollection {
    /// Create an empty collection that only logs its mutations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish mutation events through `handle`.
    pub fn with_events(mut self, handle: EventHandle) -> Self {
        self.events = Some(handle);
        self
    }

    /// Build a collection from configuration.
    ///
    /// The configuration is validated first, so an enabled event channel with
    /// `buffer_size = 0` is rejected. When events are enabled a fresh channel
    /// is created and its receiver is returned alongside the collection.
    pub fn from_config(config: &Config) -> Result<(Self, Option<EventReceiver>), ConfigError> {
        validate_config(config)?;

        if config.events.enabled {
            let (handle, receiver) = create_event_channel(config.events.buffer_size);
            Ok((Self::new().with_events(handle), Some(receiver)))
        } else {
            Ok((Self::new(), None))
        }
    }

    fn emit(&self, event: CollectionEvent) {
        if let Some(handle) = &self.events {
            handle.try_emit(event);
        }
    }

    /// Add a movie to the catalog.
    pub fn add(&mut self, movie: Movie) -> Result<(), CollectionError> {
        let key = movie.normalized_title();
        if self.movies.contains_key(&key) {
            return Err(CollectionError::MovieAlreadyExists(
                movie.title().to_string(),
            ));
        }

        let title = movie.title().to_string();
        self.movies.insert(key, movie);

        info!(title = %title, "Movie added");
        self.emit(CollectionEvent::MovieAdded { title });
        Ok(())
    }

    /// Remove a movie from the catalog and from every named collection.
    ///
    /// Returns the removed movie.
    pub fn remove(&mut self, title: &str) -> Result<Movie, CollectionError> {
        let key = normalize_title(title);
        let movie = self
            .movies
            .remove(&key)
            .ok_or_else(|| CollectionError::MovieNotFound(title.to_string()))?;

        let mut untagged_from = Vec::new();
        for (name, members) in self.named_collections.iter_mut() {
            if members.remove(&key) {
                untagged_from.push(name.clone());
            }
        }

        info!(
            title = %movie.title(),
            collections = untagged_from.len(),
            "Movie removed"
        );
        self.emit(CollectionEvent::MovieRemoved {
            title: movie.title().to_string(),
            collections: untagged_from,
        });
        Ok(movie)
    }

    /// Look up a movie by title, ignoring case and surrounding whitespace.
    pub fn get(&self, title: &str) -> Result<&Movie, CollectionError> {
        self.movies
            .get(&normalize_title(title))
            .ok_or_else(|| CollectionError::MovieNotFound(title.to_string()))
    }

    /// Check whether a movie with this title is in the catalog.
    pub fn contains(&self, title: &str) -> bool {
        self.movies.contains_key(&normalize_title(title))
    }

    /// Create an empty named collection. Names are case-sensitive.
    pub fn create_named_collection(&mut self, name: &str) -> Result<(), CollectionError> {
        if self.named_collections.contains_key(name) {
            return Err(CollectionError::CollectionAlreadyExists(name.to_string()));
        }
        self.named_collections
            .insert(name.to_string(), HashSet::new());

        info!(collection = %name, "Named collection created");
        self.emit(CollectionEvent::NamedCollectionCreated {
            name: name.to_string(),
        });
        Ok(())
    }

    /// Delete a named collection. The movies it referenced stay in the catalog.
    pub fn remove_named_collection(&mut self, name: &str) -> Result<(), CollectionError> {
        if self.named_collections.remove(name).is_none() {
            return Err(CollectionError::CollectionNotFound(name.to_string()));
        }

        info!(collection = %name, "Named collection removed");
        self.emit(CollectionEvent::NamedCollectionRemoved {
            name: name.to_string(),
        });
        Ok(())
    }

    /// Tag a catalog movie into a named collection.
    ///
    /// Tagging a movie that is already a member succeeds without change.
    pub fn add_to_named_collection(
        &mut self,
        title: &str,
        name: &str,
    ) -> Result<(), CollectionError> {
        let key = normalize_title(title);
        let movie_title = self
            .movies
            .get(&key)
            .map(|m| m.title().to_string())
            .ok_or_else(|| CollectionError::MovieNotFound(title.to_string()))?;
        let members = self
            .named_collections
            .get_mut(name)
            .ok_or_else(|| CollectionError::CollectionNotFound(name.to_string()))?;

        members.insert(key);

        info!(title = %movie_title, collection = %name, "Movie added to collection");
        self.emit(CollectionEvent::MovieTagged {
            title: movie_title,
            collection: name.to_string(),
        });
        Ok(())
    }

    /// Untag a movie from a named collection. The movie stays in the catalog.
    ///
    /// Returns `Ok(false)` when the movie was not a member; that case is not an
    /// error.
    pub fn remove_from_named_collection(
        &mut self,
        title: &str,
        name: &str,
    ) -> Result<bool, CollectionError> {
        let key = normalize_title(title);
        let members = self
            .named_collections
            .get_mut(name)
            .ok_or_else(|| CollectionError::CollectionNotFound(name.to_string()))?;

        if !members.remove(&key) {
            debug!(title = %title, collection = %name, "Movie not in collection");
            self.emit(CollectionEvent::MovieNotInCollection {
                title: title.to_string(),
                collection: name.to_string(),
            });
            return Ok(false);
        }

        let movie_title = self
            .movies
            .get(&key)
            .map(|m| m.title().to_string())
            .unwrap_or_else(|| title.to_string());

        info!(title = %movie_title, collection = %name, "Movie removed from collection");
        self.emit(CollectionEvent::MovieUntagged {
            title: movie_title,
            collection: name.to_string(),
        });
        Ok(true)
    }

    /// Movies tagged into a named collection, sorted by title.
    ///
    /// References to movies no longer in the catalog are skipped.
    pub fn list_in_named_collection(&self, name: &str) -> Result<Vec<&Movie>, CollectionError> {
        let members = self
            .named_collections
            .get(name)
            .ok_or_else(|| CollectionError::CollectionNotFound(name.to_string()))?;

        Ok(sorted_by_title(
            members.iter().filter_map(|key| self.movies.get(key)),
        ))
    }

    /// Search the catalog. Results are sorted by title.
    pub fn search(&self, query: &MovieQuery) -> Vec<&Movie> {
        let results = sorted_by_title(self.movies.values().filter(|m| query.matches(m)));
        debug!(?query, results = results.len(), "Search executed");
        results
    }

    /// Iterate over a sorted snapshot of the catalog.
    pub fn iter(&self) -> MovieIter<'_> {
        MovieIter::new(sorted_by_title(self.movies.values()))
    }

    /// Number of movies in the catalog.
    pub fn count(&self) -> usize {
        self.movies.len()
    }

    pub fn len(&self) -> usize {
        self.count()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Every movie, sorted by title.
    pub fn list_all(&self) -> Vec<&Movie> {
        sorted_by_title(self.movies.values())
    }

    /// Names of all named collections, sorted alphabetically.
    pub fn list_collection_names(&self) -> Vec<&str> {
        self.named_collections.keys().map(String::as_str).collect()
    }

    /// Catalog statistics.
    pub fn stats(&self) -> CollectionStats {
        let ratings: Vec<f64> = self.movies.values().filter_map(Movie::rating).collect();
        let average_rating = if ratings.is_empty() {
            None
        } else {
            Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
        };

        CollectionStats {
            total_movies: self.movies.len(),
            total_collections: self.named_collections.len(),
            rated_movies: ratings.len(),
            average_rating,
        }
    }
}

impl<'a> IntoIterator for &'a MovieCollection {
    type Item = &'a Movie;
    type IntoIter = MovieIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
