use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Events published by a `MovieCollection` after each mutation.
///
/// Titles are the original (display) titles, not normalized keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CollectionEvent {
    MovieAdded {
        title: String,
    },
    /// Movie left the catalog and was untagged from these named collections.
    MovieRemoved {
        title: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        collections: Vec<String>,
    },
    NamedCollectionCreated {
        name: String,
    },
    NamedCollectionRemoved {
        name: String,
    },
    MovieTagged {
        title: String,
        collection: String,
    },
    MovieUntagged {
        title: String,
        collection: String,
    },
    /// Untagging was requested for a movie that was not in the collection.
    MovieNotInCollection {
        title: String,
        collection: String,
    },
}

impl CollectionEvent {
    /// Returns the event type as a string
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::MovieAdded { .. } => "movie_added",
            Self::MovieRemoved { .. } => "movie_removed",
            Self::NamedCollectionCreated { .. } => "named_collection_created",
            Self::NamedCollectionRemoved { .. } => "named_collection_removed",
            Self::MovieTagged { .. } => "movie_tagged",
            Self::MovieUntagged { .. } => "movie_untagged",
            Self::MovieNotInCollection { .. } => "movie_not_in_collection",
        }
    }

    /// Extract the named collection this event concerns, if any
    pub fn collection(&self) -> Option<&str> {
        match self {
            Self::NamedCollectionCreated { name } | Self::NamedCollectionRemoved { name } => {
                Some(name)
            }
            Self::MovieTagged { collection, .. }
            | Self::MovieUntagged { collection, .. }
            | Self::MovieNotInCollection { collection, .. } => Some(collection),
            _ => None,
        }
    }
}

impl fmt::Display for CollectionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MovieAdded { title } => write!(f, "Movie '{}' added.", title),
            Self::MovieRemoved { title, .. } => write!(
                f,
                "Movie '{}' removed from the catalog and all collections.",
                title
            ),
            Self::NamedCollectionCreated { name } => write!(f, "Collection '{}' created.", name),
            Self::NamedCollectionRemoved { name } => write!(f, "Collection '{}' removed.", name),
            Self::MovieTagged { title, collection } => {
                write!(f, "Movie '{}' added to collection '{}'.", title, collection)
            }
            Self::MovieUntagged { title, collection } => write!(
                f,
                "Movie '{}' removed from collection '{}'.",
                title, collection
            ),
            Self::MovieNotInCollection { title, collection } => {
                write!(f, "Movie '{}' is not in collection '{}'.", title, collection)
            }
        }
    }
}

/// Envelope wrapping a collection event with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub timestamp: DateTime<Utc>,
    pub event: CollectionEvent,
}
