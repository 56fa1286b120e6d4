//! The movie record.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::normalize_title;
use crate::error::CollectionError;

/// A single movie record.
///
/// Equality and hashing only look at the lowercased title.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "MovieRecord")]
pub struct Movie {
    title: String,
    director: String,
    year: i32,
    genre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    rating: Option<f64>,
}

impl Movie {
    /// Create a movie without a rating.
    ///
    /// Fails with [`CollectionError::InvalidMovie`] when the title is empty or
    /// only whitespace.
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
    ) -> Result<Self, CollectionError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CollectionError::InvalidMovie(
                "title cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            title,
            director: director.into(),
            year,
            genre: genre.into(),
            rating: None,
        })
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn rating(&self) -> Option<f64> {
        self.rating
    }

    /// The key this movie is stored under in a collection.
    pub fn normalized_title(&self) -> String {
        normalize_title(&self.title)
    }
}

/// Unvalidated wire shape; deserialization goes through [`Movie::new`].
#[derive(Deserialize)]
struct MovieRecord {
    title: String,
    director: String,
    year: i32,
    genre: String,
    #[serde(default)]
    rating: Option<f64>,
}

impl TryFrom<MovieRecord> for Movie {
    type Error = CollectionError;

    fn try_from(record: MovieRecord) -> Result<Self, Self::Error> {
        let mut movie = Movie::new(record.title, record.director, record.year, record.genre)?;
        movie.rating = record.rating;
        Ok(movie)
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.title.to_lowercase() == other.title.to_lowercase()
    }
}

impl Eq for Movie {}

impl Hash for Movie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.to_lowercase().hash(state);
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' ({}) - Dir: {}, Genre: {}",
            self.title, self.year, self.director, self.genre
        )?;
        if let Some(rating) = self.rating {
            write!(f, ", Rating: {:?}", rating)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rating = match self.rating {
            Some(r) => format!("{:?}", r),
            None => "None".to_string(),
        };
        write!(
            f,
            "Movie(title='{}', director='{}', year={}, genre='{}', rating={})",
            self.title, self.director, self.year, self.genre, rating
        )
    }
}
