//! Testing utilities shared by unit and integration tests.
//!
//! # Example
//!
//! ```rust
//! use movieshelf_core::testing::fixtures;
//!
//! let collection = fixtures::populated_collection();
//! assert_eq!(collection.count(), 5);
//! ```

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::collection::MovieCollection;
    use crate::movie::Movie;

    /// Create a rated test movie, panicking on an invalid title.
    pub fn movie(title: &str, director: &str, year: i32, genre: &str, rating: f64) -> Movie {
        Movie::new(title, director, year, genre)
            .expect("fixture title must not be empty")
            .with_rating(rating)
    }

    pub fn inception() -> Movie {
        movie("Inception", "Christopher Nolan", 2010, "Science Fiction", 8.8)
    }

    pub fn the_matrix() -> Movie {
        movie("The Matrix", "Lana Wachowski", 1999, "Science Fiction", 8.7)
    }

    pub fn the_dark_knight() -> Movie {
        movie("The Dark Knight", "Christopher Nolan", 2008, "Action", 9.0)
    }

    pub fn interstellar() -> Movie {
        movie("Interstellar", "Christopher Nolan", 2014, "Science Fiction", 8.6)
    }

    pub fn heat() -> Movie {
        movie("Heat", "Michael Mann", 1995, "Crime", 8.3)
    }

    /// A collection holding the five fixture movies and no named collections.
    pub fn populated_collection() -> MovieCollection {
        let mut collection = MovieCollection::new();
        for movie in [
            inception(),
            the_dark_knight(),
            interstellar(),
            heat(),
            the_matrix(),
        ] {
            collection
                .add(movie)
                .expect("fixture movies have distinct titles");
        }
        collection
    }
}
