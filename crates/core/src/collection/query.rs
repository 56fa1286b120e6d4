//! Search criteria for the catalog.

use serde::{Deserialize, Serialize};

use crate::movie::Movie;

/// Filter for searching movies.
///
/// Every criterion is optional and the ones that are set are combined with AND.
/// Text criteria match case-insensitively as substrings, `year` must match
/// exactly and `min_rating` only matches rated movies at or above the threshold.
/// A set criterion always filters, including `Some(0)` years and `Some(0.0)`
/// thresholds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
}

impl MovieQuery {
    /// Create a query that matches every movie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by title substring.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Filter by director substring.
    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    /// Filter by exact release year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Filter by genre substring.
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Only keep rated movies with a rating of at least `min_rating`.
    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.director.is_none()
            && self.year.is_none()
            && self.genre.is_none()
            && self.min_rating.is_none()
    }

    /// Check a single movie against every set criterion.
    pub fn matches(&self, movie: &Movie) -> bool {
        if let Some(title) = &self.title {
            if !contains_ignore_case(movie.title(), title) {
                return false;
            }
        }
        if let Some(director) = &self.director {
            if !contains_ignore_case(movie.director(), director) {
                return false;
            }
        }
        if let Some(year) = self.year {
            if movie.year() != year {
                return false;
            }
        }
        if let Some(genre) = &self.genre {
            if !contains_ignore_case(movie.genre(), genre) {
                return false;
            }
        }
        if let Some(min_rating) = self.min_rating {
            match movie.rating() {
                Some(rating) if rating >= min_rating => {}
                _ => return false,
            }
        }
        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heat() -> Movie {
        Movie::new("Heat", "Michael Mann", 1995, "Crime Thriller")
            .unwrap()
            .with_rating(8.3)
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let query = MovieQuery::new();
        assert!(query.is_empty());
        assert!(query.matches(&heat()));
    }

    #[test]
    fn test_text_criteria_are_case_insensitive_substrings() {
        assert!(MovieQuery::new().with_title("HEA").matches(&heat()));
        assert!(MovieQuery::new().with_director("mann").matches(&heat()));
        assert!(MovieQuery::new().with_genre("thrill").matches(&heat()));
        assert!(!MovieQuery::new().with_genre("comedy").matches(&heat()));
    }

    #[test]
    fn test_empty_text_criterion_matches() {
        let query = MovieQuery::new().with_title("");
        assert!(!query.is_empty());
        assert!(query.matches(&heat()));
    }

    #[test]
    fn test_year_is_exact() {
        assert!(MovieQuery::new().with_year(1995).matches(&heat()));
        assert!(!MovieQuery::new().with_year(1996).matches(&heat()));
    }

    #[test]
    fn test_year_zero_is_a_filter() {
        assert!(!MovieQuery::new().with_year(0).matches(&heat()));
    }

    #[test]
    fn test_min_rating_threshold_is_inclusive() {
        assert!(MovieQuery::new().with_min_rating(8.3).matches(&heat()));
        assert!(!MovieQuery::new().with_min_rating(8.4).matches(&heat()));
    }

    #[test]
    fn test_min_rating_zero_excludes_unrated() {
        let unrated = Movie::new("Ronin", "John Frankenheimer", 1998, "Action").unwrap();
        let query = MovieQuery::new().with_min_rating(0.0);
        assert!(!query.matches(&unrated));
        assert!(query.matches(&heat()));
    }

    #[test]
    fn test_criteria_are_combined_with_and() {
        let query = MovieQuery::new().with_director("mann").with_year(1995);
        assert!(query.matches(&heat()));

        let query = MovieQuery::new().with_director("mann").with_year(2004);
        assert!(!query.matches(&heat()));
    }

    #[test]
    fn test_query_deserialize_partial() {
        let query: MovieQuery = serde_json::from_str(r#"{"genre": "sci", "min_rating": 8.0}"#).unwrap();
        assert_eq!(query.genre.as_deref(), Some("sci"));
        assert_eq!(query.min_rating, Some(8.0));
        assert!(query.title.is_none());
    }
}
