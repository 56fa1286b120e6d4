//! Collection lifecycle integration tests.
//!
//! These tests drive the public API the way a caller would:
//! - Lookup normalization across add/get/remove
//! - Named collections staying consistent with the catalog
//! - Multi-criteria search
//! - Events published for each mutation

use std::collections::HashSet;

use movieshelf_core::{
    create_event_channel, load_config_from_str, testing::fixtures, CollectionError,
    CollectionEvent, ConfigError, EventReceiver, Movie, MovieCollection, MovieQuery,
};

/// Test helper pairing a collection with the receiver of its events.
struct TestHarness {
    collection: MovieCollection,
    events: EventReceiver,
}

impl TestHarness {
    fn new() -> Self {
        let (handle, events) = create_event_channel(64);
        Self {
            collection: MovieCollection::new().with_events(handle),
            events,
        }
    }

    fn event_types(&mut self) -> Vec<&'static str> {
        self.events
            .drain()
            .into_iter()
            .map(|e| e.event.event_type())
            .collect()
    }
}

fn titles(movies: Vec<&Movie>) -> Vec<&str> {
    movies.into_iter().map(Movie::title).collect()
}

#[test]
fn test_get_with_any_casing_returns_same_entity() {
    let mut collection = MovieCollection::new();
    collection.add(fixtures::the_matrix()).unwrap();

    for variant in ["The Matrix", "the matrix", "THE MATRIX", "  tHe MaTrIx\t"] {
        let movie = collection.get(variant).unwrap();
        assert_eq!(movie, &fixtures::the_matrix());
        assert_eq!(movie.title(), "The Matrix");
    }
}

#[test]
fn test_duplicate_rejected_regardless_of_fields() {
    let mut collection = MovieCollection::new();
    collection.add(fixtures::inception()).unwrap();

    for dup in [
        Movie::new("INCEPTION", "Someone", 1950, "Western").unwrap(),
        Movie::new(" inception ", "Christopher Nolan", 2010, "Science Fiction")
            .unwrap()
            .with_rating(1.0),
    ] {
        assert!(matches!(
            collection.add(dup),
            Err(CollectionError::MovieAlreadyExists(_))
        ));
    }
    assert_eq!(collection.count(), 1);
}

#[test]
fn test_removed_movie_never_listed_in_named_collections() {
    let mut collection = fixtures::populated_collection();
    for name in ["Nolan", "Sci-Fi", "Favorites"] {
        collection.create_named_collection(name).unwrap();
    }
    collection.add_to_named_collection("Inception", "Nolan").unwrap();
    collection.add_to_named_collection("Interstellar", "Nolan").unwrap();
    collection.add_to_named_collection("Inception", "Sci-Fi").unwrap();
    collection.add_to_named_collection("The Matrix", "Sci-Fi").unwrap();
    collection.add_to_named_collection("inception", "Favorites").unwrap();

    collection.remove("Inception").unwrap();

    for name in collection.list_collection_names() {
        let listed = collection.list_in_named_collection(name).unwrap();
        assert!(listed.iter().all(|m| m.title() != "Inception"));
    }
    assert_eq!(
        titles(collection.list_in_named_collection("Nolan").unwrap()),
        vec!["Interstellar"]
    );
    assert_eq!(
        titles(collection.list_in_named_collection("Sci-Fi").unwrap()),
        vec!["The Matrix"]
    );
    assert!(collection
        .list_in_named_collection("Favorites")
        .unwrap()
        .is_empty());
}

#[test]
fn test_search_example_from_two_movies() {
    let mut collection = MovieCollection::new();
    collection.add(fixtures::the_matrix()).unwrap();
    collection.add(fixtures::inception()).unwrap();

    assert_eq!(
        titles(collection.search(&MovieQuery::new().with_min_rating(8.8))),
        vec!["Inception"]
    );
    assert_eq!(
        titles(collection.search(&MovieQuery::new().with_genre("sci"))),
        vec!["Inception", "The Matrix"]
    );
}

#[test]
fn test_search_multiple_criteria_is_intersection() {
    let collection = fixtures::populated_collection();

    let by_genre: HashSet<&str> = titles(collection.search(&MovieQuery::new().with_genre("science")))
        .into_iter()
        .collect();
    let by_rating: HashSet<&str> = titles(collection.search(&MovieQuery::new().with_min_rating(8.7)))
        .into_iter()
        .collect();
    let combined = titles(
        collection.search(&MovieQuery::new().with_genre("science").with_min_rating(8.7)),
    );

    let mut expected: Vec<&str> = by_genre.intersection(&by_rating).copied().collect();
    expected.sort();
    assert_eq!(combined, expected);
    assert_eq!(combined, vec!["Inception", "The Matrix"]);
}

#[test]
fn test_search_without_criteria_matches_list_all() {
    let collection = fixtures::populated_collection();
    assert_eq!(
        titles(collection.search(&MovieQuery::default())),
        titles(collection.list_all())
    );
}

#[test]
fn test_non_member_untag_is_not_an_error() {
    let mut harness = TestHarness::new();
    harness.collection.add(fixtures::heat()).unwrap();
    harness.collection.create_named_collection("Crime").unwrap();
    harness.events.drain();

    let removed = harness
        .collection
        .remove_from_named_collection("Heat", "Crime")
        .unwrap();
    assert!(!removed);

    let events = harness.events.drain();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].event,
        CollectionEvent::MovieNotInCollection {
            title: "Heat".to_string(),
            collection: "Crime".to_string(),
        }
    );
}

#[test]
fn test_each_successful_mutation_emits_one_event() {
    let mut harness = TestHarness::new();
    let collection = &mut harness.collection;

    collection.add(fixtures::heat()).unwrap();
    collection.add(fixtures::inception()).unwrap();
    collection.create_named_collection("Favorites").unwrap();
    collection.add_to_named_collection("heat", "Favorites").unwrap();
    collection.remove_from_named_collection("HEAT", "Favorites").unwrap();
    collection.add_to_named_collection("Inception", "Favorites").unwrap();
    collection.remove("inception").unwrap();
    collection.remove_named_collection("Favorites").unwrap();

    assert_eq!(
        harness.event_types(),
        vec![
            "movie_added",
            "movie_added",
            "named_collection_created",
            "movie_tagged",
            "movie_untagged",
            "movie_tagged",
            "movie_removed",
            "named_collection_removed",
        ]
    );
}

#[test]
fn test_failed_operations_emit_nothing() {
    let mut harness = TestHarness::new();
    harness.collection.add(fixtures::heat()).unwrap();
    harness.collection.create_named_collection("Crime").unwrap();
    harness.events.drain();

    let collection = &mut harness.collection;
    assert!(collection.add(fixtures::heat()).is_err());
    assert!(collection.remove("Ronin").is_err());
    assert!(collection.create_named_collection("Crime").is_err());
    assert!(collection.remove_named_collection("Drama").is_err());
    assert!(collection.add_to_named_collection("Ronin", "Crime").is_err());
    assert!(collection.add_to_named_collection("Heat", "Drama").is_err());
    assert!(collection.remove_from_named_collection("Heat", "Drama").is_err());
    assert!(collection.list_in_named_collection("Drama").is_err());

    assert!(harness.events.drain().is_empty());
}

#[test]
fn test_events_carry_original_titles() {
    let mut harness = TestHarness::new();
    harness.collection.add(fixtures::the_dark_knight()).unwrap();
    harness.collection.create_named_collection("Batman").unwrap();
    harness
        .collection
        .add_to_named_collection("the dark knight", "Batman")
        .unwrap();
    harness.collection.remove("THE DARK KNIGHT").unwrap();

    let events: Vec<CollectionEvent> = harness
        .events
        .drain()
        .into_iter()
        .map(|e| e.event)
        .collect();

    assert_eq!(
        events[2],
        CollectionEvent::MovieTagged {
            title: "The Dark Knight".to_string(),
            collection: "Batman".to_string(),
        }
    );
    assert_eq!(
        events[3],
        CollectionEvent::MovieRemoved {
            title: "The Dark Knight".to_string(),
            collections: vec!["Batman".to_string()],
        }
    );
    assert_eq!(
        events[3].to_string(),
        "Movie 'The Dark Knight' removed from the catalog and all collections."
    );
}

#[test]
fn test_collection_from_config() {
    let config = load_config_from_str(
        r#"
[events]
buffer_size = 8
"#,
    )
    .unwrap();
    let (mut collection, receiver) = MovieCollection::from_config(&config).unwrap();
    let mut receiver = receiver.expect("events enabled by default");

    collection.add(fixtures::heat()).unwrap();
    assert_eq!(receiver.drain().len(), 1);
}

#[test]
fn test_collection_from_config_without_events() {
    let config = load_config_from_str(
        r#"
[events]
enabled = false
"#,
    )
    .unwrap();

    let (mut collection, receiver) = MovieCollection::from_config(&config).unwrap();
    assert!(receiver.is_none());

    collection.add(fixtures::heat()).unwrap();
    assert_eq!(collection.count(), 1);
}

#[test]
fn test_collection_from_config_zero_buffer_rejected() {
    let config = load_config_from_str(
        r#"
[events]
enabled = true
buffer_size = 0
"#,
    )
    .unwrap();

    let result = MovieCollection::from_config(&config);
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn test_duplicate_error_names_incoming_title() {
    let mut collection = MovieCollection::new();
    collection.add(fixtures::inception()).unwrap();

    let err = collection
        .add(Movie::new("INCEPTION", "Someone", 1950, "Western").unwrap())
        .unwrap_err();
    assert_eq!(err, CollectionError::MovieAlreadyExists("INCEPTION".to_string()));
}

#[test]
fn test_movies_collapse_in_hash_set() {
    let set: HashSet<Movie> = [
        fixtures::inception(),
        Movie::new("INCEPTION", "x", 1, "y").unwrap(),
        Movie::new("inception", "z", 2, "w").unwrap(),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 1);
}
