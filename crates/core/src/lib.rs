pub mod collection;
pub mod config;
pub mod error;
pub mod events;
pub mod movie;
pub mod testing;

pub use collection::{CollectionStats, MovieCollection, MovieIter, MovieQuery};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, EventsConfig,
};
pub use error::CollectionError;
pub use events::{
    create_event_channel, CollectionEvent, EventEnvelope, EventHandle, EventReceiver,
};
pub use movie::{normalize_title, Movie};
