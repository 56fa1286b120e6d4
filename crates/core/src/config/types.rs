use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub events: EventsConfig,
}

/// Event channel configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventsConfig {
    /// Publish mutation events (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Capacity of the event channel; events beyond it are dropped (default: 256)
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            buffer_size: default_buffer_size(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_buffer_size() -> usize {
    256
}
