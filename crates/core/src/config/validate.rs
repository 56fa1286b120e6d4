use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Event buffer size is not 0 when events are enabled
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.events.enabled && config.events.buffer_size == 0 {
        return Err(ConfigError::ValidationError(
            "events.buffer_size cannot be 0 when events are enabled".to_string(),
        ));
    }

    Ok(())
}
