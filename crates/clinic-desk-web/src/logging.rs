use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, WebConfig};

pub fn init_tracing(config: &WebConfig) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_new(config.log_filter.trim()).map_err(|e| ConfigError::Invalid {
        key: "CLINIC_DESK_LOG",
        message: e.to_string(),
    })?;

    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}
