//! Logging setup

use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

use crate::AppConfig;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the Calmspace crates log at the
/// configured level. Fails if a subscriber is already installed.
pub fn init_tracing(config: &AppConfig) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(config)))
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        storage = ?config.storage,
        "Logging initialized"
    );
    Ok(())
}

fn default_filter(config: &AppConfig) -> EnvFilter {
    let level = &config.log_level;
    EnvFilter::new(format!(
        "session={level},account_store={level},questionnaire={level}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_uses_level() {
        let config = AppConfig {
            log_level: "debug".to_string(),
            ..Default::default()
        };
        let filter = default_filter(&config).to_string();

        assert!(filter.contains("account_store=debug"));
        assert!(filter.contains("questionnaire=debug"));
    }
}
