use anyhow::Result;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over `log_level`. JSON lines are emitted when
/// `ENVIRONMENT=production`, a pretty console format otherwise.
pub fn init_observability(service_name: &str, service_version: &str, log_level: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let is_production = std::env::var("ENVIRONMENT")
        .map(|env| env == "production")
        .unwrap_or(false);

    if is_production {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_filter(env_filter))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true)
                    .with_filter(env_filter),
            )
            .try_init()?;
    }

    tracing::info!(
        service.name = service_name,
        service.version = service_version,
        "Observability initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observability_init_once() {
        let result = init_observability("test-service", "0.1.0", "debug");
        assert!(
            result.is_ok(),
            "Observability init should succeed: {:?}",
            result.err()
        );

        // a global subscriber is already installed
        assert!(init_observability("test-service", "0.1.0", "debug").is_err());
    }
}
