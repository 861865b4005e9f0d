//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "classpass=error";

/// Log to stderr, filtered by `RUST_LOG` (default: errors only).
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::{Layer, Registry, filter::LevelFilter};

    #[test]
    fn default_filter_keeps_stderr_quiet() {
        let filter = EnvFilter::new(DEFAULT_FILTER);
        let hint = <EnvFilter as Layer<Registry>>::max_level_hint(&filter);
        assert_eq!(hint, Some(LevelFilter::ERROR));
    }
}
