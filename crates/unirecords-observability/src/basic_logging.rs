use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter: the service crates at `level`, noisy dependencies at warn.
pub(crate) fn default_filter_directives(level: &str) -> String {
    format!(
        "unirecords={},tower_http=warn,hyper=warn,tonic=warn,h2=warn,sqlx=warn",
        level
    )
}

pub(crate) fn env_filter() -> EnvFilter {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter_directives(&log_level)))
}

/// Console logging used when observability is disabled.
///
/// `RUST_LOG` wins over `LOG_LEVEL` (default `info`).
pub fn init_basic_console_logging() {
    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(true)
        .with_filter(env_filter());

    tracing_subscriber::registry().with(console_layer).init();

    eprintln!(
        "ℹ️  Observability disabled - console logging only (OBSERVABILITY_ENABLED=false or feature not compiled)"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_directives_parse() {
        let directives = default_filter_directives("debug");
        assert!(directives.starts_with("unirecords=debug,"));
        assert!(EnvFilter::try_new(directives).is_ok());
    }
}
