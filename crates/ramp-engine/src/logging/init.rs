use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "ramp_engine=debug"). When unset, `RUST_LOG` is consulted, then
/// `default_level`.
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Warn,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Maps a `-v` count to a default level: warn, info, debug, then trace.
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        self.default_level = match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        self
    }

    /// Filter string the logger will be built with.
    pub fn resolved_filter(&self) -> String {
        self.env_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| self.default_level.to_string().to_lowercase())
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&config.resolved_filter());
        builder.write_style(config.write_style);
        builder.init();

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let config = LoggingConfig {
            env_filter: Some("ramp_engine=debug".into()),
            ..LoggingConfig::default()
        };
        assert_eq!(config.resolved_filter(), "ramp_engine=debug");
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(LoggingConfig::default().with_verbosity(0).default_level, log::LevelFilter::Warn);
        assert_eq!(LoggingConfig::default().with_verbosity(1).default_level, log::LevelFilter::Info);
        assert_eq!(LoggingConfig::default().with_verbosity(2).default_level, log::LevelFilter::Debug);
        assert_eq!(LoggingConfig::default().with_verbosity(9).default_level, log::LevelFilter::Trace);
    }
}
