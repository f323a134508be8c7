//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so that rendered forms and records on stdout stay clean.
//! The level comes from `-v` or the `PANELFORM_LOG_LEVEL` environment
//! variable; `RUST_LOG`-style directives in that variable are honoured too.

use tracing::Level;
use tracing_subscriber::{
    fmt::{self, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Environment variable holding the log level or filter directives
pub const LOG_LEVEL_ENV_VAR: &str = "PANELFORM_LOG_LEVEL";

/// Configuration for logging behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: Level,
    /// Extra filter directives, e.g. `panelform=trace,reqwest=debug`
    pub directives: Option<String>,
    pub with_timestamps: bool,
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            directives: None,
            with_timestamps: true,
            with_target: false,
        }
    }
}

impl LogConfig {
    /// Build from the verbose flag and an optional environment value
    pub fn resolve(verbose: bool, env_value: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(value) = env_value.map(str::trim).filter(|v| !v.is_empty()) {
            match parse_level(value) {
                Some(level) => config.level = level,
                None => config.directives = Some(value.to_string()),
            }
        }
        if verbose && config.level < Level::DEBUG {
            config.level = Level::DEBUG;
        }
        config
    }

    /// Read `PANELFORM_LOG_LEVEL` and combine it with the verbose flag
    pub fn from_env(verbose: bool) -> Self {
        let env_value = std::env::var(LOG_LEVEL_ENV_VAR).ok();
        Self::resolve(verbose, env_value.as_deref())
    }

    fn env_filter(&self) -> EnvFilter {
        let base = self.level.to_string().to_lowercase();
        let spec = match &self.directives {
            Some(directives) => format!("{base},{directives}"),
            None => base.clone(),
        };
        EnvFilter::try_new(&spec).unwrap_or_else(|e| {
            eprintln!("Ignoring invalid log filter '{spec}': {e}");
            EnvFilter::new(base)
        })
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(config: &LogConfig) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.with_target);

    let result = if config.with_timestamps {
        tracing_subscriber::registry()
            .with(config.env_filter())
            .with(layer.with_timer(ChronoLocal::rfc_3339()))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(config.env_filter())
            .with(layer.without_time())
            .try_init()
    };

    if result.is_ok() {
        tracing::debug!("Tracing initialized at {}", config.level);
    }
}
