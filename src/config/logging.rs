//! Logging configuration.

use super::parse::{env_opt, env_or, EnvSource};

/// Default filter when neither LOG_LEVEL nor RUST_LOG is set.
///
/// Kept at warn so probe runs only print their result lines.
pub const DEFAULT_LOG_FILTER: &str = "k8s_check=warn";

/// Output format for diagnostic logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines from tracing-subscriber's fmt layer.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Logging configuration loaded from environment.
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Log level filter (from LOG_LEVEL or RUST_LOG).
    pub filter: String,
    /// Output format (from LOG_FORMAT).
    pub format: LogFormat,
    /// Service name for structured logging.
    pub service_name: String,
}

impl LoggingConfig {
    /// Load configuration from environment variables.
    ///
    /// LOG_LEVEL accepts simple values: trace, debug, info, warn, error
    /// RUST_LOG accepts full tracing filter syntax: k8s_check=debug
    ///
    /// Never fails: a bad value must not change a check's outcome.
    pub fn from_env(env: &dyn EnvSource) -> Self {
        Self {
            filter: Self::resolve_log_filter(env),
            format: Self::resolve_log_format(env),
            service_name: env_or(env, "SERVICE_NAME", "k8s_check"),
        }
    }

    /// Unknown LOG_FORMAT values fall back to text.
    fn resolve_log_format(env: &dyn EnvSource) -> LogFormat {
        let Some(format) = env_opt(env, "LOG_FORMAT") else {
            return LogFormat::Text;
        };

        match format.to_lowercase().as_str() {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            _ => {
                eprintln!(
                    "Warning: Invalid LOG_FORMAT '{}', expected: text, json",
                    format
                );
                LogFormat::Text
            }
        }
    }

    /// Resolve log filter from environment.
    ///
    /// Priority: LOG_LEVEL > RUST_LOG > default
    fn resolve_log_filter(env: &dyn EnvSource) -> String {
        if let Some(level) = env_opt(env, "LOG_LEVEL") {
            let level = level.to_lowercase();
            match level.as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => {
                    return format!("k8s_check={}", level);
                }
                _ => {
                    // Tracing is not up yet, so this goes straight to stderr.
                    eprintln!(
                        "Warning: Invalid LOG_LEVEL '{}', expected: trace, debug, info, warn, error",
                        level
                    );
                }
            }
        }

        if let Some(filter) = env_opt(env, "RUST_LOG") {
            return filter;
        }

        DEFAULT_LOG_FILTER.to_string()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            format: LogFormat::Text,
            service_name: "k8s_check".to_string(),
        }
    }
}
