/*!
 * Tracing Setup
 * Structured logging for guard lifecycle events using the tracing crate
 *
 * Guards emit at `trace` level (armed, disarmed, torn down) and at `debug`
 * level when an action runs during an unwind. Nothing is printed unless a
 * subscriber is installed, either by the host application or through
 * `init_tracing`.
 */

use crate::core::errors::TraceInitError;
use crate::core::limits::{DEFAULT_LOG_FILTER, ENV_LOG_FILTER, ENV_TRACE_JSON};
use tracing::info;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Subscriber configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceConfig {
    /// `RUST_LOG`-style filter directives
    pub filter: String,
    /// Emit JSON lines instead of compact text
    pub json: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}

impl TraceConfig {
    /// Read configuration from the environment
    ///
    /// Environment variables:
    /// - RUST_LOG: Set log level (default: info)
    /// - SCOPE_EXIT_TRACE_JSON: Enable JSON output (default: false)
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(ENV_LOG_FILTER).ok(),
            std::env::var(ENV_TRACE_JSON).ok(),
        )
    }

    fn from_vars(filter: Option<String>, json: Option<String>) -> Self {
        let filter = filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let json = json
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self { filter, json }
    }

    /// Builder-style filter override
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Builder-style output format override
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

/// Initialize structured tracing from the environment
///
/// Returns `Err` if a global subscriber is already installed or `RUST_LOG`
/// cannot be parsed.
pub fn init_tracing() -> Result<(), TraceInitError> {
    init_tracing_with(TraceConfig::from_env())
}

/// Initialize structured tracing with explicit configuration
pub fn init_tracing_with(config: TraceConfig) -> Result<(), TraceInitError> {
    let env_filter =
        EnvFilter::try_new(&config.filter).map_err(|e| TraceInitError::InvalidFilter {
            filter: config.filter.clone(),
            reason: e.to_string(),
        })?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if config.json {
        // JSON output for production/parsing
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
    } else {
        // Human-readable output for development
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()
    };

    installed.map_err(|e| TraceInitError::AlreadyInitialized(e.to_string()))?;
    info!(json = config.json, filter = %config.filter, "Structured tracing initialized");
    Ok(())
}
