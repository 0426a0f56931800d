/*!
 * Error Types
 * Guard and tracing-setup errors with thiserror and miette support
 */

use miette::Diagnostic;
use thiserror::Error;

/// Result type for guard operations
pub type GuardResult<T> = Result<T, GuardError>;

/// Errors that can occur while operating on an armed guard
///
/// Construction never fails at runtime: a callable that does not accept its
/// bound arguments is rejected by the compiler.
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum GuardError {
    #[error("{policy} guard already disarmed")]
    #[diagnostic(
        code(guard::already_disarmed),
        help("A guard can be disarmed at most once. Check is_armed() before disarming.")
    )]
    AlreadyDisarmed { policy: &'static str },
}

/// Errors raised while installing the tracing subscriber
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum TraceInitError {
    #[error("Invalid log filter '{filter}': {reason}")]
    #[diagnostic(
        code(tracing::invalid_filter),
        help("Use RUST_LOG-style directives, e.g. 'info' or 'scope_exit=trace'.")
    )]
    InvalidFilter { filter: String, reason: String },

    #[error("Global subscriber already installed: {0}")]
    #[diagnostic(
        code(tracing::already_initialized),
        help("init_tracing() should be called once per process.")
    )]
    AlreadyInitialized(String),
}
