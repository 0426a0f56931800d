/*!
 * Limits and Constants
 *
 * Compile-time limits and environment variable names used across the crate.
 */

// =============================================================================
// ACTION LIMITS
// =============================================================================

/// Maximum number of arguments an action can bind (tuple arity)
/// Must match the highest arity passed to `impl_invoke!` in the action module
pub const MAX_BOUND_ARGS: usize = 8;

// =============================================================================
// TRACING CONFIGURATION
// =============================================================================

/// Environment variable holding the tracing filter directives
pub const ENV_LOG_FILTER: &str = "RUST_LOG";

/// Environment variable selecting JSON trace output ("1" or "true")
pub const ENV_TRACE_JSON: &str = "SCOPE_EXIT_TRACE_JSON";

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
