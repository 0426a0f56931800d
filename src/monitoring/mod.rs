/*!
 * Monitoring
 * Tracing subscriber setup for guard lifecycle events
 */

mod tracer;

pub use tracer::{init_tracing, init_tracing_with, TraceConfig};
