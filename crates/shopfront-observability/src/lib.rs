//! Observability for the Shopfront storefront.
//!
//! - `StructuredLogger` - structured logging with session context
//! - `LogSink` - pluggable output (stderr, memory, browser console)
//! - `LogConfig` - logging section of the app configuration
//!
//! Every entry is also emitted as a `tracing` event.

mod logging;

pub use logging::*;
