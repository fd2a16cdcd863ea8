//! Ambient values provided by `App`.

use leptos::prelude::*;
use shopfront_observability::StructuredLogger;

use crate::config::AppConfig;

/// The app config, or defaults outside an `App`.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

/// A logger tagged with `component`.
pub fn use_logger(component: &str) -> StructuredLogger {
    use_context::<StructuredLogger>()
        .unwrap_or_else(|| StructuredLogger::new("detached"))
        .for_component(component)
}
