//! Browser console logging.

use chrono::Utc;
use shopfront_observability::{LogLevel, LogSink};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Sends each line to the matching `console` method.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, level: LogLevel, line: &str) {
        let value = JsValue::from_str(line);
        match level {
            LogLevel::Trace | LogLevel::Debug => console::debug_1(&value),
            LogLevel::Info => console::info_1(&value),
            LogLevel::Warn => console::warn_1(&value),
            LogLevel::Error => console::error_1(&value),
        }
    }
}

/// Session id for one page load.
pub fn session_id() -> String {
    format!("web-{:x}", Utc::now().timestamp_millis())
}
