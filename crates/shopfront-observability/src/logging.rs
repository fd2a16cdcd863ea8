//! Structured logging with session context.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    Json,
    /// Human-readable format (for development).
    #[default]
    Human,
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Log level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// Browser session the entry belongs to.
    pub session_id: String,
    /// UI component that emitted the entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Per-logger sequence number, starting at 0.
    pub seq: u64,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: HashMap<String, serde_json::Value>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}] #{}", self.level, self.seq);

        if let Some(component) = &self.component {
            s.push_str(&format!(" {}:", component));
        }
        s.push(' ');
        s.push_str(&self.message);

        if !self.fields.is_empty() {
            let mut fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            fields.sort();
            s.push_str(" | ");
            s.push_str(&fields.join(" "));
        }

        s
    }
}

/// Where formatted log lines go.
pub trait LogSink: Send + Sync {
    fn write(&self, level: LogLevel, line: &str);
}

/// Writes every line to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write(&self, _level: LogLevel, line: &str) {
        eprintln!("{}", line);
    }
}

/// Keeps lines in memory; useful in tests.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

impl LogSink for MemorySink {
    fn write(&self, _level: LogLevel, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}

/// Structured logger with session context.
///
/// Cloning is cheap: clones share the sink and the sequence counter, and
/// `for_component` derives a logger tagged with a component name.
#[derive(Clone)]
pub struct StructuredLogger {
    session_id: String,
    component: Option<String>,
    min_level: LogLevel,
    format: LogFormat,
    sink: Arc<dyn LogSink>,
    seq: Arc<AtomicU64>,
}

impl fmt::Debug for StructuredLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructuredLogger")
            .field("session_id", &self.session_id)
            .field("component", &self.component)
            .field("min_level", &self.min_level)
            .field("format", &self.format)
            .finish()
    }
}

impl StructuredLogger {
    /// Create a new logger writing to stderr.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            component: None,
            min_level: LogLevel::Info,
            format: LogFormat::default(),
            sink: Arc::new(StderrSink),
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// A logger sharing this one's session, sink and counter.
    pub fn for_component(&self, component: impl Into<String>) -> Self {
        Self {
            component: Some(component.into()),
            ..self.clone()
        }
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Replace the sink.
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Log at debug level.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, HashMap::new());
    }

    /// Log at info level.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, HashMap::new());
    }

    /// Log at warn level.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, HashMap::new());
    }

    /// Log at error level.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, HashMap::new());
    }

    fn log(&self, level: LogLevel, message: &str, fields: HashMap<String, serde_json::Value>) {
        if level < self.min_level {
            return;
        }

        let entry = LogEntry {
            level,
            message: message.to_string(),
            session_id: self.session_id.clone(),
            component: self.component.clone(),
            seq: self.seq.fetch_add(1, Ordering::Relaxed),
            fields,
        };

        emit_tracing(&entry);

        let output = match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        };
        self.sink.write(level, &output);
    }

    /// Get the session ID.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}

fn emit_tracing(entry: &LogEntry) {
    let component = entry.component.as_deref().unwrap_or("-");
    match entry.level {
        LogLevel::Trace => tracing::trace!(session = %entry.session_id, component, seq = entry.seq, "{}", entry.message),
        LogLevel::Debug => tracing::debug!(session = %entry.session_id, component, seq = entry.seq, "{}", entry.message),
        LogLevel::Info => tracing::info!(session = %entry.session_id, component, seq = entry.seq, "{}", entry.message),
        LogLevel::Warn => tracing::warn!(session = %entry.session_id, component, seq = entry.seq, "{}", entry.message),
        LogLevel::Error => tracing::error!(session = %entry.session_id, component, seq = entry.seq, "{}", entry.message),
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: HashMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    /// Create a new log builder.
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: HashMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an integer field.
    pub fn field_u64(mut self, key: &str, value: u64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a boolean field.
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

impl StructuredLogger {
    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building a warn log entry.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    /// Start building a debug log entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }
}

/// Logging section of the app configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Minimum level, e.g. `"info"`.
    pub level: String,
    /// `"human"` or `"json"`.
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Human,
        }
    }
}

impl LogConfig {
    /// Build a logger for `session_id` writing to `sink`.
    ///
    /// An unknown level falls back to `Info`.
    pub fn build(&self, session_id: impl Into<String>, sink: Arc<dyn LogSink>) -> StructuredLogger {
        let level = self.level.parse().unwrap_or(LogLevel::Info);
        StructuredLogger::new(session_id)
            .with_min_level(level)
            .with_format(self.format)
            .with_sink(sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_logger() -> (StructuredLogger, MemorySink) {
        let sink = MemorySink::new();
        let logger = StructuredLogger::new("sess-1").with_sink(Arc::new(sink.clone()));
        (logger, sink)
    }

    #[test]
    fn test_level_filtering() {
        let (logger, sink) = memory_logger();
        logger.debug("hidden");
        logger.info("shown");
        logger.error("also shown");
        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("shown"));
        assert!(lines[1].starts_with("[ERROR]"));
    }

    #[test]
    fn test_human_format_with_component_and_fields() {
        let (logger, sink) = memory_logger();
        let cart_log = logger.for_component("cart");
        cart_log
            .info_builder("added to cart")
            .field("product_id", "B07JW9H4J1")
            .field_u64("entries", 3)
            .emit();
        assert_eq!(
            sink.lines()[0],
            "[INFO] #0 cart: added to cart | entries=3 product_id=\"B07JW9H4J1\""
        );
    }

    #[test]
    fn test_json_format() {
        let sink = MemorySink::new();
        let logger = StructuredLogger::new("sess-2")
            .with_format(LogFormat::Json)
            .with_sink(Arc::new(sink.clone()));
        logger.warn_builder("price excluded").field_bool("parsed", false).emit();

        let value: serde_json::Value = serde_json::from_str(&sink.lines()[0]).unwrap();
        assert_eq!(value["level"], "warn");
        assert_eq!(value["session_id"], "sess-2");
        assert_eq!(value["parsed"], false);
        assert!(value.get("component").is_none());
    }

    #[test]
    fn test_sequence_shared_across_components() {
        let (logger, sink) = memory_logger();
        logger.for_component("a").info("one");
        logger.for_component("b").info("two");
        logger.info("three");
        let lines = sink.lines();
        assert!(lines[0].contains("#0"));
        assert!(lines[1].contains("#1"));
        assert!(lines[2].contains("#2"));
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("WARN".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_config_build() {
        let sink = MemorySink::new();
        let config = LogConfig {
            level: "debug".to_string(),
            format: LogFormat::Human,
        };
        let logger = config.build("sess-3", Arc::new(sink.clone()));
        logger.debug("visible at debug");
        assert_eq!(sink.lines().len(), 1);

        let fallback = LogConfig {
            level: "nonsense".to_string(),
            ..LogConfig::default()
        }
        .build("sess-4", Arc::new(sink.clone()));
        fallback.debug("dropped");
        assert_eq!(sink.lines().len(), 1);
    }
}
