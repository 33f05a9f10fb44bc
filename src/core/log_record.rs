//! Per-call log record

use super::error_value::ErrorValue;
use super::log_context::Context;
use super::log_level::Level;
use super::param::Param;
use super::printf;
use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

/// One logging call, borrowed from the caller and consumed by a single dispatch.
///
/// # Example
///
/// ```
/// use rust_logops::{params, Context, Level, LogRecord, Logger, MemorySink};
///
/// let sink = MemorySink::new();
/// let logger = Logger::with_writer(sink.clone());
/// let ctx = Context::from([("request", "42")]);
/// let args = params![2, 2, 4];
///
/// let record = LogRecord::new(Level::Info, "%d y %d son %d")
///     .with_context(&ctx)
///     .with_params(&args);
/// logger.log(record).unwrap();
///
/// assert!(sink.contents().contains("2 y 2 son 4"));
/// ```
#[derive(Clone, Copy)]
pub struct LogRecord<'a> {
    pub level: Level,
    /// Highest-precedence fields, supplied per call
    pub context: Option<&'a Context>,
    /// Template; expanded only when `params` is non-empty
    pub message: &'a str,
    pub params: &'a [Param],
    pub error: Option<&'a dyn ErrorValue>,
    /// Line of the public API call that produced this record
    pub location: &'static Location<'static>,
}

impl<'a> LogRecord<'a> {
    #[track_caller]
    pub fn new(level: Level, message: &'a str) -> Self {
        Self {
            level,
            context: None,
            message,
            params: &[],
            error: None,
            location: Location::caller(),
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: &'a Context) -> Self {
        self.context = Some(context);
        self
    }

    #[must_use]
    pub fn with_params(mut self, params: &'a [Param]) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn with_error(mut self, error: &'a dyn ErrorValue) -> Self {
        self.error = Some(error);
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: &'static Location<'static>) -> Self {
        self.location = location;
        self
    }

    /// Final message text. Templates without params are never expanded,
    /// so a literal `%` in plain text survives untouched.
    pub fn render_message(&self) -> Cow<'a, str> {
        if self.params.is_empty() {
            Cow::Borrowed(self.message)
        } else {
            Cow::Owned(printf::sprintf(self.message, self.params))
        }
    }
}

impl fmt::Debug for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogRecord")
            .field("level", &self.level)
            .field("context", &self.context)
            .field("message", &self.message)
            .field("params", &self.params)
            .field("error", &self.error.map(|e| e.to_string()))
            .field("location", &self.location)
            .finish()
    }
}
