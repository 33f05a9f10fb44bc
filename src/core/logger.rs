//! Main logger implementation
//!
//! Configuration fields are independently swappable while other threads log:
//! level and flags are atomics, the static context and the provider are
//! swapped as whole values through `arc-swap`, and the sink sits behind a
//! mutex held only for the single `write_all` of a finished line.

use super::{
    buffer_pool::global_pool,
    error::{LoggerError, Result},
    error_value::ErrorValue,
    flags::Flags,
    formatter::{ConfigSnapshot, Formatter},
    log_context::{Context, ContextFn},
    log_level::Level,
    log_record::LogRecord,
    metrics::LoggerMetrics,
    output_format::OutputFormat,
    param::Param,
};
use arc_swap::{ArcSwap, ArcSwapOption};
use chrono::Utc;
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicU32, AtomicU8, Ordering};
use std::sync::Arc;

/// Sink failures are reported on stderr for the first failure and then once
/// per this many failures
const FAILURE_REPORT_INTERVAL: u64 = 1000;

/// Generates the four leveled entry points for one level.
///
/// Every generated method is `#[track_caller]` so the record carries the
/// caller's line, not this file's.
macro_rules! leveled_methods {
    ($level:expr, $name:literal, $plain:ident, $formatted:ident, $with_context:ident, $with_error:ident) => {
        #[doc = concat!("Log `message` verbatim at ", $name, " level")]
        #[track_caller]
        pub fn $plain(&self, message: &str) {
            self.dispatch(LogRecord::new($level, message));
        }

        #[doc = concat!("Log at ", $name, " level, expanding `template` with `params`")]
        #[track_caller]
        pub fn $formatted(&self, template: &str, params: &[Param]) {
            self.dispatch(LogRecord::new($level, template).with_params(params));
        }

        #[doc = concat!("Log at ", $name, " level with a local context")]
        #[track_caller]
        pub fn $with_context(&self, context: &Context, template: &str, params: &[Param]) {
            self.dispatch(
                LogRecord::new($level, template)
                    .with_context(context)
                    .with_params(params),
            );
        }

        #[doc = concat!("Log at ", $name, " level with an attached error")]
        #[track_caller]
        pub fn $with_error(
            &self,
            err: &dyn ErrorValue,
            context: Option<&Context>,
            template: &str,
            params: &[Param],
        ) {
            let mut record = LogRecord::new($level, template)
                .with_params(params)
                .with_error(err);
            record.context = context;
            self.dispatch(record);
        }
    };
}

/// Structured logger writing one line per accepted record.
///
/// # Example
///
/// ```
/// use rust_logops::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::with_writer(sink.clone());
/// logger.set_level(Level::Info);
/// logger.set_flags(Flags::empty());
///
/// logger.debug("dropped");
/// logger.infof("%d y %d son %d", &params![2, 2, 4]);
///
/// assert_eq!(sink.lines().len(), 1);
/// assert!(sink.contents().contains(r#""msg":"2 y 2 son 4""#));
/// ```
pub struct Logger {
    level: AtomicU8,
    flags: AtomicU32,
    context: ArcSwap<Context>,
    context_fn: ArcSwapOption<ContextFn>,
    sink: Mutex<Box<dyn Write + Send>>,
    formatter: Formatter,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Logger writing to standard output with level `All` and default flags
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }

    #[must_use]
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            level: AtomicU8::new(Level::All.as_u8()),
            flags: AtomicU32::new(Flags::DEFAULTS.bits()),
            context: ArcSwap::from_pointee(Context::new()),
            context_fn: ArcSwapOption::empty(),
            sink: Mutex::new(Box::new(writer)),
            formatter: Formatter::new(OutputFormat::active()),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_logops::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .level(Level::Warn)
    ///     .flags(Flags::SHORT_FILE)
    ///     .context(Context::from([("service", "api")]))
    ///     .build();
    ///
    /// assert_eq!(logger.level(), Level::Warn);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn set_level(&self, level: Level) {
        self.level.store(level.as_u8(), Ordering::Relaxed);
    }

    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Whether a record at `level` would pass the level gate
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    pub fn set_flags(&self, flags: Flags) {
        self.flags.store(flags.bits(), Ordering::Relaxed);
    }

    /// OR `flags` into the active flags
    pub fn add_flags(&self, flags: Flags) {
        self.flags.fetch_or(flags.bits(), Ordering::Relaxed);
    }

    pub fn flags(&self) -> Flags {
        Flags::from_bits_truncate(self.flags.load(Ordering::Relaxed))
    }

    /// Replace the static context; an empty context disables it
    pub fn set_context(&self, context: Context) {
        self.context.store(Arc::new(context));
    }

    pub fn context(&self) -> Arc<Context> {
        self.context.load_full()
    }

    /// Install a provider evaluated on every accepted record
    pub fn set_context_fn<F>(&self, provider: F)
    where
        F: Fn() -> Context + Send + Sync + 'static,
    {
        self.context_fn.store(Some(Arc::new(ContextFn::new(provider))));
    }

    pub fn clear_context_fn(&self) {
        self.context_fn.store(None);
    }

    /// Redirect output; lines already being written finish on the old sink
    pub fn set_writer<W: Write + Send + 'static>(&self, writer: W) {
        *self.sink.lock() = Box::new(writer);
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn output_format(&self) -> OutputFormat {
        self.formatter.output_format()
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.lock().flush()?;
        Ok(())
    }

    /// Dispatch one record.
    ///
    /// Records below the configured level cost one atomic load: no buffer,
    /// no provider call, no call-site capture. Records at `All` or `None`
    /// pass the gate but are never written.
    pub fn log(&self, record: LogRecord<'_>) -> Result<()> {
        if !self.enabled(record.level) || !record.level.is_emittable() {
            return Ok(());
        }

        let config = self.snapshot();
        let mut buffer = global_pool().acquire();
        let outcome = self
            .formatter
            .format(&mut buffer, &record, &config, &Utc::now())?;
        if outcome.error_degraded {
            self.metrics.record_error_fallback();
        }

        let written = self.sink.lock().write_all(&buffer);
        match written {
            Ok(()) => {
                self.metrics.record_logged();
                Ok(())
            }
            Err(e) => {
                self.metrics.record_write_failure();
                Err(LoggerError::write(e))
            }
        }
    }

    fn snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            flags: self.flags(),
            context: self.context.load_full(),
            context_fn: self.context_fn.load_full(),
        }
    }

    /// Dispatch the way leveled calls do: a sink failure is counted and
    /// reported on stderr instead of returned
    pub fn dispatch(&self, record: LogRecord<'_>) {
        if let Err(e) = self.log(record) {
            let failures = self.metrics.write_failures();
            if failures <= 1 || failures % FAILURE_REPORT_INTERVAL == 0 {
                eprintln!("[LOGGER ERROR] {} ({} failed writes so far)", e, failures);
            }
        }
    }

    leveled_methods!(Level::Debug, "DEBUG", debug, debugf, debug_c, debug_e);
    leveled_methods!(Level::Info, "INFO", info, infof, info_c, info_e);
    leveled_methods!(Level::Warn, "WARN", warn, warnf, warn_c, warn_e);
    leveled_methods!(Level::Error, "ERROR", error, errorf, error_c, error_e);
    leveled_methods!(Level::Critical, "CRITICAL", critical, criticalf, critical_c, critical_e);
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("flags", &self.flags())
            .field("context", &self.context())
            .field("context_fn", &self.context_fn.load().is_some())
            .field("format", &self.output_format())
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_logops::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::builder()
///     .level(Level::Debug)
///     .context_fn(|| Context::from([("pid", std::process::id().to_string())]))
///     .writer(sink.clone())
///     .build();
///
/// logger.debug("started");
/// assert!(sink.contents().contains("\"pid\""));
/// ```
pub struct LoggerBuilder {
    level: Level,
    flags: Flags,
    context: Context,
    context_fn: Option<ContextFn>,
    writer: Option<Box<dyn Write + Send>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            level: Level::All,
            flags: Flags::DEFAULTS,
            context: Context::new(),
            context_fn: None,
            writer: None,
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the static context
    #[must_use = "builder methods return a new value"]
    pub fn context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Set the context provider
    #[must_use = "builder methods return a new value"]
    pub fn context_fn<F>(mut self, provider: F) -> Self
    where
        F: Fn() -> Context + Send + Sync + 'static,
    {
        self.context_fn = Some(ContextFn::new(provider));
        self
    }

    /// Set the sink; standard output when not called
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let logger = match self.writer {
            Some(writer) => Logger::with_writer(writer),
            None => Logger::new(),
        };

        logger.set_level(self.level);
        logger.set_flags(self.flags);
        logger.set_context(self.context);
        logger.context_fn.store(self.context_fn.map(Arc::new));

        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
