//! # Rust Logops
//!
//! A structured logging engine. Each accepted call becomes exactly one line,
//! either newline-delimited JSON or human-readable text, carrying merged
//! static, dynamic and per-call context plus an optional error value.
//!
//! ## Features
//!
//! - **Level gating**: records below the configured level cost one atomic load
//! - **Context merging**: local context beats the provider, which beats the static context
//! - **Structured errors**: errors serialize as JSON, falling back to text
//! - **Thread safe**: every setter may run concurrently with logging
//!
//! ## Example
//!
//! ```
//! use rust_logops::prelude::*;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::with_writer(sink.clone());
//! logger.set_level(Level::Info);
//! logger.set_context(Context::from([("service", "billing")]));
//!
//! logger.info_c(&Context::from([("invoice", "7")]), "charged %s", &params!["ana"]);
//! assert!(sink.contents().contains(r#""invoice":"7""#));
//! ```
//!
//! The output profile is chosen once per process from `LOGOPS_FORMAT`
//! (`dev` for text, JSON otherwise).

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub use crate::core::printf;

pub mod prelude {
    pub use crate::core::{
        Context, ContextFn, ErrorValue, Flags, Level, LogRecord, Logger, LoggerBuilder,
        LoggerError, LoggerMetrics, OutputFormat, Param, Plain, Result, Structured,
    };
    pub use crate::params;
    pub use crate::sinks::{FileSink, MemorySink};
}

pub use crate::core::{
    CallSite, ConfigSnapshot, Context, ContextFn, ErrorValue, Flags, FormatOutcome, Formatter,
    Level, LogRecord, Logger, LoggerBuilder, LoggerError, LoggerMetrics, OutputFormat, Param,
    Plain, RenderedError, Result, Structured, TimestampFormat, FORMAT_ENV_VAR,
};
pub use crate::global::default_logger;
pub use crate::sinks::{FileSink, MemorySink};
