//! Logging macros for ergonomic log message formatting.
//!
//! These macros take `format!`-style arguments, so the message is built with
//! Rust formatting rather than a runtime template. The message is only
//! formatted when the level passes the logger's gate.
//!
//! Every macro accepts an optional local context as `ctx = <expr>`. When the
//! first argument is a string literal, or `ctx = <expr>` followed by one, the
//! leveled macros log through the process-wide default logger.
//!
//! # Examples
//!
//! ```
//! use rust_logops::prelude::*;
//! use rust_logops::info;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::with_writer(sink.clone());
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // With a local context
//! let ctx = Context::from([("user", "ana")]);
//! info!(logger, ctx = ctx, "User {} performed action: {}", 42, "login");
//!
//! assert_eq!(sink.lines().len(), 3);
//! ```

/// Log a message at an explicit level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_logops::prelude::*;
/// # let logger = Logger::with_writer(MemorySink::new());
/// use rust_logops::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, ctx = $ctx:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = &$logger;
        let level: $crate::Level = $level;
        if logger.enabled(level) {
            let message = ::std::format!($($arg)+);
            logger.dispatch($crate::LogRecord::new(level, &message).with_context(&$ctx));
        }
    }};
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger: &$crate::Logger = &$logger;
        let level: $crate::Level = $level;
        if logger.enabled(level) {
            let message = ::std::format!($($arg)+);
            logger.dispatch($crate::LogRecord::new(level, &message));
        }
    }};
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_logops::prelude::*;
/// # let logger = Logger::with_writer(MemorySink::new());
/// use rust_logops::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    (ctx = $ctx:expr, $fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global::default_logger(), $crate::Level::Debug, ctx = $ctx, $fmt $($arg)*)
    };
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global::default_logger(), $crate::Level::Debug, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_logops::prelude::*;
/// # let logger = Logger::with_writer(MemorySink::new());
/// use rust_logops::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    (ctx = $ctx:expr, $fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global::default_logger(), $crate::Level::Info, ctx = $ctx, $fmt $($arg)*)
    };
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global::default_logger(), $crate::Level::Info, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_logops::prelude::*;
/// # let logger = Logger::with_writer(MemorySink::new());
/// use rust_logops::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    (ctx = $ctx:expr, $fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global::default_logger(), $crate::Level::Warn, ctx = $ctx, $fmt $($arg)*)
    };
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global::default_logger(), $crate::Level::Warn, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_logops::prelude::*;
/// # let logger = Logger::with_writer(MemorySink::new());
/// use rust_logops::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    (ctx = $ctx:expr, $fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global::default_logger(), $crate::Level::Error, ctx = $ctx, $fmt $($arg)*)
    };
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global::default_logger(), $crate::Level::Error, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a critical-level message, rendered as `FATAL`.
///
/// # Examples
///
/// ```
/// # use rust_logops::prelude::*;
/// # let logger = Logger::with_writer(MemorySink::new());
/// use rust_logops::critical;
/// critical!(logger, "Critical system failure");
/// critical!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! critical {
    (ctx = $ctx:expr, $fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global::default_logger(), $crate::Level::Critical, ctx = $ctx, $fmt $($arg)*)
    };
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::global::default_logger(), $crate::Level::Critical, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Critical, $($arg)+)
    };
}

/// Build a `[Param; N]` for the printf-style calls.
///
/// # Examples
///
/// ```
/// use rust_logops::{params, Param};
///
/// let args = params!["disk", 93.27, 3u8];
/// assert_eq!(args[0], Param::Str("disk".to_string()));
/// assert_eq!(args[2], Param::Uint(3));
/// ```
#[macro_export]
macro_rules! params {
    () => {{
        let empty: [$crate::Param; 0] = [];
        empty
    }};
    ($($x:expr),+ $(,)?) => {
        [$($crate::Param::from($x)),+]
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Context, Flags, Level, Logger, Param};
    use crate::sinks::MemorySink;
    use serde_json::Value;

    fn capture_logger() -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let logger = Logger::with_writer(sink.clone());
        logger.set_flags(Flags::empty());
        (logger, sink)
    }

    fn last_line(sink: &MemorySink) -> Value {
        let lines = sink.lines();
        serde_json::from_str(lines.last().unwrap()).unwrap()
    }

    #[test]
    fn test_log_macro() {
        let (logger, sink) = capture_logger();
        log!(logger, Level::Info, "Test message");
        log!(logger, Level::Info, "Formatted: {}", 42);

        assert_eq!(last_line(&sink)["msg"], "Formatted: 42");
    }

    #[test]
    fn test_leveled_macros() {
        let (logger, sink) = capture_logger();
        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        warn!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);
        critical!(logger, "Critical failure: {}", "system");

        let levels: Vec<String> = sink
            .lines()
            .iter()
            .map(|l| serde_json::from_str::<Value>(l).unwrap()["lvl"].to_string())
            .collect();
        assert_eq!(
            levels,
            ["\"DEBUG\"", "\"INFO\"", "\"WARN\"", "\"ERROR\"", "\"FATAL\""]
        );
    }

    #[test]
    fn test_macro_message_is_not_a_template() {
        let (logger, sink) = capture_logger();
        let raw = "100% %d";
        info!(logger, "{}", raw);
        assert_eq!(last_line(&sink)["msg"], "100% %d");
    }

    #[test]
    fn test_macro_with_context() {
        let (logger, sink) = capture_logger();
        let ctx = Context::from([("user", "ana")]);
        warn!(logger, ctx = ctx, "login from {}", "10.0.0.1");

        let line = last_line(&sink);
        assert_eq!(line["user"], "ana");
        assert_eq!(line["msg"], "login from 10.0.0.1");
    }

    #[test]
    fn test_gated_macro_skips_formatting() {
        struct Loud;
        impl std::fmt::Display for Loud {
            fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                panic!("formatted a gated-out message");
            }
        }

        let (logger, sink) = capture_logger();
        logger.set_level(Level::Error);
        debug!(logger, "{}", Loud);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_macro_call_site() {
        let (logger, sink) = capture_logger();
        logger.set_flags(Flags::SHORT_FILE);

        let expected = line!() + 1;
        info!(logger, "here");

        assert_eq!(
            last_line(&sink)["file"],
            format!("macros.rs.{}", expected)
        );
    }

    #[test]
    fn test_params_macro() {
        let args = params!["three", 3, 3.5, true];
        assert_eq!(
            args,
            [
                Param::Str("three".to_string()),
                Param::Int(3),
                Param::Float(3.5),
                Param::Bool(true)
            ]
        );
        assert!(params![].is_empty());
    }
}
