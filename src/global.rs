//! Process-wide default logger
//!
//! The default [`Logger`] is created on first use (standard output, level
//! `All`, default flags) and lives until the process exits. It is never
//! replaced; reconfigure it through the setters below. Code that needs an
//! isolated configuration should construct its own `Logger`.
//!
//! # Example
//!
//! ```
//! use rust_logops::{global, params, Context, Level};
//!
//! global::set_level(Level::Info);
//! global::set_context(Context::from([("service", "billing")]));
//! global::infof("processed %d invoices", &params![12]);
//! ```

use crate::core::{Context, ErrorValue, Flags, Level, Logger, LoggerMetrics, Param};
use std::io::Write;
use std::sync::{Arc, OnceLock};

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, created on first call
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(Logger::new)
}

macro_rules! forward_leveled {
    ($plain:ident, $formatted:ident, $with_context:ident, $with_error:ident) => {
        #[track_caller]
        pub fn $plain(message: &str) {
            default_logger().$plain(message);
        }

        #[track_caller]
        pub fn $formatted(template: &str, params: &[Param]) {
            default_logger().$formatted(template, params);
        }

        #[track_caller]
        pub fn $with_context(context: &Context, template: &str, params: &[Param]) {
            default_logger().$with_context(context, template, params);
        }

        #[track_caller]
        pub fn $with_error(
            err: &dyn ErrorValue,
            context: Option<&Context>,
            template: &str,
            params: &[Param],
        ) {
            default_logger().$with_error(err, context, template, params);
        }
    };
}

forward_leveled!(debug, debugf, debug_c, debug_e);
forward_leveled!(info, infof, info_c, info_e);
forward_leveled!(warn, warnf, warn_c, warn_e);
forward_leveled!(error, errorf, error_c, error_e);
forward_leveled!(critical, criticalf, critical_c, critical_e);

pub fn set_level(level: Level) {
    default_logger().set_level(level);
}

pub fn level() -> Level {
    default_logger().level()
}

pub fn set_flags(flags: Flags) {
    default_logger().set_flags(flags);
}

pub fn add_flags(flags: Flags) {
    default_logger().add_flags(flags);
}

pub fn flags() -> Flags {
    default_logger().flags()
}

pub fn set_context(context: Context) {
    default_logger().set_context(context);
}

pub fn context() -> Arc<Context> {
    default_logger().context()
}

pub fn set_context_fn<F>(provider: F)
where
    F: Fn() -> Context + Send + Sync + 'static,
{
    default_logger().set_context_fn(provider);
}

pub fn clear_context_fn() {
    default_logger().clear_context_fn();
}

pub fn set_writer<W: Write + Send + 'static>(writer: W) {
    default_logger().set_writer(writer);
}

pub fn metrics() -> &'static LoggerMetrics {
    default_logger().metrics()
}
