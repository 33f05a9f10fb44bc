//! Call-site introspection
//!
//! Every public logging entry point is `#[track_caller]`, so the
//! [`Location`] recorded with a [`LogRecord`](super::LogRecord) is the line
//! that called the public API, never an internal helper. Adding a wrapper
//! around the public API without `#[track_caller]` silently moves the
//! reported site into the wrapper; the call-site tests in `logger.rs`,
//! `global.rs` and `macros.rs` pin every entry point.
//!
//! The function name is not part of a `Location`. It is resolved on demand,
//! only when [`Flags::METHOD`] is active, by walking the stack and taking the
//! first symbol outside this crate and the runtime. Symbol names survive
//! builds without line tables, so release binaries report real names too.

use super::flags::Flags;
use std::panic::Location;

/// Rendered when no symbol outside the logging call resolves
pub const UNKNOWN_FUNCTION: &str = "unknown";

/// Call-site annotations for one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    /// `<path>.<line>`, path shortened per flags; `None` when no file flag
    pub file: Option<String>,
    /// Fully qualified function name; `None` when `METHOD` is off
    pub function: Option<String>,
}

/// Build the annotations requested by `flags` for `location`
pub fn capture(location: &'static Location<'static>, flags: Flags) -> CallSite {
    if !flags.wants_call_site() {
        return CallSite {
            file: None,
            function: None,
        };
    }

    let file = flags.wants_file().then(|| {
        let path = if flags.contains(Flags::SHORT_FILE) {
            short_file(location.file())
        } else {
            location.file()
        };
        format!("{}.{}", path, location.line())
    });

    let function = flags.contains(Flags::METHOD).then(function_name);

    CallSite { file, function }
}

/// Last path segment of `path`
pub fn short_file(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Symbol prefixes of the stack walker and the standard library
const RUNTIME_PREFIXES: [&str; 5] = ["backtrace::", "std::", "core::", "alloc::", "__rust"];

const CRATE_PREFIX: &str = concat!(env!("CARGO_CRATE_NAME"), "::");

/// Fully qualified name of the innermost function outside the logging call
pub fn function_name() -> String {
    let mut found: Option<String> = None;
    backtrace::trace(|frame| {
        // inlined callees are reported before the function they were inlined into
        backtrace::resolve_frame(frame, |symbol| {
            if found.is_some() {
                return;
            }
            if let Some(name) = symbol.name() {
                let name = format!("{:#}", name);
                if !is_logging_frame(&name) {
                    found = Some(name);
                }
            }
        });
        found.is_none()
    });
    found.unwrap_or_else(|| UNKNOWN_FUNCTION.to_string())
}

/// Whether `symbol` belongs to the stack walker, the runtime or this crate.
///
/// Test modules of this crate count as callers.
fn is_logging_frame(symbol: &str) -> bool {
    let path = symbol.trim_start_matches('<');
    if RUNTIME_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        return true;
    }
    path.starts_with(CRATE_PREFIX) && !path.contains("::tests::")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_file() {
        assert_eq!(short_file("src/core/logger.rs"), "logger.rs");
        assert_eq!(short_file("logger.rs"), "logger.rs");
        assert_eq!(short_file(r"C:\work\src\main.rs"), "main.rs");
    }

    #[test]
    fn test_capture_file_flags() {
        let location = Location::caller();

        let long = capture(location, Flags::LONG_FILE);
        assert_eq!(long.file, Some(format!("{}.{}", location.file(), location.line())));
        assert_eq!(long.function, None);

        let short = capture(location, Flags::SHORT_FILE | Flags::LONG_FILE);
        assert_eq!(short.file, Some(format!("caller.rs.{}", location.line())));

        let none = capture(location, Flags::empty());
        assert_eq!(none, CallSite { file: None, function: None });
    }

    #[test]
    fn test_logging_frames() {
        assert!(is_logging_frame("backtrace::backtrace::trace"));
        assert!(is_logging_frame("std::rt::lang_start"));
        assert!(is_logging_frame("<alloc::boxed::Box<F> as core::ops::function::Fn<A>>::call"));
        assert!(is_logging_frame("rust_logops::core::logger::Logger::info"));
        assert!(is_logging_frame("<rust_logops::core::logger::Logger>::dispatch"));
        assert!(is_logging_frame("rust_logops::global::info"));

        assert!(!is_logging_frame("my_app::handler::serve"));
        assert!(!is_logging_frame("<my_app::Job as core::fmt::Display>::fmt"));
        assert!(!is_logging_frame("rust_logops::core::caller::tests::helper"));
    }

    #[inline(never)]
    fn resolve_from_named_function() -> String {
        function_name()
    }

    #[test]
    fn test_function_name_of_live_frame() {
        let name = resolve_from_named_function();
        assert_ne!(name, UNKNOWN_FUNCTION);
        assert!(
            name.contains("resolve_from_named_function"),
            "unexpected function: {}",
            name
        );
    }

    #[inline(never)]
    fn log_from_named_function(logger: &crate::core::Logger) {
        logger.info("named");
    }

    #[test]
    fn test_function_name_through_logger() {
        let sink = crate::sinks::MemorySink::new();
        let logger = crate::core::Logger::with_writer(sink.clone());
        logger.set_flags(Flags::METHOD);

        log_from_named_function(&logger);

        let line: serde_json::Value = serde_json::from_str(&sink.lines()[0]).unwrap();
        let func = line["func"].as_str().unwrap();
        assert!(func.ends_with("log_from_named_function"), "unexpected function: {}", func);
    }

    // release builds carry no line tables by default; symbol names must still resolve
    #[cfg(not(debug_assertions))]
    #[test]
    fn test_function_name_without_debug_assertions() {
        assert!(resolve_from_named_function().contains("resolve_from_named_function"));
    }
}
