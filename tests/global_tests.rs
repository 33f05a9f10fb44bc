//! Tests for the process-wide default logger
//!
//! All assertions live in one test: the default logger is shared by every
//! test in this binary, and tests run in parallel.

use rust_logops::prelude::*;
use rust_logops::{default_logger, global, info, warn};
use serde_json::Value;

fn parsed(sink: &MemorySink) -> Vec<Value> {
    sink.lines()
        .iter()
        .map(|line| serde_json::from_str(line).expect("every line is a JSON object"))
        .collect()
}

#[test]
fn test_default_logger_forwarding() {
    let defaults = default_logger();
    assert_eq!(defaults.level(), Level::All);
    assert_eq!(defaults.flags(), Flags::DEFAULTS);

    let sink = MemorySink::new();
    global::set_writer(sink.clone());
    global::set_flags(Flags::empty());
    global::set_level(Level::Info);
    assert_eq!(global::level(), Level::Info);

    global::debug("gated");
    global::infof("%d y %d son %d", &params![2, 2, 4]);
    global::set_context(Context::from([("service", "billing")]));
    global::set_context_fn(|| Context::from([("pid", std::process::id().to_string())]));
    global::warn_c(&Context::from([("service", "local")]), "ctx", &[]);
    global::error_e(&Plain("disk full"), None, "failed", &[]);
    global::clear_context_fn();
    global::critical("bye");

    let lines = parsed(&sink);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["msg"], "2 y 2 son 4");
    assert_eq!(lines[1]["service"], "local");
    assert!(lines[1]["pid"].is_string());
    assert!(lines[2]["err"].as_str().unwrap().contains("disk full"));
    assert_eq!(lines[3]["lvl"], "FATAL");
    assert!(lines[3].get("pid").is_none());
    assert_eq!(global::context().get("service"), Some("billing"));
    assert!(global::metrics().total_logged() >= 4);

    // call sites point at this file, through both the functions and the macros
    sink.clear();
    global::add_flags(Flags::SHORT_FILE);
    assert_eq!(global::flags(), Flags::SHORT_FILE);

    let function_line = line!() + 1;
    global::info("from function");
    let macro_line = line!() + 1;
    info!("from macro {}", 1);

    let ctx = Context::from([("request", "r-7")]);
    let ctx_line = line!() + 1;
    warn!(ctx = ctx, "with context {}", 2);

    let lines = parsed(&sink);
    assert_eq!(lines[0]["file"], format!("global_tests.rs.{}", function_line));
    assert_eq!(lines[1]["file"], format!("global_tests.rs.{}", macro_line));
    assert_eq!(lines[1]["msg"], "from macro 1");
    assert_eq!(lines[2]["file"], format!("global_tests.rs.{}", ctx_line));
    assert_eq!(lines[2]["request"], "r-7");
    assert_eq!(lines[2]["lvl"], "WARN");
    assert_eq!(lines[2]["msg"], "with context 2");
}
