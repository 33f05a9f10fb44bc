//! Basic logger usage example
//!
//! Demonstrates flags, printf-style messages, static, dynamic and local
//! context, structured and non-serializable errors, and the same calls
//! through the process-wide default logger.
//!
//! Run with: cargo run --example basic_usage
//! For the text profile: LOGOPS_FORMAT=dev cargo run --example basic_usage

use rust_logops::global;
use rust_logops::prelude::*;
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ComplexErr {
    text: String,
    cause: Option<Box<ComplexErr>>,
}

impl ComplexErr {
    fn chain(texts: &[&str]) -> Option<Box<ComplexErr>> {
        texts.split_first().map(|(text, rest)| {
            Box::new(ComplexErr {
                text: text.to_string(),
                cause: Self::chain(rest),
            })
        })
    }
}

impl fmt::Display for ComplexErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("uno complejito")
    }
}

struct NotJsonable;

impl Serialize for NotJsonable {
    fn serialize<S: serde::Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("JSON not supported"))
    }
}

impl fmt::Display for NotJsonable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a very strange error")
    }
}

fn hostname() -> String {
    std::env::var("HOSTNAME").unwrap_or_else(|_| "localhost".to_string())
}

fn main() {
    let logger = Logger::new();
    logger.set_flags(Flags::empty());
    logger.add_flags(Flags::METHOD);
    logger.add_flags(Flags::LONG_FILE);
    logger.add_flags(Flags::SHORT_FILE);

    logger.infof("%d y %d son %d", &params![2, 2, 4]);
    logger.info("y ocho dieciséis");

    logger.set_context(Context::from([("prefix", "prefijo")]));
    logger.set_context_fn(|| {
        Context::from([
            ("hostname", hostname()),
            ("pid", std::process::id().to_string()),
        ])
    });

    logger.info_c(
        &Context::from([("local", "España y olé")]),
        "%d y %d son %d",
        &params![2, 2, 4],
    );
    logger.info_c(&Context::from([("local", r#"{"json":"pompón"}"#)]), "y ocho dieciséis", &[]);
    logger.debug_c(&Context::from([("local", r#"{"json":"pompón con debug"}"#)]), "más o menos", &[]);

    if let Some(err) = ComplexErr::chain(&["1", "2", "3"]) {
        logger.error_e(&Structured(*err), None, "esta sí que es buena", &[]);
    }
    logger.error_e(&Structured(NotJsonable), None, "otro mejor", &[]);

    println!();
    println!("Con funciones del paquete");

    global::set_flags(Flags::METHOD);
    global::set_flags(Flags::SHORT_FILE);
    global::infof("%d y %d son %d", &params![2, 2, 4]);
    global::info("y ocho dieciséis");
    global::set_context(Context::from([("prefix", "prefijo")]));
    global::info_c(
        &Context::from([("local", "España y olé")]),
        "%d y %d son %d",
        &params![2, 2, 4],
    );
    global::info_c(&Context::from([("local", r#"{"json":"pompón"}"#)]), "y ocho dieciséis", &[]);

    if let Some(err) = ComplexErr::chain(&["The 1 is another err...", "that nests the number 2 err"]) {
        global::critical_e(
            &Structured(*err),
            Some(&Context::from([("msisdn", "+34677876568"), ("center", "5.5")])),
            "con más mensaje",
            &[],
        );
    }
}
