//! File logging example
//!
//! Demonstrates appending JSON lines to a file and reading them back.
//!
//! Run with: cargo run --example file_logging

use rust_logops::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Logops - File Logging Example ===\n");

    let logger = Logger::builder()
        .level(Level::Info)
        .flags(Flags::SHORT_FILE)
        .context(Context::from([("service", "file-demo")]))
        .writer(FileSink::open("application.log")?)
        .build();

    println!("1. Logging to 'application.log':");

    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.info("Configuration loaded successfully");
    logger.warn("Using default settings for some options");
    logger.error_e(
        &std::io::Error::new(std::io::ErrorKind::NotFound, "plugin.so not found"),
        None,
        "Failed to load optional plugin",
        &[],
    );

    println!("\n2. Performing some operations:");

    for i in 1..=5 {
        let ctx = Context::from([("item", i.to_string())]);
        logger.info_c(&ctx, "Processing item %d/%d", &params![i, 5]);
        if i == 3 {
            logger.warn_c(&ctx, "Item %d took longer than expected", &params![i]);
        }
    }

    logger.info("All operations completed");
    logger.flush()?;

    let metrics = logger.metrics();
    println!(
        "\n=== Example completed: {} lines written, {} failures ===",
        metrics.total_logged(),
        metrics.write_failures()
    );
    println!("Check 'application.log' for the full log output");

    Ok(())
}
