//! Sink implementations
//!
//! Any `std::io::Write + Send` value can be a sink. Standard output is the
//! default; these cover capture in memory and appending to a file.

pub mod file;
pub mod memory;

pub use file::FileSink;
pub use memory::MemorySink;
