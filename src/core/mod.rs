//! Core logger types and traits

pub mod buffer_pool;
pub mod caller;
pub mod error;
pub mod error_value;
pub mod flags;
pub mod formatter;
pub mod log_context;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod param;
pub mod printf;
pub mod timestamp;

pub use buffer_pool::{global_pool, BufferPool, PooledBuffer};
pub use caller::CallSite;
pub use error::{LoggerError, Result};
pub use error_value::{render_error, ErrorValue, Plain, RenderedError, Structured};
pub use flags::Flags;
pub use formatter::{ConfigSnapshot, FormatOutcome, Formatter};
pub use log_context::{Context, ContextFn};
pub use log_level::Level;
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use output_format::{OutputFormat, FORMAT_ENV_VAR};
pub use param::Param;
pub use timestamp::TimestampFormat;
