//! Record formatter
//!
//! Renders one [`LogRecord`] into a byte buffer. Fields are emitted in tiers,
//! highest precedence first, and each key appears at most once per line:
//!
//! 1. `err`, when the record carries an error
//! 2. local context from the record
//! 3. context returned by the configured provider
//! 4. static logger context
//!
//! A context key named `err` is dropped whenever an error is attached.

use super::caller;
use super::error::Result;
use super::error_value::render_error;
use super::flags::Flags;
use super::log_context::{Context, ContextFn};
use super::log_record::LogRecord;
use super::output_format::{OutputFormat, ERR_FIELD_NAME};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Configuration read once at the start of a dispatch and treated as
/// immutable for the rest of it
#[derive(Debug, Clone, Default)]
pub struct ConfigSnapshot {
    pub flags: Flags,
    pub context: Arc<Context>,
    pub context_fn: Option<Arc<ContextFn>>,
}

/// What happened while rendering, for metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOutcome {
    /// The attached error fell back to its textual description
    pub error_degraded: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn output_format(&self) -> OutputFormat {
        self.format
    }

    /// Append one complete, newline-terminated line for `record` to `buf`
    pub fn format(
        &self,
        buf: &mut Vec<u8>,
        record: &LogRecord<'_>,
        config: &ConfigSnapshot,
        now: &DateTime<Utc>,
    ) -> Result<FormatOutcome> {
        let mut outcome = FormatOutcome::default();
        let timestamp = self.format.timestamp_format().format(now);
        let call_site = caller::capture(record.location, config.flags);
        self.format
            .write_prefix(buf, &timestamp, record.level, &call_site)?;

        let has_error = match record.error {
            Some(err) => {
                let rendered = render_error(err);
                outcome.error_degraded = rendered.degraded;
                self.format.write_error_field(buf, &rendered.token)?;
                true
            }
            None => false,
        };

        let local = record.context;
        let dynamic = config.context_fn.as_ref().map(|provider| provider.call());
        let tiers = [local, dynamic.as_ref(), Some(config.context.as_ref())];

        for (rank, tier) in tiers.iter().enumerate() {
            let Some(fields) = tier else { continue };
            let higher = &tiers[..rank];
            for (key, value) in fields.iter() {
                if has_error && key == ERR_FIELD_NAME {
                    continue;
                }
                if higher.iter().flatten().any(|ctx| ctx.contains_key(key)) {
                    continue;
                }
                self.format.write_field(buf, key, value)?;
            }
        }

        self.format.write_message(buf, &record.render_message())?;
        Ok(outcome)
    }
}
