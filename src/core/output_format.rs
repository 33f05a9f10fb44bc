//! Output format profiles for log lines
//!
//! Both profiles render the same sequence of pieces and differ only in the
//! literal templates:
//!
//! | Piece | Json | Text |
//! |---|---|---|
//! | prefix | `{"time":"<ts>", "lvl":"<LEVEL>"` | `<ts> <LEVEL>` |
//! | file flag | `,"file":"<path>.<line>"` | ` <path>.<line>` |
//! | method flag | `,"func":"<name>"` | ` <name>` |
//! | end of prefix | | `\t` |
//! | error field | `,"err":<token>` | ` [err=<token>]` |
//! | context field | `,"<k>":"<v>"` | ` [<k>=<v>]` |
//! | message | `,"msg":"<message>"}` | ` <message>` |
//!
//! The active profile is chosen once per process from the `LOGOPS_FORMAT`
//! environment variable (`dev` selects Text, anything else Json).

use super::caller::CallSite;
use super::error::{LoggerError, Result};
use super::log_level::Level;
use super::timestamp::TimestampFormat;
use std::io::Write;
use std::str::FromStr;
use std::sync::OnceLock;

/// Environment variable selecting the process-wide profile
pub const FORMAT_ENV_VAR: &str = "LOGOPS_FORMAT";

/// Reserved field name carrying the attached error
pub const ERR_FIELD_NAME: &str = "err";

/// Output profile for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Newline-delimited JSON objects (default)
    ///
    /// Example: `{"time":"2025-01-08T10:30:45Z", "lvl":"INFO","user":"ana","msg":"logged in"}`
    #[default]
    Json,

    /// Human-readable text
    ///
    /// Example: `10:30:45.123 INFO\t [user=ana] logged in`
    Text,
}

impl OutputFormat {
    /// Profile selected from the environment at first use, fixed afterwards
    pub fn active() -> OutputFormat {
        static ACTIVE: OnceLock<OutputFormat> = OnceLock::new();
        *ACTIVE.get_or_init(Self::from_env)
    }

    /// Read [`FORMAT_ENV_VAR`]; unset or unrecognised values select Json
    pub fn from_env() -> OutputFormat {
        std::env::var(FORMAT_ENV_VAR)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    pub fn timestamp_format(&self) -> TimestampFormat {
        match self {
            OutputFormat::Json => TimestampFormat::Rfc3339,
            OutputFormat::Text => TimestampFormat::TimeOfDayMillis,
        }
    }

    /// Timestamp, level name and call-site annotations
    pub(crate) fn write_prefix(
        &self,
        buf: &mut Vec<u8>,
        timestamp: &str,
        level: Level,
        call_site: &CallSite,
    ) -> Result<()> {
        match self {
            OutputFormat::Json => {
                buf.extend_from_slice(b"{\"time\":");
                write_json_str(buf, timestamp)?;
                buf.extend_from_slice(b", \"lvl\":");
                write_json_str(buf, level.to_str())?;
                if let Some(ref file) = call_site.file {
                    buf.extend_from_slice(b",\"file\":");
                    write_json_str(buf, file)?;
                }
                if let Some(ref function) = call_site.function {
                    buf.extend_from_slice(b",\"func\":");
                    write_json_str(buf, function)?;
                }
            }
            OutputFormat::Text => {
                write!(buf, "{} {}", timestamp, level.to_str())?;
                if let Some(ref file) = call_site.file {
                    write!(buf, " {}", file)?;
                }
                if let Some(ref function) = call_site.function {
                    write!(buf, " {}", function)?;
                }
                buf.push(b'\t');
            }
        }
        Ok(())
    }

    /// `err` field carrying an already-rendered JSON token
    pub(crate) fn write_error_field(&self, buf: &mut Vec<u8>, token: &str) -> Result<()> {
        match self {
            OutputFormat::Json => {
                buf.push(b',');
                write_json_str(buf, ERR_FIELD_NAME)?;
                buf.push(b':');
                buf.extend_from_slice(token.as_bytes());
            }
            OutputFormat::Text => {
                write!(buf, " [{}={}]", ERR_FIELD_NAME, sanitize(token))?;
            }
        }
        Ok(())
    }

    pub(crate) fn write_field(&self, buf: &mut Vec<u8>, key: &str, value: &str) -> Result<()> {
        match self {
            OutputFormat::Json => {
                buf.push(b',');
                write_json_str(buf, key)?;
                buf.push(b':');
                write_json_str(buf, value)?;
            }
            OutputFormat::Text => {
                write!(buf, " [{}={}]", sanitize(key), sanitize(value))?;
            }
        }
        Ok(())
    }

    /// Message and end of record, including the trailing newline
    pub(crate) fn write_message(&self, buf: &mut Vec<u8>, message: &str) -> Result<()> {
        match self {
            OutputFormat::Json => {
                buf.extend_from_slice(b",\"msg\":");
                write_json_str(buf, message)?;
                buf.push(b'}');
            }
            OutputFormat::Text => {
                write!(buf, " {}", sanitize(message))?;
            }
        }
        buf.push(b'\n');
        Ok(())
    }
}

impl FromStr for OutputFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "dev" | "text" => Ok(OutputFormat::Text),
            _ => Err(LoggerError::config(
                "format",
                format!("Unknown output format: '{}'", s),
            )),
        }
    }
}

fn write_json_str(buf: &mut Vec<u8>, value: &str) -> Result<()> {
    serde_json::to_writer(&mut *buf, value)?;
    Ok(())
}

/// Escape line breaks and tabs so a text record stays on one line
fn sanitize(value: &str) -> std::borrow::Cow<'_, str> {
    if value.contains(['\n', '\r', '\t']) {
        std::borrow::Cow::Owned(
            value
                .replace('\n', "\\n")
                .replace('\r', "\\r")
                .replace('\t', "\\t"),
        )
    } else {
        std::borrow::Cow::Borrowed(value)
    }
}
