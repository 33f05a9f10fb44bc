//! Error values attached to log records
//!
//! An error is consumed only through two capabilities: a textual description
//! (`Display`) and an attempt at structured serialization. When the
//! structured attempt fails, the `err` field degrades to a single JSON string
//! holding both descriptions, so the line stays well formed and the logging
//! call still succeeds.

use serde::ser::Error as _;
use serde::Serialize;
use std::fmt;

/// Serializable value with a textual fallback.
///
/// # Example
///
/// ```
/// use rust_logops::{ErrorValue, Structured};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Timeout { after_ms: u64 }
///
/// impl std::fmt::Display for Timeout {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "timed out after {}ms", self.after_ms)
///     }
/// }
///
/// let err = Structured(Timeout { after_ms: 30 });
/// assert_eq!(err.to_json().unwrap()["after_ms"], 30);
/// ```
pub trait ErrorValue: fmt::Display + Send + Sync {
    /// Structured representation of the error
    fn to_json(&self) -> serde_json::Result<serde_json::Value>;
}

/// Error whose structured shape comes from its `Serialize` impl
#[derive(Debug, Clone)]
pub struct Structured<E>(pub E);

impl<E> ErrorValue for Structured<E>
where
    E: Serialize + fmt::Display + Send + Sync,
{
    fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(&self.0)
    }
}

impl<E: fmt::Display> fmt::Display for Structured<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Error with no declared structured shape; always renders the fallback
#[derive(Debug, Clone)]
pub struct Plain<E>(pub E);

impl<E> ErrorValue for Plain<E>
where
    E: fmt::Display + Send + Sync,
{
    fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        Err(serde_json::Error::custom("no structured representation"))
    }
}

impl<E: fmt::Display> fmt::Display for Plain<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl ErrorValue for std::io::Error {
    fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        Err(serde_json::Error::custom("no structured representation"))
    }
}

/// Rendered form of the `err` field
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedError {
    /// JSON token: an object/array/scalar, or a quoted fallback string
    pub token: String,
    /// Whether structured serialization failed
    pub degraded: bool,
}

/// Serialize `err` into a JSON token, falling back to
/// `"<description> (<serialization failure>)"` as a JSON string.
pub fn render_error(err: &dyn ErrorValue) -> RenderedError {
    let structured = err
        .to_json()
        .and_then(|value| serde_json::to_string(&value));

    match structured {
        Ok(token) => RenderedError {
            token,
            degraded: false,
        },
        Err(ser_err) => {
            let text = format!("{} ({})", err, ser_err);
            let token = serde_json::Value::String(text).to_string();
            RenderedError {
                token,
                degraded: true,
            }
        }
    }
}
