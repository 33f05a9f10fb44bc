//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
///
/// `All` and `None` are boundary sentinels used only as a minimum level:
/// `All` accepts every record and `None` accepts nothing. Records carrying a
/// sentinel level are never written.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Level {
    #[default]
    All = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Critical = 5,
    None = 6,
}

const LEVEL_NAMES: [&str; 7] = ["ALL", "DEBUG", "INFO", "WARN", "ERROR", "FATAL", "NONE"];

impl Level {
    /// Every emittable level, lowest first
    pub const EMITTABLE: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Critical,
    ];

    /// Name rendered in the `lvl` field
    pub fn to_str(&self) -> &'static str {
        LEVEL_NAMES[*self as usize]
    }

    /// Whether records of this level may reach a sink
    #[inline]
    pub fn is_emittable(&self) -> bool {
        !matches!(self, Level::All | Level::None)
    }

    #[inline]
    pub(crate) fn as_u8(self) -> u8 {
        self as u8
    }

    /// Values outside the table clamp to `None`
    #[inline]
    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => Level::All,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warn,
            4 => Level::Error,
            5 => Level::Critical,
            _ => Level::None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Level {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ALL" => Ok(Level::All),
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            "CRITICAL" | "FATAL" => Ok(Level::Critical),
            "NONE" => Ok(Level::None),
            _ => Err(LoggerError::config(
                "level",
                format!("Invalid log level: '{}'", s),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::All < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Critical);
        assert!(Level::Critical < Level::None);
    }

    #[test]
    fn test_level_names() {
        assert_eq!(Level::Info.to_str(), "INFO");
        assert_eq!(Level::Critical.to_str(), "FATAL");
        assert_eq!(Level::None.to_string(), "NONE");
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("critical".parse::<Level>().unwrap(), Level::Critical);
        assert_eq!("FATAL".parse::<Level>().unwrap(), Level::Critical);
        assert!(matches!(
            "loud".parse::<Level>(),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_u8_round_trip() {
        for raw in 0..=6u8 {
            assert_eq!(Level::from_u8(raw).as_u8(), raw);
        }
        assert_eq!(Level::from_u8(200), Level::None);
    }

    #[test]
    fn test_sentinels_not_emittable() {
        assert!(!Level::All.is_emittable());
        assert!(!Level::None.is_emittable());
        assert!(Level::EMITTABLE.iter().all(Level::is_emittable));
    }
}
