//! Severity levels for structured log entries.
//!
//! The severity table is a fixed, process-wide registry mapping each level
//! to a numeric value, an uppercase name, and a description. The numeric
//! values follow the Google Cloud Logging severity scale (0–800 in steps of
//! 100) and are a compatibility contract: log-ingestion systems key on them,
//! so they must never change.
//!
//! Levels can be resolved from either form via [`Severity::lookup`]:
//!
//! ```
//! use traceline::severity::Severity;
//!
//! let by_value = Severity::lookup(500).unwrap();
//! let by_name = Severity::lookup("error").unwrap();
//! assert_eq!(by_value, by_name);
//! assert_eq!(by_value.name(), "ERROR");
//! ```

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A log severity level.
///
/// Variants are ordered from least to most severe, so comparison operators
/// follow the numeric scale: `Severity::Debug < Severity::Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// The entry has no assigned severity level (0).
    Default,
    /// Debug or trace information (100).
    Debug,
    /// Routine information, such as ongoing status or performance (200).
    Info,
    /// Normal but significant events, such as start up, shut down, or a
    /// configuration change (300).
    Notice,
    /// Warning events might cause problems (400).
    Warning,
    /// Error events are likely to cause problems (500).
    Error,
    /// Critical events cause more severe problems or outages (600).
    Critical,
    /// A person must take an action immediately (700).
    Alert,
    /// One or more systems are unusable (800).
    Emergency,
}

impl Severity {
    /// All levels in ascending numeric order.
    pub const ALL: [Severity; 9] = [
        Severity::Default,
        Severity::Debug,
        Severity::Info,
        Severity::Notice,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
        Severity::Alert,
        Severity::Emergency,
    ];

    /// Numeric value on the Cloud Logging severity scale.
    pub const fn value(self) -> u16 {
        match self {
            Severity::Default => 0,
            Severity::Debug => 100,
            Severity::Info => 200,
            Severity::Notice => 300,
            Severity::Warning => 400,
            Severity::Error => 500,
            Severity::Critical => 600,
            Severity::Alert => 700,
            Severity::Emergency => 800,
        }
    }

    /// Uppercase level name as emitted in the `severity` field.
    pub const fn name(self) -> &'static str {
        match self {
            Severity::Default => "DEFAULT",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Notice => "NOTICE",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
            Severity::Alert => "ALERT",
            Severity::Emergency => "EMERGENCY",
        }
    }

    /// Human-readable description of the level.
    pub const fn description(self) -> &'static str {
        match self {
            Severity::Default => "The log entry has no assigned severity level.",
            Severity::Debug => "Debug or trace information.",
            Severity::Info => "Routine information, such as ongoing status or performance.",
            Severity::Notice => {
                "Normal but significant events, such as start up, shut down, or a configuration change."
            }
            Severity::Warning => "Warning events might cause problems.",
            Severity::Error => "Error events are likely to cause problems.",
            Severity::Critical => "Critical events cause more severe problems or outages.",
            Severity::Alert => "A person must take an action immediately.",
            Severity::Emergency => "One or more systems are unusable.",
        }
    }

    /// Resolve a level from a numeric value or a (case-insensitive) name.
    ///
    /// A name that is the decimal rendering of a valid numeric value (for
    /// example `"500"` from an environment variable) also resolves.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSeverityLevel`] when the query matches no level. The
    /// error message enumerates every valid numeric value and name so the
    /// caller can self-correct.
    pub fn lookup(query: impl Into<SeverityQuery>) -> Result<Severity, InvalidSeverityLevel> {
        match query.into() {
            SeverityQuery::Level(severity) => Ok(severity),
            SeverityQuery::Value(value) => {
                Severity::from_value(value).ok_or_else(|| InvalidSeverityLevel::new(value))
            }
            SeverityQuery::Name(name) => Severity::from_name(&name)
                .or_else(|| name.trim().parse::<i64>().ok().and_then(Severity::from_value))
                .ok_or_else(|| InvalidSeverityLevel::new(name)),
        }
    }

    /// Numeric value of the level matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSeverityLevel`] when the query matches no level.
    pub fn numeric_value(query: impl Into<SeverityQuery>) -> Result<u16, InvalidSeverityLevel> {
        Ok(Severity::lookup(query)?.value())
    }

    fn from_value(value: i64) -> Option<Severity> {
        Severity::ALL
            .iter()
            .copied()
            .find(|severity| i64::from(severity.value()) == value)
    }

    fn from_name(name: &str) -> Option<Severity> {
        let name = name.trim();
        Severity::ALL
            .iter()
            .copied()
            .find(|severity| severity.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = InvalidSeverityLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::lookup(s)
    }
}

/// A severity level query, by numeric value or by name.
///
/// Callers rarely construct this directly; `From` conversions let
/// [`Severity::lookup`] and `Logger::log` accept integers, strings, or an
/// already-resolved [`Severity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeverityQuery {
    /// An already-resolved level.
    Level(Severity),
    /// A numeric value to match exactly against the table.
    Value(i64),
    /// A name to match case-insensitively against the table.
    Name(String),
}

impl From<Severity> for SeverityQuery {
    fn from(severity: Severity) -> Self {
        SeverityQuery::Level(severity)
    }
}

impl From<i64> for SeverityQuery {
    fn from(value: i64) -> Self {
        SeverityQuery::Value(value)
    }
}

impl From<i32> for SeverityQuery {
    fn from(value: i32) -> Self {
        SeverityQuery::Value(i64::from(value))
    }
}

impl From<u16> for SeverityQuery {
    fn from(value: u16) -> Self {
        SeverityQuery::Value(i64::from(value))
    }
}

impl From<u32> for SeverityQuery {
    fn from(value: u32) -> Self {
        SeverityQuery::Value(i64::from(value))
    }
}

impl From<&str> for SeverityQuery {
    fn from(name: &str) -> Self {
        SeverityQuery::Name(name.to_string())
    }
}

impl From<String> for SeverityQuery {
    fn from(name: String) -> Self {
        SeverityQuery::Name(name)
    }
}

/// Error returned when a severity query matches no level in the table.
///
/// An invalid level is a programmer error: it is always surfaced to the
/// caller and never silently downgraded to a default level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Invalid log level `{level}`. Valid numeric values are: {}. Valid names are: {}.",
    valid_values(),
    valid_names()
)]
pub struct InvalidSeverityLevel {
    /// The rejected query, rendered as text.
    pub level: String,
}

impl InvalidSeverityLevel {
    fn new(level: impl ToString) -> Self {
        Self {
            level: level.to_string(),
        }
    }
}

fn valid_values() -> String {
    let values: Vec<String> = Severity::ALL
        .iter()
        .map(|severity| severity.value().to_string())
        .collect();
    values.join(", ")
}

fn valid_names() -> String {
    let names: Vec<&str> = Severity::ALL.iter().map(|severity| severity.name()).collect();
    names.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_value_round_trips_through_name() {
        for value in [0u16, 100, 200, 300, 400, 500, 600, 700, 800] {
            let by_value = Severity::lookup(value).unwrap();
            let by_name = Severity::lookup(by_value.name()).unwrap();
            assert_eq!(by_value, by_name);
            assert_eq!(by_value.value(), value);
        }
    }

    #[test]
    fn lookup_by_name_is_case_insensitive() {
        assert_eq!(Severity::lookup("error").unwrap(), Severity::Error);
        assert_eq!(Severity::lookup("Error").unwrap(), Severity::Error);
        assert_eq!(Severity::lookup("ERROR").unwrap(), Severity::Error);
    }

    #[test]
    fn lookup_accepts_numeric_strings() {
        assert_eq!(Severity::lookup("500").unwrap(), Severity::Error);
        assert_eq!(Severity::lookup(" 100 ").unwrap(), Severity::Debug);
    }

    #[test]
    fn lookup_accepts_resolved_levels() {
        assert_eq!(Severity::lookup(Severity::Notice).unwrap(), Severity::Notice);
    }

    #[test]
    fn lookup_rejects_unknown_value() {
        let err = Severity::lookup(150).unwrap_err();
        assert_eq!(err.level, "150");
    }

    #[test]
    fn lookup_rejects_unknown_name() {
        let err = Severity::lookup("BOGUS").unwrap_err();
        assert_eq!(err.level, "BOGUS");
    }

    #[test]
    fn error_message_enumerates_valid_forms() {
        let message = Severity::lookup("BOGUS").unwrap_err().to_string();
        for severity in Severity::ALL {
            assert!(
                message.contains(severity.name()),
                "message should list {}: {}",
                severity.name(),
                message
            );
            assert!(
                message.contains(&severity.value().to_string()),
                "message should list {}: {}",
                severity.value(),
                message
            );
        }
    }

    #[test]
    fn numeric_value_resolves_names() {
        assert_eq!(Severity::numeric_value("WARNING").unwrap(), 400);
        assert_eq!(Severity::numeric_value(800).unwrap(), 800);
        assert!(Severity::numeric_value("nope").is_err());
    }

    #[test]
    fn ordering_follows_numeric_scale() {
        assert!(Severity::Default < Severity::Debug);
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Alert < Severity::Emergency);
    }

    #[test]
    fn display_is_the_uppercase_name() {
        assert_eq!(Severity::Critical.to_string(), "CRITICAL");
    }

    #[test]
    fn from_str_resolves_names() {
        let severity: Severity = "notice".parse().unwrap();
        assert_eq!(severity, Severity::Notice);
    }

    #[test]
    fn descriptions_are_present_for_all_levels() {
        for severity in Severity::ALL {
            assert!(!severity.description().is_empty());
        }
    }
}
