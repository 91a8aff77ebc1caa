//! Structured log entry construction and serialization.
//!
//! A [`LogEntry`] is a transient value object: built fresh for every log
//! call, serialized to a single JSON line, and returned to the caller for
//! inspection. Field order in the serialized form follows declaration
//! order (`severity`, `message`, `context`, `loc`, trace key last), and
//! optional fields are omitted entirely when absent.

use std::panic::Location;

use serde::Serialize;

use crate::context::Context;

/// JSON key carrying the distributed-trace identifier.
///
/// This is the Cloud Logging trace-correlation key; the value is an opaque
/// passthrough string produced by the trace provider.
pub const TRACE_KEY: &str = "logging.googleapis.com/trace";

/// Call site of a logging call.
///
/// Captured at the public entry point so the location always names the
/// original caller, never an internal helper frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    /// Source file path.
    pub file: &'static str,
    /// 1-based line number.
    #[serde(rename = "lineno")]
    pub line: u32,
    /// Enclosing function, when captured via the `log_*!` macros.
    ///
    /// `std::panic::Location` carries no function name, so plain method
    /// calls record only file and line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<&'static str>,
}

impl SourceLocation {
    /// Capture the caller's file and line.
    ///
    /// Being `#[track_caller]`, this reports the call site of the nearest
    /// non-`track_caller` caller in the chain.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
            function: None,
        }
    }
}

/// Capture a [`SourceLocation`] including the enclosing function name.
///
/// Expands in place, so the captured location is the macro call site. Used
/// by the per-level `log_*!` macros; also usable directly with
/// `Logger::log_at`.
#[macro_export]
macro_rules! source_location {
    () => {{
        fn here() {}
        fn name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let function = name_of(here);
        let function = function.strip_suffix("::here").unwrap_or(function);
        $crate::entry::SourceLocation {
            file: file!(),
            line: line!(),
            function: ::std::option::Option::Some(function),
        }
    }};
}

/// One structured log record, produced by a single log call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    /// Uppercase severity name.
    pub severity: &'static str,
    /// Log message.
    pub message: String,
    /// Caller-supplied annotations; omitted from the wire form when empty.
    #[serde(skip_serializing_if = "Context::is_empty")]
    pub context: Context,
    /// Call site, populated for WARNING and above.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<SourceLocation>,
    /// Distributed-trace identifier, when the trace provider yields one.
    #[serde(
        rename = "logging.googleapis.com/trace",
        skip_serializing_if = "Option::is_none"
    )]
    pub trace: Option<String>,
}

impl LogEntry {
    /// Serialize the entry as a single JSON line (no trailing newline).
    ///
    /// All values are JSON-safe by construction; should serialization fail
    /// regardless, the entry degrades to its severity and message rather
    /// than being dropped.
    pub fn to_json_line(&self) -> String {
        match serde_json::to_string(self) {
            Ok(line) => line,
            Err(_) => serde_json::json!({
                "severity": self.severity,
                "message": self.message,
            })
            .to_string(),
        }
    }
}
