//! The logger: threshold filtering, entry construction, and emission.
//!
//! A [`Logger`] owns a fixed minimum-severity threshold, a trace provider,
//! and a sink. One instance corresponds to one logical execution context
//! (typically one request, or the whole process for CLIs and jobs).
//!
//! ```
//! use std::sync::Arc;
//! use traceline::config::LoggerSettings;
//! use traceline::context::Context;
//! use traceline::logger::Logger;
//! use traceline::severity::Severity;
//! use traceline::trace::NoTrace;
//!
//! let settings = LoggerSettings::new().with_min_level(Severity::Info);
//! let logger = Logger::new(&settings, Arc::new(NoTrace));
//!
//! // Below threshold: no entry, nothing written.
//! assert!(logger.debug("cache probe", Context::new()).is_none());
//!
//! // At or above threshold: the entry is emitted and returned.
//! let entry = logger.error("disk full", Context::new().with("path", "/data"));
//! assert_eq!(entry.unwrap().severity, "ERROR");
//! ```

use std::sync::Arc;

use crate::config::{ConfigError, LoggerSettings};
use crate::context::Context;
use crate::entry::{LogEntry, SourceLocation};
use crate::severity::{InvalidSeverityLevel, Severity, SeverityQuery};
use crate::sink::{Sink, StdoutSink};
use crate::trace::TraceProvider;

/// Structured logger emitting one JSON line per entry.
pub struct Logger {
    threshold: Severity,
    trace: Arc<dyn TraceProvider>,
    sink: Arc<dyn Sink>,
}

impl Logger {
    /// Create a logger writing to standard output.
    ///
    /// The threshold is fixed here from `settings`; the trace provider is
    /// queried on every call, not cached.
    pub fn new(settings: &LoggerSettings, trace: Arc<dyn TraceProvider>) -> Self {
        Self {
            threshold: settings.threshold(),
            trace,
            sink: Arc::new(StdoutSink),
        }
    }

    /// Create a logger with settings read from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `LOG_LEVEL` is set to a value outside
    /// the severity table.
    pub fn from_env(trace: Arc<dyn TraceProvider>) -> Result<Self, ConfigError> {
        Ok(Self::new(&LoggerSettings::from_env()?, trace))
    }

    /// Builder-style sink override.
    pub fn with_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = sink;
        self
    }

    /// Effective minimum severity of this logger.
    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Log at a dynamically-resolved severity.
    ///
    /// The severity may be a [`Severity`], a numeric value, or a name; it
    /// is resolved through the severity table first. Below the threshold
    /// the call is a no-op and returns `Ok(None)`; otherwise the entry is
    /// serialized, written as one line, and returned.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSeverityLevel`] when the severity matches no level.
    /// This propagates to the caller rather than being logged or
    /// downgraded.
    #[track_caller]
    pub fn log(
        &self,
        severity: impl Into<SeverityQuery>,
        message: impl Into<String>,
        context: Context,
    ) -> Result<Option<LogEntry>, InvalidSeverityLevel> {
        let severity = Severity::lookup(severity)?;
        Ok(self.log_at(severity, SourceLocation::caller(), message, context))
    }

    /// Log at a resolved severity with an explicit call site.
    ///
    /// This is the single emission path: every convenience method and
    /// macro forwards here. `location` is attached to the entry only for
    /// WARNING and above.
    pub fn log_at(
        &self,
        severity: Severity,
        location: SourceLocation,
        message: impl Into<String>,
        context: Context,
    ) -> Option<LogEntry> {
        if severity < self.threshold {
            return None;
        }

        let entry = LogEntry {
            severity: severity.name(),
            message: message.into(),
            context,
            loc: (severity >= Severity::Warning).then_some(location),
            trace: self.trace.current_trace_id(),
        };
        self.sink.write_line(&entry.to_json_line());
        Some(entry)
    }

    /// Log at DEFAULT (0).
    #[track_caller]
    pub fn default(&self, message: impl Into<String>, context: Context) -> Option<LogEntry> {
        self.log_at(Severity::Default, SourceLocation::caller(), message, context)
    }

    /// Log at DEBUG (100).
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>, context: Context) -> Option<LogEntry> {
        self.log_at(Severity::Debug, SourceLocation::caller(), message, context)
    }

    /// Log at INFO (200).
    #[track_caller]
    pub fn info(&self, message: impl Into<String>, context: Context) -> Option<LogEntry> {
        self.log_at(Severity::Info, SourceLocation::caller(), message, context)
    }

    /// Log at NOTICE (300).
    #[track_caller]
    pub fn notice(&self, message: impl Into<String>, context: Context) -> Option<LogEntry> {
        self.log_at(Severity::Notice, SourceLocation::caller(), message, context)
    }

    /// Log at WARNING (400).
    #[track_caller]
    pub fn warning(&self, message: impl Into<String>, context: Context) -> Option<LogEntry> {
        self.log_at(Severity::Warning, SourceLocation::caller(), message, context)
    }

    /// Log at ERROR (500).
    #[track_caller]
    pub fn error(&self, message: impl Into<String>, context: Context) -> Option<LogEntry> {
        self.log_at(Severity::Error, SourceLocation::caller(), message, context)
    }

    /// Log at CRITICAL (600).
    #[track_caller]
    pub fn critical(&self, message: impl Into<String>, context: Context) -> Option<LogEntry> {
        self.log_at(Severity::Critical, SourceLocation::caller(), message, context)
    }

    /// Log at ALERT (700).
    #[track_caller]
    pub fn alert(&self, message: impl Into<String>, context: Context) -> Option<LogEntry> {
        self.log_at(Severity::Alert, SourceLocation::caller(), message, context)
    }

    /// Log at EMERGENCY (800).
    #[track_caller]
    pub fn emergency(&self, message: impl Into<String>, context: Context) -> Option<LogEntry> {
        self.log_at(Severity::Emergency, SourceLocation::caller(), message, context)
    }
}

// Per-level logging macros.
//
// The macros forward to `Logger::log_at` with a `SourceLocation` captured
// at the call site, including the enclosing function name, which the plain
// methods cannot record. One macro per table entry; the context argument
// is optional.

/// Log at DEFAULT with full call-site capture.
#[macro_export]
macro_rules! log_default {
    ($logger:expr, $message:expr $(,)?) => {
        $crate::log_default!($logger, $message, $crate::context::Context::new())
    };
    ($logger:expr, $message:expr, $context:expr $(,)?) => {
        $logger.log_at(
            $crate::severity::Severity::Default,
            $crate::source_location!(),
            $message,
            $context,
        )
    };
}

/// Log at DEBUG with full call-site capture.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $message:expr $(,)?) => {
        $crate::log_debug!($logger, $message, $crate::context::Context::new())
    };
    ($logger:expr, $message:expr, $context:expr $(,)?) => {
        $logger.log_at(
            $crate::severity::Severity::Debug,
            $crate::source_location!(),
            $message,
            $context,
        )
    };
}

/// Log at INFO with full call-site capture.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $message:expr $(,)?) => {
        $crate::log_info!($logger, $message, $crate::context::Context::new())
    };
    ($logger:expr, $message:expr, $context:expr $(,)?) => {
        $logger.log_at(
            $crate::severity::Severity::Info,
            $crate::source_location!(),
            $message,
            $context,
        )
    };
}

/// Log at NOTICE with full call-site capture.
#[macro_export]
macro_rules! log_notice {
    ($logger:expr, $message:expr $(,)?) => {
        $crate::log_notice!($logger, $message, $crate::context::Context::new())
    };
    ($logger:expr, $message:expr, $context:expr $(,)?) => {
        $logger.log_at(
            $crate::severity::Severity::Notice,
            $crate::source_location!(),
            $message,
            $context,
        )
    };
}

/// Log at WARNING with full call-site capture.
///
/// ```
/// use std::sync::Arc;
/// use traceline::config::LoggerSettings;
/// use traceline::logger::Logger;
/// use traceline::trace::NoTrace;
/// use traceline::{context, log_warning};
///
/// let logger = Logger::new(&LoggerSettings::new(), Arc::new(NoTrace));
/// let entry = log_warning!(logger, "retrying", context! { "attempt" => 2 });
/// assert!(entry.unwrap().loc.unwrap().function.is_some());
/// ```
#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $message:expr $(,)?) => {
        $crate::log_warning!($logger, $message, $crate::context::Context::new())
    };
    ($logger:expr, $message:expr, $context:expr $(,)?) => {
        $logger.log_at(
            $crate::severity::Severity::Warning,
            $crate::source_location!(),
            $message,
            $context,
        )
    };
}

/// Log at ERROR with full call-site capture.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $message:expr $(,)?) => {
        $crate::log_error!($logger, $message, $crate::context::Context::new())
    };
    ($logger:expr, $message:expr, $context:expr $(,)?) => {
        $logger.log_at(
            $crate::severity::Severity::Error,
            $crate::source_location!(),
            $message,
            $context,
        )
    };
}

/// Log at CRITICAL with full call-site capture.
#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $message:expr $(,)?) => {
        $crate::log_critical!($logger, $message, $crate::context::Context::new())
    };
    ($logger:expr, $message:expr, $context:expr $(,)?) => {
        $logger.log_at(
            $crate::severity::Severity::Critical,
            $crate::source_location!(),
            $message,
            $context,
        )
    };
}

/// Log at ALERT with full call-site capture.
#[macro_export]
macro_rules! log_alert {
    ($logger:expr, $message:expr $(,)?) => {
        $crate::log_alert!($logger, $message, $crate::context::Context::new())
    };
    ($logger:expr, $message:expr, $context:expr $(,)?) => {
        $logger.log_at(
            $crate::severity::Severity::Alert,
            $crate::source_location!(),
            $message,
            $context,
        )
    };
}

/// Log at EMERGENCY with full call-site capture.
#[macro_export]
macro_rules! log_emergency {
    ($logger:expr, $message:expr $(,)?) => {
        $crate::log_emergency!($logger, $message, $crate::context::Context::new())
    };
    ($logger:expr, $message:expr, $context:expr $(,)?) => {
        $logger.log_at(
            $crate::severity::Severity::Emergency,
            $crate::source_location!(),
            $message,
            $context,
        )
    };
}
