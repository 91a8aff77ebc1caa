//! Trace provider trait definition.

/// Source of the distributed-trace identifier for log entries.
///
/// Implementations must be `Send + Sync` so one provider can back a logger
/// shared across threads.
pub trait TraceProvider: Send + Sync {
    /// The trace identifier for the current execution context, or `None`
    /// when there is no active trace.
    ///
    /// Called once per log call; the result is included in the entry
    /// verbatim under the trace key and is otherwise treated as opaque.
    fn current_trace_id(&self) -> Option<String>;
}
