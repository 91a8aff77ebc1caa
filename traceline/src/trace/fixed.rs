//! Fixed-identifier trace provider.

use crate::trace::TraceProvider;

/// A trace provider that always yields the same identifier.
///
/// Intended for tests and for execution contexts with a precomputed trace,
/// such as a batch job correlated with a parent request.
#[derive(Debug, Clone)]
pub struct FixedTrace {
    trace_id: String,
}

impl FixedTrace {
    /// Create a provider yielding `trace_id` on every query.
    pub fn new(trace_id: impl Into<String>) -> Self {
        Self {
            trace_id: trace_id.into(),
        }
    }
}

impl TraceProvider for FixedTrace {
    fn current_trace_id(&self) -> Option<String> {
        Some(self.trace_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_the_configured_id() {
        let provider = FixedTrace::new("projects/demo/traces/abc");
        assert_eq!(
            provider.current_trace_id().as_deref(),
            Some("projects/demo/traces/abc"),
        );
        assert_eq!(
            provider.current_trace_id().as_deref(),
            Some("projects/demo/traces/abc"),
        );
    }
}
