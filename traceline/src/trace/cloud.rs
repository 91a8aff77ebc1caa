//! Google Cloud trace-context provider.

use crate::trace::TraceProvider;

/// Environment variable naming the Google Cloud project.
pub const ENV_PROJECT_ID: &str = "GOOGLE_CLOUD_PROJECT";

/// Trace provider backed by the `X-Cloud-Trace-Context` request header.
///
/// The header carries `TRACE_ID/SPAN_ID;o=OPTIONS`; only the leading trace
/// id is used. The provider yields the fully-qualified resource name Cloud
/// Logging expects, `projects/<project>/traces/<trace-id>`, or `None` when
/// the header is absent or malformed or no project id is configured.
///
/// ```
/// use traceline::trace::{CloudTrace, TraceProvider};
///
/// let trace = CloudTrace::new("demo-project")
///     .with_header("105445aa7843bc8bf206b12000100000/1;o=1");
/// assert_eq!(
///     trace.current_trace_id().as_deref(),
///     Some("projects/demo-project/traces/105445aa7843bc8bf206b12000100000"),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CloudTrace {
    project_id: String,
    header: Option<String>,
}

impl CloudTrace {
    /// Name of the inbound request header this provider reads.
    pub const HEADER_NAME: &'static str = "X-Cloud-Trace-Context";

    /// Create a provider for the given project, with no request header yet.
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            header: None,
        }
    }

    /// Create a provider with the project id taken from the
    /// `GOOGLE_CLOUD_PROJECT` environment variable.
    ///
    /// When the variable is unset the provider yields no trace id.
    pub fn from_env() -> Self {
        Self::new(std::env::var(ENV_PROJECT_ID).unwrap_or_default())
    }

    /// Attach the raw `X-Cloud-Trace-Context` header value from the
    /// inbound request.
    pub fn with_header(mut self, value: impl Into<String>) -> Self {
        self.header = Some(value.into());
        self
    }

    /// Extract the trace id portion of a header value.
    ///
    /// Everything up to the first `/` or `;` must be a non-empty
    /// hexadecimal string; anything else is treated as malformed.
    fn parse_trace_id(header: &str) -> Option<&str> {
        let id = header
            .trim()
            .split(['/', ';'])
            .next()
            .unwrap_or_default();
        let valid = !id.is_empty() && id.chars().all(|c| c.is_ascii_hexdigit());
        valid.then_some(id)
    }
}

impl TraceProvider for CloudTrace {
    fn current_trace_id(&self) -> Option<String> {
        if self.project_id.is_empty() {
            return None;
        }
        let header = self.header.as_deref()?;
        let trace_id = Self::parse_trace_id(header)?;
        Some(format!("projects/{}/traces/{}", self.project_id, trace_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "105445aa7843bc8bf206b12000100000/1;o=1";

    #[test]
    fn yields_qualified_trace_name() {
        let trace = CloudTrace::new("demo").with_header(HEADER);
        assert_eq!(
            trace.current_trace_id().as_deref(),
            Some("projects/demo/traces/105445aa7843bc8bf206b12000100000"),
        );
    }

    #[test]
    fn no_header_yields_none() {
        assert_eq!(CloudTrace::new("demo").current_trace_id(), None);
    }

    #[test]
    fn empty_project_yields_none() {
        let trace = CloudTrace::new("").with_header(HEADER);
        assert_eq!(trace.current_trace_id(), None);
    }

    #[test]
    fn header_without_span_or_options_still_parses() {
        let trace = CloudTrace::new("demo").with_header("abc123");
        assert_eq!(
            trace.current_trace_id().as_deref(),
            Some("projects/demo/traces/abc123"),
        );
    }

    #[test]
    fn options_without_span_are_stripped() {
        let trace = CloudTrace::new("demo").with_header("abc123;o=1");
        assert_eq!(
            trace.current_trace_id().as_deref(),
            Some("projects/demo/traces/abc123"),
        );
    }

    #[test]
    fn malformed_headers_yield_none() {
        for header in ["", "/1;o=1", "not hex!", "xyz-123/1"] {
            let trace = CloudTrace::new("demo").with_header(header);
            assert_eq!(trace.current_trace_id(), None, "header: {header:?}");
        }
    }
}
