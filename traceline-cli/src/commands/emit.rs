//! `traceline emit` - emit a single structured log entry.

use std::sync::Arc;

use clap::Args;
use serde_json::Value;
use traceline::config::{Environment, LoggerSettings};
use traceline::context::Context;
use traceline::logger::Logger;
use traceline::severity::Severity;
use traceline::trace::{CloudTrace, NoTrace, TraceProvider};

use crate::error::CliError;

#[derive(Debug, Args)]
pub struct EmitArgs {
    /// Severity level, by name or numeric value (e.g. ERROR or 500)
    #[arg(long)]
    pub severity: String,

    /// Log message
    #[arg(long)]
    pub message: String,

    /// Context annotation as KEY=VALUE; repeatable. Values parse as JSON
    /// where possible, otherwise as plain strings
    #[arg(long = "context", value_name = "KEY=VALUE")]
    pub context: Vec<String>,

    /// Minimum severity floor (overrides the LOG_LEVEL variable)
    #[arg(long)]
    pub min_level: Option<String>,

    /// Environment mode: dev, test, or prod (overrides ENVIRONMENT)
    #[arg(long)]
    pub environment: Option<String>,

    /// Google Cloud project id for trace correlation
    #[arg(long)]
    pub project: Option<String>,

    /// Value of the inbound X-Cloud-Trace-Context header
    #[arg(long)]
    pub trace_header: Option<String>,
}

/// Split a KEY=VALUE argument into its parts.
///
/// The value parses as JSON where possible (`attempts=3` becomes a
/// number), falling back to a plain string.
fn parse_context_pair(pair: &str) -> Result<(String, Value), CliError> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| CliError::InvalidContextPair(pair.to_string()))?;
    if key.is_empty() {
        return Err(CliError::InvalidContextPair(pair.to_string()));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

/// Build the trace provider from the CLI arguments.
fn trace_provider(args: &EmitArgs) -> Arc<dyn TraceProvider> {
    match &args.project {
        Some(project) => {
            let mut trace = CloudTrace::new(project.clone());
            if let Some(header) = &args.trace_header {
                trace = trace.with_header(header.clone());
            }
            Arc::new(trace)
        }
        None => Arc::new(NoTrace),
    }
}

/// Emit one entry with the configured logger.
pub fn run(args: EmitArgs) -> Result<(), CliError> {
    let mut settings = LoggerSettings::from_env()?;
    if let Some(level) = &args.min_level {
        settings = settings.with_min_level(Severity::lookup(level.as_str())?);
    }
    if let Some(environment) = &args.environment {
        settings = settings.with_environment(Environment::from_name(environment));
    }

    let mut context = Context::new();
    for pair in &args.context {
        let (key, value) = parse_context_pair(pair)?;
        context.insert(key, value);
    }

    let logger = Logger::new(&settings, trace_provider(&args));
    logger.log(args.severity.as_str(), args.message.clone(), context)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pairs_split_on_the_first_equals() {
        let (key, value) = parse_context_pair("path=/data=backup").unwrap();
        assert_eq!(key, "path");
        assert_eq!(value, json!("/data=backup"));
    }

    #[test]
    fn json_values_keep_their_type() {
        assert_eq!(parse_context_pair("attempts=3").unwrap().1, json!(3));
        assert_eq!(parse_context_pair("ok=true").unwrap().1, json!(true));
        assert_eq!(
            parse_context_pair("tags=[\"a\",\"b\"]").unwrap().1,
            json!(["a", "b"])
        );
    }

    #[test]
    fn plain_text_values_become_strings() {
        assert_eq!(
            parse_context_pair("region=eu-west1").unwrap().1,
            json!("eu-west1")
        );
    }

    #[test]
    fn missing_separator_is_rejected() {
        assert!(parse_context_pair("nopair").is_err());
    }

    #[test]
    fn empty_key_is_rejected() {
        assert!(parse_context_pair("=value").is_err());
    }

    #[test]
    fn provider_without_project_yields_no_trace() {
        let args = EmitArgs {
            severity: "INFO".into(),
            message: "m".into(),
            context: vec![],
            min_level: None,
            environment: None,
            project: None,
            trace_header: Some("abc123/1;o=1".into()),
        };
        assert_eq!(trace_provider(&args).current_trace_id(), None);
    }

    #[test]
    fn provider_with_project_and_header_yields_trace() {
        let args = EmitArgs {
            severity: "INFO".into(),
            message: "m".into(),
            context: vec![],
            min_level: None,
            environment: None,
            project: Some("demo".into()),
            trace_header: Some("abc123/1;o=1".into()),
        };
        assert_eq!(
            trace_provider(&args).current_trace_id().as_deref(),
            Some("projects/demo/traces/abc123")
        );
    }
}
