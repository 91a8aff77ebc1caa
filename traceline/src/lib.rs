//! Traceline - structured JSON logging with request trace correlation
//!
//! This library converts application log calls into single-line JSON
//! entries annotated with severity, contextual fields, call-site location
//! (for warnings and above), and a distributed-trace identifier extracted
//! from the inbound request.
//!
//! # High-Level API
//!
//! Build a [`logger::Logger`] once per execution context and call the
//! per-level methods or macros:
//!
//! ```
//! use std::sync::Arc;
//! use traceline::config::LoggerSettings;
//! use traceline::logger::Logger;
//! use traceline::trace::CloudTrace;
//! use traceline::{context, log_error};
//!
//! let trace = CloudTrace::new("demo-project")
//!     .with_header("105445aa7843bc8bf206b12000100000/1;o=1");
//! let logger = Logger::new(&LoggerSettings::new(), Arc::new(trace));
//!
//! logger.info("request accepted", context! { "route" => "/api/v1" });
//! log_error!(logger, "disk full", context! { "path" => "/data" });
//! ```
//!
//! Emission is synchronous: each call resolves the severity, filters
//! against the logger's threshold, builds the entry, and writes one
//! flushed line to standard output.

pub mod config;
pub mod context;
pub mod encode;
pub mod entry;
pub mod logger;
pub mod severity;
pub mod sink;
pub mod trace;

/// Version of the traceline library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
