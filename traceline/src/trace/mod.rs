//! Distributed-trace identifier providers.
//!
//! A log entry can carry an opaque trace identifier correlating it with the
//! request that produced it. The [`TraceProvider`] trait is the narrow seam
//! between the logger and whatever owns the request context:
//!
//! - [`CloudTrace`]: derives the identifier from an inbound
//!   `X-Cloud-Trace-Context` header and a Google Cloud project id
//! - [`NoTrace`]: never yields an identifier (non-request contexts)
//! - [`FixedTrace`]: constant identifier, for tests and batch jobs
//!
//! The logger queries the provider once per log call and includes the
//! returned string verbatim; it never parses or caches it.

mod cloud;
mod fixed;
mod noop;
mod r#trait;

pub use cloud::CloudTrace;
pub use fixed::FixedTrace;
pub use noop::NoTrace;
pub use r#trait::TraceProvider;
