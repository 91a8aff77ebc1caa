//! Caller-supplied key/value annotations attached to a single log entry.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::encode::{encode_serialize, Encode};

/// An insertion-ordered mapping of annotation keys to JSON values.
///
/// Values are converted through the [`Encode`] trait on insertion, so a
/// context always holds JSON-safe data and serialization of an entry cannot
/// fail on an exotic value.
///
/// ```
/// use traceline::context::Context;
///
/// let ctx = Context::new()
///     .with("path", "/data")
///     .with("attempts", 3);
/// assert_eq!(ctx.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Context {
    entries: Map<String, Value>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the context holds no annotations.
    ///
    /// Empty contexts are omitted from serialized entries entirely, so
    /// downstream consumers can distinguish "no context" from an empty one.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of annotations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Insert an annotation, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Encode) {
        self.entries.insert(key.into(), value.encode());
    }

    /// Insert an arbitrary serializable value, degrading to its `Debug`
    /// text when JSON conversion fails.
    pub fn insert_serialize<T>(&mut self, key: impl Into<String>, value: &T)
    where
        T: Serialize + fmt::Debug,
    {
        self.entries.insert(key.into(), encode_serialize(value));
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Encode) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up an annotation by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Iterate over annotations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}

impl From<Map<String, Value>> for Context {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

/// Build a [`Context`] from literal key/value pairs.
///
/// ```
/// use traceline::context;
///
/// let ctx = context! {
///     "path" => "/data",
///     "attempts" => 3,
/// };
/// assert_eq!(ctx.get("path"), Some(&serde_json::json!("/data")));
/// ```
#[macro_export]
macro_rules! context {
    () => {
        $crate::context::Context::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut ctx = $crate::context::Context::new();
        $(ctx.insert($key, $value);)+
        ctx
    }};
}
