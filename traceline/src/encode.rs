//! JSON-safe encoding of context values.
//!
//! Log context values must serialize into a single JSON line. Native JSON
//! primitives pass through unchanged; date and time values render as
//! ISO-8601 strings; anything else degrades to its textual representation
//! via [`encode_serialize`] rather than failing the entry.

use std::fmt;
use std::time::SystemTime;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;
use serde_json::{Number, Value};

/// Conversion into a JSON-safe [`Value`].
///
/// Implementations must be total: encoding never fails. Types without a
/// natural JSON form should render as strings.
pub trait Encode {
    /// Encode the value as JSON.
    fn encode(&self) -> Value;
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self) -> Value {
        (**self).encode()
    }
}

impl Encode for str {
    fn encode(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl Encode for String {
    fn encode(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Encode for bool {
    fn encode(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! encode_integer {
    ($($ty:ty)*) => {
        $(
            impl Encode for $ty {
                fn encode(&self) -> Value {
                    Value::Number(Number::from(*self))
                }
            }
        )*
    };
}

encode_integer!(i8 i16 i32 i64 isize u8 u16 u32 u64 usize);

impl Encode for f64 {
    fn encode(&self) -> Value {
        // Non-finite floats have no JSON form; render them as text.
        match Number::from_f64(*self) {
            Some(number) => Value::Number(number),
            None => Value::String(self.to_string()),
        }
    }
}

impl Encode for f32 {
    fn encode(&self) -> Value {
        f64::from(*self).encode()
    }
}

impl Encode for Value {
    fn encode(&self) -> Value {
        self.clone()
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode(&self) -> Value {
        match self {
            Some(value) => value.encode(),
            None => Value::Null,
        }
    }
}

impl<T: Encode> Encode for [T] {
    fn encode(&self) -> Value {
        Value::Array(self.iter().map(Encode::encode).collect())
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self) -> Value {
        self.as_slice().encode()
    }
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode(&self) -> Value {
        self.as_slice().encode()
    }
}

impl<Tz: TimeZone> Encode for DateTime<Tz>
where
    Tz::Offset: fmt::Display,
{
    fn encode(&self) -> Value {
        Value::String(self.to_rfc3339())
    }
}

impl Encode for NaiveDate {
    fn encode(&self) -> Value {
        Value::String(self.format("%Y-%m-%d").to_string())
    }
}

impl Encode for NaiveDateTime {
    fn encode(&self) -> Value {
        Value::String(self.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
    }
}

impl Encode for SystemTime {
    fn encode(&self) -> Value {
        Value::String(DateTime::<Utc>::from(*self).to_rfc3339())
    }
}

/// Encode an arbitrary serializable value, degrading to its `Debug` text
/// when JSON conversion fails.
///
/// This is the fallback path of the encoder: an entry must never fail to
/// emit because one context value could not be represented.
pub fn encode_serialize<T>(value: &T) -> Value
where
    T: Serialize + fmt::Debug,
{
    serde_json::to_value(value).unwrap_or_else(|_| Value::String(format!("{value:?}")))
}
