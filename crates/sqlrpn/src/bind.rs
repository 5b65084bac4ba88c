//! Bind values carried alongside generated SQL.
//!
//! A [`BindValue`] is literal data that never appears in SQL text: the builder
//! writes a `?` placeholder and appends the value to the bind list, in the
//! same left-to-right order as the placeholders.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar parameter value.
///
/// Serializes untagged, so a bind list renders as a plain JSON array
/// (`[1, "alice", null]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BindValue {
    /// SQL NULL
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Unsigned integer above `i64::MAX`
    UInt(u64),
    /// Floating point value
    Float(f64),
    /// String value
    Text(String),
}

impl BindValue {
    /// Convert a JSON scalar into a bind value.
    ///
    /// Integers keep their exact value: `i64` when they fit, `u64` above that.
    /// Returns `None` for arrays and objects, which have no scalar meaning.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        use serde_json::Value as Json;
        match value {
            Json::Null => Some(Self::Null),
            Json::Bool(b) => Some(Self::Bool(*b)),
            Json::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_u64().map(Self::UInt))
                .or_else(|| n.as_f64().map(Self::Float)),
            Json::String(s) => Some(Self::Text(s.clone())),
            Json::Array(_) | Json::Object(_) => None,
        }
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short type label, used by diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::UInt(_) => "uint",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
        }
    }
}

impl fmt::Display for BindValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BindValue {
                fn from(n: $t) -> Self {
                    Self::Int(i64::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

/// Values that fit in `i64` become [`BindValue::Int`].
impl From<u64> for BindValue {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Self::UInt(n), Self::Int)
    }
}

impl From<usize> for BindValue {
    fn from(n: usize) -> Self {
        Self::from(n as u64)
    }
}

impl From<bool> for BindValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f32> for BindValue {
    fn from(x: f32) -> Self {
        Self::Float(f64::from(x))
    }
}

impl From<f64> for BindValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for BindValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for BindValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<BindValue>> From<Option<T>> for BindValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
