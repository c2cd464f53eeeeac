//! Argument values carried alongside rendered SQL.
//!
//! [`Value`] is the closed set of scalars this crate knows how to bind and to
//! format as literals. [`Arg`] adds the named-parameter wrapper used by
//! dialects whose markers reference parameters by name.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A plain argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Timestamp(DateTime<Utc>),
    Uuid(Uuid),
    Json(serde_json::Value),
}

impl Value {
    /// Check if this is SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

macro_rules! impl_value_from {
    ($($ty:ty => |$v:ident| $conv:expr),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from($v: $ty) -> Self {
                    $conv
                }
            }
        )*
    };
}

impl_value_from! {
    bool => |v| Value::Bool(v),
    i8 => |v| Value::Int(i64::from(v)),
    i16 => |v| Value::Int(i64::from(v)),
    i32 => |v| Value::Int(i64::from(v)),
    i64 => |v| Value::Int(v),
    isize => |v| Value::Int(v as i64),
    u8 => |v| Value::UInt(u64::from(v)),
    u16 => |v| Value::UInt(u64::from(v)),
    u32 => |v| Value::UInt(u64::from(v)),
    u64 => |v| Value::UInt(v),
    usize => |v| Value::UInt(v as u64),
    f32 => |v| Value::Float(f64::from(v)),
    f64 => |v| Value::Float(v),
    &str => |v| Value::Text(v.to_string()),
    String => |v| Value::Text(v),
    &String => |v| Value::Text(v.clone()),
    Vec<u8> => |v| Value::Bytes(v),
    &[u8] => |v| Value::Bytes(v.to_vec()),
    DateTime<Utc> => |v| Value::Timestamp(v),
    Uuid => |v| Value::Uuid(v),
    serde_json::Value => |v| Value::Json(v),
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// A bound argument: a plain value or a named parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Positional value
    Value(Value),
    /// Value carrying an explicit parameter name
    Named { name: String, value: Value },
}

impl Arg {
    /// Create a named argument.
    pub fn named(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Arg::Named {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The carried value, ignoring any name.
    pub fn value(&self) -> &Value {
        match self {
            Arg::Value(v) | Arg::Named { value: v, .. } => v,
        }
    }

    /// The explicit parameter name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Arg::Value(_) => None,
            Arg::Named { name, .. } => Some(name),
        }
    }

    /// Drop the name and keep the value.
    pub fn into_value(self) -> Value {
        match self {
            Arg::Value(v) | Arg::Named { value: v, .. } => v,
        }
    }
}

impl<T: Into<Value>> From<T> for Arg {
    fn from(v: T) -> Self {
        Arg::Value(v.into())
    }
}

/// Shorthand for [`Arg::named`].
pub fn named(name: impl Into<String>, value: impl Into<Value>) -> Arg {
    Arg::named(name, value)
}
