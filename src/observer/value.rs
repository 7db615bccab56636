//! Values carried by an observable.

use std::fmt;

/// A closed set of value kinds an [`ObservableValue`](super::ObservableValue) can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl Value {
    /// Name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Bool(_) => "bool",
        }
    }

    /// Convert to `T`, failing with [`ValueError::TypeMismatch`] when the
    /// variant does not match.
    pub fn get<T: FromValue>(&self) -> Result<T, ValueError> {
        T::from_value(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// Errors from typed reads of a [`Value`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("Expected a {expected} value, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

/// Types that can be read out of a [`Value`].
///
/// Conversions are exact: an `Int` is never coerced to `f64` and vice versa.
pub trait FromValue: Sized {
    /// Variant name reported in mismatch errors.
    const KIND: &'static str;

    fn from_value(value: &Value) -> Result<Self, ValueError>;
}

fn mismatch<T: FromValue>(value: &Value) -> ValueError {
    ValueError::TypeMismatch {
        expected: T::KIND,
        found: value.kind(),
    }
}

impl FromValue for i64 {
    const KIND: &'static str = "int";

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Int(v) => Ok(*v),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl FromValue for f64 {
    const KIND: &'static str = "float";

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Float(v) => Ok(*v),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl FromValue for String {
    const KIND: &'static str = "text";

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Text(v) => Ok(v.clone()),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl FromValue for bool {
    const KIND: &'static str = "bool";

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Bool(v) => Ok(*v),
            other => Err(mismatch::<Self>(other)),
        }
    }
}
