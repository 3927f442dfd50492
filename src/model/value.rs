//! Runtime-typed attribute values.
//!
//! Provides the [Value] enum stored in
//! [AttributeColumn](crate::model::AttributeColumn)s, together with
//! [ValueKind], the primitive kind of a value as discovered at read time.

use std::fmt;

// =#========================================================================#=
// VALUE KIND
// =#========================================================================€=
/// Primitive kind of a [Value].
///
/// Mirrors the set of primitive array types an attributed tree may carry.
/// [ValueKind::Unknown] stands for "no value could be read", e.g. when reading
/// past the end of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Char,
    SignedChar,
    UnsignedChar,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    Int64,
    UnsignedInt64,
    IdType,
    Float,
    Double,
    String,
    Unknown,
}

impl ValueKind {
    /// Returns the kind of an optional value, [ValueKind::Unknown] if absent.
    pub fn of(value: Option<&Value>) -> Self {
        value.map_or(ValueKind::Unknown, Value::kind)
    }
}

// =#========================================================================#=
// VALUE
// =#========================================================================€=
/// A single attribute value of one of the supported primitive kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    /// Plain `char` in the C sense, i.e. a signed byte used for characters
    Char(i8),
    SignedChar(i8),
    UnsignedChar(u8),
    Short(i16),
    UnsignedShort(u16),
    Int(i32),
    UnsignedInt(u32),
    Long(i64),
    UnsignedLong(u64),
    Int64(i64),
    UnsignedInt64(u64),
    /// Identifier typed value (vertex or edge id)
    IdType(i64),
    Float(f32),
    Double(f64),
    String(String),
}

impl Value {
    /// Returns the [ValueKind] of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Char(_) => ValueKind::Char,
            Value::SignedChar(_) => ValueKind::SignedChar,
            Value::UnsignedChar(_) => ValueKind::UnsignedChar,
            Value::Short(_) => ValueKind::Short,
            Value::UnsignedShort(_) => ValueKind::UnsignedShort,
            Value::Int(_) => ValueKind::Int,
            Value::UnsignedInt(_) => ValueKind::UnsignedInt,
            Value::Long(_) => ValueKind::Long,
            Value::UnsignedLong(_) => ValueKind::UnsignedLong,
            Value::Int64(_) => ValueKind::Int64,
            Value::UnsignedInt64(_) => ValueKind::UnsignedInt64,
            Value::IdType(_) => ValueKind::IdType,
            Value::Float(_) => ValueKind::Float,
            Value::Double(_) => ValueKind::Double,
            Value::String(_) => ValueKind::String,
        }
    }

    /// Converts this value to `f64`.
    ///
    /// Booleans become `0.0`/`1.0`, strings are parsed after trimming and
    /// fall back to `0.0` if they do not hold a number.
    pub fn to_f64(&self) -> f64 {
        match self {
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Char(v) | Value::SignedChar(v) => f64::from(*v),
            Value::UnsignedChar(v) => f64::from(*v),
            Value::Short(v) => f64::from(*v),
            Value::UnsignedShort(v) => f64::from(*v),
            Value::Int(v) => f64::from(*v),
            Value::UnsignedInt(v) => f64::from(*v),
            Value::Long(v) | Value::Int64(v) | Value::IdType(v) => *v as f64,
            Value::UnsignedLong(v) | Value::UnsignedInt64(v) => *v as f64,
            Value::Float(v) => f64::from(*v),
            Value::Double(v) => *v,
            Value::String(s) => s.trim().parse().unwrap_or(0.0),
        }
    }
}

/// Formats a double such that it always reads as a floating point number,
/// e.g. `2.0` rather than `2`. Infinities are spelled `INF` and `-INF`.
pub(crate) fn format_double(v: f64) -> String {
    if v.is_infinite() {
        return if v.is_sign_negative() { "-INF" } else { "INF" }.to_string();
    }
    format!("{v:?}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(v) | Value::SignedChar(v) => write!(f, "{v}"),
            Value::UnsignedChar(v) => write!(f, "{v}"),
            Value::Short(v) => write!(f, "{v}"),
            Value::UnsignedShort(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::UnsignedInt(v) => write!(f, "{v}"),
            Value::Long(v) | Value::Int64(v) | Value::IdType(v) => write!(f, "{v}"),
            Value::UnsignedLong(v) | Value::UnsignedInt64(v) => write!(f, "{v}"),
            Value::Float(v) if v.is_infinite() => f.write_str(&format_double(f64::from(*v))),
            Value::Float(v) => write!(f, "{v:?}"),
            Value::Double(v) => f.write_str(&format_double(*v)),
            Value::String(s) => f.write_str(s),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::SignedChar(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::UnsignedChar(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Short(v)
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::UnsignedShort(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::UnsignedInt(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::UnsignedInt64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}
