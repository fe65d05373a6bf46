//! The heterogeneous value domain of config properties.

use crate::kit::Part;
use crate::sequence::FrameCollection;

/// A decoded property value.
///
/// The variants form a closed set: every wire codec produces exactly one of
/// them, and category property tables never need anything outside it.
/// Unsigned byte and short wire values widen to [`Value::Int`] on decode, the
/// same way the client reads them into plain ints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Any integer-valued property, regardless of wire width.
    Int(i32),
    /// A presence flag. Decoding the opcode alone yields `true`.
    Bool(bool),
    /// A terminator-delimited ASCII string.
    String(String),
    /// A length-prefixed list of bytes.
    ByteList(Vec<u8>),
    /// A length-prefixed list of unsigned shorts.
    ShortList(Vec<u16>),
    /// An animation frame table.
    Frames(FrameCollection),
    /// An identikit body part.
    Part(Part),
}

/// Conversion between a Rust type and its [`Value`] variant.
///
/// Implemented for exactly the types that can sit in a [`Property`]
/// declaration; this is what makes `get`/`set` statically typed while the
/// map itself stores erased values.
///
/// [`Property`]: crate::property::Property
pub trait PropertyValue: Clone + Sized {
    /// Wraps the typed value.
    fn into_value(self) -> Value;

    /// Extracts the typed value, or `None` when the variant does not match.
    fn from_value(value: &Value) -> Option<Self>;
}

impl PropertyValue for i32 {
    fn into_value(self) -> Value {
        Value::Int(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl PropertyValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl PropertyValue for String {
    fn into_value(self) -> Value {
        Value::String(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl PropertyValue for Vec<u8> {
    fn into_value(self) -> Value {
        Value::ByteList(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::ByteList(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl PropertyValue for Vec<u16> {
    fn into_value(self) -> Value {
        Value::ShortList(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::ShortList(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl PropertyValue for FrameCollection {
    fn into_value(self) -> Value {
        Value::Frames(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Frames(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl PropertyValue for Part {
    fn into_value(self) -> Value {
        Value::Part(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Part(v) => Some(*v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_roundtrip() {
        let value = 42i32.into_value();
        assert_eq!(value, Value::Int(42));
        assert_eq!(i32::from_value(&value), Some(42));
    }

    #[test]
    fn mismatched_variant_is_none() {
        assert_eq!(i32::from_value(&Value::Bool(true)), None);
        assert_eq!(bool::from_value(&Value::Int(1)), None);
    }

    #[test]
    fn list_roundtrip() {
        let models = vec![216u16, 217, 218];
        let value = models.clone().into_value();
        assert_eq!(Vec::<u16>::from_value(&value), Some(models));
    }
}
