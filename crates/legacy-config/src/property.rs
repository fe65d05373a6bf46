//! Typed property declarations and their erased descriptors.

use crate::codec::PropertyCodec;
use crate::value::{PropertyValue, Value};

/// One decodable field of a config category.
///
/// A property ties an opcode tag to a wire codec and a typed default.
/// Category modules declare their tables as `static` items:
///
/// ```
/// use legacy_config::codec::PropertyCodec;
/// use legacy_config::property::Property;
///
/// static PARAMETER: Property<i32> = Property::new(1, "parameter", PropertyCodec::Int, 0);
/// assert_eq!(PARAMETER.opcode(), 1);
/// ```
///
/// Identity is the opcode within one registry. The type parameter exists
/// purely for the accessors: the map stores erased [`Value`]s and converts
/// at the `get`/`set` boundary.
#[derive(Debug)]
pub struct Property<T> {
    opcode: u8,
    name: &'static str,
    codec: PropertyCodec,
    default: T,
}

impl<T: PropertyValue> Property<T> {
    /// Declares a property. Const so tables can live in statics.
    pub const fn new(opcode: u8, name: &'static str, codec: PropertyCodec, default: T) -> Self {
        Self {
            opcode,
            name,
            codec,
            default,
        }
    }

    /// The opcode tag identifying this property on the wire.
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    /// A short machine-readable name, unique within the category.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The wire codec for this property's payload.
    pub fn codec(&self) -> PropertyCodec {
        self.codec
    }

    /// The value reported when the property was never set.
    pub fn default(&self) -> &T {
        &self.default
    }

    /// Erases the type for registry storage.
    pub(crate) fn descriptor(&self) -> Descriptor {
        Descriptor {
            opcode: self.opcode,
            name: self.name,
            codec: self.codec,
            default: self.default.clone().into_value(),
        }
    }
}

/// A type-erased property, as stored in a registry.
///
/// Shared read-only across every definition of the category.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    opcode: u8,
    name: &'static str,
    codec: PropertyCodec,
    default: Value,
}

impl Descriptor {
    /// The opcode tag identifying this property on the wire.
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    /// A short machine-readable name, unique within the category.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The wire codec for this property's payload.
    pub fn codec(&self) -> PropertyCodec {
        self.codec
    }

    /// The erased default value.
    pub fn default(&self) -> &Value {
        &self.default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static PRIORITY: Property<i32> = Property::new(5, "priority", PropertyCodec::UByte, 5);

    #[test]
    fn static_declaration() {
        assert_eq!(PRIORITY.opcode(), 5);
        assert_eq!(PRIORITY.name(), "priority");
        assert_eq!(PRIORITY.codec(), PropertyCodec::UByte);
        assert_eq!(*PRIORITY.default(), 5);
    }

    #[test]
    fn descriptor_erases_default() {
        let descriptor = PRIORITY.descriptor();
        assert_eq!(descriptor.opcode(), 5);
        assert_eq!(*descriptor.default(), Value::Int(5));
    }
}
