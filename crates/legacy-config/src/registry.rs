//! Per-category opcode tables.

use std::collections::BTreeMap;

use crate::error::ConfigError;
use crate::property::{Descriptor, Property};
use crate::value::PropertyValue;
use crate::DEFINITION_TERMINATOR;

/// The immutable opcode table for one config category.
///
/// Built once at startup from the category's `static` property table and
/// shared read-only for the rest of the process; concurrent decodes need no
/// synchronization around it.
#[derive(Debug)]
pub struct PropertyRegistry {
    entry_name: &'static str,
    descriptors: BTreeMap<u8, Descriptor>,
}

impl PropertyRegistry {
    /// Starts building a registry for the archive entry `entry_name`.
    pub fn builder(entry_name: &'static str) -> RegistryBuilder {
        RegistryBuilder {
            entry_name,
            descriptors: BTreeMap::new(),
        }
    }

    /// The archive entry name this category's table is stored under.
    pub fn entry_name(&self) -> &'static str {
        self.entry_name
    }

    /// Resolves an opcode read off the wire.
    pub fn lookup(&self, opcode: u8) -> Result<&Descriptor, ConfigError> {
        self.descriptors
            .get(&opcode)
            .ok_or(ConfigError::UnknownOpcode(opcode))
    }

    /// Returns `true` when the registry declares `opcode`.
    pub fn contains(&self, opcode: u8) -> bool {
        self.descriptors.contains_key(&opcode)
    }

    /// Number of declared properties.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns `true` for a registry with no properties.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Iterates descriptors in ascending opcode order.
    pub fn descriptors(&self) -> impl Iterator<Item = &Descriptor> {
        self.descriptors.values()
    }
}

/// Builder for [`PropertyRegistry`].
///
/// Registration mistakes are programming errors in a category's static
/// table, not runtime conditions, so the builder panics on them the way the
/// original asserts at class-load time.
pub struct RegistryBuilder {
    entry_name: &'static str,
    descriptors: BTreeMap<u8, Descriptor>,
}

impl RegistryBuilder {
    /// Registers one property.
    ///
    /// # Panics
    ///
    /// Panics when the property claims the reserved terminator opcode or an
    /// opcode already registered for this category.
    pub fn property<T: PropertyValue>(mut self, property: &Property<T>) -> Self {
        let descriptor = property.descriptor();
        assert_ne!(
            descriptor.opcode(),
            DEFINITION_TERMINATOR,
            "{}: opcode 0 is reserved for the terminator",
            self.entry_name,
        );
        let replaced = self.descriptors.insert(descriptor.opcode(), descriptor);
        if let Some(replaced) = replaced {
            panic!(
                "{}: opcode {} registered twice ({})",
                self.entry_name,
                replaced.opcode(),
                replaced.name(),
            );
        }
        self
    }

    /// Finalizes the table.
    pub fn build(self) -> PropertyRegistry {
        PropertyRegistry {
            entry_name: self.entry_name,
            descriptors: self.descriptors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::PropertyCodec;

    static ALPHA: Property<i32> = Property::new(1, "alpha", PropertyCodec::UByte, 0);
    static BETA: Property<i32> = Property::new(2, "beta", PropertyCodec::UShort, 0);
    static RESERVED: Property<i32> = Property::new(0, "reserved", PropertyCodec::UByte, 0);

    #[test]
    fn lookup_hits_and_misses() {
        let registry = PropertyRegistry::builder("test")
            .property(&ALPHA)
            .property(&BETA)
            .build();

        assert_eq!(registry.entry_name(), "test");
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup(1).unwrap().name(), "alpha");
        assert_eq!(registry.lookup(3), Err(ConfigError::UnknownOpcode(3)));
    }

    #[test]
    fn descriptors_iterate_in_opcode_order() {
        let registry = PropertyRegistry::builder("test")
            .property(&BETA)
            .property(&ALPHA)
            .build();
        let opcodes: Vec<u8> = registry.descriptors().map(Descriptor::opcode).collect();
        assert_eq!(opcodes, [1, 2]);
    }

    #[test]
    #[should_panic(expected = "opcode 0 is reserved")]
    fn terminator_opcode_rejected() {
        let _ = PropertyRegistry::builder("test").property(&RESERVED);
    }

    #[test]
    #[should_panic(expected = "registered twice")]
    fn duplicate_opcode_rejected() {
        let _ = PropertyRegistry::builder("test")
            .property(&ALPHA)
            .property(&ALPHA);
    }
}
