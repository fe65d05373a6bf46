//! The per-definition property map and its codec loop.

use std::collections::BTreeMap;

use legacy_config_buffers::{Reader, Writer};

use crate::codec::PropertyCodec;
use crate::error::ConfigError;
use crate::property::Property;
use crate::registry::PropertyRegistry;
use crate::value::{PropertyValue, Value};
use crate::DEFINITION_TERMINATOR;

/// The explicitly-set property values of one definition.
///
/// Keyed by opcode, so one entry per descriptor is structural and encoding
/// walks ascending opcode order for free. A property that was never set (or
/// was [cleared](Self::clear)) is *absent*: reads fall back to the
/// descriptor default and re-encoding skips it. Absence is deliberately
/// distinct from "present with the default value" — an entry the archive
/// spelled out stays spelled out, which is what makes unmutated round trips
/// byte-exact.
#[derive(Debug, Clone)]
pub struct PropertyMap {
    registry: &'static PropertyRegistry,
    values: BTreeMap<u8, Value>,
}

impl PartialEq for PropertyMap {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.registry, other.registry) && self.values == other.values
    }
}

impl Eq for PropertyMap {}

impl PropertyMap {
    /// Creates an empty map: every property reads as its default.
    pub fn new(registry: &'static PropertyRegistry) -> Self {
        Self {
            registry,
            values: BTreeMap::new(),
        }
    }

    /// Decodes one wire entry.
    ///
    /// Reads opcode-tagged payloads until the terminator byte. Opcodes
    /// missing from `registry` fail with [`ConfigError::UnknownOpcode`];
    /// running out of input anywhere before the terminator fails with
    /// [`ConfigError::TruncatedEntry`]. Bytes after the terminator are left
    /// unread — slicing entries apart is the archive layer's job.
    pub fn decode(registry: &'static PropertyRegistry, data: &[u8]) -> Result<Self, ConfigError> {
        let mut reader = Reader::new(data);
        let mut values = BTreeMap::new();

        loop {
            let opcode = reader.u8()?;
            if opcode == DEFINITION_TERMINATOR {
                break;
            }
            let descriptor = registry.lookup(opcode)?;
            let value = descriptor.codec().decode(&mut reader)?;
            values.insert(opcode, value);
        }

        Ok(Self { registry, values })
    }

    /// Encodes the present entries back to wire form.
    ///
    /// Entries are written in ascending opcode order — a deliberate
    /// normalization, since original archives were free to order entries
    /// arbitrarily — and closed with the terminator byte. Absent properties
    /// are not written.
    pub fn encode(&self) -> Result<Vec<u8>, ConfigError> {
        let mut writer = Writer::new();

        for (&opcode, value) in &self.values {
            let descriptor = self.registry.lookup(opcode)?;
            // A flag set back to false has no wire representation; treat it
            // as absent rather than failing the whole entry.
            if descriptor.codec() == PropertyCodec::Flag && *value == Value::Bool(false) {
                continue;
            }
            writer.u8(opcode);
            descriptor.codec().encode(&mut writer, value)?;
        }

        writer.u8(DEFINITION_TERMINATOR);
        Ok(writer.into_vec())
    }

    /// The registry this map decodes and encodes against.
    pub fn registry(&self) -> &'static PropertyRegistry {
        self.registry
    }

    /// Reads a property, falling back to its default when absent.
    ///
    /// Total: a missing entry — or one stored under this opcode by a
    /// different category's table — yields the property's default.
    pub fn get<T: PropertyValue>(&self, property: &Property<T>) -> T {
        self.values
            .get(&property.opcode())
            .and_then(T::from_value)
            .unwrap_or_else(|| property.default().clone())
    }

    /// Sets a property, overwriting any present value.
    pub fn set<T: PropertyValue>(&mut self, property: &Property<T>, value: T) {
        self.values.insert(property.opcode(), value.into_value());
    }

    /// Returns a property to the absent state, so it reads as its default
    /// and is no longer re-encoded.
    pub fn clear<T: PropertyValue>(&mut self, property: &Property<T>) {
        self.values.remove(&property.opcode());
    }

    /// Returns `true` when the property was explicitly set.
    pub fn contains<T: PropertyValue>(&self, property: &Property<T>) -> bool {
        self.values.contains_key(&property.opcode())
    }

    /// Number of explicitly-set properties.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when no property was explicitly set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates present `(opcode, value)` entries in ascending opcode order.
    pub fn entries(&self) -> impl Iterator<Item = (u8, &Value)> {
        self.values.iter().map(|(&opcode, value)| (opcode, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::OnceLock;

    static ALPHA: Property<i32> = Property::new(1, "alpha", PropertyCodec::UShort, 0);
    static BETA: Property<i32> = Property::new(3, "beta", PropertyCodec::UByte, 7);
    static GAMMA: Property<bool> = Property::new(5, "gamma", PropertyCodec::Flag, false);

    fn registry() -> &'static PropertyRegistry {
        static REGISTRY: OnceLock<PropertyRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            PropertyRegistry::builder("test")
                .property(&ALPHA)
                .property(&BETA)
                .property(&GAMMA)
                .build()
        })
    }

    #[test]
    fn decode_stops_at_terminator() {
        let data = [0x01, 0x01, 0x00, 0x00, 0xff, 0xff];
        let map = PropertyMap::decode(registry(), &data).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&ALPHA), 256);
    }

    #[test]
    fn decode_unknown_opcode() {
        let data = [0x02, 0xff, 0x00];
        assert_eq!(
            PropertyMap::decode(registry(), &data),
            Err(ConfigError::UnknownOpcode(2))
        );
    }

    #[test]
    fn decode_missing_terminator() {
        let data = [0x01, 0x01, 0x00];
        assert_eq!(
            PropertyMap::decode(registry(), &data),
            Err(ConfigError::TruncatedEntry)
        );
    }

    #[test]
    fn decode_truncated_payload() {
        let data = [0x01, 0x01];
        assert_eq!(
            PropertyMap::decode(registry(), &data),
            Err(ConfigError::TruncatedEntry)
        );
    }

    #[test]
    fn decode_empty_input() {
        assert_eq!(
            PropertyMap::decode(registry(), &[]),
            Err(ConfigError::TruncatedEntry)
        );
    }

    #[test]
    fn empty_map_reads_defaults() {
        let map = PropertyMap::new(registry());
        assert_eq!(map.get(&ALPHA), 0);
        assert_eq!(map.get(&BETA), 7);
        assert!(!map.get(&GAMMA));
        assert!(map.is_empty());
    }

    #[test]
    fn set_then_get() {
        let mut map = PropertyMap::new(registry());
        map.set(&BETA, 42);
        assert_eq!(map.get(&BETA), 42);
        assert!(map.contains(&BETA));
        assert!(!map.contains(&ALPHA));
    }

    #[test]
    fn clear_restores_default_and_absence() {
        let mut map = PropertyMap::new(registry());
        map.set(&BETA, 42);
        map.clear(&BETA);
        assert_eq!(map.get(&BETA), 7);
        assert_eq!(map.encode().unwrap(), [DEFINITION_TERMINATOR]);
    }

    #[test]
    fn explicit_default_still_encodes() {
        // Present-with-default is not the same as absent.
        let mut map = PropertyMap::new(registry());
        map.set(&BETA, 7);
        assert_eq!(map.encode().unwrap(), [0x03, 0x07, 0x00]);
    }

    #[test]
    fn encode_orders_by_opcode() {
        let mut map = PropertyMap::new(registry());
        map.set(&BETA, 1);
        map.set(&ALPHA, 2);
        assert_eq!(map.encode().unwrap(), [0x01, 0x00, 0x02, 0x03, 0x01, 0x00]);
    }

    #[test]
    fn false_flag_encodes_as_absent() {
        let mut map = PropertyMap::new(registry());
        map.set(&GAMMA, true);
        assert_eq!(map.encode().unwrap(), [0x05, 0x00]);
        map.set(&GAMMA, false);
        assert_eq!(map.encode().unwrap(), [0x00]);
    }

    #[test]
    fn roundtrip_preserves_bytes() {
        let data = [0x01, 0x12, 0x34, 0x03, 0x09, 0x05, 0x00];
        let map = PropertyMap::decode(registry(), &data).unwrap();
        assert_eq!(map.encode().unwrap(), data);
    }
}
