//! The mutable definition base and the category contract.

use crate::error::ConfigError;
use crate::map::PropertyMap;
use crate::property::Property;
use crate::registry::PropertyRegistry;
use crate::value::PropertyValue;

/// A config definition: an id plus its exclusively-owned property map.
///
/// The id is fixed at construction; everything else is reachable through
/// the map. No codec logic lives here — decode and encode delegate to
/// [`PropertyMap`], which owns the opcode loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDefinition {
    id: u32,
    properties: PropertyMap,
}

impl ConfigDefinition {
    /// Wraps an id and a property map.
    pub fn new(id: u32, properties: PropertyMap) -> Self {
        Self { id, properties }
    }

    /// Creates a definition with no property set.
    pub fn empty(id: u32, registry: &'static PropertyRegistry) -> Self {
        Self::new(id, PropertyMap::new(registry))
    }

    /// Decodes a definition from one archive entry's bytes.
    pub fn decode(
        id: u32,
        registry: &'static PropertyRegistry,
        data: &[u8],
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(id, PropertyMap::decode(registry, data)?))
    }

    /// Encodes the definition back to entry bytes.
    pub fn encode(&self) -> Result<Vec<u8>, ConfigError> {
        self.properties.encode()
    }

    /// The definition's id, assigned from its archive entry position.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Reads a property, falling back to its default when unset.
    pub fn get<T: PropertyValue>(&self, property: &Property<T>) -> T {
        self.properties.get(property)
    }

    /// Sets a property.
    pub fn set<T: PropertyValue>(&mut self, property: &Property<T>, value: T) {
        self.properties.set(property, value);
    }

    /// The underlying property map.
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// Mutable access to the underlying property map.
    pub fn properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.properties
    }
}

/// The contract a config category satisfies.
///
/// A category is a thin wrapper over [`ConfigDefinition`] plus a static
/// opcode table. The archive layer programs against this trait: it locates
/// the section named [`ENTRY_NAME`](Self::ENTRY_NAME), feeds each entry's
/// bytes to [`decode`](Self::decode) with the id taken from entry order,
/// and collects [`encode`](Self::encode) output when re-packaging.
pub trait ConfigCategory: Sized {
    /// Name of the archive entry holding this category's table, without
    /// extension.
    const ENTRY_NAME: &'static str;

    /// The category's opcode table.
    fn registry() -> &'static PropertyRegistry;

    /// Wraps a definition of this category.
    fn from_definition(definition: ConfigDefinition) -> Self;

    /// The wrapped definition.
    fn definition(&self) -> &ConfigDefinition;

    /// Mutable access to the wrapped definition.
    fn definition_mut(&mut self) -> &mut ConfigDefinition;

    /// Creates a definition with every property at its default.
    fn empty(id: u32) -> Self {
        Self::from_definition(ConfigDefinition::empty(id, Self::registry()))
    }

    /// Decodes one entry of this category.
    fn decode(id: u32, data: &[u8]) -> Result<Self, ConfigError> {
        Ok(Self::from_definition(ConfigDefinition::decode(
            id,
            Self::registry(),
            data,
        )?))
    }

    /// Encodes this definition back to entry bytes.
    fn encode(&self) -> Result<Vec<u8>, ConfigError> {
        self.definition().encode()
    }

    /// The definition's id.
    fn id(&self) -> u32 {
        self.definition().id()
    }
}
