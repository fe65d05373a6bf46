//! The parameter variable ("varp") category.

use std::sync::OnceLock;

use crate::codec::PropertyCodec;
use crate::definition::{ConfigCategory, ConfigDefinition};
use crate::property::Property;
use crate::registry::PropertyRegistry;

/// The parameter a varp controls.
pub static PARAMETER: Property<i32> = Property::new(1, "parameter", PropertyCodec::Int, 0);

/// A definition for a parameter variable (a 'varp').
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterVariableDefinition {
    definition: ConfigDefinition,
}

impl ParameterVariableDefinition {
    /// The parameter value.
    pub fn parameter(&self) -> i32 {
        self.definition.get(&PARAMETER)
    }

    /// Sets the parameter value.
    pub fn set_parameter(&mut self, parameter: i32) {
        self.definition.set(&PARAMETER, parameter);
    }
}

impl ConfigCategory for ParameterVariableDefinition {
    const ENTRY_NAME: &'static str = "varp";

    fn registry() -> &'static PropertyRegistry {
        static REGISTRY: OnceLock<PropertyRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            PropertyRegistry::builder(Self::ENTRY_NAME)
                .property(&PARAMETER)
                .build()
        })
    }

    fn from_definition(definition: ConfigDefinition) -> Self {
        Self { definition }
    }

    fn definition(&self) -> &ConfigDefinition {
        &self.definition
    }

    fn definition_mut(&mut self) -> &mut ConfigDefinition {
        &mut self.definition
    }
}
