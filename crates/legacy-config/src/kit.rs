//! The identikit ("idk") category.

use std::sync::OnceLock;

use legacy_config_buffers::{Reader, Writer};

use crate::codec::PropertyCodec;
use crate::definition::{ConfigCategory, ConfigDefinition};
use crate::error::ConfigError;
use crate::property::Property;
use crate::registry::PropertyRegistry;

/// The wire-id offset of the female body-part column.
const FEMALE_ID_OFFSET: u8 = 7;

/// A body part an identikit entry models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPart {
    Head,
    Chin,
    Chest,
    Arms,
    Hands,
    Legs,
    Feet,
}

impl BodyPart {
    /// The male wire id of this part, 0..=6.
    pub fn id(self) -> u8 {
        match self {
            BodyPart::Head => 0,
            BodyPart::Chin => 1,
            BodyPart::Chest => 2,
            BodyPart::Arms => 3,
            BodyPart::Hands => 4,
            BodyPart::Legs => 5,
            BodyPart::Feet => 6,
        }
    }

    fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(BodyPart::Head),
            1 => Some(BodyPart::Chin),
            2 => Some(BodyPart::Chest),
            3 => Some(BodyPart::Arms),
            4 => Some(BodyPart::Hands),
            5 => Some(BodyPart::Legs),
            6 => Some(BodyPart::Feet),
            _ => None,
        }
    }
}

/// The body part an identikit definition is for.
///
/// Wire ids 0..=6 are the male column, 7..=13 the same parts for female
/// characters. The null part is the default for entries that never set
/// opcode 1; it has no wire id and cannot be encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Part {
    /// No part assigned; the default.
    #[default]
    Null,
    /// A male body part.
    Male(BodyPart),
    /// A female body part.
    Female(BodyPart),
}

impl Part {
    /// Resolves a wire id in 0..=13.
    pub fn from_id(id: u8) -> Result<Self, ConfigError> {
        if id >= 2 * FEMALE_ID_OFFSET {
            return Err(ConfigError::InvalidPayload("body part id must be 0..=13"));
        }
        let part = BodyPart::from_id(id % FEMALE_ID_OFFSET).expect("folded id is 0..=6");
        Ok(if id >= FEMALE_ID_OFFSET {
            Part::Female(part)
        } else {
            Part::Male(part)
        })
    }

    /// The wire id, or `None` for the null part.
    pub fn id(self) -> Option<u8> {
        match self {
            Part::Null => None,
            Part::Male(part) => Some(part.id()),
            Part::Female(part) => Some(part.id() + FEMALE_ID_OFFSET),
        }
    }

    /// The body part, or `None` for the null part.
    pub fn body(self) -> Option<BodyPart> {
        match self {
            Part::Null => None,
            Part::Male(part) | Part::Female(part) => Some(part),
        }
    }

    /// Returns `true` for parts in the female column.
    pub fn is_female(self) -> bool {
        matches!(self, Part::Female(_))
    }

    pub(crate) fn decode(reader: &mut Reader<'_>) -> Result<Self, ConfigError> {
        Self::from_id(reader.u8()?)
    }

    pub(crate) fn encode(self, writer: &mut Writer) -> Result<(), ConfigError> {
        let id = self
            .id()
            .ok_or(ConfigError::InvalidPayload("null part has no wire id"))?;
        writer.u8(id);
        Ok(())
    }
}

/// Number of recolour slots per entry.
pub const COLOUR_SLOTS: u8 = 10;
/// Number of head model slots per entry.
pub const HEAD_MODEL_SLOTS: u8 = 10;

const ORIGINAL_COLOURS_BASE: u8 = 40;
const REPLACEMENT_COLOURS_BASE: u8 = 50;
const HEAD_MODELS_BASE: u8 = 60;

/// The body part this entry models.
pub static PART: Property<Part> = Property::new(1, "part", PropertyCodec::Part, Part::Null);
/// The body model ids.
pub static MODELS: Property<Vec<u16>> =
    Property::new(2, "models", PropertyCodec::ShortList, Vec::new());

/// The recolour source for `slot`.
///
/// # Panics
///
/// Panics when `slot` is not below [`COLOUR_SLOTS`]; slot-range mistakes
/// are programming errors, same as a bad opcode in a static table.
pub fn original_colour(slot: u8) -> Property<i32> {
    assert!(slot < COLOUR_SLOTS, "colour slot must be below {COLOUR_SLOTS}");
    Property::new(
        ORIGINAL_COLOURS_BASE + slot,
        "original_colour",
        PropertyCodec::UShort,
        0,
    )
}

/// The recolour replacement for `slot`.
///
/// # Panics
///
/// Panics when `slot` is not below [`COLOUR_SLOTS`].
pub fn replacement_colour(slot: u8) -> Property<i32> {
    assert!(slot < COLOUR_SLOTS, "colour slot must be below {COLOUR_SLOTS}");
    Property::new(
        REPLACEMENT_COLOURS_BASE + slot,
        "replacement_colour",
        PropertyCodec::UShort,
        0,
    )
}

/// The head model id for `slot`, -1 when unset.
///
/// # Panics
///
/// Panics when `slot` is not below [`HEAD_MODEL_SLOTS`].
pub fn head_model(slot: u8) -> Property<i32> {
    assert!(
        slot < HEAD_MODEL_SLOTS,
        "head model slot must be below {HEAD_MODEL_SLOTS}"
    );
    Property::new(HEAD_MODELS_BASE + slot, "head_model", PropertyCodec::UShort, -1)
}

/// A definition for an identikit entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentikitDefinition {
    definition: ConfigDefinition,
}

impl IdentikitDefinition {
    /// The body part this entry models.
    pub fn part(&self) -> Part {
        self.definition.get(&PART)
    }

    /// Sets the body part.
    pub fn set_part(&mut self, part: Part) {
        self.definition.set(&PART, part);
    }

    /// The body model ids.
    pub fn models(&self) -> Vec<u16> {
        self.definition.get(&MODELS)
    }

    /// Sets the body model ids.
    pub fn set_models(&mut self, models: Vec<u16>) {
        self.definition.set(&MODELS, models);
    }

    /// The recolour source for `slot`.
    pub fn original_colour(&self, slot: u8) -> i32 {
        self.definition.get(&original_colour(slot))
    }

    /// Sets the recolour source for `slot`.
    pub fn set_original_colour(&mut self, slot: u8, colour: i32) {
        self.definition.set(&original_colour(slot), colour);
    }

    /// The recolour replacement for `slot`.
    pub fn replacement_colour(&self, slot: u8) -> i32 {
        self.definition.get(&replacement_colour(slot))
    }

    /// Sets the recolour replacement for `slot`.
    pub fn set_replacement_colour(&mut self, slot: u8, colour: i32) {
        self.definition.set(&replacement_colour(slot), colour);
    }

    /// The head model for `slot`, -1 when unset.
    pub fn head_model(&self, slot: u8) -> i32 {
        self.definition.get(&head_model(slot))
    }

    /// Sets the head model for `slot`.
    pub fn set_head_model(&mut self, slot: u8, model: i32) {
        self.definition.set(&head_model(slot), model);
    }
}

impl ConfigCategory for IdentikitDefinition {
    const ENTRY_NAME: &'static str = "idk";

    fn registry() -> &'static PropertyRegistry {
        static REGISTRY: OnceLock<PropertyRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            let mut builder = PropertyRegistry::builder(Self::ENTRY_NAME)
                .property(&PART)
                .property(&MODELS);
            for slot in 0..COLOUR_SLOTS {
                builder = builder
                    .property(&original_colour(slot))
                    .property(&replacement_colour(slot));
            }
            for slot in 0..HEAD_MODEL_SLOTS {
                builder = builder.property(&head_model(slot));
            }
            builder.build()
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
