//! Typed property system for legacy game config archives.
//!
//! Legacy clients ship their configuration as per-category binary tables
//! (item, npc, object, varp, ...). Each entry is a sequence of
//! opcode-tagged properties closed by a zero byte. This crate decodes those
//! entries into typed, queryable definitions and re-encodes edited
//! definitions back to the original wire layout.
//!
//! The pieces, leaf-first:
//!
//! - [`codec::PropertyCodec`] — one variant per wire representation.
//! - [`property::Property`] — a typed property: opcode, name, codec, default.
//! - [`registry::PropertyRegistry`] — the per-category opcode table.
//! - [`map::PropertyMap`] — decoded (or programmatically set) values for one
//!   definition; absent entries fall back to descriptor defaults and are not
//!   re-encoded.
//! - [`definition::ConfigDefinition`] — id plus property map, the base every
//!   category wraps.
//! - [`varp`], [`sequence`], [`kit`] — the category modules.
//!
//! Decoding one varp entry:
//!
//! ```
//! use legacy_config::definition::ConfigCategory;
//! use legacy_config::varp::ParameterVariableDefinition;
//!
//! let data = [0x01, 0x00, 0x00, 0x00, 0x2a, 0x00];
//! let varp = ParameterVariableDefinition::decode(0, &data).unwrap();
//! assert_eq!(varp.parameter(), 42);
//! assert_eq!(varp.encode().unwrap(), data);
//! ```

pub mod codec;
pub mod definition;
pub mod error;
pub mod kit;
pub mod map;
pub mod property;
pub mod registry;
pub mod sequence;
pub mod value;
pub mod varp;

pub use codec::PropertyCodec;
pub use definition::{ConfigCategory, ConfigDefinition};
pub use error::ConfigError;
pub use map::PropertyMap;
pub use property::{Descriptor, Property};
pub use registry::PropertyRegistry;
pub use value::{PropertyValue, Value};

/// The reserved opcode marking the end of one encoded definition.
pub const DEFINITION_TERMINATOR: u8 = 0;
