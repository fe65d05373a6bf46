//! The animation sequence ("seq") category.

use std::sync::OnceLock;

use legacy_config_buffers::{Reader, Writer};

use crate::codec::PropertyCodec;
use crate::definition::{ConfigCategory, ConfigDefinition};
use crate::error::ConfigError;
use crate::property::Property;
use crate::registry::PropertyRegistry;

/// The wire value marking a frame with no secondary id.
const NULL_SECONDARY_ID: u16 = 65535;

/// One animation frame: primary frame id, optional secondary frame id, and
/// duration in client ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub primary: u16,
    pub secondary: Option<u16>,
    pub duration: u16,
}

/// The frame table of an animation.
///
/// Wire layout: a frame-count byte, then for each frame the primary id,
/// the secondary id (65535 meaning none), and the duration, all unsigned
/// shorts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameCollection {
    frames: Vec<Frame>,
}

impl FrameCollection {
    /// The empty collection, used as the default value.
    pub const EMPTY: Self = Self { frames: Vec::new() };

    /// Creates a collection from frames.
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// The frames in playback order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` for the empty collection.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub(crate) fn decode(reader: &mut Reader<'_>) -> Result<Self, ConfigError> {
        let count = reader.u8()? as usize;
        let mut frames = Vec::with_capacity(count);

        for _ in 0..count {
            let primary = reader.u16()?;
            let secondary = match reader.u16()? {
                NULL_SECONDARY_ID => None,
                id => Some(id),
            };
            let duration = reader.u16()?;
            frames.push(Frame {
                primary,
                secondary,
                duration,
            });
        }

        Ok(Self { frames })
    }

    pub(crate) fn encode(&self, writer: &mut Writer) -> Result<(), ConfigError> {
        let count = u8::try_from(self.frames.len())
            .map_err(|_| ConfigError::InvalidPayload("more than 255 frames"))?;
        writer.u8(count);

        for frame in &self.frames {
            if frame.secondary == Some(NULL_SECONDARY_ID) {
                return Err(ConfigError::InvalidPayload("secondary frame id 65535 is reserved"));
            }
            writer.u16(frame.primary);
            writer.u16(frame.secondary.unwrap_or(NULL_SECONDARY_ID));
            writer.u16(frame.duration);
        }

        Ok(())
    }
}

/// The animation's frame table.
pub static FRAMES: Property<FrameCollection> =
    Property::new(1, "frames", PropertyCodec::Frames, FrameCollection::EMPTY);
/// Frame index the animation restarts from when it loops.
pub static LOOP_OFFSET: Property<i32> =
    Property::new(2, "loop_offset", PropertyCodec::UShort, -1);
/// Body-part interleave order.
pub static INTERLEAVE_ORDER: Property<Vec<u8>> =
    Property::new(3, "interleave_order", PropertyCodec::ByteList, Vec::new());
/// Whether the animation stretches to fit its target.
pub static STRETCHES: Property<bool> = Property::new(4, "stretches", PropertyCodec::Flag, false);
/// Render priority.
pub static PRIORITY: Property<i32> = Property::new(5, "priority", PropertyCodec::UByte, 5);
/// Item shown in the player's main hand while animating.
pub static PLAYER_MAINHAND: Property<i32> =
    Property::new(6, "player_mainhand", PropertyCodec::UShort, -1);
/// Item shown in the player's off hand while animating.
pub static PLAYER_OFFHAND: Property<i32> =
    Property::new(7, "player_offhand", PropertyCodec::UShort, -1);
/// Times the animation repeats before stopping.
pub static MAXIMUM_LOOPS: Property<i32> =
    Property::new(8, "maximum_loops", PropertyCodec::UByte, 99);
/// Precedence while the entity is animating.
pub static ANIMATING_PRECEDENCE: Property<i32> =
    Property::new(9, "animating_precedence", PropertyCodec::UByte, -1);
/// Precedence while the entity is walking.
pub static WALKING_PRECEDENCE: Property<i32> =
    Property::new(10, "walking_precedence", PropertyCodec::UByte, -1);
/// Replay behavior when the animation is retriggered.
pub static REPLAY_MODE: Property<i32> =
    Property::new(11, "replay_mode", PropertyCodec::UByte, 2);

/// A definition for an animation sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceDefinition {
    definition: ConfigDefinition,
}

impl SequenceDefinition {
    /// The frame table.
    pub fn frames(&self) -> FrameCollection {
        self.definition.get(&FRAMES)
    }

    /// Sets the frame table.
    pub fn set_frames(&mut self, frames: FrameCollection) {
        self.definition.set(&FRAMES, frames);
    }

    /// Frame index the animation restarts from, or -1 when unset.
    pub fn loop_offset(&self) -> i32 {
        self.definition.get(&LOOP_OFFSET)
    }

    /// Sets the loop offset.
    pub fn set_loop_offset(&mut self, offset: i32) {
        self.definition.set(&LOOP_OFFSET, offset);
    }

    /// Body-part interleave order.
    pub fn interleave_order(&self) -> Vec<u8> {
        self.definition.get(&INTERLEAVE_ORDER)
    }

    /// Sets the interleave order.
    pub fn set_interleave_order(&mut self, order: Vec<u8>) {
        self.definition.set(&INTERLEAVE_ORDER, order);
    }

    /// Whether the animation stretches to fit.
    pub fn stretches(&self) -> bool {
        self.definition.get(&STRETCHES)
    }

    /// Sets the stretch flag.
    pub fn set_stretches(&mut self, stretches: bool) {
        self.definition.set(&STRETCHES, stretches);
    }

    /// Render priority, defaulting to 5.
    pub fn priority(&self) -> i32 {
        self.definition.get(&PRIORITY)
    }

    /// Sets the render priority.
    pub fn set_priority(&mut self, priority: i32) {
        self.definition.set(&PRIORITY, priority);
    }

    /// Main-hand item shown while animating, or -1.
    pub fn player_mainhand(&self) -> i32 {
        self.definition.get(&PLAYER_MAINHAND)
    }

    /// Sets the main-hand item.
    pub fn set_player_mainhand(&mut self, item: i32) {
        self.definition.set(&PLAYER_MAINHAND, item);
    }

    /// Off-hand item shown while animating, or -1.
    pub fn player_offhand(&self) -> i32 {
        self.definition.get(&PLAYER_OFFHAND)
    }

    /// Sets the off-hand item.
    pub fn set_player_offhand(&mut self, item: i32) {
        self.definition.set(&PLAYER_OFFHAND, item);
    }

    /// Times the animation repeats, defaulting to 99.
    pub fn maximum_loops(&self) -> i32 {
        self.definition.get(&MAXIMUM_LOOPS)
    }

    /// Sets the loop count.
    pub fn set_maximum_loops(&mut self, loops: i32) {
        self.definition.set(&MAXIMUM_LOOPS, loops);
    }

    /// Precedence while animating, or -1.
    pub fn animating_precedence(&self) -> i32 {
        self.definition.get(&ANIMATING_PRECEDENCE)
    }

    /// Sets the animating precedence.
    pub fn set_animating_precedence(&mut self, precedence: i32) {
        self.definition.set(&ANIMATING_PRECEDENCE, precedence);
    }

    /// Precedence while walking, or -1.
    pub fn walking_precedence(&self) -> i32 {
        self.definition.get(&WALKING_PRECEDENCE)
    }

    /// Sets the walking precedence.
    pub fn set_walking_precedence(&mut self, precedence: i32) {
        self.definition.set(&WALKING_PRECEDENCE, precedence);
    }

    /// Replay behavior, defaulting to 2.
    pub fn replay_mode(&self) -> i32 {
        self.definition.get(&REPLAY_MODE)
    }

    /// Sets the replay mode.
    pub fn set_replay_mode(&mut self, mode: i32) {
        self.definition.set(&REPLAY_MODE, mode);
    }
}

impl ConfigCategory for SequenceDefinition {
    const ENTRY_NAME: &'static str = "seq";

    fn registry() -> &'static PropertyRegistry {
        static REGISTRY: OnceLock<PropertyRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            PropertyRegistry::builder(Self::ENTRY_NAME)
                .property(&FRAMES)
                .property(&LOOP_OFFSET)
                .property(&INTERLEAVE_ORDER)
                .property(&STRETCHES)
                .property(&PRIORITY)
                .property(&PLAYER_MAINHAND)
                .property(&PLAYER_OFFHAND)
                .property(&MAXIMUM_LOOPS)
                .property(&ANIMATING_PRECEDENCE)
                .property(&WALKING_PRECEDENCE)
                .property(&REPLAY_MODE)
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
