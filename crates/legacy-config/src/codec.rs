//! Wire codecs for property payloads.

use legacy_config_buffers::{Reader, Writer, STRING_TERMINATOR};

use crate::error::ConfigError;
use crate::kit::Part;
use crate::sequence::FrameCollection;
use crate::value::Value;

/// The wire representation of one property's payload.
///
/// Dispatch is a plain match over this enum rather than per-opcode virtual
/// dispatch: the registry maps an opcode to a descriptor carrying one of
/// these variants, and the decode loop hands the cursor to it. All integer
/// payloads are big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyCodec {
    /// One unsigned byte, widened to `Value::Int`.
    UByte,
    /// Two bytes unsigned, widened to `Value::Int`.
    UShort,
    /// Four bytes signed.
    Int,
    /// No payload. Presence of the opcode alone means `true`.
    Flag,
    /// ASCII bytes up to the `0x0A` terminator.
    Ascii,
    /// Unsigned byte count, then that many bytes.
    ByteList,
    /// Unsigned byte count, then that many unsigned shorts.
    ShortList,
    /// An animation frame table, see [`FrameCollection`].
    Frames,
    /// An identikit body part id, see [`Part`].
    Part,
}

impl PropertyCodec {
    /// Decodes one payload starting at the reader's cursor.
    pub fn decode(self, reader: &mut Reader<'_>) -> Result<Value, ConfigError> {
        match self {
            PropertyCodec::UByte => Ok(Value::Int(i32::from(reader.u8()?))),
            PropertyCodec::UShort => Ok(Value::Int(i32::from(reader.u16()?))),
            PropertyCodec::Int => Ok(Value::Int(reader.i32()?)),
            PropertyCodec::Flag => Ok(Value::Bool(true)),
            PropertyCodec::Ascii => Ok(Value::String(reader.ascii()?.to_owned())),
            PropertyCodec::ByteList => {
                let count = reader.u8()? as usize;
                Ok(Value::ByteList(reader.bytes(count)?.to_vec()))
            }
            PropertyCodec::ShortList => {
                let count = reader.u8()? as usize;
                let mut values = Vec::with_capacity(count);
                for _ in 0..count {
                    values.push(reader.u16()?);
                }
                Ok(Value::ShortList(values))
            }
            PropertyCodec::Frames => Ok(Value::Frames(FrameCollection::decode(reader)?)),
            PropertyCodec::Part => Ok(Value::Part(Part::decode(reader)?)),
        }
    }

    /// Encodes `value` onto the writer.
    ///
    /// Fails with `InvalidPayload` when the value does not fit the wire
    /// format (out-of-range integer, oversized list, non-ASCII string) or
    /// when its variant does not match the codec at all — the latter can
    /// only happen when a property from another category's table was used
    /// against this map.
    pub fn encode(self, writer: &mut Writer, value: &Value) -> Result<(), ConfigError> {
        match (self, value) {
            (PropertyCodec::UByte, Value::Int(v)) => {
                let v = u8::try_from(*v)
                    .map_err(|_| ConfigError::InvalidPayload("value does not fit a byte"))?;
                writer.u8(v);
                Ok(())
            }
            (PropertyCodec::UShort, Value::Int(v)) => {
                let v = u16::try_from(*v)
                    .map_err(|_| ConfigError::InvalidPayload("value does not fit a short"))?;
                writer.u16(v);
                Ok(())
            }
            (PropertyCodec::Int, Value::Int(v)) => {
                writer.i32(*v);
                Ok(())
            }
            (PropertyCodec::Flag, Value::Bool(true)) => Ok(()),
            (PropertyCodec::Flag, Value::Bool(false)) => {
                // The wire format cannot express a present-but-false flag;
                // the map drops these entries before calling encode.
                Err(ConfigError::InvalidPayload("flag cannot encode false"))
            }
            (PropertyCodec::Ascii, Value::String(s)) => {
                if !s.is_ascii() || s.bytes().any(|b| b == STRING_TERMINATOR) {
                    return Err(ConfigError::InvalidPayload(
                        "string must be ascii without line feeds",
                    ));
                }
                writer.ascii(s);
                Ok(())
            }
            (PropertyCodec::ByteList, Value::ByteList(v)) => {
                let count = u8::try_from(v.len())
                    .map_err(|_| ConfigError::InvalidPayload("list longer than 255"))?;
                writer.u8(count);
                writer.bytes(v);
                Ok(())
            }
            (PropertyCodec::ShortList, Value::ShortList(v)) => {
                let count = u8::try_from(v.len())
                    .map_err(|_| ConfigError::InvalidPayload("list longer than 255"))?;
                writer.u8(count);
                for value in v {
                    writer.u16(*value);
                }
                Ok(())
            }
            (PropertyCodec::Frames, Value::Frames(frames)) => frames.encode(writer),
            (PropertyCodec::Part, Value::Part(part)) => part.encode(writer),
            _ => Err(ConfigError::InvalidPayload("value type does not match codec")),
        }
    }
}
