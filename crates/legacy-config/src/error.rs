//! Error taxonomy for config entry decode/encode.

use legacy_config_buffers::BufferError;

/// Failures while decoding or encoding one config entry.
///
/// All of these are fatal for the entry they occur in: a partially decoded
/// definition could silently misrepresent configuration, so there is no
/// best-effort mode. Callers decide whether to abort the archive or skip the
/// entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Decode hit an opcode absent from the category registry. Format or
    /// registry-version mismatch; guessing a width would desynchronize the
    /// rest of the entry.
    #[error("unknown opcode {0}")]
    UnknownOpcode(u8),
    /// Input ended before the terminator byte was read.
    #[error("entry truncated before terminator")]
    TruncatedEntry,
    /// A property's payload was rejected by its codec.
    #[error("invalid payload: {0}")]
    InvalidPayload(&'static str),
}

impl From<BufferError> for ConfigError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => ConfigError::TruncatedEntry,
            BufferError::InvalidAscii => {
                ConfigError::InvalidPayload("string contains non-ascii byte")
            }
        }
    }
}
