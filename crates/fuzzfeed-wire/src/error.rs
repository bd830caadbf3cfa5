use crate::decode::STRING_PLACEHOLDER;

/// Errors returned by the byte cursor decoders.
///
/// Every variant means the same thing to a fuzz harness: the buffer ran
/// out before the requested value could be read, so the current decoding
/// pass must be abandoned. The variants stay separate so a failing input
/// can be traced back to the field kind that tripped on it.
///
/// ```text
/// ┌───────────────────────────────┬──────────────────────────────────────┐
/// │ Variant                       │ Cause                                │
/// ├───────────────────────────────┼──────────────────────────────────────┤
/// │ InsufficientBytesForInt       │ cursor at or past the buffer end     │
/// │ InsufficientBytesForBool      │ cursor at or past the buffer end     │
/// │ InsufficientBytesForByteSlice │ no length byte, or payload does not  │
/// │                               │ leave a trailing byte                │
/// │ InsufficientBytesForString    │ same as ByteSlice                    │
/// └───────────────────────────────┴──────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// No byte left at `offset` to read an integer from.
    #[error("not enough bytes to create int at offset {offset}")]
    InsufficientBytesForInt { offset: usize },

    /// No byte left at `offset` to read a bool from.
    #[error("not enough bytes to create bool at offset {offset}")]
    InsufficientBytesForBool { offset: usize },

    /// The length prefix at `offset` was missing, or announced `len`
    /// payload bytes that the buffer cannot supply.
    ///
    /// `len` is `None` when the cursor was already at the buffer end and
    /// no length byte could be read.
    #[error("not enough bytes to create byte slice at offset {offset} (length {len:?})")]
    InsufficientBytesForByteSlice { offset: usize, len: Option<u8> },

    /// Same boundary failure as [`DecodeError::InsufficientBytesForByteSlice`],
    /// raised while decoding a string.
    #[error("not enough bytes to create string at offset {offset} (length {len:?})")]
    InsufficientBytesForString { offset: usize, len: Option<u8> },
}

impl DecodeError {
    /// Byte offset in the buffer where the failed read started.
    pub fn offset(&self) -> usize {
        match *self {
            Self::InsufficientBytesForInt { offset }
            | Self::InsufficientBytesForBool { offset }
            | Self::InsufficientBytesForByteSlice { offset, .. }
            | Self::InsufficientBytesForString { offset, .. } => offset,
        }
    }

    /// The text a failed string decode hands back alongside the error.
    ///
    /// `Some("nil")` for string failures, `None` for every other variant.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::InsufficientBytesForString { .. } => Some(STRING_PLACEHOLDER),
            _ => None,
        }
    }
}
