use crate::error::DecodeError;

/// Text handed back with a failed string decode.
pub const STRING_PLACEHOLDER: &str = "nil";

// Every decoder takes the whole buffer plus a shared position. On success
// the position moves past exactly the bytes that were consumed; on failure
// it is left where it was and the caller abandons the pass.
//
// Wire shapes:
//
//   int / bool   │ b
//   bytes / str  │ L │ p0 .. p(L-1) │ (at least one more byte)
//
// The length-prefixed shapes never accept a payload that ends on the last
// byte of the buffer: at least one byte must follow it.

/// Decode one byte as an unsigned integer in `0..=255`.
///
/// # Errors
///
/// [`DecodeError::InsufficientBytesForInt`] if `position` is at or past the
/// end of `data`.
pub fn get_int(data: &[u8], position: &mut usize) -> Result<u8, DecodeError> {
    let pos = *position;
    let byte = *data
        .get(pos)
        .ok_or(DecodeError::InsufficientBytesForInt { offset: pos })?;
    *position = pos + 1;
    Ok(byte)
}

/// Decode one byte as a bool: even bytes are `true`, odd bytes `false`.
///
/// # Errors
///
/// [`DecodeError::InsufficientBytesForBool`] if `position` is at or past the
/// end of `data`.
pub fn get_bool(data: &[u8], position: &mut usize) -> Result<bool, DecodeError> {
    let pos = *position;
    let byte = *data
        .get(pos)
        .ok_or(DecodeError::InsufficientBytesForBool { offset: pos })?;
    *position = pos + 1;
    Ok(byte % 2 == 0)
}

/// Decode a length-prefixed byte slice.
///
/// The byte at `position` gives the payload length `L`; the next `L` bytes
/// are the payload, borrowed straight from `data`. The cursor advances by
/// `L + 1`.
///
/// # Errors
///
/// [`DecodeError::InsufficientBytesForByteSlice`] if there is no length
/// byte, or if the payload would not leave at least one byte after it.
pub fn get_bytes<'a>(data: &'a [u8], position: &mut usize) -> Result<&'a [u8], DecodeError> {
    length_prefixed(data, position)
        .map_err(|(offset, len)| DecodeError::InsufficientBytesForByteSlice { offset, len })
}

/// Decode a length-prefixed string.
///
/// Same layout and boundary as [`get_bytes`]. Payload bytes that are not
/// valid UTF-8 are replaced with `U+FFFD`, so every byte pattern the fuzzer
/// produces still yields a string.
///
/// # Errors
///
/// [`DecodeError::InsufficientBytesForString`], whose
/// [`placeholder`](DecodeError::placeholder) is [`STRING_PLACEHOLDER`].
pub fn get_string(data: &[u8], position: &mut usize) -> Result<String, DecodeError> {
    let payload = length_prefixed(data, position)
        .map_err(|(offset, len)| DecodeError::InsufficientBytesForString { offset, len })?;
    Ok(String::from_utf8_lossy(payload).into_owned())
}

/// Shared body of the length-prefixed decoders.
///
/// Returns the failing `(offset, length)` so each caller can wrap it in its
/// own error variant.
fn length_prefixed<'a>(
    data: &'a [u8],
    position: &mut usize,
) -> Result<&'a [u8], (usize, Option<u8>)> {
    let pos = *position;
    let len = *data.get(pos).ok_or((pos, None))?;

    let start = pos + 1;
    let end = start + usize::from(len);
    if end >= data.len() {
        return Err((pos, Some(len)));
    }

    *position = end;
    Ok(&data[start..end])
}
