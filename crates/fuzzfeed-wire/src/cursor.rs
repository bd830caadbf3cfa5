use crate::decode::{get_bool, get_bytes, get_int, get_string};
use crate::error::DecodeError;

/// A read position over a borrowed fuzz buffer.
///
/// Wraps the `(data, position)` pair the free decoders thread around, for
/// callers that would rather hold one value than two. Each `read_*` call
/// is exactly the matching `get_*` function applied at the current
/// position.
///
/// The position only ever moves forward and never passes `data.len()`.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Start a cursor at the beginning of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.position..]
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.data.len()
    }

    /// See [`get_int`].
    ///
    /// # Errors
    ///
    /// [`DecodeError::InsufficientBytesForInt`] at the end of the buffer.
    pub fn read_int(&mut self) -> Result<u8, DecodeError> {
        get_int(self.data, &mut self.position)
    }

    /// See [`get_bool`].
    ///
    /// # Errors
    ///
    /// [`DecodeError::InsufficientBytesForBool`] at the end of the buffer.
    pub fn read_bool(&mut self) -> Result<bool, DecodeError> {
        get_bool(self.data, &mut self.position)
    }

    /// See [`get_bytes`].
    ///
    /// # Errors
    ///
    /// [`DecodeError::InsufficientBytesForByteSlice`] if the length-prefixed
    /// payload does not fit.
    pub fn read_bytes(&mut self) -> Result<&'a [u8], DecodeError> {
        get_bytes(self.data, &mut self.position)
    }

    /// See [`get_string`].
    ///
    /// # Errors
    ///
    /// [`DecodeError::InsufficientBytesForString`] if the length-prefixed
    /// payload does not fit.
    pub fn read_string(&mut self) -> Result<String, DecodeError> {
        get_string(self.data, &mut self.position)
    }
}
