use fuzzfeed_types::Record;
use fuzzfeed_wire::{Cursor, DecodeError};
use tracing::debug;

use crate::config::SplitConfig;
use crate::error::SplitError;
use crate::plan::Calls;
use crate::populate::populate_record;

/// Turns one fuzz input into structured test values.
///
/// A consumer borrows the buffer for a single fuzz iteration. It can
/// either carve the buffer into a plan of simulated calls with
/// [`split`](Self::split), or fill records directly with
/// [`populate_record`](Self::populate_record).
///
/// Split layout:
///
/// ```text
/// ┌────────┬──────────────────────┬─────────────────────────────────────┐
/// │ byte 0 │ bytes 1 ..= n        │ bytes n+1 ..                        │
/// ├────────┼──────────────────────┼─────────────────────────────────────┤
/// │ n      │ command part         │ rest of array                       │
/// │        │ one selector / call  │ n equal chunks, one per call        │
/// └────────┴──────────────────────┴─────────────────────────────────────┘
/// ```
///
/// The derived views borrow from the original buffer; nothing is copied.
#[derive(Clone, Debug)]
pub struct Consumer<'a> {
    data: &'a [u8],
    command_part: &'a [u8],
    rest_of_array: &'a [u8],
    number_of_calls: usize,
}

impl<'a> Consumer<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            command_part: &[],
            rest_of_array: &[],
            number_of_calls: 0,
        }
    }

    /// The buffer this consumer was built from.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// One selector byte per planned call. Empty until a split succeeds.
    pub fn command_part(&self) -> &'a [u8] {
        self.command_part
    }

    /// Parameter bytes shared evenly between the planned calls.
    pub fn rest_of_array(&self) -> &'a [u8] {
        self.rest_of_array
    }

    pub fn number_of_calls(&self) -> usize {
        self.number_of_calls
    }

    /// Partition the buffer into between `min_calls` and `max_calls`
    /// calls (both inclusive).
    ///
    /// On success the command part, rest of array and call count are
    /// stored on the consumer. On failure they keep whatever a previous
    /// successful split stored.
    ///
    /// # Errors
    ///
    /// - [`SplitError::EmptyInput`] for an empty buffer.
    /// - [`SplitError::CallCountOutOfRange`] if the header byte is outside
    ///   the bounds.
    /// - [`SplitError::InsufficientLength`] if the buffer holds fewer than
    ///   `2n + 1` bytes.
    /// - [`SplitError::NotDivisible`] if the parameter bytes cannot be
    ///   shared evenly, including the `n == 0` case.
    pub fn split(&mut self, min_calls: usize, max_calls: usize) -> Result<(), SplitError> {
        self.split_with(&SplitConfig::new(min_calls, max_calls))
    }

    /// [`split`](Self::split) with the bounds taken from `config`.
    ///
    /// # Errors
    ///
    /// Same as [`split`](Self::split).
    pub fn split_with(&mut self, config: &SplitConfig) -> Result<(), SplitError> {
        let Some(&header) = self.data.first() else {
            debug!("split rejected: empty input");
            return Err(SplitError::EmptyInput);
        };

        let calls = usize::from(header);
        if !config.contains(calls) {
            debug!(
                calls,
                min = config.min_calls,
                max = config.max_calls,
                "split rejected: call count out of range"
            );
            return Err(SplitError::CallCountOutOfRange {
                count: calls,
                min: config.min_calls,
                max: config.max_calls,
            });
        }

        // Header, one selector per call, and at least one parameter byte
        // per call.
        let required = 2 * calls + 1;
        if self.data.len() < required {
            debug!(len = self.data.len(), required, "split rejected: input too short");
            return Err(SplitError::InsufficientLength {
                len: self.data.len(),
                required,
            });
        }

        let command_part = &self.data[1..=calls];
        let rest_of_array = &self.data[calls + 1..];

        if rest_of_array.len().checked_rem(calls) != Some(0) {
            debug!(
                len = rest_of_array.len(),
                calls, "split rejected: parameters not divisible"
            );
            return Err(SplitError::NotDivisible {
                len: rest_of_array.len(),
                calls,
            });
        }

        self.command_part = command_part;
        self.rest_of_array = rest_of_array;
        self.number_of_calls = calls;
        Ok(())
    }

    /// Iterate the planned calls, pairing each selector byte with its
    /// equally sized parameter chunk.
    ///
    /// Yields nothing until a split has succeeded.
    pub fn calls(&self) -> Calls<'a> {
        Calls::new(self.command_part, self.rest_of_array, self.number_of_calls)
    }

    /// A cursor over the whole buffer, for decoding values by hand.
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor::new(self.data)
    }

    /// Populate `target` from `data`.
    ///
    /// `data` is independent of the consumer's own buffer; pass
    /// [`data`](Self::data) or a call's parameters, or use
    /// [`populate`](Self::populate) for the whole buffer.
    ///
    /// # Errors
    ///
    /// See [`populate_record`](crate::populate_record).
    pub fn populate_record<R: Record + ?Sized>(
        &self,
        target: &mut R,
        data: &[u8],
    ) -> Result<(), DecodeError> {
        populate_record(target, data)
    }

    /// Populate `target` from the consumer's own buffer.
    ///
    /// # Errors
    ///
    /// See [`populate_record`](crate::populate_record).
    pub fn populate<R: Record + ?Sized>(&self, target: &mut R) -> Result<(), DecodeError> {
        populate_record(target, self.data)
    }
}
