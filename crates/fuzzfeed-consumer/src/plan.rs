use std::iter::FusedIterator;

use fuzzfeed_types::Record;
use fuzzfeed_wire::{Cursor, DecodeError};

use crate::populate::populate_record;

/// One planned call: a selector byte and its share of the parameter bytes.
///
/// ```text
///   header │ c0 c1 c2 │ r0 r1 │ r2 r3 │ r4 r5
///            │  │  │    └─┬──┘  └─┬──┘  └─┬──┘
///            │  │  └──────┼───────┼─────▶ Call { index: 2, selector: c2, params: [r4, r5] }
///            │  └─────────┼───────┴─────▶ Call { index: 1, selector: c1, params: [r2, r3] }
///            └────────────┴─────────────▶ Call { index: 0, selector: c0, params: [r0, r1] }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Call<'a> {
    pub index: usize,
    pub selector: u8,
    pub params: &'a [u8],
}

impl<'a> Call<'a> {
    /// Map the selector onto one of `commands` commands.
    ///
    /// Returns `None` when `commands` is zero.
    pub fn selector_modulo(&self, commands: usize) -> Option<usize> {
        usize::from(self.selector).checked_rem(commands)
    }

    /// A fresh cursor over this call's parameter bytes.
    pub fn cursor(&self) -> Cursor<'a> {
        Cursor::new(self.params)
    }

    /// Populate `target` from this call's parameter bytes.
    ///
    /// # Errors
    ///
    /// See [`populate_record`].
    pub fn populate<R: Record + ?Sized>(&self, target: &mut R) -> Result<(), DecodeError> {
        populate_record(target, self.params)
    }
}

/// Iterator over the calls of a split, in selector order.
///
/// Created by [`Consumer::calls`](crate::Consumer::calls).
#[derive(Clone, Debug)]
pub struct Calls<'a> {
    selectors: std::iter::Enumerate<std::slice::Iter<'a, u8>>,
    chunks: std::slice::Chunks<'a, u8>,
}

impl<'a> Calls<'a> {
    pub(crate) fn new(command_part: &'a [u8], rest_of_array: &'a [u8], calls: usize) -> Self {
        // `calls` is zero only before a successful split, when both slices
        // are empty too.
        let chunk_len = if calls == 0 {
            1
        } else {
            (rest_of_array.len() / calls).max(1)
        };
        Self {
            selectors: command_part.iter().enumerate(),
            chunks: rest_of_array.chunks(chunk_len),
        }
    }
}

impl<'a> Iterator for Calls<'a> {
    type Item = Call<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, &selector) = self.selectors.next()?;
        let params = self.chunks.next()?;
        Some(Call {
            index,
            selector,
            params,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.selectors.len().min(self.chunks.len());
        (n, Some(n))
    }
}

impl ExactSizeIterator for Calls<'_> {}

impl FusedIterator for Calls<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_selectors_with_equal_chunks() {
        let calls: Vec<Call<'_>> = Calls::new(&[10, 11, 12], &[1, 2, 3, 4, 5, 6], 3).collect();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].selector, 10);
        assert_eq!(calls[0].params, &[1, 2]);
        assert_eq!(calls[2].index, 2);
        assert_eq!(calls[2].selector, 12);
        assert_eq!(calls[2].params, &[5, 6]);
    }

    #[test]
    fn empty_plan_yields_nothing() {
        let mut calls = Calls::new(&[], &[], 0);
        assert_eq!(calls.len(), 0);
        assert!(calls.next().is_none());
    }

    #[test]
    fn selector_modulo_wraps() {
        let call = Call {
            index: 0,
            selector: 7,
            params: &[],
        };
        assert_eq!(call.selector_modulo(3), Some(1));
        assert_eq!(call.selector_modulo(0), None);
    }

    #[test]
    fn call_cursor_reads_params() {
        let call = Call {
            index: 0,
            selector: 0,
            params: &[5, 6],
        };
        let mut cursor = call.cursor();
        assert_eq!(cursor.read_int().unwrap(), 5);
        // 6 is even.
        assert!(cursor.read_bool().unwrap());
        assert!(cursor.read_int().is_err());
    }
}
