/// Reasons [`Consumer::split`](crate::Consumer::split) rejects a buffer.
///
/// A harness usually only cares that the split failed and moves on to the
/// next input; the variants exist so a rejected corpus entry can be
/// explained.
///
/// ```text
///   SplitError
///   ├── EmptyInput            ← no header byte
///   ├── CallCountOutOfRange   ← header byte outside [min_calls, max_calls]
///   ├── InsufficientLength    ← fewer than 2n + 1 bytes
///   └── NotDivisible          ← parameter bytes don't split into n chunks
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    #[error("could not split: input is empty")]
    EmptyInput,

    /// The header byte asked for `count` calls.
    #[error("bad number of calls: {count} not in {min}..={max}")]
    CallCountOutOfRange { count: usize, min: usize, max: usize },

    /// `len` bytes available, `required` (= 2n + 1) needed.
    #[error("length of data does not match required parameters: {len} < {required}")]
    InsufficientLength { len: usize, required: usize },

    /// The `len` parameter bytes cannot be shared evenly between `calls`.
    #[error("parameter length {len} is not divisible by {calls} calls")]
    NotDivisible { len: usize, calls: usize },
}
