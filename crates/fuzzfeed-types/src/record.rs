use crate::field::{FieldDescriptor, FieldValue};

/// A destination the population driver can fill from fuzz bytes.
///
/// A record exposes its layout as an ordered list of
/// [`FieldDescriptor`]s and accepts one decoded [`FieldValue`] per
/// decodable field. The driver walks [`fields`](Record::fields) in order,
/// decodes a value for each field whose kind is decodable, and hands it
/// back through [`assign`](Record::assign) with the field's index.
///
/// ```text
///   fields() ──▶ [ name: String │ flag: Bool │ tags: StringList │ n: Int ]
///                     │              │              (skipped)       │
///   assign(0, String) ◀─┘            │                              │
///   assign(1, Bool)   ◀──────────────┘                              │
///   assign(3, Int)    ◀─────────────────────────────────────────────┘
/// ```
///
/// Most records implement this with `#[derive(Record)]` from
/// `fuzzfeed-derive`. [`DynamicRecord`](crate::DynamicRecord) covers
/// layouts only known at run time.
pub trait Record {
    /// The record's fields in declaration order.
    fn fields(&self) -> &[FieldDescriptor];

    /// Store `value` into the field at `index`.
    ///
    /// The driver only calls this with a value whose kind matches the
    /// descriptor at `index`. Implementations ignore values that do not.
    fn assign(&mut self, index: usize, value: FieldValue);
}
