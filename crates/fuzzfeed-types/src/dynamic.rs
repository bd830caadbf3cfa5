use crate::field::{FieldDescriptor, FieldKind, FieldValue};
use crate::record::Record;

/// A record whose layout is assembled at run time.
///
/// Useful when the target type is described by data rather than by a
/// Rust struct, e.g. a harness that reads field layouts from a corpus
/// manifest. Every field starts at the zero value of its kind; skipped
/// kinds hold no value at all.
///
/// ```
/// use fuzzfeed_types::{DynamicRecord, FieldKind, FieldValue, Record};
///
/// let mut record = DynamicRecord::new()
///     .with_field("name", FieldKind::String)
///     .with_field("count", FieldKind::Int);
///
/// record.assign(1, FieldValue::Int(9));
/// assert_eq!(record.get("count"), Some(&FieldValue::Int(9)));
/// assert_eq!(record.get("name"), Some(&FieldValue::String(String::new())));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DynamicRecord {
    fields: Vec<FieldDescriptor>,
    values: Vec<Option<FieldValue>>,
}

impl DynamicRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Builder form of [`push`](Self::push).
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.push(name, kind);
        self
    }

    /// Append a field at the end of the layout.
    pub fn push(&mut self, name: impl Into<String>, kind: FieldKind) {
        self.fields.push(FieldDescriptor::owned(name, kind));
        self.values.push(FieldValue::zero(kind));
    }

    /// Current value of the first field called `name`.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        let index = self.fields.iter().position(|f| f.name == name)?;
        self.value(index)
    }

    /// Current value of the field at `index`.
    pub fn value(&self, index: usize) -> Option<&FieldValue> {
        self.values.get(index)?.as_ref()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Record for DynamicRecord {
    fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    fn assign(&mut self, index: usize, value: FieldValue) {
        let Some(descriptor) = self.fields.get(index) else {
            return;
        };
        if descriptor.kind == value.kind() {
            self.values[index] = Some(value);
        }
    }
}
