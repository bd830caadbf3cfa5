#![warn(clippy::pedantic)]

pub mod dynamic;
pub mod field;
pub mod record;

pub use dynamic::DynamicRecord;
pub use field::{FieldDescriptor, FieldKind, FieldValue};
pub use record::Record;
