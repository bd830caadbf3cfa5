#![warn(clippy::pedantic)]

pub mod config;
pub mod consumer;
pub mod error;
pub mod plan;
pub mod populate;

pub use config::SplitConfig;
pub use consumer::Consumer;
pub use error::SplitError;
pub use plan::{Call, Calls};
pub use populate::populate_record;

pub use fuzzfeed_types::{DynamicRecord, FieldDescriptor, FieldKind, FieldValue, Record};
pub use fuzzfeed_wire::{Cursor, DecodeError};
