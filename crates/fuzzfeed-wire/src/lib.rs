#![warn(clippy::pedantic)]

pub mod cursor;
pub mod decode;
pub mod error;

pub use cursor::Cursor;
pub use decode::{STRING_PLACEHOLDER, get_bool, get_bytes, get_int, get_string};
pub use error::DecodeError;
