use std::borrow::Cow;

/// The kind of a record field, which decides how many bytes it consumes.
///
/// ```text
/// ┌─────────────┬─────────────────────┬──────────────────────────────┐
/// │ Kind        │ Rust field types    │ Consumed                     │
/// ├─────────────┼─────────────────────┼──────────────────────────────┤
/// │ String      │ String              │ length byte + payload        │
/// │ Bool        │ bool                │ 1 byte (even = true)         │
/// │ Int         │ u8..u128, i16..i128 │ 1 byte (0..=255)             │
/// │ Bytes       │ Vec<u8>             │ length byte + payload        │
/// │ StringList  │ Vec<String>         │ nothing, skipped             │
/// │ Unsupported │ anything else       │ nothing, skipped             │
/// └─────────────┴─────────────────────┴──────────────────────────────┘
/// ```
///
/// Skipped fields keep whatever value the record was constructed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    String,
    Bool,
    Int,
    Bytes,
    StringList,
    Unsupported,
}

impl FieldKind {
    /// Classify a Rust type by its spelled-out name.
    ///
    /// Whitespace and the `std::`/`alloc::` paths of `String` and `Vec` are
    /// ignored, so `Vec < u8 >` and `std::vec::Vec<u8>` both map to
    /// [`FieldKind::Bytes`]. Unknown names are [`FieldKind::Unsupported`].
    pub fn from_type_name(name: &str) -> Self {
        let mut normalized: String = name.chars().filter(|c| !c.is_whitespace()).collect();
        for prefix in [
            "::std::string::",
            "::alloc::string::",
            "::std::vec::",
            "::alloc::vec::",
            "std::string::",
            "alloc::string::",
            "std::vec::",
            "alloc::vec::",
        ] {
            normalized = normalized.replace(prefix, "");
        }

        match normalized.as_str() {
            "String" => Self::String,
            "bool" => Self::Bool,
            "u8" | "u16" | "u32" | "u64" | "u128" | "usize" | "i16" | "i32" | "i64" | "i128"
            | "isize" => Self::Int,
            "Vec<u8>" => Self::Bytes,
            "Vec<String>" => Self::StringList,
            _ => Self::Unsupported,
        }
    }

    /// Variant name, as written in Rust source.
    pub fn variant_name(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Bool => "Bool",
            Self::Int => "Int",
            Self::Bytes => "Bytes",
            Self::StringList => "StringList",
            Self::Unsupported => "Unsupported",
        }
    }

    /// Whether population reads bytes for this kind.
    pub fn is_decoded(self) -> bool {
        matches!(self, Self::String | Self::Bool | Self::Int | Self::Bytes)
    }
}

/// Name and kind of one field in a record layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: Cow<'static, str>,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Descriptor with a static name, usable in `static` layouts.
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name: Cow::Borrowed(name),
            kind,
        }
    }

    /// Descriptor with a name only known at run time.
    pub fn owned(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            kind,
        }
    }
}

/// A decoded value on its way into a record field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    String(String),
    Bool(bool),
    Int(u8),
    Bytes(Vec<u8>),
}

impl FieldValue {
    /// The value an unpopulated field of `kind` holds, or `None` for kinds
    /// that never receive a value.
    pub fn zero(kind: FieldKind) -> Option<Self> {
        match kind {
            FieldKind::String => Some(Self::String(String::new())),
            FieldKind::Bool => Some(Self::Bool(false)),
            FieldKind::Int => Some(Self::Int(0)),
            FieldKind::Bytes => Some(Self::Bytes(Vec::new())),
            FieldKind::StringList | FieldKind::Unsupported => None,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::String(_) => FieldKind::String,
            Self::Bool(_) => FieldKind::Bool,
            Self::Int(_) => FieldKind::Int,
            Self::Bytes(_) => FieldKind::Bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_supported_types() {
        assert_eq!(FieldKind::from_type_name("String"), FieldKind::String);
        assert_eq!(FieldKind::from_type_name("bool"), FieldKind::Bool);
        assert_eq!(FieldKind::from_type_name("i64"), FieldKind::Int);
        assert_eq!(FieldKind::from_type_name("u8"), FieldKind::Int);
        assert_eq!(FieldKind::from_type_name("usize"), FieldKind::Int);
        assert_eq!(FieldKind::from_type_name("Vec<u8>"), FieldKind::Bytes);
        assert_eq!(FieldKind::from_type_name("Vec<String>"), FieldKind::StringList);
    }

    #[test]
    fn normalizes_paths_and_spacing() {
        assert_eq!(FieldKind::from_type_name("Vec < u8 >"), FieldKind::Bytes);
        assert_eq!(FieldKind::from_type_name("std::vec::Vec<u8>"), FieldKind::Bytes);
        assert_eq!(
            FieldKind::from_type_name(":: std :: string :: String"),
            FieldKind::String
        );
        assert_eq!(
            FieldKind::from_type_name("alloc::vec::Vec<alloc::string::String>"),
            FieldKind::StringList
        );
    }

    #[test]
    fn everything_else_is_unsupported() {
        for name in ["f64", "i8", "char", "Option<String>", "Vec<u16>", "[u8; 4]", "Inner"] {
            assert_eq!(FieldKind::from_type_name(name), FieldKind::Unsupported, "{name}");
        }
    }

    #[test]
    fn only_four_kinds_are_decoded() {
        let decoded: Vec<FieldKind> = [
            FieldKind::String,
            FieldKind::Bool,
            FieldKind::Int,
            FieldKind::Bytes,
            FieldKind::StringList,
            FieldKind::Unsupported,
        ]
        .into_iter()
        .filter(|k| k.is_decoded())
        .collect();
        assert_eq!(decoded.len(), 4);
    }

    #[test]
    fn zero_values_match_kind() {
        assert_eq!(FieldValue::zero(FieldKind::Int), Some(FieldValue::Int(0)));
        assert_eq!(FieldValue::zero(FieldKind::StringList), None);
        assert_eq!(
            FieldValue::zero(FieldKind::Bytes).map(|v| v.kind()),
            Some(FieldKind::Bytes)
        );
    }
}
