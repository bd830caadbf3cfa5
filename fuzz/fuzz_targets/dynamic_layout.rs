#![no_main]

use arbitrary::Arbitrary;
use fuzzfeed_consumer::{populate_record, DynamicRecord, FieldKind};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Kind {
    String,
    Bool,
    Int,
    Bytes,
    StringList,
    Unsupported,
}

impl From<Kind> for FieldKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::String => FieldKind::String,
            Kind::Bool => FieldKind::Bool,
            Kind::Int => FieldKind::Int,
            Kind::Bytes => FieldKind::Bytes,
            Kind::StringList => FieldKind::StringList,
            Kind::Unsupported => FieldKind::Unsupported,
        }
    }
}

#[derive(Arbitrary, Debug)]
struct Input {
    layout: Vec<Kind>,
    data: Vec<u8>,
}

// Fuzz target: population of arbitrary run-time layouts.
//
// Catches bugs in:
// - Field/kind bookkeeping in DynamicRecord
// - Skipped kinds consuming bytes
// - Determinism across repeated passes
fuzz_target!(|input: Input| {
    let mut first = DynamicRecord::new();
    for (i, kind) in input.layout.into_iter().enumerate() {
        first.push(format!("f{i}"), kind.into());
    }
    let mut second = first.clone();

    let a = populate_record(&mut first, &input.data);
    let b = populate_record(&mut second, &input.data);
    assert_eq!(a, b);
    assert_eq!(first, second);
});
