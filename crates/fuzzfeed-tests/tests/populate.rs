//! Record population through `#[derive(Record)]` and `DynamicRecord`.

use fuzzfeed_consumer::{Consumer, DecodeError, populate_record};
use fuzzfeed_derive::Record;
use fuzzfeed_types::{DynamicRecord, FieldKind, FieldValue, Record as _};
use fuzzfeed_tests::plan_bytes;

#[derive(Debug, Default, PartialEq, Record)]
struct Greeting {
    s: String,
    b: bool,
    i: i32,
}

#[derive(Debug, Default, PartialEq, Record)]
struct Request {
    method: String,
    headers: Vec<String>,
    body: Vec<u8>,
    keep_alive: bool,
    retries: usize,
    timeout: f32,
    r#type: u16,
}

#[derive(Debug, Default, PartialEq, Record)]
#[fuzzfeed(crate = "fuzzfeed_consumer")]
struct Flags {
    verbose: bool,
    level: u8,
}

// ── Layout ────────────────────────────────────────────────────────────────────

#[test]
fn derived_layout_follows_declaration_order() {
    let request = Request::default();
    let layout: Vec<(&str, FieldKind)> = request
        .fields()
        .iter()
        .map(|f| (&*f.name, f.kind))
        .collect();

    assert_eq!(
        layout,
        vec![
            ("method", FieldKind::String),
            ("headers", FieldKind::StringList),
            ("body", FieldKind::Bytes),
            ("keep_alive", FieldKind::Bool),
            ("retries", FieldKind::Int),
            ("timeout", FieldKind::Unsupported),
            ("type", FieldKind::Int),
        ]
    );
}

// ── Population ────────────────────────────────────────────────────────────────

#[test]
fn string_bool_int() {
    let mut greeting = Greeting::default();
    populate_record(&mut greeting, &[2, b'h', b'i', 1, 7]).unwrap();

    // 1 is odd, so the bool decodes as false.
    assert_eq!(
        greeting,
        Greeting {
            s: "hi".into(),
            b: false,
            i: 7,
        }
    );
}

#[test]
fn skipped_kinds_consume_no_bytes() {
    // method: "GET"
    let mut data = hex::decode("03474554").unwrap();
    // body: 2 bytes, keep_alive: even, retries: 3, type: 200
    data.extend_from_slice(&[2, 0xDE, 0xAD, 8, 3, 200]);

    let mut request = Request {
        headers: vec!["kept".into()],
        timeout: 1.5,
        ..Request::default()
    };
    populate_record(&mut request, &data).unwrap();

    assert_eq!(request.method, "GET");
    assert_eq!(request.headers, vec!["kept".to_string()]);
    assert_eq!(request.body, vec![0xDE, 0xAD]);
    assert!(request.keep_alive);
    assert_eq!(request.retries, 3);
    assert!((request.timeout - 1.5).abs() < f32::EPSILON);
    assert_eq!(request.r#type, 200);
}

#[test]
fn aborts_mid_record() {
    let mut request = Request::default();
    // method fits, body announces 9 bytes but only 2 follow.
    let err = populate_record(&mut request, &[1, b'X', 9, 1, 2]).unwrap_err();

    assert_eq!(
        err,
        DecodeError::InsufficientBytesForByteSlice {
            offset: 2,
            len: Some(9)
        }
    );
    assert_eq!(request.method, "X");
    assert!(request.body.is_empty());
    assert!(!request.keep_alive);
    assert_eq!(request.retries, 0);
}

#[test]
fn each_call_populates_its_own_record() {
    // Two calls, three parameter bytes each: [1, 'a', 4] then [0, 2, 9].
    let data = plan_bytes(&[0, 1], &[1, b'a', 4, 0, 2, 9]);
    let mut consumer = Consumer::new(&data);
    consumer.split(1, 2).unwrap();

    let results: Vec<Result<Greeting, DecodeError>> = consumer
        .calls()
        .map(|call| {
            let mut greeting = Greeting::default();
            call.populate(&mut greeting).map(|()| greeting)
        })
        .collect();

    // First chunk runs out before the int.
    assert_eq!(
        results[0],
        Err(DecodeError::InsufficientBytesForInt { offset: 3 })
    );
    // Second chunk: empty string, 2 is even, int 9.
    assert_eq!(
        results[1],
        Ok(Greeting {
            s: String::new(),
            b: true,
            i: 9,
        })
    );
}

#[test]
fn dynamic_matches_derived() {
    let data = [3, b'a', b'b', b'c', 5, 250, 0];

    let mut derived = Greeting::default();
    populate_record(&mut derived, &data).unwrap();

    let mut dynamic = DynamicRecord::new()
        .with_field("s", FieldKind::String)
        .with_field("b", FieldKind::Bool)
        .with_field("i", FieldKind::Int);
    populate_record(&mut dynamic, &data).unwrap();

    assert_eq!(dynamic.get("s"), Some(&FieldValue::String(derived.s.clone())));
    assert_eq!(dynamic.get("b"), Some(&FieldValue::Bool(derived.b)));
    assert_eq!(dynamic.get("i"), Some(&FieldValue::Int(250)));
    assert_eq!(derived.i, 250);
}

#[test]
fn derive_through_consumer_reexports() {
    let mut flags = Flags::default();
    populate_record(&mut flags, &[4, 3]).unwrap();
    assert_eq!(
        flags,
        Flags {
            verbose: true,
            level: 3,
        }
    );
    assert_eq!(<Flags as fuzzfeed_consumer::Record>::fields(&flags).len(), 2);
}
