#![no_main]

use fuzzfeed_consumer::{Consumer, DecodeError};
use fuzzfeed_derive::Record;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Default, Record)]
struct Target {
    name: String,
    labels: Vec<String>,
    enabled: bool,
    limit: u64,
    blob: Vec<u8>,
    score: f64,
    note: String,
}

#[derive(Debug, Default, Record)]
struct Step {
    key: String,
    value: i32,
}

// Fuzz target: record population, whole-buffer and per call.
//
// A string failure must always carry the "nil" placeholder.
fuzz_target!(|data: &[u8]| {
    let mut consumer = Consumer::new(data);

    let mut target = Target::default();
    if let Err(err @ DecodeError::InsufficientBytesForString { .. }) =
        consumer.populate(&mut target)
    {
        assert_eq!(err.placeholder(), Some("nil"));
    }

    if consumer.split(1, 8).is_ok() {
        for call in consumer.calls() {
            let mut step = Step::default();
            let _ = call.populate(&mut step);
        }
    }
});
