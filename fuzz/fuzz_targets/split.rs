#![no_main]

use fuzzfeed_consumer::Consumer;
use libfuzzer_sys::fuzz_target;

// Fuzz target: Consumer::split followed by call iteration.
//
// Catches bugs in:
// - Header byte bounds checks
// - 2n + 1 length requirement
// - Divisibility check and zero-call handling
// - Chunking of the parameter bytes
fuzz_target!(|data: &[u8]| {
    let mut consumer = Consumer::new(data);
    if consumer.split(0, 16).is_ok() {
        let n = consumer.number_of_calls();
        let total: usize = consumer.calls().map(|call| call.params.len()).sum();
        assert_eq!(consumer.calls().count(), n);
        assert_eq!(total, consumer.rest_of_array().len());
    }
});
