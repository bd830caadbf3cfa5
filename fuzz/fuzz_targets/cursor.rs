#![no_main]

use fuzzfeed_wire::Cursor;
use libfuzzer_sys::fuzz_target;

// Fuzz target: cursor decoders driven by the input itself.
//
// Each step reads an int, takes it modulo 4 to pick the next decoder, and
// stops at the first failure. Checks that:
// - the position never passes the buffer end
// - a failed read leaves the position where it was
fuzz_target!(|data: &[u8]| {
    let mut cursor = Cursor::new(data);
    while let Ok(op) = cursor.read_int() {
        let before = cursor.position();
        let ok = match op % 4 {
            0 => cursor.read_int().is_ok(),
            1 => cursor.read_bool().is_ok(),
            2 => cursor.read_bytes().is_ok(),
            _ => cursor.read_string().is_ok(),
        };
        assert!(cursor.position() <= data.len());
        if !ok {
            assert_eq!(cursor.position(), before);
            break;
        }
    }
});
