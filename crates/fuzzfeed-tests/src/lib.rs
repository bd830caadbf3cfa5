//! Shared fixtures for the fuzzfeed integration tests and benches.

use std::fmt::Write;

use fuzzfeed_consumer::Consumer;

/// Render a consumer's call plan as one line per call.
///
/// ```text
/// calls=2
/// #0 sel=0x0a params=0102
/// #1 sel=0x0b params=0304
/// ```
pub fn render_plan(consumer: &Consumer<'_>) -> String {
    let mut out = format!("calls={}", consumer.number_of_calls());
    for call in consumer.calls() {
        let _ = write!(out, "\n#{} sel={:#04x} params=", call.index, call.selector);
        for byte in call.params {
            let _ = write!(out, "{byte:02x}");
        }
    }
    out
}

/// Build a split-ready buffer: header, selectors, then parameters.
///
/// # Panics
///
/// Panics if more than 255 selectors are given.
pub fn plan_bytes(selectors: &[u8], params: &[u8]) -> Vec<u8> {
    let header = u8::try_from(selectors.len()).expect("at most 255 calls");
    let mut out = Vec::with_capacity(1 + selectors.len() + params.len());
    out.push(header);
    out.extend_from_slice(selectors);
    out.extend_from_slice(params);
    out
}
