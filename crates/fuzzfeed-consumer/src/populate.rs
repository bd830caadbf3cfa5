use fuzzfeed_types::{FieldKind, FieldValue, Record};
use fuzzfeed_wire::{DecodeError, get_bool, get_bytes, get_int, get_string};
use tracing::trace;

/// Fill `target`'s fields from `data`, in declaration order.
///
/// One position is shared across all fields. Each field of a decodable
/// kind consumes exactly one value:
///
/// ```text
///   String ─▶ get_string   Bool ─▶ get_bool
///   Int    ─▶ get_int      Bytes ─▶ get_bytes
///   StringList / Unsupported ─▶ skipped, left as constructed
/// ```
///
/// Bytes left over after the last field are ignored.
///
/// # Errors
///
/// Returns the first [`DecodeError`] hit. Fields before the failure keep
/// their decoded values; the failing field and everything after it are
/// left untouched.
pub fn populate_record<R>(target: &mut R, data: &[u8]) -> Result<(), DecodeError>
where
    R: Record + ?Sized,
{
    let mut position = 0;
    let count = target.fields().len();

    for index in 0..count {
        let kind = target.fields()[index].kind;
        let value = match kind {
            FieldKind::String => FieldValue::String(get_string(data, &mut position)?),
            FieldKind::Bool => FieldValue::Bool(get_bool(data, &mut position)?),
            FieldKind::Int => FieldValue::Int(get_int(data, &mut position)?),
            FieldKind::Bytes => FieldValue::Bytes(get_bytes(data, &mut position)?.to_vec()),
            FieldKind::StringList | FieldKind::Unsupported => {
                trace!(field = %target.fields()[index].name, ?kind, "skipping field");
                continue;
            }
        };
        trace!(field = %target.fields()[index].name, position, "decoded field");
        target.assign(index, value);
    }

    Ok(())
}
