use super::value::{Kind, Value};

/// Re-serialize a decoded value tree.
///
/// The decoder's strict grammar admits only the canonical spelling of each
/// value and the dictionary keeps its original key order, so encoding a
/// decoded document reproduces the input buffer byte for byte.
pub fn encode(value: &Value) -> Vec<u8> {
    let mut out = Vec::with_capacity(value.span.len());
    encode_into(value, &mut out);
    out
}

fn encode_into(value: &Value, out: &mut Vec<u8>) {
    match &value.kind {
        Kind::Integer(i) => {
            out.push(b'i');
            out.extend_from_slice(i.to_string().as_bytes());
            out.push(b'e');
        }
        Kind::Bytes(b) => {
            out.extend_from_slice(b.len().to_string().as_bytes());
            out.push(b':');
            out.extend_from_slice(b);
        }
        Kind::List(items) => {
            out.push(b'l');
            for item in items {
                encode_into(item, out);
            }
            out.push(b'e');
        }
        Kind::Dict(pairs) => {
            out.push(b'd');
            for (key, val) in pairs {
                out.extend_from_slice(key.len().to_string().as_bytes());
                out.push(b':');
                out.extend_from_slice(key);
                encode_into(val, out);
            }
            out.push(b'e');
        }
    }
}
