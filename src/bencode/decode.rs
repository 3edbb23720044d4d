use super::error::DecodeError;
use super::value::{Kind, Span, Value};
use crate::config::MAX_DEPTH;

/// Decode a complete bencode document.
///
/// The buffer must contain exactly one top-level value; anything left over
/// is `TrailingData`. Every value in the returned tree records the span it
/// was read from, which downstream code relies on to hash the raw `info`
/// dictionary bytes.
pub fn decode(buf: &[u8]) -> Result<Value, DecodeError> {
    let mut pos = 0;
    let value = decode_value(buf, &mut pos, 0)?;

    if pos != buf.len() {
        return Err(DecodeError::TrailingData(pos));
    }

    Ok(value)
}

fn decode_value(buf: &[u8], pos: &mut usize, depth: usize) -> Result<Value, DecodeError> {
    if depth > MAX_DEPTH {
        return Err(DecodeError::NestingTooDeep(MAX_DEPTH));
    }

    match buf.get(*pos) {
        None => Err(DecodeError::UnexpectedEof),
        Some(&b'i') => decode_integer(buf, pos),
        Some(&b'l') => decode_list(buf, pos, depth),
        Some(&b'd') => decode_dict(buf, pos, depth),
        Some(&(b'0'..=b'9')) => decode_bytes(buf, pos),
        Some(&byte) => Err(DecodeError::UnexpectedToken { byte, offset: *pos }),
    }
}

fn decode_integer(buf: &[u8], pos: &mut usize) -> Result<Value, DecodeError> {
    let start = *pos;
    *pos += 1; // 'i'

    let digits_start = *pos;
    if buf.get(*pos) == Some(&b'-') {
        *pos += 1;
    }
    while matches!(buf.get(*pos), Some(&(b'0'..=b'9'))) {
        *pos += 1;
    }

    match buf.get(*pos) {
        None => return Err(DecodeError::UnexpectedEof),
        Some(&b'e') => {}
        Some(_) => return Err(DecodeError::MalformedInteger(start)),
    }

    let digits = &buf[digits_start..*pos];
    let unsigned = digits.strip_prefix(b"-").unwrap_or(digits);
    // Reject empty digits, "-0", and any leading zero other than plain "0".
    if unsigned.is_empty()
        || (unsigned[0] == b'0' && (unsigned.len() > 1 || digits[0] == b'-'))
    {
        return Err(DecodeError::MalformedInteger(start));
    }

    let value: i64 = std::str::from_utf8(digits)
        .ok()
        .and_then(|text| text.parse().ok())
        .ok_or(DecodeError::MalformedInteger(start))?;

    *pos += 1; // 'e'
    Ok(Value {
        kind: Kind::Integer(value),
        span: Span { start, end: *pos },
    })
}

fn decode_bytes(buf: &[u8], pos: &mut usize) -> Result<Value, DecodeError> {
    let start = *pos;
    while matches!(buf.get(*pos), Some(&(b'0'..=b'9'))) {
        *pos += 1;
    }

    match buf.get(*pos) {
        None => return Err(DecodeError::UnexpectedEof),
        Some(&b':') => {}
        Some(&byte) => return Err(DecodeError::UnexpectedToken { byte, offset: *pos }),
    }

    let digits = &buf[start..*pos];
    if digits[0] == b'0' && digits.len() > 1 {
        return Err(DecodeError::MalformedInteger(start));
    }

    let len: usize = std::str::from_utf8(digits)
        .ok()
        .and_then(|text| text.parse().ok())
        .ok_or(DecodeError::MalformedInteger(start))?;

    *pos += 1; // ':'

    let end = pos
        .checked_add(len)
        .filter(|&end| end <= buf.len())
        .ok_or(DecodeError::UnexpectedEof)?;

    let bytes = buf[*pos..end].to_vec();
    *pos = end;

    Ok(Value {
        kind: Kind::Bytes(bytes),
        span: Span { start, end: *pos },
    })
}

fn decode_list(buf: &[u8], pos: &mut usize, depth: usize) -> Result<Value, DecodeError> {
    let start = *pos;
    *pos += 1; // 'l'
    let mut list = Vec::new();

    loop {
        match buf.get(*pos) {
            None => return Err(DecodeError::UnexpectedEof),
            Some(&b'e') => break,
            Some(_) => list.push(decode_value(buf, pos, depth + 1)?),
        }
    }

    *pos += 1; // 'e'
    Ok(Value {
        kind: Kind::List(list),
        span: Span { start, end: *pos },
    })
}

fn decode_dict(buf: &[u8], pos: &mut usize, depth: usize) -> Result<Value, DecodeError> {
    let start = *pos;
    *pos += 1; // 'd'
    let mut dict: Vec<(Vec<u8>, Value)> = Vec::new();

    loop {
        match buf.get(*pos) {
            None => return Err(DecodeError::UnexpectedEof),
            Some(&b'e') => break,
            Some(_) => {}
        }

        let key_offset = *pos;
        let key = match decode_value(buf, pos, depth + 1)?.kind {
            Kind::Bytes(b) => b,
            _ => return Err(DecodeError::InvalidKeyType(key_offset)),
        };

        if dict.iter().any(|(k, _)| *k == key) {
            return Err(DecodeError::DuplicateKey(key_offset));
        }

        let value = decode_value(buf, pos, depth + 1)?;
        dict.push((key, value));
    }

    *pos += 1; // 'e'
    Ok(Value {
        kind: Kind::Dict(dict),
        span: Span { start, end: *pos },
    })
}
