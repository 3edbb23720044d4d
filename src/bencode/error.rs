use thiserror::Error;

/// Errors produced while decoding a bencode document.
///
/// Every variant that carries an offset refers to a byte position in the
/// original input buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Integer literal breaks the grammar (empty digits, `-0`, leading
    /// zeros, overflow, or a stray byte before the closing `e`).
    #[error("malformed integer at offset {0}")]
    MalformedInteger(usize),

    /// A byte that cannot start any bencode value.
    #[error("unexpected byte {byte:#04x} at offset {offset}")]
    UnexpectedToken { byte: u8, offset: usize },

    /// The buffer ended while a value was still being read.
    #[error("unexpected end of buffer")]
    UnexpectedEof,

    /// Bytes remain after the top-level value was fully decoded.
    #[error("trailing data after top-level value at offset {0}")]
    TrailingData(usize),

    /// A dictionary key is not a byte string.
    #[error("dictionary key is not a byte string at offset {0}")]
    InvalidKeyType(usize),

    /// The same key appears twice in one dictionary.
    #[error("duplicate dictionary key at offset {0}")]
    DuplicateKey(usize),

    /// Nesting exceeds the decoder's depth limit.
    #[error("nesting deeper than {0} levels")]
    NestingTooDeep(usize),
}
