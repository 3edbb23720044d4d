/// Length in bytes of a SHA-1 digest (info-hash and v1 piece checksums)
pub const HASH_LEN: usize = 20;

/// Maximum bencode nesting depth accepted by the decoder
pub const MAX_DEPTH: usize = 64;

/// File name prefix used by clients that spell padding files out by name
pub const PADDING_NAME_PREFIX: &str = "_____padding_file";

/// Directory some clients group BEP 47 padding files under
pub const PAD_DIR_NAME: &str = ".pad";
