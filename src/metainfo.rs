use thiserror::Error;

use crate::bencode::{self, DecodeError, Value};
use crate::config::{HASH_LEN, PAD_DIR_NAME, PADDING_NAME_PREFIX};
use crate::hashing;
use crate::models::{FileMode, FileRecord, TorrentMetadata};

/// Errors produced while interpreting a decoded document as a torrent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("bencode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("field has wrong type: {0}")]
    WrongType(&'static str),

    #[error("exactly one of `length` and `files` must be present in the info dictionary")]
    AmbiguousFileMode,
}

/// Decode `buf` and map it into torrent metadata in one step.
pub fn parse(buf: &[u8]) -> Result<TorrentMetadata, MapError> {
    let root = bencode::decode(buf)?;
    map(&root, buf)
}

/// Interpret a decoded value tree as torrent metadata.
///
/// The required structure (`info` dictionary, single- vs multi-file mode) is
/// validated strictly. Optional top-level fields are read leniently: a
/// missing or wrong-typed `announce`, `comment`, `creation date`, `created
/// by` or `encoding` is ignored rather than fatal, since this feeds a
/// preview rather than a full client.
///
/// `buf` must be the buffer `root` was decoded from; the info-hash is
/// computed over the raw bytes of the `info` value's span before any
/// interpretation.
pub fn map(root: &Value, buf: &[u8]) -> Result<TorrentMetadata, MapError> {
    if root.as_dict().is_none() {
        return Err(MapError::WrongType("metainfo root"));
    }

    let info = root.get(b"info").ok_or(MapError::MissingField("info"))?;
    if info.as_dict().is_none() {
        return Err(MapError::WrongType("info"));
    }

    let info_hash = hashing::info_hash(buf, info.span);

    let announce = lossy_string(root.get(b"announce"));
    let announce_list = map_announce_list(root.get(b"announce-list"));
    let trackers = flatten_trackers(announce.as_deref(), &announce_list);

    let name = lossy_string(info.get(b"name.utf-8"))
        .or_else(|| lossy_string(info.get(b"name")))
        .unwrap_or_default();

    let piece_length = info
        .get(b"piece length")
        .and_then(|v| v.as_integer())
        .map(|n| n.max(0) as u64)
        .unwrap_or(0);

    let pieces = info
        .get(b"pieces")
        .and_then(|v| v.as_bytes())
        .map(slice_pieces)
        .unwrap_or_default();

    let (mode, files) = match (info.get(b"length"), info.get(b"files")) {
        (Some(_), Some(_)) | (None, None) => return Err(MapError::AmbiguousFileMode),
        (Some(length), None) => {
            let path = vec![name.clone()];
            let record = FileRecord {
                length: clamp_length(length),
                md5sum: lossy_string(info.get(b"md5sum")),
                is_padding: is_padding(info.get(b"attr"), &path),
                path,
            };
            (FileMode::Single, vec![record])
        }
        (None, Some(files)) => {
            let entries = files.as_list().ok_or(MapError::WrongType("files"))?;
            (FileMode::Multi, map_files(entries))
        }
    };

    Ok(TorrentMetadata {
        announce,
        announce_list,
        comment: lossy_string(root.get(b"comment")),
        created_by: lossy_string(root.get(b"created by")),
        creation_date: root.get(b"creation date").and_then(|v| v.as_integer()),
        encoding: lossy_string(root.get(b"encoding")),
        name,
        piece_length,
        pieces,
        mode,
        files,
        info_hash,
        trackers,
    })
}

/// Map the `files` list of a multi-file torrent.
///
/// Entries that are not dictionaries or carry no usable path are skipped;
/// a wrong-typed segment inside `path` skips the whole entry, so a file is
/// never silently relocated to a shorter path.
/// Path segments prefer the `path.utf-8` variant and fall back to lossy
/// UTF-8 decoding, so undecodable bytes still produce a displayable name.
fn map_files(entries: &[Value]) -> Vec<FileRecord> {
    let mut files = Vec::with_capacity(entries.len());

    for entry in entries {
        if entry.as_dict().is_none() {
            continue;
        }

        let path_value = entry
            .get(b"path.utf-8")
            .filter(|v| v.as_list().is_some())
            .or_else(|| entry.get(b"path"));
        let Some(segments) = path_value.and_then(|v| v.as_list()) else {
            continue;
        };

        // All segments or none: dropping a wrong-typed segment would splice
        // the remainder together and relocate the file a level up.
        let Some(path) = segments
            .iter()
            .map(|s| s.as_bytes().map(|b| String::from_utf8_lossy(b).into_owned()))
            .collect::<Option<Vec<String>>>()
        else {
            continue;
        };
        if path.is_empty() {
            continue;
        }

        files.push(FileRecord {
            length: entry.get(b"length").map(clamp_length).unwrap_or(0),
            md5sum: lossy_string(entry.get(b"md5sum")),
            is_padding: is_padding(entry.get(b"attr"), &path),
            path,
        });
    }

    files
}

fn lossy_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(|v| v.as_bytes())
        .map(|b| String::from_utf8_lossy(b).into_owned())
}

fn map_announce_list(value: Option<&Value>) -> Vec<Vec<String>> {
    let Some(tiers) = value.and_then(|v| v.as_list()) else {
        return Vec::new();
    };

    tiers
        .iter()
        .filter_map(|tier| tier.as_list())
        .map(|urls| {
            urls.iter()
                .filter_map(|u| u.as_bytes())
                .map(|b| String::from_utf8_lossy(b).into_owned())
                .collect()
        })
        .collect()
}

/// Flatten tracker tiers into one list, deduplicated in first-seen order.
/// Falls back to the plain `announce` URL when no tier list exists.
fn flatten_trackers(announce: Option<&str>, announce_list: &[Vec<String>]) -> Vec<String> {
    if announce_list.is_empty() {
        return announce.map(|url| vec![url.to_string()]).unwrap_or_default();
    }

    let mut trackers: Vec<String> = Vec::new();
    for tier in announce_list {
        for url in tier {
            if !trackers.iter().any(|t| t == url) {
                trackers.push(url.clone());
            }
        }
    }
    trackers
}

/// Negative lengths have been seen in malformed torrents; clamp to zero
/// rather than reject.
fn clamp_length(value: &Value) -> u64 {
    value.as_integer().map(|n| n.max(0) as u64).unwrap_or(0)
}

/// A file is padding if its BEP 47 `attr` string contains `p`, its final
/// path segment carries the conventional padding-file name prefix, or it
/// lives under a top-level `.pad` directory.
fn is_padding(attr: Option<&Value>, path: &[String]) -> bool {
    if attr.and_then(|v| v.as_str()).is_some_and(|a| a.contains('p')) {
        return true;
    }

    let named_padding = path
        .last()
        .is_some_and(|name| name.starts_with(PADDING_NAME_PREFIX));
    let in_pad_dir = path.len() > 1 && path[0] == PAD_DIR_NAME;

    named_padding || in_pad_dir
}

fn slice_pieces(raw: &[u8]) -> Vec<[u8; HASH_LEN]> {
    raw.chunks_exact(HASH_LEN)
        .map(|chunk| {
            let mut piece = [0u8; HASH_LEN];
            piece.copy_from_slice(chunk);
            piece
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bencode::{Kind, Span};

    fn bytes_value(s: &str) -> Value {
        Value {
            kind: Kind::Bytes(s.as_bytes().to_vec()),
            span: Span { start: 0, end: 0 },
        }
    }

    #[test]
    fn test_is_padding_by_attr() {
        let attr = bytes_value("p");
        assert!(is_padding(Some(&attr), &["data.bin".into()]));

        let attr = bytes_value("x");
        assert!(!is_padding(Some(&attr), &["data.bin".into()]));
    }

    #[test]
    fn test_is_padding_by_name() {
        assert!(is_padding(None, &["_____padding_file_12_".into()]));
        assert!(is_padding(None, &[".pad".into(), "1048576".into()]));
        assert!(!is_padding(None, &["movie.mkv".into()]));
        // a top-level file literally named ".pad" is not a padding dir entry
        assert!(!is_padding(None, &[".pad".into()]));
    }

    #[test]
    fn test_flatten_trackers_dedups_first_seen() {
        let tiers = vec![
            vec!["http://a".to_string(), "http://b".to_string()],
            vec!["http://a".to_string(), "http://c".to_string()],
        ];
        assert_eq!(
            flatten_trackers(Some("http://a"), &tiers),
            vec!["http://a", "http://b", "http://c"]
        );
        assert_eq!(flatten_trackers(Some("http://a"), &[]), vec!["http://a"]);
        assert!(flatten_trackers(None, &[]).is_empty());
    }

    #[test]
    fn test_slice_pieces_drops_short_tail() {
        let raw = vec![0xabu8; 45];
        let pieces = slice_pieces(&raw);
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0], [0xab; HASH_LEN]);
    }
}
