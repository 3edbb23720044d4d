use torview::bencode::DecodeError;
use torview::metainfo::{self, MapError};
use torview::models::FileMode;
use torview::preview::TorrentPreview;

/// The raw `info` dictionary of the multi-file fixture. Its SHA-1 is pinned
/// below; changing these bytes invalidates `EXPECTED_HASH`.
const MULTI_INFO: &str = "d5:filesld6:lengthi10e4:pathl1:a1:b5:c.txteed6:lengthi20e4:pathl1:a1:b5:d.txteed4:attr1:p6:lengthi2e4:pathl20:_____padding_file_0_eee4:name6:sample12:piece lengthi32768e6:pieces20:0123456789abcdefghije";

const EXPECTED_HASH: &str = "4cd2f64bd02062e0cacf948b6945c34ca414689b";

/// Multi-file fixture with a configurable comment, so tests can mutate
/// bytes outside the info dictionary while holding the info bytes constant.
fn multi_fixture(comment: &str) -> Vec<u8> {
    format!(
        "d8:announce29:http://a.example.com/announce\
         13:announce-listll29:http://a.example.com/announceel24:udp://b.example.com:6969ee\
         7:comment{}:{}\
         13:creation datei1700000000e\
         4:info{}e",
        comment.len(),
        comment,
        MULTI_INFO
    )
    .into_bytes()
}

#[test]
fn test_multi_file_mapping() {
    let metadata = metainfo::parse(&multi_fixture("fixture")).unwrap();

    assert_eq!(metadata.mode, FileMode::Multi);
    assert_eq!(metadata.name, "sample");
    assert_eq!(metadata.announce.as_deref(), Some("http://a.example.com/announce"));
    assert_eq!(metadata.comment.as_deref(), Some("fixture"));
    assert_eq!(metadata.creation_date, Some(1_700_000_000));
    assert_eq!(metadata.piece_length, 32768);
    assert_eq!(metadata.piece_count(), 1);

    assert_eq!(metadata.file_count(), 3);
    assert_eq!(metadata.padding_count(), 1);
    assert_eq!(metadata.total_size(), 10 + 20 + 2);

    assert_eq!(metadata.files[0].path, vec!["a", "b", "c.txt"]);
    assert_eq!(metadata.files[0].length, 10);
    assert!(!metadata.files[0].is_padding);
    assert!(metadata.files[2].is_padding);
}

#[test]
fn test_info_hash_matches_reference_digest() {
    let metadata = metainfo::parse(&multi_fixture("fixture")).unwrap();
    assert_eq!(metadata.info_hash_hex(), EXPECTED_HASH);
}

#[test]
fn test_info_hash_ignores_bytes_outside_info() {
    let a = metainfo::parse(&multi_fixture("fixture")).unwrap();
    let b = metainfo::parse(&multi_fixture("another comment entirely")).unwrap();
    assert_eq!(a.info_hash, b.info_hash);
    assert_eq!(b.info_hash_hex(), EXPECTED_HASH);
}

#[test]
fn test_trackers_flattened_and_deduplicated() {
    let metadata = metainfo::parse(&multi_fixture("fixture")).unwrap();
    assert_eq!(
        metadata.trackers,
        vec!["http://a.example.com/announce", "udp://b.example.com:6969"]
    );
}

#[test]
fn test_utf8_name_variant_preferred() {
    let buf = b"d4:infod6:lengthi1e4:name3:abc10:name.utf-86:abcdefee";
    let metadata = metainfo::parse(buf).unwrap();
    assert_eq!(metadata.name, "abcdef");
    assert_eq!(metadata.mode, FileMode::Single);
    assert_eq!(metadata.files[0].path, vec!["abcdef"]);
}

#[test]
fn test_single_file_md5_carried_through() {
    let buf = b"d4:infod6:lengthi45e6:md5sum32:0123456789abcdef0123456789abcdef4:name9:hello.txtee";
    let metadata = metainfo::parse(buf).unwrap();
    assert_eq!(
        metadata.files[0].md5sum.as_deref(),
        Some("0123456789abcdef0123456789abcdef")
    );
}

#[test]
fn test_missing_info_is_fatal() {
    assert_eq!(metainfo::parse(b"de"), Err(MapError::MissingField("info")));
    assert_eq!(
        metainfo::parse(b"le"),
        Err(MapError::WrongType("metainfo root"))
    );
    assert_eq!(
        metainfo::parse(b"d4:infoi1ee"),
        Err(MapError::WrongType("info"))
    );
}

#[test]
fn test_ambiguous_file_mode() {
    // both `length` and `files`
    let both = b"d4:infod5:filesle6:lengthi1e4:name1:aee";
    assert_eq!(metainfo::parse(both), Err(MapError::AmbiguousFileMode));

    // neither
    let neither = b"d4:infod4:name1:aee";
    assert_eq!(metainfo::parse(neither), Err(MapError::AmbiguousFileMode));
}

#[test]
fn test_wrong_typed_optional_fields_are_ignored() {
    // announce and comment carry integers; still maps fine
    let buf = b"d8:announcei1e7:commentli1ee4:infod6:lengthi5e4:name1:aee";
    let metadata = metainfo::parse(buf).unwrap();
    assert_eq!(metadata.announce, None);
    assert_eq!(metadata.comment, None);
    assert!(metadata.trackers.is_empty());
    assert_eq!(metadata.files[0].length, 5);
}

#[test]
fn test_wrong_typed_path_segment_skips_whole_entry() {
    // second entry's path is ["a", 5, "b.txt"]; the integer segment must not
    // collapse the path to ["a", "b.txt"]
    let buf = b"d4:infod5:filesl\
        d6:lengthi10e4:pathl1:a5:c.txtee\
        d6:lengthi20e4:pathl1:ai5e5:b.txtee\
        e4:name6:samplee\
        e";
    let metadata = metainfo::parse(buf).unwrap();

    assert_eq!(metadata.file_count(), 1);
    assert_eq!(metadata.files[0].path, vec!["a", "c.txt"]);
}

#[test]
fn test_truncated_buffer_yields_unexpected_eof() {
    let fixture = multi_fixture("fixture");

    // cut mid info dictionary
    let cut = &fixture[..fixture.len() - 10];
    assert_eq!(
        metainfo::parse(cut),
        Err(MapError::Decode(DecodeError::UnexpectedEof))
    );

    // cut mid top-level dictionary
    let cut = &fixture[..60];
    assert_eq!(
        metainfo::parse(cut),
        Err(MapError::Decode(DecodeError::UnexpectedEof))
    );
}

#[test]
fn test_negative_length_clamps_to_zero() {
    let buf = b"d4:infod6:lengthi-5e4:name1:aee";
    let metadata = metainfo::parse(buf).unwrap();
    assert_eq!(metadata.files[0].length, 0);
}

#[test]
fn test_pipeline_idempotent_on_identical_bytes() {
    let fixture = multi_fixture("fixture");
    let a = TorrentPreview::from_bytes(&fixture).unwrap();
    let b = TorrentPreview::from_bytes(&fixture).unwrap();

    assert_eq!(a.metadata.info_hash, b.metadata.info_hash);
    assert_eq!(a.magnet_uri, b.magnet_uri);

    // isomorphic trees: same names, sizes, and structure
    fn assert_isomorphic(
        ta: &torview::FileTree,
        na: torview::NodeId,
        tb: &torview::FileTree,
        nb: torview::NodeId,
    ) {
        assert_eq!(ta.node(na).name, tb.node(nb).name);
        assert_eq!(ta.node(na).size, tb.node(nb).size);
        assert_eq!(ta.node(na).is_folder, tb.node(nb).is_folder);

        let ca: Vec<_> = ta.children(na).collect();
        let cb: Vec<_> = tb.children(nb).collect();
        assert_eq!(ca.len(), cb.len());
        for (x, y) in ca.iter().zip(cb.iter()) {
            assert_isomorphic(ta, *x, tb, *y);
        }
    }
    assert_isomorphic(&a.tree, a.tree.root(), &b.tree, b.tree.root());
}

#[test]
fn test_tree_from_fixture_hides_padding() {
    let preview = TorrentPreview::from_bytes(&multi_fixture("fixture")).unwrap();
    let tree = &preview.tree;

    // root owns folder `a` and the padding leaf
    assert_eq!(tree.children(tree.root()).count(), 2);
    let visible: Vec<_> = tree.visible_children(tree.root()).collect();
    assert_eq!(visible.len(), 1);
    assert_eq!(tree.node(visible[0]).name, "a");

    // padding still counted in totals
    assert_eq!(preview.metadata.total_size(), 32);
    assert_eq!(preview.metadata.padding_count(), 1);
}
