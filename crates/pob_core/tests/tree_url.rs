use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use pob_core::core_api::CoreErrorCode;
use pob_core::tree_url::{TREE_URL_BASE, decode_tree_url, encode_tree_bytes, encode_tree_url};

#[test]
fn encodes_header_then_big_endian_hashes() {
    let bytes = encode_tree_bytes(3, 0, &[256, 1]).expect("hashes fit in 16 bits");
    assert_eq!(bytes, vec![0, 0, 0, 4, 3, 0, 0, 1, 0, 0, 1]);

    let url = encode_tree_url(3, 0, &[256, 1]).expect("url should encode");
    assert_eq!(url, format!("{TREE_URL_BASE}{}", URL_SAFE.encode(&bytes)));
    assert_eq!(url, format!("{TREE_URL_BASE}AAAABAMAAAEAAAE="));
}

#[test]
fn keeps_source_order_and_url_safe_alphabet() {
    // 0xfbff encodes to characters outside the standard alphabet.
    let url = encode_tree_url(6, 1, &[64511, 2]).expect("url should encode");
    let payload = url.strip_prefix(TREE_URL_BASE).expect("url has base prefix");
    assert!(!payload.contains('+') && !payload.contains('/'));

    let spec = decode_tree_url(&url).expect("url should decode");
    assert_eq!(spec.class_id, 6);
    assert_eq!(spec.ascendancy_class_id, 1);
    assert_eq!(spec.hashes, vec![64511, 2]);
}

#[test]
fn node_ids_beyond_sixteen_bits_are_rejected() {
    let err = encode_tree_url(0, 0, &[65536]).expect_err("65536 does not fit");
    assert_eq!(err.code, CoreErrorCode::Mapping);
    assert!(err.message.contains("65536"));
}

#[test]
fn decode_rejects_truncated_payloads() {
    let err = decode_tree_url("AAAA").expect_err("three bytes is too short");
    assert_eq!(err.code, CoreErrorCode::Mapping);
}
