use pob_core::core_api::CoreErrorCode;
use pob_core::share_code::{decode_share_code, encode_share_code};

#[test]
fn share_code_round_trips_build_xml() {
    let xml = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<PathOfBuilding>\n <Notes/>\n</PathOfBuilding>";
    let code = encode_share_code(xml).expect("encode should succeed");

    assert!(!code.contains('+') && !code.contains('/'));
    assert_eq!(decode_share_code(&code).expect("decode should succeed"), xml);
}

#[test]
fn garbage_is_a_mapping_error() {
    let err = decode_share_code("not a share code!").expect_err("should not decode");
    assert_eq!(err.code, CoreErrorCode::Mapping);

    // Valid base64, but not zlib.
    let err = decode_share_code("AAAA").expect_err("should not inflate");
    assert_eq!(err.code, CoreErrorCode::Mapping);
}
