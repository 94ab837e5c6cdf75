//! Path of Building share codes: URL-safe base64 over zlib-compressed XML.

use std::io::{Read, Write};

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;

use crate::core_api::{CoreError, CoreErrorCode};

// Codes pasted from the web often lose their trailing `=`.
const SHARE_CODE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub fn encode_share_code(xml: &str) -> Result<String, CoreError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(xml.as_bytes())
        .and_then(|_| encoder.finish())
        .map(|compressed| SHARE_CODE.encode(compressed))
        .map_err(|e| {
            CoreError::new(
                CoreErrorCode::Serialization,
                format!("failed to compress build document: {e}"),
            )
        })
}

pub fn decode_share_code(code: &str) -> Result<String, CoreError> {
    let compressed = SHARE_CODE
        .decode(code.trim())
        .map_err(|e| CoreError::mapping(format!("share code is not base64: {e}")))?;

    let mut xml = String::new();
    ZlibDecoder::new(compressed.as_slice())
        .read_to_string(&mut xml)
        .map_err(|e| CoreError::mapping(format!("share code does not inflate to UTF-8 XML: {e}")))?;
    Ok(xml)
}
