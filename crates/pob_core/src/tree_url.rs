//! Passive tree links understood by the official tree viewer.
//!
//! Layout: `[0, 0, 0, 4, class, ascendancy, 0]` followed by every allocated
//! node id as a big-endian `u16`, URL-safe base64 with padding.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;

use crate::core_api::CoreError;

pub const TREE_URL_BASE: &str = "https://www.pathofexile.com/fullscreen-passive-skill-tree/";
pub const TREE_FORMAT_VERSION: u8 = 4;

const HEADER_LEN: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeSpec {
    pub class_id: u8,
    pub ascendancy_class_id: u8,
    pub hashes: Vec<u16>,
}

pub fn encode_tree_bytes(
    class_id: u32,
    ascendancy_class_id: u32,
    hashes: &[u32],
) -> Result<Vec<u8>, CoreError> {
    let class_id = u8::try_from(class_id)
        .map_err(|_| CoreError::mapping(format!("class id {class_id} does not fit in a byte")))?;
    let ascendancy_class_id = u8::try_from(ascendancy_class_id).map_err(|_| {
        CoreError::mapping(format!(
            "ascendancy class id {ascendancy_class_id} does not fit in a byte"
        ))
    })?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + hashes.len() * 2);
    bytes.extend_from_slice(&[0, 0, 0, TREE_FORMAT_VERSION, class_id, ascendancy_class_id, 0]);

    for &hash in hashes {
        let node = u16::try_from(hash).map_err(|_| {
            CoreError::mapping(format!("passive node id {hash} exceeds 16 bits"))
        })?;
        bytes.extend_from_slice(&node.to_be_bytes());
    }

    Ok(bytes)
}

pub fn encode_tree_url(
    class_id: u32,
    ascendancy_class_id: u32,
    hashes: &[u32],
) -> Result<String, CoreError> {
    let bytes = encode_tree_bytes(class_id, ascendancy_class_id, hashes)?;
    Ok(format!("{TREE_URL_BASE}{}", URL_SAFE.encode(bytes)))
}

/// Accepts either a full tree URL or just its encoded payload.
pub fn decode_tree_url(url: &str) -> Result<TreeSpec, CoreError> {
    let payload = url.trim();
    let payload = payload.strip_prefix(TREE_URL_BASE).unwrap_or(payload);

    let bytes = URL_SAFE
        .decode(payload)
        .map_err(|e| CoreError::mapping(format!("tree url payload is not base64: {e}")))?;

    if bytes.len() < HEADER_LEN || (bytes.len() - HEADER_LEN) % 2 != 0 {
        return Err(CoreError::mapping(format!(
            "tree url payload has invalid length {}",
            bytes.len()
        )));
    }
    if bytes[..4] != [0, 0, 0, TREE_FORMAT_VERSION] {
        return Err(CoreError::mapping(format!(
            "unsupported tree url header {:?}",
            &bytes[..4]
        )));
    }

    let hashes = bytes[HEADER_LEN..]
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();

    Ok(TreeSpec {
        class_id: bytes[4],
        ascendancy_class_id: bytes[5],
        hashes,
    })
}
