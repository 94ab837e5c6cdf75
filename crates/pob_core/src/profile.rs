//! Typed views of the `character-window` JSON responses.
//!
//! Only the fields the export reads are modelled; everything else in the
//! payload is ignored.

use std::fmt;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::core_api::{CoreError, CoreErrorCode};

pub const GEM_FRAME_TYPE: u32 = 4;
pub const ABYSS_PROPERTY: &str = "Abyss";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub league: String,
    pub class_id: u32,
    pub ascendancy_class: u32,
    pub level: u32,
    #[serde(rename = "class")]
    pub class_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsResponse {
    pub character: Character,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassivesResponse {
    #[serde(default)]
    pub hashes: Vec<u32>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default, deserialize_with = "map_or_list")]
    pub jewel_data: IndexMap<String, JewelData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub frame_type: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub type_line: String,
    #[serde(default)]
    pub inventory_id: String,
    #[serde(default)]
    pub requirements: Vec<ItemProperty>,
    #[serde(default)]
    pub properties: Vec<ItemProperty>,
    #[serde(default)]
    pub sockets: Vec<Socket>,
    #[serde(default)]
    pub implicit_mods: Vec<String>,
    #[serde(default)]
    pub explicit_mods: Vec<String>,
    #[serde(default)]
    pub crafted_mods: Vec<String>,
    #[serde(default)]
    pub socketed_items: Vec<Item>,
    #[serde(default)]
    pub x: Option<u32>,
}

impl Item {
    pub fn requirement(&self, name: &str) -> Option<&ItemProperty> {
        self.requirements.iter().find(|r| r.name == name)
    }

    pub fn property(&self, name: &str) -> Option<&ItemProperty> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn is_gem(&self) -> bool {
        self.frame_type == GEM_FRAME_TYPE
    }

    /// Abyss jewels are recognised by their first property, not by name.
    pub fn is_abyss_jewel(&self) -> bool {
        self.properties
            .first()
            .is_some_and(|p| p.name == ABYSS_PROPERTY)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemProperty {
    pub name: String,
    #[serde(default)]
    pub values: Vec<PropertyValue>,
}

impl ItemProperty {
    pub fn first_value(&self) -> Option<&str> {
        self.values.first().map(|v| v.0.as_str())
    }
}

/// `[display text, display style]` pair as sent by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyValue(pub String, pub i64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socket {
    pub group: u32,
    #[serde(rename = "sColour")]
    pub colour: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JewelData {
    #[serde(default)]
    pub subgraph: Option<Subgraph>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subgraph {
    #[serde(default, deserialize_with = "map_or_list")]
    pub nodes: IndexMap<String, SubgraphNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubgraphNode {
    #[serde(default)]
    pub skill: Option<LooseId>,
    #[serde(default, rename = "isMastery")]
    pub is_mastery: bool,
}

/// Identifier the API sends either as a JSON string or a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseId {
    Number(u64),
    Text(String),
}

impl fmt::Display for LooseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MapOrList<T> {
    Map(IndexMap<String, T>),
    List(Vec<T>),
}

// PHP-backed endpoints serialise an empty object as `[]`.
fn map_or_list<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match MapOrList::deserialize(deserializer)? {
        MapOrList::Map(map) => map,
        MapOrList::List(list) => list
            .into_iter()
            .enumerate()
            .map(|(index, value)| (index.to_string(), value))
            .collect(),
    })
}

/// Returns the API error carried by `body`, if it is an error payload.
pub fn api_error(body: &str) -> Option<ApiError> {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .ok()
        .map(|envelope| envelope.error)
}

pub fn decode_items(body: &str) -> Result<ItemsResponse, CoreError> {
    decode_response(body, "items")
}

pub fn decode_passives(body: &str) -> Result<PassivesResponse, CoreError> {
    decode_response(body, "passive skills")
}

fn decode_response<T: DeserializeOwned>(body: &str, what: &str) -> Result<T, CoreError> {
    if let Some(error) = api_error(body) {
        return Err(CoreError::new(
            CoreErrorCode::Fetch,
            format!(
                "{what} request returned API error {}: {}",
                error.code, error.message
            ),
        ));
    }

    serde_json::from_str(body)
        .map_err(|e| CoreError::mapping(format!("malformed {what} response: {e}")))
}
