use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::null_as_default;

/// Position and scale of a cosmetic on the skin canvas
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Disposition {
    #[serde(deserialize_with = "null_as_default")]
    pub y: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub scale: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SkinLayer {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
}

/// One cosmetic item from the master catalog (`skin/elements`)
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SkinElement {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub element_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub access: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rarity: String,
    #[serde(deserialize_with = "null_as_default")]
    pub level: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub price: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub colors: Vec<Vec<String>>,
    #[serde(deserialize_with = "null_as_default")]
    pub new: bool,
    pub disposition: Option<Disposition>,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    pub small_pet: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub skin_layers: Vec<SkinLayer>,
    #[serde(deserialize_with = "null_as_default")]
    pub bought: bool,
}
