use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::null_as_default;
use crate::models::{Disposition, SkinElement};

// Current drop (`drop`)

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentDrop {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub packs: Vec<DropPack>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct DropPack {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    // color keys vary per pack
    #[serde(deserialize_with = "null_as_default")]
    pub colors: Vec<Map<String, Value>>,
    #[serde(deserialize_with = "null_as_default")]
    pub price: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub rarity: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(rename = "SkinElements", deserialize_with = "null_as_default")]
    pub skin_elements: Vec<DropSkinElement>,
    #[serde(rename = "previewElements", deserialize_with = "null_as_default")]
    pub preview_elements: Vec<PreviewSkinElement>,
    #[serde(deserialize_with = "null_as_default")]
    pub collected: bool,
}

/// Catalog item as listed inside a drop pack
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DropSkinElement {
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
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub colors: Vec<Vec<String>>,
    #[serde(deserialize_with = "null_as_default")]
    pub new: bool,
    pub disposition: Option<Disposition>,
    #[serde(deserialize_with = "null_as_default")]
    pub small_pet: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(rename = "PackSkinElement", deserialize_with = "null_as_default")]
    pub pack_skin_element: PackSkinElementLink,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PackSkinElementLink {
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub skin_pack_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub skin_element_id: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PreviewSkinElement {
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
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub new: bool,
    pub disposition: Option<Disposition>,
    pub small_pet: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

// Daily offers (`shop/dailyOffers`)

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct DailyOfferSet {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub end: String,
    #[serde(deserialize_with = "null_as_default")]
    pub elements: OfferElements,
}

/// The fixed offer categories of one day
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OfferElements {
    #[serde(deserialize_with = "null_as_default")]
    pub moons_ultra_high: OfferElement,
    #[serde(deserialize_with = "null_as_default")]
    pub collection_high: OfferElement,
    #[serde(deserialize_with = "null_as_default")]
    pub moons_low: OfferElement,
    #[serde(deserialize_with = "null_as_default")]
    pub coins_low: OfferElement,
    #[serde(deserialize_with = "null_as_default")]
    pub coins_high: OfferElement,
    #[serde(deserialize_with = "null_as_default")]
    pub moons_high: OfferElement,
    #[serde(deserialize_with = "null_as_default")]
    pub moons_medium: OfferElement,
    #[serde(deserialize_with = "null_as_default")]
    pub premium: OfferElement,
    #[serde(deserialize_with = "null_as_default")]
    pub collection_low: OfferElement,
    #[serde(deserialize_with = "null_as_default")]
    pub free: OfferElement,
}

/// A single offer; holds either a skin or a pack
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct OfferElement {
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub moons: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub coins: i64,
    pub pack: Option<OfferPack>,
    pub skin: Option<SkinElement>,
    #[serde(deserialize_with = "null_as_default")]
    pub collected: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct OfferPack {
    #[serde(deserialize_with = "null_as_default")]
    pub price: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub rarity: String,
    #[serde(rename = "SkinElements", deserialize_with = "null_as_default")]
    pub skin_elements: Vec<SkinElement>,
}

// Real-money offers

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SubscriptionOffer {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub stripe: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub interval: String,
    #[serde(deserialize_with = "null_as_default")]
    pub interval_count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_label: Option<i32>,
    #[serde(deserialize_with = "null_as_default")]
    pub badge: String,
    #[serde(deserialize_with = "null_as_default")]
    pub most_popular: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MoonOffer {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub moons: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub bonus: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub tier: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub discount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub img: String,
    #[serde(deserialize_with = "null_as_default")]
    pub stripe: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_new_player_discount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_player_discount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}
