use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Generic `{"message": "..."}` body returned by most POST actions
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MessageResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AutocompleteUser {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaderboardEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub xp: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub slot_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub skin_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rank: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub elo: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub game_played: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub is_friend: bool,
}

/// Body returned after equipping new parts on a skin slot
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct UpdateSkinSlotResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub slots: Vec<crate::models::Slot>,
    #[serde(deserialize_with = "null_as_default")]
    pub skin: crate::models::Skin,
    #[serde(rename = "slotId", deserialize_with = "null_as_default")]
    pub slot_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub coins: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub moons: i64,
}
