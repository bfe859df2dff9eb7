use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::null_as_default;

/// One component of a skin, e.g. `"top": {"id": "002", "color": 5}`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SkinPart {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub color: i32,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Skin {
    #[serde(deserialize_with = "null_as_default")]
    pub eyes: SkinPart,
    #[serde(deserialize_with = "null_as_default")]
    pub face: SkinPart,
    #[serde(deserialize_with = "null_as_default")]
    pub hair: SkinPart,
    #[serde(deserialize_with = "null_as_default")]
    pub nose: SkinPart,
    #[serde(deserialize_with = "null_as_default")]
    pub top: SkinPart,
    #[serde(deserialize_with = "null_as_default")]
    pub bottom: SkinPart,
    #[serde(deserialize_with = "null_as_default")]
    pub shoes: SkinPart,
    #[serde(deserialize_with = "null_as_default")]
    pub tombstone: SkinPart,
    #[serde(deserialize_with = "null_as_default")]
    pub glasses: SkinPart,
}

/// A skin slot. Unlocked slots carry the skin, locked ones carry a price.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Slot {
    #[serde(deserialize_with = "null_as_default")]
    pub unlocked: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin: Option<Skin>,
    // sic, the API spells it this way
    #[serde(deserialize_with = "null_as_default")]
    pub equiped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub alpha: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct TokenInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "twoFactor")]
    pub two_factor: Value,
}

/// Private account details returned by `user`.
///
/// Fields the API sends as `null` for most accounts and whose shape is
/// otherwise undocumented are kept as raw JSON values.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UserAccountInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    pub twitter_id: Value,
    pub facebook_id: Value,
    pub google_id: Value,
    pub discord_id: Value,
    pub apple_id: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub profile_picture: String,
    #[serde(deserialize_with = "null_as_default")]
    pub xp: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub elo: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub coins: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub moons: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub rank: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub skin_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub skin_index: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub anonymous_skin_index: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub slot_id: String,
    pub anonymous_slot_id: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub allow_friend_requests: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub allow_group_requests: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub allow_newsletter: bool,
    pub nickname: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub confirmed: bool,
    pub discount_end_at: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub two_factor_secret: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub lang: String,
    #[serde(rename = "ban_end")]
    pub ban_end: Value,
    #[serde(rename = "reason_ban")]
    pub reason_ban: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub need_rename: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub banned: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub friends_visibility: String,
    #[serde(deserialize_with = "null_as_default")]
    pub alpha_legacy: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub password: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub token: TokenInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub slots: Vec<Slot>,
    #[serde(deserialize_with = "null_as_default")]
    pub skin: Skin,
    #[serde(deserialize_with = "null_as_default")]
    pub features: Vec<String>,
    pub subscription: Value,
}

impl UserAccountInfo {
    /// The slot currently equipped, if any
    pub fn equipped_slot(&self) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.equiped)
    }
}
