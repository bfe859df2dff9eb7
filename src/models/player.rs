use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::null_as_default;

/// Public profile returned by `leaderboard/player/{id}`
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct PlayerInfoResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub user: PlayerUser,
    #[serde(rename = "isFriend", deserialize_with = "null_as_default")]
    pub is_friend: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub statistics: PlayerStatistics,
    #[serde(deserialize_with = "null_as_default")]
    pub history: Vec<GameHistoryEntry>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerUser {
    #[serde(deserialize_with = "null_as_default")]
    pub profile_picture: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rank: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub xp: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub slot_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub skin_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub elo: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub months_subscribed: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub game_played: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub ranking: PlayerRanking,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct PlayerRanking {
    #[serde(deserialize_with = "null_as_default")]
    pub value: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub percent: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct PlayerStatistics {
    #[serde(deserialize_with = "null_as_default")]
    pub laurels: HashMap<String, i32>,
    #[serde(deserialize_with = "null_as_default")]
    pub individual: PlayerIndividualStats,
    #[serde(deserialize_with = "null_as_default")]
    pub roles: Vec<RoleStats>,
    #[serde(deserialize_with = "null_as_default")]
    pub game: OverallGameStats,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct PlayerIndividualStats {
    #[serde(deserialize_with = "null_as_default")]
    pub moonpass: i32,
    #[serde(rename = "winCount", deserialize_with = "null_as_default")]
    pub win_count: i32,
    #[serde(rename = "killCount", deserialize_with = "null_as_default")]
    pub kill_count: i32,
    #[serde(rename = "wordAvg", deserialize_with = "null_as_default")]
    pub word_avg: f64,
}

/// Win rate for one role, with role-specific counters in `advanced_stats`
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct RoleStats {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "winRate", deserialize_with = "null_as_default")]
    pub win_rate: f64,
    #[serde(rename = "advancedStats", deserialize_with = "null_as_default")]
    pub advanced_stats: HashMap<String, f64>,
}

/// Stats split by alignment
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct OverallGameStats {
    #[serde(deserialize_with = "null_as_default")]
    pub innocent: GameTypeStats,
    #[serde(deserialize_with = "null_as_default")]
    pub threat: GameTypeStats,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct GameTypeStats {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "winRate", deserialize_with = "null_as_default")]
    pub win_rate: f64,
    #[serde(rename = "advancedStats", deserialize_with = "null_as_default")]
    pub advanced_stats: GameTypeAdvancedStats,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GameTypeAdvancedStats {
    #[serde(deserialize_with = "null_as_default")]
    pub inactivity: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub days_alive: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub mayor: f64,
    // innocent side only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good_vote: Option<f64>,
    // threat side only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub innocent_killed: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GameHistoryEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub winner: bool,
    pub death_reason: Option<DeathReason>,
    #[serde(deserialize_with = "null_as_default")]
    pub word_count: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub kill_count: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub xp: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub elo: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub lovers: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub infected: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub game_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub game: Game,
}

/// How a player died; which ids are present depends on `death_type`
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct DeathReason {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub death_type: String,
    #[serde(rename = "dayNumber", deserialize_with = "null_as_default")]
    pub day_number: i32,
    #[serde(
        rename = "votersIds",
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub voter_ids: Vec<String>,
    #[serde(rename = "hunterId", skip_serializing_if = "Option::is_none")]
    pub hunter_id: Option<String>,
    #[serde(rename = "mayorId", skip_serializing_if = "Option::is_none")]
    pub mayor_id: Option<String>,
    #[serde(rename = "loverId", skip_serializing_if = "Option::is_none")]
    pub lover_id: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Game {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub instance_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub player_count: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub settings: GameSettings,
    #[serde(deserialize_with = "null_as_default")]
    pub private: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub voice: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub serious: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub platform: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lang: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    pub next_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub admin_id: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct GameSettings {
    #[serde(deserialize_with = "null_as_default")]
    pub slots: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub mayor: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub roles: HashMap<String, i32>,
    #[serde(deserialize_with = "null_as_default")]
    pub balancing: i32,
}
