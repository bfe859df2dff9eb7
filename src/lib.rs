// Wolfy.net API client library
// Typed, session-authenticated bindings for the wolfy.net web API

pub mod client;
pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use models::{
    account::{Skin, SkinPart, Slot, UserAccountInfo},
    player::PlayerInfoResponse,
    responses::*,
};

pub use client::{ApiRequest, ClientBuilder, Payload, SkinFormat, SkinProfile, SkinSize, WolfyClient};
pub use config::{WolfyConfig, load_session_token};
pub use error::{Error, Result};

// Constants
pub const API_BASE_URL: &str = "https://wolfy.net/api/";
pub const MEDIA_BASE_URL: &str = "https://wolfy.net/api/skin/render/";
pub const SESSION_COOKIE: &str = "wolfy";
pub const SESSION_TOKEN_FILE: &str = "WOLFY_TOKEN";
pub const CONFIG_FILE: &str = "wolfy.toml";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:142.0) Gecko/20100101 Firefox/142.0";
pub const DEFAULT_REFERER: &str = "https://wolfy.net/fr/shop";
pub const SOCIAL_REFERER: &str = "https://wolfy.net/fr/play";
