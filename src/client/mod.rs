// Client module - Wolfy API client
pub mod api;
pub mod payload;
pub mod media;
pub mod account;
pub mod player;
pub mod shop;
pub mod social;
pub mod cosmetics;

pub use api::{ApiRequest, ClientBuilder, WolfyClient, resolve_path};
pub use payload::{ApiResponse, Body, Payload};
pub use media::{SkinFormat, SkinProfile, SkinSize, skin_render_url};
