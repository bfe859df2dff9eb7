// Models module - request payloads and API response schemas
//
// Response structs decode leniently: a field that is missing or `null`
// takes its zero value, so a sparse profile never fails a whole call.

use serde::{Deserialize, Deserializer};

pub mod requests;
pub mod responses;
pub mod player;
pub mod account;
pub mod cosmetics;
pub mod shop;

// Re-export all models for easier imports
pub use requests::*;
pub use responses::*;
pub use player::*;
pub use account::*;
pub use cosmetics::*;
pub use shop::*;

/// Decode an explicit `null` as the type's default
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
