use crate::client::api::{ApiRequest, WolfyClient};
use crate::error::Result;
use crate::models::SkinElement;

impl WolfyClient {
    /// Master catalog of every cosmetic item in the game
    pub async fn skin_catalog(&self) -> Result<Vec<SkinElement>> {
        self.send_json(ApiRequest::get("skin/elements")).await
    }
}
