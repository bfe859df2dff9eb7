use crate::client::api::{ApiRequest, WolfyClient, encode_segment};
use crate::error::{Error, Result};
use crate::models::PlayerInfoResponse;
use tracing::debug;

impl WolfyClient {
    /// Public profile of a player, looked up by username or id
    pub async fn player_info(&self, username_or_id: &str) -> Result<PlayerInfoResponse> {
        let path = format!("leaderboard/player/{}", encode_segment(username_or_id)?);
        self.send_json(ApiRequest::get(path)).await
    }

    /// Resolve an exact username to its user id
    pub async fn user_id(&self, username: &str) -> Result<String> {
        match self.player_info(username).await {
            Ok(info) => {
                debug!("Resolved {} to {}", username, info.user.id);
                Ok(info.user.id)
            }
            Err(e) => Err(Error::UserLookup {
                username: username.to_string(),
                source: Box::new(e),
            }),
        }
    }
}
