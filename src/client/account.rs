use std::collections::HashMap;

use crate::client::api::{ApiRequest, WolfyClient, encode_segment};
use crate::client::payload::Payload;
use crate::error::Result;
use crate::models::*;

// Logout, settings changes and slot updates may be acknowledged with JSON,
// plain text or an empty body, so they return the tagged payload.

impl WolfyClient {
    /// Invalidate the current session on the server
    pub async fn logout(&self) -> Result<Payload<MessageResponse>> {
        self.send(ApiRequest::post("auth/logout").empty_form()).await
    }

    /// Public profile of the authenticated user
    pub async fn self_info(&self) -> Result<PlayerInfoResponse> {
        self.send_json(ApiRequest::get("leaderboard/player/self")).await
    }

    /// Private account details: email, currencies, slots and settings
    pub async fn account_details(&self) -> Result<UserAccountInfo> {
        self.send_json(ApiRequest::get("user")).await
    }

    pub async fn change_username(&self, new_username: &str) -> Result<Payload<MessageResponse>> {
        let payload = ChangeUsernameRequest {
            username: new_username.to_string(),
        };
        self.send(ApiRequest::post("settings/username").form(&payload)?).await
    }

    pub async fn change_email(&self, new_email: &str) -> Result<Payload<MessageResponse>> {
        let payload = ChangeEmailRequest {
            email: new_email.to_string(),
        };
        self.send(ApiRequest::post("settings/email").form(&payload)?).await
    }

    pub async fn change_password(&self, old_password: &str, new_password: &str) -> Result<Payload<MessageResponse>> {
        let payload = ChangePasswordRequest {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.send(ApiRequest::post("settings/password").form(&payload)?).await
    }

    /// Equip parts on a skin slot, e.g. `"top" => SkinPart { id: "002", color: 5 }`.
    /// Parts not in `updates` are left as they are.
    pub async fn update_skin_slot(
        &self,
        slot_id: &str,
        updates: &HashMap<String, SkinPart>,
    ) -> Result<Payload<UpdateSkinSlotResponse>> {
        let path = format!("slot/{}", encode_segment(slot_id)?);
        self.send(ApiRequest::put(path).json(updates)?).await
    }
}
