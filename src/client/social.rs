use reqwest::header::{ACCEPT, HeaderValue, REFERER};

use crate::client::api::{ApiRequest, WolfyClient, encode_segment, query_escape};
use crate::client::payload::Payload;
use crate::error::Result;
use crate::models::*;

const SOCIAL_ACCEPT: &str = "application/json, text/plain, */*";

impl WolfyClient {
    /// The social endpoints expect the headers the play page sends
    fn social(&self, request: ApiRequest) -> ApiRequest {
        request
            .header(ACCEPT, HeaderValue::from_static(SOCIAL_ACCEPT))
            .header(REFERER, self.social_referer().clone())
    }

    /// Ids of the authenticated user's friends.
    ///
    /// Sent with the default headers; only add, remove and search use the
    /// play-page ones.
    pub async fn friend_list(&self) -> Result<Vec<String>> {
        self.send_json(ApiRequest::get("social/friends")).await
    }

    pub async fn add_friend(&self, user_id: &str) -> Result<Payload<MessageResponse>> {
        let path = format!("social/add/{}", encode_segment(user_id)?);
        self.send(self.social(ApiRequest::post(path))).await
    }

    pub async fn remove_friend(&self, user_id: &str) -> Result<Payload<MessageResponse>> {
        let path = format!("social/remove/{}", encode_segment(user_id)?);
        self.send(self.social(ApiRequest::post(path))).await
    }

    /// Leaderboard restricted to the user's friends
    pub async fn friend_leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        self.send_json(ApiRequest::get("leaderboard")).await
    }

    /// Username autocomplete. The term is escaped query-style, so a space
    /// goes out as `+`.
    pub async fn search_users(&self, search_term: &str) -> Result<Vec<AutocompleteUser>> {
        let term = query_escape(search_term)?;
        let path = format!("social/autocomplete/{term}");
        self.send_json(self.social(ApiRequest::get(path))).await
    }
}
