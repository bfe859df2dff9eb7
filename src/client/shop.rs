use crate::client::api::{ApiRequest, WolfyClient};
use crate::error::Result;
use crate::models::*;

impl WolfyClient {
    /// Claim the free daily item.
    ///
    /// The server acknowledges with a plain-text body, which is returned as is.
    pub async fn collect_daily_item(&self) -> Result<String> {
        let response = self.execute(ApiRequest::post("shop/collect/free")).await?;
        Ok(response.text())
    }

    /// The featured drop with its packs and their items
    pub async fn current_drop(&self) -> Result<CurrentDrop> {
        self.send_json(ApiRequest::get("drop")).await
    }

    /// Rotating daily offers for coins and moons
    pub async fn daily_offers(&self) -> Result<Vec<DailyOfferSet>> {
        self.send_json(ApiRequest::get("shop/dailyOffers")).await
    }

    pub async fn subscription_offers(&self) -> Result<Vec<SubscriptionOffer>> {
        self.send_json(ApiRequest::get("shop/subscriptions/offers")).await
    }

    pub async fn moon_offers(&self) -> Result<Vec<MoonOffer>> {
        self.send_json(ApiRequest::get("shop/offers")).await
    }
}
