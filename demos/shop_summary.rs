use wolfy_client::{WolfyClient, load_session_token};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = load_session_token(wolfy_client::SESSION_TOKEN_FILE)?;
    let client = WolfyClient::connect(&token).await?;

    println!("🛒 CHECKING TODAY'S SHOP...");

    match client.daily_offers().await {
        Ok(days) => {
            for day in &days {
                println!("📅 Offer set {} (ends {})", day.id, day.end);
                let free = &day.elements.free;
                if let Some(skin) = &free.skin {
                    let status = if free.collected { "collected" } else { "available" };
                    println!("  🎁 Free: {} [{}] - {}", skin.name, skin.rarity, status);
                }
                if let Some(pack) = &day.elements.premium.pack {
                    println!("  💎 Premium pack: {} items for {} {}", pack.skin_elements.len(), pack.price, pack.currency);
                }
            }
        }
        Err(e) => {
            println!("❌ Failed to get daily offers: {}", e);
        }
    }

    let drop = client.current_drop().await?;
    println!("🌙 Current drop: {} ({} → {})", drop.name, drop.start, drop.end);
    for pack in &drop.packs {
        let owned = if pack.collected { " ✅" } else { "" };
        println!("  📦 {} - {} {}{}", pack.name, pack.price, pack.currency, owned);
    }

    for offer in client.moon_offers().await? {
        println!("  🌕 {} moons (+{} bonus) for {:.2} {}", offer.moons, offer.bonus, offer.price, offer.currency);
    }

    Ok(())
}
