// Wolfy client - checks the stored session and prints an account summary

use tracing_subscriber::EnvFilter;
use wolfy_client::{ClientBuilder, WolfyConfig, load_session_token};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| wolfy_client::CONFIG_FILE.to_string());
    let config = WolfyConfig::load_or_create(&config_path)?;
    config.validate()?;

    let token = load_session_token(&config.api.token_file)?;

    let client = match ClientBuilder::from_config(config).connect(&token).await {
        Ok(client) => {
            println!("✅ Successfully authenticated!");
            client
        }
        Err(e) => {
            eprintln!("❌ Authentication failed: {}", e);
            return Err(e.into());
        }
    };

    let account = client.account_details().await?;
    println!("📊 Account Info:");
    println!("  Username: {}", account.username);
    println!("  Rank: {} (elo {})", account.rank, account.elo);
    println!("  Coins: {}", account.coins);
    println!("  Moons: {}", account.moons);
    if let Some(slot) = account.equipped_slot() {
        println!("  Equipped slot: {}", slot.id);
    }

    let friends = client.friend_list().await?;
    println!("  Friends: {}", friends.len());

    Ok(())
}
