// Shared fixtures for the mock-server tests
#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wolfy_client::{ClientBuilder, WolfyClient};

pub const TOKEN: &str = "test-token";
pub const USER_AGENT: &str = "wolfy-tests/1.0";

/// Builder pointed at the mock server
pub fn builder(server: &MockServer) -> ClientBuilder {
    ClientBuilder::new()
        .base_url(format!("{}/api/", server.uri()))
        .media_url(format!("{}/api/skin/render/", server.uri()))
        .user_agent(USER_AGENT)
}

pub async fn mount_probe(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/leaderboard/player/self"))
        .respond_with(ResponseTemplate::new(200).set_body_json(player_info_json("u-self", "selfie")))
        .mount(server)
        .await;
}

/// Mock server with a passing session probe, and a client connected to it
pub async fn setup() -> (MockServer, WolfyClient) {
    let server = MockServer::start().await;
    mount_probe(&server).await;
    let client = builder(&server)
        .connect(TOKEN)
        .await
        .expect("probe should pass");
    (server, client)
}

pub fn part(id: &str, color: i32) -> Value {
    json!({ "id": id, "color": color })
}

pub fn skin_json() -> Value {
    json!({
        "eyes": part("001", 1),
        "face": part("002", 0),
        "hair": part("010", 4),
        "nose": part("001", 0),
        "top": part("002", 5),
        "bottom": part("003", 2),
        "shoes": part("001", 1),
        "tombstone": part("000", 0),
        "glasses": part("000", 0)
    })
}

fn game_json(id: &str) -> Value {
    json!({
        "id": id,
        "instanceId": "inst-1",
        "status": 3,
        "playerCount": 12,
        "settings": { "slots": 12, "mayor": true, "roles": { "wolf": 3, "seer": 1 }, "balancing": 1 },
        "private": false,
        "voice": false,
        "serious": true,
        "platform": "web",
        "lang": "fr",
        "createdAt": "2024-03-01T20:00:00.000Z",
        "updatedAt": "2024-03-01T20:40:00.000Z",
        "nextId": null,
        "adminId": "u-admin"
    })
}

pub fn player_info_json(id: &str, username: &str) -> Value {
    json!({
        "user": {
            "profilePicture": "https://wolfy.net/pp/1.png",
            "id": id,
            "username": username,
            "rank": 12,
            "xp": 34000,
            "slotId": "slot-1",
            "skinVersion": "v3",
            "elo": 1500,
            "createdAt": "2023-01-01T00:00:00.000Z",
            "monthsSubscribed": 2,
            "gamePlayed": 321,
            "ranking": { "value": 42, "percent": 0.87 }
        },
        "isFriend": false,
        "statistics": {
            "laurels": { "gold": 3, "silver": 1 },
            "individual": { "moonpass": 1, "winCount": 150, "killCount": 40, "wordAvg": 12.5 },
            "roles": [
                { "id": "seer", "winRate": 0.61, "advancedStats": { "inspections": 40.0 } }
            ],
            "game": {
                "innocent": {
                    "id": "innocent",
                    "winRate": 0.55,
                    "advancedStats": { "inactivity": 0.01, "daysAlive": 2.5, "mayor": 0.1, "goodVote": 0.7 }
                },
                "threat": {
                    "id": "threat",
                    "winRate": 0.45,
                    "advancedStats": { "inactivity": 0.02, "daysAlive": 2.1, "mayor": 0.05, "innocentKilled": 1.3 }
                }
            }
        },
        "history": [
            {
                "role": "wolf",
                "winner": true,
                "deathReason": null,
                "wordCount": 120,
                "killCount": 2,
                "xp": 150,
                "elo": 12,
                "lovers": false,
                "infected": false,
                "userId": id,
                "gameId": "g-1",
                "createdAt": "2024-03-01T20:40:00.000Z",
                "updatedAt": "2024-03-01T20:40:00.000Z",
                "game": game_json("g-1")
            },
            {
                "role": "villager",
                "winner": false,
                "deathReason": { "type": "vote", "dayNumber": 2, "votersIds": ["u-2", "u-3"] },
                "wordCount": 80,
                "killCount": 0,
                "xp": 60,
                "elo": -8,
                "lovers": false,
                "infected": false,
                "userId": id,
                "gameId": "g-2",
                "createdAt": "2024-03-02T20:40:00.000Z",
                "updatedAt": "2024-03-02T20:40:00.000Z",
                "game": game_json("g-2")
            }
        ]
    })
}

pub fn slots_json() -> Value {
    json!([
        {
            "unlocked": true,
            "id": "slot-1",
            "offerId": "offer-1",
            "skinVersion": "v3",
            "createdAt": "2023-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-01T00:00:00.000Z",
            "userId": "u-self",
            "skin": skin_json(),
            "equiped": true
        },
        {
            "unlocked": false,
            "id": "slot-2",
            "price": 1000,
            "currency": "coins",
            "alpha": false
        }
    ])
}

pub fn account_json() -> Value {
    json!({
        "id": "u-self",
        "username": "selfie",
        "email": "selfie@example.com",
        "twitterId": null,
        "facebookId": null,
        "googleId": "g-123",
        "discordId": null,
        "appleId": null,
        "profilePicture": "https://wolfy.net/pp/1.png",
        "xp": 34000,
        "elo": 1500,
        "coins": 2500,
        "moons": 40,
        "rank": 12,
        "skinVersion": "v3",
        "skinIndex": 0,
        "anonymousSkinIndex": 0,
        "slotId": "slot-1",
        "anonymousSlotId": null,
        "allowFriendRequests": true,
        "allowGroupRequests": true,
        "allowNewsletter": false,
        "nickname": null,
        "confirmed": true,
        "discountEndAt": null,
        "twoFactorSecret": false,
        "lang": "fr",
        "ban_end": null,
        "reason_ban": null,
        "needRename": false,
        "banned": false,
        "friendsVisibility": "public",
        "alphaLegacy": false,
        "password": true,
        "token": { "id": "tok-1", "twoFactor": null },
        "slots": slots_json(),
        "skin": skin_json(),
        "features": ["chat", "voice"],
        "subscription": null
    })
}

pub fn skin_element_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Witch hat",
        "type": "hair",
        "access": "shop",
        "rarity": "rare",
        "level": 3,
        "price": 500,
        "colors": [["#ffffff", "#000000"]],
        "new": true,
        "disposition": { "y": 1.5, "scale": 0.8 },
        "currency": "coins",
        "smallPet": null,
        "skinLayers": [{ "id": 7 }],
        "bought": false
    })
}

fn offer_json(category: &str, with_pack: bool) -> Value {
    if with_pack {
        json!({
            "category": category,
            "moons": 200,
            "coins": 0,
            "pack": {
                "price": 200,
                "currency": "moons",
                "id": 9,
                "rarity": "epic",
                "SkinElements": [skin_element_json("e-10"), skin_element_json("e-11")]
            },
            "skin": null
        })
    } else {
        json!({
            "category": category,
            "moons": 0,
            "coins": 100,
            "pack": null,
            "skin": skin_element_json("e-1"),
            "collected": false
        })
    }
}

pub fn daily_offers_json() -> Value {
    json!([{
        "id": 77,
        "end": "2024-03-02T00:00:00.000Z",
        "elements": {
            "moonsUltraHigh": offer_json("moonsUltraHigh", false),
            "collectionHigh": offer_json("collectionHigh", false),
            "moonsLow": offer_json("moonsLow", false),
            "coinsLow": offer_json("coinsLow", false),
            "coinsHigh": offer_json("coinsHigh", false),
            "moonsHigh": offer_json("moonsHigh", false),
            "moonsMedium": offer_json("moonsMedium", false),
            "premium": offer_json("premium", true),
            "collectionLow": offer_json("collectionLow", false),
            "free": offer_json("free", false)
        }
    }])
}

pub fn current_drop_json() -> Value {
    json!({
        "id": "drop-1",
        "name": "Halloween",
        "start": "2024-10-20T00:00:00.000Z",
        "end": "2024-11-03T00:00:00.000Z",
        "createdAt": "2024-10-01T00:00:00.000Z",
        "updatedAt": "2024-10-01T00:00:00.000Z",
        "packs": [{
            "id": 1,
            "name": "Spooky pack",
            "colors": [{ "primary": "#ff8800", "index": 2 }],
            "price": 300,
            "rarity": "epic",
            "currency": "moons",
            "SkinElements": [{
                "id": "e-2",
                "name": "Pumpkin",
                "type": "top",
                "access": "drop",
                "rarity": "epic",
                "level": 0,
                "currency": "moons",
                "price": 0,
                "colors": [],
                "new": true,
                "disposition": null,
                "smallPet": false,
                "createdAt": "2024-10-01T00:00:00.000Z",
                "updatedAt": "2024-10-01T00:00:00.000Z",
                "PackSkinElement": {
                    "createdAt": "2024-10-01T00:00:00.000Z",
                    "updatedAt": "2024-10-01T00:00:00.000Z",
                    "skinPackId": 1,
                    "skinElementId": "e-2"
                }
            }],
            "previewElements": [{
                "id": "e-2",
                "name": "Pumpkin",
                "type": "top",
                "access": "drop",
                "rarity": "epic",
                "level": 0,
                "currency": "moons",
                "price": 0,
                "new": true,
                "disposition": { "y": 0.0, "scale": 1.0, "x": 0.5 },
                "smallPet": null,
                "createdAt": "2024-10-01T00:00:00.000Z",
                "updatedAt": "2024-10-01T00:00:00.000Z"
            }],
            "collected": false
        }]
    })
}
