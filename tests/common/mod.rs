// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::HashMap;

use base64::Engine;
use serde_json::{json, Value};

use zipcaster::config::consts::*;
use zipcaster::core::decode::encode_identifier;
use zipcaster::lookup::{LookupTable, Tables, GEAR_TABLE};

pub fn hash(c: char) -> String {
    std::iter::repeat(c).take(ABILITY_HASH_LEN).collect()
}

pub fn ability_url(c: char) -> String {
    format!("https://api.lp1.av5ja.srv.nintendo.net/resources/prod/v2/skill_img/{}_0.png", hash(c))
}

pub fn tables() -> Tables {
    let entries: HashMap<String, String> = [
        (hash('1'), "Ink Saver (Main)".to_string()),
        (hash('2'), "Ink Resistance Up".to_string()),
        (hash('3'), "Quick Respawn".to_string()),
        (hash('4'), "Stealth Jump".to_string()),
    ]
    .into_iter()
    .collect();
    Tables::with_gear_abilities(LookupTable::new(GEAR_TABLE, entries))
}

pub fn b64(text: &str) -> String {
    base64::engine::general_purpose::STANDARD.encode(text)
}

pub fn battle_key(n: u32) -> String {
    format!("VsHistoryDetail-u-owner:RECENT:2023030{n}T120000_2b6f0f4c-aaaa-bbbb-cccc-00000000000{n}")
}

fn gear(name: &str, primary: char, subs: &[char]) -> Value {
    let subs: Vec<Value> = subs.iter().map(|c| json!({ "image": { "url": ability_url(*c) } })).collect();
    json!({
        "name": name,
        "brand": { "name": "Firefin" },
        "primaryGearPower": { "image": { "url": ability_url(primary) } },
        "additionalGearPowers": subs,
    })
}

/// A connected player. `kill` counts kills and assists together, as upstream does.
pub fn player(name: &str, paint: u64, kill: u64, assist: u64) -> Value {
    json!({
        "id": b64(&format!("VsPlayer-u-owner:RECENT:20230301T120000_x:u-{}", name.to_lowercase())),
        "name": name,
        "isMyself": name == "Me",
        "byname": "Sneaky Calamari",
        "nameId": "5678",
        "nameplate": {
            "badges": [
                { "id": encode_identifier(BADGE_PREFIX, 1100001) },
                { "id": encode_identifier(BADGE_PREFIX, 5000011) },
                null,
            ],
            "background": {
                "textColor": { "r": 0.0, "g": 0.0, "b": 0.0, "a": 1.0 },
                "id": encode_identifier(BACKGROUND_PREFIX, 9),
            },
        },
        "weapon": {
            "id": encode_identifier(WEAPON_PREFIX, 1010),
            "name": "Splat Roller",
            "subWeapon": { "name": "Curling Bomb" },
            "specialWeapon": { "name": "Big Bubbler" },
        },
        "paint": paint,
        "species": "OCTOLING",
        "headGear": gear("Headband", '1', &['2', '3']),
        "clothingGear": gear("Tee", '2', &['4']),
        "shoesGear": gear("Sneakers", '3', &[]),
        "result": { "kill": kill, "assist": assist, "death": 4, "special": 1, "noroshiTry": null },
        "crown": false,
        "festDragonCert": "NONE",
    })
}

pub fn disconnected(name: &str) -> Value {
    let mut p = player(name, 0, 0, 0);
    p["result"] = Value::Null;
    p
}

pub fn team(players: Vec<Value>, paint_ratio: Option<f64>, judgement: &str) -> Value {
    json!({
        "color": { "r": 0.8, "g": 0.2, "b": 0.6, "a": 1.0 },
        "order": 1,
        "judgement": judgement,
        "result": { "paintRatio": paint_ratio, "score": null, "noroshi": null },
        "tricolorRole": null,
        "festTeamName": null,
        "festUniformName": null,
        "festUniformBonusRate": null,
        "players": players,
    })
}

pub fn two_teams() -> (Value, Vec<Value>) {
    let ours = team(
        vec![player("Me", 1200, 8, 2), player("Ally", 900, 5, 1)],
        Some(0.52),
        "WIN",
    );
    let theirs = team(
        vec![player("Foe", 1100, 6, 0), disconnected("Gone")],
        Some(0.41),
        "LOSE",
    );
    (ours, vec![theirs])
}

pub fn battle(n: u32, mode_id: u32, rule: &str, my_team: Value, other_teams: Vec<Value>) -> Value {
    json!({
        "data": {
            "vsHistoryDetail": {
                "id": b64(&battle_key(n)),
                "vsMode": { "id": encode_identifier(VS_MODE_PREFIX, mode_id) },
                "vsRule": { "rule": rule },
                "vsStage": { "id": encode_identifier(VS_STAGE_PREFIX, 3), "name": "Hagglefish Market" },
                "judgement": "WIN",
                "knockout": null,
                "playedTime": "2023-03-01T12:00:00Z",
                "duration": 300,
                "awards": [
                    { "name": "#1 Splatter", "rank": "GOLD" },
                    { "name": "#2 Turf Inker", "rank": "SILVER" },
                ],
                "myTeam": my_team,
                "otherTeams": other_teams,
                "festMatch": null,
                "bankaraMatch": null,
                "leagueMatch": null,
                "xMatch": null,
            }
        }
    })
}

/// Mutable view of the `vsHistoryDetail` object, whichever envelope it has.
pub fn detail(doc: &mut Value) -> &mut Value {
    &mut doc["data"]["vsHistoryDetail"]
}

pub fn overview_node(n: u32, rank: &str, judgement: &str) -> Value {
    json!({
        "id": b64(&battle_key(n)),
        "udemae": rank,
        "judgement": judgement,
        "bankaraMatch": null,
    })
}
