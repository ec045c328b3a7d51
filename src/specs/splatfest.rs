// src/specs/splatfest.rs

use serde_json::Value;

use crate::core::document::*;
use crate::error::Result;
use crate::lookup::DragonMultiplier;
use crate::paths::{fest, team};
use crate::specs::teams::battle_teams;
use crate::records::SplatfestRecord;

fn team_theme(team_doc: &Value) -> Result<String> {
    Ok(s!(str_at(team_doc, team::FEST_TEAM_NAME)?))
}

/// Clout, power, jewel, dragon tier and one theme per team present.
/// A `NORMAL` battle yields no `fest_dragon` at all.
pub fn extract_splatfest_stats(battle_doc: &Value) -> Result<SplatfestRecord> {
    let dragon = DragonMultiplier::parse(str_at(battle_doc, fest::DRAGON_MATCH)?)?;

    let team_themes = battle_teams(battle_doc)?
        .into_iter()
        .map(|(slot, doc)| team_theme(doc).map(|theme| (slot, theme)))
        .collect::<Result<Vec<_>>>()?;

    Ok(SplatfestRecord {
        clout_change: u64_at(battle_doc, fest::FEST_CLOUT)?,
        fest_power: opt_f64_at(battle_doc, fest::FEST_POWER)?,
        fest_dragon: (!dragon.is_baseline()).then_some(dragon),
        jewel: u64_at(battle_doc, fest::JEWEL)?,
        team_themes,
    })
}
