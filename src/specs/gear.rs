// src/specs/gear.rs

use serde_json::Value;

use crate::config::consts::MAX_SECONDARY_ABILITIES;
use crate::core::decode::extract_ability_hash;
use crate::core::document::{array_at, path_string, resolve, str_at};
use crate::error::{ExtractError, Result};
use crate::lookup::Tables;
use crate::paths::{gear, player};
use crate::records::{GearItemRecord, GearRecord};

/// Ability image URL → ability display name.
fn ability_name(url: &str, tables: &Tables) -> Result<String> {
    let hash = extract_ability_hash(url)?;
    Ok(s!(tables.gear_abilities.lookup(&hash)?))
}

/// One gear piece. Secondary abilities keep their upstream order.
pub fn extract_gear_item(gear_doc: &Value, tables: &Tables) -> Result<GearItemRecord> {
    let subs = array_at(gear_doc, gear::ADDITIONAL_ABILITIES)?;
    if subs.len() > MAX_SECONDARY_ABILITIES {
        return Err(ExtractError::invalid(
            path_string(gear::ADDITIONAL_ABILITIES),
            format!("{} secondary abilities, at most {MAX_SECONDARY_ABILITIES}", subs.len()),
        ));
    }

    let additional_abilities = subs
        .iter()
        .map(|sub| ability_name(str_at(sub, gear::ADDITIONAL_ABILITY_URL)?, tables))
        .collect::<Result<Vec<_>>>()?;

    Ok(GearItemRecord {
        name: s!(str_at(gear_doc, gear::NAME)?),
        brand: s!(str_at(gear_doc, gear::BRAND)?),
        primary_ability: ability_name(str_at(gear_doc, gear::PRIMARY_ABILITY)?, tables)?,
        additional_abilities,
    })
}

pub fn extract_gear(player_doc: &Value, tables: &Tables) -> Result<GearRecord> {
    Ok(GearRecord {
        headgear: extract_gear_item(resolve(player_doc, player::HEADGEAR)?, tables)?,
        clothing: extract_gear_item(resolve(player_doc, player::CLOTHING)?, tables)?,
        shoes: extract_gear_item(resolve(player_doc, player::SHOES)?, tables)?,
    })
}
