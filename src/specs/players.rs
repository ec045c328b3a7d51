// src/specs/players.rs

use serde_json::Value;

use crate::config::consts::*;
use crate::core::decode::{decode_identifier, decode_npln_id, decode_prefixed, percent_to_color};
use crate::core::document::*;
use crate::error::{ExtractError, Result};
use crate::lookup::{CrownType, Species, Tables};
use crate::paths::player;
use crate::records::{CombatStats, NamePlateRecord, PlayerRecord};
use crate::specs::gear::extract_gear;

/// `"V2VhcG9uLTQw"` (`Weapon-40`) → `40`.
pub fn extract_weapon_id(player_doc: &Value) -> Result<u32> {
    decode_identifier(str_at(player_doc, player::WEAPON_ID)?, WEAPON_PREFIX)
}

/// Case-insensitive; anything but inkling/octoling is a shape error.
pub fn extract_species(player_doc: &Value) -> Result<Species> {
    let raw = str_at(player_doc, player::SPECIES)?;
    Species::parse(&raw.to_ascii_uppercase())
        .map_err(|_| ExtractError::invalid(path_string(player::SPECIES), format!("unknown species {raw:?}")))
}

/// Always three badge slots. Extra upstream entries are dropped.
pub fn extract_nameplate(player_doc: &Value) -> Result<NamePlateRecord> {
    let mut badges: [Option<String>; BADGE_SLOTS] = Default::default();
    let upstream = opt_array_at(player_doc, player::BADGES)?.unwrap_or_default();
    for (slot, badge) in badges.iter_mut().zip(upstream) {
        if badge.is_null() {
            continue;
        }
        *slot = Some(decode_prefixed(str_at(badge, player::BADGE_ID)?, BADGE_PREFIX)?);
    }

    Ok(NamePlateRecord {
        badges,
        text_color: percent_to_color(resolve(player_doc, player::TEXT_COLOR)?)?,
        background_id: decode_identifier(str_at(player_doc, player::BACKGROUND_ID)?, BACKGROUND_PREFIX)?,
    })
}

/// `festDragonCert`; `"NONE"` or absent → no crown.
pub fn extract_crown_type(player_doc: &Value) -> Result<Option<CrownType>> {
    match opt_str_at(player_doc, player::FEST_DRAGON_CERT)? {
        None | Some("NONE") => Ok(None),
        Some(raw) => CrownType::parse(raw).map(Some),
    }
}

/// First battles have no name id. Numbers are kept as their text.
fn extract_player_number(player_doc: &Value) -> Result<Option<String>> {
    match resolve_opt(player_doc, player::PLAYER_NUMBER)? {
        None => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(_) => Err(ExtractError::TypeMismatch {
            path: path_string(player::PLAYER_NUMBER),
            expected: "string or number",
        }),
    }
}

/// `None` when the player disconnected (no `result`).
fn extract_combat(player_doc: &Value) -> Result<Option<CombatStats>> {
    if resolve_opt(player_doc, player::RESULT)?.is_none() {
        return Ok(None);
    }

    let kills_or_assists = u32_at(player_doc, player::KILL_OR_ASSIST)?;
    let assists = u32_at(player_doc, player::ASSIST)?;
    let kills = kills_or_assists.checked_sub(assists).ok_or_else(|| {
        ExtractError::invalid(
            path_string(player::ASSIST),
            format!("{assists} assists exceed {kills_or_assists} kills+assists"),
        )
    })?;

    Ok(Some(CombatStats {
        kills_or_assists,
        assists,
        kills,
        deaths: u32_at(player_doc, player::DEATH)?,
        specials: u32_at(player_doc, player::SPECIAL)?,
        signals: opt_u32_at(player_doc, player::SIGNAL)?,
        top_500_crown: bool_at(player_doc, player::TOP_500_CROWN)?,
    }))
}

/// `position` is the 0-based index in the team's player list.
pub fn extract_player(player_doc: &Value, position: usize, tables: &Tables) -> Result<PlayerRecord> {
    let scoreboard_position = u32::try_from(position + 1)
        .map_err(|_| ExtractError::invalid("players", format!("position {position} out of range")))?;

    let combat = extract_combat(player_doc)?;
    let name = s!(str_at(player_doc, player::NAME)?);
    tracing::debug!(player = %name, position = scoreboard_position, disconnected = combat.is_none(), "player");

    Ok(PlayerRecord {
        me: bool_at(player_doc, player::IS_MYSELF)?,
        player_number: extract_player_number(player_doc)?,
        npln_id: decode_npln_id(str_at(player_doc, player::ID)?)?,
        splashtag: s!(str_at(player_doc, player::SPLASHTAG)?),
        nameplate: extract_nameplate(player_doc)?,
        weapon_name: s!(str_at(player_doc, player::WEAPON_NAME)?),
        weapon_id: extract_weapon_id(player_doc)?,
        sub_name: s!(str_at(player_doc, player::SUB_NAME)?),
        special_name: s!(str_at(player_doc, player::SPECIAL_NAME)?),
        inked: u64_at(player_doc, player::INKED)?,
        species: extract_species(player_doc)?,
        scoreboard_position,
        gear: extract_gear(player_doc, tables)?,
        disconnected: combat.is_none(),
        combat,
        crown_type: extract_crown_type(player_doc)?,
        name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::fixtures::*;
    use serde_json::json;

    #[test]
    fn connected_player_has_combat_stats() {
        let doc = player_doc("Ika", Some(combat(7, 2)));
        let p = extract_player(&doc, 0, &tables()).unwrap();
        assert!(!p.disconnected);
        let c = p.combat.unwrap();
        assert_eq!((c.kills_or_assists, c.assists, c.kills), (7, 2, 5));
        assert_eq!((c.deaths, c.specials), (3, 2));
        assert_eq!(c.signals, None);
        assert!(!c.top_500_crown);
        assert_eq!(p.weapon_id, 40);
        assert_eq!(p.npln_id, "u-ika");
        assert_eq!(p.player_number.as_deref(), Some("1234"));
    }

    #[test]
    fn disconnected_player_has_no_combat_fields() {
        let doc = player_doc("Tako", None);
        let p = extract_player(&doc, 3, &tables()).unwrap();
        assert!(p.disconnected);
        assert!(p.combat.is_none());

        let v = serde_json::to_value(&p).unwrap();
        for key in ["kills", "assists", "kills_or_assists", "deaths", "specials", "signals", "top_500_crown"] {
            assert!(v.get(key).is_none(), "{key} should be absent");
        }
        assert_eq!(v["disconnected"], true);
    }

    #[test]
    fn scoreboard_position_is_one_based() {
        let doc = player_doc("Ika", Some(combat(1, 0)));
        assert_eq!(extract_player(&doc, 0, &tables()).unwrap().scoreboard_position, 1);
        assert_eq!(extract_player(&doc, 7, &tables()).unwrap().scoreboard_position, 8);
    }

    #[test]
    fn assists_above_kills_is_invalid() {
        let doc = player_doc("Ika", Some(combat(1, 4)));
        assert!(matches!(extract_player(&doc, 0, &tables()), Err(ExtractError::InvalidValue { .. })));
    }

    #[test]
    fn player_number_kept_as_text() {
        let mut doc = player_doc("Ika", Some(combat(1, 0)));
        doc["nameId"] = json!("0042");
        assert_eq!(extract_player_number(&doc).unwrap().as_deref(), Some("0042"));
        doc["nameId"] = json!(42);
        assert_eq!(extract_player_number(&doc).unwrap().as_deref(), Some("42"));
        doc["nameId"] = json!("");
        assert_eq!(extract_player_number(&doc).unwrap(), None);
        doc["nameId"] = Value::Null;
        assert_eq!(extract_player_number(&doc).unwrap(), None);
    }

    #[test]
    fn species_is_case_insensitive_and_strict() {
        let mut doc = player_doc("Ika", None);
        doc["species"] = json!("octoling");
        assert_eq!(extract_species(&doc).unwrap(), Species::Octoling);
        doc["species"] = json!("Salmonid");
        assert!(matches!(extract_species(&doc), Err(ExtractError::InvalidValue { .. })));
    }

    #[test]
    fn nameplate_always_has_three_slots() {
        let mut doc = player_doc("Ika", None);

        doc["nameplate"]["badges"] = json!([]);
        assert_eq!(extract_nameplate(&doc).unwrap().badges, [None, None, None]);

        let b = |n: u32| json!({ "id": encode(BADGE_PREFIX, n) });
        doc["nameplate"]["badges"] = json!([null, b(2), null]);
        assert_eq!(extract_nameplate(&doc).unwrap().badges, [None, Some(s!("2")), None]);

        doc["nameplate"]["badges"] = json!([b(1), b(2), b(3), b(4)]);
        let plate = extract_nameplate(&doc).unwrap();
        assert_eq!(plate.badges, [Some(s!("1")), Some(s!("2")), Some(s!("3"))]);
        assert_eq!(plate.text_color, "ffffffff");
        assert_eq!(plate.background_id, 1);
    }

    #[test]
    fn crown_type_skips_none() {
        let mut doc = player_doc("Ika", None);
        assert_eq!(extract_crown_type(&doc).unwrap(), None);
        doc["festDragonCert"] = json!("DOUBLE_DRAGON");
        assert_eq!(extract_crown_type(&doc).unwrap(), Some(CrownType::DoubleDragon));
    }

    fn encode(prefix: &str, n: u32) -> String {
        crate::core::decode::encode_identifier(prefix, n)
    }
}
