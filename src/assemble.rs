// src/assemble.rs
//! Mode detection and battle record assembly.

use serde_json::Value;

use crate::core::document::{opt_str_at, resolve_opt, unwrap_data, PathSpec};
use crate::error::{ExtractError, Result};
use crate::lookup::{ModeKind, Tables};
use crate::paths::{bankara, battle};
use crate::records::{BattleRecord, ModeStats};
use crate::specs::battle::*;
use crate::specs::overview::{extract_overview, SeriesIndex};
use crate::specs::splatfest::extract_splatfest_stats;
use crate::specs::teams::{extract_teams, extract_turf_war_stats};

const MODE_BLOCKS: [(&str, PathSpec); 4] = [
    ("festMatch", battle::FEST_MATCH),
    ("bankaraMatch", battle::BANKARA_MATCH),
    ("leagueMatch", battle::LEAGUE_MATCH),
    ("xMatch", battle::X_MATCH),
];

fn mode_error(reason: impl Into<String>) -> ExtractError {
    ExtractError::ModeDetection { reason: reason.into() }
}

/// The sub-document a mode must carry; `None` for modes that carry none.
fn expected_block(mode: ModeKind) -> Option<&'static str> {
    match mode {
        ModeKind::Regular | ModeKind::Private => None,
        ModeKind::AnarchySeries | ModeKind::AnarchyOpen => Some("bankaraMatch"),
        ModeKind::XBattle => Some("xMatch"),
        ModeKind::League => Some("leagueMatch"),
        ModeKind::SplatfestOpen | ModeKind::SplatfestPro | ModeKind::SplatfestTricolor => Some("festMatch"),
    }
}

/// Which mode a battle was played in.
///
/// At most one of `festMatch`, `bankaraMatch`, `leagueMatch`, `xMatch` is
/// non-null, and it has to agree with the decoded `vsMode` id. Regular and
/// private battles carry none of them.
pub fn detect_mode(battle_doc: &Value) -> Result<ModeKind> {
    let mut present = Vec::new();
    for (name, path) in MODE_BLOCKS {
        if resolve_opt(battle_doc, path)?.is_some() {
            present.push(name);
        }
    }

    let mode = match extract_mode_id(battle_doc) {
        Ok(mode) => mode,
        Err(ExtractError::UnknownKey { key, .. }) => return Err(mode_error(format!("unknown vsMode id {key:?}"))),
        Err(ExtractError::MissingField { path }) => return Err(mode_error(format!("no {path}"))),
        Err(e) => return Err(e),
    };

    match (present.as_slice(), expected_block(mode)) {
        ([], None) => {}
        ([found], Some(expected)) if *found == expected => {}
        ([], Some(expected)) => return Err(mode_error(format!("{mode} battle without {expected}"))),
        ([found], _) => return Err(mode_error(format!("{mode} battle with {found}"))),
        (many, _) => return Err(mode_error(format!("several mode blocks: {}", many.join(", ")))),
    }

    // Series and open share `bankaraMatch`; its own mode string must agree.
    if mode.is_anarchy() {
        let expected = if mode == ModeKind::AnarchySeries { "CHALLENGE" } else { "OPEN" };
        if let Some(found) = opt_str_at(battle_doc, bankara::MODE)? {
            if found != expected {
                return Err(mode_error(format!("{mode} battle with bankaraMatch.mode {found}")));
            }
        }
    }

    Ok(mode)
}

fn extract_mode_stats(battle_doc: &Value, mode: ModeKind, turf: bool) -> Result<ModeStats> {
    Ok(match mode {
        ModeKind::Regular => ModeStats::TurfWar(extract_turf_war_stats(battle_doc)?),
        ModeKind::Private if turf => ModeStats::TurfWar(extract_turf_war_stats(battle_doc)?),
        ModeKind::Private => ModeStats::Private,
        ModeKind::SplatfestOpen | ModeKind::SplatfestPro | ModeKind::SplatfestTricolor => ModeStats::Splatfest {
            fest: extract_splatfest_stats(battle_doc)?,
            turf: if turf { Some(extract_turf_war_stats(battle_doc)?) } else { None },
        },
        ModeKind::AnarchySeries | ModeKind::AnarchyOpen => ModeStats::Anarchy {
            power: extract_anarchy_power(battle_doc)?,
        },
        ModeKind::League => ModeStats::League {
            power: extract_league_power(battle_doc)?,
            challenge_id: extract_league_event(battle_doc)?,
        },
        ModeKind::XBattle => ModeStats::XBattle { x_power: extract_x_power(battle_doc)? },
    })
}

/// One complete battle record, or the first error. Never partial.
pub fn assemble_battle(battle_doc: &Value, tables: &Tables) -> Result<BattleRecord> {
    assemble_with_series(battle_doc, tables, None)
}

fn assemble_with_series(battle_doc: &Value, tables: &Tables, series: Option<&SeriesIndex>) -> Result<BattleRecord> {
    let doc = unwrap_data(battle_doc);
    let mode = detect_mode(doc)?;
    let rule = extract_rule(doc)?;
    let id = extract_battle_id(doc)?;
    tracing::debug!(id = %id, mode = %mode, rule = %rule, "assembling battle");

    Ok(BattleRecord {
        mode,
        rule,
        stage: extract_stage(doc)?,
        result: extract_judgement(doc)?,
        knockout: extract_knockout(doc)?,
        start_time: extract_start_time(doc)?,
        duration: extract_duration(doc)?,
        awards: extract_awards(doc)?,
        teams: extract_teams(doc, tables)?,
        mode_stats: extract_mode_stats(doc, mode, rule.is_turf())?,
        series_metadata: series.and_then(|index| index.get(&id)).cloned(),
        id,
    })
}

/// Assemble a batch and attach overview series metadata by battle id.
/// Battles the overview does not mention get none.
pub fn assemble_history(battles: &[Value], overview: Option<&Value>, tables: &Tables) -> Result<Vec<BattleRecord>> {
    let index = match overview {
        Some(doc) => extract_overview(unwrap_data(doc))?,
        None => SeriesIndex::new(),
    };
    battles
        .iter()
        .map(|b| assemble_with_series(b, tables, Some(&index)))
        .collect()
}

/// Single battle against an already-built index.
pub fn assemble_battle_with(battle_doc: &Value, tables: &Tables, index: &SeriesIndex) -> Result<BattleRecord> {
    assemble_with_series(battle_doc, tables, Some(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::fixtures::*;
    use serde_json::json;

    fn teams() -> (Value, Vec<Value>) {
        let team = || team_doc(vec![player_doc("Ika", Some(combat(3, 1)))], Some(0.5));
        (team(), vec![team()])
    }

    fn battle(mode_id: u32, rule: &str) -> Value {
        let (mine, others) = teams();
        battle_doc(mode_id, rule, mine, others)
    }

    #[test]
    fn regular_battle_without_blocks() {
        assert_eq!(detect_mode(&battle(1, "TURF_WAR")).unwrap(), ModeKind::Regular);
        assert_eq!(detect_mode(&battle(5, "AREA")).unwrap(), ModeKind::Private);
    }

    #[test]
    fn block_must_match_mode_id() {
        let mut doc = battle(3, "AREA");
        doc["vsHistoryDetail"]["xMatch"] = json!({ "lastXPower": 2000.0 });
        assert_eq!(detect_mode(&doc).unwrap(), ModeKind::XBattle);

        // X battle id with no xMatch
        let doc = battle(3, "AREA");
        assert!(matches!(detect_mode(&doc), Err(ExtractError::ModeDetection { .. })));

        // regular id with a league block
        let mut doc = battle(1, "TURF_WAR");
        doc["vsHistoryDetail"]["leagueMatch"] = json!({ "myLeaguePower": null });
        assert!(matches!(detect_mode(&doc), Err(ExtractError::ModeDetection { .. })));
    }

    #[test]
    fn two_blocks_is_ambiguous() {
        let mut doc = battle(2, "AREA");
        doc["vsHistoryDetail"]["bankaraMatch"] = json!({ "mode": "CHALLENGE" });
        doc["vsHistoryDetail"]["xMatch"] = json!({ "lastXPower": null });
        assert!(matches!(detect_mode(&doc), Err(ExtractError::ModeDetection { .. })));
    }

    #[test]
    fn unknown_mode_id_fails_detection() {
        let doc = battle(9, "TURF_WAR");
        assert!(matches!(detect_mode(&doc), Err(ExtractError::ModeDetection { .. })));
    }

    #[test]
    fn anarchy_series_and_open_are_told_apart() {
        let mut doc = battle(51, "GOAL");
        doc["vsHistoryDetail"]["bankaraMatch"] = json!({ "mode": "OPEN", "bankaraPower": null });
        assert_eq!(detect_mode(&doc).unwrap(), ModeKind::AnarchyOpen);

        doc["vsHistoryDetail"]["bankaraMatch"]["mode"] = json!("CHALLENGE");
        assert!(matches!(detect_mode(&doc), Err(ExtractError::ModeDetection { .. })));
    }

    #[test]
    fn regular_battle_assembles_turf_stats() {
        let rec = assemble_battle(&battle(1, "TURF_WAR"), &tables()).unwrap();
        assert_eq!(rec.mode, ModeKind::Regular);
        assert_eq!(rec.teams.len(), 2);
        match rec.mode_stats {
            ModeStats::TurfWar(turf) => assert_eq!(turf.teams.len(), 2),
            other => panic!("unexpected {other:?}"),
        }
        assert!(rec.series_metadata.is_none());
    }

    #[test]
    fn private_non_turf_has_no_turf_stats() {
        let rec = assemble_battle(&battle(5, "CLAM"), &tables()).unwrap();
        assert_eq!(rec.mode_stats, ModeStats::Private);
    }

    #[test]
    fn wrapped_document_assembles() {
        let doc = json!({ "data": battle(1, "TURF_WAR") });
        assert!(assemble_battle(&doc, &tables()).is_ok());
    }

    #[test]
    fn player_error_aborts_whole_battle() {
        let mut doc = battle(1, "TURF_WAR");
        doc["vsHistoryDetail"]["myTeam"]["players"][0]["species"] = json!("SALMONID");
        assert!(matches!(assemble_battle(&doc, &tables()), Err(ExtractError::InvalidValue { .. })));
    }
}
