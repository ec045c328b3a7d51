// src/specs/teams.rs

use serde_json::Value;

use crate::core::decode::percent_to_color;
use crate::core::document::*;
use crate::error::{ExtractError, Result};
use crate::lookup::{Judgement, Tables, TricolorRole};
use crate::paths::{battle, team};
use crate::records::{SplatfestTeam, TeamRecord, TeamResult, TeamSlot, TeamTurfStats, TurfWarRecord};
use crate::specs::players::extract_player;

/// `myTeam` first, then `otherTeams` in order, each paired with its slot.
pub fn battle_teams(battle_doc: &Value) -> Result<Vec<(TeamSlot, &Value)>> {
    let mut teams = vec![resolve(battle_doc, battle::MY_TEAM)?];
    teams.extend(array_at(battle_doc, battle::OTHER_TEAMS)?);

    teams
        .into_iter()
        .enumerate()
        .map(|(i, doc)| {
            TeamSlot::from_index(i).map(|slot| (slot, doc)).ok_or_else(|| {
                ExtractError::invalid(path_string(battle::OTHER_TEAMS), format!("{} teams, at most 3", i + 1))
            })
        })
        .collect()
}

/// Percent is best-effort: a battle that ended early reports no paint ratio,
/// and the team is still recorded with its ink total.
pub fn extract_turf_war_team(team_doc: &Value, slot: TeamSlot) -> Result<TeamTurfStats> {
    let percent = opt_f64_at(team_doc, team::PAINT_RATIO)?.map(|ratio| ratio * 100.0);
    if percent.is_none() {
        tracing::debug!(team = slot.as_str(), "no paint ratio, omitting percent");
    }

    let ink = array_at(team_doc, team::PLAYERS)?
        .iter()
        .map(|p| u64_at(p, team::PLAYER_PAINT))
        .sum::<Result<u64>>()?;

    Ok(TeamTurfStats {
        slot,
        percent,
        ink,
        role: opt_str_at(team_doc, team::TRI_COLOR_ROLE)?.map(String::from),
    })
}

pub fn extract_turf_war_stats(battle_doc: &Value) -> Result<TurfWarRecord> {
    let teams = battle_teams(battle_doc)?
        .into_iter()
        .map(|(slot, doc)| extract_turf_war_team(doc, slot))
        .collect::<Result<Vec<_>>>()?;
    Ok(TurfWarRecord { teams })
}

fn extract_team_result(team_doc: &Value) -> Result<Option<TeamResult>> {
    if resolve_opt(team_doc, team::RESULT)?.is_none() {
        return Ok(None);
    }
    Ok(Some(TeamResult {
        paint_ratio: opt_f64_at(team_doc, team::PAINT_RATIO)?,
        score: opt_u32_at(team_doc, team::SCORE)?,
        noroshi: opt_u32_at(team_doc, team::NOROSHI)?,
        judgement: Judgement::parse(str_at(team_doc, team::JUDGEMENT)?)?,
    }))
}

fn extract_splatfest_team(team_doc: &Value) -> Result<Option<SplatfestTeam>> {
    let Some(team_name) = opt_str_at(team_doc, team::FEST_TEAM_NAME)? else {
        return Ok(None);
    };
    Ok(Some(SplatfestTeam {
        team_name: s!(team_name),
        synergy_bonus: opt_f64_at(team_doc, team::FEST_UNIFORM_BONUS_RATE)?,
        synergy_name: opt_str_at(team_doc, team::FEST_UNIFORM_NAME)?.map(String::from),
        tricolor_role: opt_str_at(team_doc, team::TRI_COLOR_ROLE)?.map(TricolorRole::parse).transpose()?,
    }))
}

/// Full team: scoreboard, colour, result and splatfest details.
pub fn extract_team(team_doc: &Value, slot: TeamSlot, tables: &Tables) -> Result<TeamRecord> {
    let players = array_at(team_doc, team::PLAYERS)?
        .iter()
        .enumerate()
        .map(|(i, p)| extract_player(p, i, tables))
        .collect::<Result<Vec<_>>>()?;

    Ok(TeamRecord {
        slot,
        color: percent_to_color(resolve(team_doc, team::COLOR)?)?,
        order: u32_at(team_doc, team::ORDER)?,
        result: extract_team_result(team_doc)?,
        splatfest: extract_splatfest_team(team_doc)?,
        players,
    })
}

pub fn extract_teams(battle_doc: &Value, tables: &Tables) -> Result<Vec<TeamRecord>> {
    battle_teams(battle_doc)?
        .into_iter()
        .map(|(slot, doc)| extract_team(doc, slot, tables))
        .collect()
}
