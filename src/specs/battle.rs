// src/specs/battle.rs
//! Battle-level fields and the per-mode power readings.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

use crate::config::consts::*;
use crate::core::decode::{decode_base64, decode_prefixed};
use crate::core::document::*;
use crate::error::{ExtractError, Result};
use crate::lookup::{AwardRank, Judgement, Knockout, ModeKind, Rule};
use crate::paths::{award, bankara, battle, league, xmatch};
use crate::records::Award;

/// Decoded battle id, e.g. `VsHistoryDetail-u-…:RECENT:20230301T123456_…`.
/// Overview nodes use the same encoding, so this is the join key.
pub fn extract_battle_id(battle_doc: &Value) -> Result<String> {
    decode_base64(str_at(battle_doc, battle::ID)?)
}

pub fn extract_mode_id(battle_doc: &Value) -> Result<ModeKind> {
    ModeKind::parse(&decode_prefixed(str_at(battle_doc, battle::MODE_ID)?, VS_MODE_PREFIX)?)
}

pub fn extract_rule(battle_doc: &Value) -> Result<Rule> {
    Rule::parse(str_at(battle_doc, battle::RULE)?)
}

/// Stage id text after `VsStage-`.
pub fn extract_stage(battle_doc: &Value) -> Result<String> {
    decode_prefixed(str_at(battle_doc, battle::STAGE_ID)?, VS_STAGE_PREFIX)
}

pub fn extract_judgement(battle_doc: &Value) -> Result<Judgement> {
    Judgement::parse(str_at(battle_doc, battle::JUDGEMENT)?)
}

pub fn extract_knockout(battle_doc: &Value) -> Result<Option<Knockout>> {
    opt_str_at(battle_doc, battle::KNOCKOUT)?.map(Knockout::parse).transpose()
}

pub fn extract_start_time(battle_doc: &Value) -> Result<DateTime<Utc>> {
    let raw = str_at(battle_doc, battle::PLAYED_TIME)?;
    if let Ok(t) = NaiveDateTime::parse_from_str(raw, PLAYED_TIME_FORMAT) {
        return Ok(t.and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| ExtractError::decode(raw, format!("bad timestamp: {e}")))
}

/// Seconds.
pub fn extract_duration(battle_doc: &Value) -> Result<u32> {
    u32_at(battle_doc, battle::DURATION)
}

pub fn extract_awards(battle_doc: &Value) -> Result<Vec<Award>> {
    opt_array_at(battle_doc, battle::AWARDS)?
        .unwrap_or_default()
        .iter()
        .map(|a| -> Result<Award> {
            Ok(Award {
                name: s!(str_at(a, award::NAME)?),
                rank: AwardRank::parse(str_at(a, award::RANK)?)?,
            })
        })
        .collect()
}

/// `bankaraPower` is a bare number on older responses and `{ power }` on
/// newer ones; both are read. Unrated battles have neither.
pub fn extract_anarchy_power(battle_doc: &Value) -> Result<Option<f64>> {
    match resolve_opt(battle_doc, bankara::POWER)? {
        None => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(obj @ Value::Object(_)) => opt_f64_at(obj, bankara::POWER_VALUE),
        Some(_) => Err(ExtractError::TypeMismatch {
            path: path_string(bankara::POWER),
            expected: "number or object",
        }),
    }
}

pub fn extract_league_power(battle_doc: &Value) -> Result<Option<f64>> {
    opt_f64_at(battle_doc, league::POWER)
}

/// Challenge event id text after `LeagueMatchEvent-`.
pub fn extract_league_event(battle_doc: &Value) -> Result<String> {
    decode_prefixed(str_at(battle_doc, league::EVENT_ID)?, LEAGUE_EVENT_PREFIX)
}

pub fn extract_x_power(battle_doc: &Value) -> Result<Option<f64>> {
    opt_f64_at(battle_doc, xmatch::LAST_X_POWER)
}
