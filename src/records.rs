// src/records.rs
//! Output records. Built once per extraction, never mutated afterwards.
//!
//! Records derive `Serialize` so callers can hand them to whatever format
//! they store; nothing in this crate writes them anywhere itself. Optional
//! upstream data stays `Option` and is skipped when absent, so "not reported"
//! and "zero" never collapse into each other.

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::config::consts::BADGE_SLOTS;
use crate::lookup::{AwardRank, CrownType, DragonMultiplier, Judgement, Knockout, ModeKind, Rule, Species, TricolorRole};

/// Position of a team in the battle document: `myTeam`, then `otherTeams`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSlot {
    Our,
    Their,
    Third,
}

impl TeamSlot {
    pub const ALL: [TeamSlot; 3] = [TeamSlot::Our, TeamSlot::Their, TeamSlot::Third];

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TeamSlot::Our => "our",
            TeamSlot::Their => "their",
            TeamSlot::Third => "third",
        }
    }

    /// `our` + `ink` → `our_team_ink`
    pub fn key(self, field: &str) -> String {
        join!(self.as_str(), "_team_", field)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct GearItemRecord {
    pub name: String,
    pub brand: String,
    pub primary_ability: String,
    pub additional_abilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct GearRecord {
    pub headgear: GearItemRecord,
    pub clothing: GearItemRecord,
    pub shoes: GearItemRecord,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NamePlateRecord {
    /// Always three slots; `None` is an empty slot.
    pub badges: [Option<String>; BADGE_SLOTS],
    pub text_color: String,
    pub background_id: u32,
}

/// The seven fields only a connected player has.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CombatStats {
    pub kills_or_assists: u32,
    pub assists: u32,
    pub kills: u32,
    pub deaths: u32,
    pub specials: u32,
    /// `None` in modes that do not count signals.
    pub signals: Option<u32>,
    pub top_500_crown: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PlayerRecord {
    pub name: String,
    pub me: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_number: Option<String>,
    pub npln_id: String,
    pub splashtag: String,
    pub nameplate: NamePlateRecord,
    pub weapon_name: String,
    pub weapon_id: u32,
    pub sub_name: String,
    pub special_name: String,
    pub inked: u64,
    pub species: Species,
    pub scoreboard_position: u32,
    pub gear: GearRecord,
    pub disconnected: bool,
    #[serde(flatten)]
    pub combat: Option<CombatStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crown_type: Option<CrownType>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamTurfStats {
    pub slot: TeamSlot,
    /// 0–100; `None` when the battle did not report coverage.
    pub percent: Option<f64>,
    pub ink: u64,
    /// Copied verbatim from upstream.
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TurfWarRecord {
    pub teams: Vec<TeamTurfStats>,
}

impl TurfWarRecord {
    pub fn team(&self, slot: TeamSlot) -> Option<&TeamTurfStats> {
        self.teams.iter().find(|t| t.slot == slot)
    }
}

/// Flat keys: `our_team_percent`, `our_team_ink`, `our_team_role`, …
impl Serialize for TurfWarRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for t in &self.teams {
            if let Some(p) = t.percent {
                map.serialize_entry(&t.slot.key("percent"), &p)?;
            }
            map.serialize_entry(&t.slot.key("ink"), &t.ink)?;
            if let Some(role) = &t.role {
                map.serialize_entry(&t.slot.key("role"), role)?;
            }
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SplatfestRecord {
    pub clout_change: u64,
    pub fest_power: Option<f64>,
    /// Never `Some(Normal)`.
    pub fest_dragon: Option<DragonMultiplier>,
    pub jewel: u64,
    pub team_themes: Vec<(TeamSlot, String)>,
}

impl SplatfestRecord {
    pub fn theme(&self, slot: TeamSlot) -> Option<&str> {
        self.team_themes.iter().find(|(s, _)| *s == slot).map(|(_, name)| name.as_str())
    }
}

/// Flat keys: `clout_change`, `fest_power`, `fest_dragon`, `jewel`,
/// `our_team_theme`, …
impl Serialize for SplatfestRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("clout_change", &self.clout_change)?;
        if let Some(power) = self.fest_power {
            map.serialize_entry("fest_power", &power)?;
        }
        if let Some(dragon) = self.fest_dragon {
            map.serialize_entry("fest_dragon", &dragon)?;
        }
        map.serialize_entry("jewel", &self.jewel)?;
        for (slot, theme) in &self.team_themes {
            map.serialize_entry(&slot.key("theme"), theme)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TeamResult {
    pub paint_ratio: Option<f64>,
    pub score: Option<u32>,
    pub noroshi: Option<u32>,
    pub judgement: Judgement,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SplatfestTeam {
    pub team_name: String,
    pub synergy_bonus: Option<f64>,
    pub synergy_name: Option<String>,
    pub tricolor_role: Option<TricolorRole>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TeamRecord {
    pub slot: TeamSlot,
    pub color: String,
    pub order: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<TeamResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splatfest: Option<SplatfestTeam>,
    pub players: Vec<PlayerRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Award {
    pub name: String,
    pub rank: AwardRank,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModeStats {
    TurfWar(TurfWarRecord),
    Splatfest {
        fest: SplatfestRecord,
        #[serde(skip_serializing_if = "Option::is_none")]
        turf: Option<TurfWarRecord>,
    },
    Anarchy { power: Option<f64> },
    League { power: Option<f64>, challenge_id: String },
    XBattle { x_power: Option<f64> },
    Private,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AnarchySeriesMetadata {
    pub rank_before: String,
    pub rank_after: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_before_s_plus: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_after_s_plus: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_exp_change: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_rank_up: Option<bool>,
    pub series_win_count: u32,
    pub series_lose_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AnarchyOpenMetadata {
    pub rank_before: String,
    pub rank_after: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_before_s_plus: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_after_s_plus: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_exp_change: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct XMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_power_after: Option<f64>,
    pub series_win_count: u32,
    pub series_lose_count: u32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeriesMetadata {
    AnarchySeries(AnarchySeriesMetadata),
    AnarchyOpen(AnarchyOpenMetadata),
    XBattle(XMetadata),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct BattleRecord {
    pub id: String,
    pub mode: ModeKind,
    pub rule: Rule,
    pub stage: String,
    pub result: Judgement,
    pub knockout: Option<Knockout>,
    pub start_time: DateTime<Utc>,
    /// Seconds.
    pub duration: u32,
    pub awards: Vec<Award>,
    pub teams: Vec<TeamRecord>,
    pub mode_stats: ModeStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_metadata: Option<SeriesMetadata>,
}

impl BattleRecord {
    pub fn team(&self, slot: TeamSlot) -> Option<&TeamRecord> {
        self.teams.iter().find(|t| t.slot == slot)
    }

    pub fn me(&self) -> Option<&PlayerRecord> {
        self.teams.iter().flat_map(|t| t.players.iter()).find(|p| p.me)
    }
}
