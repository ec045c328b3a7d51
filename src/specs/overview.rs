// src/specs/overview.rs
//! Series metadata from the `*BattleHistoriesQuery` overview documents.
//!
//! History groups list their battles newest first. Group-level win/lose
//! counts describe the state *after* the newest battle, so counts for older
//! battles are reconstructed by walking the list and undoing each result.

use std::collections::HashMap;

use serde_json::Value;

use crate::core::decode::{decode_base64, parse_rank};
use crate::core::document::*;
use crate::error::Result;
use crate::lookup::Judgement;
use crate::paths::{group, node, overview};
use crate::records::{AnarchyOpenMetadata, AnarchySeriesMetadata, SeriesMetadata, XMetadata};

/// Decoded battle id → metadata for that battle.
pub type SeriesIndex = HashMap<String, SeriesMetadata>;

struct Counts {
    wins: u32,
    losses: u32,
}

impl Counts {
    fn read(group_doc: &Value, wins: PathSpec, losses: PathSpec) -> Result<Self> {
        Ok(Self { wins: u32_at(group_doc, wins)?, losses: u32_at(group_doc, losses)? })
    }

    /// Undo `node`'s result so the counts describe the battle before it.
    fn step_back(&mut self, node_doc: &Value) -> Result<()> {
        let judgement = Judgement::parse(str_at(node_doc, node::JUDGEMENT)?)?;
        if judgement.is_win() {
            self.wins = self.wins.saturating_sub(1);
        } else if judgement.is_loss() {
            self.losses = self.losses.saturating_sub(1);
        }
        Ok(())
    }
}

fn node_id(node_doc: &Value) -> Result<String> {
    decode_base64(str_at(node_doc, node::ID)?)
}

fn node_rank(node_doc: &Value) -> Result<(String, Option<u8>)> {
    parse_rank(str_at(node_doc, node::RANK)?)
}

fn anarchy_series(group_doc: &Value, out: &mut SeriesIndex) -> Result<()> {
    // Only finished series report a rank after.
    let rank_after = opt_str_at(group_doc, group::A_RANK_AFTER)?.map(parse_rank).transpose()?;
    let rank_points = opt_i64_at(group_doc, group::A_EARNED_RANK_POINTS)?;
    let is_rank_up = opt_bool_at(group_doc, group::A_IS_RANK_UP)?;
    let mut counts = Counts::read(group_doc, group::A_WIN_COUNT, group::A_LOSE_COUNT)?;

    for (idx, node_doc) in array_at(group_doc, group::HISTORY_DETAILS)?.iter().enumerate() {
        let (rank_before, rank_before_s_plus) = node_rank(node_doc)?;

        let meta = match (idx, &rank_after) {
            (0, Some((after, after_s_plus))) => AnarchySeriesMetadata {
                rank_before,
                rank_after: after.clone(),
                rank_before_s_plus,
                rank_after_s_plus: *after_s_plus,
                rank_exp_change: rank_points,
                is_rank_up,
                series_win_count: counts.wins,
                series_lose_count: counts.losses,
            },
            _ => AnarchySeriesMetadata {
                rank_after: rank_before.clone(),
                rank_before,
                rank_before_s_plus,
                rank_after_s_plus: rank_before_s_plus,
                rank_exp_change: None,
                is_rank_up: None,
                series_win_count: counts.wins,
                series_lose_count: counts.losses,
            },
        };

        out.insert(node_id(node_doc)?, SeriesMetadata::AnarchySeries(meta));
        counts.step_back(node_doc)?;
    }
    Ok(())
}

fn anarchy_open(group_doc: &Value, out: &mut SeriesIndex) -> Result<()> {
    for node_doc in array_at(group_doc, group::HISTORY_DETAILS)? {
        let (rank, s_plus) = node_rank(node_doc)?;
        let meta = AnarchyOpenMetadata {
            rank_before: rank.clone(),
            rank_after: rank,
            rank_before_s_plus: s_plus,
            rank_after_s_plus: s_plus,
            rank_exp_change: opt_i64_at(node_doc, node::OPEN_EARNED_RANK_POINTS)?,
        };
        out.insert(node_id(node_doc)?, SeriesMetadata::AnarchyOpen(meta));
    }
    Ok(())
}

/// Every battle in `bankaraBattleHistories`. Groups with a
/// `bankaraMatchChallenge` are series, the rest are open battles.
pub fn extract_anarchy_overview(overview_doc: &Value) -> Result<SeriesIndex> {
    let mut out = SeriesIndex::new();
    for group_doc in opt_array_at(overview_doc, overview::A_HISTORY_GROUPS)?.unwrap_or_default() {
        if resolve_opt(group_doc, group::A_CHALLENGE)?.is_some() {
            anarchy_series(group_doc, &mut out)?;
        } else {
            anarchy_open(group_doc, &mut out)?;
        }
    }
    tracing::debug!(battles = out.len(), "anarchy overview");
    Ok(out)
}

/// Every battle in `xBattleHistories`. `x_power_after` is only known for the
/// newest battle of each group.
pub fn extract_xbattle_overview(overview_doc: &Value) -> Result<SeriesIndex> {
    let mut out = SeriesIndex::new();
    for group_doc in opt_array_at(overview_doc, overview::X_HISTORY_GROUPS)?.unwrap_or_default() {
        if resolve_opt(group_doc, group::X_CHALLENGE)?.is_none() {
            tracing::debug!("x history group without challenge data, skipped");
            continue;
        }
        let x_power_after = opt_f64_at(group_doc, group::X_POWER_AFTER)?;
        let mut counts = Counts::read(group_doc, group::X_WIN_COUNT, group::X_LOSE_COUNT)?;

        for (idx, node_doc) in array_at(group_doc, group::HISTORY_DETAILS)?.iter().enumerate() {
            let meta = XMetadata {
                x_power_after: if idx == 0 { x_power_after } else { None },
                series_win_count: counts.wins,
                series_lose_count: counts.losses,
            };
            out.insert(node_id(node_doc)?, SeriesMetadata::XBattle(meta));
            counts.step_back(node_doc)?;
        }
    }
    tracing::debug!(battles = out.len(), "x battle overview");
    Ok(out)
}

/// Both kinds of overview; whichever histories the document carries.
pub fn extract_overview(overview_doc: &Value) -> Result<SeriesIndex> {
    let mut out = extract_anarchy_overview(overview_doc)?;
    out.extend(extract_xbattle_overview(overview_doc)?);
    Ok(out)
}
