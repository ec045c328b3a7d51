// src/lookup.rs
//! Lookup tables: hashed ids → display names, and the closed string
//! enumerations SplatNet uses.
//!
//! A miss is always `ExtractError::UnknownKey`, never a shape error: it means
//! the table predates something in the game, and the fix is new data.

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use crate::config::consts::ABILITY_HASH_LEN;
use crate::config::options::ExtractOptions;
use crate::error::{ExtractError, Result};

/// Bundled hash → ability-name map (`{ "<64 hex>": "Ink Saver (Main)", … }`).
pub const GEAR_HASHES_JSON: &str = include_str!("../assets/gear_hashes.json");

pub const GEAR_TABLE: &str = "gear ability";

#[derive(Clone, Debug)]
pub struct LookupTable {
    name: &'static str,
    entries: HashMap<String, String>,
}

impl LookupTable {
    pub fn new(name: &'static str, entries: HashMap<String, String>) -> Self {
        Self { name, entries }
    }

    /// Parse a `{ hash: name }` object. Keys must be fixed-length hex hashes.
    pub fn from_json_str(name: &'static str, text: &str) -> Result<Self> {
        let entries: HashMap<String, String> =
            serde_json::from_str(text).map_err(|e| ExtractError::LookupData(format!("{name}: {e}")))?;

        if let Some(bad) = entries
            .keys()
            .find(|k| k.len() != ABILITY_HASH_LEN || !k.chars().all(|c| c.is_ascii_hexdigit()))
        {
            return Err(ExtractError::LookupData(format!("{name}: malformed key {bad:?}")));
        }
        Ok(Self::new(name, entries))
    }

    pub fn load(name: &'static str, path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ExtractError::LookupData(format!("{}: {e}", path.display())))?;
        Self::from_json_str(name, &text)
    }

    pub fn lookup(&self, key: &str) -> Result<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ExtractError::unknown(self.name, key))
    }

    pub fn name(&self) -> &'static str { self.name }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

/// All data tables an extraction needs. Built once, then only borrowed.
#[derive(Clone, Debug)]
pub struct Tables {
    pub gear_abilities: LookupTable,
}

impl Tables {
    pub fn bundled() -> Result<Self> {
        Ok(Self { gear_abilities: LookupTable::from_json_str(GEAR_TABLE, GEAR_HASHES_JSON)? })
    }

    pub fn with_gear_abilities(gear_abilities: LookupTable) -> Self {
        Self { gear_abilities }
    }

    /// Operator-supplied table if configured, bundled otherwise.
    pub fn from_options(opts: &ExtractOptions) -> Result<Self> {
        match &opts.gear_hashes {
            Some(path) => Ok(Self::with_gear_abilities(LookupTable::load(GEAR_TABLE, path)?)),
            None => Self::bundled(),
        }
    }
}

macro_rules! upstream_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $table:literal {
            $( $variant:ident => $($up:literal)|+ => $out:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $( #[serde(rename = $out)] $variant, )+
        }

        impl $name {
            pub const TABLE: &'static str = $table;

            pub fn parse(raw: &str) -> Result<Self> {
                match raw {
                    $( $($up)|+ => Ok(Self::$variant), )+
                    other => Err(ExtractError::unknown($table, other)),
                }
            }

            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $out, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

upstream_enum! {
    /// Decoded `VsMode-<n>` suffix.
    ModeKind, "mode" {
        Regular => "1" => "regular";
        AnarchySeries => "2" => "bankara_challenge";
        XBattle => "3" => "xbattle";
        League => "4" => "league";
        Private => "5" => "private";
        AnarchyOpen => "51" => "bankara_open";
        SplatfestOpen => "6" => "splatfest_open";
        SplatfestPro => "7" => "splatfest_challenge";
        SplatfestTricolor => "8" => "splatfest_tricolor";
    }
}

upstream_enum! {
    Rule, "rule" {
        TurfWar => "TURF_WAR" => "turf_war";
        SplatZones => "AREA" => "splat_zones";
        TowerControl => "LOFT" => "tower_control";
        Rainmaker => "GOAL" => "rainmaker";
        ClamBlitz => "CLAM" => "clam_blitz";
        Tricolor => "TRI_COLOR" | "TRICOLOR" => "tricolor";
    }
}

upstream_enum! {
    Judgement, "judgement" {
        Win => "WIN" => "win";
        Lose => "LOSE" => "lose";
        Draw => "DRAW" => "draw";
        ExemptedLose => "EXEMPTED_LOSE" => "exempted_lose";
        DeemedLose => "DEEMED_LOSE" => "deemed_lose";
    }
}

upstream_enum! {
    Knockout, "knockout" {
        Win => "WIN" => "win";
        Lose => "LOSE" => "lose";
        Neither => "NEITHER" => "neither";
    }
}

upstream_enum! {
    /// Splatfest scoring tier. `Normal` is the implicit default and is
    /// never written to a record.
    DragonMultiplier, "dragon match type" {
        Normal => "NORMAL" => "1x";
        Decuple => "DECUPLE" => "10x";
        Dragon => "DRAGON" => "100x";
        DoubleDragon => "DOUBLE_DRAGON" => "333x";
    }
}

upstream_enum! {
    TricolorRole, "tri-color role" {
        Defense => "DEFENSE" => "defense";
        Attack1 => "ATTACK1" => "attack1";
        Attack2 => "ATTACK2" => "attack2";
    }
}

upstream_enum! {
    AwardRank, "award rank" {
        Gold => "GOLD" => "gold";
        Silver => "SILVER" => "silver";
    }
}

upstream_enum! {
    CrownType, "crown type" {
        Dragon => "DRAGON" => "dragon";
        DoubleDragon => "DOUBLE_DRAGON" => "double_dragon";
    }
}

upstream_enum! {
    Species, "species" {
        Inkling => "INKLING" => "inkling";
        Octoling => "OCTOLING" => "octoling";
    }
}

impl DragonMultiplier {
    pub fn multiplier(self) -> u32 {
        match self {
            Self::Normal => 1,
            Self::Decuple => 10,
            Self::Dragon => 100,
            Self::DoubleDragon => 333,
        }
    }

    pub fn is_baseline(self) -> bool {
        self == Self::Normal
    }
}

impl Rule {
    /// Rules scored by inked turf.
    pub fn is_turf(self) -> bool {
        matches!(self, Self::TurfWar | Self::Tricolor)
    }
}

impl ModeKind {
    pub fn is_splatfest(self) -> bool {
        matches!(self, Self::SplatfestOpen | Self::SplatfestPro | Self::SplatfestTricolor)
    }

    pub fn is_anarchy(self) -> bool {
        matches!(self, Self::AnarchySeries | Self::AnarchyOpen)
    }
}

impl Judgement {
    pub fn is_win(self) -> bool {
        self == Self::Win
    }

    pub fn is_loss(self) -> bool {
        matches!(self, Self::Lose | Self::DeemedLose)
    }
}
