// src/config/consts.rs

// Identifier prefixes (inside the base64)
pub const WEAPON_PREFIX: &str = "Weapon-";
pub const BADGE_PREFIX: &str = "Badge-";
pub const BACKGROUND_PREFIX: &str = "NameplateBackground-";
pub const VS_MODE_PREFIX: &str = "VsMode-";
pub const VS_STAGE_PREFIX: &str = "VsStage-";
pub const LEAGUE_EVENT_PREFIX: &str = "LeagueMatchEvent-";

// Shapes
pub const ABILITY_HASH_LEN: usize = 64;
pub const BADGE_SLOTS: usize = 3;
pub const MAX_SECONDARY_ABILITIES: usize = 3;
pub const MAX_S_PLUS: u8 = 50;

// Upstream timestamp, e.g. 2023-03-01T12:34:56Z
pub const PLAYED_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

// Config
pub const DEFAULT_CONFIG_FILE: &str = "zipcaster.toml";
pub const CONFIG_ENV: &str = "ZIPCASTER_CONFIG";
pub const DEFAULT_LOG_LEVEL: &str = "info";
