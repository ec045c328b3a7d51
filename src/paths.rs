// src/paths.rs
//! Path table: where every field lives in the SplatNet 3 responses.
//!
//! Paths are grouped by the sub-document they are relative to. Battle-level
//! groups (`battle`, `fest`, `bankara`, `league`, `xmatch`) start at the
//! battle document root; `team`, `player`, `gear`, `award` are relative to one
//! element of the corresponding list; `overview` starts at a history-groups
//! document root and `group`/`node` are relative to its elements.
//!
//! Upstream renames are handled here only, with a bump of
//! [`PATH_TABLE_VERSION`].

use crate::core::document::PathSpec;

pub const PATH_TABLE_VERSION: u32 = 3;

pub mod battle {
    use super::PathSpec;

    pub const ROOT: PathSpec = path!["vsHistoryDetail"];
    pub const ID: PathSpec = path!["vsHistoryDetail", "id"];
    pub const MODE_ID: PathSpec = path!["vsHistoryDetail", "vsMode", "id"];
    pub const RULE: PathSpec = path!["vsHistoryDetail", "vsRule", "rule"];
    pub const STAGE_ID: PathSpec = path!["vsHistoryDetail", "vsStage", "id"];
    pub const STAGE_NAME: PathSpec = path!["vsHistoryDetail", "vsStage", "name"];
    pub const JUDGEMENT: PathSpec = path!["vsHistoryDetail", "judgement"];
    pub const KNOCKOUT: PathSpec = path!["vsHistoryDetail", "knockout"];
    pub const PLAYED_TIME: PathSpec = path!["vsHistoryDetail", "playedTime"];
    pub const DURATION: PathSpec = path!["vsHistoryDetail", "duration"];
    pub const AWARDS: PathSpec = path!["vsHistoryDetail", "awards"];
    pub const MY_TEAM: PathSpec = path!["vsHistoryDetail", "myTeam"];
    pub const OTHER_TEAMS: PathSpec = path!["vsHistoryDetail", "otherTeams"];

    // Mode sub-documents; at most one is non-null per battle
    pub const FEST_MATCH: PathSpec = path!["vsHistoryDetail", "festMatch"];
    pub const BANKARA_MATCH: PathSpec = path!["vsHistoryDetail", "bankaraMatch"];
    pub const LEAGUE_MATCH: PathSpec = path!["vsHistoryDetail", "leagueMatch"];
    pub const X_MATCH: PathSpec = path!["vsHistoryDetail", "xMatch"];
}

pub mod award {
    use super::PathSpec;

    pub const NAME: PathSpec = path!["name"];
    pub const RANK: PathSpec = path!["rank"];
}

pub mod fest {
    use super::PathSpec;

    pub const DRAGON_MATCH: PathSpec = path!["vsHistoryDetail", "festMatch", "dragonMatchType"];
    pub const FEST_CLOUT: PathSpec = path!["vsHistoryDetail", "festMatch", "contribution"];
    pub const FEST_POWER: PathSpec = path!["vsHistoryDetail", "festMatch", "myFestPower"];
    pub const JEWEL: PathSpec = path!["vsHistoryDetail", "festMatch", "jewel"];
}

pub mod bankara {
    use super::PathSpec;

    pub const MODE: PathSpec = path!["vsHistoryDetail", "bankaraMatch", "mode"];
    /// Either a bare number or `{ "power": n }` depending on API revision.
    pub const POWER: PathSpec = path!["vsHistoryDetail", "bankaraMatch", "bankaraPower"];
    pub const POWER_VALUE: PathSpec = path!["power"];
}

pub mod league {
    use super::PathSpec;

    pub const POWER: PathSpec = path!["vsHistoryDetail", "leagueMatch", "myLeaguePower"];
    pub const EVENT_ID: PathSpec = path!["vsHistoryDetail", "leagueMatch", "leagueMatchEvent", "id"];
}

pub mod xmatch {
    use super::PathSpec;

    pub const LAST_X_POWER: PathSpec = path!["vsHistoryDetail", "xMatch", "lastXPower"];
}

pub mod team {
    use super::PathSpec;

    pub const COLOR: PathSpec = path!["color"];
    pub const ORDER: PathSpec = path!["order"];
    pub const JUDGEMENT: PathSpec = path!["judgement"];
    pub const RESULT: PathSpec = path!["result"];
    pub const PAINT_RATIO: PathSpec = path!["result", "paintRatio"];
    pub const SCORE: PathSpec = path!["result", "score"];
    pub const NOROSHI: PathSpec = path!["result", "noroshi"];
    pub const TRI_COLOR_ROLE: PathSpec = path!["tricolorRole"];
    pub const FEST_TEAM_NAME: PathSpec = path!["festTeamName"];
    pub const FEST_UNIFORM_NAME: PathSpec = path!["festUniformName"];
    pub const FEST_UNIFORM_BONUS_RATE: PathSpec = path!["festUniformBonusRate"];
    pub const PLAYERS: PathSpec = path!["players"];
    /// Relative to one element of `PLAYERS`.
    pub const PLAYER_PAINT: PathSpec = path!["paint"];
}

pub mod player {
    use super::PathSpec;

    pub const NAME: PathSpec = path!["name"];
    pub const IS_MYSELF: PathSpec = path!["isMyself"];
    pub const SPLASHTAG: PathSpec = path!["byname"];
    pub const PLAYER_NUMBER: PathSpec = path!["nameId"];
    pub const ID: PathSpec = path!["id"];
    pub const BADGES: PathSpec = path!["nameplate", "badges"];
    /// Relative to one element of `BADGES`.
    pub const BADGE_ID: PathSpec = path!["id"];
    pub const TEXT_COLOR: PathSpec = path!["nameplate", "background", "textColor"];
    pub const BACKGROUND_ID: PathSpec = path!["nameplate", "background", "id"];
    pub const WEAPON_NAME: PathSpec = path!["weapon", "name"];
    pub const WEAPON_ID: PathSpec = path!["weapon", "id"];
    pub const SUB_NAME: PathSpec = path!["weapon", "subWeapon", "name"];
    pub const SPECIAL_NAME: PathSpec = path!["weapon", "specialWeapon", "name"];
    pub const INKED: PathSpec = path!["paint"];
    pub const SPECIES: PathSpec = path!["species"];
    pub const HEADGEAR: PathSpec = path!["headGear"];
    pub const CLOTHING: PathSpec = path!["clothingGear"];
    pub const SHOES: PathSpec = path!["shoesGear"];
    pub const RESULT: PathSpec = path!["result"];
    pub const KILL_OR_ASSIST: PathSpec = path!["result", "kill"];
    pub const ASSIST: PathSpec = path!["result", "assist"];
    pub const DEATH: PathSpec = path!["result", "death"];
    pub const SPECIAL: PathSpec = path!["result", "special"];
    pub const SIGNAL: PathSpec = path!["result", "noroshiTry"];
    pub const TOP_500_CROWN: PathSpec = path!["crown"];
    pub const FEST_DRAGON_CERT: PathSpec = path!["festDragonCert"];
}

pub mod gear {
    use super::PathSpec;

    pub const NAME: PathSpec = path!["name"];
    pub const BRAND: PathSpec = path!["brand", "name"];
    pub const PRIMARY_ABILITY: PathSpec = path!["primaryGearPower", "image", "url"];
    pub const ADDITIONAL_ABILITIES: PathSpec = path!["additionalGearPowers"];
    /// Relative to one element of `ADDITIONAL_ABILITIES`.
    pub const ADDITIONAL_ABILITY_URL: PathSpec = path!["image", "url"];
}

pub mod overview {
    use super::PathSpec;

    pub const A_HISTORY_GROUPS: PathSpec = path!["bankaraBattleHistories", "historyGroups", "nodes"];
    pub const X_HISTORY_GROUPS: PathSpec = path!["xBattleHistories", "historyGroups", "nodes"];
}

/// Relative to one history group.
pub mod group {
    use super::PathSpec;

    pub const HISTORY_DETAILS: PathSpec = path!["historyDetails", "nodes"];

    pub const A_CHALLENGE: PathSpec = path!["bankaraMatchChallenge"];
    pub const A_WIN_COUNT: PathSpec = path!["bankaraMatchChallenge", "winCount"];
    pub const A_LOSE_COUNT: PathSpec = path!["bankaraMatchChallenge", "loseCount"];
    pub const A_IS_RANK_UP: PathSpec = path!["bankaraMatchChallenge", "isUdemaeUp"];
    pub const A_RANK_AFTER: PathSpec = path!["bankaraMatchChallenge", "udemaeAfter"];
    pub const A_EARNED_RANK_POINTS: PathSpec = path!["bankaraMatchChallenge", "earnedUdemaePoint"];

    pub const X_CHALLENGE: PathSpec = path!["xBattleMatchChallenge"];
    pub const X_WIN_COUNT: PathSpec = path!["xBattleMatchChallenge", "winCount"];
    pub const X_LOSE_COUNT: PathSpec = path!["xBattleMatchChallenge", "loseCount"];
    pub const X_POWER_AFTER: PathSpec = path!["xBattleMatchChallenge", "xPowerAfter"];
}

/// Relative to one element of `group::HISTORY_DETAILS`.
pub mod node {
    use super::PathSpec;

    pub const ID: PathSpec = path!["id"];
    pub const RANK: PathSpec = path!["udemae"];
    pub const JUDGEMENT: PathSpec = path!["judgement"];
    pub const OPEN_EARNED_RANK_POINTS: PathSpec = path!["bankaraMatch", "earnedUdemaePoint"];
}
