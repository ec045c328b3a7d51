// src/core/decode.rs
//! Scalar decoders: base64 ids, percent colours, ability image URLs, ranks.

use std::sync::OnceLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;
use serde_json::Value;
use url::Url;

use crate::config::consts::{ABILITY_HASH_LEN, MAX_S_PLUS};
use crate::core::document::f64_at;
use crate::error::{ExtractError, Result};

/// Base64 → UTF-8 text.
pub fn decode_base64(encoded: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| ExtractError::decode(encoded, format!("bad base64: {e}")))?;
    String::from_utf8(bytes).map_err(|_| ExtractError::decode(encoded, "decoded bytes are not UTF-8"))
}

/// Decode and strip `prefix`, returning the remaining text.
/// `"QmFkZ2UtNTAwMDAwMQ=="`, `"Badge-"` → `"5000001"`.
pub fn decode_prefixed(encoded: &str, prefix: &str) -> Result<String> {
    let raw = decode_base64(encoded)?;
    match raw.strip_prefix(prefix) {
        Some(rest) if !rest.is_empty() => Ok(rest.to_string()),
        Some(_) => Err(ExtractError::decode(encoded, format!("nothing after {prefix:?}"))),
        None => Err(ExtractError::decode(encoded, format!("expected prefix {prefix:?}, got {raw:?}"))),
    }
}

/// Decode, strip `prefix`, parse the numeric suffix.
/// `"V2VhcG9uLTQw"`, `"Weapon-"` → `40`.
pub fn decode_identifier(encoded: &str, prefix: &str) -> Result<u32> {
    let rest = decode_prefixed(encoded, prefix)?;
    rest.parse::<u32>()
        .map_err(|_| ExtractError::decode(encoded, format!("suffix {rest:?} is not numeric")))
}

/// Inverse of [`decode_prefixed`] / [`decode_identifier`].
pub fn encode_identifier(prefix: &str, id: impl std::fmt::Display) -> String {
    STANDARD.encode(format!("{prefix}{id}"))
}

/// Player ids decode to `"VsPlayer-u-<npln>:RECENT:...:u-<npln>"`; the NPLN id
/// is whatever follows the last colon.
pub fn decode_npln_id(encoded: &str) -> Result<String> {
    let raw = decode_base64(encoded)?;
    match raw.rsplit(':').next() {
        Some(tail) if !tail.is_empty() => Ok(tail.to_string()),
        _ => Err(ExtractError::decode(encoded, "empty player id")),
    }
}

/// 0.0–1.0 → 0–255, round-half-up.
pub fn channel_to_byte(c: f64) -> u8 {
    (c * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// `{ "r", "g", "b", "a" }` fractions → lower-case `"rrggbbaa"`.
pub fn percent_to_color(color: &Value) -> Result<String> {
    let mut out = String::with_capacity(8);
    for channel in [path!["r"], path!["g"], path!["b"], path!["a"]] {
        let c = f64_at(color, channel)?;
        out.push_str(&format!("{:02x}", channel_to_byte(c)));
    }
    Ok(out)
}

/// Ability image URL → the fixed-length hash naming the ability.
/// `https://.../skill_img/<64 hex>_0.png` → `<64 hex>`.
pub fn extract_ability_hash(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|e| ExtractError::decode(url, format!("bad url: {e}")))?;
    let last = parsed
        .path_segments()
        .and_then(|mut segs| segs.next_back())
        .unwrap_or("");

    let hash: String = last.chars().take(ABILITY_HASH_LEN).collect();
    if hash.len() < ABILITY_HASH_LEN || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ExtractError::decode(url, format!("no {ABILITY_HASH_LEN}-char hash in {last:?}")));
    }
    Ok(hash)
}

fn rank_re() -> &'static Regex {
    static RANK_RE: OnceLock<Regex> = OnceLock::new();
    RANK_RE.get_or_init(|| Regex::new(r"^([cbas][+-]?)(\d{1,2})?$").expect("valid rank regex"))
}

/// `"S+12"` → `("s+", Some(12))`, `"a-"` → `("a-", None)`.
pub fn parse_rank(rank: &str) -> Result<(String, Option<u8>)> {
    let lower = rank.trim().to_ascii_lowercase();
    let caps = rank_re()
        .captures(&lower)
        .ok_or_else(|| ExtractError::decode(rank, "not a rank"))?;

    let base = caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default();
    let s_plus = match caps.get(2) {
        None => None,
        Some(m) => {
            let n: u8 = m.as_str().parse().map_err(|_| ExtractError::decode(rank, "bad S+ number"))?;
            if n > MAX_S_PLUS {
                return Err(ExtractError::invalid("udemae", format!("S+{n} above S+{MAX_S_PLUS}")));
            }
            Some(n)
        }
    };
    Ok((base, s_plus))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn weapon_id_decodes() {
        // "Weapon-40"
        assert_eq!(decode_identifier("V2VhcG9uLTQw", "Weapon-").unwrap(), 40);
    }

    #[test]
    fn identifier_round_trips() {
        for (prefix, id) in [("Weapon-", 0u32), ("Weapon-", 8010), ("NameplateBackground-", 1), ("Badge-", 5000001)] {
            let enc = encode_identifier(prefix, id);
            assert_eq!(decode_identifier(&enc, prefix).unwrap(), id);
            assert_eq!(decode_prefixed(&enc, prefix).unwrap(), id.to_string());
        }
    }

    #[test]
    fn wrong_prefix_and_garbage_fail() {
        let enc = encode_identifier("Badge-", 7);
        assert!(matches!(decode_identifier(&enc, "Weapon-"), Err(ExtractError::Decode { .. })));
        assert!(matches!(decode_identifier("!!not base64!!", "Weapon-"), Err(ExtractError::Decode { .. })));
        let enc = encode_identifier("Weapon-", "abc");
        assert!(matches!(decode_identifier(&enc, "Weapon-"), Err(ExtractError::Decode { .. })));
        let enc = encode_identifier("Weapon-", "");
        assert!(decode_prefixed(&enc, "Weapon-").is_err());
    }

    #[test]
    fn npln_id_is_last_colon_segment() {
        let enc = STANDARD.encode("VsPlayer-u-abc:RECENT:20230101T000000_x:u-qwerty");
        assert_eq!(decode_npln_id(&enc).unwrap(), "u-qwerty");
    }

    #[test]
    fn color_rounds_half_up() {
        assert_eq!(channel_to_byte(0.0), 0);
        assert_eq!(channel_to_byte(1.0), 255);
        // 0.5 * 255 = 127.5 → 128
        assert_eq!(channel_to_byte(0.5), 128);
        // 0.25 * 255 = 63.75 → 64
        assert_eq!(channel_to_byte(0.25), 64);
        assert_eq!(channel_to_byte(1.2), 255);
        assert_eq!(channel_to_byte(-0.1), 0);
    }

    #[test]
    fn color_string_is_rgba_hex() {
        let c = json!({ "r": 1.0, "g": 0.5, "b": 0.0, "a": 1.0 });
        assert_eq!(percent_to_color(&c).unwrap(), "ff8000ff");
        let missing_alpha = json!({ "r": 1.0, "g": 0.5, "b": 0.0 });
        assert!(matches!(percent_to_color(&missing_alpha), Err(ExtractError::MissingField { .. })));
    }

    #[test]
    fn ability_hash_from_url() {
        let hash = "a".repeat(32) + &"0123456789abcdef".repeat(2);
        let url = format!("https://api.lp1.av5ja.srv.nintendo.net/resources/prod/v2/skill_img/{hash}_0.png?Expires=1");
        assert_eq!(extract_ability_hash(&url).unwrap(), hash);
    }

    #[test]
    fn ability_hash_rejects_short_names() {
        assert!(extract_ability_hash("https://example.com/skill_img/short.png").is_err());
        assert!(extract_ability_hash("not a url").is_err());
    }

    #[test]
    fn ranks_parse() {
        assert_eq!(parse_rank("S+12").unwrap(), (s!("s+"), Some(12)));
        assert_eq!(parse_rank("a-").unwrap(), (s!("a-"), None));
        assert_eq!(parse_rank("C").unwrap(), (s!("c"), None));
        assert!(parse_rank("X").is_err());
        assert!(parse_rank("S+51").is_err());
    }
}
