// src/specs/mod.rs
//! # Extraction “specs” module
//!
//! This module hosts the **per-entity extractors** for SplatNet 3 responses.
//! Each spec focuses on one sub-document (player, gear piece, team, festival
//! block, overview group) and encodes *where the ground truth lives in the
//! document* and *how to turn it into a typed record*.
//!
//! ## What lives here
//! - **Pure document reading** through `core::document` accessors and the
//!   constants in `paths`. No spec indexes a `Value` by hand.
//! - **Decoding** of obfuscated scalars via `core::decode` (base64 ids,
//!   percent colours, ability image URLs, rank strings).
//! - **Lookups** against `lookup::Tables` and the closed upstream enums.
//! - **Light shaping** of results into the records in `records`.
//!
//! ## What does **not** live here
//! - **Mode detection and record assembly** – that is `assemble`, which picks
//!   the extractors for a battle.
//! - **File reading, batching, failure policy** – `runner`.
//! - **Serialization** – records derive `Serialize`; callers choose a format.
//!
//! ## Typical call chain
//! ```text
//! runner / caller → assemble::assemble_battle → specs::battle   (id, rule, stage, …)
//!                                            ↘ specs::teams    → specs::players → specs::gear
//!                                            ↘ specs::splatfest / teams::extract_turf_war_stats
//!                  assemble::assemble_history → specs::overview (series metadata by battle id)
//! ```
//!
//! ## Conventions & invariants
//! - **Strict by default**: a required field that is absent or `null` is
//!   `MissingField`; a value of the wrong JSON type is `TypeMismatch`.
//! - **One tolerated gap**: a turf-war team without `result.paintRatio` is
//!   still recorded, with the percent omitted.
//! - **Lookup misses are not shape errors**: an unknown ability hash or enum
//!   string is `UnknownKey`, so stale data is distinguishable from bad input.
//! - **Positions are 1-based** in output; upstream list indices are 0-based.
//! - Specs **never mutate** their input and keep no state between calls.
//!
//! ## Current specs
//! - `battle` – battle-level fields (id, mode, rule, stage, result, knockout,
//!   start time, duration, awards) and per-mode power readings.
//! - `players` – one scoreboard entry, including nameplate and combat stats.
//! - `gear` – head/clothing/shoes with ability names resolved.
//! - `teams` – team records and turf-war coverage/ink.
//! - `splatfest` – clout, power, jewel, dragon tier, team themes.
//! - `overview` – anarchy/X series metadata keyed by battle id.
//!
//! ## Testing notes
//! - Every spec is tested offline against small documents built in
//!   `fixtures` (unit tests) or `tests/common` (integration tests).
//!
//! In short: **`specs` knows how to read the documents.** Other layers decide
//! which specs apply and what to do with failures.
pub mod battle;
pub mod gear;
pub mod overview;
pub mod players;
pub mod splatfest;
pub mod teams;

#[cfg(test)]
pub(crate) mod fixtures;
