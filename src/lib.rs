// src/lib.rs

#[macro_use]
pub mod macros;

pub mod assemble;
pub mod config;
pub mod core;
pub mod error;
pub mod lookup;
pub mod paths;
pub mod records;
pub mod runner;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod log;

pub use assemble::{assemble_battle, assemble_history, detect_mode};
pub use config::ExtractOptions;
pub use error::{ExtractError, Result};
pub use lookup::Tables;
pub use records::BattleRecord;
