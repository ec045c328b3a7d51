// src/config/options.rs
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::consts::*;
use crate::error::{ExtractError, Result};

/// Runtime options. Everything has a default; a config file only overrides.
///
/// ```toml
/// gear_hashes = "data/gear_hashes.json"
/// pretty = true
/// log_level = "debug"
/// log_file = ".store/debug.log"
/// continue_on_error = true
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractOptions {
    /// Replacement for the bundled gear-ability table.
    pub gear_hashes: Option<PathBuf>,
    pub pretty: bool,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    /// Keep going when one battle fails; failures are reported at the end.
    pub continue_on_error: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            gear_hashes: None,
            pretty: false,
            log_level: s!(DEFAULT_LOG_LEVEL),
            log_file: None,
            continue_on_error: false,
        }
    }
}

impl ExtractOptions {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ExtractError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ExtractError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Resolve and load; no config anywhere means defaults.
    pub fn load_resolved(cli_path: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        match resolve_config_path(cli_path, env_path, Path::new(DEFAULT_CONFIG_FILE)) {
            Some(p) => Self::load(&p),
            None => Ok(Self::default()),
        }
    }
}

/// CLI flag, then environment, then the default file if it exists.
pub fn resolve_config_path(
    cli_path: Option<&Path>,
    env_path: Option<PathBuf>,
    default_file: &Path,
) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.to_path_buf());
    }
    if let Some(p) = env_path.filter(|p| !p.as_os_str().is_empty()) {
        return Some(p);
    }
    default_file.is_file().then(|| default_file.to_path_buf())
}
