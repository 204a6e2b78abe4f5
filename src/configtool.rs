//  ____  ____     __        __       ____
// |  _ \|  _ \ __ \ \      / /__    / ___| ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \   | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/   \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-07-30
// Version : 0.1.0
// License : Mulan PSL v2
//
// Config Tools

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::{fs, io, path::{Path, PathBuf}};
use thiserror::Error;
use dirs::config_dir;

use crate::passgen::GeneratorConfig;

pub const APP_DIR: &str = "rpawogen";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const CONFIG_ENV: &str = "RPAWOGEN_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Config directory error: {0}")]
    ConfigDirError(String),
}

/// Saved generator defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ConfigFile {
    /// Read defaults from `path`. A missing file yields the built-in defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no config file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let config: Self = serde_json::from_str(&content)?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save(&mut self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        self.updated_at = Some(Utc::now());
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!("saved generator defaults to {}", path.display());
        Ok(())
    }
}

/// 默认配置文件路径：<config_dir>/rpawogen/config.json
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let base = config_dir()
        .ok_or_else(|| ConfigError::ConfigDirError("Failed to get config directory".to_string()))?;
    Ok(base.join(APP_DIR).join(CONFIG_FILE_NAME))
}

/// Pick the config path: explicit path first, then the standard location.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}
