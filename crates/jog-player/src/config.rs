//! Player configuration for jog-player
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/jog-player/config.yaml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlayerConfig {
    /// Mock media surface settings
    pub media: MediaConfig,
    /// Display settings
    pub ui: UiConfig,
}

/// Media surface configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Number of mock surfaces to create at startup
    pub surface_count: usize,
    /// Initial volume for every surface (0.0 to 1.0)
    pub default_volume: f64,
    /// Length of the looping mock clip in seconds
    pub clip_secs: f64,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            surface_count: 2,
            default_volume: 0.8,
            clip_secs: 180.0,
        }
    }
}

/// Display configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Draw the hint ring and direction arrows on overlays
    pub show_hint_ring: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_hint_ring: true,
        }
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/jog-player/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("jog-player")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config(path: &Path) -> PlayerConfig {
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return PlayerConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<PlayerConfig>(&contents) {
            Ok(config) => {
                log::info!(
                    "load_config: Loaded config - surfaces: {}, default volume: {:.2}",
                    config.media.surface_count,
                    config.media.default_volume
                );
                config
            }
            Err(e) => {
                log::warn!("load_config: Failed to parse config: {}, using defaults", e);
                PlayerConfig::default()
            }
        },
        Err(e) => {
            log::warn!(
                "load_config: Failed to read config file: {}, using defaults",
                e
            );
            PlayerConfig::default()
        }
    }
}

/// Save configuration to a YAML file
///
/// Creates parent directories if they don't exist.
pub fn save_config(config: &PlayerConfig, path: &Path) -> Result<()> {
    log::info!("save_config: Saving to {:?}", path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::info!("save_config: Config saved successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.media.surface_count, 2);
        assert_eq!(config.media.default_volume, 0.8);
        assert!(config.ui.show_hint_ring);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = PlayerConfig {
            media: MediaConfig {
                surface_count: 4,
                default_volume: 0.5,
                clip_secs: 60.0,
            },
            ui: UiConfig {
                show_hint_ring: false,
            },
        };

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: PlayerConfig = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(parsed.media.surface_count, 4);
        assert_eq!(parsed.media.default_volume, 0.5);
        assert!(!parsed.ui.show_hint_ring);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let parsed: PlayerConfig = serde_yaml::from_str("media:\n  surface_count: 3\n").unwrap();
        assert_eq!(parsed.media.surface_count, 3);
        assert_eq!(parsed.media.default_volume, 0.8);
        assert!(parsed.ui.show_hint_ring);
    }
}
