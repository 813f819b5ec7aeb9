//! Runtime configuration: window, arena size, roster and seed.
//!
//! Read from `arena.json` (or the file named by `ARENA_CONFIG`). Every field
//! has a default, so a partial file or no file at all still works.
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_ENV: &str = "ARENA_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "arena.json";

/// Largest accepted `arena_half_size`, world units.
pub const MAX_ARENA_HALF_SIZE: f32 = 500.0;
/// Finest accepted floor grid.
pub const MIN_GRID_SPACING: f32 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_width: i32,
    pub window_height: i32,
    pub target_fps: u32,
    /// Half the side of the square arena, world units.
    pub arena_half_size: f32,
    pub grid_spacing: f32,
    pub attackers: usize,
    pub defenders: usize,
    pub bots: usize,
    pub seed: u64,
    pub audio: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 1300,
            window_height: 900,
            target_fps: 60,
            arena_half_size: 12.0,
            grid_spacing: 1.0,
            attackers: 2,
            defenders: 2,
            bots: 3,
            seed: 7,
            audio: true,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: GameConfig = serde_json::from_str(s).context("parse arena config")?;
        cfg.validate()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let txt = fs::read_to_string(path)
            .with_context(|| format!("read config: {}", path.display()))?;
        Self::from_json_str(&txt).with_context(|| format!("in {}", path.display()))
    }

    /// Loads `ARENA_CONFIG` or `arena.json` when present; defaults otherwise.
    /// A broken file is logged and ignored.
    pub fn load_or_default() -> Self {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        if !Path::new(&path).exists() {
            log::info!("no config at {path}, using defaults");
            return Self::default();
        }
        match Self::load(&path) {
            Ok(cfg) => {
                log::info!("loaded config from {path}");
                cfg.log_effective();
                cfg
            }
            Err(e) => {
                log::warn!("ignoring config {path}: {e:#}");
                Self::default()
            }
        }
    }

    /// Logs the config as it will be used, defaults filled in.
    pub fn log_effective(&self) {
        match serde_json::to_string(self) {
            Ok(json) => log::debug!("effective config: {json}"),
            Err(e) => log::warn!("cannot serialize config: {e}"),
        }
    }

    fn validate(self) -> Result<Self> {
        anyhow::ensure!(
            self.arena_half_size.is_finite()
                && (2.0..=MAX_ARENA_HALF_SIZE).contains(&self.arena_half_size),
            "arena_half_size must be between 2 and {MAX_ARENA_HALF_SIZE}, got {}",
            self.arena_half_size
        );
        anyhow::ensure!(
            self.grid_spacing.is_finite()
                && (MIN_GRID_SPACING..=self.arena_half_size).contains(&self.grid_spacing),
            "grid_spacing must be between {MIN_GRID_SPACING} and arena_half_size, got {}",
            self.grid_spacing
        );
        anyhow::ensure!(self.window_width > 0 && self.window_height > 0, "window size must be positive");
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = GameConfig::from_json_str(r#"{ "bots": 0, "seed": 42 }"#).expect("parse");
        assert_eq!(cfg.bots, 0);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.attackers, GameConfig::default().attackers);
    }

    #[test]
    fn rejects_tiny_arena() {
        let err = GameConfig::from_json_str(r#"{ "arena_half_size": 1.0 }"#).unwrap_err();
        assert!(err.to_string().contains("arena_half_size"));
    }

    #[test]
    fn rejects_non_finite_arena() {
        // 1e39 overflows f32 to infinity
        let err = GameConfig::from_json_str(r#"{ "arena_half_size": 1e39 }"#).unwrap_err();
        assert!(err.to_string().contains("arena_half_size"));
        assert!(GameConfig::from_json_str(r#"{ "arena_half_size": 501.0 }"#).is_err());
        assert!(GameConfig::from_json_str(r#"{ "arena_half_size": 500.0 }"#).is_ok());
    }

    #[test]
    fn rejects_unusable_grid_spacing() {
        for json in [
            r#"{ "grid_spacing": 1e39 }"#,
            r#"{ "grid_spacing": 0.0 }"#,
            r#"{ "grid_spacing": 0.001 }"#,
            r#"{ "grid_spacing": 20.0, "arena_half_size": 10.0 }"#,
        ] {
            let err = GameConfig::from_json_str(json).unwrap_err();
            assert!(err.to_string().contains("grid_spacing"), "{json}");
        }
    }

    #[test]
    fn effective_config_serializes_back() {
        let cfg = GameConfig { bots: 9, ..GameConfig::default() };
        let json = serde_json::to_string(&cfg).expect("serialize");
        assert!(json.contains(r#""bots":9"#));
        assert_eq!(GameConfig::from_json_str(&json).expect("parse"), cfg);
    }

    #[test]
    fn rejects_bad_json() {
        assert!(GameConfig::from_json_str("{ bots: }").is_err());
    }

    #[test]
    fn missing_file_is_an_error_with_path() {
        let err = GameConfig::load("does/not/exist.json").unwrap_err();
        assert!(format!("{err:#}").contains("does/not/exist.json"));
    }
}
