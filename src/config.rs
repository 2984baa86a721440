//! Session configuration, read from an optional JSON file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, ensure};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::ShakmatyRules;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "CHESS_SESSION_CONFIG";
/// Config file looked up in the working directory when the variable is unset
pub const DEFAULT_CONFIG_FILE: &str = "chess-session.json";
/// Longest clock accepted, one year
pub const MAX_INITIAL_TIME_SECS: f64 = 86_400.0 * 365.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Starting time on each clock, in seconds
    pub initial_time_secs: f64,
    /// Session frames per second
    pub frame_rate: u32,
    /// Edge length of one board square, in pixels
    pub square_size: f32,
    /// Custom starting position in FEN; the standard position when absent
    pub start_fen: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_time_secs: 300.0,
            frame_rate: 15,
            square_size: 80.0,
            start_fen: None,
        }
    }
}

impl SessionConfig {
    /// Load from `$CHESS_SESSION_CONFIG`, or `chess-session.json` if present, or defaults
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let config = Self::from_file(&path)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(text).with_context(|| {
            format!("expected a document matching this schema:\n{}", Self::schema_json())
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.initial_time_secs.is_finite() && self.initial_time_secs > 0.0,
            "initial_time_secs must be a positive number, got {}",
            self.initial_time_secs
        );
        ensure!(
            self.initial_time_secs <= MAX_INITIAL_TIME_SECS,
            "initial_time_secs must be at most {MAX_INITIAL_TIME_SECS}, got {}",
            self.initial_time_secs
        );
        ensure!(
            (1..=240).contains(&self.frame_rate),
            "frame_rate must be between 1 and 240, got {}",
            self.frame_rate
        );
        ensure!(
            self.square_size >= 20.0,
            "square_size must be at least 20 pixels, got {}",
            self.square_size
        );
        if let Some(fen) = &self.start_fen {
            ShakmatyRules::position_from_fen(fen).context("start_fen is not usable")?;
        }
        Ok(())
    }

    pub fn initial_time(&self) -> anyhow::Result<Duration> {
        Duration::try_from_secs_f64(self.initial_time_secs).with_context(|| {
            format!("initial_time_secs {} is not a duration", self.initial_time_secs)
        })
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frame_rate))
    }

    /// JSON schema describing the config file
    pub fn schema_json() -> String {
        let schema = schemars::schema_for!(SessionConfig);
        serde_json::to_string_pretty(&schema).unwrap_or_default()
    }
}
