//! Host settings
//!
//! Read from a JSON file next to the binary. These only affect how the host
//! drives the simulation (seed, tick rate, threading, logging), never the
//! rules of the game.

use std::fs;
use std::io;
use std::path::Path;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SUBSTEPS, TICK_HZ};

/// How the host runs the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HostMode {
    /// Step the engine on the calling thread
    #[default]
    Inline,
    /// Step the engine on a dedicated logic thread
    Threaded,
}

impl HostMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HostMode::Inline => "inline",
            HostMode::Threaded => "threaded",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "inline" => Some(HostMode::Inline),
            "threaded" | "thread" => Some(HostMode::Threaded),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed; derived from the clock when absent
    pub seed: Option<u64>,
    /// Simulation ticks per second
    pub tick_hz: u32,
    /// Cap on ticks per rendered frame
    pub max_substeps: u32,
    /// Ticks the headless demo runs before exiting
    pub demo_ticks: u64,
    pub mode: HostMode,
    /// Log filter (`error`, `warn`, `info`, `debug`, `trace`, `off`)
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            tick_hz: TICK_HZ,
            max_substeps: MAX_SUBSTEPS,
            demo_ticks: 60 * u64::from(TICK_HZ),
            mode: HostMode::Inline,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Default file name, looked up in the working directory
    pub const FILE_NAME: &'static str = "duo-pong.json";

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from `path`, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = self.to_json().map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Parsed log filter, `Info` if unrecognized
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Tick rate with zero treated as the default
    pub fn effective_tick_hz(&self) -> u32 {
        if self.tick_hz == 0 { TICK_HZ } else { self.tick_hz }
    }

    pub fn tick_dt(&self) -> f32 {
        1.0 / self.effective_tick_hz() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.seed, None);
        assert_eq!(settings.tick_hz, 60);
        assert_eq!(settings.max_substeps, 8);
        assert_eq!(settings.mode, HostMode::Inline);
        assert_eq!(settings.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 7, "mode": "threaded" }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.mode, HostMode::Threaded);
        assert_eq!(settings.tick_hz, 60);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ seed: }").is_err());
        assert!(Settings::from_json(r#"{ "mode": "sideways" }"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: Some(99),
            log_level: "debug".into(),
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_level_filter_fallback() {
        let settings = Settings {
            log_level: "chatty".into(),
            ..Default::default()
        };
        assert_eq!(settings.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_zero_tick_rate_uses_default() {
        let settings = Settings {
            tick_hz: 0,
            ..Default::default()
        };
        assert_eq!(settings.effective_tick_hz(), 60);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("duo-pong-missing-settings.json");
        let _ = fs::remove_file(&path);
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("duo-pong-settings-{}.json", std::process::id()));
        let settings = Settings {
            demo_ticks: 120,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_host_mode_names() {
        assert_eq!(HostMode::parse("Threaded"), Some(HostMode::Threaded));
        assert_eq!(HostMode::parse("inline"), Some(HostMode::Inline));
        assert_eq!(HostMode::parse("gpu"), None);
        assert_eq!(HostMode::Threaded.as_str(), "threaded");
    }
}
