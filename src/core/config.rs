//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.fayin/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::deck::DEFAULT_SWIPE_THRESHOLD;
use crate::core::loader::{DEFAULT_ASSET_DIR, DEFAULT_DECK};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FayinConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub audio: AudioConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub deck: Option<String>,
    pub asset_dir: Option<String>,
    pub swipe_threshold: Option<f32>,
    pub drag_scale: Option<f32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AudioConfig {
    /// Defaults to the asset directory.
    pub dir: Option<String>,
    pub command: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Presentation units per terminal row dragged.
pub const DEFAULT_DRAG_SCALE: f32 = 40.0;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub deck: String,
    pub asset_dir: PathBuf,
    pub swipe_threshold: f32,
    pub drag_scale: f32,
    pub audio_dir: PathBuf,
    pub audio_command: Option<String>,
    pub audio_args: Vec<String>,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub deck: Option<String>,
    pub asset_dir: Option<PathBuf>,
    pub threshold: Option<f32>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.fayin/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".fayin").join("config.toml"))
}

/// Load config from `~/.fayin/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FayinConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FayinConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FayinConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FayinConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<FayinConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FayinConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Fayin Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# deck = "Phonetic"                  # Asset name, loaded from <asset_dir>/<deck>.json
# asset_dir = "assets"
# swipe_threshold = 200.0            # Gesture magnitude needed to move a card
# drag_scale = 40.0                  # Gesture units per terminal row dragged

# [audio]
# dir = "assets"                     # Where audioFilename is resolved (defaults to asset_dir)
# command = "mpv"                    # Omit to use the system default player
# args = ["--no-video", "--really-quiet"]
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FayinConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &FayinConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Deck: CLI → env → config → default
    let deck = cli
        .deck
        .clone()
        .or_else(|| env("FAYIN_DECK"))
        .or_else(|| config.general.deck.clone())
        .unwrap_or_else(|| DEFAULT_DECK.to_string());

    // Asset dir: CLI → env → config → default
    let asset_dir = cli
        .asset_dir
        .clone()
        .or_else(|| env("FAYIN_ASSET_DIR").map(PathBuf::from))
        .or_else(|| config.general.asset_dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_DIR));

    // Threshold: CLI → env → config → default. Unparseable env values are skipped.
    let swipe_threshold = cli
        .threshold
        .or_else(|| {
            env("FAYIN_SWIPE_THRESHOLD").and_then(|v| match v.trim().parse::<f32>() {
                Ok(t) => Some(t),
                Err(e) => {
                    warn!("Ignoring FAYIN_SWIPE_THRESHOLD={:?}: {}", v, e);
                    None
                }
            })
        })
        .or(config.general.swipe_threshold)
        .unwrap_or(DEFAULT_SWIPE_THRESHOLD);

    let drag_scale = config
        .general
        .drag_scale
        .filter(|s| s.is_finite() && *s > 0.0)
        .unwrap_or(DEFAULT_DRAG_SCALE);

    let audio_dir = config
        .audio
        .dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| asset_dir.clone());

    ResolvedConfig {
        deck,
        asset_dir,
        swipe_threshold,
        drag_scale,
        audio_dir,
        audio_command: config.audio.command.clone(),
        audio_args: config.audio.args.clone(),
    }
}
