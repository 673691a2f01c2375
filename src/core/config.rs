//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.squareword/config.toml`. If missing on first run, a
//! commented-out default is generated so players can discover all options.

use log::{debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::board::{Board, BoardError};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct SquarewordConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub target_words: Option<u8>,
    pub notice_duration_ms: Option<u64>,
    pub win_target: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BoardConfig {
    pub top: Option<String>,
    pub left: Option<String>,
    pub right: Option<String>,
    pub bottom: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LexiconConfig {
    pub path: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TARGET_WORDS: u8 = 4;
pub const DEFAULT_NOTICE_DURATION_MS: u64 = 2500;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub board: Board,
    /// `None` = use the built-in word list.
    pub lexicon_path: Option<PathBuf>,
    pub target_words: u8,
    pub notice_duration_ms: u64,
    pub win_target: Option<usize>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            board: Board::default(),
            lexicon_path: None,
            target_words: DEFAULT_TARGET_WORDS,
            notice_duration_ms: DEFAULT_NOTICE_DURATION_MS,
            win_target: None,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Board(BoardError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Board(e) => write!(f, "invalid board: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<BoardError> for ConfigError {
    fn from(e: BoardError) -> Self {
        ConfigError::Board(e)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.squareword/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".squareword"))
}

/// Returns the path to `~/.squareword/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.squareword/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SquarewordConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SquarewordConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SquarewordConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SquarewordConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<SquarewordConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SquarewordConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Squareword Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# target_words = 4                 # "Try to solve in N words" hint
# notice_duration_ms = 2500        # how long "Not a word" stays visible
# win_target = 12                  # distinct letters needed (default: all on the board)

# [board]                          # Or set SQUAREWORD_BOARD="GIA,WHO,LSE,RVT"
# top = "GIA"
# left = "WHO"
# right = "LSE"
# bottom = "RVT"

# [lexicon]
# path = "words.txt"               # One word per line, relative to ~/.squareword/
#                                  # Or set SQUAREWORD_LEXICON env var
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Board and lexicon values from one override layer (CLI flags or env vars).
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub board: Option<String>,
    pub lexicon: Option<String>,
}

impl Overrides {
    /// Reads `SQUAREWORD_BOARD` and `SQUAREWORD_LEXICON`.
    pub fn from_env() -> Self {
        Self {
            board: std::env::var("SQUAREWORD_BOARD").ok(),
            lexicon: std::env::var("SQUAREWORD_LEXICON").ok(),
        }
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli` comes from the command line, `env` from [`Overrides::from_env`].
pub fn resolve(
    config: &SquarewordConfig,
    cli: &Overrides,
    env: &Overrides,
) -> Result<ResolvedConfig, ConfigError> {
    // Board: CLI → env → config → default
    let board = match cli.board.as_deref().or(env.board.as_deref()) {
        Some(s) => Board::parse(s)?,
        None => board_from_config(&config.board)?,
    };

    // Lexicon: CLI → env → config (relative to ~/.squareword/) → built-in
    let lexicon_path = cli
        .lexicon
        .as_deref()
        .or(env.lexicon.as_deref())
        .map(PathBuf::from)
        .or_else(|| config.lexicon.path.as_deref().map(config_relative));

    Ok(ResolvedConfig {
        board,
        lexicon_path,
        target_words: config
            .general
            .target_words
            .unwrap_or(DEFAULT_TARGET_WORDS),
        notice_duration_ms: config
            .general
            .notice_duration_ms
            .unwrap_or(DEFAULT_NOTICE_DURATION_MS),
        win_target: config.general.win_target,
    })
}

/// Missing sides fall back to the default board's letters.
fn board_from_config(config: &BoardConfig) -> Result<Board, ConfigError> {
    if config.top.is_none()
        && config.left.is_none()
        && config.right.is_none()
        && config.bottom.is_none()
    {
        return Ok(Board::default());
    }

    let fallback = Board::default().to_string();
    let defaults: Vec<&str> = fallback.split(',').collect();
    let sides = [&config.top, &config.left, &config.right, &config.bottom];
    let joined = sides
        .iter()
        .zip(defaults)
        .map(|(side, default)| side.as_deref().unwrap_or(default))
        .collect::<Vec<_>>()
        .join(",");
    Ok(Board::parse(&joined)?)
}

/// Absolute paths pass through; relative ones are resolved against `~/.squareword/`.
fn config_relative(path: &str) -> PathBuf {
    let p = PathBuf::from(path);
    if p.is_absolute() {
        return p;
    }
    match config_dir() {
        Some(dir) => dir.join(p),
        None => p,
    }
}
