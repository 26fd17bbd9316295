//! # Calculator Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --currency '$'                                                     │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     CALC_CURRENCY_SYMBOL=€                                             │
//! │     CALC_GST_MODE=inclusive                                            │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/calc-suite/calc.toml (Linux)                             │
//! │     ~/Library/Application Support/com.calc.calc-suite/calc.toml (macOS)│
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     ₹, exclusive mode, presets 3/5/12/18/28                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [display]
//! currency_symbol = "₹"
//!
//! [gst]
//! default_mode = "exclusive"
//! presets = [3.0, 5.0, 12.0, 18.0, 28.0]
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use calc_core::format::DEFAULT_CURRENCY_SYMBOL;
use calc_core::{Currency, GstMode, GST_PRESETS};

use crate::error::{AppError, AppResult};

// =============================================================================
// Display Settings
// =============================================================================

/// How results are rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Symbol prefixed to monetary amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency_symbol: default_currency_symbol(),
        }
    }
}

// =============================================================================
// GST Settings
// =============================================================================

/// GST calculator defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstSettings {
    /// Mode a fresh GST form starts in.
    #[serde(default)]
    pub default_mode: GstMode,

    /// Rates offered as presets, in percent.
    #[serde(default = "default_presets")]
    pub presets: Vec<f64>,
}

fn default_presets() -> Vec<f64> {
    GST_PRESETS.to_vec()
}

impl Default for GstSettings {
    fn default() -> Self {
        GstSettings {
            default_mode: GstMode::default(),
            presets: default_presets(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete calculator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalcConfig {
    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub gst: GstSettings,
}

impl CalcConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (calc.toml)
    /// 3. Environment variables
    ///
    /// An explicit `config_path` that does not exist is an error; a missing
    /// file at the default location is not.
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let explicit = config_path.is_some();
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading calculator config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else if explicit {
                return Err(AppError::InvalidConfig(format!(
                    "config file not found: {}",
                    path.display()
                )));
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document.
    pub fn from_toml(contents: &str) -> AppResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.display.currency_symbol.trim().is_empty() {
            return Err(AppError::InvalidConfig(
                "currency_symbol must not be empty".into(),
            ));
        }

        if let Some(bad) = self
            .gst
            .presets
            .iter()
            .find(|rate| !rate.is_finite() || **rate < 0.0)
        {
            return Err(AppError::InvalidConfig(format!(
                "GST preset {} must be a non-negative number",
                bad
            )));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(symbol) = std::env::var("CALC_CURRENCY_SYMBOL") {
            debug!(symbol = %symbol, "Overriding currency symbol from environment");
            self.display.currency_symbol = symbol;
        }

        if let Ok(mode) = std::env::var("CALC_GST_MODE") {
            match mode.parse() {
                Ok(parsed) => {
                    debug!(mode = %mode, "Overriding GST mode from environment");
                    self.gst.default_mode = parsed;
                }
                Err(_) => warn!(mode = %mode, "Unknown GST mode in environment"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "calc", "calc-suite")
            .map(|dirs| dirs.config_dir().join("calc.toml"))
    }

    /// Currency built from the display settings.
    pub fn currency(&self) -> Currency {
        Currency::new(self.display.currency_symbol.clone())
    }
}
