//! Hover configuration persistence
//!
//! Stored as a flat JSON object in `~/.config/hover-sidebar/config.json`.
//! Missing keys fall back to their defaults; anything malformed (not an
//! object, a wrongly typed or negative value, an unparsable colour) discards
//! the whole blob.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::panel::PanelSide;

/// Notice shown to the user when persisted settings are discarded
pub const INVALID_SETTINGS_NOTICE: &str =
    "Hover Sidebar: ERROR Invalid settings detected, reverting to default";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config directory available")]
    NoConfigDir,

    #[error("failed to access config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("settings must be an object, found {0}")]
    NotAnObject(&'static str),

    #[error("invalid color format: {0}")]
    InvalidColor(String),

    #[error("{field} must be a non-negative number, got {value}")]
    InvalidValue { field: &'static str, value: f64 },
}

/// RGBA colour, persisted as `#rrggbb` or `#rrggbbaa`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rrggbb` / `#rrggbbaa` (leading `#` optional)
    pub fn from_hex(s: &str) -> Result<Self, ConfigError> {
        let hex = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .ok_or_else(|| ConfigError::InvalidColor(s.to_string()))
        };
        match hex.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            _ => Err(ConfigError::InvalidColor(s.to_string())),
        }
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Persisted hover configuration
///
/// Unknown keys are ignored so settings written by other versions still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HoverConfig {
    /// Draw vertical lines at the trigger boundaries
    pub show_debug_lines: bool,
    /// Collapse both panels when the pointer leaves the window
    pub window_out_enabled: bool,
    /// Milliseconds to wait after the pointer leaves the window
    pub window_out_delay: f64,

    pub left_side_enabled: bool,
    /// Width of the left edge band in logical pixels
    pub left_trigger_distance: f64,
    /// Milliseconds to wait before collapsing the left panel
    pub left_close_delay: f64,
    pub left_floating: bool,
    pub left_debug_line_color: Color,

    pub right_side_enabled: bool,
    pub right_trigger_distance: f64,
    pub right_close_delay: f64,
    pub right_floating: bool,
    pub right_debug_line_color: Color,

    /// Minimum interval between pointer-move evaluations (0 = every event)
    pub pointer_throttle_ms: u64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            show_debug_lines: true,
            window_out_enabled: true,
            window_out_delay: 250.0,
            left_side_enabled: true,
            left_trigger_distance: 20.0,
            left_close_delay: 250.0,
            left_floating: true,
            left_debug_line_color: Color::rgb(0xff, 0x00, 0x00),
            right_side_enabled: true,
            right_trigger_distance: 20.0,
            right_close_delay: 250.0,
            right_floating: false,
            right_debug_line_color: Color::rgb(0x00, 0x00, 0xff),
            pointer_throttle_ms: 16,
        }
    }
}

/// Per-side view over the flat config
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideConfig {
    pub enabled: bool,
    pub trigger_distance: f64,
    pub close_delay_ms: f64,
    pub floating: bool,
    pub debug_line_color: Color,
}

/// Partial settings update, as sent by the settings UI
///
/// Every field is optional; absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigPatch {
    pub show_debug_lines: Option<bool>,
    pub window_out_enabled: Option<bool>,
    pub window_out_delay: Option<f64>,
    pub left_side_enabled: Option<bool>,
    pub left_trigger_distance: Option<f64>,
    pub left_close_delay: Option<f64>,
    pub left_floating: Option<bool>,
    pub left_debug_line_color: Option<Color>,
    pub right_side_enabled: Option<bool>,
    pub right_trigger_distance: Option<f64>,
    pub right_close_delay: Option<f64>,
    pub right_floating: Option<bool>,
    pub right_debug_line_color: Option<Color>,
    pub pointer_throttle_ms: Option<u64>,
}

impl ConfigPatch {
    /// Patch that only changes one side's floating default
    pub fn floating(side: PanelSide, floating: bool) -> Self {
        match side {
            PanelSide::Left => Self {
                left_floating: Some(floating),
                ..Self::default()
            },
            PanelSide::Right => Self {
                right_floating: Some(floating),
                ..Self::default()
            },
        }
    }

    /// Patch that only changes one side's enabled flag
    pub fn side_enabled(side: PanelSide, enabled: bool) -> Self {
        match side {
            PanelSide::Left => Self {
                left_side_enabled: Some(enabled),
                ..Self::default()
            },
            PanelSide::Right => Self {
                right_side_enabled: Some(enabled),
                ..Self::default()
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Outcome of loading persisted settings
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: HoverConfig,
    /// User-visible warning when the persisted data was discarded
    pub notice: Option<String>,
}

impl HoverConfig {
    /// Per-side settings
    pub fn side(&self, side: PanelSide) -> SideConfig {
        match side {
            PanelSide::Left => SideConfig {
                enabled: self.left_side_enabled,
                trigger_distance: self.left_trigger_distance,
                close_delay_ms: self.left_close_delay,
                floating: self.left_floating,
                debug_line_color: self.left_debug_line_color,
            },
            PanelSide::Right => SideConfig {
                enabled: self.right_side_enabled,
                trigger_distance: self.right_trigger_distance,
                close_delay_ms: self.right_close_delay,
                floating: self.right_floating,
                debug_line_color: self.right_debug_line_color,
            },
        }
    }

    /// Check numeric invariants serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("leftTriggerDistance", self.left_trigger_distance),
            ("rightTriggerDistance", self.right_trigger_distance),
            ("leftCloseDelay", self.left_close_delay),
            ("rightCloseDelay", self.right_close_delay),
            ("windowOutDelay", self.window_out_delay),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        Ok(())
    }

    /// Parse a persisted settings blob, merging it over defaults
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        let kind = match &value {
            serde_json::Value::Object(_) => None,
            serde_json::Value::Null => Some("null"),
            serde_json::Value::Bool(_) => Some("boolean"),
            serde_json::Value::Number(_) => Some("number"),
            serde_json::Value::String(_) => Some("string"),
            serde_json::Value::Array(_) => Some("array"),
        };
        if let Some(kind) = kind {
            return Err(ConfigError::NotAnObject(kind));
        }
        let config: HoverConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Return a copy with `patch` applied and validated
    pub fn patched(&self, patch: &ConfigPatch) -> Result<Self, ConfigError> {
        let mut next = self.clone();
        macro_rules! apply {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = patch.$field { next.$field = value; })*
            };
        }
        apply!(
            show_debug_lines,
            window_out_enabled,
            window_out_delay,
            left_side_enabled,
            left_trigger_distance,
            left_close_delay,
            left_floating,
            left_debug_line_color,
            right_side_enabled,
            right_trigger_distance,
            right_close_delay,
            right_floating,
            right_debug_line_color,
            pointer_throttle_ms,
        );
        next.validate()?;
        Ok(next)
    }

    /// Load config from the default location
    pub fn load() -> ConfigLoad {
        match crate::config_paths::config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("No config directory available, using defaults");
                ConfigLoad {
                    config: Self::default(),
                    notice: None,
                }
            }
        }
    }

    /// Load config from `path`
    ///
    /// A missing file yields defaults silently. Corrupt contents yield
    /// defaults plus a notice for the user.
    pub fn load_from(path: &Path) -> ConfigLoad {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return ConfigLoad {
                config: Self::default(),
                notice: None,
            };
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                return ConfigLoad {
                    config: Self::default(),
                    notice: None,
                };
            }
        };

        match Self::from_json(&content) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                ConfigLoad {
                    config,
                    notice: None,
                }
            }
            Err(e) => {
                tracing::error!(
                    "Invalid settings detected at {}, reverting to default: {}",
                    path.display(),
                    e
                );
                ConfigLoad {
                    config: Self::default(),
                    notice: Some(INVALID_SETTINGS_NOTICE.to_string()),
                }
            }
        }
    }

    /// Save config to `path`, creating its parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            crate::config_paths::ensure_dir(parent)?;
        }

        let content = self.to_json()?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
