//! Keybinding configuration types and parsing.
//!
//! This module defines the configurable keybinding system that maps keys to
//! paint actions. Shifted symbols are bound by the symbol itself (`"+"`), so only
//! `Ctrl` and `Alt` are accepted as modifiers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Exit
    Exit,

    // Drawing mode selection
    FreeMode,
    LineMode,
    CircleMode,

    // Color selection
    ColorBlack,
    ColorRed,
    ColorBlue,
    ColorGreen,

    // Brush size
    IncreaseBrush,
    DecreaseBrush,
}

/// Errors produced while parsing keybinding strings or building the action map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("empty keybinding string")]
    Empty,

    #[error("no key specified in '{0}'")]
    MissingKey(String),

    #[error("modifier '{modifier}' in '{binding}' is not supported; bind the shifted symbol directly")]
    UnsupportedModifier { binding: String, modifier: String },

    #[error("duplicate keybinding '{binding}' assigned to both {first:?} and {second:?}")]
    Duplicate {
        binding: String,
        first: Action,
        second: Action,
    },
}

/// Named (non-character) keys accepted in binding strings, in canonical spelling.
const NAMED_KEYS: &[&str] = &["Escape"];

/// A single keybinding: a key with optional modifiers.
///
/// Single-character keys are stored lowercased so `"F"` and `"f"` are the same binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Alt+F", "Escape" or "+".
    /// Modifiers can appear in any order and spaces around '+' are ignored.
    pub fn parse(s: &str) -> Result<Self, BindingError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(BindingError::Empty);
        }

        // Normalize by removing spaces around '+'
        let normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");

        let mut ctrl = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "alt" => alt = true,
                "shift" => {
                    return Err(BindingError::UnsupportedModifier {
                        binding: s.to_string(),
                        modifier: part.to_string(),
                    });
                }
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(BindingError::MissingKey(s.to_string()));
        }

        // "Ctrl++" splits into ["Ctrl", "", ""]: the key itself is '+'
        let key = key_parts.join("+");
        let key = if key.is_empty() { "+".to_string() } else { key };

        Ok(Self {
            key: normalize_key(&key),
            ctrl,
            alt,
        })
    }

    /// Builds the binding a pressed key would match, given the held modifiers.
    pub fn from_pressed(key: &str, ctrl: bool, alt: bool) -> Self {
        Self {
            key: normalize_key(key),
            ctrl,
            alt,
        }
    }
}

fn normalize_key(key: &str) -> String {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return c.to_lowercase().collect();
    }

    NAMED_KEYS
        .iter()
        .find(|name| name.eq_ignore_ascii_case(key))
        .map(|name| name.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// free_mode = ["F"]
/// increase_brush = ["+", "="]
/// exit = ["Escape", "Ctrl+Q"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_exit")]
    pub exit: Vec<String>,

    #[serde(default = "default_free_mode")]
    pub free_mode: Vec<String>,

    #[serde(default = "default_line_mode")]
    pub line_mode: Vec<String>,

    #[serde(default = "default_circle_mode")]
    pub circle_mode: Vec<String>,

    #[serde(default = "default_color_black")]
    pub color_black: Vec<String>,

    #[serde(default = "default_color_red")]
    pub color_red: Vec<String>,

    #[serde(default = "default_color_blue")]
    pub color_blue: Vec<String>,

    #[serde(default = "default_color_green")]
    pub color_green: Vec<String>,

    #[serde(default = "default_increase_brush")]
    pub increase_brush: Vec<String>,

    #[serde(default = "default_decrease_brush")]
    pub decrease_brush: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            exit: default_exit(),
            free_mode: default_free_mode(),
            line_mode: default_line_mode(),
            circle_mode: default_circle_mode(),
            color_black: default_color_black(),
            color_red: default_color_red(),
            color_blue: default_color_blue(),
            color_green: default_color_green(),
            increase_brush: default_increase_brush(),
            decrease_brush: default_decrease_brush(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, BindingError> {
        let mut map = HashMap::new();

        let table: [(&[String], Action); 10] = [
            (&self.exit, Action::Exit),
            (&self.free_mode, Action::FreeMode),
            (&self.line_mode, Action::LineMode),
            (&self.circle_mode, Action::CircleMode),
            (&self.color_black, Action::ColorBlack),
            (&self.color_red, Action::ColorRed),
            (&self.color_blue, Action::ColorBlue),
            (&self.color_green, Action::ColorGreen),
            (&self.increase_brush, Action::IncreaseBrush),
            (&self.decrease_brush, Action::DecreaseBrush),
        ];

        for (bindings, action) in table {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing) = map.insert(binding, action) {
                    return Err(BindingError::Duplicate {
                        binding: binding_str.clone(),
                        first: existing,
                        second: action,
                    });
                }
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_exit() -> Vec<String> {
    vec!["Escape".to_string()]
}

fn default_free_mode() -> Vec<String> {
    vec!["F".to_string()]
}

fn default_line_mode() -> Vec<String> {
    vec!["L".to_string()]
}

fn default_circle_mode() -> Vec<String> {
    vec!["C".to_string()]
}

fn default_color_black() -> Vec<String> {
    vec!["1".to_string()]
}

fn default_color_red() -> Vec<String> {
    vec!["2".to_string()]
}

fn default_color_blue() -> Vec<String> {
    vec!["3".to_string()]
}

fn default_color_green() -> Vec<String> {
    vec!["4".to_string()]
}

fn default_increase_brush() -> Vec<String> {
    vec!["+".to_string(), "=".to_string()]
}

fn default_decrease_brush() -> Vec<String> {
    vec!["-".to_string()]
}
