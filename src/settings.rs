//! Game settings and preferences
//!
//! Owned by the director and lent to scenes; the options screen flips the
//! music flag in place. Optionally read from a JSON file at startup.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::input::KeyBindings;
use crate::sim::{GameMode, Seats};

/// Window resolutions listed on the options screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Resolution {
    #[default]
    R640x480,
    R800x600,
    R1024x768,
}

impl Resolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::R640x480 => "640x480",
            Resolution::R800x600 => "800x600",
            Resolution::R1024x768 => "1024x768",
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Menu and game music on/off
    pub audio_enabled: bool,
    /// Shown on the options screen; the playfield stays 640x480
    pub resolution: Resolution,
    /// Second human instead of the computer on the right
    pub two_player: bool,
    /// Serve RNG seed (random per match when unset)
    pub seed: Option<u64>,
    /// Left paddle keys
    pub player_keys: KeyBindings,
    /// Right paddle keys in two-player mode
    pub second_player_keys: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            audio_enabled: true,
            resolution: Resolution::default(),
            two_player: false,
            seed: None,
            player_keys: KeyBindings::ARROWS,
            second_player_keys: KeyBindings::ARROWS,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file; missing fields take their defaults
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn game_mode(&self) -> GameMode {
        if self.two_player {
            GameMode::TwoPlayer
        } else {
            GameMode::VsComputer
        }
    }

    /// Paddle bindings for the match.
    ///
    /// In two-player mode the left seat moves to W/S if both players would
    /// otherwise share the same keys.
    pub fn seats(&self) -> Seats {
        let mut left = self.player_keys;
        if self.two_player && left == self.second_player_keys {
            left = KeyBindings::WS;
        }
        Seats {
            left,
            right: self.second_player_keys,
        }
    }

    /// Flip music on/off, returning the new state
    pub fn toggle_audio(&mut self) -> bool {
        self.audio_enabled = !self.audio_enabled;
        self.audio_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    #[test]
    fn test_resolution_from_json() {
        let settings: Settings = serde_json::from_str(r#"{ "resolution": "R800x600" }"#).unwrap();
        assert_eq!(settings.resolution, Resolution::R800x600);
        assert_eq!(settings.resolution.as_str(), "800x600");
        assert_eq!(Settings::default().resolution.as_str(), "640x480");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "audio_enabled": false, "seed": 7 }"#).unwrap();
        assert!(!settings.audio_enabled);
        assert_eq!(settings.seed, Some(7));
        assert!(!settings.two_player);
        assert_eq!(settings.player_keys, KeyBindings::ARROWS);
    }

    #[test]
    fn test_custom_bindings_json() {
        let settings: Settings = serde_json::from_str(
            r#"{ "player_keys": { "up": { "Char": "q" }, "down": { "Char": "a" } } }"#,
        )
        .unwrap();
        assert_eq!(settings.player_keys.up, Key::Char('q'));
        assert_eq!(settings.player_keys.down, Key::Char('a'));
    }

    #[test]
    fn test_two_player_seats_do_not_collide() {
        let settings = Settings {
            two_player: true,
            ..Settings::default()
        };
        let seats = settings.seats();
        assert_eq!(seats.left, KeyBindings::WS);
        assert_eq!(seats.right, KeyBindings::ARROWS);
        assert_eq!(settings.game_mode(), GameMode::TwoPlayer);
    }

    #[test]
    fn test_toggle_audio() {
        let mut settings = Settings::default();
        assert!(!settings.toggle_audio());
        assert!(settings.toggle_audio());
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Settings::load_from(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }
}
