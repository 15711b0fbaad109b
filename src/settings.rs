//! Physics and play-field settings
//!
//! Loaded from JSON; any field left out takes its default from `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Sub-stepping ===
    /// Largest sub-step (seconds)
    pub max_step: f32,
    /// Largest per-sub-step travel at the actor's current speed (meters)
    pub max_substep_travel: f32,

    // === Movement ===
    /// Vertical acceleration applied when jumping (m/s², negative = down)
    pub gravity: f32,
    /// Upward speed at the start of a jump (m/s)
    pub jump_speed: f32,
    /// Horizontal speed while a direction is held (m/s)
    pub walk_speed: f32,

    // === Play field ===
    /// Horizontal clamp for the actor position
    pub field_min_x: f32,
    pub field_max_x: f32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_step: MAX_STEP,
            max_substep_travel: MAX_SUBSTEP_TRAVEL,

            gravity: GRAVITY,
            jump_speed: JUMP_SPEED,
            walk_speed: WALK_SPEED,

            field_min_x: 0.0,
            field_max_x: PLAYING_W,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Default settings with the clamp spanning a field of `width` meters
    pub fn for_field_width(width: f32) -> Self {
        Self {
            field_max_x: width,
            ..Self::default()
        }
    }

    /// Reject values the stepper cannot make progress with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.max_step > 0.0) {
            return Err(SettingsError::NonPositive("max_step"));
        }
        if !(self.max_substep_travel > 0.0) {
            return Err(SettingsError::NonPositive("max_substep_travel"));
        }
        if !(self.field_min_x <= self.field_max_x) {
            return Err(SettingsError::EmptyField {
                min: self.field_min_x,
                max: self.field_max_x,
            });
        }
        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        log::debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::info!("Loading settings from {}", path.display());
        Self::from_json(&json)
    }

    /// Write settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Effective effect volume (0 when muted)
    pub fn effect_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let s = Settings::default();
        assert_eq!(s.max_step, 0.05);
        assert_eq!(s.max_substep_travel, 0.05);
        assert_eq!(s.field_max_x, PLAYING_W);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{"field_max_x": 36.0, "walk_speed": 2.0}"#).unwrap();
        assert_eq!(s.field_max_x, 36.0);
        assert_eq!(s.walk_speed, 2.0);
        assert_eq!(s.jump_speed, JUMP_SPEED);
    }

    #[test]
    fn test_invalid_step_rejected() {
        let err = Settings::from_json(r#"{"max_step": 0.0}"#).unwrap_err();
        assert!(matches!(err, SettingsError::NonPositive("max_step")));

        let err = Settings::from_json(r#"{"field_min_x": 5.0, "field_max_x": 1.0}"#).unwrap_err();
        assert!(matches!(err, SettingsError::EmptyField { .. }));
    }

    #[test]
    fn test_json_round_trip() {
        let s = Settings::for_field_width(36.0);
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(s, back);
    }

    #[test]
    fn test_muted_volume_is_zero() {
        let mut s = Settings::default();
        assert!((s.effect_volume() - 0.8).abs() < 1e-6);
        s.muted = true;
        assert_eq!(s.effect_volume(), 0.0);
    }
}
