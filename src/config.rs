use crate::error::{ConfigError, ConfigResult};

/// Tuning for gesture recognition and the built-in animation
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// Distance the pointer must travel before a press becomes a drag (points)
    pub min_drag_distance: f32,
    /// Time the pointer must be held for a long press (seconds)
    pub long_press_secs: f32,
    /// Movement allowed while holding before the long press is abandoned (points)
    pub long_press_max_distance: f32,
    /// Minimum accumulated twist before a rotation is reported (radians)
    pub min_rotation_angle: f32,
    /// Duration of the tap color and capsule size animation (seconds)
    pub animation_secs: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_drag_distance: 10.0,
            long_press_secs: 0.5,
            long_press_max_distance: 10.0,
            min_rotation_angle: 1.0_f32.to_radians(),
            animation_secs: 0.35,
        }
    }
}

impl GestureConfig {
    /// Check that every threshold is usable by the recognizer
    pub fn validate(&self) -> ConfigResult<()> {
        let thresholds = [
            ("min_drag_distance", self.min_drag_distance),
            ("long_press_secs", self.long_press_secs),
            ("long_press_max_distance", self.long_press_max_distance),
            ("min_rotation_angle", self.min_rotation_angle),
            ("animation_secs", self.animation_secs),
        ];
        for (field, value) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidThreshold { field, value });
            }
        }

        if self.long_press_secs == 0.0 {
            return Err(ConfigError::ZeroLongPress(self.long_press_secs));
        }

        Ok(())
    }
}
