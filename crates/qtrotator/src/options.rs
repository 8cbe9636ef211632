//! Rotator options
//!
//! Deserializes from any serde format; missing keys take their defaults and
//! unrecognized keys are ignored.

use qtrotator_animation::{Easing, ParseEasingError};
use qtrotator_core::Millis;
use serde::{Deserialize, Serialize};

/// Default panel transition speed (ms)
pub const DEFAULT_SPEED_MS: Millis = 700;
/// Default panel transition easing
pub const DEFAULT_EASING: &str = "ease";
/// Default rotation interval (ms)
pub const DEFAULT_INTERVAL_MS: Millis = 5000;
/// Shortest rotation interval a rotator accepts (ms)
pub const MIN_INTERVAL_MS: Millis = 1;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RotatorOptions {
    /// Panel opacity transition duration in milliseconds
    #[serde(default = "default_speed")]
    pub speed: Millis,
    /// Panel transition curve name
    #[serde(default = "default_easing")]
    pub easing: String,
    /// Time each panel stays current, in milliseconds; raised to
    /// [`MIN_INTERVAL_MS`] on initialize
    #[serde(default = "default_interval")]
    pub interval: Millis,
}

fn default_speed() -> Millis {
    DEFAULT_SPEED_MS
}

fn default_easing() -> String {
    DEFAULT_EASING.to_string()
}

fn default_interval() -> Millis {
    DEFAULT_INTERVAL_MS
}

impl Default for RotatorOptions {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            easing: default_easing(),
            interval: default_interval(),
        }
    }
}

impl RotatorOptions {
    pub fn speed(mut self, speed: Millis) -> Self {
        self.speed = speed;
        self
    }

    pub fn easing(mut self, easing: impl Into<String>) -> Self {
        self.easing = easing.into();
        self
    }

    pub fn interval(mut self, interval: Millis) -> Self {
        self.interval = interval;
        self
    }

    /// Parse the configured easing curve
    pub fn parse_easing(&self) -> Result<Easing, ParseEasingError> {
        self.easing.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RotatorOptions::default();
        assert_eq!(options.speed, 700);
        assert_eq!(options.easing, "ease");
        assert_eq!(options.interval, 5000);
        assert_eq!(options.parse_easing(), Ok(Easing::Ease));
    }

    #[test]
    fn test_builder_overrides() {
        let options = RotatorOptions::default()
            .speed(300)
            .easing("ease-in-out")
            .interval(2000);
        assert_eq!(options.speed, 300);
        assert_eq!(options.parse_easing(), Ok(Easing::EaseInOut));
        assert_eq!(options.interval, 2000);
    }
}
