use serde::Deserialize;
use std::time::Duration;

use crate::constants::TRANSITION_TIME;
use crate::error::EngineError;

/// Startup tuning for [`crate::Engine`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Seed for panel rotation and onset colours.
    pub seed: u64,
    pub transition_time: u8,
    /// Delay the host should wait between frames when running as a timed effect.
    pub frame_delay_ms: Option<u64>,
    /// Fixed speed for beat sources instead of the tempo-derived one.
    pub beat_speed: Option<f32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            transition_time: TRANSITION_TIME,
            frame_delay_ms: None,
            beat_speed: None,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if let Some(speed) = self.beat_speed {
            if !speed.is_finite() || speed <= 0.0 {
                return Err(EngineError::Config(format!(
                    "beat_speed must be a positive number, got {speed}"
                )));
            }
        }
        if self.frame_delay_ms == Some(0) {
            return Err(EngineError::Config(
                "frame_delay_ms must be at least 1 when set".into(),
            ));
        }
        Ok(())
    }

    pub fn frame_delay(&self) -> Option<Duration> {
        self.frame_delay_ms.map(Duration::from_millis)
    }
}
