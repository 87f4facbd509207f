//! Rep counter tuning

use serde::Deserialize;

use crate::error::{Error, Result};

/// Consecutive frames needed to confirm a posture change
pub const DEBOUNCE_FRAMES: u32 = 3;

/// Minimum score on the confirming Up frame for a rep to be credited
pub const MIN_SCORE_TO_COUNT: f32 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CounterConfig {
    pub debounce_frames: u32,
    pub min_score_to_count: f32,
}

impl CounterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.debounce_frames == 0 {
            return Err(Error::InvalidConfig(
                "debounceFrames must be at least 1".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.min_score_to_count) {
            return Err(Error::InvalidConfig(format!(
                "minScoreToCount must be within 0..=100, got {}",
                self.min_score_to_count
            )));
        }
        Ok(())
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            debounce_frames: DEBOUNCE_FRAMES,
            min_score_to_count: MIN_SCORE_TO_COUNT,
        }
    }
}
