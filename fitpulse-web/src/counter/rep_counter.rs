//! Debounced repetition counter
//!
//! Turns the per-frame (posture, score) stream into a repetition count.
//! A posture change only counts once it has been seen on `debounce_frames`
//! consecutive frames, which rejects single-frame misclassifications from
//! the pose model. A Down → Up cycle is credited only if the frame that
//! confirms Up scores at least `min_score_to_count`.

use serde::Serialize;

use super::config::CounterConfig;
use crate::analysis::PostureState;
use crate::error::Result;

/// Cross-frame state, owned by exactly one session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RepCounterState {
    /// Last confirmed posture
    pub last_posture: PostureState,
    /// Consecutive frames disagreeing with `last_posture`
    pub consecutive_matches: u32,
    /// A Down was confirmed and the matching Up has not arrived yet
    pub pending_down: bool,
    pub total_reps: u32,
}

/// Result of feeding one frame to the counter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterUpdate {
    pub rep_credited: bool,
    pub total_reps: u32,
}

pub struct RepCounter {
    config: CounterConfig,
    state: RepCounterState,
}

impl RepCounter {
    pub fn new() -> Self {
        Self {
            config: CounterConfig::default(),
            state: RepCounterState::default(),
        }
    }

    pub fn with_config(config: CounterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: RepCounterState::default(),
        })
    }

    /// Feed one analyzed frame
    pub fn update(&mut self, posture: PostureState, score: f32) -> CounterUpdate {
        // Posture is binary, so frames that disagree with the confirmed
        // posture are all the same posture. Agreeing frames break the run.
        if posture == self.state.last_posture {
            self.state.consecutive_matches = 0;
            return self.no_credit();
        }

        self.state.consecutive_matches += 1;
        if self.state.consecutive_matches < self.config.debounce_frames {
            return self.no_credit();
        }

        // Confirmed: the next change needs its own full run
        self.state.consecutive_matches = 0;
        let previous = std::mem::replace(&mut self.state.last_posture, posture);

        match (previous, posture) {
            (PostureState::Up, PostureState::Down) => {
                self.state.pending_down = true;
                log::debug!("posture confirmed: down");
                self.no_credit()
            }
            (PostureState::Down, PostureState::Up) if self.state.pending_down => {
                self.state.pending_down = false;
                if score >= self.config.min_score_to_count {
                    self.state.total_reps += 1;
                    log::info!("rep {} credited (score {:.0})", self.state.total_reps, score);
                    CounterUpdate {
                        rep_credited: true,
                        total_reps: self.state.total_reps,
                    }
                } else {
                    log::debug!(
                        "cycle closed without credit (score {:.0} < {:.0})",
                        score,
                        self.config.min_score_to_count
                    );
                    self.no_credit()
                }
            }
            _ => {
                log::debug!("posture confirmed: {:?}", posture);
                self.no_credit()
            }
        }
    }

    fn no_credit(&self) -> CounterUpdate {
        CounterUpdate {
            rep_credited: false,
            total_reps: self.state.total_reps,
        }
    }

    pub fn state(&self) -> &RepCounterState {
        &self.state
    }

    pub fn total_reps(&self) -> u32 {
        self.state.total_reps
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// Replace the tuning; the count and debounce state are kept
    pub fn set_config(&mut self, config: CounterConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.state.consecutive_matches = self.state.consecutive_matches.min(config.debounce_frames - 1);
        Ok(())
    }

    /// Start a new attempt: Up, no pending cycle, zero reps
    pub fn reset(&mut self) {
        self.state = RepCounterState::default();
    }
}

impl Default for RepCounter {
    fn default() -> Self {
        Self::new()
    }
}
