//! Counter module - debounced repetition counting
//!
//! Re-exports only. All logic in submodules.

mod config;
mod rep_counter;

pub use config::{CounterConfig, DEBOUNCE_FRAMES, MIN_SCORE_TO_COUNT};
pub use rep_counter::{CounterUpdate, RepCounter, RepCounterState};
