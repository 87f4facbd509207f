//! Session module - per-attempt state owned by the caller
//!
//! Re-exports only. All logic in submodules.

mod exercise_session;
mod frame_stats;

pub use exercise_session::{ExerciseSession, FrameReport, NO_PERSON_FEEDBACK};
pub use frame_stats::{FrameStats, FrameStatsSnapshot, FPS_WINDOW};
