//! Analysis module - per-exercise form scoring and posture classification
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod exercise;
mod analyzer;
mod squat;
mod lunge;
mod pushup;
mod jumping_jack;

pub use angles::{calculate_angle, joint_angle};
pub use exercise::{clamp_score, AnalysisResult, ExerciseInfo, ExerciseKind, PostureState};
pub use analyzer::{analyze_by_id, analyze_pose, unknown_exercise, UNKNOWN_EXERCISE_FEEDBACK};

#[cfg(test)]
pub(crate) use analyzer::pose_of;
