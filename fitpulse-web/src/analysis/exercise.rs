//! Exercise kinds, posture states and the per-frame analysis result

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// Supported exercises
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExerciseKind {
    Squat,
    Lunge,
    Pushup,
    JumpingJack,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 4] = [
        ExerciseKind::Lunge,
        ExerciseKind::Pushup,
        ExerciseKind::Squat,
        ExerciseKind::JumpingJack,
    ];

    /// Stable id used by the front-end
    pub fn id(&self) -> &'static str {
        match self {
            ExerciseKind::Squat => "squats",
            ExerciseKind::Lunge => "lunges",
            ExerciseKind::Pushup => "pushups",
            ExerciseKind::JumpingJack => "jumping-jacks",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExerciseKind::Squat => "Squats",
            ExerciseKind::Lunge => "Lunges",
            ExerciseKind::Pushup => "Push-ups",
            ExerciseKind::JumpingJack => "Jumping Jacks",
        }
    }

    /// Repetitions needed to finish one attempt
    pub fn target_reps(&self) -> u32 {
        match self {
            ExerciseKind::Lunge => 10,
            ExerciseKind::Pushup => 10,
            ExerciseKind::Squat => 15,
            ExerciseKind::JumpingJack => 20,
        }
    }

    pub fn info(&self) -> ExerciseInfo {
        ExerciseInfo {
            id: self.id(),
            name: self.name(),
            target_reps: self.target_reps(),
        }
    }
}

impl FromStr for ExerciseKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| Error::UnknownExercise(s.to_string()))
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Catalogue entry exposed to the exercise picker
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub target_reps: u32,
}

/// Binary exercise phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostureState {
    #[default]
    Up,
    Down,
}

/// Score, feedback and posture for one frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Form quality, always within `[0, 100]`
    pub score: f32,
    pub feedback: &'static str,
    pub posture: PostureState,
}

impl AnalysisResult {
    /// Builds a result with the score clamped into `[0, 100]`.
    /// A NaN score clamps to 0.
    pub fn new(score: f32, feedback: &'static str, posture: PostureState) -> Self {
        Self {
            score: clamp_score(score),
            feedback,
            posture,
        }
    }

    /// Degraded result for a frame that cannot be scored
    pub fn degraded(feedback: &'static str) -> Self {
        Self::new(0.0, feedback, PostureState::Up)
    }
}

pub fn clamp_score(score: f32) -> f32 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}
