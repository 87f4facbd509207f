//! Exercise dispatch
//!
//! One analyzer per `ExerciseKind`, selected by a single match. Every
//! analyzer is a pure function of the pose.

use super::exercise::{AnalysisResult, ExerciseKind};
use super::{jumping_jack, lunge, pushup, squat};
use crate::pose::Pose;

pub const UNKNOWN_EXERCISE_FEEDBACK: &str = "Unknown exercise type";

/// Score one pose for the given exercise
pub fn analyze_pose(pose: &Pose, kind: ExerciseKind) -> AnalysisResult {
    match kind {
        ExerciseKind::Squat => squat::analyze(pose),
        ExerciseKind::Lunge => lunge::analyze(pose),
        ExerciseKind::Pushup => pushup::analyze(pose),
        ExerciseKind::JumpingJack => jumping_jack::analyze(pose),
    }
}

/// Score one pose for an exercise id coming from the front-end.
/// Unknown ids give a zero-score result instead of an error.
pub fn analyze_by_id(pose: &Pose, exercise_id: &str) -> AnalysisResult {
    match exercise_id.parse::<ExerciseKind>() {
        Ok(kind) => analyze_pose(pose, kind),
        Err(err) => {
            log::warn!("{}", err);
            unknown_exercise()
        }
    }
}

pub fn unknown_exercise() -> AnalysisResult {
    AnalysisResult::degraded(UNKNOWN_EXERCISE_FEEDBACK)
}

pub(crate) fn mean(a: f32, b: f32) -> f32 {
    (a + b) / 2.0
}

/// Build a fully confident pose from (name, x, y) triples
#[cfg(test)]
pub(crate) fn pose_of(points: &[(crate::pose::KeypointName, f32, f32)]) -> Pose {
    Pose::new(
        points
            .iter()
            .map(|&(name, x, y)| crate::pose::Keypoint::new(name, x, y, 0.9))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::PostureState;
    use crate::pose::{Keypoint, KeypointName, FLAT_LEN};
    use proptest::prelude::*;

    #[test]
    fn test_unknown_id_degrades() {
        let pose = Pose::default();
        let result = analyze_by_id(&pose, "burpees");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.posture, PostureState::Up);
        assert_eq!(result.feedback, UNKNOWN_EXERCISE_FEEDBACK);
    }

    #[test]
    fn test_empty_pose_degrades_for_every_exercise() {
        let pose = Pose::default();
        for kind in ExerciseKind::ALL {
            let result = analyze_pose(&pose, kind);
            assert_eq!(result.score, 0.0);
            assert_eq!(result.posture, PostureState::Up);
        }
        assert_eq!(
            analyze_by_id(&pose, "pushups").feedback,
            pushup::MISSING_FEEDBACK
        );
    }

    #[test]
    fn test_nan_keypoint_counts_as_missing() {
        let mut pose = pose_of(&[
            (KeypointName::LeftShoulder, 100.0, 200.0),
            (KeypointName::LeftElbow, 100.0, 300.0),
            (KeypointName::LeftWrist, 200.0, 300.0),
            (KeypointName::RightShoulder, 400.0, 200.0),
            (KeypointName::RightElbow, 400.0, 300.0),
            (KeypointName::RightWrist, 500.0, 300.0),
            (KeypointName::LeftHip, 100.0, 220.0),
        ])
        .keypoints()
        .to_vec();
        pose.push(Keypoint::new(KeypointName::RightHip, f32::NAN, 220.0, 0.9));

        let result = analyze_pose(&Pose::new(pose), ExerciseKind::Pushup);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.feedback, pushup::MISSING_FEEDBACK);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let data: Vec<f32> = (0..FLAT_LEN)
            .map(|i| if i % 3 == 2 { 0.9 } else { (i * 37 % 480) as f32 })
            .collect();
        let pose = Pose::from_flat(&data).unwrap();
        for kind in ExerciseKind::ALL {
            let first = analyze_pose(&pose, kind);
            let second = analyze_pose(&pose, kind);
            assert_eq!(first.score.to_bits(), second.score.to_bits());
            assert_eq!(first, second);
        }
    }

    proptest! {
        #[test]
        fn score_is_always_clamped(
            coords in proptest::collection::vec(-200f32..900.0, FLAT_LEN),
            confidences in proptest::collection::vec(0f32..1.0, FLAT_LEN / 3),
        ) {
            let mut data = coords;
            for (i, c) in confidences.iter().enumerate() {
                data[i * 3 + 2] = *c;
            }
            let pose = Pose::from_flat(&data).unwrap();
            for kind in ExerciseKind::ALL {
                let result = analyze_pose(&pose, kind);
                prop_assert!((0.0..=100.0).contains(&result.score));
            }
        }
    }
}
