//! Lunge analysis
//!
//! The more-bent knee is taken as the front leg. Down requires that knee
//! under 110° and the hips at least 30px above the knees' average height.

use super::analyzer::mean;
use super::angles::joint_angle;
use super::exercise::{AnalysisResult, PostureState};
use crate::pose::{KeypointName, Pose};

pub const MISSING_FEEDBACK: &str = "Unable to detect body position";

const DOWN_FRONT_KNEE_ANGLE: f32 = 110.0;
const DOWN_MIN_DEPTH: f32 = 30.0;
const FULL_DEPTH: f32 = 50.0;
const EXTENDED_KNEE_ANGLE: f32 = 150.0;

pub fn analyze(pose: &Pose) -> AnalysisResult {
    let Some([l_hip, l_knee, l_ankle, r_hip, r_knee, r_ankle]) = pose.require([
        KeypointName::LeftHip,
        KeypointName::LeftKnee,
        KeypointName::LeftAnkle,
        KeypointName::RightHip,
        KeypointName::RightKnee,
        KeypointName::RightAnkle,
    ]) else {
        return AnalysisResult::degraded(MISSING_FEEDBACK);
    };

    let left_knee = joint_angle(l_hip, l_knee, l_ankle);
    let right_knee = joint_angle(r_hip, r_knee, r_ankle);
    let front_knee = left_knee.min(right_knee);

    // Positive when the hips sit above the knees (y grows downward)
    let depth = mean(l_knee.y, r_knee.y) - mean(l_hip.y, r_hip.y);

    let is_down = front_knee < DOWN_FRONT_KNEE_ANGLE && depth > DOWN_MIN_DEPTH;

    if !is_down {
        let both_extended = left_knee > EXTENDED_KNEE_ANGLE && right_knee > EXTENDED_KNEE_ANGLE;
        let score = if both_extended { 85.0 } else { 60.0 };
        return AnalysisResult::new(score, "Step forward into lunge", PostureState::Up);
    }

    let front_knee_score = (100.0 - (90.0 - front_knee).abs() * 2.0).max(0.0);
    let depth_score = if depth > FULL_DEPTH {
        100.0
    } else {
        depth / FULL_DEPTH * 100.0
    };
    let score = front_knee_score * 0.6 + depth_score * 0.4;

    let feedback = if score < 70.0 {
        if front_knee > 100.0 {
            "Lower your body more"
        } else if front_knee < 80.0 {
            "Don't go too deep"
        } else {
            "Keep your torso upright"
        }
    } else {
        "Perfect lunge! 💪"
    };

    AnalysisResult::new(score, feedback, PostureState::Down)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::pose_of;
    use crate::pose::KeypointName::*;

    #[test]
    fn test_deep_lunge() {
        // Front knee at 90°, back knee ~130°, hips 60px above the knees
        let pose = pose_of(&[
            (LeftHip, 100.0, 300.0),
            (LeftKnee, 200.0, 300.0),
            (LeftAnkle, 200.0, 400.0),
            (RightHip, 150.0, 300.0),
            (RightKnee, 250.0, 420.0),
            (RightAnkle, 350.0, 420.0),
        ]);
        let result = analyze(&pose);
        assert_eq!(result.posture, PostureState::Down);
        assert!((result.score - 100.0).abs() < 0.01);
        assert_eq!(result.feedback, "Perfect lunge! 💪");
    }

    #[test]
    fn test_half_lunge_asks_to_lower() {
        // Front knee ~106.7°, depth 35px: 0.6 * 66.6 + 0.4 * 70 ≈ 68
        let pose = pose_of(&[
            (LeftHip, 100.0, 270.0),
            (LeftKnee, 200.0, 300.0),
            (LeftAnkle, 200.0, 400.0),
            (RightHip, 150.0, 270.0),
            (RightKnee, 250.0, 310.0),
            (RightAnkle, 350.0, 310.0),
        ]);
        let result = analyze(&pose);
        assert_eq!(result.posture, PostureState::Down);
        assert!(result.score < 70.0 && result.score > 60.0);
        assert_eq!(result.feedback, "Lower your body more");
    }

    #[test]
    fn test_standing_with_straight_legs() {
        let pose = pose_of(&[
            (LeftHip, 200.0, 200.0),
            (LeftKnee, 200.0, 300.0),
            (LeftAnkle, 200.0, 400.0),
            (RightHip, 260.0, 200.0),
            (RightKnee, 260.0, 300.0),
            (RightAnkle, 260.0, 400.0),
        ]);
        let result = analyze(&pose);
        assert_eq!(result.posture, PostureState::Up);
        assert_eq!(result.score, 85.0);
        assert_eq!(result.feedback, "Step forward into lunge");
    }

    #[test]
    fn test_missing_ankle() {
        let pose = pose_of(&[
            (LeftHip, 200.0, 200.0),
            (LeftKnee, 200.0, 300.0),
            (LeftAnkle, 200.0, 400.0),
            (RightHip, 260.0, 200.0),
            (RightKnee, 260.0, 300.0),
        ]);
        assert_eq!(analyze(&pose), AnalysisResult::degraded(MISSING_FEEDBACK));
    }
}
