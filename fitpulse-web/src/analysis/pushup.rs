//! Push-up analysis

use super::analyzer::mean;
use super::angles::joint_angle;
use super::exercise::{AnalysisResult, PostureState};
use crate::pose::{KeypointName, Pose};

pub const MISSING_FEEDBACK: &str = "Get into push-up position";

const DOWN_ELBOW_ANGLE: f32 = 120.0;
const LOCKED_OUT_ELBOW_ANGLE: f32 = 160.0;
/// Max shoulder/hip height difference for a straight plank, in px
const PLANK_TOLERANCE: f32 = 80.0;

pub fn analyze(pose: &Pose) -> AnalysisResult {
    let Some([l_shoulder, r_shoulder, l_elbow, r_elbow, l_wrist, r_wrist, l_hip, r_hip]) = pose
        .require([
            KeypointName::LeftShoulder,
            KeypointName::RightShoulder,
            KeypointName::LeftElbow,
            KeypointName::RightElbow,
            KeypointName::LeftWrist,
            KeypointName::RightWrist,
            KeypointName::LeftHip,
            KeypointName::RightHip,
        ])
    else {
        return AnalysisResult::degraded(MISSING_FEEDBACK);
    };

    let elbow_angle = mean(
        joint_angle(l_shoulder, l_elbow, l_wrist),
        joint_angle(r_shoulder, r_elbow, r_wrist),
    );
    let shoulder_hip = (mean(l_shoulder.y, r_shoulder.y) - mean(l_hip.y, r_hip.y)).abs();

    let is_down = elbow_angle < DOWN_ELBOW_ANGLE;

    if !is_down {
        let score = if elbow_angle > LOCKED_OUT_ELBOW_ANGLE { 90.0 } else { 70.0 };
        return AnalysisResult::new(score, "Push back up", PostureState::Up);
    }

    let elbow_score = if elbow_angle < 100.0 {
        100.0
    } else {
        (100.0 - (elbow_angle - 90.0) * 2.0).max(0.0)
    };
    let alignment_score = if shoulder_hip < PLANK_TOLERANCE {
        100.0
    } else {
        (100.0 - shoulder_hip).max(0.0)
    };
    let score = elbow_score * 0.7 + alignment_score * 0.3;

    let feedback = if score < 70.0 {
        if elbow_angle > 110.0 {
            "Lower your chest more"
        } else if shoulder_hip > PLANK_TOLERANCE {
            "Keep your body straight"
        } else {
            "Maintain alignment"
        }
    } else {
        "Excellent push-up! 🔥"
    };

    AnalysisResult::new(score, feedback, PostureState::Down)
}
