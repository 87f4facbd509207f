//! Squat analysis
//!
//! Down = knees bent below 120° with the hips dropped close to knee height.
//! Scored on depth (knee angle near 90°) and hip/knee/ankle proportion.

use super::analyzer::mean;
use super::angles::joint_angle;
use super::exercise::{AnalysisResult, PostureState};
use crate::pose::{KeypointName, Pose};

pub const MISSING_FEEDBACK: &str = "Unable to detect body position";

const DOWN_KNEE_ANGLE: f32 = 120.0;
const DOWN_HEIGHT_RATIO: f32 = 1.2;
const STANDING_KNEE_ANGLE: f32 = 160.0;

pub fn analyze(pose: &Pose) -> AnalysisResult {
    let Some([l_hip, l_knee, l_ankle, _l_shoulder, r_hip, r_knee, r_ankle]) = pose.require([
        KeypointName::LeftHip,
        KeypointName::LeftKnee,
        KeypointName::LeftAnkle,
        KeypointName::LeftShoulder,
        KeypointName::RightHip,
        KeypointName::RightKnee,
        KeypointName::RightAnkle,
    ]) else {
        return AnalysisResult::degraded(MISSING_FEEDBACK);
    };

    let knee_angle = mean(
        joint_angle(l_hip, l_knee, l_ankle),
        joint_angle(r_hip, r_knee, r_ankle),
    );

    // Hip-to-knee drop relative to shin length, left side
    let hip_knee = (l_hip.y - l_knee.y).abs();
    let knee_ankle = (l_knee.y - l_ankle.y).abs();
    let height_ratio = hip_knee / knee_ankle;

    let is_down = knee_angle < DOWN_KNEE_ANGLE && height_ratio < DOWN_HEIGHT_RATIO;

    if !is_down {
        let score = if knee_angle > STANDING_KNEE_ANGLE { 95.0 } else { 70.0 };
        return AnalysisResult::new(score, "Ready - begin squat", PostureState::Up);
    }

    let depth_score = (100.0 - (90.0 - knee_angle).abs() * 2.0).max(0.0);
    let alignment_score = if height_ratio > 0.8 {
        100.0
    } else {
        height_ratio * 125.0
    };
    let score = depth_score * 0.6 + alignment_score * 0.4;

    let feedback = if score < 70.0 {
        if knee_angle > 100.0 {
            "Go deeper - squat lower"
        } else if knee_angle < 80.0 {
            "Not too deep - rise slightly"
        } else {
            "Keep your back straight"
        }
    } else {
        "Great form! 👍"
    };

    AnalysisResult::new(score, feedback, PostureState::Down)
}
