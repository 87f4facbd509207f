//! Jumping jack analysis
//!
//! "Down" here is the open star position: wrists above the shoulders and
//! feet spread wider than 1.5× shoulder width.

use super::analyzer::mean;
use super::exercise::{AnalysisResult, PostureState};
use crate::pose::{KeypointName, Pose};

pub const MISSING_FEEDBACK: &str = "Stand in view of camera";

const LEG_SPREAD_RATIO: f32 = 1.5;

pub fn analyze(pose: &Pose) -> AnalysisResult {
    let Some([l_shoulder, r_shoulder, l_wrist, r_wrist, l_ankle, r_ankle, nose]) = pose.require([
        KeypointName::LeftShoulder,
        KeypointName::RightShoulder,
        KeypointName::LeftWrist,
        KeypointName::RightWrist,
        KeypointName::LeftAnkle,
        KeypointName::RightAnkle,
        KeypointName::Nose,
    ]) else {
        return AnalysisResult::degraded(MISSING_FEEDBACK);
    };

    let shoulder_y = mean(l_shoulder.y, r_shoulder.y);
    let wrist_y = mean(l_wrist.y, r_wrist.y);
    let arms_up = wrist_y < shoulder_y;

    let leg_span = (l_ankle.x - r_ankle.x).abs();
    let shoulder_span = (l_shoulder.x - r_shoulder.x).abs();
    let legs_apart = leg_span > shoulder_span * LEG_SPREAD_RATIO;

    if !(arms_up && legs_apart) {
        let score = if !arms_up && !legs_apart { 85.0 } else { 60.0 };
        return AnalysisResult::new(score, "Jump with arms and legs", PostureState::Up);
    }

    let arm_score = if wrist_y < nose.y {
        100.0
    } else {
        (100.0 - (wrist_y - nose.y) * 2.0).max(0.0)
    };
    let leg_score = (leg_span / shoulder_span * 40.0).min(100.0);
    let score = arm_score * 0.5 + leg_score * 0.5;

    let feedback = if score < 70.0 {
        if wrist_y > nose.y {
            "Raise your arms higher"
        } else if leg_span < shoulder_span * LEG_SPREAD_RATIO {
            "Spread your legs wider"
        } else {
            "Good effort!"
        }
    } else {
        "Great jumping jack! ⚡"
    };

    AnalysisResult::new(score, feedback, PostureState::Down)
}
