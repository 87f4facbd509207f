//! Keypoint labels and the single-keypoint type
//!
//! Labels follow the MoveNet / COCO-17 output order so a flat model
//! output can be decoded by index.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Minimum confidence for a keypoint to count as visible
pub const VISIBILITY_THRESHOLD: f32 = 0.3;

/// Number of keypoints produced per pose
pub const KEYPOINT_COUNT: usize = 17;

// ============================================================================
// KEYPOINT NAMES (MoveNet / COCO order)
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeypointName {
    Nose,
    LeftEye,
    RightEye,
    LeftEar,
    RightEar,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl KeypointName {
    /// All labels in model output order
    pub const ALL: [KeypointName; KEYPOINT_COUNT] = [
        KeypointName::Nose,
        KeypointName::LeftEye,
        KeypointName::RightEye,
        KeypointName::LeftEar,
        KeypointName::RightEar,
        KeypointName::LeftShoulder,
        KeypointName::RightShoulder,
        KeypointName::LeftElbow,
        KeypointName::RightElbow,
        KeypointName::LeftWrist,
        KeypointName::RightWrist,
        KeypointName::LeftHip,
        KeypointName::RightHip,
        KeypointName::LeftKnee,
        KeypointName::RightKnee,
        KeypointName::LeftAnkle,
        KeypointName::RightAnkle,
    ];

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KeypointName::Nose => "nose",
            KeypointName::LeftEye => "left_eye",
            KeypointName::RightEye => "right_eye",
            KeypointName::LeftEar => "left_ear",
            KeypointName::RightEar => "right_ear",
            KeypointName::LeftShoulder => "left_shoulder",
            KeypointName::RightShoulder => "right_shoulder",
            KeypointName::LeftElbow => "left_elbow",
            KeypointName::RightElbow => "right_elbow",
            KeypointName::LeftWrist => "left_wrist",
            KeypointName::RightWrist => "right_wrist",
            KeypointName::LeftHip => "left_hip",
            KeypointName::RightHip => "right_hip",
            KeypointName::LeftKnee => "left_knee",
            KeypointName::RightKnee => "right_knee",
            KeypointName::LeftAnkle => "left_ankle",
            KeypointName::RightAnkle => "right_ankle",
        }
    }
}

impl FromStr for KeypointName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter().copied().find(|name| name.as_str() == s).ok_or(())
    }
}

// ============================================================================
// KEYPOINT
// ============================================================================

/// A single 2D keypoint in image space (origin top-left, y grows downward)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
    /// Detector confidence, `None` when the model gave no score
    pub confidence: Option<f32>,
    pub name: KeypointName,
}

impl Keypoint {
    pub fn new(name: KeypointName, x: f32, y: f32, confidence: f32) -> Self {
        Self {
            x,
            y,
            confidence: Some(confidence),
            name,
        }
    }

    /// Visible = scored above the threshold with finite coordinates.
    /// Non-finite values are treated as a missing keypoint.
    pub fn is_visible(&self) -> bool {
        match self.confidence {
            Some(c) => {
                c.is_finite() && c > VISIBILITY_THRESHOLD && self.x.is_finite() && self.y.is_finite()
            }
            None => false,
        }
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}
