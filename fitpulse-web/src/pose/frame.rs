//! Pose container and input decoding
//!
//! A `Pose` is built fresh for every frame from whatever shape JavaScript
//! sends: a flat Float32Array (17 × [x, y, score]) or a TensorFlow.js
//! pose object.

use serde::Deserialize;

use super::keypoint::{Keypoint, KeypointName, KEYPOINT_COUNT};
use crate::error::{Error, Result};

/// Values per keypoint in the flat layout: x, y, score
pub const FLAT_STRIDE: usize = 3;

/// Expected length of a flat keypoint buffer
pub const FLAT_LEN: usize = KEYPOINT_COUNT * FLAT_STRIDE;

/// All keypoints detected for one subject in one frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pose {
    keypoints: Vec<Keypoint>,
}

impl Pose {
    pub fn new(keypoints: Vec<Keypoint>) -> Self {
        Self { keypoints }
    }

    /// Decode a flat `[x, y, score] × 17` buffer in model order
    pub fn from_flat(data: &[f32]) -> Result<Self> {
        if data.len() != FLAT_LEN {
            return Err(Error::InvalidKeypointData {
                len: data.len(),
                expected: FLAT_LEN,
            });
        }

        let keypoints = data
            .chunks_exact(FLAT_STRIDE)
            .zip(KeypointName::ALL)
            .map(|(chunk, name)| Keypoint::new(name, chunk[0], chunk[1], chunk[2]))
            .collect();

        Ok(Self { keypoints })
    }

    /// Visible keypoint by name, `None` if absent or below threshold
    pub fn get(&self, name: KeypointName) -> Option<&Keypoint> {
        self.keypoints
            .iter()
            .find(|kp| kp.name == name && kp.is_visible())
    }

    /// All of `names` as visible keypoints, or `None` if any is missing
    pub fn require<const N: usize>(&self, names: [KeypointName; N]) -> Option<[&Keypoint; N]> {
        let found: Vec<&Keypoint> = names
            .iter()
            .map(|&name| self.get(name))
            .collect::<Option<_>>()?;
        found.try_into().ok()
    }

    pub fn keypoints(&self) -> &[Keypoint] {
        &self.keypoints
    }

    pub fn len(&self) -> usize {
        self.keypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }
}

// ============================================================================
// TENSORFLOW.JS POSE SHAPE
// ============================================================================

/// Keypoint as emitted by `@tensorflow-models/pose-detection`
#[derive(Debug, Deserialize)]
pub struct JsKeypoint {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub score: Option<f32>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Pose object as emitted by `@tensorflow-models/pose-detection`
#[derive(Debug, Deserialize)]
pub struct JsPose {
    pub keypoints: Vec<JsKeypoint>,
    #[serde(default)]
    pub score: Option<f32>,
}

impl From<JsPose> for Pose {
    fn from(raw: JsPose) -> Self {
        let keypoints = raw
            .keypoints
            .into_iter()
            .enumerate()
            .filter_map(|(idx, kp)| {
                let name = match kp.name.as_deref() {
                    Some(label) => label.parse::<KeypointName>().ok(),
                    None => KeypointName::from_index(idx),
                };
                if name.is_none() {
                    log::trace!("skipping unrecognised keypoint {:?} at {}", kp.name, idx);
                }
                name.map(|name| Keypoint {
                    x: kp.x,
                    y: kp.y,
                    confidence: kp.score,
                    name,
                })
            })
            .collect();

        Pose { keypoints }
    }
}
