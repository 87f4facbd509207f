//! Pose module - keypoint types and input decoding
//!
//! Re-exports only. All logic in submodules.

mod keypoint;
mod frame;

pub use keypoint::{Keypoint, KeypointName, KEYPOINT_COUNT, VISIBILITY_THRESHOLD};
pub use frame::{JsKeypoint, JsPose, Pose, FLAT_LEN, FLAT_STRIDE};
