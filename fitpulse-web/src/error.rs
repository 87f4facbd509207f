//! Boundary errors
//!
//! Only malformed input coming from JavaScript produces these. Missing
//! keypoints and unknown exercises inside the analyzer are result values.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("unknown exercise id: {0}")]
    UnknownExercise(String),

    #[error("invalid keypoint data length: {len} (expected {expected})")]
    InvalidKeypointData { len: usize, expected: usize },

    #[error("invalid counter config: {0}")]
    InvalidConfig(String),

    #[error("failed to decode input: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_wasm_bindgen::Error> for Error {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
