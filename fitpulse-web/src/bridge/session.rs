//! WorkoutSession - the JS-facing handle around `ExerciseSession`
//!
//! JavaScript owns the handle and calls it once per video frame. Results
//! come back as plain objects through serde-wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::analysis::{analyze_by_id, ExerciseKind};
use crate::counter::CounterConfig;
use crate::error::Error;
use crate::pose::{JsPose, Pose};
use crate::session::ExerciseSession;

// ============================================================================
// INPUT DECODING
// ============================================================================

/// `null` / `undefined` mean nobody was detected
fn decode_pose(value: JsValue) -> Result<Option<Pose>, Error> {
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }
    let pose: JsPose = serde_wasm_bindgen::from_value(value)?;
    Ok(Some(Pose::from(pose)))
}

/// Empty buffer means nobody was detected
fn decode_flat(data: &[f32]) -> Result<Option<Pose>, Error> {
    if data.is_empty() {
        return Ok(None);
    }
    Pose::from_flat(data).map(Some).map_err(|err| {
        log::warn!("rejected keypoint buffer: {}", err);
        err
    })
}

fn to_js<T: serde::Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

// ============================================================================
// SESSION HANDLE
// ============================================================================

#[wasm_bindgen]
pub struct WorkoutSession {
    inner: ExerciseSession,
}

#[wasm_bindgen]
impl WorkoutSession {
    /// Start a session for one of the ids returned by `listExercises()`
    #[wasm_bindgen(constructor)]
    pub fn new(exercise_id: &str) -> WorkoutSession {
        WorkoutSession {
            inner: ExerciseSession::from_id(exercise_id),
        }
    }

    /// Process one frame given as 17 × [x, y, score] values.
    /// An empty array is a frame without a person.
    #[wasm_bindgen(js_name = processFrame)]
    pub fn process_frame(&mut self, data: &[f32]) -> Result<JsValue, JsValue> {
        let pose = decode_flat(data)?;
        Ok(to_js(&self.inner.process(pose.as_ref())))
    }

    /// Process one TensorFlow.js pose object, or `null` for no person
    #[wasm_bindgen(js_name = processPose)]
    pub fn process_pose(&mut self, pose: JsValue) -> Result<JsValue, JsValue> {
        let pose = decode_pose(pose)?;
        Ok(to_js(&self.inner.process(pose.as_ref())))
    }

    #[wasm_bindgen(js_name = noDetection)]
    pub fn no_detection(&mut self) -> JsValue {
        to_js(&self.inner.no_detection())
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Switch to another exercise and start counting from zero
    #[wasm_bindgen(js_name = switchExercise)]
    pub fn switch_exercise(&mut self, exercise_id: &str) -> Result<(), JsValue> {
        let kind: ExerciseKind = exercise_id.parse()?;
        self.inner.switch_exercise(kind);
        Ok(())
    }

    /// Counter tuning: `{ debounceFrames?, minScoreToCount? }`
    pub fn configure(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config: CounterConfig = serde_wasm_bindgen::from_value(config).map_err(Error::from)?;
        self.inner.set_config(config)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = recordFrame)]
    pub fn record_frame(&mut self, now_ms: f64, inference_ms: f64) {
        self.inner.stats_mut().record_frame(now_ms, inference_ms);
    }

    #[wasm_bindgen(js_name = frameStats)]
    pub fn frame_stats(&self) -> JsValue {
        to_js(&self.inner.stats().snapshot())
    }

    #[wasm_bindgen(getter, js_name = totalReps)]
    pub fn total_reps(&self) -> u32 {
        self.inner.total_reps()
    }

    #[wasm_bindgen(getter, js_name = targetReps)]
    pub fn target_reps(&self) -> u32 {
        self.inner.target_reps()
    }

    #[wasm_bindgen(getter, js_name = exerciseId)]
    pub fn exercise_id(&self) -> String {
        self.inner.exercise_id().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn fps(&self) -> f64 {
        self.inner.stats().fps()
    }

    #[wasm_bindgen(getter, js_name = inferenceMs)]
    pub fn inference_ms(&self) -> f64 {
        self.inner.stats().inference_ms()
    }
}

// ============================================================================
// STATELESS ENTRY POINTS
// ============================================================================

/// Score a single pose without touching any counter.
/// `null` is scored as an empty pose.
#[wasm_bindgen(js_name = analyzePose)]
pub fn analyze_pose(pose: JsValue, exercise_id: &str) -> Result<JsValue, JsValue> {
    let pose = decode_pose(pose)?.unwrap_or_default();
    Ok(to_js(&analyze_by_id(&pose, exercise_id)))
}

/// Exercise catalogue: `[{ id, name, targetReps }]`
#[wasm_bindgen(js_name = listExercises)]
pub fn list_exercises() -> JsValue {
    let catalogue: Vec<_> = ExerciseKind::ALL.iter().map(|kind| kind.info()).collect();
    to_js(&catalogue)
}
