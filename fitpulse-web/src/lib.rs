//! FitPulse Web - exercise form scoring and rep counting
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! The pose model runs in JavaScript; every frame its keypoints are handed
//! to a `WorkoutSession`, which scores the form and counts repetitions.

pub mod analysis;
pub mod counter;
pub mod error;
pub mod pose;
pub mod session;

mod bridge;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{analyze_pose, list_exercises, WorkoutSession};

pub use analysis::{AnalysisResult, ExerciseKind, PostureState};
pub use counter::{CounterConfig, RepCounter};
pub use error::{Error, Result};
pub use pose::{Keypoint, KeypointName, Pose};
pub use session::{ExerciseSession, FrameReport};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Route `log` output to the browser console.
///
/// @param {string} level - "trace", "debug", "info", "warn" or "error"
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) {
    let log_level = level.parse::<log::Level>().unwrap_or(log::Level::Info);
    wasm_logger::init(wasm_logger::Config::new(log_level));
    log::info!("✅ fitpulse-web initialized (log level {})", log_level);
}

#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
