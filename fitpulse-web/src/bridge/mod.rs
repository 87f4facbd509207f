//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod session;

pub use session::{analyze_pose, list_exercises, WorkoutSession};
