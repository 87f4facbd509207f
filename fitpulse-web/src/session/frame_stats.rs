//! Frame-rate and inference-time tracking
//!
//! The caller's frame loop reports a timestamp and the model's inference
//! time after every frame; FPS is averaged over the last few intervals.

use std::collections::VecDeque;

use serde::Serialize;

/// Number of frame intervals averaged for FPS
pub const FPS_WINDOW: usize = 10;

pub struct FrameStats {
    /// Recent instantaneous FPS samples
    samples: VecDeque<f64>,
    last_timestamp_ms: Option<f64>,
    last_inference_ms: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameStatsSnapshot {
    pub fps: f64,
    pub inference_ms: f64,
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(FPS_WINDOW + 1),
            last_timestamp_ms: None,
            last_inference_ms: 0.0,
        }
    }

    /// Record one processed frame
    ///
    /// - `now_ms`: frame end time (e.g. `performance.now()`)
    /// - `inference_ms`: time spent in the pose model for this frame
    pub fn record_frame(&mut self, now_ms: f64, inference_ms: f64) {
        self.last_inference_ms = inference_ms;

        if let Some(prev) = self.last_timestamp_ms {
            let elapsed = now_ms - prev;
            if elapsed > 0.0 {
                self.samples.push_back(1000.0 / elapsed);
                if self.samples.len() > FPS_WINDOW {
                    self.samples.pop_front();
                }
            }
        }
        self.last_timestamp_ms = Some(now_ms);
    }

    /// Average FPS over the window, 0 until two frames are seen
    pub fn fps(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    pub fn inference_ms(&self) -> f64 {
        self.last_inference_ms
    }

    pub fn snapshot(&self) -> FrameStatsSnapshot {
        FrameStatsSnapshot {
            fps: self.fps(),
            inference_ms: self.last_inference_ms,
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.last_timestamp_ms = None;
        self.last_inference_ms = 0.0;
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}
