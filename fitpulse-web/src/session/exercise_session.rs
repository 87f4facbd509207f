//! One workout attempt: analyzer + rep counter + frame stats
//!
//! The caller drives the frame loop and hands in one pose per frame, or
//! `None` when the model found nobody. The session never keeps a pose
//! past the call that delivered it.

use serde::Serialize;

use super::frame_stats::FrameStats;
use crate::analysis::{analyze_pose, unknown_exercise, AnalysisResult, ExerciseKind, PostureState};
use crate::counter::{CounterConfig, RepCounter};
use crate::error::Result;
use crate::pose::Pose;

pub const NO_PERSON_FEEDBACK: &str = "No person detected";

/// Everything the UI needs after one frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub score: f32,
    pub feedback: &'static str,
    pub posture: PostureState,
    pub rep_credited: bool,
    pub total_reps: u32,
    /// Score of the latest Up frame, 0 while nobody is in view
    pub display_accuracy: f32,
    pub reps_left: u32,
    pub complete: bool,
}

pub struct ExerciseSession {
    /// `None` for an id the catalogue does not know
    kind: Option<ExerciseKind>,
    counter: RepCounter,
    last_posture: PostureState,
    display_accuracy: f32,
    stats: FrameStats,
}

impl ExerciseSession {
    pub fn new(kind: ExerciseKind) -> Self {
        Self::build(Some(kind), RepCounter::new())
    }

    /// Session for a front-end exercise id. Unknown ids still give a
    /// session; every frame then reports "Unknown exercise type".
    pub fn from_id(exercise_id: &str) -> Self {
        let kind = match exercise_id.parse::<ExerciseKind>() {
            Ok(kind) => Some(kind),
            Err(err) => {
                log::warn!("{}", err);
                None
            }
        };
        Self::build(kind, RepCounter::new())
    }

    pub fn with_config(kind: ExerciseKind, config: CounterConfig) -> Result<Self> {
        Ok(Self::build(Some(kind), RepCounter::with_config(config)?))
    }

    fn build(kind: Option<ExerciseKind>, counter: RepCounter) -> Self {
        Self {
            kind,
            counter,
            last_posture: PostureState::Up,
            display_accuracy: 0.0,
            stats: FrameStats::new(),
        }
    }

    /// Process one frame
    pub fn process(&mut self, pose: Option<&Pose>) -> FrameReport {
        let Some(pose) = pose else {
            return self.no_detection();
        };

        let result = match self.kind {
            Some(kind) => analyze_pose(pose, kind),
            None => unknown_exercise(),
        };
        let update = self.counter.update(result.posture, result.score);

        self.last_posture = result.posture;
        if result.posture == PostureState::Up {
            self.display_accuracy = result.score;
        }

        self.report(result, update.rep_credited)
    }

    /// Frame without a detected person: no analysis, counter untouched
    pub fn no_detection(&mut self) -> FrameReport {
        self.display_accuracy = 0.0;
        let result = AnalysisResult::new(0.0, NO_PERSON_FEEDBACK, self.last_posture);
        self.report(result, false)
    }

    fn report(&self, result: AnalysisResult, rep_credited: bool) -> FrameReport {
        FrameReport {
            score: result.score,
            feedback: result.feedback,
            posture: result.posture,
            rep_credited,
            total_reps: self.counter.total_reps(),
            display_accuracy: self.display_accuracy,
            reps_left: self.reps_left(),
            complete: self.is_complete(),
        }
    }

    /// Back to a fresh attempt of the same exercise
    pub fn reset(&mut self) {
        self.counter.reset();
        self.last_posture = PostureState::Up;
        self.display_accuracy = 0.0;
        self.stats.clear();
        log::info!("session reset ({})", self.exercise_id());
    }

    /// Change exercise; the count starts over
    pub fn switch_exercise(&mut self, kind: ExerciseKind) {
        self.kind = Some(kind);
        self.reset();
    }

    pub fn set_config(&mut self, config: CounterConfig) -> Result<()> {
        self.counter.set_config(config)
    }

    pub fn kind(&self) -> Option<ExerciseKind> {
        self.kind
    }

    pub fn exercise_id(&self) -> &'static str {
        self.kind.map(|kind| kind.id()).unwrap_or("unknown")
    }

    pub fn total_reps(&self) -> u32 {
        self.counter.total_reps()
    }

    pub fn target_reps(&self) -> u32 {
        self.kind.map(|kind| kind.target_reps()).unwrap_or(0)
    }

    pub fn reps_left(&self) -> u32 {
        self.target_reps().saturating_sub(self.total_reps())
    }

    pub fn is_complete(&self) -> bool {
        self.kind.is_some() && self.total_reps() >= self.target_reps()
    }

    pub fn display_accuracy(&self) -> f32 {
        self.display_accuracy
    }

    pub fn counter(&self) -> &RepCounter {
        &self.counter
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut FrameStats {
        &mut self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::pose_of;
    use crate::analysis::UNKNOWN_EXERCISE_FEEDBACK;
    use crate::counter::RepCounterState;
    use crate::pose::KeypointName::*;

    fn squat_bottom() -> Pose {
        pose_of(&[
            (LeftShoulder, 290.0, 50.0),
            (LeftHip, 290.0, 210.0),
            (LeftKnee, 200.0, 300.0),
            (LeftAnkle, 300.0, 400.0),
            (RightHip, 310.0, 210.0),
            (RightKnee, 400.0, 300.0),
            (RightAnkle, 300.0, 400.0),
        ])
    }

    fn squat_standing() -> Pose {
        pose_of(&[
            (LeftShoulder, 200.0, 50.0),
            (LeftHip, 200.0, 200.0),
            (LeftKnee, 200.0, 300.0),
            (LeftAnkle, 200.0, 400.0),
            (RightHip, 300.0, 200.0),
            (RightKnee, 300.0, 300.0),
            (RightAnkle, 300.0, 400.0),
        ])
    }

    fn squat_rep(session: &mut ExerciseSession) -> Vec<FrameReport> {
        let down = squat_bottom();
        let up = squat_standing();
        let mut reports = Vec::new();
        for _ in 0..3 {
            reports.push(session.process(Some(&down)));
        }
        for _ in 0..3 {
            reports.push(session.process(Some(&up)));
        }
        reports
    }

    #[test]
    fn test_end_to_end_squat() {
        let mut session = ExerciseSession::new(ExerciseKind::Squat);
        let reports = squat_rep(&mut session);

        let bottom = reports[0];
        assert_eq!(bottom.posture, PostureState::Down);
        assert!((bottom.score - 100.0).abs() < 0.01);
        assert_eq!(bottom.feedback, "Great form! 👍");

        let last = reports[5];
        assert!(last.rep_credited);
        assert_eq!(last.total_reps, 1);
        assert_eq!(last.reps_left, 14);
        assert!(!last.complete);
        assert_eq!(last.display_accuracy, 95.0);
        assert_eq!(reports.iter().filter(|r| r.rep_credited).count(), 1);
    }

    #[test]
    fn test_no_detection_does_not_advance_debounce() {
        let mut session = ExerciseSession::new(ExerciseKind::Squat);
        let down = squat_bottom();

        session.process(Some(&down));
        session.process(Some(&down));
        let before = *session.counter().state();

        let report = session.process(None);
        assert_eq!(report.score, 0.0);
        assert_eq!(report.feedback, NO_PERSON_FEEDBACK);
        assert_eq!(report.posture, PostureState::Down);
        assert_eq!(report.display_accuracy, 0.0);
        assert!(!report.rep_credited);
        assert_eq!(*session.counter().state(), before);

        // The third Down frame still confirms
        session.process(Some(&down));
        assert_eq!(session.counter().state().last_posture, PostureState::Down);
    }

    #[test]
    fn test_display_accuracy_tracks_up_frames_only() {
        let mut session = ExerciseSession::new(ExerciseKind::Squat);
        session.process(Some(&squat_standing()));
        assert_eq!(session.display_accuracy(), 95.0);

        session.process(Some(&squat_bottom()));
        assert_eq!(session.display_accuracy(), 95.0);
    }

    #[test]
    fn test_completes_at_target() {
        let config = CounterConfig {
            debounce_frames: 3,
            min_score_to_count: 60.0,
        };
        let mut session = ExerciseSession::with_config(ExerciseKind::Squat, config).unwrap();
        for _ in 0..15 {
            squat_rep(&mut session);
        }
        assert_eq!(session.total_reps(), 15);
        assert_eq!(session.reps_left(), 0);
        assert!(session.is_complete());

        // Extra reps still count; reps_left stays at zero
        let report = *squat_rep(&mut session).last().unwrap();
        assert_eq!(report.total_reps, 16);
        assert_eq!(report.reps_left, 0);
        assert!(report.complete);
    }

    #[test]
    fn test_unknown_exercise_session() {
        let mut session = ExerciseSession::from_id("burpees");
        assert_eq!(session.kind(), None);
        assert_eq!(session.exercise_id(), "unknown");

        let report = session.process(Some(&squat_bottom()));
        assert_eq!(report.score, 0.0);
        assert_eq!(report.feedback, UNKNOWN_EXERCISE_FEEDBACK);
        assert_eq!(report.posture, PostureState::Up);
        assert!(!report.complete);
        assert_eq!(report.reps_left, 0);
    }

    #[test]
    fn test_reset_and_switch() {
        let mut session = ExerciseSession::from_id("squats");
        squat_rep(&mut session);
        session.stats_mut().record_frame(0.0, 5.0);
        session.stats_mut().record_frame(33.0, 5.0);
        assert_eq!(session.total_reps(), 1);

        session.reset();
        assert_eq!(*session.counter().state(), RepCounterState::default());
        assert_eq!(session.display_accuracy(), 0.0);
        assert_eq!(session.stats().fps(), 0.0);

        squat_rep(&mut session);
        session.switch_exercise(ExerciseKind::Lunge);
        assert_eq!(session.kind(), Some(ExerciseKind::Lunge));
        assert_eq!(session.total_reps(), 0);
        assert_eq!(session.reps_left(), 10);
    }
}
