//! Per-frame angle evaluation pipeline.
//!
//! Composes geometry, plane validation, smoothing and target
//! classification into one structured result per incoming landmark
//! frame. All session-mutable state (the smoothing windows) lives on
//! the evaluator instance.

use crate::config::Config;
use crate::exercise::ExerciseMode;
use crate::geometry::angle_from_vertical;
use crate::landmarks::LandmarkFrame;
use crate::plane::is_valid_frontal_plane;
use crate::smoothing::{AngleSmoother, Metric};
use crate::targets::near_any_target;
use serde::Serialize;

/// Structured result of evaluating one frame.
///
/// Created fresh every frame; the abduction fields are absent whenever
/// the plane validator rejected the frame, never a stale value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    /// Smoothed flexion angle in degrees
    pub flexion_deg: f64,

    /// Smoothed abduction angle in degrees, absent when the frame did
    /// not qualify for a frontal-plane measurement
    pub abduction_deg: Option<f64>,

    /// Whether the smoothed flexion angle is near a target
    pub flexion_on_target: bool,

    /// Whether the smoothed abduction angle is near a target;
    /// indeterminate when abduction was absent this frame
    pub abduction_on_target: Option<bool>,

    /// Mode the session evaluates, selecting the primary metric
    pub mode: ExerciseMode,
}

impl EvaluationResult {
    /// Pass state of the metric selected by the exercise mode.
    ///
    /// Presentation policy only: the consuming renderer highlights
    /// this metric, the other is informational.
    #[must_use]
    pub fn primary_on_target(&self) -> Option<bool> {
        match self.mode {
            ExerciseMode::Flexion => Some(self.flexion_on_target),
            ExerciseMode::Abduction => self.abduction_on_target,
        }
    }
}

/// Per-session frame evaluator
#[derive(Debug, Clone)]
pub struct FrameEvaluator {
    mode: ExerciseMode,
    target_angles: Vec<f64>,
    tolerance_deg: f64,
    plane_ratio_threshold: f64,
    smoother: AngleSmoother,
}

impl FrameEvaluator {
    /// Create an evaluator with explicit parameters
    ///
    /// # Panics
    ///
    /// Panics if `window_size` is zero.
    #[must_use]
    pub fn new(
        mode: ExerciseMode,
        target_angles: Vec<f64>,
        tolerance_deg: f64,
        plane_ratio_threshold: f64,
        window_size: usize,
    ) -> Self {
        Self {
            mode,
            target_angles,
            tolerance_deg,
            plane_ratio_threshold,
            smoother: AngleSmoother::new(window_size),
        }
    }

    /// Create an evaluator from application configuration
    #[must_use]
    pub fn from_config(mode: ExerciseMode, config: &Config) -> Self {
        Self::new(
            mode,
            config.evaluation.target_angles.clone(),
            config.evaluation.tolerance_deg,
            config.evaluation.plane_ratio_threshold,
            config.smoothing.window_size,
        )
    }

    #[must_use]
    pub fn mode(&self) -> ExerciseMode {
        self.mode
    }

    /// Evaluate one captured frame.
    ///
    /// `None` means the pose estimator detected no landmarks: the
    /// flexion window still receives a 0° sample (the same degenerate
    /// policy as a zero-length segment) and abduction stays absent.
    pub fn evaluate(&mut self, frame: Option<&LandmarkFrame>) -> EvaluationResult {
        let (raw_flexion, raw_abduction) = match frame {
            Some(frame) => {
                let shoulder = frame.right_shoulder();
                let elbow = frame.right_elbow();

                let flexion = angle_from_vertical(shoulder.xy(), elbow.xy());

                // Same vertical-angle formula; only the qualification
                // differs between the two metrics.
                let abduction = if is_valid_frontal_plane(shoulder, elbow, self.plane_ratio_threshold) {
                    Some(angle_from_vertical(shoulder.xy(), elbow.xy()))
                } else {
                    None
                };

                (flexion, abduction)
            }
            None => (0.0, None),
        };

        // Flexion is sampled every frame, qualifying or not, so its
        // smoothed value is always present.
        let flexion_deg = self.smoother.push(Metric::Flexion, raw_flexion);
        let abduction_deg = self.smoother.update(Metric::Abduction, raw_abduction);

        let flexion_on_target = near_any_target(flexion_deg, &self.target_angles, self.tolerance_deg);
        let abduction_on_target =
            abduction_deg.map(|angle| near_any_target(angle, &self.target_angles, self.tolerance_deg));

        EvaluationResult {
            flexion_deg,
            abduction_deg,
            flexion_on_target,
            abduction_on_target,
            mode: self.mode,
        }
    }

    /// Clear the smoothing windows for a fresh measurement
    pub fn reset(&mut self) {
        self.smoother.reset();
    }
}
