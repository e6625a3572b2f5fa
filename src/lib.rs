//! Shoulder angle evaluation library for physiotherapy posture comparison.
//!
//! This library provides the per-frame evaluation core of a clinical
//! posture-comparison tool:
//! 1. A pure geometry step deriving the upper-arm angle against the
//!    image vertical from shoulder and elbow landmarks
//! 2. A plane validator gating the frontal-plane (abduction) metric on
//!    the lateral-to-depth displacement ratio
//! 3. Bounded rolling-window smoothing per metric
//! 4. Classification of the smoothed angles against fixed target
//!    angles with an inclusive tolerance
//!
//! Pose estimation, GUI rendering, patient storage and PDF stamping
//! live outside this crate, behind the [`session::FrameSource`] and
//! [`session::EvaluationSink`] boundaries.
//!
//! # Examples
//!
//! ## Evaluating frames
//!
//! ```
//! use shoulder_rehab::exercise::ExerciseMode;
//! use shoulder_rehab::landmarks::{Landmark, LandmarkFrame};
//! use shoulder_rehab::pipeline::FrameEvaluator;
//!
//! let mut evaluator = FrameEvaluator::new(
//!     ExerciseMode::Abduction,
//!     vec![90.0, 180.0],
//!     10.0,
//!     1.2,
//!     5,
//! );
//!
//! // Right arm raised horizontally to the side
//! let frame = LandmarkFrame::from_right_arm(
//!     Landmark::new(0.5, 0.4, 0.0),
//!     Landmark::new(0.7, 0.4, 0.01),
//! );
//!
//! let result = evaluator.evaluate(Some(&frame));
//! assert!(result.flexion_on_target);
//! assert_eq!(result.abduction_on_target, Some(true));
//! ```
//!
//! ## Running a session over a landmark trace
//!
//! ```no_run
//! use shoulder_rehab::config::Config;
//! use shoulder_rehab::exercise::mode_for_exercise;
//! use shoulder_rehab::pipeline::FrameEvaluator;
//! use shoulder_rehab::report::{ExercisePrescription, PatientInfo, ReportAssembler};
//! use shoulder_rehab::session::{ComparisonSession, ReferenceClip};
//! use shoulder_rehab::trace::TraceSource;
//!
//! # fn main() -> shoulder_rehab::Result<()> {
//! let config = Config::default();
//! let mode = mode_for_exercise("Dumbbell rear delt fly");
//!
//! let mut session = ComparisonSession::new(FrameEvaluator::from_config(mode, &config));
//! let mut assembler = ReportAssembler::new(
//!     PatientInfo::default(),
//!     "Dumbbell rear delt fly".to_string(),
//!     mode,
//!     config.evaluation.target_angles.clone(),
//!     ExercisePrescription::default(),
//! );
//!
//! struct NoClip;
//! impl ReferenceClip for NoClip {
//!     fn advance(&mut self) -> shoulder_rehab::Result<bool> { Ok(true) }
//!     fn rewind(&mut self) -> shoulder_rehab::Result<()> { Ok(()) }
//! }
//!
//! let source = TraceSource::open("session.jsonl")?;
//! let summary = session.run(source, None::<NoClip>, &mut assembler)?;
//! println!("Processed {} frames", summary.frames_processed);
//!
//! assembler.finish().write_json("report.json")?;
//! # Ok(())
//! # }
//! ```

/// Shoulder segment geometry
pub mod geometry;

/// Target angle classification
pub mod targets;

/// Movement plane validation for the abduction metric
pub mod plane;

/// Temporal smoothing of per-frame angle measurements
pub mod smoothing;

/// Per-frame evaluation pipeline
pub mod pipeline;

/// Pose landmark model
pub mod landmarks;

/// Exercise catalogue and mode resolution
pub mod exercise;

/// Comparison session loop
pub mod session;

/// Landmark trace files
pub mod trace;

/// Report record assembly
pub mod report;

/// Error types and result handling
pub mod error;

/// Configuration management
pub mod config;

/// Constants used throughout the application
pub mod constants;

pub use error::{Error, Result};
