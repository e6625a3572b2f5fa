//! Report record assembly.
//!
//! Retains the latest evaluation result of a session and turns it into
//! the record the surrounding reporting layer stamps onto the exported
//! document. "Not measured" and "measured zero" stay distinguishable
//! end to end: an abduction that never qualified is serialized as
//! null, not as 0.

use crate::constants::REPORT_ANGLE_DECIMALS;
use crate::exercise::ExerciseMode;
use crate::pipeline::EvaluationResult;
use crate::session::EvaluationSink;
use crate::{Error, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Patient details carried into the report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientInfo {
    pub name: String,
    pub age: Option<u32>,
    pub diagnosis: Option<String>,
}

/// Prescription fields entered before the session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExercisePrescription {
    pub repetitions: String,
    pub series: String,
    pub load: String,
}

/// The record handed to the document-stamping layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRecord {
    pub patient: PatientInfo,
    pub date: String,
    pub exercise: String,
    pub mode: ExerciseMode,
    /// Display string for the fixed reference targets
    pub target_summary: String,
    /// Last smoothed flexion angle, rounded for display
    pub flexion_deg: f64,
    /// Last smoothed abduction angle; null when never measured
    pub abduction_deg: Option<f64>,
    pub prescription: ExercisePrescription,
}

impl ReportRecord {
    /// Serialize the record as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Report(format!("Failed to serialize report: {e}")))
    }

    /// Write the record to a JSON file
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Collects the latest evaluation result over a session and assembles
/// the final report record
pub struct ReportAssembler {
    patient: PatientInfo,
    exercise: String,
    mode: ExerciseMode,
    target_angles: Vec<f64>,
    prescription: ExercisePrescription,
    latest: Option<EvaluationResult>,
}

impl ReportAssembler {
    #[must_use]
    pub fn new(
        patient: PatientInfo,
        exercise: String,
        mode: ExerciseMode,
        target_angles: Vec<f64>,
        prescription: ExercisePrescription,
    ) -> Self {
        Self {
            patient,
            exercise,
            mode,
            target_angles,
            prescription,
            latest: None,
        }
    }

    /// Assemble the report from the latest retained result.
    ///
    /// A session that processed no frames at all reports 0° flexion
    /// and an unmeasured abduction.
    #[must_use]
    pub fn finish(self) -> ReportRecord {
        let (flexion, abduction) = match &self.latest {
            Some(result) => (result.flexion_deg, result.abduction_deg),
            None => (0.0, None),
        };

        let target_summary = self
            .target_angles
            .iter()
            .map(|t| format!("{t}°"))
            .collect::<Vec<_>>()
            .join(" / ");

        ReportRecord {
            patient: self.patient,
            date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            exercise: self.exercise,
            mode: self.mode,
            target_summary,
            flexion_deg: round_angle(flexion),
            abduction_deg: abduction.map(round_angle),
            prescription: self.prescription,
        }
    }
}

impl EvaluationSink for ReportAssembler {
    fn on_result(&mut self, result: &EvaluationResult) -> Result<()> {
        self.latest = Some(result.clone());
        Ok(())
    }
}

fn round_angle(angle: f64) -> f64 {
    let factor = 10f64.powi(REPORT_ANGLE_DECIMALS);
    (angle * factor).round() / factor
}
