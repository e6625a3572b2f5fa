//! Exercise catalogue and evaluation mode resolution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which anatomical plane an exercise is evaluated in.
///
/// The mode never changes the numeric computation; it only selects
/// which metric the consuming renderer highlights as primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseMode {
    /// Sagittal-plane arm raise
    Flexion,
    /// Frontal-plane arm raise
    Abduction,
}

impl fmt::Display for ExerciseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flexion => write!(f, "Flexion"),
            Self::Abduction => write!(f, "Abduction"),
        }
    }
}

/// Exercise names offered by the application, with their modes
pub const EXERCISES: [(&str, ExerciseMode); 8] = [
    ("Shoulder flexion with stick", ExerciseMode::Flexion),
    ("Figure 8 arms lying down", ExerciseMode::Flexion),
    ("Seated two arm dumbbell triceps extension", ExerciseMode::Flexion),
    ("Dumbbell rear delt fly", ExerciseMode::Abduction),
    ("Half squat with shoulder press", ExerciseMode::Flexion),
    ("Press Arnold", ExerciseMode::Flexion),
    ("Standing wall pull-ups", ExerciseMode::Abduction),
    ("Openings and shoulder rotations with bottles", ExerciseMode::Flexion),
];

/// Resolve an exercise name to its evaluation mode.
///
/// Every name resolves deterministically: names outside the catalogue
/// fall back to `Flexion`.
#[must_use]
pub fn mode_for_exercise(name: &str) -> ExerciseMode {
    EXERCISES
        .iter()
        .find(|(exercise, _)| *exercise == name)
        .map_or(ExerciseMode::Flexion, |(_, mode)| *mode)
}
