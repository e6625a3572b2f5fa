//! Movement plane validation for the abduction metric.
//!
//! Abduction (a frontal-plane raise) moves the elbow laterally much
//! more than in depth; flexion (a sagittal-plane raise) does the
//! opposite. The ratio of the two displacements decides whether a
//! frame supports a frontal-plane measurement at all.

use crate::constants::PLANE_RATIO_EPSILON;
use crate::landmarks::Landmark;

/// True iff the lateral-to-depth displacement ratio of the upper arm
/// reaches `ratio_threshold`, qualifying the frame for an abduction
/// measurement.
///
/// Rejection is a gating condition, not an error: the abduction angle
/// for a rejected frame is absent, never zero.
#[must_use]
pub fn is_valid_frontal_plane(shoulder: Landmark, elbow: Landmark, ratio_threshold: f64) -> bool {
    let dx = elbow.x - shoulder.x;
    let dz = elbow.z - shoulder.z;
    let ratio = dx.abs() / (dz.abs() + PLANE_RATIO_EPSILON);
    ratio >= ratio_threshold
}
