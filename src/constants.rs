//! Constants used throughout the application

/// Number of pose landmarks in a full-body landmark frame
pub const NUM_POSE_LANDMARKS: usize = 33;

/// Default target angles in degrees
pub const DEFAULT_TARGET_ANGLES: [f64; 2] = [90.0, 180.0];

/// Default classification tolerance in degrees
pub const DEFAULT_TOLERANCE_DEG: f64 = 10.0;

/// Default smoothing window size
pub const DEFAULT_SMOOTHING_WINDOW: usize = 5;

/// Default lateral-to-depth displacement ratio that qualifies a
/// frame for abduction measurement
pub const DEFAULT_PLANE_RATIO_THRESHOLD: f64 = 1.2;

/// Epsilon added to the depth displacement before division
pub const PLANE_RATIO_EPSILON: f64 = 1e-6;

/// Segment vectors shorter than this are treated as having no direction
pub const ZERO_VECTOR_EPSILON: f64 = 1e-9;

/// Decimal places kept when rounding angles for the report
pub const REPORT_ANGLE_DECIMALS: i32 = 1;
