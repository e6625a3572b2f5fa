//! Target angle classification.

/// True iff `angle` lies within `tolerance` (inclusive) of at least
/// one target angle. Evaluation short-circuits on the first match.
#[must_use]
pub fn near_any_target(angle: f64, targets: &[f64], tolerance: f64) -> bool {
    targets
        .iter()
        .any(|&t| (t - tolerance) <= angle && angle <= (t + tolerance))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGETS: [f64; 2] = [90.0, 180.0];

    #[test]
    fn test_exact_target_matches() {
        assert!(near_any_target(90.0, &TARGETS, 10.0));
        assert!(near_any_target(180.0, &TARGETS, 10.0));
    }

    #[test]
    fn test_within_tolerance() {
        assert!(near_any_target(95.0, &TARGETS, 10.0));
        assert!(near_any_target(171.0, &TARGETS, 10.0));
    }

    #[test]
    fn test_outside_tolerance() {
        assert!(!near_any_target(79.9, &TARGETS, 10.0));
        assert!(!near_any_target(144.0, &TARGETS, 10.0));
        assert!(!near_any_target(0.0, &TARGETS, 10.0));
    }

    #[test]
    fn test_boundary_is_inclusive() {
        assert!(near_any_target(100.0, &TARGETS, 10.0));
        assert!(near_any_target(80.0, &TARGETS, 10.0));
        assert!(!near_any_target(100.1, &TARGETS, 10.0));
        assert!(!near_any_target(79.99, &TARGETS, 10.0));
    }

    #[test]
    fn test_empty_targets_never_match() {
        assert!(!near_any_target(90.0, &[], 10.0));
    }
}
