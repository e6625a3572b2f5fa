//! Pose landmark model shared by the capture boundary and the
//! evaluation pipeline.
//!
//! Landmarks follow the MediaPipe Pose 33-point layout with normalized
//! image coordinates: x and y in [0, 1] with +Y pointing down, z a
//! relative depth with the same scale as x.

use crate::constants::NUM_POSE_LANDMARKS;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Right shoulder index in the 33-point pose layout
pub const RIGHT_SHOULDER: usize = 12;

/// Right elbow index in the 33-point pose layout
pub const RIGHT_ELBOW: usize = 14;

/// A single 3-D landmark point
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Landmark {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Projection onto the 2-D image plane
    #[must_use]
    pub fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Immutable snapshot of one frame's detected pose landmarks.
///
/// Produced once per capture tick by the pose estimator boundary and
/// consumed exactly once by the evaluation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandmarkFrame {
    landmarks: Vec<Landmark>,
}

impl LandmarkFrame {
    /// Create a frame from a full 33-point landmark set
    pub fn new(landmarks: Vec<Landmark>) -> Result<Self> {
        if landmarks.len() != NUM_POSE_LANDMARKS {
            return Err(Error::InvalidInput(format!(
                "Expected {NUM_POSE_LANDMARKS} landmarks, got {}",
                landmarks.len()
            )));
        }
        Ok(Self { landmarks })
    }

    /// Create a frame where only the tracked right arm carries real
    /// coordinates. Remaining points are zeroed; the pipeline only
    /// reads the shoulder and elbow.
    #[must_use]
    pub fn from_right_arm(shoulder: Landmark, elbow: Landmark) -> Self {
        let mut landmarks = vec![Landmark::default(); NUM_POSE_LANDMARKS];
        landmarks[RIGHT_SHOULDER] = shoulder;
        landmarks[RIGHT_ELBOW] = elbow;
        Self { landmarks }
    }

    /// Landmark at a given pose index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Landmark> {
        self.landmarks.get(index).copied()
    }

    #[must_use]
    pub fn right_shoulder(&self) -> Landmark {
        self.landmarks[RIGHT_SHOULDER]
    }

    #[must_use]
    pub fn right_elbow(&self) -> Landmark {
        self.landmarks[RIGHT_ELBOW]
    }
}
