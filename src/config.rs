//! Configuration management for the posture comparison application

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Angle evaluation configuration
    pub evaluation: EvaluationConfig,

    /// Temporal smoothing configuration
    pub smoothing: SmoothingConfig,

    /// Comparison session configuration
    pub session: SessionConfig,

    /// Report output configuration
    pub report: ReportConfig,
}

/// Angle evaluation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Target angles in degrees the measured angle is compared against
    pub target_angles: Vec<f64>,

    /// Classification tolerance around each target, in degrees
    pub tolerance_deg: f64,

    /// Lateral-to-depth displacement ratio gating abduction
    pub plane_ratio_threshold: f64,
}

/// Temporal smoothing parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// Rolling window size per metric
    pub window_size: usize,
}

/// Comparison session parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Exercise evaluated when none is selected
    pub default_exercise: String,

    /// Restart the reference clip when it reaches end of stream
    pub loop_reference: bool,
}

/// Report output parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Where the serialized report record is written
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            evaluation: EvaluationConfig::default(),
            smoothing: SmoothingConfig::default(),
            session: SessionConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            target_angles: crate::constants::DEFAULT_TARGET_ANGLES.to_vec(),
            tolerance_deg: crate::constants::DEFAULT_TOLERANCE_DEG,
            plane_ratio_threshold: crate::constants::DEFAULT_PLANE_RATIO_THRESHOLD,
        }
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            window_size: crate::constants::DEFAULT_SMOOTHING_WINDOW,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_exercise: "Shoulder flexion with stick".to_string(),
            loop_reference: true,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("report.json"),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.evaluation.target_angles.is_empty() {
            return Err(Error::ConfigError(
                "At least one target angle must be configured".to_string(),
            ));
        }
        for &target in &self.evaluation.target_angles {
            if !(0.0..=180.0).contains(&target) {
                return Err(Error::ConfigError(format!(
                    "Target angle {target} must be between 0 and 180 degrees"
                )));
            }
        }
        if self.evaluation.tolerance_deg < 0.0 {
            return Err(Error::ConfigError("Tolerance must be non-negative".to_string()));
        }
        if self.evaluation.plane_ratio_threshold <= 0.0 {
            return Err(Error::ConfigError(
                "Plane ratio threshold must be greater than 0".to_string(),
            ));
        }
        if self.smoothing.window_size == 0 {
            return Err(Error::ConfigError(
                "Smoothing window size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Posture Comparison Configuration

# Angle evaluation
evaluation:
  target_angles: [90.0, 180.0]
  tolerance_deg: 10.0
  plane_ratio_threshold: 1.2

# Temporal smoothing
smoothing:
  window_size: 5

# Comparison session
session:
  default_exercise: "Shoulder flexion with stick"
  loop_reference: true

# Report output
report:
  output_path: "report.json"
"#;
