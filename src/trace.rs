//! Landmark trace files.
//!
//! A trace is a JSON-lines file with one record per captured frame,
//! standing in for the live camera plus pose estimator during offline
//! runs and tests. A record with missing arm joints marks a frame
//! where detection failed.

use crate::landmarks::{Landmark, LandmarkFrame};
use crate::session::{FrameSource, Grab};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One line of a landmark trace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceRecord {
    /// Right shoulder position, absent when detection failed
    pub right_shoulder: Option<Landmark>,
    /// Right elbow position, absent when detection failed
    pub right_elbow: Option<Landmark>,
}

impl TraceRecord {
    /// A frame with the tracked arm detected
    #[must_use]
    pub fn detected(shoulder: Landmark, elbow: Landmark) -> Self {
        Self {
            right_shoulder: Some(shoulder),
            right_elbow: Some(elbow),
        }
    }

    /// A frame where the pose estimator found no person
    #[must_use]
    pub fn missed() -> Self {
        Self {
            right_shoulder: None,
            right_elbow: None,
        }
    }
}

/// Frame source reading a JSON-lines landmark trace
pub struct TraceSource<R: BufRead> {
    reader: R,
    line_number: usize,
}

impl TraceSource<BufReader<File>> {
    /// Open a trace file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TraceSource<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self { reader, line_number: 0 }
    }
}

impl<R: BufRead> FrameSource for TraceSource<R> {
    fn grab(&mut self) -> Result<Grab> {
        let mut line = String::new();
        loop {
            line.clear();
            let bytes = self.reader.read_line(&mut line)?;
            if bytes == 0 {
                return Ok(Grab::EndOfStream);
            }
            self.line_number += 1;
            if !line.trim().is_empty() {
                break;
            }
        }

        let record: TraceRecord = serde_json::from_str(line.trim())
            .map_err(|e| Error::TraceFormat(format!("line {}: {e}", self.line_number)))?;

        match (record.right_shoulder, record.right_elbow) {
            (Some(shoulder), Some(elbow)) => Ok(Grab::Frame(LandmarkFrame::from_right_arm(shoulder, elbow))),
            _ => Ok(Grab::NoDetection),
        }
    }
}
