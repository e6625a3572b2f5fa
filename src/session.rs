//! Comparison session loop.
//!
//! Pulls one landmark frame at a time from a capture source, runs the
//! evaluation pipeline, and hands each result to the registered sink.
//! Frames are fully processed before the next is acquired; the loop is
//! cooperative, cancellable at every iteration, and releases its
//! sources before returning.

use crate::pipeline::{EvaluationResult, FrameEvaluator};
use crate::{landmarks::LandmarkFrame, Result};
use log::{debug, info, warn};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

/// One grab from the capture source
#[derive(Debug)]
pub enum Grab {
    /// Landmarks were detected in the frame
    Frame(LandmarkFrame),
    /// A frame was acquired but the pose estimator found no person
    NoDetection,
    /// The source has no more frames
    EndOfStream,
}

/// Per-frame landmark provider crossing into the core.
///
/// The live camera plus pose estimator sit behind this boundary; so
/// does the offline trace reader.
pub trait FrameSource {
    /// Acquire the next frame. An `Err` is a capture failure and is
    /// fatal to the session loop.
    fn grab(&mut self) -> Result<Grab>;
}

/// Reference clip shown alongside the live feed.
///
/// End of stream is non-fatal for a reference clip: the session
/// rewinds it to the first frame and keeps going.
pub trait ReferenceClip {
    /// Advance to the next frame; false at end of stream
    fn advance(&mut self) -> Result<bool>;

    /// Seek back to the first frame
    fn rewind(&mut self) -> Result<()>;
}

/// Consumer of per-frame evaluation results (renderer, report
/// assembler)
pub trait EvaluationSink {
    fn on_result(&mut self, result: &EvaluationResult) -> Result<()>;
}

/// Delivers each result to several sinks in order
pub struct FanoutSink<'a> {
    sinks: Vec<&'a mut dyn EvaluationSink>,
}

impl<'a> FanoutSink<'a> {
    #[must_use]
    pub fn new(sinks: Vec<&'a mut dyn EvaluationSink>) -> Self {
        Self { sinks }
    }
}

impl EvaluationSink for FanoutSink<'_> {
    fn on_result(&mut self, result: &EvaluationResult) -> Result<()> {
        for sink in &mut self.sinks {
            sink.on_result(result)?;
        }
        Ok(())
    }
}

/// Handle for requesting session cancellation from another thread
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Summary returned when a session loop ends
#[derive(Debug, Clone)]
pub struct SessionSummary {
    /// Frames processed before the loop ended
    pub frames_processed: u64,
    /// Last result produced, if any frame was processed
    pub last_result: Option<EvaluationResult>,
    /// Whether the loop ended on a cancellation request
    pub cancelled: bool,
}

/// A running posture comparison.
///
/// Owns the evaluator state and the shared latest-result slot. The
/// loop is the single writer of the slot; a concurrent renderer thread
/// may read snapshots through [`ComparisonSession::latest_result`].
pub struct ComparisonSession {
    evaluator: FrameEvaluator,
    latest: Arc<Mutex<Option<EvaluationResult>>>,
    cancel: CancelToken,
    loop_reference: bool,
}

impl ComparisonSession {
    #[must_use]
    pub fn new(evaluator: FrameEvaluator) -> Self {
        Self {
            evaluator,
            latest: Arc::new(Mutex::new(None)),
            cancel: CancelToken::new(),
            loop_reference: true,
        }
    }

    /// Whether the reference clip restarts when it reaches end of
    /// stream; when disabled the clip simply stops advancing
    pub fn set_loop_reference(&mut self, loop_reference: bool) {
        self.loop_reference = loop_reference;
    }

    /// Token for cancelling the loop from another thread
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Snapshot of the most recent evaluation result
    #[must_use]
    pub fn latest_result(&self) -> Option<EvaluationResult> {
        self.latest.lock().map(|guard| guard.clone()).unwrap_or(None)
    }

    /// Run the session loop until the source ends, capture fails, or
    /// cancellation is requested.
    ///
    /// The source and reference clip are taken by value so they are
    /// released before this returns.
    pub fn run<S, R>(&mut self, mut source: S, mut reference: Option<R>, sink: &mut dyn EvaluationSink) -> Result<SessionSummary>
    where
        S: FrameSource,
        R: ReferenceClip,
    {
        info!("Starting comparison session ({})", self.evaluator.mode());

        let mut frames_processed: u64 = 0;
        let mut cancelled = false;

        loop {
            // No frame is processed after cancellation is requested.
            if self.cancel.is_cancelled() {
                info!("Session cancelled after {frames_processed} frames");
                cancelled = true;
                break;
            }

            let frame = match source.grab() {
                Ok(Grab::Frame(frame)) => Some(frame),
                Ok(Grab::NoDetection) => {
                    debug!("No landmarks detected in frame {frames_processed}");
                    None
                }
                Ok(Grab::EndOfStream) => {
                    info!("Capture source ended after {frames_processed} frames");
                    break;
                }
                Err(e) => {
                    warn!("Capture failure, terminating session: {e}");
                    return Err(e);
                }
            };

            let result = self.evaluator.evaluate(frame.as_ref());

            if let Ok(mut latest) = self.latest.lock() {
                *latest = Some(result.clone());
            }
            sink.on_result(&result)?;

            let mut clip_finished = false;
            if let Some(clip) = reference.as_mut() {
                if !clip.advance()? {
                    if self.loop_reference {
                        debug!("Reference clip ended, looping back to start");
                        clip.rewind()?;
                        clip.advance()?;
                    } else {
                        debug!("Reference clip ended");
                        clip_finished = true;
                    }
                }
            }
            if clip_finished {
                reference = None;
            }

            frames_processed += 1;
        }

        let last_result = self.latest_result();
        drop(source);
        drop(reference);

        Ok(SessionSummary {
            frames_processed,
            last_result,
            cancelled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::ExerciseMode;
    use crate::landmarks::Landmark;
    use crate::Error;

    struct ScriptedSource {
        grabs: Vec<Result<Grab>>,
    }

    impl ScriptedSource {
        fn new(mut grabs: Vec<Result<Grab>>) -> Self {
            grabs.reverse();
            Self { grabs }
        }
    }

    impl FrameSource for ScriptedSource {
        fn grab(&mut self) -> Result<Grab> {
            self.grabs.pop().unwrap_or(Ok(Grab::EndOfStream))
        }
    }

    struct CountingSink {
        results: Vec<EvaluationResult>,
    }

    impl EvaluationSink for CountingSink {
        fn on_result(&mut self, result: &EvaluationResult) -> Result<()> {
            self.results.push(result.clone());
            Ok(())
        }
    }

    struct ShortClip {
        frames: u32,
        position: u32,
        rewinds: Arc<std::sync::atomic::AtomicU32>,
    }

    impl ShortClip {
        fn new(frames: u32) -> (Self, Arc<std::sync::atomic::AtomicU32>) {
            let rewinds = Arc::new(std::sync::atomic::AtomicU32::new(0));
            let clip = Self {
                frames,
                position: 0,
                rewinds: rewinds.clone(),
            };
            (clip, rewinds)
        }
    }

    impl ReferenceClip for ShortClip {
        fn advance(&mut self) -> Result<bool> {
            if self.position >= self.frames {
                return Ok(false);
            }
            self.position += 1;
            Ok(true)
        }

        fn rewind(&mut self) -> Result<()> {
            self.position = 0;
            self.rewinds.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn evaluator() -> FrameEvaluator {
        FrameEvaluator::new(ExerciseMode::Flexion, vec![90.0, 180.0], 10.0, 1.2, 5)
    }

    fn arm_frame() -> LandmarkFrame {
        LandmarkFrame::from_right_arm(Landmark::new(0.5, 0.4, 0.0), Landmark::new(0.7, 0.4, 0.01))
    }

    #[test]
    fn test_loop_processes_until_end_of_stream() {
        let source = ScriptedSource::new(vec![
            Ok(Grab::Frame(arm_frame())),
            Ok(Grab::NoDetection),
            Ok(Grab::Frame(arm_frame())),
            Ok(Grab::EndOfStream),
        ]);
        let mut sink = CountingSink { results: Vec::new() };
        let mut session = ComparisonSession::new(evaluator());

        let summary = session
            .run(source, None::<ShortClip>, &mut sink)
            .unwrap();

        assert_eq!(summary.frames_processed, 3);
        assert!(!summary.cancelled);
        assert_eq!(sink.results.len(), 3);
        assert!(summary.last_result.is_some());
    }

    #[test]
    fn test_capture_failure_is_fatal() {
        let source = ScriptedSource::new(vec![
            Ok(Grab::Frame(arm_frame())),
            Err(Error::Capture("camera unplugged".to_string())),
            Ok(Grab::Frame(arm_frame())),
        ]);
        let mut sink = CountingSink { results: Vec::new() };
        let mut session = ComparisonSession::new(evaluator());

        let result = session.run(source, None::<ShortClip>, &mut sink);

        assert!(result.is_err());
        // Only the frame before the failure was processed
        assert_eq!(sink.results.len(), 1);
    }

    #[test]
    fn test_cancellation_processes_no_further_frames() {
        let source = ScriptedSource::new(vec![Ok(Grab::Frame(arm_frame()))]);
        let mut sink = CountingSink { results: Vec::new() };
        let mut session = ComparisonSession::new(evaluator());

        session.cancel_token().cancel();
        let summary = session.run(source, None::<ShortClip>, &mut sink).unwrap();

        assert!(summary.cancelled);
        assert_eq!(summary.frames_processed, 0);
        assert!(sink.results.is_empty());
    }

    #[test]
    fn test_reference_clip_loops_at_end_of_stream() {
        let source = ScriptedSource::new(vec![
            Ok(Grab::Frame(arm_frame())),
            Ok(Grab::Frame(arm_frame())),
            Ok(Grab::Frame(arm_frame())),
            Ok(Grab::EndOfStream),
        ]);
        let mut sink = CountingSink { results: Vec::new() };
        let mut session = ComparisonSession::new(evaluator());

        let (clip, rewinds) = ShortClip::new(2);
        let summary = session.run(source, Some(clip), &mut sink).unwrap();

        // The clip ran out after two frames and was rewound, while the
        // live loop carried on.
        assert_eq!(summary.frames_processed, 3);
        assert_eq!(rewinds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reference_clip_stops_when_looping_disabled() {
        let source = ScriptedSource::new(vec![
            Ok(Grab::Frame(arm_frame())),
            Ok(Grab::Frame(arm_frame())),
            Ok(Grab::Frame(arm_frame())),
            Ok(Grab::Frame(arm_frame())),
            Ok(Grab::EndOfStream),
        ]);
        let mut sink = CountingSink { results: Vec::new() };
        let mut session = ComparisonSession::new(evaluator());
        session.set_loop_reference(false);

        let (clip, rewinds) = ShortClip::new(2);
        let summary = session.run(source, Some(clip), &mut sink).unwrap();

        // The exhausted clip is never rewound and the live loop is
        // unaffected by its end.
        assert_eq!(summary.frames_processed, 4);
        assert_eq!(rewinds.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_latest_result_snapshot() {
        let mut session = ComparisonSession::new(evaluator());
        assert!(session.latest_result().is_none());

        let source = ScriptedSource::new(vec![Ok(Grab::Frame(arm_frame())), Ok(Grab::EndOfStream)]);
        let mut sink = CountingSink { results: Vec::new() };
        session.run(source, None::<ShortClip>, &mut sink).unwrap();

        let latest = session.latest_result().unwrap();
        assert!((latest.flexion_deg - 90.0).abs() < 0.5);
    }

    #[test]
    fn test_fanout_delivers_to_all_sinks() {
        let mut first = CountingSink { results: Vec::new() };
        let mut second = CountingSink { results: Vec::new() };

        {
            let mut fanout = FanoutSink::new(vec![&mut first, &mut second]);
            let source = ScriptedSource::new(vec![Ok(Grab::Frame(arm_frame())), Ok(Grab::EndOfStream)]);
            let mut session = ComparisonSession::new(evaluator());
            session.run(source, None::<ShortClip>, &mut fanout).unwrap();
        }

        assert_eq!(first.results.len(), 1);
        assert_eq!(second.results.len(), 1);
    }
}
