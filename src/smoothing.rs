//! Temporal smoothing of per-frame angle measurements.
//!
//! Raw angle estimates jitter with landmark noise. Each metric owns a
//! bounded FIFO window of the most recent samples and reports the
//! running mean of its current contents.

use std::collections::VecDeque;

/// The two metrics tracked per session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Flexion,
    Abduction,
}

/// Bounded rolling window over recent angle samples
#[derive(Debug, Clone)]
pub struct AngleWindow {
    capacity: usize,
    samples: VecDeque<f64>,
}

impl AngleWindow {
    /// Create a window holding at most `capacity` samples
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Window capacity must be greater than 0");
        Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a sample, evicting the oldest at capacity, and return
    /// the mean of the window's current contents
    pub fn push_and_mean(&mut self, sample: f64) -> f64 {
        if self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);

        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    /// Mean of the current contents without pushing, if any
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        if self.samples.is_empty() {
            None
        } else {
            Some(self.samples.iter().sum::<f64>() / self.samples.len() as f64)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }
}

/// Per-metric smoothing state owned by one evaluation session.
///
/// The flexion window is updated every frame. The abduction window is
/// only touched when the frame produced a qualifying sample; an absent
/// sample leaves it exactly as it was.
#[derive(Debug, Clone)]
pub struct AngleSmoother {
    flexion: AngleWindow,
    abduction: AngleWindow,
}

impl AngleSmoother {
    #[must_use]
    pub fn new(window_size: usize) -> Self {
        Self {
            flexion: AngleWindow::new(window_size),
            abduction: AngleWindow::new(window_size),
        }
    }

    /// Push a sample for one metric unconditionally and return the
    /// smoothed value
    pub fn push(&mut self, metric: Metric, sample: f64) -> f64 {
        self.window_mut(metric).push_and_mean(sample)
    }

    /// Push a sample for one metric and return the smoothed value.
    /// An absent sample returns an absent mean and leaves the window
    /// untouched.
    pub fn update(&mut self, metric: Metric, sample: Option<f64>) -> Option<f64> {
        sample.map(|s| self.push(metric, s))
    }

    fn window_mut(&mut self, metric: Metric) -> &mut AngleWindow {
        match metric {
            Metric::Flexion => &mut self.flexion,
            Metric::Abduction => &mut self.abduction,
        }
    }

    /// Clear both windows
    pub fn reset(&mut self) {
        self.flexion.reset();
        self.abduction.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_mean() {
        let mut window = AngleWindow::new(3);

        assert_eq!(window.push_and_mean(10.0), 10.0);
        assert_eq!(window.push_and_mean(20.0), 15.0);
        assert_eq!(window.push_and_mean(30.0), 20.0);

        // Window is full, oldest value should be dropped
        assert_eq!(window.push_and_mean(40.0), 30.0);
    }

    #[test]
    fn test_eviction_after_six_pushes() {
        let mut window = AngleWindow::new(5);
        let mut mean = 0.0;
        for sample in [10.0, 20.0, 30.0, 40.0, 50.0, 60.0] {
            mean = window.push_and_mean(sample);
        }
        // Mean of the last five samples, not all six
        assert_eq!(mean, 40.0);
        assert_eq!(window.len(), 5);
    }

    #[test]
    #[should_panic(expected = "Window capacity must be greater than 0")]
    fn test_zero_capacity_panics() {
        let _ = AngleWindow::new(0);
    }

    #[test]
    fn test_empty_window_has_no_mean() {
        let window = AngleWindow::new(5);
        assert!(window.is_empty());
        assert_eq!(window.mean(), None);
    }

    #[test]
    fn test_absent_sample_leaves_window_untouched() {
        let mut smoother = AngleSmoother::new(5);

        assert_eq!(smoother.update(Metric::Abduction, Some(80.0)), Some(80.0));
        assert_eq!(smoother.update(Metric::Abduction, Some(100.0)), Some(90.0));

        // A rejected frame does not shift or reset the window
        assert_eq!(smoother.update(Metric::Abduction, None), None);

        // Subsequent samples continue accumulating from where they left off
        assert_eq!(smoother.update(Metric::Abduction, Some(90.0)), Some(90.0));
    }

    #[test]
    fn test_push_always_yields_a_mean() {
        let mut smoother = AngleSmoother::new(3);

        assert_eq!(smoother.push(Metric::Flexion, 10.0), 10.0);
        assert_eq!(smoother.push(Metric::Flexion, 20.0), 15.0);

        // update with a present sample agrees with push
        assert_eq!(smoother.update(Metric::Flexion, Some(30.0)), Some(20.0));
    }

    #[test]
    fn test_metrics_are_independent() {
        let mut smoother = AngleSmoother::new(5);

        smoother.update(Metric::Flexion, Some(10.0));
        smoother.update(Metric::Flexion, Some(20.0));

        // The abduction window starts from scratch
        assert_eq!(smoother.update(Metric::Abduction, Some(100.0)), Some(100.0));
    }

    #[test]
    fn test_reset_clears_both_windows() {
        let mut smoother = AngleSmoother::new(5);
        smoother.update(Metric::Flexion, Some(10.0));
        smoother.update(Metric::Abduction, Some(20.0));

        smoother.reset();

        assert_eq!(smoother.update(Metric::Flexion, Some(30.0)), Some(30.0));
        assert_eq!(smoother.update(Metric::Abduction, Some(40.0)), Some(40.0));
    }
}
