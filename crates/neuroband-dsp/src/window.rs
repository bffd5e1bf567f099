//! Overlapping analysis window accumulation
//!
//! Implements the 50%-overlap sliding window: every emitted window holds
//! exactly N samples, and consecutive windows share their most recent N/2.

use std::collections::VecDeque;

/// Fixed-capacity accumulator emitting N-sample windows at N/2 stride.
///
/// Backed by a ring buffer sized once at construction; the per-window
/// truncation drains in place and never reallocates.
#[derive(Clone, Debug)]
pub struct WindowAccumulator {
    buffer: VecDeque<f64>,
    capacity: usize,
}

impl WindowAccumulator {
    /// Create an accumulator for N-sample windows.
    ///
    /// The capacity is validated upstream by `PipelineConfig`; this type
    /// only assumes it is even and at least 2.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity >= 2 && capacity % 2 == 0);
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append one filtered sample; returns a full window when one is ready.
    ///
    /// Below capacity this returns `None` — the common case, not an error.
    /// At capacity the first N samples are snapshotted, the oldest N/2 are
    /// dropped, and the newest N/2 remain as the seed for the next window.
    pub fn push(&mut self, sample: f64) -> Option<Vec<f64>> {
        self.buffer.push_back(sample);

        if self.buffer.len() < self.capacity {
            return None;
        }

        let window: Vec<f64> = self.buffer.iter().copied().take(self.capacity).collect();
        self.buffer.drain(..self.capacity / 2);

        Some(window)
    }

    /// Number of samples currently buffered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Window capacity N.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all buffered samples.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_window_before_capacity() {
        let mut acc = WindowAccumulator::new(256);
        for i in 0..255 {
            assert!(acc.push(f64::from(i)).is_none());
        }
        assert_eq!(acc.len(), 255);
    }

    #[test]
    fn test_exactly_n_samples_yield_one_window() {
        let mut acc = WindowAccumulator::new(256);
        let mut windows = 0;
        for i in 0..256 {
            if acc.push(f64::from(i)).is_some() {
                windows += 1;
            }
        }
        assert_eq!(windows, 1);
        // Retained tail is exactly N/2
        assert_eq!(acc.len(), 128);
    }

    #[test]
    fn test_n_plus_half_yields_two_windows() {
        let mut acc = WindowAccumulator::new(256);
        let mut windows = 0;
        for i in 0..(256 + 128) {
            if acc.push(f64::from(i)).is_some() {
                windows += 1;
            }
        }
        assert_eq!(windows, 2);
        assert_eq!(acc.len(), 128);
    }

    #[test]
    fn test_window_contents_and_overlap() {
        let mut acc = WindowAccumulator::new(8);
        let mut emitted = Vec::new();
        for i in 0..12 {
            if let Some(w) = acc.push(f64::from(i)) {
                emitted.push(w);
            }
        }

        assert_eq!(emitted.len(), 2);
        assert_eq!(emitted[0], (0..8).map(f64::from).collect::<Vec<_>>());
        // Second window starts at N/2 = 4
        assert_eq!(emitted[1], (4..12).map(f64::from).collect::<Vec<_>>());
    }

    #[test]
    fn test_emitted_windows_always_full_length() {
        let mut acc = WindowAccumulator::new(64);
        for i in 0..10_000 {
            if let Some(w) = acc.push(f64::from(i)) {
                assert_eq!(w.len(), 64);
            }
        }
    }

    #[test]
    fn test_clear_resets_fill_state() {
        let mut acc = WindowAccumulator::new(8);
        for i in 0..6 {
            acc.push(f64::from(i));
        }
        acc.clear();
        assert!(acc.is_empty());

        let mut windows = 0;
        for i in 0..8 {
            if acc.push(f64::from(i)).is_some() {
                windows += 1;
            }
        }
        assert_eq!(windows, 1);
    }
}
