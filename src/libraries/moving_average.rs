//! Fixed-window moving average
//!
//! A circular window of the last `N` values plus a running sum, giving O(1)
//! updates and O(N) memory regardless of how many values are pushed. The
//! window starts zero-filled; each push subtracts the slot it overwrites
//! before adding the new value, so until the window fills the subtracted
//! slots are the zero placeholders. The divisor is the number of values seen
//! (saturating at `N`), which makes partial-window averages the plain mean
//! of the pushed values. This eviction scheme relies on zero initialization
//! and is kept exactly as the original device behaves; see `average` for the
//! partial-window note.

/// Moving average over the most recent `N` values.
#[derive(Debug, Clone)]
pub struct MovingAverage<const N: usize> {
    window: [f32; N],
    write_index: usize,
    sum: f32,
    count: usize,
}

impl<const N: usize> MovingAverage<N> {
    pub const fn new() -> Self {
        Self {
            window: [0.0; N],
            write_index: 0,
            sum: 0.0,
            count: 0,
        }
    }

    /// Push a value, evicting the oldest once the window is full, and return
    /// the updated average.
    pub fn push(&mut self, value: f32) -> f32 {
        self.sum -= self.window[self.write_index];
        self.window[self.write_index] = value;
        self.sum += value;
        self.write_index = (self.write_index + 1) % N;
        if self.count < N {
            self.count += 1;
        }
        self.sum / self.count as f32
    }

    /// Current average, or `None` before the first push. Until the window
    /// has filled, the divisor is the number of values seen so far.
    pub fn average(&self) -> Option<f32> {
        if self.count == 0 {
            return None;
        }
        Some(self.sum / self.count as f32)
    }

    /// Number of resident values, saturating at `N`.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == N
    }
}

impl<const N: usize> Default for MovingAverage<N> {
    fn default() -> Self {
        Self::new()
    }
}
