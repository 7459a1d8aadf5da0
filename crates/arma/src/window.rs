//! Circular recursion window shared by the AR and MA forecasters.
//!
//! The window covers `[start, start + n)` in "time" (monotonic step counter)
//! and maps time `t` onto slot `t % n`. Seeded slots are ordered oldest-first,
//! so at step `start` the oldest value lives in slot `start % n` and the most
//! recent in slot `(start + n - 1) % n`. Advancing overwrites the oldest slot,
//! which is exactly the slot that falls out of the window.

/// Sliding view over a borrowed slot buffer of fixed length `n`.
#[derive(Debug)]
pub(crate) struct Window<'a> {
    slots: &'a mut [f64],
    start: usize,
}

impl<'a> Window<'a> {
    /// Wraps `slots`, which must already hold the seed values oldest-first.
    pub(crate) fn new(slots: &'a mut [f64]) -> Self {
        Self { slots, start: 0 }
    }

    /// Number of slots (the model order).
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// First time index covered by the window.
    pub(crate) fn start(&self) -> usize {
        self.start
    }

    /// One past the last time index covered by the window.
    pub(crate) fn end(&self) -> usize {
        self.start + self.slots.len()
    }

    /// Value at lag `j`, where lag 0 is the most recent value.
    ///
    /// # Panics
    ///
    /// Panics if `j >= self.len()`.
    pub(crate) fn lag(&self, j: usize) -> f64 {
        let n = self.slots.len();
        assert!(j < n, "lag {j} outside window of length {n}");
        self.slots[(self.start % n + n - 1 - j) % n]
    }

    /// Linear prediction `constant + sum_j weights[j] * lag(j)`.
    pub(crate) fn predict(&self, weights: &[f64], constant: f64) -> f64 {
        debug_assert_eq!(weights.len(), self.slots.len());
        let lagged: f64 = weights
            .iter()
            .enumerate()
            .map(|(j, w)| w * self.lag(j))
            .sum();
        constant + lagged
    }

    /// Overwrites the oldest slot with `value` and slides the window forward.
    ///
    /// A zero-length window has nothing to overwrite; only the counters move.
    pub(crate) fn advance(&mut self, value: f64) {
        let n = self.slots.len();
        if n > 0 {
            self.slots[self.start % n] = value;
        }
        self.start += 1;
    }
}
