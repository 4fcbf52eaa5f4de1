//! Randomness plumbing and Fisher-Yates shuffle

use rand::{Rng, RngCore};

/// Source of uniform values in `[0, 1)`
///
/// Every `rand` generator is a source; [`SequenceSource`] replays fixed
/// values for deterministic tests.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `[0, upper)`. `upper` must be non-zero.
    #[inline]
    fn next_index(&mut self, upper: usize) -> usize {
        let index = (self.next_unit() * upper as f64).floor() as usize;
        index.min(upper - 1)
    }
}

impl<R: RngCore> RandomSource for R {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed list of values, cycling when exhausted
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    /// Values outside `[0, 1)` are clamped into range
    pub fn new(values: Vec<f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0 - f64::EPSILON) })
            .collect();
        Self { values, cursor: 0 }
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Uniformly permuted copy of `items`; the input is left untouched.
///
/// Walks backwards from the last index, swapping each position `i` with a
/// uniformly drawn `j` in `[0, i]`.
pub fn shuffle<T: Clone, S: RandomSource + ?Sized>(items: &[T], source: &mut S) -> Vec<T> {
    let mut result = items.to_vec();
    for i in (1..result.len()).rev() {
        let j = source.next_index(i + 1);
        result.swap(i, j);
    }
    result
}
