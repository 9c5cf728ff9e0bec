//! Randomness behind a single injectable source
//!
//! Every probabilistic decision in the quiz (direction, review draws,
//! token picks, option order) goes through [`RandomSource`]. Production
//! code uses [`RngSource::thread`]; tests script exact draws with
//! [`SequenceSource`].

use std::collections::VecDeque;

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

pub trait RandomSource {
    /// Uniform draw in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize;

    /// True with the given probability
    fn chance(&mut self, probability: f64) -> bool {
        self.next_unit() < probability
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.next_index(items.len());
        items.get(idx)
    }

    /// Fisher-Yates shuffle
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_index(i + 1);
            items.swap(i, j);
        }
    }
}

/// Adapter over any `rand` generator
pub struct RngSource<R: Rng>(R);

impl RngSource<ThreadRng> {
    /// Process-wide thread RNG, unseeded
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.0)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.0);
    }
}

/// Replays scripted draws in order.
///
/// Once a script runs out, units read as `0.999` (no `chance` fires) and
/// indices as `0`. Indices are reduced modulo `len`.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    units: VecDeque<f64>,
    indices: VecDeque<usize>,
}

impl SequenceSource {
    pub fn new(units: impl IntoIterator<Item = f64>, indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            units: units.into_iter().collect(),
            indices: indices.into_iter().collect(),
        }
    }

    /// Script only unit draws; every index reads as `0`
    pub fn from_units(units: impl IntoIterator<Item = f64>) -> Self {
        Self {
            units: units.into_iter().collect(),
            indices: VecDeque::new(),
        }
    }

    /// Script only index draws; every unit reads as `0.999`
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            units: VecDeque::new(),
            indices: indices.into_iter().collect(),
        }
    }

    pub fn remaining_units(&self) -> usize {
        self.units.len()
    }

    pub fn remaining_indices(&self) -> usize {
        self.indices.len()
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.999)
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.indices.pop_front().unwrap_or(0) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sequence_source_replays_script() {
        let mut source = SequenceSource::new([0.1, 0.8], [2, 7]);
        assert!(source.chance(0.5));
        assert!(!source.chance(0.5));
        assert!(!source.chance(0.5));
        assert_eq!(source.next_index(5), 2);
        assert_eq!(source.next_index(5), 2);
        assert_eq!(source.next_index(5), 0);
    }

    #[test]
    fn test_pick_from_empty_is_none() {
        let mut source = SequenceSource::default();
        let empty: [u8; 0] = [];
        assert_eq!(source.pick(&empty), None);
        assert_eq!(source.pick(&[4, 5, 6]), Some(&4));
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = RngSource::new(StdRng::seed_from_u64(7));
        let mut items: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());

        let mut scripted = SequenceSource::from_indices([0, 0, 0]);
        let mut items = vec!['a', 'b', 'c', 'd'];
        scripted.shuffle(&mut items);
        assert_eq!(items, vec!['b', 'c', 'd', 'a']);
    }

    #[test]
    fn test_rng_source_index_in_range() {
        let mut rng = RngSource::new(StdRng::seed_from_u64(42));
        for _ in 0..1000 {
            assert!(rng.next_index(3) < 3);
            let unit = rng.next_unit();
            assert!((0.0..1.0).contains(&unit));
        }
    }
}
