// neuragraph-data/src/samplers/sequential_sampler.rs

use super::traits::Sampler;
use std::ops::Range;

/// Visits `0..dataset_len` in order, one index per sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequentialSampler;

impl SequentialSampler {
    pub fn new() -> Self {
        SequentialSampler
    }

    /// The indices visited for a dataset of `dataset_len` samples.
    pub fn indices(&self, dataset_len: usize) -> Range<usize> {
        0..dataset_len
    }
}

impl Sampler for SequentialSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize>> {
        Box::new(self.indices(dataset_len))
    }

    fn len(&self, dataset_len: usize) -> usize {
        self.indices(dataset_len).len()
    }
}

#[cfg(test)]
#[path = "sequential_sampler_test.rs"]
mod tests;
