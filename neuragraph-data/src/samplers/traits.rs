// neuragraph-data/src/samplers/traits.rs

use std::fmt::Debug;

/// Defines the order in which a training loop visits the indices of a dataset.
pub trait Sampler: Debug {
    /// Returns an iterator over the indices of a dataset of `dataset_len` samples.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize>>;

    /// Returns the number of indices `iter` yields for `dataset_len` samples.
    fn len(&self, dataset_len: usize) -> usize;
}
