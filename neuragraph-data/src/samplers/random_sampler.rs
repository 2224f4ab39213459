// neuragraph-data/src/samplers/random_sampler.rs

use super::traits::Sampler;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Visits every index exactly once, in a seeded random order.
///
/// The permutation depends only on the seed and the current epoch, so two
/// samplers with the same seed and epoch yield the same order. Call
/// [`RandomSampler::set_epoch`] between epochs to reshuffle.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    seed: u64,
    epoch: u64,
}

impl RandomSampler {
    pub fn new(seed: u64) -> Self {
        RandomSampler { seed, epoch: 0 }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn set_epoch(&mut self, epoch: u64) {
        self.epoch = epoch;
    }

    /// The permutation of `0..dataset_len` used for the current epoch.
    pub fn permutation(&self, dataset_len: usize) -> Vec<usize> {
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(self.epoch));
        let mut indices: Vec<usize> = (0..dataset_len).collect();
        indices.shuffle(&mut rng);
        indices
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize>> {
        Box::new(self.permutation(dataset_len).into_iter())
    }

    fn len(&self, dataset_len: usize) -> usize {
        dataset_len
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
