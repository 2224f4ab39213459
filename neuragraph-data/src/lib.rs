//! Plain-data dataset provider for `neuragraph` networks.
//!
//! Samples are `(input vector, class label)` pairs; samplers decide the order
//! in which a training loop visits them.

pub mod dataset;
pub mod datasets;
pub mod error;
pub mod samplers;

pub use dataset::Dataset;
pub use datasets::VecDataset;
pub use error::DataError;
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
