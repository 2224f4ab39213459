// src/ops/loss/mod.rs

//! # Loss Functions
//!
//! Loss nodes close a graph built by a network forward pass. The optimizer
//! only accepts cross-entropy nodes as losses.

pub mod cross_entropy;

pub use cross_entropy::{cross_entropy, CROSS_ENTROPY_EPS};
