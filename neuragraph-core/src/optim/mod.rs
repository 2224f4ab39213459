// neuragraph-core/src/optim/mod.rs

//! Optimizers for training networks.
//!
//! This module provides the `Optimizer` trait and momentum gradient descent
//! (`SgdOptimizer`), configured through `SgdOptions`.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::{SgdOptimizer, SgdOptions};
