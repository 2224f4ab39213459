// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linearities applied node by node.
//!
//! ## Currently Implemented:
//! - [`relu`](relu/fn.relu.html): Rectified Linear Unit.
//! - [`softmax`](softmax/fn.softmax.html): normalised exponentials over a list of nodes.

pub mod relu;
pub mod softmax;

// Re-export key functions
pub use relu::relu;
pub use softmax::softmax;
