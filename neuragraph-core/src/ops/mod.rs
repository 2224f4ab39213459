//! # Node Operations Module (`ops`)
//!
//! Every differentiable operation of the engine lives here, grouped by kind.
//!
//! ## Structure:
//!
//! - **Builder functions** (`add`, `relu`, `softmax`, ...) take existing nodes,
//!   compute the forward value eagerly and return a new [`Node`] wired to its
//!   inputs.
//! - **`xxx_forward` / `xxx_backward` helpers** hold the arithmetic of each
//!   operation. They are `pub(crate)` and dispatched by
//!   [`Node::forward`] and [`Node::backward`] on the node's [`Op`](crate::node::Op).
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: sums, differences and products.
//! - [`activation`]: ReLU and softmax.
//! - [`loss`]: cross-entropy.

use crate::node::Node;

pub mod activation;
pub mod arithmetic;
pub mod loss;

pub use activation::{relu, softmax};
pub use arithmetic::{add, list_add, mul, sub};
pub use loss::cross_entropy;

/// Wraps a number into a fresh leaf node.
pub fn value(x: f64) -> Node {
    Node::leaf(x)
}
