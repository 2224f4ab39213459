use crate::node::{Node, Op};

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `max(0, a)`.
pub fn relu(a: &Node) -> Node {
    Node::from_op(Op::Relu, vec![a.clone()], relu_forward(a.value()))
}

pub(crate) fn relu_forward(x: f64) -> f64 {
    if x > 0.0 {
        x
    } else {
        0.0
    }
}

// --- Backward Operation ---

/// The gate is decided by the cached output: an output of exactly 0 blocks the gradient.
pub(crate) fn relu_backward(diff: f64, value: f64, children: &[Node]) {
    if value > 0.0 {
        children[0].add_grad(diff);
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
