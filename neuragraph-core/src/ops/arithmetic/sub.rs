// neuragraph-core/src/ops/arithmetic/sub.rs

use crate::node::{Node, Op};

// --- Forward Operation ---

/// Returns a new node holding `a - b`.
pub fn sub(a: &Node, b: &Node) -> Node {
    let value = sub_forward(a.value(), b.value());
    Node::from_op(Op::Sub, vec![a.clone(), b.clone()], value)
}

pub(crate) fn sub_forward(a: f64, b: f64) -> f64 {
    a - b
}

// --- Backward Operation ---

pub(crate) fn sub_backward(diff: f64, children: &[Node]) {
    children[0].add_grad(diff);
    children[1].add_grad(-diff);
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
