// neuragraph-core/src/ops/arithmetic/mul.rs

use crate::node::{Node, Op};

// --- Forward Operation ---

/// Returns a new node holding `a * b`.
pub fn mul(a: &Node, b: &Node) -> Node {
    let value = mul_forward(a.value(), b.value());
    Node::from_op(Op::Mul, vec![a.clone(), b.clone()], value)
}

pub(crate) fn mul_forward(a: f64, b: f64) -> f64 {
    a * b
}

// --- Backward Operation ---

/// Each factor receives the upstream gradient scaled by the other factor's current value.
pub(crate) fn mul_backward(diff: f64, children: &[Node]) {
    let a = children[0].value();
    let b = children[1].value();
    children[0].add_grad(diff * b);
    children[1].add_grad(diff * a);
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
