// neuragraph-core/src/ops/arithmetic/add.rs

use crate::error::NeuraGraphError;
use crate::node::{Node, Op};

// --- Forward Operation ---

/// Returns a new node holding `a + b`.
pub fn add(a: &Node, b: &Node) -> Node {
    let value = add_forward(&[a.value(), b.value()]);
    Node::from_op(Op::Add, vec![a.clone(), b.clone()], value)
}

/// Sums any number of nodes into a single `Add` node.
///
/// # Errors
/// Returns `EmptyOperandList` if `nodes` is empty.
pub fn list_add(nodes: &[Node]) -> Result<Node, NeuraGraphError> {
    if nodes.is_empty() {
        return Err(NeuraGraphError::EmptyOperandList {
            operation: "list_add".to_string(),
        });
    }
    let inputs: Vec<f64> = nodes.iter().map(Node::value).collect();
    Ok(Node::from_op(Op::Add, nodes.to_vec(), add_forward(&inputs)))
}

pub(crate) fn add_forward(inputs: &[f64]) -> f64 {
    inputs.iter().sum()
}

// --- Backward Operation ---

/// d(sum)/d(child) = 1 for every child.
pub(crate) fn add_backward(diff: f64, children: &[Node]) {
    for child in children {
        child.add_grad(diff);
    }
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
