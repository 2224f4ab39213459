use crate::error::NeuraGraphError;
use crate::node::{Node, Op};

/// Added to probabilities before taking the log and before dividing by them.
pub const CROSS_ENTROPY_EPS: f64 = 1e-4;

// --- Forward Operation ---

/// Cross-entropy of the probability vector `logits` against class `target`:
/// `-ln(logits[target] + eps)`.
///
/// `logits` are expected to be probabilities, typically the output of
/// [`softmax`](crate::ops::softmax). The node keeps all of them as children but
/// only the target one receives a gradient from this operation.
///
/// # Errors
/// Returns `EmptyOperandList` for an empty slice and `TargetOutOfRange` if
/// `target >= logits.len()`.
pub fn cross_entropy(target: usize, logits: &[Node]) -> Result<Node, NeuraGraphError> {
    if logits.is_empty() {
        return Err(NeuraGraphError::EmptyOperandList {
            operation: "cross_entropy".to_string(),
        });
    }
    if target >= logits.len() {
        return Err(NeuraGraphError::TargetOutOfRange {
            target,
            len: logits.len(),
        });
    }

    let value = cross_entropy_forward(logits[target].value());
    Ok(Node::from_op(
        Op::CrossEntropy { target },
        logits.to_vec(),
        value,
    ))
}

pub(crate) fn cross_entropy_forward(probability: f64) -> f64 {
    -(probability + CROSS_ENTROPY_EPS).ln()
}

// --- Backward Operation ---

pub(crate) fn cross_entropy_backward(diff: f64, target: usize, children: &[Node]) {
    let chosen = &children[target];
    chosen.add_grad(-diff / (chosen.value() + CROSS_ENTROPY_EPS));
}

#[cfg(test)]
#[path = "cross_entropy_test.rs"]
mod tests;
