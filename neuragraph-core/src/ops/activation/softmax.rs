use crate::error::NeuraGraphError;
use crate::node::{Node, Op};

// --- Forward Operation ---

/// Applies softmax over `inputs`, returning one node per input.
///
/// Output `i` holds `exp(x_i) / sum_j exp(x_j)`. Every output shares the same
/// child list (all of `inputs`) and records its own position as
/// `Op::Softmax { index: i }`.
///
/// The exponentials are taken after subtracting `max(x)`. The result is the
/// same as the unshifted formula wherever that one is representable, and stays
/// finite for large logits where the unshifted one would overflow.
///
/// # Errors
/// Returns `EmptyOperandList` if `inputs` is empty.
pub fn softmax(inputs: &[Node]) -> Result<Vec<Node>, NeuraGraphError> {
    if inputs.is_empty() {
        return Err(NeuraGraphError::EmptyOperandList {
            operation: "softmax".to_string(),
        });
    }

    let logits: Vec<f64> = inputs.iter().map(Node::value).collect();
    let probabilities = softmax_forward(&logits);
    if probabilities.iter().any(|p| !p.is_finite()) {
        log::warn!("softmax produced non-finite output for logits {:?}", logits);
    }

    Ok(probabilities
        .into_iter()
        .enumerate()
        .map(|(index, p)| Node::from_op(Op::Softmax { index }, inputs.to_vec(), p))
        .collect())
}

pub(crate) fn softmax_forward(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|x| (x - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}

// --- Backward Operation ---

/// Backward rule for softmax output `index`, whose forward value is `value`.
///
/// `child_index += diff * v * (1 - v)` and for every other child
/// `child_j += -diff * v * p_j`, where `p` is the softmax of the children's
/// current values. `v * v * exp(x_j) / exp(x_index)` reduces to `v * p_j`,
/// which stays finite however far apart the logits are.
pub(crate) fn softmax_backward(diff: f64, value: f64, index: usize, children: &[Node]) {
    let logits: Vec<f64> = children.iter().map(Node::value).collect();
    let probabilities = softmax_forward(&logits);
    for (j, (child, p)) in children.iter().zip(probabilities).enumerate() {
        if j == index {
            child.add_grad(diff * value * (1.0 - value));
        } else {
            child.add_grad(-diff * value * p);
        }
    }
}

#[cfg(test)]
#[path = "softmax_test.rs"]
mod tests;
