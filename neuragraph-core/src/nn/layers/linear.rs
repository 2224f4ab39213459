use crate::error::NeuraGraphError;
use crate::node::Node;
use crate::ops::{list_add, mul};

/// Builds `output_size` fully connected nodes over `inputs`.
///
/// Output `o` is `bias_o + Σ_i weight_oi * inputs[i]`, wired as a single
/// n-ary sum whose first child is the bias. Leaves are requested from
/// `next_leaf` per output: the bias first, then one weight per input in order.
pub(crate) fn linear<F>(
    inputs: &[Node],
    output_size: usize,
    next_leaf: &mut F,
) -> Result<Vec<Node>, NeuraGraphError>
where
    F: FnMut() -> Result<Node, NeuraGraphError>,
{
    let mut outputs = Vec::with_capacity(output_size);
    for _ in 0..output_size {
        let mut terms = Vec::with_capacity(inputs.len() + 1);
        terms.push(next_leaf()?);
        for input in inputs {
            let weight = next_leaf()?;
            terms.push(mul(&weight, input));
        }
        outputs.push(list_add(&terms)?);
    }
    Ok(outputs)
}

#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
