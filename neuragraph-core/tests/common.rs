use neuragraph_core::{cross_entropy, softmax, NeuraGraphError, NeuralNet, Node};

/// Two well separated clusters: class 0 around (0.2, 0.2), class 1 around (0.8, 0.8).
#[allow(dead_code)]
pub fn separable_samples() -> Vec<(Vec<f64>, usize)> {
    vec![
        (vec![0.1, 0.2], 0),
        (vec![0.2, 0.1], 0),
        (vec![0.25, 0.3], 0),
        (vec![0.15, 0.15], 0),
        (vec![0.8, 0.9], 1),
        (vec![0.9, 0.8], 1),
        (vec![0.75, 0.7], 1),
        (vec![0.85, 0.85], 1),
    ]
}

/// Builds the cross-entropy loss of `net` on one sample and back-propagates it.
#[allow(dead_code)]
pub fn backprop_loss(net: &NeuralNet, input: &[f64], label: usize) -> Result<Node, NeuraGraphError> {
    let outputs = net.forward(input)?;
    let loss = cross_entropy(label, &outputs)?;
    loss.backprop();
    Ok(loss)
}

/// Same as [`backprop_loss`] for networks whose last layer is not a softmax.
#[allow(dead_code)]
pub fn backprop_loss_with_softmax(
    net: &NeuralNet,
    input: &[f64],
    label: usize,
) -> Result<Node, NeuraGraphError> {
    let outputs = net.forward(input)?;
    let probs = softmax(&outputs)?;
    let loss = cross_entropy(label, &probs)?;
    loss.backprop();
    Ok(loss)
}

/// Mean loss of `net` over `samples`, without touching any gradient.
#[allow(dead_code)]
pub fn mean_loss(net: &NeuralNet, samples: &[(Vec<f64>, usize)]) -> Result<f64, NeuraGraphError> {
    let mut total = 0.0;
    for (input, label) in samples {
        let outputs = net.forward(input)?;
        total += cross_entropy(*label, &outputs)?.value();
    }
    Ok(total / samples.len() as f64)
}
