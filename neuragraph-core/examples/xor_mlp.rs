//! # Training a small MLP on XOR
//!
//! Builds a `2 -> 8 -> 2` network with a softmax head, then trains it with
//! momentum gradient descent:
//!
//! 1. Every sample of an epoch is visited in a seeded random order.
//! 2. Each sample gets its own shadow graph from `NeuralNet::forward`, a
//!    cross-entropy loss and a `backprop`.
//! 3. The optimizer accumulates the per-sample gradients and takes one step
//!    per epoch.
//! 4. Accuracy is measured in dataset order.
//!
//! ## Run
//! `cargo run --example xor_mlp`

use neuragraph_core::{cross_entropy, Layer, NeuralNet, Optimizer, SgdOptimizer};
use neuragraph_data::{Dataset, RandomSampler, Sampler, SequentialSampler, VecDataset};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dataset = VecDataset::new(
        vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
        ],
        vec![0, 1, 1, 0],
    )?;

    let layers = [
        Layer::linear(2, 8),
        Layer::relu(),
        Layer::linear(8, 2),
        Layer::softmax(),
    ];
    let net = NeuralNet::with_seed(&layers, 7)?;
    let mut optimizer = SgdOptimizer::new(&net, 0.1, 0.9)?;
    let mut sampler = RandomSampler::new(7);
    println!(
        "Network {:?} with {} parameters",
        net.architecture(),
        net.num_parameters()
    );

    let num_epochs = 500;
    for epoch in 0..num_epochs {
        sampler.set_epoch(epoch as u64);
        optimizer.zero_grad();

        let mut total_loss = 0.0;
        for index in sampler.iter(dataset.len()) {
            let (input, label) = dataset.get(index)?;
            let outputs = net.forward(&input)?;
            let loss = cross_entropy(label, &outputs)?;
            loss.backprop();
            optimizer.accumulate(&loss)?;
            total_loss += loss.value();
        }
        optimizer.step();

        if (epoch + 1) % 50 == 0 {
            println!(
                "Epoch [{}/{}], Loss: {:.4}, Grad norm: {:.4}",
                epoch + 1,
                num_epochs,
                total_loss / dataset.len() as f64,
                optimizer.grad_l2_norm()
            );
        }
    }

    let correct = accuracy(&net, &dataset)?;
    println!("Accuracy: {}/{}", correct, dataset.len());
    Ok(())
}

fn accuracy(net: &NeuralNet, dataset: &VecDataset) -> Result<usize, Box<dyn std::error::Error>> {
    let mut correct = 0;
    for index in SequentialSampler::new().iter(dataset.len()) {
        let (input, label) = dataset.get(index)?;
        if net.predict(&input)? == label {
            correct += 1;
        }
    }
    Ok(correct)
}
