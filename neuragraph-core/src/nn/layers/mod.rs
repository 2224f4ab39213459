// src/nn/layers/mod.rs

pub mod linear;

use crate::error::NeuraGraphError;
use crate::node::Node;
use crate::ops;

/// Descriptor of one network layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Fully connected layer: `output_size` sums of a bias plus weighted inputs.
    Linear {
        input_size: usize,
        output_size: usize,
    },
    /// Element-wise ReLU.
    Relu,
    /// Softmax over the whole current vector.
    Softmax,
}

impl Layer {
    pub fn linear(input_size: usize, output_size: usize) -> Self {
        Layer::Linear {
            input_size,
            output_size,
        }
    }

    pub fn relu() -> Self {
        Layer::Relu
    }

    pub fn softmax() -> Self {
        Layer::Softmax
    }

    /// Width of the vector this layer produces from `input_width` inputs.
    pub fn output_width(&self, input_width: usize) -> usize {
        match self {
            Layer::Linear { output_size, .. } => *output_size,
            Layer::Relu | Layer::Softmax => input_width,
        }
    }

    /// Number of trainable leaves the layer creates.
    pub fn num_parameters(&self) -> usize {
        match self {
            Layer::Linear {
                input_size,
                output_size,
            } => output_size * (input_size + 1),
            Layer::Relu | Layer::Softmax => 0,
        }
    }

    /// Builds this layer on top of `inputs`. `layer` is its position in the
    /// architecture, used in error reports.
    ///
    /// `next_leaf` is called once per trainable leaf, in creation order, and
    /// decides whether the leaf is a fresh parameter or a mirror of one. Its
    /// errors are returned unchanged.
    pub(crate) fn apply<F>(
        &self,
        layer: usize,
        inputs: &[Node],
        next_leaf: &mut F,
    ) -> Result<Vec<Node>, NeuraGraphError>
    where
        F: FnMut() -> Result<Node, NeuraGraphError>,
    {
        match *self {
            Layer::Linear {
                input_size,
                output_size,
            } => {
                if inputs.len() != input_size {
                    return Err(NeuraGraphError::LayerSizeMismatch {
                        layer,
                        expected: input_size,
                        actual: inputs.len(),
                    });
                }
                linear::linear(inputs, output_size, next_leaf)
            }
            Layer::Relu => Ok(inputs.iter().map(ops::relu).collect()),
            Layer::Softmax => ops::softmax(inputs),
        }
    }
}
