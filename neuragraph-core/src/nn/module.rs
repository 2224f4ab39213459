use crate::error::NeuraGraphError;
use crate::nn::Parameter;
use crate::node::Node;

/// The base trait for trainable models.
///
/// This is the seam optimizers are built from: they only need a forward pass
/// and a stable enumeration of the trainable leaves.
pub trait Module: std::fmt::Debug {
    /// Runs a forward pass on `input` and returns the output nodes.
    ///
    /// The returned nodes may be extended with a loss and back-propagated.
    fn forward(&self, input: &[f64]) -> Result<Vec<Node>, NeuraGraphError>;

    /// Returns every trainable parameter, in a stable order.
    fn parameters(&self) -> Vec<Parameter>;

    /// Number of trainable scalars.
    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
