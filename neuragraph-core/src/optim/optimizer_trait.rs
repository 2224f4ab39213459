/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their
/// accumulated gradients.
pub trait Optimizer {
    /// Performs a single optimization step over every managed parameter.
    fn step(&mut self);

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Typically called before accumulating the gradients of a new batch.
    fn zero_grad(&mut self);
}
