use crate::autograd::topological_sort;
use crate::error::NeuraGraphError;
use crate::nn::{Module, ParamId, Parameter};
use crate::node::{Node, Op};
use crate::optim::optimizer_trait::Optimizer;
use std::collections::{HashMap, HashSet};

/// Hyperparameters of [`SgdOptimizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SgdOptions {
    pub lr: f64,
    pub momentum: f64,
}

impl SgdOptions {
    /// Checks that `lr` is finite and positive and `momentum` lies in `[0, 1)`.
    pub fn validate(&self) -> Result<(), NeuraGraphError> {
        validate_lr(self.lr)?;
        if !(0.0..1.0).contains(&self.momentum) {
            return Err(NeuraGraphError::ConfigurationError(format!(
                "momentum must be in [0, 1), got {}",
                self.momentum
            )));
        }
        Ok(())
    }
}

impl Default for SgdOptions {
    fn default() -> Self {
        SgdOptions {
            lr: 0.01,
            momentum: 0.0,
        }
    }
}

fn validate_lr(lr: f64) -> Result<(), NeuraGraphError> {
    if !lr.is_finite() || lr <= 0.0 {
        return Err(NeuraGraphError::ConfigurationError(format!(
            "learning rate must be finite and positive, got {}",
            lr
        )));
    }
    Ok(())
}

/// Gradient descent with momentum over the parameters of a [`Module`].
///
/// The parameters are captured once at construction, in the module's
/// canonical order. Per-example gradients computed on shadow graphs are
/// carried back with [`SgdOptimizer::accumulate`], matched by [`ParamId`].
///
/// Update rule, per parameter:
///
/// ```text
/// velocity = momentum * velocity + gradient
/// value    = value - lr * velocity
/// ```
///
/// The velocity lives on the parameter node itself.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Parameter>,
    index: HashMap<ParamId, usize>,
    options: SgdOptions,
}

impl SgdOptimizer {
    /// Creates an optimizer over `module`'s parameters.
    ///
    /// # Errors
    /// Returns `ConfigurationError` for an invalid learning rate or momentum.
    pub fn new<M: Module + ?Sized>(
        module: &M,
        lr: f64,
        momentum: f64,
    ) -> Result<Self, NeuraGraphError> {
        Self::with_options(module, SgdOptions { lr, momentum })
    }

    pub fn with_options<M: Module + ?Sized>(
        module: &M,
        options: SgdOptions,
    ) -> Result<Self, NeuraGraphError> {
        options.validate()?;

        let params = module.parameters();
        let mut index = HashMap::with_capacity(params.len());
        for (position, param) in params.iter().enumerate() {
            if index.insert(param.id(), position).is_some() {
                return Err(NeuraGraphError::DuplicateParameter(param.id()));
            }
        }

        log::debug!(
            "SgdOptimizer created for {} parameters (lr={}, momentum={})",
            params.len(),
            options.lr,
            options.momentum
        );

        Ok(SgdOptimizer {
            params,
            index,
            options,
        })
    }

    /// Adds the gradients held by `loss`'s graph onto the managed parameters.
    ///
    /// `loss` must be a cross-entropy node on which `backprop` has already
    /// run. Every parameter leaf reachable from it is matched to the managed
    /// parameter with the same identifier. The graph must contain each managed
    /// parameter exactly once. All checks run before any gradient is applied.
    ///
    /// # Errors
    /// `NotALossNode`, `UnknownParameter`, `DuplicateParameter` or
    /// `ParameterCountMismatch`.
    pub fn accumulate(&mut self, loss: &Node) -> Result<(), NeuraGraphError> {
        let op = loss.op();
        if !matches!(op, Op::CrossEntropy { .. }) {
            return Err(NeuraGraphError::NotALossNode { op });
        }

        let mut seen = HashSet::with_capacity(self.params.len());
        let mut contributions = Vec::with_capacity(self.params.len());
        for node in topological_sort(std::slice::from_ref(loss)) {
            let id = match node.param_id() {
                Some(id) => id,
                None => continue,
            };
            let position = *self
                .index
                .get(&id)
                .ok_or(NeuraGraphError::UnknownParameter(id))?;
            if !seen.insert(id) {
                return Err(NeuraGraphError::DuplicateParameter(id));
            }
            contributions.push((position, node.gradient()));
        }

        if contributions.len() != self.params.len() {
            return Err(NeuraGraphError::ParameterCountMismatch {
                expected: self.params.len(),
                actual: contributions.len(),
            });
        }

        for (position, grad) in contributions {
            self.params[position].add_grad(grad);
        }
        log::trace!("accumulated gradients of {} parameters", self.params.len());
        Ok(())
    }

    /// Euclidean norm of the accumulated gradients.
    pub fn grad_l2_norm(&self) -> f64 {
        self.params
            .iter()
            .map(|p| p.gradient() * p.gradient())
            .sum::<f64>()
            .sqrt()
    }

    pub fn lr(&self) -> f64 {
        self.options.lr
    }

    /// Changes the learning rate used by subsequent steps.
    ///
    /// # Errors
    /// Returns `ConfigurationError` if `lr` is not finite and positive.
    pub fn set_lr(&mut self, lr: f64) -> Result<(), NeuraGraphError> {
        validate_lr(lr)?;
        self.options.lr = lr;
        Ok(())
    }

    pub fn momentum(&self) -> f64 {
        self.options.momentum
    }

    pub fn options(&self) -> &SgdOptions {
        &self.options
    }

    /// Managed parameters, in capture order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.params
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) {
        let SgdOptions { lr, momentum } = self.options;
        for param in &self.params {
            let velocity = momentum * param.velocity() + param.gradient();
            let value = param.value() - lr * velocity;
            if !value.is_finite() {
                log::warn!(
                    "SgdOptimizer step produced a non-finite value for {}",
                    param.id()
                );
            }
            param.set_velocity(velocity);
            param.set_value(value);
        }
        log::trace!("SgdOptimizer step over {} parameters", self.params.len());
    }

    fn zero_grad(&mut self) {
        for param in &self.params {
            param.clear_grad();
        }
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
