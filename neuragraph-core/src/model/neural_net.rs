use crate::autograd::topological_sort;
use crate::error::NeuraGraphError;
use crate::nn::{Layer, Module, ParamId, Parameter, UniformInit};
use crate::node::Node;
use crate::ops::value;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// A feed-forward network over scalar nodes.
///
/// The network owns a persistent *live* graph: input leaves, trainable
/// parameters and every operation node between them, built once at
/// construction. [`NeuralNet::forward`] refreshes the live graph and returns
/// the outputs of a freshly built *shadow* graph of identical shape whose
/// parameter leaves mirror the live ones. Losses are built and
/// back-propagated on the shadow graph; the optimizer carries the resulting
/// gradients back to the live parameters by [`ParamId`].
pub struct NeuralNet {
    architecture: Vec<Layer>,
    inputs: Vec<Node>,
    outputs: Vec<Node>,
    /// Indexed by `ParamId`.
    parameters: Vec<Parameter>,
    /// Children-first order of the live graph, used to refresh it.
    schedule: Vec<Node>,
}

impl NeuralNet {
    /// Builds a network with parameters drawn uniformly from `[-1, 1]`.
    ///
    /// # Errors
    /// Fails if the architecture is empty, does not start with a Linear layer,
    /// declares a zero size or chains layers of mismatched widths.
    pub fn new<R: Rng + ?Sized>(layers: &[Layer], rng: &mut R) -> Result<Self, NeuraGraphError> {
        Self::with_init(layers, UniformInit::default(), rng)
    }

    /// Builds a network from a `StdRng` seeded with `seed`.
    pub fn with_seed(layers: &[Layer], seed: u64) -> Result<Self, NeuraGraphError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(layers, &mut rng)
    }

    /// Builds a network whose parameters are drawn from `init`.
    pub fn with_init<R: Rng + ?Sized>(
        layers: &[Layer],
        init: UniformInit,
        rng: &mut R,
    ) -> Result<Self, NeuraGraphError> {
        let input_size = validate_architecture(layers)?;

        let inputs: Vec<Node> = (0..input_size).map(|_| value(0.0)).collect();
        let mut parameters: Vec<Parameter> = Vec::new();
        let mut next_leaf = || {
            let param = Parameter::new(ParamId(parameters.len()), init.sample(rng));
            let node = param.node().clone();
            parameters.push(param);
            Ok(node)
        };
        let outputs = build_graph(layers, &inputs, &mut next_leaf)?;
        let schedule = topological_sort(&outputs);

        log::debug!(
            "NeuralNet built: {} layers, {} inputs, {} outputs, {} parameters, {} live nodes",
            layers.len(),
            input_size,
            outputs.len(),
            parameters.len(),
            schedule.len()
        );

        Ok(NeuralNet {
            architecture: layers.to_vec(),
            inputs,
            outputs,
            parameters,
            schedule,
        })
    }

    /// Evaluates the network on `input`.
    ///
    /// The live graph is refreshed in children-first order, then a shadow
    /// graph is built with `input` as its input leaves and mirrors of the live
    /// parameters as its trainable leaves. The shadow outputs are returned.
    ///
    /// # Errors
    /// Returns `InputSizeMismatch` if `input.len()` differs from the declared
    /// input size.
    pub fn forward(&self, input: &[f64]) -> Result<Vec<Node>, NeuraGraphError> {
        if input.len() != self.inputs.len() {
            return Err(NeuraGraphError::InputSizeMismatch {
                expected: self.inputs.len(),
                actual: input.len(),
            });
        }

        for (leaf, &x) in self.inputs.iter().zip(input) {
            leaf.set_value(x);
        }
        self.refresh();

        let shadow_inputs: Vec<Node> = input.iter().map(|&x| value(x)).collect();
        let mut next_leaf = mirror_source(&self.parameters);
        build_graph(&self.architecture, &shadow_inputs, &mut next_leaf)
    }

    /// Index of the largest output for `input`. Ties go to the lowest index.
    pub fn predict(&self, input: &[f64]) -> Result<usize, NeuraGraphError> {
        let outputs = self.forward(input)?;
        let mut best = 0;
        for (i, node) in outputs.iter().enumerate() {
            if node.value() > outputs[best].value() {
                best = i;
            }
        }
        Ok(best)
    }

    /// Live trainable leaves in topological order of the live output graph.
    ///
    /// The order only depends on the architecture, so it can be used to
    /// persist and restore weights.
    pub fn parameters(&self) -> Vec<Parameter> {
        self.schedule
            .iter()
            .filter_map(Node::param_id)
            .filter_map(|id| self.parameters.get(id.index()).cloned())
            .collect()
    }

    /// Overwrites every live parameter, in [`NeuralNet::parameters`] order,
    /// and clears the momentum buffers.
    ///
    /// # Errors
    /// Returns `ParameterCountMismatch` if `values` does not hold exactly one
    /// value per parameter. Nothing is modified in that case.
    pub fn load_parameters(&self, values: &[f64]) -> Result<(), NeuraGraphError> {
        let params = self.parameters();
        if values.len() != params.len() {
            return Err(NeuraGraphError::ParameterCountMismatch {
                expected: params.len(),
                actual: values.len(),
            });
        }
        for (param, &v) in params.iter().zip(values) {
            param.set_value(v);
            param.set_velocity(0.0);
        }
        self.refresh();
        Ok(())
    }

    pub fn input_size(&self) -> usize {
        self.inputs.len()
    }

    pub fn output_size(&self) -> usize {
        self.outputs.len()
    }

    pub fn architecture(&self) -> &[Layer] {
        &self.architecture
    }

    pub fn num_parameters(&self) -> usize {
        self.parameters.len()
    }

    /// Output nodes of the live graph.
    pub(crate) fn live_outputs(&self) -> &[Node] {
        &self.outputs
    }

    fn refresh(&self) {
        for node in &self.schedule {
            node.forward();
        }
        log::trace!("refreshed {} live nodes", self.schedule.len());
    }
}

impl Module for NeuralNet {
    fn forward(&self, input: &[f64]) -> Result<Vec<Node>, NeuraGraphError> {
        NeuralNet::forward(self, input)
    }

    fn parameters(&self) -> Vec<Parameter> {
        NeuralNet::parameters(self)
    }

    fn num_parameters(&self) -> usize {
        NeuralNet::num_parameters(self)
    }
}

impl fmt::Debug for NeuralNet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NeuralNet")
            .field("architecture", &self.architecture)
            .field("num_parameters", &self.parameters.len())
            .finish()
    }
}

/// Checks the layer list and returns the declared input size.
fn validate_architecture(layers: &[Layer]) -> Result<usize, NeuraGraphError> {
    let input_size = match layers.first() {
        None => return Err(NeuraGraphError::EmptyArchitecture),
        Some(Layer::Linear { input_size, .. }) => *input_size,
        Some(other) => {
            return Err(NeuraGraphError::InvalidArchitecture(format!(
                "first layer must be Linear to declare the input size, got {:?}",
                other
            )))
        }
    };

    let mut width = input_size;
    for (i, layer) in layers.iter().enumerate() {
        if let Layer::Linear {
            input_size,
            output_size,
        } = *layer
        {
            if input_size == 0 || output_size == 0 {
                return Err(NeuraGraphError::InvalidArchitecture(format!(
                    "layer {} has a zero size ({} -> {})",
                    i, input_size, output_size
                )));
            }
            if input_size != width {
                return Err(NeuraGraphError::LayerSizeMismatch {
                    layer: i,
                    expected: input_size,
                    actual: width,
                });
            }
        }
        width = layer.output_width(width);
    }
    Ok(input_size)
}

/// Leaf source for shadow graphs: mirrors of `params`, in creation order.
fn mirror_source(params: &[Parameter]) -> impl FnMut() -> Result<Node, NeuraGraphError> + '_ {
    let mut live = params.iter();
    move || match live.next() {
        Some(param) => Ok(param.mirror()),
        None => Err(NeuraGraphError::InvalidArchitecture(format!(
            "shadow graph requested more than the {} live parameters",
            params.len()
        ))),
    }
}

fn build_graph<F>(
    layers: &[Layer],
    inputs: &[Node],
    next_leaf: &mut F,
) -> Result<Vec<Node>, NeuraGraphError>
where
    F: FnMut() -> Result<Node, NeuraGraphError>,
{
    let mut current = inputs.to_vec();
    for (i, layer) in layers.iter().enumerate() {
        current = layer.apply(i, &current, next_leaf)?;
    }
    Ok(current)
}

#[cfg(test)]
#[path = "neural_net_test.rs"]
mod tests;
