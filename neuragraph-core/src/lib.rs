//! Scalar reverse-mode automatic differentiation and a small neural-network
//! trainer built on top of it.
//!
//! Every value is a [`Node`] of a shared DAG. Operations in [`ops`] build new
//! nodes and compute their value eagerly; [`Node::backprop`] walks the graph in
//! reverse topological order to fill gradient accumulators. [`NeuralNet`]
//! assembles layers of such nodes and [`SgdOptimizer`] trains them.

pub mod autograd;
pub mod error;
pub mod model;
pub mod nn;
pub mod node;
pub mod ops;
pub mod optim;
pub mod utils;

pub use autograd::topological_sort;
pub use error::NeuraGraphError;
pub use model::NeuralNet;
pub use nn::{Layer, Module, ParamId, Parameter, UniformInit};
pub use node::{Node, Op};
pub use ops::{add, cross_entropy, list_add, mul, relu, softmax, sub, value};
pub use optim::{Optimizer, SgdOptimizer, SgdOptions};
