use crate::nn::parameter::ParamId;
use crate::node::{Node, Op};

impl Node {
    /// Returns the cached forward value.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// Overwrites the cached value.
    ///
    /// Parents are not refreshed; call [`Node::forward`] on them (in
    /// topological order) to propagate the change.
    pub fn set_value(&self, value: f64) {
        self.write_data().value = value;
    }

    /// Returns the accumulated gradient of the last backprop root with respect to this node.
    pub fn gradient(&self) -> f64 {
        self.read_data().grad
    }

    /// Returns the operation that produced this node.
    pub fn op(&self) -> Op {
        self.read_data().op
    }

    /// Returns handles to the inputs of this node, in call order.
    pub fn children(&self) -> Vec<Node> {
        self.read_data().children.clone()
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().op == Op::Leaf
    }

    /// Returns the parameter identifier for trainable leaves and their mirrors.
    pub fn param_id(&self) -> Option<ParamId> {
        self.read_data().param
    }

    /// Returns the optimizer's momentum buffer for this node.
    pub fn velocity(&self) -> f64 {
        self.read_data().velocity
    }

    pub(crate) fn set_velocity(&self, velocity: f64) {
        self.write_data().velocity = velocity;
    }

    /// Adds `delta` to the gradient accumulator.
    pub(crate) fn add_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    pub(crate) fn clear_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Identity key used by graph traversals.
    pub(crate) fn node_id(&self) -> crate::autograd::graph::NodeId {
        std::rc::Rc::as_ptr(&self.data)
    }
}
