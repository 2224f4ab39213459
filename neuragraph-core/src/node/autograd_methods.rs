use crate::autograd::graph::topological_sort;
use crate::node::{Node, Op};
use crate::ops::activation::{relu, softmax};
use crate::ops::arithmetic::{add, mul, sub};
use crate::ops::loss::cross_entropy;

impl Node {
    /// Recomputes this node's value from the current values of its children.
    ///
    /// Leaves are left untouched. Used to refresh a persistent graph after
    /// some of its leaves were overwritten; callers must visit nodes in
    /// children-first order for the refresh to be complete.
    pub fn forward(&self) {
        let (op, inputs) = {
            let data = self.read_data();
            let inputs: Vec<f64> = data.children.iter().map(Node::value).collect();
            (data.op, inputs)
        };

        let value = match op {
            Op::Leaf => return,
            Op::Add => add::add_forward(&inputs),
            Op::Sub => sub::sub_forward(inputs[0], inputs[1]),
            Op::Mul => mul::mul_forward(inputs[0], inputs[1]),
            Op::Relu => relu::relu_forward(inputs[0]),
            Op::Softmax { index } => softmax::softmax_forward(&inputs)[index],
            Op::CrossEntropy { target } => cross_entropy::cross_entropy_forward(inputs[target]),
        };
        self.set_value(value);
    }

    /// Applies this node's local chain rule once.
    ///
    /// Reads the node's own gradient accumulator and adds the corresponding
    /// contribution to each child's accumulator. Does not recurse.
    pub fn backward(&self) {
        let (op, diff, value, children) = {
            let data = self.read_data();
            (data.op, data.grad, data.value, data.children.clone())
        };

        match op {
            Op::Leaf => {}
            Op::Add => add::add_backward(diff, &children),
            Op::Sub => sub::sub_backward(diff, &children),
            Op::Mul => mul::mul_backward(diff, &children),
            Op::Relu => relu::relu_backward(diff, value, &children),
            Op::Softmax { index } => softmax::softmax_backward(diff, value, index, &children),
            Op::CrossEntropy { target } => {
                cross_entropy::cross_entropy_backward(diff, target, &children)
            }
        }
    }

    /// Back-propagates from this node to every node it depends on.
    ///
    /// Interior accumulators are scratch space and are cleared first, then the
    /// root receives a gradient of 1 and every node's `backward` runs in
    /// reverse topological order, so each node has collected the contributions
    /// of all its parents before it propagates to its own children.
    ///
    /// Leaf accumulators are never cleared here: calling `backprop` twice
    /// without [`Node::zero_grad`] sums both passes into the leaves.
    ///
    /// Every non-leaf node reachable from `self`, `self` included, has its
    /// gradient reset. When `self` sits inside a larger graph, gradients that
    /// an earlier pass from another root left on those shared interior nodes
    /// are lost.
    pub fn backprop(&self) {
        let order = topological_sort(std::slice::from_ref(self));
        for node in order.iter().filter(|node| !node.is_leaf()) {
            node.clear_grad();
        }

        self.add_grad(1.0);
        self.backward();

        // The root is the last node of its own post-order.
        debug_assert!(order.last().map_or(false, |last| last.ptr_eq(self)));
        for node in order.iter().rev().skip(1) {
            node.backward();
        }
        log::trace!("backprop visited {} nodes", order.len());
    }

    /// Resets the gradient accumulator of this node and of every node it depends on.
    pub fn zero_grad(&self) {
        for node in topological_sort(std::slice::from_ref(self)) {
            node.clear_grad();
        }
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
