// src/node/mod.rs

use crate::nn::parameter::ParamId;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

mod accessors;
mod autograd_methods;
mod debug;
mod traits;

/// The operation that produced a [`Node`].
///
/// Operations that need an auxiliary index carry it as variant data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Constant, input or trainable parameter. Has no children.
    Leaf,
    /// Sum of one or more children.
    Add,
    /// `children[0] - children[1]`.
    Sub,
    /// `children[0] * children[1]`.
    Mul,
    /// `max(0, children[0])`.
    Relu,
    /// Output `index` of a softmax taken over all children.
    Softmax { index: usize },
    /// `-ln(children[target] + eps)`.
    CrossEntropy { target: usize },
}

/// Internal storage of a graph node.
///
/// Wrapped in `Rc<RefCell<NodeData>>` by [`Node`] so that any number of parents
/// can share the same child.
pub(crate) struct NodeData {
    /// Cached forward value.
    pub(crate) value: f64,
    /// Gradient accumulator (d root / d value) filled during backward passes.
    pub(crate) grad: f64,
    pub(crate) op: Op,
    /// Inputs, in the order the operation was called with.
    pub(crate) children: Vec<Node>,
    /// Momentum buffer owned by the optimizer. Only meaningful on parameters.
    pub(crate) velocity: f64,
    /// Set on trainable leaves and on their shadow mirrors.
    pub(crate) param: Option<ParamId>,
}

// Children are released from a worklist: the default drop glue would recurse
// once per level of the graph.
impl Drop for NodeData {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if Rc::strong_count(&node.data) == 1 {
                if let Ok(mut data) = node.data.try_borrow_mut() {
                    pending.append(&mut data.children);
                }
            }
        }
    }
}

/// A scalar node of the computation graph.
///
/// `Node` is a cheap handle: cloning it clones the `Rc`, not the node. Two
/// handles are the same node iff [`Node::ptr_eq`] holds.
#[derive(Clone)]
pub struct Node {
    pub(crate) data: Rc<RefCell<NodeData>>,
}

impl Node {
    /// Creates a leaf holding `value`.
    pub fn leaf(value: f64) -> Self {
        Self::from_op(Op::Leaf, Vec::new(), value)
    }

    /// Creates a trainable leaf identified by `id`.
    pub(crate) fn parameter(id: ParamId, value: f64) -> Self {
        let node = Self::leaf(value);
        node.write_data().param = Some(id);
        node
    }

    /// Wires `children` under a new node whose forward value has already been computed.
    pub(crate) fn from_op(op: Op, children: Vec<Node>, value: f64) -> Self {
        Node {
            data: Rc::new(RefCell::new(NodeData {
                value,
                grad: 0.0,
                op,
                children,
                velocity: 0.0,
                param: None,
            })),
        }
    }

    pub(crate) fn read_data(&self) -> Ref<'_, NodeData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, NodeData> {
        self.data.borrow_mut()
    }

    /// Returns `true` if both handles point to the same node.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}
