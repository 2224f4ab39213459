use crate::node::Node;
use std::fmt;
use std::ops::Deref;

/// Stable identifier of a trainable leaf, assigned in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParamId(pub(crate) usize);

impl ParamId {
    /// Creation index of the parameter within its network.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "param#{}", self.0)
    }
}

/// A trainable leaf of a network together with its identifier.
///
/// Dereferences to the underlying [`Node`], so values, gradients and
/// velocities are read with the usual node accessors.
#[derive(Clone)]
pub struct Parameter {
    node: Node,
    id: ParamId,
}

impl Parameter {
    pub(crate) fn new(id: ParamId, value: f64) -> Self {
        Parameter {
            node: Node::parameter(id, value),
            id,
        }
    }

    pub fn id(&self) -> ParamId {
        self.id
    }

    /// Returns the underlying node handle.
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Creates an independent leaf with the same identifier and current value.
    ///
    /// Mutating the mirror (value, gradient, velocity) never touches `self`.
    pub fn mirror(&self) -> Node {
        Node::parameter(self.id, self.node.value())
    }
}

impl Deref for Parameter {
    type Target = Node;

    fn deref(&self) -> &Self::Target {
        &self.node
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parameter({:?})", self.node)
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
