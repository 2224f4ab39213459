// src/node/debug.rs
use crate::node::Node;
use std::fmt;

// Children are summarised by count; printing them recursively would walk the whole graph.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.try_borrow() {
            Ok(guard) => {
                write!(
                    f,
                    "Node(op={:?}, value={}, grad={}, children={}",
                    guard.op,
                    guard.value,
                    guard.grad,
                    guard.children.len()
                )?;
                if let Some(id) = guard.param {
                    write!(f, ", param={}", id)?;
                }
                write!(f, ")")
            }
            Err(_) => write!(f, "Node(<mutably borrowed>)"),
        }
    }
}
