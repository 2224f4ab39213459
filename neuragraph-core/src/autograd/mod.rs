//! # Automatic Differentiation
//!
//! Graph traversal used by [`Node::backprop`](crate::node::Node::backprop) and
//! a finite-difference gradient checker for tests and diagnostics.

pub mod grad_check;
pub mod graph;

pub use graph::topological_sort;
