use crate::node::{Node, NodeData};
use std::cell::RefCell;
use std::collections::HashSet;

/// Pointer identity of a node, stable for as long as any handle is alive.
pub(crate) type NodeId = *const RefCell<NodeData>;

/// Orders every node reachable from `seeds` so that each node comes after all
/// of its children.
///
/// Each node appears exactly once even when shared by several parents. Seeds
/// are explored in slice order and children in call order, so two graphs built
/// by the same sequence of calls yield orderings with the same shape.
///
/// The traversal keeps an explicit stack and never recurses, so deep chains
/// are safe.
pub fn topological_sort(seeds: &[Node]) -> Vec<Node> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted: Vec<Node> = Vec::new();
    // (node, index of the next child to explore)
    let mut stack: Vec<(Node, usize)> = Vec::new();

    for seed in seeds {
        if !visited.insert(seed.node_id()) {
            continue;
        }
        stack.push((seed.clone(), 0));

        while !stack.is_empty() {
            let next_child = match stack.last_mut() {
                Some((node, cursor)) => {
                    let child = node.read_data().children.get(*cursor).cloned();
                    *cursor += 1;
                    child
                }
                None => None,
            };

            match next_child {
                Some(child) => {
                    if visited.insert(child.node_id()) {
                        stack.push((child, 0));
                    }
                }
                None => {
                    if let Some((done, _)) = stack.pop() {
                        sorted.push(done);
                    }
                }
            }
        }
    }

    log::trace!(
        "topological_sort: {} seeds, {} nodes",
        seeds.len(),
        sorted.len()
    );
    sorted
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
