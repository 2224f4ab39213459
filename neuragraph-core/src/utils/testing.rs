use crate::node::Node;
use crate::ops::value;

/// Wraps each number into a fresh leaf.
pub(crate) fn leaves(values: &[f64]) -> Vec<Node> {
    values.iter().map(|&x| value(x)).collect()
}

/// Current values of `nodes`, in order.
pub(crate) fn values_of(nodes: &[Node]) -> Vec<f64> {
    nodes.iter().map(Node::value).collect()
}

/// Asserts that `actual` holds the `expected` values within `tolerance`.
/// Panics with the first mismatching index otherwise.
pub(crate) fn check_nodes_near(actual: &[Node], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Length mismatch");
    for (i, (node, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let a = node.value();
        let diff = (a - e).abs();
        if diff > tolerance {
            panic!(
                "Value mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}
