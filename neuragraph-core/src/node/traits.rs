use crate::node::Node;
use crate::ops;
use std::ops::{Add, Mul, Sub};

impl Add for &Node {
    type Output = Node;

    fn add(self, rhs: &Node) -> Node {
        ops::add(self, rhs)
    }
}

impl Sub for &Node {
    type Output = Node;

    fn sub(self, rhs: &Node) -> Node {
        ops::sub(self, rhs)
    }
}

impl Mul for &Node {
    type Output = Node;

    fn mul(self, rhs: &Node) -> Node {
        ops::mul(self, rhs)
    }
}
