//! Definition of the interfaces for tree traversal

use crate::NodeId;
use std::ops::ControlFlow;

/// Order of traversal
///
/// `InOrder` is generalized to N-ary trees as: the first child's subtree, then the
/// node itself, then the subtrees of the remaining children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    InOrder,
    PreOrder,
    PostOrder,
    BreadthFirst,
}

impl Order {
    /// All supported orders, handy for exhaustive checks
    pub const ALL: [Order; 4] = [
        Order::InOrder,
        Order::PreOrder,
        Order::PostOrder,
        Order::BreadthFirst,
    ];
}

/// Signal returned by visitor callbacks. `Break` stops the traversal.
pub type Visit = ControlFlow<()>;

/// Container that holds data in a tree
pub trait Nodelike<Context> {
    fn is_leaf(&self) -> bool;
    fn get(&self) -> &Context;
    fn id(&self) -> NodeId;
    /// Handles of the immediate children, in traversal order.
    fn children(&self) -> &[NodeId];
}
