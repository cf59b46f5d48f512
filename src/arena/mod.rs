//! [Arena memory allocated](https://en.wikipedia.org/wiki/Region-based_memory_management)
//! ordered N-ary trees with depth-first (pre-, post- and in-order) and breadth-first traversal.

pub mod breadth;
pub mod depth;
mod node;
mod traversal;
mod tree;

pub use breadth::BreadthFirstIterator;
pub use depth::{InOrderIterator, PostOrderIterator, PreOrderIterator};
pub use node::{ArenaNode, NodeId};
pub use tree::ArenaTree;
