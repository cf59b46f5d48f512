//! ## About
//!
//! This crate provides ordered N-ary trees for hierarchical data such as scene graphs,
//! menu structures or document outlines. The payload carried by a node (its *context*)
//! is completely opaque to the crate.
//!
//! All nodes live in an [ArenaTree] and are addressed by [NodeId] handles. There is no
//! separate tree type: any node can serve as the root of a traversal, and every node
//! without a parent is the root of its own tree.
//!
//! Four traversal orders are supported (see [Order]). Each is available as a lazy
//! iterator ([ArenaTree::iter]), eagerly collected ([ArenaTree::collect_all]) or driven
//! by a visitor that may stop early ([ArenaTree::visit_each]).
//!
//! ```
//! use canopy::{ArenaTree, Order};
//!
//! let mut tree = ArenaTree::new();
//! let root = tree.add("root");
//! let a = tree.add("a");
//! let b = tree.add("b");
//! tree.append_child(root, a)?;
//! tree.append_child(root, b)?;
//!
//! assert_eq!(tree.collect_all(root, Order::PostOrder)?, &[a, b, root]);
//! assert_eq!(tree.next_sibling(a)?, Some(b));
//! # Ok::<(), canopy::CanopyError>(())
//! ```
//!
//! ## Naming conventions
//! * Traits – adjectives that indicate capability and behavior
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms with the exception of getters and factories, which
//!             use substantives (i.e., omit a `get_` prefix) much like the standard library.

pub mod arena;
pub mod errors;
pub mod iterable_tree;

pub use arena::{ArenaNode, ArenaTree, NodeId};
pub use errors::CanopyError;
pub use iterable_tree::{
    Nodelike, Order,
    Order::{BreadthFirst, InOrder, PostOrder, PreOrder},
    Visit,
};
