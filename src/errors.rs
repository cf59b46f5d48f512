//! Provides the error type used throughout this crate.

use crate::NodeId;
use thiserror::Error;

/// The error type used throughout this crate.
///
/// Every operation that returns it has checked its preconditions before touching
/// the tree, so an `Err` always means "nothing changed".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanopyError {
    #[error("Node not in tree: {0}")]
    UnknownNode(NodeId),
    #[error("Node {0} already has a parent")]
    AlreadyAttached(NodeId),
    #[error("Child index {index} is out of bound (child count: {len})")]
    IndexOutOfBound { index: usize, len: usize },
    /// Sibling insertion relative to a root node
    #[error("Node {0} has no parent")]
    NoParent(NodeId),
}
