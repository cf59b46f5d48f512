//! Node handles and the node structure stored in the arena.

use crate::Nodelike;
use core::fmt;
use itertools::Itertools;

/// Handle of a node in an [super::ArenaTree].
///
/// Consists of the arena slot and the generation of that slot, so a handle to a
/// deleted node never aliases a node added later into the same slot.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone)]
pub struct NodeId {
    pub(super) index: usize,
    pub(super) generation: u32,
}

impl NodeId {
    pub(super) fn new(index: usize, generation: u32) -> Self {
        NodeId { index, generation }
    }

    /// Slot in the arena allocation
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

/// A node structure to be used in an arena allocated tree.
///
/// Structural fields can only be changed through the editing methods of the tree,
/// the context is freely accessible.
#[derive(Debug, Clone)]
pub struct ArenaNode<Context> {
    /// The user-defined payload that the node owns
    pub(super) context: Context,
    /// Own handle
    pub(super) id: NodeId,
    /// Non-owning back reference, `None` for roots
    pub(super) parent: Option<NodeId>,
    /// references for children
    pub(super) children: Vec<NodeId>,
}

impl<Context> ArenaNode<Context> {
    pub(super) fn new(context: Context, id: NodeId) -> Self {
        ArenaNode {
            context,
            id,
            parent: None,
            children: vec![],
        }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn first_child(&self) -> Option<NodeId> {
        self.children.first().copied()
    }

    pub fn last_child(&self) -> Option<NodeId> {
        self.children.last().copied()
    }

    /// Position of `child` among the children of this node
    pub(super) fn position_of(&self, child: NodeId) -> Option<usize> {
        self.children.iter().position(|c| *c == child)
    }
}

impl<Context> Nodelike<Context> for ArenaNode<Context> {
    fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn get(&self) -> &Context {
        &self.context
    }

    fn id(&self) -> NodeId {
        self.id
    }

    fn children(&self) -> &[NodeId] {
        &self.children
    }
}

impl<Context> fmt::Display for ArenaNode<Context>
where
    Context: fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Node {}, children: {:?}, context: {} ",
            self.id,
            self.children.iter().map(|c| c.index).collect_vec(),
            self.context
        )
    }
}
