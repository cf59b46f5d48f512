//! The arena holding all nodes, its structural editing operations and navigation.
//!
//! Any node can act as the root of a (sub)tree. Nodes are created standalone with
//! [ArenaTree::add] and become part of a hierarchy by attaching them to another node.

use super::{ArenaNode, NodeId};
use crate::CanopyError;
use std::ops::{Index, IndexMut};
use tracing::debug;

/// A slot of the arena. The generation is bumped every time the slot is vacated.
#[derive(Debug, Clone)]
struct Slot<Context> {
    generation: u32,
    node: Option<ArenaNode<Context>>,
}

/// Ordered N-ary trees using arena allocation.
///
/// The arena may hold several disjoint trees at once; every node without a parent
/// is a root. Parent links are plain handles and never own anything, the arena owns
/// the storage of all nodes. Dropping the arena drops every node.
///
/// Attaching a node as a descendant of itself is not detected and leads to endless
/// traversals.
#[derive(Debug, Clone)]
pub struct ArenaTree<Context> {
    /// Memory allocated area for nodes
    slots: Vec<Slot<Context>>,
    /// Vacated slots, reused last-in first-out
    free: Vec<usize>,
    len: usize,
}

impl<Context> ArenaTree<Context> {
    pub fn new() -> Self {
        ArenaTree {
            slots: vec![],
            free: vec![],
            len: 0,
        }
    }

    /// Contructor that preallocates memory for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        ArenaTree {
            slots: Vec::with_capacity(capacity),
            free: vec![],
            len: 0,
        }
    }

    /// Creates a standalone node (no parent, no children) carrying `context`.
    pub fn add(&mut self, context: Context) -> NodeId {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            let id = NodeId::new(index, slot.generation);
            slot.node = Some(ArenaNode::new(context, id));
            return id;
        }
        let id = NodeId::new(self.slots.len(), 0);
        self.slots.push(Slot {
            generation: 0,
            node: Some(ArenaNode::new(context, id)),
        });
        id
    }

    /// Number of live nodes in the arena (all trees combined)
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn node(&self, id: NodeId) -> Option<&ArenaNode<Context>> {
        self.slots
            .get(id.index)?
            .node
            .as_ref()
            .filter(|node| node.id == id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut ArenaNode<Context>> {
        self.slots
            .get_mut(id.index)?
            .node
            .as_mut()
            .filter(|node| node.id == id)
    }

    fn get(&self, id: NodeId) -> Result<&ArenaNode<Context>, CanopyError> {
        self.node(id).ok_or(CanopyError::UnknownNode(id))
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut ArenaNode<Context>, CanopyError> {
        self.node_mut(id).ok_or(CanopyError::UnknownNode(id))
    }

    /// Iterates over all nodes without a parent
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.slots
            .iter()
            .filter_map(|slot| slot.node.as_ref())
            .filter(|node| node.parent.is_none())
            .map(|node| node.id)
    }

    // Payload

    pub fn context(&self, id: NodeId) -> Result<&Context, CanopyError> {
        Ok(&self.get(id)?.context)
    }

    pub fn context_mut(&mut self, id: NodeId) -> Result<&mut Context, CanopyError> {
        Ok(&mut self.get_mut(id)?.context)
    }

    /// Replaces the payload of a node and returns the previous one
    pub fn set_context(&mut self, id: NodeId, context: Context) -> Result<Context, CanopyError> {
        Ok(std::mem::replace(&mut self.get_mut(id)?.context, context))
    }

    // Navigation

    /// Follows the parent links to the end. Returns `id` itself for a root.
    pub fn root(&self, id: NodeId) -> Result<NodeId, CanopyError> {
        let mut current = self.get(id)?;
        while let Some(parent) = current.parent {
            current = self.get(parent)?;
        }
        Ok(current.id)
    }

    /// Distance to the root
    pub fn depth(&self, id: NodeId) -> Result<usize, CanopyError> {
        let mut current = self.get(id)?;
        let mut depth = 0;
        while let Some(parent) = current.parent {
            current = self.get(parent)?;
            depth += 1;
        }
        Ok(depth)
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, CanopyError> {
        Ok(self.get(id)?.parent)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], CanopyError> {
        Ok(&self.get(id)?.children)
    }

    pub fn child_count(&self, id: NodeId) -> Result<usize, CanopyError> {
        Ok(self.get(id)?.children.len())
    }

    /// The child at `index`, which must be less than the number of children.
    pub fn child_at(&self, id: NodeId, index: usize) -> Result<NodeId, CanopyError> {
        let children = &self.get(id)?.children;
        children.get(index).copied().ok_or(CanopyError::IndexOutOfBound {
            index,
            len: children.len(),
        })
    }

    pub fn first_child(&self, id: NodeId) -> Result<Option<NodeId>, CanopyError> {
        Ok(self.get(id)?.first_child())
    }

    pub fn last_child(&self, id: NodeId) -> Result<Option<NodeId>, CanopyError> {
        Ok(self.get(id)?.last_child())
    }

    /// The node following `id` in its parent's children. `None` for the last child and for roots.
    pub fn next_sibling(&self, id: NodeId) -> Result<Option<NodeId>, CanopyError> {
        let Some((siblings, position)) = self.siblings(id)? else {
            return Ok(None);
        };
        Ok(siblings.get(position + 1).copied())
    }

    /// The node preceding `id` in its parent's children. `None` for the first child and for roots.
    pub fn previous_sibling(&self, id: NodeId) -> Result<Option<NodeId>, CanopyError> {
        let Some((siblings, position)) = self.siblings(id)? else {
            return Ok(None);
        };
        Ok(position.checked_sub(1).map(|p| siblings[p]))
    }

    /// The children of the parent of `id` together with the position of `id` in them
    fn siblings(&self, id: NodeId) -> Result<Option<(&[NodeId], usize)>, CanopyError> {
        let Some(parent) = self.get(id)?.parent else {
            return Ok(None);
        };
        let parent = self.get(parent)?;
        let position = parent.position_of(id).ok_or(CanopyError::UnknownNode(id))?;
        Ok(Some((&parent.children, position)))
    }

    // Structural editing

    /// Adds `child` as the last child of `parent`. `child` must not have a parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), CanopyError> {
        let position = self.get(parent)?.children.len();
        self.attach(parent, child, position)
    }

    /// Adds `child` as the first child of `parent`. `child` must not have a parent.
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), CanopyError> {
        self.attach(parent, child, 0)
    }

    /// Inserts `sibling` into the parent of `id`, directly after `id`.
    ///
    /// # Errors
    ///
    ///  - [CanopyError::NoParent] when `id` is a root; the tree is left unchanged.
    ///  - [CanopyError::AlreadyAttached] when `sibling` has a parent.
    pub fn insert_sibling(&mut self, id: NodeId, sibling: NodeId) -> Result<(), CanopyError> {
        let (parent, position) = self.sibling_slot(id, sibling)?;
        self.attach(parent, sibling, position + 1)
    }

    /// Inserts `sibling` into the parent of `id`, directly before `id`.
    /// Errors as [Self::insert_sibling].
    pub fn insert_sibling_before(
        &mut self,
        id: NodeId,
        sibling: NodeId,
    ) -> Result<(), CanopyError> {
        let (parent, position) = self.sibling_slot(id, sibling)?;
        self.attach(parent, sibling, position)
    }

    fn sibling_slot(&self, id: NodeId, sibling: NodeId) -> Result<(NodeId, usize), CanopyError> {
        // `sibling` is validated first so a bad handle wins over a missing parent
        self.get(sibling)?;
        let parent = self.get(id)?.parent.ok_or(CanopyError::NoParent(id))?;
        let position = self
            .get(parent)?
            .position_of(id)
            .ok_or(CanopyError::UnknownNode(id))?;
        Ok((parent, position))
    }

    fn attach(
        &mut self,
        parent: NodeId,
        child: NodeId,
        position: usize,
    ) -> Result<(), CanopyError> {
        self.get(parent)?;
        let child_node = self.get_mut(child)?;
        if child_node.parent.is_some() {
            return Err(CanopyError::AlreadyAttached(child));
        }
        child_node.parent = Some(parent);
        self.get_mut(parent)?.children.insert(position, child);
        debug!(%parent, %child, position, "attached node");
        Ok(())
    }

    /// Detaches `id` from its parent and returns the former parent.
    ///
    /// Does nothing and returns `None` when the node is a root. The subtree below
    /// `id` stays intact and forms a standalone tree afterwards.
    pub fn remove(&mut self, id: NodeId) -> Result<Option<NodeId>, CanopyError> {
        let Some(parent) = self.get(id)?.parent else {
            return Ok(None);
        };
        let position = self
            .get(parent)?
            .position_of(id)
            .ok_or(CanopyError::UnknownNode(id))?;
        self.get_mut(parent)?.children.remove(position);
        self.get_mut(id)?.parent = None;
        debug!(%parent, node = %id, "detached node");
        Ok(Some(parent))
    }

    /// Detaches all children of `id` and returns them in their former order.
    /// Their subtrees stay intact.
    pub fn remove_all_children(&mut self, id: NodeId) -> Result<Vec<NodeId>, CanopyError> {
        let children = std::mem::take(&mut self.get_mut(id)?.children);
        for child in &children {
            self.get_mut(*child)?.parent = None;
        }
        debug!(node = %id, count = children.len(), "detached all children");
        Ok(children)
    }

    /// Detaches `id` and frees the storage of its whole subtree. Returns the context of `id`.
    ///
    /// Handles to any node of the subtree become stale.
    pub fn delete(&mut self, id: NodeId) -> Result<Context, CanopyError> {
        self.remove(id)?;
        let mut pending = vec![id];
        let mut context = None;
        while let Some(current) = pending.pop() {
            let node = self.vacate(current)?;
            pending.extend(node.children.iter().copied());
            if current == id {
                context = Some(node.context);
            }
        }
        debug!(node = %id, remaining = self.len, "deleted subtree");
        context.ok_or(CanopyError::UnknownNode(id))
    }

    fn vacate(&mut self, id: NodeId) -> Result<ArenaNode<Context>, CanopyError> {
        self.get(id)?;
        let slot = &mut self.slots[id.index];
        let node = slot.node.take().ok_or(CanopyError::UnknownNode(id))?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        Ok(node)
    }
}

impl<Context> Default for ArenaTree<Context> {
    fn default() -> Self {
        Self::new()
    }
}

/// Panics for handles that are not (or no longer) in the tree.
impl<Context> Index<NodeId> for ArenaTree<Context> {
    type Output = ArenaNode<Context>;

    fn index(&self, id: NodeId) -> &Self::Output {
        match self.node(id) {
            Some(node) => node,
            None => panic!("Node not in tree: {id}"),
        }
    }
}

impl<Context> IndexMut<NodeId> for ArenaTree<Context> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        match self.node_mut(id) {
            Some(node) => node,
            None => panic!("Node not in tree: {id}"),
        }
    }
}
