//! Depth-first traversal implementations: pre-order, post-order and the N-ary in-order.
//!
//! All iterators keep an explicit stack of child iterators instead of recursing, so
//! deep trees cannot exhaust the call stack. They are lazy: dropping an iterator
//! early abandons the traversal without further work.

use super::{ArenaNode, ArenaTree, NodeId};
use std::slice;
use tracing::trace;

/// Initial stack allocation. Deeper trees just grow the stack.
pub(super) const DEFAULT_STACK_CAPACITY: usize = 42;

/// Iterator visiting a node before its children's subtrees
pub struct PreOrderIterator<'a, Context> {
    tree: &'a ArenaTree<Context>,
    stack: Vec<slice::Iter<'a, NodeId>>,
    root: Option<&'a ArenaNode<Context>>,
}

impl<'a, Context> PreOrderIterator<'a, Context> {
    pub(super) fn new(tree: &'a ArenaTree<Context>, root: &'a ArenaNode<Context>) -> Self {
        trace!(root = %root.id, "creating pre-order iterator");
        PreOrderIterator {
            tree,
            stack: Vec::with_capacity(DEFAULT_STACK_CAPACITY),
            root: Some(root),
        }
    }
}

impl<'a, Context> Iterator for PreOrderIterator<'a, Context> {
    type Item = &'a ArenaNode<Context>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            self.stack.push(root.children.iter());
            return Some(root);
        }
        while let Some(last) = self.stack.last_mut() {
            if let Some(child_ref) = last.next() {
                let node = &self.tree[*child_ref];
                self.stack.push(node.children.iter());
                return Some(node);
            }
            self.stack.pop();
        }
        None
    }
}

/// Iterator visiting a node after its children's subtrees
pub struct PostOrderIterator<'a, Context> {
    tree: &'a ArenaTree<Context>,
    stack: Vec<(&'a ArenaNode<Context>, slice::Iter<'a, NodeId>)>,
}

impl<'a, Context> PostOrderIterator<'a, Context> {
    pub(super) fn new(tree: &'a ArenaTree<Context>, root: &'a ArenaNode<Context>) -> Self {
        trace!(root = %root.id, "creating post-order iterator");
        let mut stack = Vec::with_capacity(DEFAULT_STACK_CAPACITY);
        stack.push((root, root.children.iter()));
        PostOrderIterator { tree, stack }
    }
}

impl<'a, Context> Iterator for PostOrderIterator<'a, Context> {
    type Item = &'a ArenaNode<Context>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (_, children) = self.stack.last_mut()?;
            match children.next() {
                Some(child_ref) => {
                    let node = &self.tree[*child_ref];
                    self.stack.push((node, node.children.iter()));
                }
                None => return self.stack.pop().map(|(node, _)| node),
            }
        }
    }
}

/// Progress of a node in in-order traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// Nothing visited yet
    FirstChild,
    /// The first child's subtree is done, the node itself is next
    Node,
    /// The node has been visited, remaining children follow
    RemainingChildren,
}

struct InOrderFrame<'a, Context> {
    node: &'a ArenaNode<Context>,
    children: slice::Iter<'a, NodeId>,
    stage: Stage,
}

impl<'a, Context> InOrderFrame<'a, Context> {
    fn new(node: &'a ArenaNode<Context>) -> Self {
        InOrderFrame {
            node,
            children: node.children.iter(),
            stage: Stage::FirstChild,
        }
    }
}

/// Iterator for the N-ary generalization of in-order traversal: first child's subtree,
/// the node, then the subtrees of the remaining children. Leaves are visited alone.
pub struct InOrderIterator<'a, Context> {
    tree: &'a ArenaTree<Context>,
    stack: Vec<InOrderFrame<'a, Context>>,
}

impl<'a, Context> InOrderIterator<'a, Context> {
    pub(super) fn new(tree: &'a ArenaTree<Context>, root: &'a ArenaNode<Context>) -> Self {
        trace!(root = %root.id, "creating in-order iterator");
        let mut stack = Vec::with_capacity(DEFAULT_STACK_CAPACITY);
        stack.push(InOrderFrame::new(root));
        InOrderIterator { tree, stack }
    }
}

impl<'a, Context> Iterator for InOrderIterator<'a, Context> {
    type Item = &'a ArenaNode<Context>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            match frame.stage {
                Stage::FirstChild => match frame.children.next() {
                    Some(first) => {
                        frame.stage = Stage::Node;
                        let node = &self.tree[*first];
                        self.stack.push(InOrderFrame::new(node));
                    }
                    None => {
                        frame.stage = Stage::RemainingChildren;
                        return Some(frame.node);
                    }
                },
                Stage::Node => {
                    frame.stage = Stage::RemainingChildren;
                    return Some(frame.node);
                }
                Stage::RemainingChildren => match frame.children.next() {
                    Some(child_ref) => {
                        let node = &self.tree[*child_ref];
                        self.stack.push(InOrderFrame::new(node));
                    }
                    None => {
                        self.stack.pop();
                    }
                },
            }
        }
    }
}
