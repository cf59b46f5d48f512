//! Breadth-first traversal implementation

use super::{ArenaNode, ArenaTree};
use std::collections::VecDeque;
use tracing::trace;

/// Iterator visiting a (sub)tree level by level, left to right within a level.
pub struct BreadthFirstIterator<'a, Context> {
    tree: &'a ArenaTree<Context>,
    queue: VecDeque<&'a ArenaNode<Context>>,
}

impl<'a, Context> BreadthFirstIterator<'a, Context> {
    pub(super) fn new(tree: &'a ArenaTree<Context>, root: &'a ArenaNode<Context>) -> Self {
        trace!(root = %root.id, "creating breadth-first iterator");
        let mut queue = VecDeque::new();
        queue.push_back(root);
        BreadthFirstIterator { tree, queue }
    }
}

impl<'a, Context> Iterator for BreadthFirstIterator<'a, Context> {
    type Item = &'a ArenaNode<Context>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        let tree = self.tree;
        self.queue.extend(node.children.iter().map(|child_ref| &tree[*child_ref]));
        Some(node)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::Nodelike;
    use itertools::Itertools;
    use test_log;

    #[test_log::test]
    fn test_breadth_first() {
        // Layout of the tree
        //     0
        //    / \
        //  1    2
        // | \   |
        // 3  4  5
        // |
        // 6
        let mut tree = ArenaTree::new();
        let ids = (0..7).map(|i| tree.add(i)).collect_vec();
        for (parent, child) in [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (3, 6)] {
            tree.append_child(ids[parent], ids[child]).unwrap();
        }

        let result = BreadthFirstIterator::new(&tree, &tree[ids[0]])
            .map(|n| *n.get())
            .collect_vec();
        assert_eq!(result, &[0, 1, 2, 3, 4, 5, 6]);

        let result = BreadthFirstIterator::new(&tree, &tree[ids[1]])
            .map(|n| *n.get())
            .collect_vec();
        assert_eq!(result, &[1, 3, 4, 6]);

        let result = BreadthFirstIterator::new(&tree, &tree[ids[5]])
            .map(|n| *n.get())
            .collect_vec();
        assert_eq!(result, &[5]);
    }
}
