//! Traversal entry points of [ArenaTree]. All of them reduce to the lazy iterators
//! in [super::depth] and [super::breadth], selected by an [Order].

use super::{
    ArenaNode, ArenaTree, BreadthFirstIterator, InOrderIterator, NodeId, PostOrderIterator,
    PreOrderIterator,
};
use crate::{CanopyError, Nodelike, Order, Visit};
use itertools::Itertools;
use tracing::trace;
use tracing_attributes::instrument;

impl<Context> ArenaTree<Context> {
    /// Lazily traverses the subtree rooted at `id` in the given order.
    pub fn iter(
        &self,
        id: NodeId,
        order: Order,
    ) -> Result<Box<dyn Iterator<Item = &ArenaNode<Context>> + '_>, CanopyError> {
        let root = self.node(id).ok_or(CanopyError::UnknownNode(id))?;
        Ok(match order {
            Order::InOrder => Box::new(InOrderIterator::new(self, root)),
            Order::PreOrder => Box::new(PreOrderIterator::new(self, root)),
            Order::PostOrder => Box::new(PostOrderIterator::new(self, root)),
            Order::BreadthFirst => Box::new(BreadthFirstIterator::new(self, root)),
        })
    }

    /// Runs a traversal to completion and returns the handles of all nodes in visit order.
    #[instrument(level = "trace", skip(self))]
    pub fn collect_all(&self, id: NodeId, order: Order) -> Result<Vec<NodeId>, CanopyError> {
        Ok(self.iter(id, order)?.map(|node| node.id()).collect_vec())
    }

    /// Calls `visit` for every node of the subtree rooted at `id` in the given order.
    ///
    /// The traversal stops as soon as `visit` returns [Visit::Break]; the nodes visited
    /// up to then are exactly a prefix of [Self::collect_all]. Returns `true` if every
    /// node has been visited and `false` if the traversal was stopped.
    ///
    /// `user` is handed to each call and can carry state in and out of the traversal.
    #[instrument(level = "trace", skip(self, user, visit))]
    pub fn visit_each<User, F>(
        &self,
        id: NodeId,
        order: Order,
        user: &mut User,
        mut visit: F,
    ) -> Result<bool, CanopyError>
    where
        F: FnMut(&ArenaNode<Context>, &mut User) -> Visit,
    {
        let completed = self
            .iter(id, order)?
            .try_for_each(|node| visit(node, user))
            .is_continue();
        if !completed {
            trace!("traversal stopped by visitor");
        }
        Ok(completed)
    }

    /// Calls `apply` once for each immediate child of `id`, in order. Cannot be stopped early.
    pub fn for_each_child<User, F>(
        &self,
        id: NodeId,
        user: &mut User,
        mut apply: F,
    ) -> Result<(), CanopyError>
    where
        F: FnMut(&ArenaNode<Context>, &mut User),
    {
        self.children(id)?
            .iter()
            .for_each(|child_ref| apply(&self[*child_ref], user));
        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::Order::*;
    use std::ops::ControlFlow;
    use test_log;

    fn scenario() -> (ArenaTree<char>, [NodeId; 4]) {
        let mut tree = ArenaTree::new();
        let [r, a, b, c] = ['R', 'A', 'B', 'C'].map(|name| tree.add(name));
        for child in [a, b, c] {
            tree.append_child(r, child).unwrap();
        }
        (tree, [r, a, b, c])
    }

    #[test_log::test]
    fn test_collect_all_flat() {
        let (tree, [r, a, b, c]) = scenario();
        assert_eq!(tree.collect_all(r, PreOrder).unwrap(), &[r, a, b, c]);
        assert_eq!(tree.collect_all(r, PostOrder).unwrap(), &[a, b, c, r]);
        assert_eq!(tree.collect_all(r, BreadthFirst).unwrap(), &[r, a, b, c]);
        assert_eq!(tree.collect_all(r, InOrder).unwrap(), &[a, r, b, c]);
    }

    #[test_log::test]
    fn test_collect_all_leaf() {
        let (tree, [_, a, ..]) = scenario();
        for order in Order::ALL {
            assert_eq!(tree.collect_all(a, order).unwrap(), &[a]);
        }
    }

    #[test_log::test]
    fn test_visit_each_completes() {
        let (tree, [r, ..]) = scenario();
        let mut names = String::new();
        let completed = tree
            .visit_each(r, PostOrder, &mut names, |node, names| {
                names.push(*node.get());
                ControlFlow::Continue(())
            })
            .unwrap();
        assert!(completed);
        assert_eq!(names, "ABCR");
    }

    #[test_log::test]
    fn test_visit_each_stops() {
        let (tree, [r, _, b, _]) = scenario();
        let mut visited = vec![];
        let completed = tree
            .visit_each(r, PreOrder, &mut visited, |node, visited| {
                visited.push(node.id());
                if node.id() == b {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
            .unwrap();
        assert!(!completed);
        let all = tree.collect_all(r, PreOrder).unwrap();
        assert_eq!(visited, &all[..3]);
        assert_eq!(visited.last(), Some(&b));
    }

    #[test_log::test]
    fn test_visit_each_stops_on_first() {
        let (tree, [r, ..]) = scenario();
        let mut count = 0;
        let completed = tree
            .visit_each(r, BreadthFirst, &mut count, |_, count| {
                *count += 1;
                ControlFlow::Break(())
            })
            .unwrap();
        assert!(!completed);
        assert_eq!(count, 1);
    }

    #[test_log::test]
    fn test_for_each_child() {
        let (mut tree, [r, a, ..]) = scenario();
        let grandchild = tree.add('G');
        tree.append_child(a, grandchild).unwrap();

        let mut names = vec![];
        tree.for_each_child(r, &mut names, |child, names| names.push(*child.get()))
            .unwrap();
        // one level only
        assert_eq!(names, &['A', 'B', 'C']);

        let mut count = 0;
        tree.for_each_child(grandchild, &mut count, |_, count| *count += 1).unwrap();
        assert_eq!(count, 0);
    }

    #[test_log::test]
    fn test_stale_handle() {
        let (mut tree, [r, a, ..]) = scenario();
        tree.delete(a).unwrap();
        assert_eq!(tree.collect_all(a, PreOrder), Err(CanopyError::UnknownNode(a)));
        assert!(tree.iter(a, InOrder).is_err());
        assert_eq!(
            tree.visit_each(a, PreOrder, &mut (), |_, _| ControlFlow::Continue(())),
            Err(CanopyError::UnknownNode(a))
        );
        assert_eq!(
            tree.for_each_child(a, &mut (), |_, _| {}),
            Err(CanopyError::UnknownNode(a))
        );
        assert_eq!(tree.collect_all(r, PreOrder).unwrap().len(), 3);
    }

    #[test_log::test]
    fn test_handle_from_other_arena() {
        let mut one = ArenaTree::new();
        let lonely = one.add('L');

        let mut two = ArenaTree::new();
        let filler = two.add('F');
        let r = two.add('R');
        for name in ['A', 'B'] {
            let child = two.add(name);
            two.append_child(r, child).unwrap();
        }
        assert_eq!(one.collect_all(r, PreOrder), Err(CanopyError::UnknownNode(r)));
        for order in Order::ALL {
            assert!(one.iter(r, order).is_err());
        }

        // a handle with a matching slot resolves to this arena's own node
        assert_eq!(filler, lonely);
        assert_eq!(one.collect_all(filler, BreadthFirst).unwrap(), &[lonely]);
    }
}
