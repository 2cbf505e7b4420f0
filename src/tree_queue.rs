//! Queue based (breadth-first) descendant traversal.

use std::collections::VecDeque;
use std::hash::Hash;

use tracing::trace;

use crate::arena::{NodeId, Tree};
use crate::node::NodeRef;
use crate::traversal::ValueSet;

/// Level-order walk over the descendants of a node.
///
/// The queue is seeded with the immediate children. A dequeued node whose
/// value is excluded is dropped without enqueueing its children, so the whole
/// subtree is pruned.
pub struct ChildIterator<'a, 'e, T> {
    tree: &'a Tree<T>,
    queue: VecDeque<NodeId>,
    exclude: &'e ValueSet<T>,
}

impl<'a, 'e, T> ChildIterator<'a, 'e, T> {
    pub(crate) fn new(node: NodeRef<'a, T>, exclude: &'e ValueSet<T>) -> Self {
        Self {
            tree: node.tree(),
            queue: node.children().map(|child| child.id()).collect(),
            exclude,
        }
    }
}

impl<'a, T: Eq + Hash> Iterator for ChildIterator<'a, '_, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.queue.pop_front() {
            let Some(node) = self.tree.get_node(current_idx) else {
                continue;
            };
            if self.exclude.contains(&node.value) {
                trace!(node = %current_idx, "pruning excluded subtree");
                continue;
            }
            self.queue.extend(node.children.iter().copied());
            return Some(NodeRef::new(self.tree, current_idx));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //      a
    //     / \
    //    b   c
    //   /     \
    //  d       e
    #[test]
    fn test_queue_order_is_level_order() {
        let mut tree = Tree::new('a');
        let a = tree.root_id();
        let b = tree.add_child(a, 'b').unwrap();
        let c = tree.add_child(a, 'c').unwrap();
        tree.add_child(c, 'e').unwrap();
        tree.add_child(b, 'd').unwrap();

        let none = ValueSet::new();
        let values: String = tree.root().child_iter(&none).map(|n| *n.value()).collect();
        assert_eq!(values, "bcde");
    }

    #[test]
    fn test_leaf_yields_nothing() {
        let tree = Tree::new('a');
        let none = ValueSet::new();
        assert_eq!(tree.root().child_iter(&none).count(), 0);
    }
}
