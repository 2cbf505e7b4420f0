//! Stack based (depth-first, pre-order) descendant traversal.

use std::hash::Hash;

use tracing::trace;

use crate::arena::{NodeId, Tree};
use crate::node::NodeRef;
use crate::traversal::ValueSet;

/// Pre-order walk over the descendants of a node, limited to `max_depth`
/// levels below it.
///
/// Stack entries carry their level (1 = immediate child). Children are pushed
/// in reverse so they pop in insertion order.
pub struct DepthFirstIterator<'a, 'e, T> {
    tree: &'a Tree<T>,
    stack: Vec<(NodeId, usize)>,
    max_depth: usize,
    exclude: &'e ValueSet<T>,
}

impl<'a, 'e, T> DepthFirstIterator<'a, 'e, T> {
    pub(crate) fn new(node: NodeRef<'a, T>, max_depth: usize, exclude: &'e ValueSet<T>) -> Self {
        let mut stack = Vec::new();
        if max_depth > 0 {
            let children: Vec<NodeId> = node.children().map(|child| child.id()).collect();
            stack.extend(children.into_iter().rev().map(|id| (id, 1)));
        }
        Self {
            tree: node.tree(),
            stack,
            max_depth,
            exclude,
        }
    }
}

impl<'a, T: Eq + Hash> Iterator for DepthFirstIterator<'a, '_, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, level)) = self.stack.pop() {
            let Some(node) = self.tree.get_node(current_idx) else {
                continue;
            };
            if self.exclude.contains(&node.value) {
                trace!(node = %current_idx, level, "pruning excluded subtree");
                continue;
            }
            if level < self.max_depth {
                for &child in node.children.iter().rev() {
                    self.stack.push((child, level + 1));
                }
            }
            return Some(NodeRef::new(self.tree, current_idx));
        }
        None
    }
}
