use std::fmt;
use std::hash::Hash;

use tracing::{instrument, trace};

use crate::arena::{NodeId, Tree};
use crate::traversal::{Traversal, TraversalOptions, ValueSet, UNBOUNDED};
use crate::tree_queue::ChildIterator;
use crate::tree_stack::DepthFirstIterator;

/// Borrowed handle to one node of a [`Tree`].
///
/// All read operations live here. Two handles are equal when they point at
/// the same node of the same tree.
pub struct NodeRef<'a, T> {
    tree: &'a Tree<T>,
    id: NodeId,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", self.value())
            .finish()
    }
}

impl<'a, T> NodeRef<'a, T> {
    /// Callers guarantee `id` is live in `tree`.
    pub(crate) fn new(tree: &'a Tree<T>, id: NodeId) -> Self {
        Self { tree, id }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &'a Tree<T> {
        self.tree
    }

    pub fn value(&self) -> &'a T {
        // nodes are never removed, so a handle stays valid for the borrow
        match self.tree.value(self.id) {
            Some(value) => value,
            None => unreachable!("node {} missing from its own tree", self.id),
        }
    }

    pub fn parent_id(&self) -> Option<NodeId> {
        self.tree.get_node(self.id).and_then(|node| node.parent)
    }

    pub fn is_root(&self) -> bool {
        self.parent_id().is_none()
    }

    /// Immediate children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a, T>> + 'a {
        let tree = self.tree;
        tree.get_node(self.id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
            .iter()
            .map(move |&id| NodeRef::new(tree, id))
    }

    /// Walks up through the ancestors, starting with the immediate parent.
    pub fn parent_iter(&self) -> ParentIterator<'a, T> {
        ParentIterator {
            tree: self.tree,
            next: self.parent_id(),
        }
    }
}

impl<'a, T: Eq + Hash> NodeRef<'a, T> {
    // ---------------------------------------------------------------
    // Ancestors
    // ---------------------------------------------------------------

    /// Returns up to `max_depth` ancestors, nearest first.
    ///
    /// The first ancestor whose value is in `exclude` ends the walk; it and
    /// everything above it are left out.
    #[instrument(level = "trace", skip(self, exclude))]
    pub fn get_parents(&self, max_depth: usize, exclude: &ValueSet<T>) -> Vec<NodeRef<'a, T>> {
        if max_depth == 0 {
            return Vec::new();
        }
        self.parent_iter()
            .take_while(|parent| !exclude.contains(parent.value()))
            .take(max_depth)
            .collect()
    }

    /// Immediate parent, unless there is none or its value is excluded.
    pub fn get_parent(&self, exclude: &ValueSet<T>) -> Option<NodeRef<'a, T>> {
        self.get_parents(1, exclude).into_iter().next()
    }

    pub fn get_parent_values(&self, max_depth: usize, exclude: &ValueSet<T>) -> Vec<&'a T> {
        self.get_parents(max_depth, exclude)
            .into_iter()
            .map(|node| node.value())
            .collect()
    }

    pub fn get_parent_value(&self, exclude: &ValueSet<T>) -> Option<&'a T> {
        self.get_parent(exclude).map(|node| node.value())
    }

    // ---------------------------------------------------------------
    // Descendants
    // ---------------------------------------------------------------

    /// Breadth-first walk over all descendants.
    ///
    /// A descendant whose value is in `exclude` is skipped along with its
    /// whole subtree; sibling branches carry on.
    pub fn child_iter<'e>(&self, exclude: &'e ValueSet<T>) -> ChildIterator<'a, 'e, T> {
        ChildIterator::new(*self, exclude)
    }

    /// Pre-order walk over descendants up to `max_depth` levels below this node.
    pub fn depth_first_iter<'e>(
        &self,
        max_depth: usize,
        exclude: &'e ValueSet<T>,
    ) -> DepthFirstIterator<'a, 'e, T> {
        DepthFirstIterator::new(*self, max_depth, exclude)
    }

    /// Collects the descendants of this node.
    ///
    /// # Panics
    ///
    /// Breadth-first traversal has no depth accounting: passing anything but
    /// [`UNBOUNDED`] together with [`Traversal::BreadthFirst`] panics.
    #[instrument(level = "trace", skip(self, exclude))]
    pub fn get_children(
        &self,
        traversal: Traversal,
        max_depth: usize,
        exclude: &ValueSet<T>,
    ) -> Vec<NodeRef<'a, T>> {
        match traversal {
            Traversal::DepthFirst => self.depth_first_iter(max_depth, exclude).collect(),
            Traversal::BreadthFirst => {
                assert_unbounded(max_depth);
                self.child_iter(exclude).collect()
            }
        }
    }

    /// This node followed by [`get_children`](Self::get_children).
    ///
    /// This node counts as the first level, so depth-first passes
    /// `max_depth - 1` down. Empty when `max_depth` is 0 or this node's own
    /// value is excluded.
    ///
    /// # Panics
    ///
    /// Same precondition as [`get_children`](Self::get_children).
    #[instrument(level = "trace", skip(self, exclude))]
    pub fn get_self_and_children(
        &self,
        traversal: Traversal,
        max_depth: usize,
        exclude: &ValueSet<T>,
    ) -> Vec<NodeRef<'a, T>> {
        let child_depth = match traversal {
            Traversal::DepthFirst => max_depth.saturating_sub(1),
            Traversal::BreadthFirst => {
                assert_unbounded(max_depth);
                max_depth
            }
        };
        if max_depth == 0 || exclude.contains(self.value()) {
            trace!("self excluded or zero depth");
            return Vec::new();
        }
        let mut nodes = vec![*self];
        nodes.extend(self.get_children(traversal, child_depth, exclude));
        nodes
    }

    pub fn get_child_values(
        &self,
        traversal: Traversal,
        max_depth: usize,
        exclude: &ValueSet<T>,
    ) -> Vec<&'a T> {
        self.get_children(traversal, max_depth, exclude)
            .into_iter()
            .map(|node| node.value())
            .collect()
    }

    pub fn get_self_and_child_values(
        &self,
        traversal: Traversal,
        max_depth: usize,
        exclude: &ValueSet<T>,
    ) -> Vec<&'a T> {
        self.get_self_and_children(traversal, max_depth, exclude)
            .into_iter()
            .map(|node| node.value())
            .collect()
    }

    // ---------------------------------------------------------------
    // Search
    // ---------------------------------------------------------------

    /// First descendant (breadth-first) holding `value`.
    #[instrument(level = "trace", skip(self, value))]
    pub fn get_first_child(&self, value: &T) -> Option<NodeRef<'a, T>> {
        let none = ValueSet::new();
        self.child_iter(&none).find(|node| node.value() == value)
    }

    /// This node if it holds `value`, otherwise [`get_first_child`](Self::get_first_child).
    pub fn get_first(&self, value: &T) -> Option<NodeRef<'a, T>> {
        if self.value() == value {
            return Some(*self);
        }
        self.get_first_child(value)
    }

    // ---------------------------------------------------------------
    // Option-driven queries
    // ---------------------------------------------------------------

    /// Ancestors per `opts`; `opts.traversal` does not apply upward.
    pub fn parents_with(&self, opts: &TraversalOptions<T>) -> Vec<NodeRef<'a, T>> {
        self.get_parents(opts.max_depth, &opts.exclude)
    }

    pub fn children_with(&self, opts: &TraversalOptions<T>) -> Vec<NodeRef<'a, T>> {
        self.get_children(opts.traversal, opts.max_depth, &opts.exclude)
    }

    pub fn self_and_children_with(&self, opts: &TraversalOptions<T>) -> Vec<NodeRef<'a, T>> {
        self.get_self_and_children(opts.traversal, opts.max_depth, &opts.exclude)
    }

    pub fn parent_values_with(&self, opts: &TraversalOptions<T>) -> Vec<&'a T> {
        self.get_parent_values(opts.max_depth, &opts.exclude)
    }

    pub fn child_values_with(&self, opts: &TraversalOptions<T>) -> Vec<&'a T> {
        self.get_child_values(opts.traversal, opts.max_depth, &opts.exclude)
    }

    pub fn self_and_child_values_with(&self, opts: &TraversalOptions<T>) -> Vec<&'a T> {
        self.get_self_and_child_values(opts.traversal, opts.max_depth, &opts.exclude)
    }
}

fn assert_unbounded(max_depth: usize) {
    assert!(
        max_depth == UNBOUNDED,
        "breadth-first traversal does not support a depth limit (got max_depth = {})",
        max_depth
    );
}

/// Ancestor walk: nearest parent first, ends after the root.
pub struct ParentIterator<'a, T> {
    tree: &'a Tree<T>,
    next: Option<NodeId>,
}

impl<'a, T> Iterator for ParentIterator<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.get_node(current).and_then(|node| node.parent);
        Some(NodeRef::new(self.tree, current))
    }
}
