use generational_arena::{Arena, Index};
use std::collections::VecDeque;
use std::fmt;
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::node::NodeRef;

/// Handle to a node inside a [`Tree`].
///
/// Only meaningful for the tree that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Index);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.0.into_raw_parts();
        write!(f, "{}v{}", slot, generation)
    }
}

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub(crate) struct TreeNode<T> {
    pub(crate) value: T,
    /// Index of parent node in the arena, None for the root
    pub(crate) parent: Option<NodeId>,
    /// Indices of child nodes in the arena, in insertion order
    pub(crate) children: Vec<NodeId>,
}

/// Arena-based tree.
///
/// The tree owns every node; parent links are plain indices, so there is no
/// ownership cycle between a node and its children. Dropping the tree drops
/// all nodes.
#[derive(Debug)]
pub struct Tree<T> {
    arena: Arena<TreeNode<T>>,
    root: NodeId,
}

impl<T> Tree<T> {
    /// Creates a tree holding a single root node.
    #[instrument(level = "trace", skip(value))]
    pub fn new(value: T) -> Self {
        let mut arena = Arena::new();
        let root = NodeId(arena.insert(TreeNode {
            value,
            parent: None,
            children: Vec::new(),
        }));
        Self { arena, root }
    }

    /// Appends a new node holding `value` to the end of `parent`'s children.
    ///
    /// Both sides of the link are written before this returns, so the new
    /// node is never observable without its parent or vice versa.
    #[instrument(level = "trace", skip(self, value))]
    pub fn add_child(&mut self, parent: NodeId, value: T) -> TreeResult<NodeId> {
        if !self.arena.contains(parent.0) {
            return Err(TreeError::NodeNotFound(parent));
        }
        let node_idx = NodeId(self.arena.insert(TreeNode {
            value,
            parent: Some(parent),
            children: Vec::new(),
        }));
        if let Some(parent_node) = self.arena.get_mut(parent.0) {
            parent_node.children.push(node_idx);
        }
        Ok(node_idx)
    }

    pub fn root(&self) -> NodeRef<'_, T> {
        NodeRef::new(self, self.root)
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        self.arena.contains(id.0).then(|| NodeRef::new(self, id))
    }

    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.get_node(id).map(|node| &node.value)
    }

    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.arena.get_mut(id.0).map(|node| &mut node.value)
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Height of the tree in levels; a lone root has depth 1.
    ///
    /// Breadth-first over an explicit queue of (node, level) pairs, so a deep
    /// chain does not grow the call stack.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut queue = VecDeque::new();
        queue.push_back((self.root, 1)); // (node, depth)

        while let Some((node_idx, depth)) = queue.pop_front() {
            let Some(node) = self.get_node(node_idx) else {
                continue;
            };
            max_depth = max_depth.max(depth);
            queue.extend(node.children.iter().map(|&child| (child, depth + 1)));
        }

        max_depth
    }

    /// Collects all leaf nodes (nodes with no children), left to right.
    #[instrument(level = "debug", skip(self))]
    pub fn leaves(&self) -> Vec<NodeRef<'_, T>> {
        let mut leaves = Vec::new();
        let mut stack = vec![self.root];

        while let Some(node_idx) = stack.pop() {
            let Some(node) = self.get_node(node_idx) else {
                continue;
            };
            if node.children.is_empty() {
                leaves.push(NodeRef::new(self, node_idx));
            } else {
                // reversed so the leftmost child pops first
                stack.extend(node.children.iter().rev().copied());
            }
        }

        leaves
    }

    pub(crate) fn get_node(&self, id: NodeId) -> Option<&TreeNode<T>> {
        self.arena.get(id.0)
    }
}
