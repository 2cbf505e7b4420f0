//! Conversion of trees into printable `termtree` structures.

use std::collections::HashMap;
use std::fmt::Display;

use termtree::Tree as TermTree;
use tracing::instrument;

use crate::arena::{NodeId, Tree};
use crate::node::NodeRef;

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> TermTree<String>;
}

impl<T: Display> TreeNodeConvert for NodeRef<'_, T> {
    /// Builds the subtree bottom-up from a pre-order list, so conversion does
    /// not recurse per level. termtree's own `Display` and `Drop` still do.
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> TermTree<String> {
        let mut order: Vec<NodeRef<'_, T>> = Vec::new();
        let mut stack = vec![*self];
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(node.children());
        }

        // children always come after their parent in `order`
        let mut built: HashMap<NodeId, TermTree<String>> = HashMap::new();
        for node in order.iter().rev() {
            let leaves: Vec<_> = node
                .children()
                .filter_map(|child| built.remove(&child.id()))
                .collect();
            built.insert(
                node.id(),
                TermTree::new(node.value().to_string()).with_leaves(leaves),
            );
        }

        built
            .remove(&self.id())
            .unwrap_or_else(|| TermTree::new(self.value().to_string()))
    }
}

impl<T: Display> TreeNodeConvert for Tree<T> {
    fn to_tree_string(&self) -> TermTree<String> {
        self.root().to_tree_string()
    }
}
