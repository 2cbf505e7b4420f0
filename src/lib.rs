//! Generic in-memory tree with parent/child navigation, filtered traversal and
//! value search.
//!
//! Nodes live in an arena owned by [`Tree`]; each node keeps its value, its
//! children in insertion order and the index of its parent. Queries run on
//! [`NodeRef`] handles:
//!
//! ```
//! use simpletree::{Traversal, Tree, ValueSet, UNBOUNDED};
//!
//! let mut tree = Tree::new("foo");
//! let bar = tree.add_child(tree.root_id(), "bar")?;
//! let baz = tree.add_child(bar, "baz")?;
//!
//! let none = ValueSet::new();
//! let baz = tree.node(baz).unwrap();
//! assert_eq!(baz.get_parent_values(UNBOUNDED, &none), [&"bar", &"foo"]);
//! assert_eq!(
//!     tree.root().get_child_values(Traversal::BreadthFirst, UNBOUNDED, &none),
//!     [&"bar", &"baz"]
//! );
//! # Ok::<(), simpletree::TreeError>(())
//! ```
//!
//! Exclusion sets behave differently by direction: walking up, an excluded
//! ancestor stops the walk; walking down, an excluded descendant is pruned
//! together with its subtree while sibling branches continue.

pub mod arena;
pub mod errors;
pub mod node;
pub mod traversal;
pub mod tree_queue;
pub mod tree_stack;
pub mod tree_traits;
/// Test-support helpers (tracing subscriber setup); not part of the stable API.
#[doc(hidden)]
pub mod util;

pub use arena::{NodeId, Tree};
pub use errors::{TreeError, TreeResult};
pub use node::{NodeRef, ParentIterator};
pub use traversal::{Traversal, TraversalOptions, ValueSet, UNBOUNDED};
pub use tree_queue::ChildIterator;
pub use tree_stack::DepthFirstIterator;
pub use tree_traits::TreeNodeConvert;
