//! Traversal parameters shared by the query operations on [`NodeRef`](crate::NodeRef).

use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Set of node values used to filter traversals.
///
/// Walking up, a match stops the walk. Walking down, a match prunes the
/// matching node together with its subtree.
pub type ValueSet<T> = HashSet<T>;

/// Depth limit meaning "no limit".
pub const UNBOUNDED: usize = usize::MAX;

/// Subtree traversal strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Traversal {
    /// Pre-order, honours a depth limit.
    DepthFirst,
    /// Level order. Only valid with an [`UNBOUNDED`] depth.
    #[default]
    BreadthFirst,
}

/// Bundled traversal parameters with the library defaults:
/// breadth-first, unbounded, nothing excluded.
///
/// Deserializable, so a query can be kept in a config file:
///
/// ```toml
/// traversal = "depth-first"
/// max_depth = 2
/// exclude = ["build", "target"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    default,
    bound(
        serialize = "T: Serialize + Eq + Hash",
        deserialize = "T: Deserialize<'de> + Eq + Hash"
    )
)]
pub struct TraversalOptions<T> {
    pub traversal: Traversal,
    /// Left out when unbounded: TOML integers stop at `i64::MAX`.
    #[serde(skip_serializing_if = "depth_is_unbounded")]
    pub max_depth: usize,
    pub exclude: ValueSet<T>,
}

impl<T> Default for TraversalOptions<T> {
    fn default() -> Self {
        Self {
            traversal: Traversal::default(),
            max_depth: UNBOUNDED,
            exclude: ValueSet::default(),
        }
    }
}

impl<T: Eq + Hash> TraversalOptions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Limits how many levels a query descends.
    ///
    /// Child queries only honour a limit depth-first, so pair this with
    /// `with_traversal(Traversal::DepthFirst)`; a bounded breadth-first
    /// child query panics. Parent queries accept it in either mode.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Adds values to the exclusion set.
    pub fn excluding<I: IntoIterator<Item = T>>(mut self, values: I) -> Self {
        self.exclude.extend(values);
        self
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_depth == UNBOUNDED
    }
}

fn depth_is_unbounded(max_depth: &usize) -> bool {
    *max_depth == UNBOUNDED
}
