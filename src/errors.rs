use thiserror::Error;

use crate::arena::NodeId;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError {
    #[error("Node not found in tree: {0}")]
    NodeNotFound(NodeId),
}

pub type TreeResult<T> = Result<T, TreeError>;
