use thiserror::Error;

use crate::geo::NodeId;

/// Convenient result alias for the footpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a nearest-node search had no footway nodes to choose from.
    #[error("no candidate footway nodes to search")]
    NoCandidates,

    /// Raised when a footway references a node missing from the node table.
    #[error("footway references unknown node {id}")]
    UnknownNode { id: NodeId },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
