//! Network-specific error types.

use mn_core::{LinkId, MnError, NodeId};
use thiserror::Error;

/// Network construction and validation errors.
///
/// Assembly never produces these for consistent candidates; they signal a
/// broken invariant, not bad user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Node {node} appears more than once")]
    DuplicateNode { node: NodeId },

    #[error("Link {link} appears more than once")]
    DuplicateLink { link: LinkId },

    /// A link refers to a node that doesn't exist.
    #[error("Link {link} refers to non-existent node {node}")]
    DanglingLink { link: LinkId, node: NodeId },

    /// A link joins two nodes of the same kind.
    #[error("Link {link} joins two nodes of the same kind")]
    NonBipartite { link: LinkId },

    /// Reactant links must run metabolite -> reaction, products the reverse.
    #[error("Link {link} runs against its role")]
    RoleMismatch { link: LinkId },
}

impl From<NetworkError> for MnError {
    fn from(err: NetworkError) -> Self {
        MnError::Invariant {
            what: err.to_string(),
        }
    }
}
