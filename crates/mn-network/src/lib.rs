//! mn-network: network layer for metanet.
//!
//! Provides:
//! - Node and link records of the bipartite reaction/metabolite network
//! - Assembly of the network from candidates and their simplifications
//! - Incremental network builder with validation
//! - Adjacency index for traversal
//! - Network summaries
//!
//! # Example
//!
//! ```
//! use mn_core::{EntityKind, Role};
//! use mn_network::{NetworkBuilder, NodeRecord, determine_network_summary};
//!
//! let mut builder = NetworkBuilder::new();
//! builder.add_node(NodeRecord::reaction("R1", "R1", "first", false));
//! builder.add_node(NodeRecord::metabolite("A", "A", "alpha", None, false));
//! builder.add_link("A", "R1", Role::Reactant, false);
//! let network = builder.build().unwrap();
//!
//! let summary = determine_network_summary(&network);
//! assert_eq!(summary.nodes, 2);
//! assert_eq!(summary.links, 1);
//! assert_eq!(network.node("R1").map(|n| n.entity), Some(EntityKind::Reaction));
//! ```

pub mod assembly;
pub mod builder;
pub mod error;
pub mod indexing;
pub mod records;
pub mod summary;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use assembly::{copy_network_elements, create_network_elements};
pub use builder::NetworkBuilder;
pub use error::NetworkError;
pub use indexing::Adjacency;
pub use records::{LinkRecord, NetworkElements, NodeRecord};
pub use summary::{NetworkSummary, determine_network_summary};
