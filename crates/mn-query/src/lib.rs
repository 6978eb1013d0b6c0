//! Queries over the network and their combination into a subnetwork.
//!
//! # Architecture
//!
//! Every query reads the full network and yields a selection of its nodes and
//! links. The selection is then combined with the current subnetwork:
//!
//! - **inclusion** adds the selection to the subnetwork
//! - **exclusion** removes the selection, and any link left dangling, from it
//!
//! Queries naming a node that is not in the network do not pass: they yield
//! `None` and the caller leaves its state alone.
//!
//! # Example
//!
//! ```
//! use mn_core::Role;
//! use mn_network::{NetworkBuilder, NodeRecord};
//! use mn_query::{Combination, ProximityDirection, Query, execute_query_combination};
//!
//! let mut builder = NetworkBuilder::new();
//! builder.add_node(NodeRecord::reaction("R1", "R1", "first", false));
//! builder.add_node(NodeRecord::metabolite("A", "A", "alpha", None, false));
//! builder.add_link("A", "R1", Role::Reactant, false);
//! let network = builder.build().unwrap();
//!
//! let query = Query::Proximity {
//!     focus: "A".into(),
//!     direction: ProximityDirection::Successors,
//!     depth: 1,
//! };
//! let subnetwork =
//!     execute_query_combination(&query, Combination::Inclusion, &network, &Default::default())
//!         .unwrap();
//! assert_eq!(subnetwork.nodes.len(), 2);
//! ```

pub mod combination;
pub mod execute;
pub mod path;
pub mod query;
pub mod traversal;

pub use combination::{combine_elements, restore_subnetwork};
pub use execute::{
    execute_query, execute_query_combination, execute_proximity_expansion, execute_rogue_union,
};
pub use path::{Path, find_paths};
pub use query::{Combination, PathDirection, ProximityDirection, Query, QueryType};
pub use traversal::{collect_proximity, select_elements};
