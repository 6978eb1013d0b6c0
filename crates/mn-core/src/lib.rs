//! mn-core: stable foundation for metanet.
//!
//! Contains:
//! - ids (identifier aliases and the composite identifiers derived from them)
//! - kinds (entity kinds and participant roles shared by every stage)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod kinds;

// Re-exports: nice ergonomics for downstream crates
pub use error::{MnError, MnResult};
pub use ids::*;
pub use kinds::{EntityKind, Role};
