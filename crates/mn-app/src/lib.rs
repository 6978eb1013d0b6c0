//! Shared application service layer for metanet.
//!
//! This crate sequences the pipeline crates per user intent for any front
//! end: loading of models, settings and measurements, the typed application
//! state, and one action per intent returning the update to submit to that
//! state.

pub mod actions;
pub mod config;
pub mod error;
pub mod measurement_service;
pub mod model_service;
pub mod state;

// Re-export key types for convenience
pub use actions::*;
pub use config::{ExplorationConfig, QueryControls, load_config, parse_config};
pub use error::{AppError, AppResult};
pub use measurement_service::{load_measurements, parse_measurements};
pub use model_service::{ModelSummary, check_model, load_model, summarize_model};
pub use state::{AppState, QuerySelections, StateUpdate};
