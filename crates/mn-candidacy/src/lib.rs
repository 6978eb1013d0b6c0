//! Candidate entities and their simplifications.
//!
//! # Architecture
//!
//! Filtered reactions are consolidated into candidates, the unit the network
//! is assembled from:
//!
//! - **Candidates**: one reaction candidate per filtered reaction; metabolite
//!   candidates per metabolite, or per (metabolite, compartment) pair when
//!   compartmentalization is on
//! - **Summary**: searchable, sortable counts for the candidates menu
//! - **Simplification**: omission and replication designations per candidate,
//!   default (automatic) or custom (user toggled)

pub mod candidates;
pub mod simplification;
pub mod summary;

pub use candidates::{
    CandidateMetabolite, CandidateParticipant, CandidateReaction, Candidates, Category,
    collect_candidates,
};
pub use simplification::{
    Method, Simplification, Simplifications, SimplificationsMap, change_simplifications,
    create_include_default_simplifications, determine_default_simplifications,
    remove_default_simplifications, restore_simplifications,
};
pub use summary::{
    CandidatesCollection, CandidatesSearches, CandidatesSorts, CandidatesSummaries,
    collect_candidates_prepare_summaries, create_initial_candidates_searches,
    create_initial_candidates_sorts, prepare_candidates_summaries,
};
