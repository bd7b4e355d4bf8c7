//! Core domain models for interview pairing.
//!
//! Participants, the pairwise compatibility rule and the compatibility graph
//! built from them.

pub mod compat;
pub mod graph;
pub mod participant;

pub use compat::is_compatible;
pub use graph::CompatibilityGraph;
pub use participant::{
    eligible_pool, parse_participants, Difficulty, PairingDifficulty, Participant,
    ParticipantConfig, ParticipantId,
};
