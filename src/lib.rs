pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod log;
pub mod util;

pub use crate::core::{is_compatible, Difficulty, PairingDifficulty, Participant, ParticipantId};
pub use engine::{
    compute_daily_pairing, compute_daily_pairing_async, compute_daily_pairing_with, EngineConfig,
    Partition, SearchStrategy,
};
pub use error::{Error, Result};
