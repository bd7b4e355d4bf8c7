//! Participant records consumed by the pairing engine.
//!
//! Only `id`, `experience` and `pairing_difficulty` influence matching. The
//! remaining fields are carried through untouched so callers can render
//! notifications from the partition without a second lookup.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Stable, unique identifier of a participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Interview difficulty, ordered easy < medium < hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn ordinal(self) -> u8 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(Error::Validation(format!("unknown difficulty '{}'", other))),
        }
    }
}

/// Difficulties a participant is willing to interview others at.
///
/// Never empty: construction and deserialization reject an empty set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Difficulty>", into = "Vec<Difficulty>")]
pub struct PairingDifficulty(BTreeSet<Difficulty>);

impl PairingDifficulty {
    pub fn new(levels: impl IntoIterator<Item = Difficulty>) -> Result<Self> {
        let set: BTreeSet<Difficulty> = levels.into_iter().collect();
        if set.is_empty() {
            return Err(Error::Validation(
                "pairing difficulty must name at least one level".to_string(),
            ));
        }
        Ok(Self(set))
    }

    /// Easiest level offered. Drives the compatibility check.
    pub fn floor(&self) -> Difficulty {
        // Non-empty by construction.
        self.0.iter().next().copied().unwrap_or(Difficulty::Easy)
    }

}

impl TryFrom<Vec<Difficulty>> for PairingDifficulty {
    type Error = Error;

    fn try_from(levels: Vec<Difficulty>) -> Result<Self> {
        Self::new(levels)
    }
}

impl From<PairingDifficulty> for Vec<Difficulty> {
    fn from(p: PairingDifficulty) -> Self {
        p.0.into_iter().collect()
    }
}

/// Per-participant interview preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantConfig {
    pub experience: Difficulty,
    pub pairing_difficulty: PairingDifficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: ParticipantId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Signed up for tomorrow's session.
    #[serde(default)]
    pub is_pairing_tomorrow: bool,
    #[serde(default)]
    pub is_skipping_tomorrow: bool,
    pub config: ParticipantConfig,
}

impl Participant {
    /// Create a participant signed up for the next session.
    pub fn new(
        id: impl Into<String>,
        experience: Difficulty,
        pairing_difficulty: PairingDifficulty,
    ) -> Self {
        Self {
            id: ParticipantId::new(id),
            name: String::new(),
            email: String::new(),
            is_pairing_tomorrow: true,
            is_skipping_tomorrow: false,
            config: ParticipantConfig {
                experience,
                pairing_difficulty,
                environment: None,
                comments: None,
            },
        }
    }

    pub fn experience(&self) -> Difficulty {
        self.config.experience
    }

    pub fn pairing_difficulty(&self) -> &PairingDifficulty {
        &self.config.pairing_difficulty
    }

    /// Whether this participant belongs in the next day's pool.
    pub fn is_eligible(&self) -> bool {
        self.is_pairing_tomorrow && !self.is_skipping_tomorrow
    }

    /// Display label: name when known, id otherwise.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            self.id.as_str()
        } else {
            &self.name
        }
    }
}

/// Select the participants signed up for the next session, preserving order.
pub fn eligible_pool(records: &[Participant]) -> Vec<Participant> {
    records.iter().filter(|p| p.is_eligible()).cloned().collect()
}

/// Load participant records from a JSON array.
pub fn parse_participants(json: &str) -> Result<Vec<Participant>> {
    Ok(serde_json::from_str(json)?)
}
