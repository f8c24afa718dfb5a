//! Charter document model

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::EditError;

/// The team charter being authored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Charter {
    /// Team mission statement
    pub mission: String,
    /// Focus areas in priority order
    pub focus_areas: Vec<String>,
    /// Measurable goals
    pub measures: Vec<Measure>,
    /// Decisions and who holds which rights over them
    pub decisions: Vec<Decision>,
    /// Team roles
    pub roles: Vec<Role>,
}

impl Default for Charter {
    fn default() -> Self {
        Self {
            mission: String::new(),
            focus_areas: Vec::new(),
            measures: Vec::new(),
            decisions: Vec::new(),
            roles: vec![Role::default()],
        }
    }
}

impl Charter {
    /// Create an empty charter with a single blank role
    pub fn new() -> Self {
        Self::default()
    }
}

/// A goal statement: a verb plus free text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measure {
    /// Unset until the user picks one
    #[serde(with = "verb_or_empty")]
    pub verb: Option<MeasureVerb>,
    pub description: String,
}

/// A named decision with its assigned rights
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub name: String,
    pub rights: BTreeSet<DecisionRight>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    pub focus: String,
}

/// Verbs a measure can start with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MeasureVerb {
    Grow,
    Improve,
    Decrease,
    Maintain,
    Accelerate,
}

impl MeasureVerb {
    pub const ALL: [MeasureVerb; 5] = [
        MeasureVerb::Grow,
        MeasureVerb::Improve,
        MeasureVerb::Decrease,
        MeasureVerb::Maintain,
        MeasureVerb::Accelerate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MeasureVerb::Grow => "Grow",
            MeasureVerb::Improve => "Improve",
            MeasureVerb::Decrease => "Decrease",
            MeasureVerb::Maintain => "Maintain",
            MeasureVerb::Accelerate => "Accelerate",
        }
    }
}

impl fmt::Display for MeasureVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeasureVerb {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|verb| verb.as_str() == s)
            .ok_or_else(|| EditError::UnknownVerb(s.to_string()))
    }
}

/// Rights that can be assigned on a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DecisionRight {
    Decides,
    Informs,
    Consults,
    Executes,
}

impl DecisionRight {
    pub const ALL: [DecisionRight; 4] = [
        DecisionRight::Decides,
        DecisionRight::Informs,
        DecisionRight::Consults,
        DecisionRight::Executes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DecisionRight::Decides => "Decides",
            DecisionRight::Informs => "Informs",
            DecisionRight::Consults => "Consults",
            DecisionRight::Executes => "Executes",
        }
    }
}

impl fmt::Display for DecisionRight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecisionRight {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|right| right.as_str() == s)
            .ok_or_else(|| EditError::UnknownRight(s.to_string()))
    }
}

/// Direction to move a focus area within the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Index of the neighbour in this direction, if there is one
    pub fn target(self, index: usize) -> Option<usize> {
        match self {
            Direction::Up => index.checked_sub(1),
            Direction::Down => index.checked_add(1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("up"),
            Direction::Down => f.write_str("down"),
        }
    }
}

/// Serializes an unset verb as `""`
mod verb_or_empty {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::MeasureVerb;

    pub fn serialize<S: Serializer>(verb: &Option<MeasureVerb>, s: S) -> Result<S::Ok, S::Error> {
        match verb {
            Some(verb) => verb.serialize(s),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<MeasureVerb>, D::Error> {
        let raw = String::deserialize(d)?;
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(serde::de::Error::custom)
    }
}
