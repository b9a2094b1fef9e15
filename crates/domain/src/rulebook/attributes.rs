//! Attribute value object - the six core character attributes.
//!
//! Provides type safety for attribute references instead of magic strings
//! like "strength". State storage uses the lowercase canonical key; the
//! capitalized and abbreviated forms are accepted only when parsing
//! external input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Total points that may be spread across the six attributes.
pub const ATTRIBUTE_POINT_BUDGET: u8 = 12;

/// Maximum value of a single attribute at character creation.
pub const ATTRIBUTE_MAX: u8 = 3;

/// The six core character attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    /// Strength - raw physical power, carrying and lifting
    Strength,
    /// Speed - agility and movement
    Speed,
    /// Intellect - reasoning; also caps chosen expertise
    Intellect,
    /// Willpower - resolve and recovery
    Willpower,
    /// Awareness - senses and perception
    Awareness,
    /// Presence - force of personality
    Presence,
}

impl Attribute {
    /// Returns the lowercase canonical key (e.g., "strength").
    ///
    /// This is the form used for state storage and for the `stat` field of
    /// exported skill entries.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Speed => "speed",
            Self::Intellect => "intellect",
            Self::Willpower => "willpower",
            Self::Awareness => "awareness",
            Self::Presence => "presence",
        }
    }

    /// Returns the short uppercase abbreviation (e.g., "STR").
    pub fn abbrev(&self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Speed => "SPD",
            Self::Intellect => "INT",
            Self::Willpower => "WIL",
            Self::Awareness => "AWS",
            Self::Presence => "PRE",
        }
    }

    /// Returns the capitalized display name (e.g., "Strength").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Speed => "Speed",
            Self::Intellect => "Intellect",
            Self::Willpower => "Willpower",
            Self::Awareness => "Awareness",
            Self::Presence => "Presence",
        }
    }

    /// Returns all six attributes in canonical order.
    pub fn all() -> [Attribute; 6] {
        [
            Self::Strength,
            Self::Speed,
            Self::Intellect,
            Self::Willpower,
            Self::Awareness,
            Self::Presence,
        ]
    }

    /// Position in canonical order, used for array-backed storage.
    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Strength => 0,
            Self::Speed => 1,
            Self::Intellect => 2,
            Self::Willpower => 3,
            Self::Awareness => 4,
            Self::Presence => 5,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Attribute {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strength" | "str" => Ok(Self::Strength),
            "speed" | "spd" => Ok(Self::Speed),
            "intellect" | "int" => Ok(Self::Intellect),
            "willpower" | "wil" => Ok(Self::Willpower),
            "awareness" | "aws" => Ok(Self::Awareness),
            "presence" | "pre" => Ok(Self::Presence),
            _ => Err(DomainError::parse(format!("Unknown attribute: {}", s))),
        }
    }
}
