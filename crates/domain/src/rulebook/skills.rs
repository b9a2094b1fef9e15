//! The fixed 18-skill table and its governing attributes.
//!
//! Table order is part of the export contract: skill entries are emitted in
//! this order, not alphabetically and not in edit order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::attributes::Attribute;
use crate::error::DomainError;

/// Number of skills in the fixed table.
pub const SKILL_COUNT: usize = 18;

/// Maximum rank a skill can ever reach.
pub const SKILL_RANK_MAX: u8 = 5;

/// Extra skill points available at level 1, beyond the path's free rank.
pub const STARTING_SKILL_POINTS: u8 = 4;

/// The fixed set of character skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    Agility,
    Athletics,
    Crafting,
    Deception,
    Deduction,
    Discipline,
    HeavyWeaponry,
    Insight,
    Intimidation,
    Leadership,
    LightWeaponry,
    Lore,
    Medicine,
    Perception,
    Persuasion,
    Stealth,
    Survival,
    Thievery,
}

impl Skill {
    /// Returns the display name (e.g., "Heavy Weaponry").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Agility => "Agility",
            Self::Athletics => "Athletics",
            Self::Crafting => "Crafting",
            Self::Deception => "Deception",
            Self::Deduction => "Deduction",
            Self::Discipline => "Discipline",
            Self::HeavyWeaponry => "Heavy Weaponry",
            Self::Insight => "Insight",
            Self::Intimidation => "Intimidation",
            Self::Leadership => "Leadership",
            Self::LightWeaponry => "Light Weaponry",
            Self::Lore => "Lore",
            Self::Medicine => "Medicine",
            Self::Perception => "Perception",
            Self::Persuasion => "Persuasion",
            Self::Stealth => "Stealth",
            Self::Survival => "Survival",
            Self::Thievery => "Thievery",
        }
    }

    /// Returns the attribute that governs this skill's modifier.
    pub fn governing_attribute(&self) -> Attribute {
        match self {
            Self::Agility => Attribute::Speed,
            Self::Athletics => Attribute::Strength,
            Self::Crafting => Attribute::Intellect,
            Self::Deception => Attribute::Presence,
            Self::Deduction => Attribute::Intellect,
            Self::Discipline => Attribute::Willpower,
            Self::HeavyWeaponry => Attribute::Strength,
            Self::Insight => Attribute::Awareness,
            Self::Intimidation => Attribute::Willpower,
            Self::Leadership => Attribute::Presence,
            Self::LightWeaponry => Attribute::Speed,
            Self::Lore => Attribute::Intellect,
            Self::Medicine => Attribute::Intellect,
            Self::Perception => Attribute::Awareness,
            Self::Persuasion => Attribute::Presence,
            Self::Stealth => Attribute::Speed,
            Self::Survival => Attribute::Awareness,
            Self::Thievery => Attribute::Speed,
        }
    }

    /// Returns all skills in fixed table order.
    pub fn all() -> [Skill; SKILL_COUNT] {
        [
            Self::Agility,
            Self::Athletics,
            Self::Crafting,
            Self::Deception,
            Self::Deduction,
            Self::Discipline,
            Self::HeavyWeaponry,
            Self::Insight,
            Self::Intimidation,
            Self::Leadership,
            Self::LightWeaponry,
            Self::Lore,
            Self::Medicine,
            Self::Perception,
            Self::Persuasion,
            Self::Stealth,
            Self::Survival,
            Self::Thievery,
        ]
    }

    /// Position in fixed table order, used for array-backed rank storage.
    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Agility => 0,
            Self::Athletics => 1,
            Self::Crafting => 2,
            Self::Deception => 3,
            Self::Deduction => 4,
            Self::Discipline => 5,
            Self::HeavyWeaponry => 6,
            Self::Insight => 7,
            Self::Intimidation => 8,
            Self::Leadership => 9,
            Self::LightWeaponry => 10,
            Self::Lore => 11,
            Self::Medicine => 12,
            Self::Perception => 13,
            Self::Persuasion => 14,
            Self::Stealth => 15,
            Self::Survival => 16,
            Self::Thievery => 17,
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Skill {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Skill::all()
            .into_iter()
            .find(|skill| skill.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::parse(format!("Unknown skill: {}", s)))
    }
}
