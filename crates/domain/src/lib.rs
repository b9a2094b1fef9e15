//! Stormforge Domain - character state model, rulebook tables, and derived
//! statistics.
//!
//! This crate holds the rules core of the character builder: the
//! [`Character`] state value with its invariant-enforcing mutations, the
//! static rulebook data, and the pure derivation functions the export layer
//! and the UI read from. It performs no I/O and owns no clock; callers
//! supply external inputs.

pub mod character;
pub mod derived;
pub mod error;
pub mod rulebook;

pub use character::Character;
pub use error::DomainError;
pub use rulebook::{
    all_expertise_options, sub_picks_for, Ancestry, Attribute, Culture, Path, Skill,
    SkillRequirement, SubPick, ARMOR_EXPERTISE_OPTIONS, ATTRIBUTE_MAX, ATTRIBUTE_POINT_BUDGET,
    CULTURAL_EXPERTISE_OPTIONS, MAX_CULTURES, SKILL_COUNT, SKILL_RANK_MAX,
    STARTING_SKILL_POINTS, UTILITY_EXPERTISE_OPTIONS, WEAPON_EXPERTISE_OPTIONS,
};
