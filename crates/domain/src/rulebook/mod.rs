//! Static rulebook tables.
//!
//! Everything in this module is immutable input data: enumerations of the
//! legal selections and the fixed mappings between them. The character state
//! model treats these as authoritative; nothing here is computed at runtime.

pub mod ancestry;
pub mod attributes;
pub mod cultures;
pub mod expertise;
pub mod paths;
pub mod skills;
pub mod talents;

pub use ancestry::Ancestry;
pub use attributes::{Attribute, ATTRIBUTE_MAX, ATTRIBUTE_POINT_BUDGET};
pub use cultures::{Culture, MAX_CULTURES};
pub use expertise::{
    all_expertise_options, ARMOR_EXPERTISE_OPTIONS, CULTURAL_EXPERTISE_OPTIONS,
    UTILITY_EXPERTISE_OPTIONS, WEAPON_EXPERTISE_OPTIONS,
};
pub use paths::Path;
pub use skills::{Skill, SKILL_COUNT, SKILL_RANK_MAX, STARTING_SKILL_POINTS};
pub use talents::{sub_picks_for, SkillRequirement, SubPick};
