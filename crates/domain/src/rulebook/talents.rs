//! Key-talent specialty refinements and their requirements.
//!
//! Some specialties offer an optional sub-pick gated by a minimum skill
//! modifier. A stored sub-pick that no longer meets its requirement after a
//! skill or attribute change is cleared by the character state model.

use serde::{Deserialize, Serialize};

use super::skills::Skill;

/// A minimum-skill-modifier requirement on a specialty refinement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRequirement {
    pub skill: Skill,
    pub min_modifier: u8,
}

/// An optional refinement of a key-talent specialty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubPick {
    pub name: &'static str,
    pub requirement: SkillRequirement,
}

/// Returns the sub-picks available for a specialty, empty for specialties
/// without refinements.
pub fn sub_picks_for(specialty: &str) -> &'static [SubPick] {
    match specialty {
        "Investigator" => &[SubPick {
            name: "Forensics",
            requirement: SkillRequirement {
                skill: Skill::Deduction,
                min_modifier: 1,
            },
        }],
        "Tracker" => &[SubPick {
            name: "Pathfinder",
            requirement: SkillRequirement {
                skill: Skill::Survival,
                min_modifier: 1,
            },
        }],
        "Surgeon" => &[SubPick {
            name: "Field Medic",
            requirement: SkillRequirement {
                skill: Skill::Medicine,
                min_modifier: 2,
            },
        }],
        "Officer" => &[SubPick {
            name: "Drillmaster",
            requirement: SkillRequirement {
                skill: Skill::Leadership,
                min_modifier: 1,
            },
        }],
        "Duelist" => &[SubPick {
            name: "Stance Master",
            requirement: SkillRequirement {
                skill: Skill::LightWeaponry,
                min_modifier: 2,
            },
        }],
        _ => &[],
    }
}
