//! Starting path value object and its per-path rule data.
//!
//! A path gates three things: a free starting skill pinned at rank 1, a key
//! talent, and a pair of highlighted attributes the UI nudges players
//! toward. Each path also offers three key-talent specialties.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::attributes::Attribute;
use super::skills::Skill;
use crate::error::DomainError;

/// The six starting paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Path {
    Agent,
    Envoy,
    Hunter,
    Leader,
    Scholar,
    Warrior,
}

impl Path {
    /// Returns the path's display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Agent => "Agent",
            Self::Envoy => "Envoy",
            Self::Hunter => "Hunter",
            Self::Leader => "Leader",
            Self::Scholar => "Scholar",
            Self::Warrior => "Warrior",
        }
    }

    /// Returns the free starting skill pinned at rank 1 for this path.
    pub fn free_skill(&self) -> Skill {
        match self {
            Self::Agent => Skill::Insight,
            Self::Envoy => Skill::Discipline,
            Self::Hunter => Skill::Perception,
            Self::Leader => Skill::Leadership,
            Self::Scholar => Skill::Lore,
            Self::Warrior => Skill::Athletics,
        }
    }

    /// Returns the key talent granted by this path.
    pub fn key_talent(&self) -> &'static str {
        match self {
            Self::Agent => "Opportunist",
            Self::Envoy => "Rousing Presence",
            Self::Hunter => "Seek Quarry",
            Self::Leader => "Decisive Command",
            Self::Scholar => "Erudition",
            Self::Warrior => "Vigilant Stance",
        }
    }

    /// Returns the two attributes this path highlights in the UI.
    pub fn highlighted_attributes(&self) -> [Attribute; 2] {
        match self {
            Self::Agent => [Attribute::Speed, Attribute::Intellect],
            Self::Envoy => [Attribute::Presence, Attribute::Willpower],
            Self::Hunter => [Attribute::Awareness, Attribute::Speed],
            Self::Leader => [Attribute::Presence, Attribute::Intellect],
            Self::Scholar => [Attribute::Intellect, Attribute::Willpower],
            Self::Warrior => [Attribute::Strength, Attribute::Speed],
        }
    }

    /// Returns the key-talent specialties offered by this path.
    pub fn specialties(&self) -> &'static [&'static str] {
        match self {
            Self::Agent => &["Investigator", "Spy", "Thief"],
            Self::Envoy => &["Diplomat", "Faithful", "Mentor"],
            Self::Hunter => &["Archer", "Assassin", "Tracker"],
            Self::Leader => &["Champion", "Officer", "Politico"],
            Self::Scholar => &["Artifabrian", "Strategist", "Surgeon"],
            Self::Warrior => &["Duelist", "Shardbearer", "Soldier"],
        }
    }

    /// Returns all paths in display order.
    pub fn all() -> [Path; 6] {
        [
            Self::Agent,
            Self::Envoy,
            Self::Hunter,
            Self::Leader,
            Self::Scholar,
            Self::Warrior,
        ]
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Path {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::all()
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::parse(format!("Unknown path: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_skill_map() {
        assert_eq!(Path::Agent.free_skill(), Skill::Insight);
        assert_eq!(Path::Scholar.free_skill(), Skill::Lore);
        assert_eq!(Path::Warrior.free_skill(), Skill::Athletics);
    }

    #[test]
    fn test_key_talent_map() {
        assert_eq!(Path::Hunter.key_talent(), "Seek Quarry");
        assert_eq!(Path::Leader.key_talent(), "Decisive Command");
    }

    #[test]
    fn test_every_path_offers_three_specialties() {
        for path in Path::all() {
            assert_eq!(path.specialties().len(), 3, "{}", path);
        }
    }

    #[test]
    fn test_path_from_str() {
        assert_eq!("Scholar".parse::<Path>(), Ok(Path::Scholar));
        assert_eq!("warrior".parse::<Path>(), Ok(Path::Warrior));
        assert!("Pilot".parse::<Path>().is_err());
    }
}
