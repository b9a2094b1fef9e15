//! Ancestry value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The supported ancestries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Ancestry {
    #[default]
    Human,
    Singer,
}

impl Ancestry {
    /// Returns the ancestry's display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Human => "Human",
            Self::Singer => "Singer",
        }
    }

    /// Returns all ancestries in display order.
    pub fn all() -> [Ancestry; 2] {
        [Self::Human, Self::Singer]
    }
}

impl fmt::Display for Ancestry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Ancestry {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ancestry::all()
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::parse(format!("Unknown ancestry: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_human() {
        assert_eq!(Ancestry::default(), Ancestry::Human);
    }

    #[test]
    fn test_ancestry_from_str() {
        assert_eq!("Singer".parse::<Ancestry>(), Ok(Ancestry::Singer));
        assert!("Elf".parse::<Ancestry>().is_err());
    }
}
