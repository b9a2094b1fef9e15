//! Culture value object - background selections that confer expertise.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Maximum number of cultures a character may select.
pub const MAX_CULTURES: usize = 2;

/// The selectable cultures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Culture {
    Alethi,
    Azish,
    Herdazian,
    Iriali,
    Kharbranthian,
    Listeners,
    Natan,
    Reshi,
    Shin,
    Thaylen,
    Unkalaki,
    Veden,
}

impl Culture {
    /// Returns the culture's display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Alethi => "Alethi",
            Self::Azish => "Azish",
            Self::Herdazian => "Herdazian",
            Self::Iriali => "Iriali",
            Self::Kharbranthian => "Kharbranthian",
            Self::Listeners => "Listeners",
            Self::Natan => "Natan",
            Self::Reshi => "Reshi",
            Self::Shin => "Shin",
            Self::Thaylen => "Thaylen",
            Self::Unkalaki => "Unkalaki",
            Self::Veden => "Veden",
        }
    }

    /// Returns the expertise label conferred by this culture.
    ///
    /// The culture list and the cultural-expertise list disagree on one
    /// label: the "Listeners" culture grants "Listener" expertise.
    pub fn expertise_label(&self) -> &'static str {
        match self {
            Self::Listeners => "Listener",
            other => other.name(),
        }
    }

    /// Returns all cultures in display order.
    pub fn all() -> [Culture; 12] {
        [
            Self::Alethi,
            Self::Azish,
            Self::Herdazian,
            Self::Iriali,
            Self::Kharbranthian,
            Self::Listeners,
            Self::Natan,
            Self::Reshi,
            Self::Shin,
            Self::Thaylen,
            Self::Unkalaki,
            Self::Veden,
        ]
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Culture {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Culture::all()
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::parse(format!("Unknown culture: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listeners_normalization() {
        assert_eq!(Culture::Listeners.expertise_label(), "Listener");
        assert_eq!(Culture::Shin.expertise_label(), "Shin");
    }

    #[test]
    fn test_culture_from_str() {
        assert_eq!("Alethi".parse::<Culture>(), Ok(Culture::Alethi));
        assert_eq!("veden".parse::<Culture>(), Ok(Culture::Veden));
        assert!("Terris".parse::<Culture>().is_err());
    }
}
