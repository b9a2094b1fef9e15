//! Derived statistics - pure functions of a [`Character`].
//!
//! Nothing here is stored; every value is recomputed on demand. The tiered
//! lookups share one band shape over an attribute value: 0, then inclusive
//! upper bounds at 2, 4, 6 and 8, then a top tier. Attributes are capped at
//! 3 during creation, but the tables cover the full band range so derived
//! displays stay correct for any input.

use crate::character::Character;
use crate::rulebook::{Attribute, Skill};

// =============================================================================
// Tiered lookups
// =============================================================================

/// Carrying capacity in pounds, from strength.
pub fn carry_capacity_lbs(strength: u8) -> u32 {
    match strength {
        0 => 50,
        1..=2 => 100,
        3..=4 => 250,
        5..=6 => 500,
        7..=8 => 2500,
        _ => 5000,
    }
}

/// Lifting capacity in pounds, from strength.
pub fn lift_capacity_lbs(strength: u8) -> u32 {
    match strength {
        0 => 100,
        1..=2 => 200,
        3..=4 => 500,
        5..=6 => 1000,
        7..=8 => 5000,
        _ => 10000,
    }
}

/// Movement rate in feet per action, from speed.
pub fn movement_feet(speed: u8) -> u32 {
    match speed {
        0 => 20,
        1..=2 => 25,
        3..=4 => 30,
        5..=6 => 40,
        7..=8 => 60,
        _ => 80,
    }
}

/// Recovery die size, from willpower.
pub fn recovery_die(willpower: u8) -> &'static str {
    match willpower {
        0 => "d4",
        1..=2 => "d6",
        3..=4 => "d8",
        5..=6 => "d10",
        7..=8 => "d12",
        _ => "d20",
    }
}

/// Senses range, from awareness. The top tier is qualitative.
pub fn senses_range(awareness: u8) -> &'static str {
    match awareness {
        0 => "5 feet",
        1..=2 => "10 feet",
        3..=4 => "20 feet",
        5..=6 => "50 feet",
        7..=8 => "100 feet",
        _ => "Unaffected",
    }
}

// =============================================================================
// Defenses and resources
// =============================================================================

/// Physical defense: 10 + strength + speed.
pub fn physical_defense(ch: &Character) -> u32 {
    10 + u32::from(ch.attribute(Attribute::Strength)) + u32::from(ch.attribute(Attribute::Speed))
}

/// Cognitive defense: 10 + intellect + willpower.
pub fn cognitive_defense(ch: &Character) -> u32 {
    10 + u32::from(ch.attribute(Attribute::Intellect))
        + u32::from(ch.attribute(Attribute::Willpower))
}

/// Spiritual defense: 10 + awareness + presence.
pub fn spiritual_defense(ch: &Character) -> u32 {
    10 + u32::from(ch.attribute(Attribute::Awareness))
        + u32::from(ch.attribute(Attribute::Presence))
}

/// Hit-point total: 10 + strength.
pub fn hp_total(ch: &Character) -> u32 {
    10 + u32::from(ch.attribute(Attribute::Strength))
}

/// Focus total: willpower + 2.
pub fn focus_total(ch: &Character) -> u32 {
    u32::from(ch.attribute(Attribute::Willpower)) + 2
}

// =============================================================================
// Skills and expertise
// =============================================================================

/// Sum of all 18 skill ranks.
pub fn total_skill_ranks(ch: &Character) -> u32 {
    Skill::all()
        .into_iter()
        .map(|s| u32::from(ch.skill_rank(s)))
        .sum()
}

/// Number of talents the character holds (currently just the key talent).
pub fn total_talents(ch: &Character) -> u32 {
    u32::from(ch.key_talent().is_some())
}

/// Resolves the character's full expertise list for display and export.
///
/// The union of culture-granted labels (normalized, e.g. Listeners →
/// "Listener") followed by the player's chosen labels, duplicates removed,
/// insertion order preserved. Stable order matters for reproducible export.
pub fn resolved_expertise(ch: &Character) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let labels = ch
        .cultures()
        .iter()
        .map(|c| c.expertise_label())
        .chain(ch.expertise().iter().map(String::as_str));
    for label in labels {
        if !out.iter().any(|existing| existing == label) {
            out.push(label.to_string());
        }
    }
    out
}
