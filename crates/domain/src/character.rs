//! Character state model - the single in-progress character.
//!
//! # Design
//!
//! `Character` is an immutable-update value: every mutation consumes `self`
//! and returns the next state. Invalid mutations are silently absorbed and
//! return the state unchanged - the form layer is expected to prevent most
//! invalid input via disabled controls, and this model is the second line of
//! defense. No mutation here ever panics or returns an error.
//!
//! # Invariants
//!
//! - each attribute stays in [0, 3] and the six never sum past 12
//! - skill ranks move one step at a time, capped at 2 below level 2 (else 5)
//! - the path's free skill never drops below rank 1
//! - while level < 2, at most 4 extra skill points beyond the free rank
//! - at most 2 cultures; chosen expertise count never grows past intellect
//! - a specialty sub-pick is cleared as soon as it becomes ineligible

use serde::{Deserialize, Serialize};

use crate::rulebook::{
    sub_picks_for, Ancestry, Attribute, Culture, Path, Skill, ATTRIBUTE_MAX,
    ATTRIBUTE_POINT_BUDGET, MAX_CULTURES, SKILL_COUNT, SKILL_RANK_MAX, STARTING_SKILL_POINTS,
};

/// A character under construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    player_name: String,
    character_name: String,
    ancestry: Ancestry,
    /// Selected cultures, insertion order, at most [`MAX_CULTURES`].
    cultures: Vec<Culture>,
    starting_path: Option<Path>,
    level: u8,
    /// Attribute values indexed by [`Attribute`] canonical order.
    attributes: [u8; 6],
    /// Skill ranks indexed by [`Skill`] table order.
    skill_ranks: [u8; SKILL_COUNT],
    /// Player-chosen expertise labels, insertion order, capped at intellect.
    expertise: Vec<String>,
    key_talent: Option<String>,
    specialty: Option<String>,
    sub_pick: Option<String>,
    surges: Vec<String>,
    radiance_powers: Vec<String>,
}

impl Default for Character {
    fn default() -> Self {
        Self::new()
    }
}

impl Character {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a blank character: no path, level 1, everything at zero.
    pub fn new() -> Self {
        Self {
            player_name: String::new(),
            character_name: String::new(),
            ancestry: Ancestry::default(),
            cultures: Vec::new(),
            starting_path: None,
            level: 1,
            attributes: [0; 6],
            skill_ranks: [0; SKILL_COUNT],
            expertise: Vec::new(),
            key_talent: None,
            specialty: None,
            sub_pick: None,
            surges: Vec::new(),
            radiance_powers: Vec::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn character_name(&self) -> &str {
        &self.character_name
    }

    pub fn ancestry(&self) -> Ancestry {
        self.ancestry
    }

    pub fn cultures(&self) -> &[Culture] {
        &self.cultures
    }

    pub fn starting_path(&self) -> Option<Path> {
        self.starting_path
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Returns the current value of one attribute.
    pub fn attribute(&self, attr: Attribute) -> u8 {
        self.attributes[attr.index()]
    }

    /// Returns the sum of all six attributes.
    pub fn attribute_total(&self) -> u8 {
        self.attributes.iter().sum()
    }

    /// Returns the unspent attribute points.
    pub fn remaining_attribute_points(&self) -> u8 {
        ATTRIBUTE_POINT_BUDGET - self.attribute_total()
    }

    /// Returns the current rank of one skill.
    pub fn skill_rank(&self, skill: Skill) -> u8 {
        self.skill_ranks[skill.index()]
    }

    /// Returns rank + governing attribute for one skill.
    pub fn skill_modifier(&self, skill: Skill) -> u8 {
        self.skill_rank(skill) + self.attribute(skill.governing_attribute())
    }

    /// Returns the path's free starting skill, if a path is selected.
    pub fn free_skill(&self) -> Option<Skill> {
        self.starting_path.map(|p| p.free_skill())
    }

    /// Returns the highest rank any skill may currently reach.
    pub fn skill_rank_ceiling(&self) -> u8 {
        if self.level >= 2 {
            SKILL_RANK_MAX
        } else {
            2
        }
    }

    /// Returns the skill points spent beyond the path's free rank.
    pub fn extra_skill_points_spent(&self) -> u8 {
        let free = self.free_skill();
        Skill::all()
            .into_iter()
            .map(|skill| {
                let base = if Some(skill) == free { 1 } else { 0 };
                self.skill_rank(skill).saturating_sub(base)
            })
            .sum()
    }

    pub fn expertise(&self) -> &[String] {
        &self.expertise
    }

    pub fn key_talent(&self) -> Option<&str> {
        self.key_talent.as_deref()
    }

    pub fn specialty(&self) -> Option<&str> {
        self.specialty.as_deref()
    }

    pub fn sub_pick(&self) -> Option<&str> {
        self.sub_pick.as_deref()
    }

    pub fn surges(&self) -> &[String] {
        &self.surges
    }

    pub fn radiance_powers(&self) -> &[String] {
        &self.radiance_powers
    }

    // =========================================================================
    // Identity mutations
    // =========================================================================

    pub fn set_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    pub fn set_character_name(mut self, name: impl Into<String>) -> Self {
        self.character_name = name.into();
        self
    }

    pub fn set_ancestry(mut self, ancestry: Ancestry) -> Self {
        self.ancestry = ancestry;
        self
    }

    /// Set the character's level. Zero is coerced to 1.
    pub fn set_level(mut self, level: u8) -> Self {
        self.level = level.max(1);
        self
    }

    /// Select (or unselect) the starting path.
    ///
    /// A path determines the free starting skill, the key talent, and the
    /// attribute highlighting, so an actual change resets everything those
    /// gate: attributes, skill ranks, cultures, expertise, specialty and
    /// sub-pick. The new path's free skill is pinned at rank 1 and its key
    /// talent pre-filled. Re-selecting the current path is a no-op.
    pub fn set_starting_path(mut self, path: Option<Path>) -> Self {
        if path == self.starting_path {
            return self;
        }
        self.starting_path = path;
        self.attributes = [0; 6];
        self.skill_ranks = [0; SKILL_COUNT];
        self.cultures.clear();
        self.expertise.clear();
        self.specialty = None;
        self.sub_pick = None;
        match path {
            Some(p) => {
                self.skill_ranks[p.free_skill().index()] = 1;
                self.key_talent = Some(p.key_talent().to_string());
            }
            None => self.key_talent = None,
        }
        self
    }

    // =========================================================================
    // Attribute mutations
    // =========================================================================

    /// Step one attribute up or down by one point.
    ///
    /// Only `delta` of +1 or -1 is accepted; multi-step deltas are rejected.
    /// The candidate value is clamped to [0, 3]; the change applies only if
    /// the six-attribute sum stays within the 12-point budget. Anything else
    /// is a silent no-op.
    pub fn adjust_attribute(self, attr: Attribute, delta: i8) -> Self {
        if delta != 1 && delta != -1 {
            return self;
        }
        let current = i16::from(self.attribute(attr));
        let candidate = (current + i16::from(delta)).clamp(0, i16::from(ATTRIBUTE_MAX)) as u8;
        self.apply_attribute(attr, candidate)
    }

    /// Set one attribute to an absolute value (clamped to [0, 3]).
    ///
    /// Used by direct numeric entry; it enforces the same budget check as
    /// [`Self::adjust_attribute`].
    pub fn set_attribute(self, attr: Attribute, value: u8) -> Self {
        self.apply_attribute(attr, value.min(ATTRIBUTE_MAX))
    }

    fn apply_attribute(mut self, attr: Attribute, candidate: u8) -> Self {
        let current = self.attribute(attr);
        if candidate == current {
            return self;
        }
        let new_total = self.attribute_total() - current + candidate;
        if new_total > ATTRIBUTE_POINT_BUDGET {
            return self;
        }
        self.attributes[attr.index()] = candidate;
        self.revalidate_sub_pick();
        self
    }

    // =========================================================================
    // Skill mutations
    // =========================================================================

    /// Apply a single-step rank toggle.
    ///
    /// Succeeds only when `increasing` with `requested == current + 1`, or
    /// not increasing with `requested == current` (which steps the rank down
    /// by one). Further rejected when the change would:
    /// - drop the path's free skill below rank 1,
    /// - exceed the level-based ceiling (2 below level 2, else 5),
    /// - or, below level 2, spend more than 4 extra points across all skills.
    pub fn set_skill_rank(mut self, skill: Skill, requested: u8, increasing: bool) -> Self {
        let current = self.skill_rank(skill);
        let candidate = if increasing && requested == current + 1 {
            requested
        } else if !increasing && requested == current && current > 0 {
            current - 1
        } else {
            return self;
        };

        if Some(skill) == self.free_skill() && candidate < 1 {
            return self;
        }
        if candidate > self.skill_rank_ceiling() {
            return self;
        }
        if increasing && self.level < 2 {
            let base = if Some(skill) == self.free_skill() { 1 } else { 0 };
            let spent = self.extra_skill_points_spent() - current.saturating_sub(base)
                + candidate.saturating_sub(base);
            if spent > STARTING_SKILL_POINTS {
                return self;
            }
        }

        self.skill_ranks[skill.index()] = candidate;
        self.revalidate_sub_pick();
        self
    }

    // =========================================================================
    // Culture and expertise mutations
    // =========================================================================

    /// Toggle a culture selection, capped at two.
    pub fn toggle_culture(mut self, culture: Culture) -> Self {
        if let Some(pos) = self.cultures.iter().position(|c| *c == culture) {
            self.cultures.remove(pos);
        } else if self.cultures.len() < MAX_CULTURES {
            self.cultures.push(culture);
        }
        self
    }

    /// Toggle a chosen expertise label, capped at the intellect value.
    ///
    /// Culture-granted expertise is not stored here; it is resolved at
    /// derivation time from the selected cultures.
    pub fn toggle_expertise(mut self, label: &str) -> Self {
        if let Some(pos) = self.expertise.iter().position(|e| e == label) {
            self.expertise.remove(pos);
        } else if self.expertise.len() < usize::from(self.attribute(Attribute::Intellect)) {
            self.expertise.push(label.to_string());
        }
        self
    }

    // =========================================================================
    // Key talent mutations
    // =========================================================================

    /// Overwrite the key talent name. An empty string clears it.
    pub fn set_key_talent(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.key_talent = if name.trim().is_empty() {
            None
        } else {
            Some(name)
        };
        self
    }

    /// Choose a key-talent specialty from the current path's list.
    ///
    /// Rejected without a path or for a specialty the path does not offer.
    /// An actual change clears any sub-pick.
    pub fn set_specialty(mut self, specialty: &str) -> Self {
        let Some(path) = self.starting_path else {
            return self;
        };
        if !path.specialties().contains(&specialty) {
            return self;
        }
        if self.specialty.as_deref() == Some(specialty) {
            return self;
        }
        self.specialty = Some(specialty.to_string());
        self.sub_pick = None;
        self
    }

    /// Choose a specialty refinement, rejected unless its skill-modifier
    /// requirement is currently met.
    pub fn set_sub_pick(mut self, pick: &str) -> Self {
        let Some(specialty) = self.specialty.as_deref() else {
            return self;
        };
        let eligible = sub_picks_for(specialty)
            .iter()
            .any(|p| p.name == pick && self.skill_modifier(p.requirement.skill) >= p.requirement.min_modifier);
        if eligible {
            self.sub_pick = Some(pick.to_string());
        }
        self
    }

    /// Drops the sub-pick if a skill or attribute change made it ineligible.
    /// Re-run after every mutation that can affect a skill modifier.
    fn revalidate_sub_pick(&mut self) {
        let Some(pick) = self.sub_pick.as_deref() else {
            return;
        };
        let still_eligible = self.specialty.as_deref().is_some_and(|specialty| {
            sub_picks_for(specialty).iter().any(|p| {
                p.name == pick
                    && self.skill_modifier(p.requirement.skill) >= p.requirement.min_modifier
            })
        });
        if !still_eligible {
            self.sub_pick = None;
        }
    }

    // =========================================================================
    // Surge and radiance-power list mutations
    // =========================================================================

    pub fn push_surge(mut self, item: impl Into<String>) -> Self {
        self.surges.push(item.into());
        self
    }

    pub fn update_surge(mut self, index: usize, item: impl Into<String>) -> Self {
        if let Some(slot) = self.surges.get_mut(index) {
            *slot = item.into();
        }
        self
    }

    pub fn remove_surge(mut self, index: usize) -> Self {
        if index < self.surges.len() {
            self.surges.remove(index);
        }
        self
    }

    pub fn push_radiance_power(mut self, item: impl Into<String>) -> Self {
        self.radiance_powers.push(item.into());
        self
    }

    pub fn update_radiance_power(mut self, index: usize, item: impl Into<String>) -> Self {
        if let Some(slot) = self.radiance_powers.get_mut(index) {
            *slot = item.into();
        }
        self
    }

    pub fn remove_radiance_power(mut self, index: usize) -> Self {
        if index < self.radiance_powers.len() {
            self.radiance_powers.remove(index);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_character_is_blank() {
        let ch = Character::new();
        assert_eq!(ch.level(), 1);
        assert_eq!(ch.starting_path(), None);
        assert_eq!(ch.attribute_total(), 0);
        assert_eq!(ch.remaining_attribute_points(), 12);
        assert!(ch.key_talent().is_none());
    }

    #[test]
    fn test_attribute_budget_never_exceeded() {
        let mut ch = Character::new();
        // Max out four attributes (12 points), then try to spend more.
        for attr in [
            Attribute::Strength,
            Attribute::Speed,
            Attribute::Intellect,
            Attribute::Willpower,
        ] {
            for _ in 0..3 {
                ch = ch.adjust_attribute(attr, 1);
            }
        }
        assert_eq!(ch.attribute_total(), 12);

        let unchanged = ch.clone().adjust_attribute(Attribute::Awareness, 1);
        assert_eq!(unchanged, ch);
        assert_eq!(unchanged.attribute(Attribute::Awareness), 0);
    }

    #[test]
    fn test_attribute_stays_in_range() {
        let ch = Character::new().adjust_attribute(Attribute::Strength, -1);
        assert_eq!(ch.attribute(Attribute::Strength), 0);

        let mut ch = Character::new();
        for _ in 0..5 {
            ch = ch.adjust_attribute(Attribute::Strength, 1);
        }
        assert_eq!(ch.attribute(Attribute::Strength), 3);
        assert_eq!(ch.attribute_total(), 3);
    }

    #[test]
    fn test_adjust_attribute_moves_one_step_only() {
        let ch = Character::new().adjust_attribute(Attribute::Strength, 1);
        assert_eq!(ch.attribute(Attribute::Strength), 1);
        // Multi-step and zero deltas are no-ops.
        for delta in [2, -2, 0, i8::MAX, i8::MIN] {
            let unchanged = ch.clone().adjust_attribute(Attribute::Strength, delta);
            assert_eq!(unchanged, ch, "delta {}", delta);
        }
    }

    #[test]
    fn test_set_attribute_clamps_and_respects_budget() {
        let ch = Character::new().set_attribute(Attribute::Speed, 200);
        assert_eq!(ch.attribute(Attribute::Speed), 3);

        // 10 points spent; setting a fifth attribute to 3 would hit 13.
        let mut ch = Character::new();
        for attr in [Attribute::Strength, Attribute::Speed, Attribute::Intellect] {
            ch = ch.set_attribute(attr, 3);
        }
        ch = ch.set_attribute(Attribute::Willpower, 1);
        let unchanged = ch.clone().set_attribute(Attribute::Awareness, 3);
        assert_eq!(unchanged, ch);
        // But 2 still fits.
        let ch = ch.set_attribute(Attribute::Awareness, 2);
        assert_eq!(ch.attribute_total(), 12);
    }

    #[test]
    fn test_path_change_cascades_reset() {
        let ch = Character::new()
            .set_starting_path(Some(Path::Agent))
            .adjust_attribute(Attribute::Speed, 1)
            .adjust_attribute(Attribute::Intellect, 1)
            .toggle_culture(Culture::Alethi)
            .adjust_attribute(Attribute::Intellect, 1)
            .toggle_expertise("Engineering")
            .set_skill_rank(Skill::Stealth, 1, true)
            .set_starting_path(Some(Path::Warrior));

        assert_eq!(ch.attribute_total(), 0);
        assert!(ch.cultures().is_empty());
        assert!(ch.expertise().is_empty());
        for skill in Skill::all() {
            let expected = u8::from(skill == Skill::Athletics);
            assert_eq!(ch.skill_rank(skill), expected, "{}", skill);
        }
        assert_eq!(ch.key_talent(), Some("Vigilant Stance"));
    }

    #[test]
    fn test_reselecting_same_path_is_a_no_op() {
        let ch = Character::new()
            .set_starting_path(Some(Path::Scholar))
            .adjust_attribute(Attribute::Intellect, 1);
        let same = ch.clone().set_starting_path(Some(Path::Scholar));
        assert_eq!(same, ch);
    }

    #[test]
    fn test_free_skill_pinned_at_rank_one() {
        let ch = Character::new().set_starting_path(Some(Path::Scholar));
        assert_eq!(ch.skill_rank(Skill::Lore), 1);

        // Reducing the free skill to 0 is rejected.
        let unchanged = ch.clone().set_skill_rank(Skill::Lore, 1, false);
        assert_eq!(unchanged.skill_rank(Skill::Lore), 1);
    }

    #[test]
    fn test_skill_rank_single_step_contract() {
        let ch = Character::new();
        // Jumping straight to rank 2 is a no-op.
        let ch = ch.set_skill_rank(Skill::Agility, 2, true);
        assert_eq!(ch.skill_rank(Skill::Agility), 0);
        // Stepping to 1 works.
        let ch = ch.set_skill_rank(Skill::Agility, 1, true);
        assert_eq!(ch.skill_rank(Skill::Agility), 1);
        // Unchecking a box that isn't the top rank is a no-op.
        let ch = ch.set_skill_rank(Skill::Agility, 2, false);
        assert_eq!(ch.skill_rank(Skill::Agility), 1);
        // Unchecking the current rank steps down.
        let ch = ch.set_skill_rank(Skill::Agility, 1, false);
        assert_eq!(ch.skill_rank(Skill::Agility), 0);
    }

    #[test]
    fn test_extra_point_budget_at_level_one() {
        let mut ch = Character::new().set_starting_path(Some(Path::Scholar));
        // Free Lore rank does not count as spend; 4 extras fit.
        ch = ch.set_skill_rank(Skill::Lore, 2, true); // 1 extra
        ch = ch.set_skill_rank(Skill::Agility, 1, true); // 2
        ch = ch.set_skill_rank(Skill::Agility, 2, true); // 3
        ch = ch.set_skill_rank(Skill::Stealth, 1, true); // 4
        assert_eq!(ch.extra_skill_points_spent(), 4);
        // The fifth extra point is a no-op.
        let unchanged = ch.clone().set_skill_rank(Skill::Crafting, 1, true);
        assert_eq!(unchanged, ch);
    }

    #[test]
    fn test_rank_ceiling_follows_level() {
        let mut ch = Character::new();
        ch = ch.set_skill_rank(Skill::Agility, 1, true);
        ch = ch.set_skill_rank(Skill::Agility, 2, true);
        // Level 1 caps ranks at 2 even with budget left.
        let unchanged = ch.clone().set_skill_rank(Skill::Agility, 3, true);
        assert_eq!(unchanged.skill_rank(Skill::Agility), 2);

        // From level 2 the ceiling is 5 and the extra-point budget is gone.
        let mut ch = ch.set_level(3);
        for rank in 3..=5 {
            ch = ch.set_skill_rank(Skill::Agility, rank, true);
        }
        assert_eq!(ch.skill_rank(Skill::Agility), 5);
        let unchanged = ch.clone().set_skill_rank(Skill::Agility, 6, true);
        assert_eq!(unchanged.skill_rank(Skill::Agility), 5);
    }

    #[test]
    fn test_culture_cap_of_two() {
        let ch = Character::new()
            .toggle_culture(Culture::Alethi)
            .toggle_culture(Culture::Shin);
        // Third selection is a no-op.
        let ch = ch.toggle_culture(Culture::Veden);
        assert_eq!(ch.cultures(), &[Culture::Alethi, Culture::Shin]);
        // Toggling a selected culture removes it.
        let ch = ch.toggle_culture(Culture::Alethi);
        assert_eq!(ch.cultures(), &[Culture::Shin]);
    }

    #[test]
    fn test_expertise_capped_by_intellect() {
        let ch = Character::new().adjust_attribute(Attribute::Intellect, 1);
        let ch = ch.toggle_expertise("Engineering");
        assert_eq!(ch.expertise(), &["Engineering".to_string()]);
        // Cap reached; second pick is a no-op.
        let ch = ch.toggle_expertise("History");
        assert_eq!(ch.expertise().len(), 1);
        // Toggling off works regardless.
        let ch = ch.toggle_expertise("Engineering");
        assert!(ch.expertise().is_empty());
    }

    #[test]
    fn test_level_zero_coerced_to_one() {
        let ch = Character::new().set_level(0);
        assert_eq!(ch.level(), 1);
    }

    #[test]
    fn test_specialty_gated_by_path() {
        // No path selected.
        let ch = Character::new().set_specialty("Investigator");
        assert_eq!(ch.specialty(), None);
        // Wrong path.
        let ch = Character::new()
            .set_starting_path(Some(Path::Warrior))
            .set_specialty("Investigator");
        assert_eq!(ch.specialty(), None);
        // Matching path.
        let ch = Character::new()
            .set_starting_path(Some(Path::Agent))
            .set_specialty("Investigator");
        assert_eq!(ch.specialty(), Some("Investigator"));
    }

    #[test]
    fn test_sub_pick_requires_modifier() {
        let ch = Character::new()
            .set_starting_path(Some(Path::Agent))
            .set_specialty("Investigator");
        // Deduction modifier is 0; Forensics requires 1.
        let ch = ch.set_sub_pick("Forensics");
        assert_eq!(ch.sub_pick(), None);
        // Raise intellect so the Deduction modifier reaches 1.
        let ch = ch.adjust_attribute(Attribute::Intellect, 1).set_sub_pick("Forensics");
        assert_eq!(ch.sub_pick(), Some("Forensics"));
    }

    #[test]
    fn test_sub_pick_cleared_when_ineligible() {
        let ch = Character::new()
            .set_starting_path(Some(Path::Agent))
            .set_specialty("Investigator")
            .adjust_attribute(Attribute::Intellect, 1)
            .set_sub_pick("Forensics");
        assert_eq!(ch.sub_pick(), Some("Forensics"));
        // Dropping intellect back to 0 invalidates the requirement.
        let ch = ch.adjust_attribute(Attribute::Intellect, -1);
        assert_eq!(ch.sub_pick(), None);
    }

    #[test]
    fn test_changing_specialty_clears_sub_pick() {
        let ch = Character::new()
            .set_starting_path(Some(Path::Agent))
            .set_specialty("Investigator")
            .adjust_attribute(Attribute::Intellect, 1)
            .set_sub_pick("Forensics")
            .set_specialty("Spy");
        assert_eq!(ch.specialty(), Some("Spy"));
        assert_eq!(ch.sub_pick(), None);
    }

    #[test]
    fn test_key_talent_is_editable() {
        let ch = Character::new()
            .set_starting_path(Some(Path::Hunter))
            .set_key_talent("Quarry's Bane");
        assert_eq!(ch.key_talent(), Some("Quarry's Bane"));
        let ch = ch.set_key_talent("  ");
        assert_eq!(ch.key_talent(), None);
    }

    #[test]
    fn test_surge_list_operations() {
        let ch = Character::new()
            .push_surge("Adhesion")
            .push_surge("Gravitation")
            .update_surge(1, "Division")
            .remove_surge(0);
        assert_eq!(ch.surges(), &["Division".to_string()]);
        // Out-of-range indices are no-ops.
        let same = ch.clone().update_surge(9, "x").remove_surge(9);
        assert_eq!(same, ch);
    }

    #[test]
    fn test_serde_roundtrip() {
        let ch = Character::new()
            .set_character_name("Kaladin")
            .set_starting_path(Some(Path::Warrior))
            .adjust_attribute(Attribute::Strength, 1)
            .toggle_culture(Culture::Alethi);
        let json = serde_json::to_string(&ch).unwrap();
        let back: Character = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ch);
    }
}
