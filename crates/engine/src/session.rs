//! Builder session: a character plus the mutation funnel every edit goes
//! through.
//!
//! The UI (or a test) expresses edits as [`CharacterMutation`] values; the
//! session applies them through the domain's consuming mutations and exposes
//! the export operations. Invalid mutations leave the character unchanged,
//! matching the domain contract.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stormforge_domain::{Ancestry, Attribute, Character, Culture, Path, Skill};

use crate::error::ExportError;
use crate::export::{build_character_xml, export_filename, export_ready};

/// A single edit to the character under construction.
///
/// Serializable so sessions can be driven from recorded scripts or a wire
/// frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "args", rename_all = "snake_case")]
pub enum CharacterMutation {
    SetPlayerName(String),
    SetCharacterName(String),
    SetAncestry(Ancestry),
    SetLevel(u8),
    SetStartingPath(Option<Path>),
    AdjustAttribute { attribute: Attribute, delta: i8 },
    SetAttribute { attribute: Attribute, value: u8 },
    SetSkillRank { skill: Skill, rank: u8, increasing: bool },
    ToggleCulture(Culture),
    ToggleExpertise(String),
    SetKeyTalent(String),
    SetSpecialty(String),
    SetSubPick(String),
    PushSurge(String),
    UpdateSurge { index: usize, text: String },
    RemoveSurge { index: usize },
    PushRadiancePower(String),
    UpdateRadiancePower { index: usize, text: String },
    RemoveRadiancePower { index: usize },
}

/// One character under construction.
#[derive(Debug, Clone, Default)]
pub struct CharacterSession {
    character: Character,
}

impl CharacterSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resumes a session over an existing character.
    pub fn with_character(character: Character) -> Self {
        Self { character }
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    /// Applies one mutation. Invalid mutations are silent no-ops.
    pub fn apply(&mut self, mutation: CharacterMutation) {
        let ch = std::mem::take(&mut self.character);
        self.character = match mutation {
            CharacterMutation::SetPlayerName(name) => ch.set_player_name(name),
            CharacterMutation::SetCharacterName(name) => ch.set_character_name(name),
            CharacterMutation::SetAncestry(ancestry) => ch.set_ancestry(ancestry),
            CharacterMutation::SetLevel(level) => ch.set_level(level),
            CharacterMutation::SetStartingPath(path) => ch.set_starting_path(path),
            CharacterMutation::AdjustAttribute { attribute, delta } => {
                ch.adjust_attribute(attribute, delta)
            }
            CharacterMutation::SetAttribute { attribute, value } => {
                ch.set_attribute(attribute, value)
            }
            CharacterMutation::SetSkillRank { skill, rank, increasing } => {
                ch.set_skill_rank(skill, rank, increasing)
            }
            CharacterMutation::ToggleCulture(culture) => ch.toggle_culture(culture),
            CharacterMutation::ToggleExpertise(label) => ch.toggle_expertise(&label),
            CharacterMutation::SetKeyTalent(name) => ch.set_key_talent(name),
            CharacterMutation::SetSpecialty(specialty) => ch.set_specialty(&specialty),
            CharacterMutation::SetSubPick(pick) => ch.set_sub_pick(&pick),
            CharacterMutation::PushSurge(text) => ch.push_surge(text),
            CharacterMutation::UpdateSurge { index, text } => ch.update_surge(index, text),
            CharacterMutation::RemoveSurge { index } => ch.remove_surge(index),
            CharacterMutation::PushRadiancePower(text) => ch.push_radiance_power(text),
            CharacterMutation::UpdateRadiancePower { index, text } => {
                ch.update_radiance_power(index, text)
            }
            CharacterMutation::RemoveRadiancePower { index } => ch.remove_radiance_power(index),
        };
    }

    /// Whether the export gate is open for this character.
    pub fn export_ready(&self) -> bool {
        export_ready(&self.character)
    }

    /// Serializes the character for Fantasy Grounds, stamped with `date`.
    pub fn export_xml(&self, date: NaiveDate) -> Result<String, ExportError> {
        build_character_xml(&self.character, date)
    }

    /// Download filename for the current character.
    pub fn export_filename(&self) -> String {
        export_filename(self.character.character_name())
    }
}
