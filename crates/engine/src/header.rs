//! Header payload merge.
//!
//! Campaign tools hand the builder a loose JSON object of header fields
//! (names, ancestry, path, level, cultures, attribute scores). The merge is
//! tolerant: recognized keys are applied through the ordinary character
//! mutations so every invariant still holds, unrecognized keys and malformed
//! values are logged and skipped.

use std::str::FromStr;

use serde_json::Value;
use tracing::warn;

use stormforge_domain::{Ancestry, Attribute, Character, Culture, Path};

/// Applies a header payload to a character.
///
/// Returns the character unchanged when the payload is not a JSON object.
pub fn merge_header(ch: Character, payload: &Value) -> Character {
    let Some(fields) = payload.as_object() else {
        warn!("header payload is not an object, ignoring");
        return ch;
    };

    let mut ch = ch;
    for (key, value) in fields {
        ch = match key.as_str() {
            "playerName" => apply_string(ch, value, key, Character::set_player_name),
            "characterName" => apply_string(ch, value, key, Character::set_character_name),
            "ancestry" => apply_ancestry(ch, value),
            "startingPath" => apply_path(ch, value),
            "level" => apply_level(ch, value),
            "cultures" => apply_cultures(ch, value),
            other => match Attribute::from_str(other) {
                Ok(attr) => apply_attribute(ch, attr, value),
                Err(_) => {
                    warn!(key = other, "unrecognized header key, skipping");
                    ch
                }
            },
        };
    }
    ch
}

fn apply_string(
    ch: Character,
    value: &Value,
    key: &str,
    set: impl FnOnce(Character, String) -> Character,
) -> Character {
    match value.as_str() {
        Some(s) => set(ch, s.to_string()),
        None => {
            warn!(key, "expected a string value, skipping");
            ch
        }
    }
}

fn apply_ancestry(ch: Character, value: &Value) -> Character {
    let Some(s) = value.as_str() else {
        warn!("ancestry must be a string, skipping");
        return ch;
    };
    match Ancestry::from_str(s) {
        Ok(ancestry) => ch.set_ancestry(ancestry),
        Err(_) => {
            warn!(value = s, "unknown ancestry, skipping");
            ch
        }
    }
}

/// An empty string clears the path selection.
fn apply_path(ch: Character, value: &Value) -> Character {
    let Some(s) = value.as_str() else {
        warn!("startingPath must be a string, skipping");
        return ch;
    };
    if s.is_empty() {
        return ch.set_starting_path(None);
    }
    match Path::from_str(s) {
        Ok(path) => ch.set_starting_path(Some(path)),
        Err(_) => {
            warn!(value = s, "unknown starting path, skipping");
            ch
        }
    }
}

/// Accepts a JSON number or a numeric string; anything else resets to 1.
fn apply_level(ch: Character, value: &Value) -> Character {
    let level = match value {
        Value::Number(n) => n.as_u64().and_then(|v| u8::try_from(v).ok()),
        Value::String(s) => s.trim().parse::<u8>().ok(),
        _ => None,
    };
    match level {
        Some(level) => ch.set_level(level),
        None => {
            warn!(?value, "unparsable level, resetting to 1");
            ch.set_level(1)
        }
    }
}

/// Reconciles the selection toward the desired list: drops cultures no
/// longer named, then toggles on the named ones in payload order. The
/// two-culture cap still applies through the toggle.
fn apply_cultures(ch: Character, value: &Value) -> Character {
    let Some(items) = value.as_array() else {
        warn!("cultures must be an array, skipping");
        return ch;
    };
    let mut desired = Vec::new();
    for item in items {
        let Some(s) = item.as_str() else {
            warn!(?item, "culture entries must be strings, skipping entry");
            continue;
        };
        match Culture::from_str(s) {
            Ok(culture) => desired.push(culture),
            Err(_) => warn!(value = s, "unknown culture, skipping entry"),
        }
    }

    let mut ch = ch;
    for culture in ch.cultures().to_vec() {
        if !desired.contains(&culture) {
            ch = ch.toggle_culture(culture);
        }
    }
    for culture in desired {
        if !ch.cultures().contains(&culture) {
            ch = ch.toggle_culture(culture);
        }
    }
    ch
}

fn apply_attribute(ch: Character, attr: Attribute, value: &Value) -> Character {
    let score = match value {
        Value::Number(n) => n.as_u64().and_then(|v| u8::try_from(v).ok()),
        Value::String(s) => s.trim().parse::<u8>().ok(),
        _ => None,
    };
    match score {
        Some(score) => ch.set_attribute(attr, score),
        None => {
            warn!(attribute = attr.key(), ?value, "unparsable attribute score, skipping");
            ch
        }
    }
}
