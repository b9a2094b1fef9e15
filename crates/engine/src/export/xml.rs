//! Fantasy Grounds character XML serialization.
//!
//! The target schema is positional: a fixed element sequence under
//! `character`, per-element `type` attributes, and 5-digit zero-padded
//! sequence ids inside each list. Values come from a character snapshot and
//! the derivation functions; nothing is written back. Text content passes
//! through the writer's entity escaping, which covers all five reserved
//! characters.

use chrono::NaiveDate;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use stormforge_domain::derived::{
    carry_capacity_lbs, cognitive_defense, focus_total, hp_total, lift_capacity_lbs,
    movement_feet, physical_defense, recovery_die, resolved_expertise, senses_range,
    spiritual_defense, total_skill_ranks, total_talents,
};
use stormforge_domain::{Attribute, Character, Skill};

use crate::error::ExportError;

/// Fantasy Grounds client version the export targets.
const FG_VERSION: &str = "4.8";

/// Ruleset release the export targets.
const FG_RELEASE: &str = "8.1|CoreRPG:7";

type XmlWriter = Writer<Vec<u8>>;

/// Serializes a character snapshot into the export document.
///
/// Pure mapping from `(character, date)` to an XML string; `date` stamps
/// the root's `dataversion` attribute as `YYYYMMDD`.
pub fn build_character_xml(ch: &Character, date: NaiveDate) -> Result<String, ExportError> {
    let mut w = Writer::new_with_indent(Vec::new(), b' ', 2);
    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let dataversion = date.format("%Y%m%d").to_string();
    let mut root = BytesStart::new("root");
    root.push_attribute(("version", FG_VERSION));
    root.push_attribute(("dataversion", dataversion.as_str()));
    root.push_attribute(("release", FG_RELEASE));
    w.write_event(Event::Start(root))?;

    start(&mut w, "character")?;
    write_ancestry(&mut w, ch)?;
    write_attributes(&mut w, ch)?;
    write_coins(&mut w)?;
    write_defenses(&mut w, ch)?;
    number(&mut w, "deflect", 0)?;
    write_encumbrance(&mut w, ch)?;
    write_expertise(&mut w, ch)?;
    write_focus(&mut w, ch)?;
    empty(&mut w, "goals")?;
    write_hp(&mut w, ch)?;
    empty(&mut w, "inventorylist")?;
    write_investiture(&mut w)?;
    number(&mut w, "level", u32::from(ch.level()))?;
    number(&mut w, "movement", movement_feet(ch.attribute(Attribute::Speed)))?;
    string(&mut w, "name", display_name(ch))?;
    string(&mut w, "path", path_name(ch))?;
    write_paths(&mut w, ch)?;
    typed_text(&mut w, "recdie", "dice", recovery_die(ch.attribute(Attribute::Willpower)))?;
    string(&mut w, "senses", senses_range(ch.attribute(Attribute::Awareness)))?;
    write_skill_list(&mut w, ch)?;
    write_talent(&mut w, ch)?;
    number(&mut w, "tier", 1)?;
    number(&mut w, "totalskillranks", total_skill_ranks(ch))?;
    number(&mut w, "totaltalents", total_talents(ch))?;
    write_weapon_list(&mut w)?;
    end(&mut w, "character")?;

    end(&mut w, "root")?;
    Ok(String::from_utf8(w.into_inner())?)
}

fn display_name(ch: &Character) -> &str {
    if ch.character_name().is_empty() {
        "Unnamed Character"
    } else {
        ch.character_name()
    }
}

fn path_name(ch: &Character) -> &str {
    ch.starting_path().map(|p| p.name()).unwrap_or("")
}

// =============================================================================
// Sections
// =============================================================================

fn write_ancestry(w: &mut XmlWriter, ch: &Character) -> Result<(), ExportError> {
    start(w, "ancestry")?;
    string(w, "name", ch.ancestry().name())?;
    write_windowreference(w, "reference_ancestry")?;
    write_formatted_text_with(w, "p")?;
    end(w, "ancestry")
}

/// Attribute sub-elements are emitted alphabetically; speed additionally
/// carries a zero bonus.
fn write_attributes(w: &mut XmlWriter, ch: &Character) -> Result<(), ExportError> {
    start(w, "attributes")?;
    for attr in [
        Attribute::Awareness,
        Attribute::Intellect,
        Attribute::Presence,
        Attribute::Speed,
        Attribute::Strength,
        Attribute::Willpower,
    ] {
        start(w, attr.key())?;
        if attr == Attribute::Speed {
            number(w, "bonus", 0)?;
        }
        number(w, "score", u32::from(ch.attribute(attr)))?;
        end(w, attr.key())?;
    }
    end(w, "attributes")
}

fn write_coins(w: &mut XmlWriter) -> Result<(), ExportError> {
    start(w, "coins")?;
    start(w, "id-00001")?;
    number(w, "amount", 0)?;
    string(w, "name", "MK")?;
    end(w, "id-00001")?;
    end(w, "coins")
}

fn write_defenses(w: &mut XmlWriter, ch: &Character) -> Result<(), ExportError> {
    start(w, "defenses")?;
    for (name, score) in [
        ("cognitivedefense", cognitive_defense(ch)),
        ("physicaldefense", physical_defense(ch)),
        ("spiritualdefense", spiritual_defense(ch)),
    ] {
        start(w, name)?;
        number(w, "score", score)?;
        end(w, name)?;
    }
    end(w, "defenses")
}

fn write_encumbrance(w: &mut XmlWriter, ch: &Character) -> Result<(), ExportError> {
    let strength = ch.attribute(Attribute::Strength);
    start(w, "encumbrance")?;
    number(w, "carry", carry_capacity_lbs(strength))?;
    number(w, "load", 0)?;
    number(w, "max", lift_capacity_lbs(strength))?;
    end(w, "encumbrance")
}

fn write_expertise(w: &mut XmlWriter, ch: &Character) -> Result<(), ExportError> {
    start(w, "expertise")?;
    for (i, label) in resolved_expertise(ch).iter().enumerate() {
        let id = sequence_id(i + 1);
        start(w, &id)?;
        string(w, "name", label)?;
        end(w, &id)?;
    }
    end(w, "expertise")
}

fn write_focus(w: &mut XmlWriter, ch: &Character) -> Result<(), ExportError> {
    start(w, "focus")?;
    number(w, "bonus", 0)?;
    number(w, "current", 0)?;
    number(w, "total", focus_total(ch))?;
    end(w, "focus")
}

fn write_hp(w: &mut XmlWriter, ch: &Character) -> Result<(), ExportError> {
    start(w, "hp")?;
    number(w, "bonus", 0)?;
    number(w, "total", hp_total(ch))?;
    number(w, "wounds", 0)?;
    end(w, "hp")
}

fn write_investiture(w: &mut XmlWriter) -> Result<(), ExportError> {
    start(w, "investiture")?;
    number(w, "current", 0)?;
    number(w, "enabled", 0)?;
    number(w, "total", 0)?;
    end(w, "investiture")
}

/// One child element per selected path, keyed by path name; self-closing
/// when no path is selected.
fn write_paths(w: &mut XmlWriter, ch: &Character) -> Result<(), ExportError> {
    let Some(path) = ch.starting_path() else {
        return empty(w, "paths");
    };
    start(w, "paths")?;
    start(w, path.name())?;
    string(w, "name", path.name())?;
    write_windowreference(w, "reference_path")?;
    write_formatted_text_with(w, "linklist")?;
    end(w, path.name())?;
    end(w, "paths")
}

/// Entries in fixed skill-table order with 1-based zero-padded ids.
fn write_skill_list(w: &mut XmlWriter, ch: &Character) -> Result<(), ExportError> {
    start(w, "skilllist")?;
    for (i, skill) in Skill::all().into_iter().enumerate() {
        let id = sequence_id(i + 1);
        start(w, &id)?;
        number(w, "bonus", 0)?;
        string(w, "name", skill.name())?;
        number(w, "rank", u32::from(ch.skill_rank(skill)))?;
        string(w, "stat", skill.governing_attribute().key())?;
        number(w, "total", u32::from(ch.skill_modifier(skill)))?;
        end(w, &id)?;
    }
    end(w, "skilllist")
}

fn write_talent(w: &mut XmlWriter, ch: &Character) -> Result<(), ExportError> {
    let Some(talent) = ch.key_talent() else {
        return empty(w, "talent");
    };
    start(w, "talent")?;
    start(w, "id-00001")?;
    string(w, "name", talent)?;
    string(w, "type", "Key")?;
    empty_with_type(w, "text", "formattedtext")?;
    end(w, "id-00001")?;
    end(w, "talent")
}

/// The static unarmed-attack entry every exported character carries.
fn write_weapon_list(w: &mut XmlWriter) -> Result<(), ExportError> {
    start(w, "weaponlist")?;
    start(w, "unarmedattack")?;
    number(w, "ammo", 0)?;
    number(w, "carried", 2)?;
    start(w, "damagelist")?;
    start(w, "id-00001")?;
    typed_text(w, "dice", "dice", "d4")?;
    string(w, "type", "impact")?;
    string(w, "weaponskill", "Athletics")?;
    end(w, "id-00001")?;
    end(w, "damagelist")?;
    string(w, "damageview", "1d4 impact")?;
    string(w, "experttraits", "Momentum, Offhand")?;
    number(w, "handling", 0)?;
    number(w, "maxammo", 0)?;
    string(w, "name", "Unarmed Attack")?;
    typed_start(w, "shortcut", "windowreference")?;
    empty(w, "class")?;
    empty(w, "recordname")?;
    end(w, "shortcut")?;
    string(w, "traits", "Unique")?;
    number(w, "type", 0)?;
    string(w, "weaponskill", "Athletics")?;
    end(w, "unarmedattack")?;
    end(w, "weaponlist")
}

// =============================================================================
// Writer helpers
// =============================================================================

/// `id-00001`-style 5-digit sequence id.
fn sequence_id(n: usize) -> String {
    format!("id-{:05}", n)
}

fn start(w: &mut XmlWriter, name: &str) -> Result<(), ExportError> {
    w.write_event(Event::Start(BytesStart::new(name)))?;
    Ok(())
}

fn typed_start(w: &mut XmlWriter, name: &str, ty: &str) -> Result<(), ExportError> {
    let mut el = BytesStart::new(name);
    el.push_attribute(("type", ty));
    w.write_event(Event::Start(el))?;
    Ok(())
}

fn end(w: &mut XmlWriter, name: &str) -> Result<(), ExportError> {
    w.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn empty(w: &mut XmlWriter, name: &str) -> Result<(), ExportError> {
    w.write_event(Event::Empty(BytesStart::new(name)))?;
    Ok(())
}

fn empty_with_type(w: &mut XmlWriter, name: &str, ty: &str) -> Result<(), ExportError> {
    let mut el = BytesStart::new(name);
    el.push_attribute(("type", ty));
    w.write_event(Event::Empty(el))?;
    Ok(())
}

fn typed_text(w: &mut XmlWriter, name: &str, ty: &str, value: &str) -> Result<(), ExportError> {
    typed_start(w, name, ty)?;
    w.write_event(Event::Text(BytesText::new(value)))?;
    end(w, name)
}

fn string(w: &mut XmlWriter, name: &str, value: &str) -> Result<(), ExportError> {
    typed_text(w, name, "string", value)
}

fn number(w: &mut XmlWriter, name: &str, value: u32) -> Result<(), ExportError> {
    typed_text(w, name, "number", &value.to_string())
}

/// `<shortcut type="windowreference">` with a reference class and an empty
/// record name.
fn write_windowreference(w: &mut XmlWriter, class: &str) -> Result<(), ExportError> {
    typed_start(w, "shortcut", "windowreference")?;
    start(w, "class")?;
    w.write_event(Event::Text(BytesText::new(class)))?;
    end(w, "class")?;
    empty(w, "recordname")?;
    end(w, "shortcut")
}

/// `<text type="formattedtext">` wrapping one empty child element.
fn write_formatted_text_with(w: &mut XmlWriter, child: &str) -> Result<(), ExportError> {
    typed_start(w, "text", "formattedtext")?;
    empty(w, child)?;
    end(w, "text")
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::events::Event as ReadEvent;
    use quick_xml::Reader;
    use stormforge_domain::{Culture, Path};

    fn export_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 28).unwrap()
    }

    fn export(ch: &Character) -> String {
        build_character_xml(ch, export_date()).unwrap()
    }

    #[test]
    fn test_dataversion_is_stamped_from_date() {
        let xml = export(&Character::new());
        assert!(xml.contains("dataversion=\"20260828\""));
        assert!(xml.contains("version=\"4.8\""));
        assert!(xml.contains("release=\"8.1|CoreRPG:7\""));
    }

    #[test]
    fn test_zeroed_character_baseline_values() {
        let xml = export(&Character::new());
        assert!(xml.contains("<carry type=\"number\">50</carry>"));
        assert!(xml.contains("<max type=\"number\">100</max>"));
        assert!(xml.contains("<movement type=\"number\">20</movement>"));
        assert!(xml.contains("<recdie type=\"dice\">d4</recdie>"));
        assert!(xml.contains("<senses type=\"string\">5 feet</senses>"));
        assert!(xml.contains("<score type=\"number\">10</score>"));
        assert!(xml.contains("<total type=\"number\">2</total>"));
        assert!(xml.contains("<name type=\"string\">Unnamed Character</name>"));
    }

    #[test]
    fn test_strength_three_falls_in_middle_tier() {
        let mut ch = Character::new();
        for _ in 0..3 {
            ch = ch.adjust_attribute(Attribute::Strength, 1);
        }
        let xml = export(&ch);
        assert!(xml.contains("<carry type=\"number\">250</carry>"));
        assert!(xml.contains("<max type=\"number\">500</max>"));
        // hp = 10 + strength
        assert!(xml.contains("<total type=\"number\">13</total>"));
    }

    #[test]
    fn test_paths_block_reflects_selection() {
        let xml = export(&Character::new());
        assert!(xml.contains("<paths/>"));
        assert!(xml.contains("<path type=\"string\"></path>"));

        let ch = Character::new().set_starting_path(Some(Path::Scholar));
        let xml = export(&ch);
        assert!(xml.contains("<path type=\"string\">Scholar</path>"));
        assert!(xml.contains("<Scholar>"));
        assert!(xml.contains("</Scholar>"));
        assert!(xml.contains("reference_path"));
    }

    #[test]
    fn test_talent_entry_and_total() {
        let xml = export(&Character::new());
        assert!(xml.contains("<talent/>"));
        assert!(xml.contains("<totaltalents type=\"number\">0</totaltalents>"));

        let ch = Character::new().set_starting_path(Some(Path::Warrior));
        let xml = export(&ch);
        assert!(xml.contains("<name type=\"string\">Vigilant Stance</name>"));
        assert!(xml.contains("<type type=\"string\">Key</type>"));
        assert!(xml.contains("<totaltalents type=\"number\">1</totaltalents>"));
    }

    #[test]
    fn test_skill_entries_numbered_in_table_order() {
        let xml = export(&Character::new());
        for i in 1..=18 {
            assert!(xml.contains(&format!("<{}>", sequence_id(i))), "missing id {}", i);
        }
        assert!(!xml.contains("<id-00019>"));

        // Fixed table order, not alphabetical-by-accident: Agility first,
        // Heavy Weaponry seventh, Thievery last.
        let agility = xml.find("<name type=\"string\">Agility</name>").unwrap();
        let heavy = xml.find("<name type=\"string\">Heavy Weaponry</name>").unwrap();
        let thievery = xml.find("<name type=\"string\">Thievery</name>").unwrap();
        assert!(agility < heavy && heavy < thievery);
    }

    #[test]
    fn test_skill_entry_carries_stat_and_total() {
        let ch = Character::new()
            .adjust_attribute(Attribute::Intellect, 1)
            .set_skill_rank(Skill::Lore, 1, true);
        let xml = export(&ch);
        let lore = xml.find("<name type=\"string\">Lore</name>").unwrap();
        let after = &xml[lore..];
        assert!(after.contains("<rank type=\"number\">1</rank>"));
        assert!(after.contains("<stat type=\"string\">intellect</stat>"));
        assert!(after.contains("<total type=\"number\">2</total>"));
    }

    #[test]
    fn test_expertise_union_order_and_dedup() {
        let ch = Character::new()
            .adjust_attribute(Attribute::Intellect, 1)
            .toggle_culture(Culture::Listeners)
            .toggle_culture(Culture::Shin)
            .toggle_expertise("Engineering");
        let xml = export(&ch);
        let listener = xml.find("<name type=\"string\">Listener</name>").unwrap();
        let shin = xml.find("<name type=\"string\">Shin</name>").unwrap();
        let engineering = xml.find("<name type=\"string\">Engineering</name>").unwrap();
        assert!(listener < shin && shin < engineering);
        assert!(!xml.contains("<name type=\"string\">Listeners</name>"));
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        let tricky = "K&l <a> \"din\" 'Storm'";
        let ch = Character::new().set_character_name(tricky);
        let xml = export(&ch);
        assert!(xml.contains("K&amp;l &lt;a&gt; &quot;din&quot; &apos;Storm&apos;"));
    }

    #[test]
    fn test_escaped_text_round_trips_through_a_parser() {
        let tricky = "K&l <a> \"din\" 'Storm'";
        let ch = Character::new().set_character_name(tricky);
        let xml = export(&ch);

        let mut reader = Reader::from_str(&xml);
        let mut texts = Vec::new();
        loop {
            match reader.read_event().unwrap() {
                ReadEvent::Text(t) => texts.push(t.unescape().unwrap().into_owned()),
                ReadEvent::Eof => break,
                _ => {}
            }
        }
        assert!(texts.iter().any(|t| t == tricky));
    }

    #[test]
    fn test_static_unarmed_attack_entry() {
        let xml = export(&Character::new());
        assert!(xml.contains("<unarmedattack>"));
        assert!(xml.contains("<damageview type=\"string\">1d4 impact</damageview>"));
        assert!(xml.contains("<experttraits type=\"string\">Momentum, Offhand</experttraits>"));
        assert!(xml.contains("<traits type=\"string\">Unique</traits>"));
    }
}
