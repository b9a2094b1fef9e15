//! Download filename derivation.

/// Builds the export filename from a character name.
///
/// Every byte outside `[A-Za-z0-9_-]` becomes an underscore; an empty name
/// falls back to "character". The `.xml` suffix is always appended.
pub fn export_filename(character_name: &str) -> String {
    let base = if character_name.is_empty() {
        "character".to_string()
    } else {
        character_name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    };
    format!("{}.xml", base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_keeps_alphanumerics() {
        assert_eq!(export_filename("Kaladin"), "Kaladin.xml");
        assert_eq!(export_filename("Szeth-son-son-Vallano"), "Szeth-son-son-Vallano.xml");
    }

    #[test]
    fn test_special_characters_become_underscores() {
        assert_eq!(export_filename("Kaladin Stormblessed"), "Kaladin_Stormblessed.xml");
        assert_eq!(export_filename("Jasnah & Co.!"), "Jasnah___Co__.xml");
    }

    #[test]
    fn test_empty_name_falls_back() {
        assert_eq!(export_filename(""), "character.xml");
    }
}
