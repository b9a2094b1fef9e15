//! Character export: readiness gate, XML document, download filename.

pub mod filename;
pub mod xml;

pub use filename::export_filename;
pub use xml::build_character_xml;

use stormforge_domain::Character;

/// Whether a character may be exported.
///
/// A starting path must be selected and all attribute points spent.
pub fn export_ready(ch: &Character) -> bool {
    ch.starting_path().is_some() && ch.remaining_attribute_points() == 0
}
