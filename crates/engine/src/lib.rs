//! Stormforge Engine - session control and Fantasy Grounds export.
//!
//! Wraps the domain's character model in a mutation-driven session, merges
//! loose header payloads from campaign tools, and serializes finished
//! characters to the Fantasy Grounds XML format.

pub mod error;
pub mod export;
pub mod header;
pub mod session;

pub use error::ExportError;
pub use export::{build_character_xml, export_filename, export_ready};
pub use header::merge_header;
pub use session::{CharacterMutation, CharacterSession};
