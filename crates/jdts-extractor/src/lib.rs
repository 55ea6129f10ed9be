//! Declaration extraction for the jdts declaration generator.
//!
//! Two passes live here:
//! - `generic` - the generic signature parser: raw type text in, fully
//!   resolved `GenericDefinition` tree out
//! - `extract` - the declaration extractor: type model in, declaration
//!   IR out, with visibility filtering and enum synthesis
//!
//! Resolution failures inside one member degrade to the raw text and a
//! diagnostic; they never abort the declaration or the run.

pub mod extract;
pub mod generic;

pub use extract::extract_project;
pub use generic::{PRIMITIVE_TYPES, parse_generic, resolve_type_text};
