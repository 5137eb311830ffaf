//! Guard rail for feeding user-authored markdown to an entity-fragile
//! renderer.
//!
//! The downstream markdown renderer this crate fronts crashes inside its own
//! diagnostic machinery when its entity parser reports either an
//! unterminated legacy reference (`60&nbspkm/h`) or a terminated reference
//! with an unknown name (`&foo;`). This crate does not parse markdown,
//! decode entities, or touch the renderer - it is a pure string filter that
//! rewrites exactly those two shapes so the diagnostics never fire.

pub mod entities;
pub mod normalizer;

pub use entities::{ALL_ENTITY_NAMES, LEGACY_ENTITY_NAMES, is_known_entity, is_legacy_entity};
pub use normalizer::{
    NormalizeOptions, escape_unknown_entities, normalize_entities,
    normalize_entities_with_options, terminate_legacy_entities,
};
