//! Pure helpers behind short-link creation.
//!
//! - [`url_canonicalizer`] - URL sanitization and canonical form
//! - [`slug_generator`] - Checksum-based slug derivation

pub mod slug_generator;
pub mod url_canonicalizer;
