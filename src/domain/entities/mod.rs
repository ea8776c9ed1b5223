//! Core domain entities.
//!
//! - [`UrlRecord`] - A short URL mapped to its original URL

pub mod url_record;

pub use url_record::UrlRecord;
