//! Domain layer containing business entities and capability traits.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`shortener`] - Slug strategy trait
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Implementations live in [`crate::infrastructure`] and
//! [`crate::application`].

pub mod entities;
pub mod repositories;
pub mod shortener;
