//! Persona domain module.
//!
//! This module contains all persona-related domain models, repository
//! interfaces, and preset configurations.
//!
//! # Module Structure
//!
//! - `model`: Core persona domain models (`Persona`, `TechProficiency`, `PersonaSource`)
//! - `repository`: Repository trait for persona persistence
//! - `preset`: Default system persona panel
//!
//! # Usage
//!
//! ```ignore
//! use vox_core::persona::{Persona, PersonaRepository, default_panel};
//! ```

mod model;
mod preset;
mod repository;

// Re-export public API
pub use model::{Persona, PersonaSource, TechProficiency};
pub use preset::default_panel;
pub use repository::PersonaRepository;
