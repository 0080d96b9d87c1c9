//! Infrastructure layer for VOX: file-backed persistence.
//!
//! Implements the persona repository trait from `vox-core` over a JSON store
//! and provides read-only access to the secret configuration file.

pub mod json_persona_repository;
pub mod paths;
pub mod storage;

pub use json_persona_repository::{JsonPersonaRepository, personas_from_slice};
pub use paths::VoxPaths;
