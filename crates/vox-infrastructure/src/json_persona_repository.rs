//! JSON file-backed persona repository.
//!
//! The persona store is a single JSON document holding an ordered list of
//! persona objects. Reads are deliberately lenient: a missing, unreadable, or
//! malformed file is reported as an empty collection so a hand-edited store
//! never crashes the application. Writes replace the file wholesale.

use std::fs;
use std::path::PathBuf;

use tracing::warn;
use vox_core::error::Result;
use vox_core::persona::{Persona, PersonaRepository};

/// Persona repository backed by a JSON file.
pub struct JsonPersonaRepository {
    path: PathBuf,
}

impl JsonPersonaRepository {
    /// Creates a repository at the default store path
    /// (`~/.config/vox/personas.json`).
    pub fn new() -> std::result::Result<Self, String> {
        let path = crate::paths::VoxPaths::persona_file()?;
        Ok(Self { path })
    }

    /// Creates a repository at a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the store path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait::async_trait]
impl PersonaRepository for JsonPersonaRepository {
    async fn get_all(&self) -> Result<Vec<Persona>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "persona store unreadable, treating as empty");
                return Ok(Vec::new());
            }
        };

        Ok(personas_from_slice(content.as_bytes()))
    }

    async fn save_all(&self, personas: &[Persona]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(personas)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Lenient persona parse used for both the store and uploaded documents.
///
/// Anything that is not a JSON list of persona objects yields an empty
/// collection, never an error; the caller reports "no personas" instead of
/// crashing on a malformed upload.
pub fn personas_from_slice(bytes: &[u8]) -> Vec<Persona> {
    match serde_json::from_slice::<serde_json::Value>(bytes) {
        Ok(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<Persona>(item) {
                Ok(persona) => Some(persona),
                Err(err) => {
                    warn!(%err, "skipping persona entry that does not match the schema");
                    None
                }
            })
            .collect(),
        Ok(_) => {
            warn!("persona document is not a JSON list, treating as empty");
            Vec::new()
        }
        Err(err) => {
            warn!(%err, "persona document is not valid JSON, treating as empty");
            Vec::new()
        }
    }
}
