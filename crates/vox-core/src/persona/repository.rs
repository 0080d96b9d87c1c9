//! Persona repository trait.
//!
//! Defines the interface for persona persistence operations.

use super::model::Persona;
use crate::error::Result;

/// An abstract repository for managing persona persistence.
///
/// This trait defines the contract for persisting and retrieving personas,
/// decoupling the application's core logic from the specific storage mechanism
/// (e.g., JSON file, database, remote API).
///
/// # Implementation Notes
///
/// Implementations should treat a missing or malformed store as an empty
/// collection rather than an error; the orchestrating layer never wants to
/// crash on a hand-edited persona file.
#[async_trait::async_trait]
pub trait PersonaRepository: Send + Sync {
    /// Retrieves all personas from storage.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Persona>)`: All stored personas (empty if the store is
    ///   missing or unreadable)
    /// - `Err(VoxError)`: Error if retrieval fails for another reason
    async fn get_all(&self) -> Result<Vec<Persona>>;

    /// Saves all personas to storage, replacing existing ones wholesale.
    ///
    /// # Arguments
    ///
    /// * `personas` - The personas to save
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Personas saved successfully
    /// - `Err(VoxError)`: Error if save fails
    async fn save_all(&self, personas: &[Persona]) -> Result<()>;
}
