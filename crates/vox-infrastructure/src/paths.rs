//! Well-known filesystem locations for VOX configuration.

use std::path::PathBuf;

/// Resolves paths under the user's config directory (`~/.config/vox`).
pub struct VoxPaths;

impl VoxPaths {
    /// Returns the VOX config directory, `~/.config/vox`.
    pub fn config_dir() -> Result<PathBuf, String> {
        dirs::config_dir()
            .map(|dir| dir.join("vox"))
            .ok_or_else(|| "Could not determine config directory".to_string())
    }

    /// Returns the default persona store path, `~/.config/vox/personas.json`.
    pub fn persona_file() -> Result<PathBuf, String> {
        Self::config_dir().map(|dir| dir.join("personas.json"))
    }

    /// Returns the secret file path, `~/.config/vox/secret.json`.
    pub fn secret_file() -> Result<PathBuf, String> {
        Self::config_dir().map(|dir| dir.join("secret.json"))
    }
}
