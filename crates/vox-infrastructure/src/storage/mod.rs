//! File-backed storage helpers.

mod secret_storage;

pub use secret_storage::{SecretStorage, SecretStorageError};
