pub mod config;
pub mod error;
pub mod feature;
pub mod feedback;
pub mod persona;
pub mod search;
pub mod sentiment;
pub mod session;
pub mod transcript;

// Re-export common error type
pub use error::VoxError;
