//! Session domain module.
//!
//! This module contains the focus group session model and conversation turn
//! types.
//!
//! # Module Structure
//!
//! - `model`: Core session entity (`FocusSession`)
//! - `turn`: Conversation turn types (`Speaker`, `ConversationTurn`)
//!
//! # Usage
//!
//! ```ignore
//! use vox_core::session::{FocusSession, ConversationTurn, Speaker};
//! ```

mod model;
mod turn;

// Re-export public API
pub use model::FocusSession;
pub use turn::{ConversationTurn, Speaker};
