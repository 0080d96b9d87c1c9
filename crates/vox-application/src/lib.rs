//! Application layer for VOX.
//!
//! Orchestrates the focus group workflow: the [`FacilitatorService`] runs
//! simulation rounds against an explicit session object, and
//! [`generate_feedback_report`] distills a finished conversation into an
//! analyst report. A thin UI or API handler owns the session lifecycle and
//! calls in here; this crate holds no global state.

pub mod facilitator;
pub mod report;

pub use facilitator::{FacilitatorService, PersonaReply};
pub use report::generate_feedback_report;
