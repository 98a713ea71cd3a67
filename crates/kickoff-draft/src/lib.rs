// Library root: the live snake-draft engine.
//
// The engine is synchronous and owns no I/O. A runtime (see kickoff-app)
// feeds it operator commands and one-second clock ticks, then observes the
// snapshot and drains the semantic events after each step.

pub mod draft;
pub mod error;
pub mod snapshot;

pub use draft::participant::{Participant, ParticipantId, TurnSide};
pub use draft::session::{DraftSession, SessionPhase};
pub use draft::settings::PickSettings;
pub use error::DraftError;
pub use snapshot::{DraftResult, DraftSnapshot};
