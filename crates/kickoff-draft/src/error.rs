// Errors raised by draft session commands.

use thiserror::Error;

use crate::draft::participant::ParticipantId;
use crate::draft::session::SessionPhase;

/// A rejected draft command.
///
/// Every variant is local and non-fatal: the session is left exactly as it
/// was before the command, and the caller is expected to re-prompt.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("at least 2 participants are required, got {count}")]
    InsufficientParticipants { count: usize },

    #[error("invalid captain selection: {reason}")]
    InvalidCaptainSelection { reason: String },

    #[error("no coin flip has been performed")]
    NoFlipResult,

    #[error("`{command}` is not allowed right now (phase {phase:?}, awaiting advance: {awaiting_advance})")]
    TurnLocked {
        command: &'static str,
        phase: SessionPhase,
        awaiting_advance: bool,
    },

    #[error("turn quota not met: {picks_made} of {quota} picks made")]
    QuotaNotMet { picks_made: usize, quota: usize },

    #[error("unknown participant: {0}")]
    UnknownParticipant(ParticipantId),

    #[error("invalid pick setting `{field}`: {message}")]
    InvalidSettings { field: String, message: String },

    #[error("draft is not complete")]
    DraftNotComplete,
}
