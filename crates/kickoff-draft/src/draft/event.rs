// Semantic events raised by the draft session for notification collaborators.

use serde::Serialize;

use super::participant::{Participant, TurnSide};
use super::session::SessionPhase;
use crate::snapshot::DraftResult;

/// Why a turn stopped accepting picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnEndReason {
    /// The side reached its quota.
    QuotaReached,
    /// The timer ran out and the remaining picks were filled at random.
    TimerExpired,
}

/// Something observers may want to announce. Drained with
/// [`DraftSession::take_events`](super::session::DraftSession::take_events).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DraftEvent {
    PhaseChanged {
        from: SessionPhase,
        to: SessionPhase,
    },
    CoinFlipped {
        first_pick_side: TurnSide,
    },
    TurnStarted {
        side: TurnSide,
        turn_number: u32,
        quota: usize,
    },
    PlayerPicked {
        side: TurnSide,
        participant: Participant,
        /// Assigned by the timeout fill or the end-of-pool sweep rather than
        /// chosen by the operator.
        automatic: bool,
    },
    PlayerReturned {
        side: TurnSide,
        participant: Participant,
    },
    TurnCompleted {
        side: TurnSide,
        reason: TurnEndReason,
    },
    TimerExpired {
        side: TurnSide,
        auto_picked: usize,
    },
    DraftCompleted(DraftResult),
}
