// Read-only views of a draft session for observers and collaborators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::draft::participant::{Participant, TurnSide};
use crate::draft::session::SessionPhase;

/// The active turn as seen by observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSnapshot {
    pub side: TurnSide,
    pub turn_number: u32,
    pub picks_made_this_turn: usize,
    pub quota: usize,
    pub is_awaiting_advance: bool,
    pub remaining_timer_secs: u32,
    pub advance_countdown_secs: u32,
}

/// Complete observable state, emitted after every command and tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSnapshot {
    pub phase: SessionPhase,
    /// Confirmed participants (everyone playing in this draft).
    pub participants: Vec<Participant>,
    /// Participants not yet assigned to a team.
    pub pool: Vec<Participant>,
    pub captains: Option<[Participant; 2]>,
    pub team_a: Vec<Participant>,
    pub team_b: Vec<Participant>,
    /// Present from the moment drafting is ready to start.
    pub turn: Option<TurnSnapshot>,
    pub first_pick_side: Option<TurnSide>,
}

/// The finished draft, handed to whoever records the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftResult {
    /// Captain of team A, then captain of team B.
    pub captains: [Participant; 2],
    /// Team A, captain first.
    pub team_a: Vec<Participant>,
    /// Team B, captain first.
    pub team_b: Vec<Participant>,
    pub completed_at: DateTime<Utc>,
}
