// Message types exchanged between the operator front end and the app loop.
//
// Operator commands arrive as one JSON object per line, tagged by `type`.
// UI updates go back out the same way.

use kickoff_draft::draft::event::DraftEvent;
use kickoff_draft::{DraftSnapshot, Participant, ParticipantId, PickSettings};
use serde::{Deserialize, Serialize};

/// Commands from the operator to the app event loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OperatorCommand {
    /// Offer the roster loaded at startup as the available participants.
    UseRoster,
    /// Offer an explicit list of available participants.
    SetParticipants { participants: Vec<Participant> },
    ConfirmParticipants { ids: Vec<ParticipantId> },
    ConfirmCaptains { a: ParticipantId, b: ParticipantId },
    UpdateSettings { settings: PickSettings },
    FlipCoin,
    ConfirmFirstPick,
    StartDrafting,
    Pick { participant: ParticipantId },
    Remove { participant: ParticipantId },
    CompleteTurn,
    NextTurn,
    GoBack,
    Reset,
    /// Hand the finished draft to the match recorder.
    Record { match_id: String },
    /// Re-send the current snapshot without changing anything.
    Refresh,
    Quit,
}

impl OperatorCommand {
    /// Short name used in logs and rejection messages.
    pub fn name(&self) -> &'static str {
        match self {
            OperatorCommand::UseRoster => "use_roster",
            OperatorCommand::SetParticipants { .. } => "set_participants",
            OperatorCommand::ConfirmParticipants { .. } => "confirm_participants",
            OperatorCommand::ConfirmCaptains { .. } => "confirm_captains",
            OperatorCommand::UpdateSettings { .. } => "update_settings",
            OperatorCommand::FlipCoin => "flip_coin",
            OperatorCommand::ConfirmFirstPick => "confirm_first_pick",
            OperatorCommand::StartDrafting => "start_drafting",
            OperatorCommand::Pick { .. } => "pick",
            OperatorCommand::Remove { .. } => "remove",
            OperatorCommand::CompleteTurn => "complete_turn",
            OperatorCommand::NextTurn => "next_turn",
            OperatorCommand::GoBack => "go_back",
            OperatorCommand::Reset => "reset",
            OperatorCommand::Record { .. } => "record",
            OperatorCommand::Refresh => "refresh",
            OperatorCommand::Quit => "quit",
        }
    }
}

/// Updates pushed from the app loop to the operator front end.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiUpdate {
    /// Full observable state after a command or clock tick.
    Snapshot(Box<DraftSnapshot>),
    /// Events raised since the previous update, oldest first.
    Events { events: Vec<DraftEvent> },
    Rejected { command: String, reason: String },
    Recorded { match_id: String },
}
