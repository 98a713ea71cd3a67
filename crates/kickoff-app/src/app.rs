// Application state and the main event loop.
//
// The loop owns the draft session. Operator commands arrive on an mpsc
// channel; a one-second clock drives the turn timer and the advance
// countdown while either is running. After every command or tick the loop
// pushes the drained events and a fresh snapshot to the UI channel.

use std::sync::Arc;
use std::time::Duration;

use kickoff_draft::draft::event::DraftEvent;
use kickoff_draft::{DraftSession, Participant};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::protocol::{OperatorCommand, UiUpdate};
use crate::recorder::MatchRecorder;

/// Period of the draft clock. Timer and countdown values are whole seconds.
pub const CLOCK_TICK: Duration = Duration::from_secs(1);

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub session: DraftSession,
    /// Participants loaded at startup, offered by `use_roster`.
    pub roster: Vec<Participant>,
    pub recorder: Arc<dyn MatchRecorder>,
}

impl AppState {
    pub fn new(
        session: DraftSession,
        roster: Vec<Participant>,
        recorder: Arc<dyn MatchRecorder>,
    ) -> Self {
        AppState {
            session,
            roster,
            recorder,
        }
    }
}

// ---------------------------------------------------------------------------
// Main event loop
// ---------------------------------------------------------------------------

/// Run the application event loop until `Quit` arrives or the command
/// channel closes.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<OperatorCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!("Application event loop started");

    let mut clock = tokio::time::interval(CLOCK_TICK);
    clock.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; consume it so a countdown armed
    // later gets a full second before its first decrement.
    clock.tick().await;
    let mut epoch = state.session.clock_epoch();

    publish(&mut state, &ui_tx).await;

    loop {
        tokio::select! {
            // --- Operator commands ---
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(OperatorCommand::Quit) => {
                        info!("Quit command received, shutting down");
                        break;
                    }
                    Some(cmd) => {
                        handle_operator_command(&mut state, cmd, &ui_tx).await;
                    }
                    None => {
                        info!("Command channel closed, shutting down");
                        break;
                    }
                }
            }

            // --- Draft clock (only while a countdown runs) ---
            _ = clock.tick(), if state.session.needs_clock() => {
                state.session.tick();
                publish(&mut state, &ui_tx).await;
            }
        }

        // A countdown was (re)armed: restart the clock so its first
        // decrement lands a full period from now.
        if state.session.clock_epoch() != epoch {
            epoch = state.session.clock_epoch();
            clock.reset();
        }
    }

    info!("Application event loop exiting");
    Ok(())
}

// ---------------------------------------------------------------------------
// Command handling
// ---------------------------------------------------------------------------

async fn handle_operator_command(
    state: &mut AppState,
    cmd: OperatorCommand,
    ui_tx: &mpsc::Sender<UiUpdate>,
) {
    let name = cmd.name();
    debug!("Operator command: {}", name);

    match apply_command(state, cmd).await {
        Ok(Some(update)) => {
            let _ = ui_tx.send(update).await;
        }
        Ok(None) => {}
        Err(e) => {
            warn!("Rejected {}: {:#}", name, e);
            let _ = ui_tx
                .send(UiUpdate::Rejected {
                    command: name.to_string(),
                    reason: e.to_string(),
                })
                .await;
        }
    }

    publish(state, ui_tx).await;
}

/// Apply one command to the session. Returns an extra update to send ahead
/// of the snapshot, if the command produces one.
async fn apply_command(
    state: &mut AppState,
    cmd: OperatorCommand,
) -> anyhow::Result<Option<UiUpdate>> {
    let session = &mut state.session;
    match cmd {
        OperatorCommand::UseRoster => {
            session.set_participants(state.roster.clone())?;
        }
        OperatorCommand::SetParticipants { participants } => {
            session.set_participants(participants)?;
        }
        OperatorCommand::ConfirmParticipants { ids } => session.confirm_participants(&ids)?,
        OperatorCommand::ConfirmCaptains { a, b } => session.confirm_captains(&a, &b)?,
        OperatorCommand::UpdateSettings { settings } => session.update_settings(settings)?,
        OperatorCommand::FlipCoin => {
            session.flip_coin()?;
        }
        OperatorCommand::ConfirmFirstPick => session.confirm_first_pick()?,
        OperatorCommand::StartDrafting => session.start_drafting()?,
        OperatorCommand::Pick { participant } => session.pick_player(&participant)?,
        OperatorCommand::Remove { participant } => session.remove_player(&participant)?,
        OperatorCommand::CompleteTurn => session.complete_turn_manually()?,
        OperatorCommand::NextTurn => session.proceed_to_next_turn()?,
        OperatorCommand::GoBack => session.reset_to_ready()?,
        OperatorCommand::Reset => session.reset(),
        OperatorCommand::Record { match_id } => {
            let result = session.result()?;
            state.recorder.record(&match_id, &result).await?;
            return Ok(Some(UiUpdate::Recorded { match_id }));
        }
        OperatorCommand::Refresh | OperatorCommand::Quit => {}
    }
    Ok(None)
}

/// Push drained events (if any) and the current snapshot to the UI.
async fn publish(state: &mut AppState, ui_tx: &mpsc::Sender<UiUpdate>) {
    let events = state.session.take_events();
    for event in &events {
        match event {
            DraftEvent::TimerExpired { side, auto_picked } => {
                info!("Timer expired for {}, auto-picked {}", side, auto_picked);
            }
            DraftEvent::DraftCompleted(result) => {
                info!(
                    "Draft completed: {} vs {} players",
                    result.team_a.len(),
                    result.team_b.len()
                );
            }
            _ => {}
        }
    }
    if !events.is_empty() {
        let _ = ui_tx.send(UiUpdate::Events { events }).await;
    }
    let snapshot = state.session.snapshot();
    let _ = ui_tx.send(UiUpdate::Snapshot(Box::new(snapshot))).await;
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
