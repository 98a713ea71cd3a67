// Draft session: the snake-draft state machine.
//
// One aggregate owns the participants, captains, both rosters, the pool, the
// active turn, the turn timer, and the advance countdown. Every public
// command validates first and only then mutates, so a rejected command leaves
// the session untouched.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::event::{DraftEvent, TurnEndReason};
use super::participant::{Participant, ParticipantId, TeamRoster, TurnSide};
use super::quota::{quota_for, TeamSizes};
use super::random::RandomSelector;
use super::settings::PickSettings;
use super::timer::TurnTimer;
use super::transition::{AdvanceDecision, TurnTransitionController};
use crate::error::DraftError;
use crate::snapshot::{DraftResult, DraftSnapshot, TurnSnapshot};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    Setup,
    SelectingParticipants,
    SelectingCaptains,
    DeterminingFirstPick,
    Ready,
    Drafting,
    Completed,
}

/// The active turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnState {
    pub side: TurnSide,
    /// 1-based, for display and logs only; quotas never consult it.
    pub turn_number: u32,
    pub picks_made_this_turn: usize,
    pub is_awaiting_advance: bool,
    /// Roster sizes when the turn began.
    pub sizes_at_start: TeamSizes,
    /// Picks made during this turn. Only these may be handed back.
    picked_this_turn: Vec<ParticipantId>,
}

impl TurnState {
    fn new(side: TurnSide, turn_number: u32, sizes_at_start: TeamSizes) -> Self {
        TurnState {
            side,
            turn_number,
            picks_made_this_turn: 0,
            is_awaiting_advance: false,
            sizes_at_start,
            picked_this_turn: Vec::new(),
        }
    }

    pub fn picked_this_turn(&self) -> &[ParticipantId] {
        &self.picked_this_turn
    }
}

/// A live captain-pick draft.
#[derive(Debug)]
pub struct DraftSession {
    phase: SessionPhase,
    settings: PickSettings,
    /// Everyone offered by the roster collaborator.
    available: Vec<Participant>,
    /// Everyone confirmed to play in this draft.
    participants: Vec<Participant>,
    pool: Vec<Participant>,
    /// Captain A (side 1), captain B (side 2).
    captains: Option<[Participant; 2]>,
    /// Team A (side 1), team B (side 2).
    teams: Option<[TeamRoster; 2]>,
    first_pick_side: Option<TurnSide>,
    turn: Option<TurnState>,
    timer: TurnTimer,
    transition: TurnTransitionController,
    random: RandomSelector,
    result: Option<DraftResult>,
    events: Vec<DraftEvent>,
    /// Bumped whenever a countdown is armed so the clock driver can re-base.
    clock_epoch: u64,
}

impl DraftSession {
    /// Create a session in `Setup` with an OS-seeded random source.
    pub fn new(settings: PickSettings) -> Result<Self, DraftError> {
        Self::with_random(settings, RandomSelector::new())
    }

    /// Create a session with an explicit random source.
    pub fn with_random(settings: PickSettings, random: RandomSelector) -> Result<Self, DraftError> {
        settings.validate()?;
        Ok(DraftSession {
            phase: SessionPhase::Setup,
            settings,
            available: Vec::new(),
            participants: Vec::new(),
            pool: Vec::new(),
            captains: None,
            teams: None,
            first_pick_side: None,
            turn: None,
            timer: TurnTimer::new(),
            transition: TurnTransitionController::new(),
            random,
            result: None,
            events: Vec::new(),
            clock_epoch: 0,
        })
    }

    // -----------------------------------------------------------------------
    // Setup commands
    // -----------------------------------------------------------------------

    /// Replace the pick settings. Only allowed before drafting starts.
    pub fn update_settings(&mut self, settings: PickSettings) -> Result<(), DraftError> {
        if matches!(self.phase, SessionPhase::Drafting | SessionPhase::Completed) {
            return Err(self.locked("update_settings"));
        }
        settings.validate()?;
        info!("Pick settings updated: {:?}", settings);
        self.settings = settings;
        Ok(())
    }

    /// Offer the roster to draft from. Duplicate ids keep their first entry.
    pub fn set_participants(&mut self, roster: Vec<Participant>) -> Result<(), DraftError> {
        if !matches!(
            self.phase,
            SessionPhase::Setup | SessionPhase::SelectingParticipants
        ) {
            return Err(self.locked("set_participants"));
        }

        let mut unique: Vec<Participant> = Vec::with_capacity(roster.len());
        for p in roster {
            if unique.iter().any(|u| u.id == p.id) {
                debug!("Dropping duplicate participant {}", p.id);
                continue;
            }
            unique.push(p);
        }
        if unique.len() < 2 {
            return Err(DraftError::InsufficientParticipants {
                count: unique.len(),
            });
        }

        info!("Roster offered with {} participants", unique.len());
        self.available = unique;
        self.set_phase(SessionPhase::SelectingParticipants);
        Ok(())
    }

    /// Choose who plays from the offered roster. The pool starts as exactly
    /// this selection.
    pub fn confirm_participants(&mut self, ids: &[ParticipantId]) -> Result<(), DraftError> {
        if self.phase != SessionPhase::SelectingParticipants {
            return Err(self.locked("confirm_participants"));
        }

        let mut selected: Vec<Participant> = Vec::with_capacity(ids.len());
        for id in ids {
            if selected.iter().any(|p| &p.id == id) {
                continue;
            }
            let player = self
                .available
                .iter()
                .find(|p| &p.id == id)
                .ok_or_else(|| DraftError::UnknownParticipant(id.clone()))?;
            selected.push(player.clone());
        }
        if selected.len() < 2 {
            return Err(DraftError::InsufficientParticipants {
                count: selected.len(),
            });
        }

        info!("{} participants confirmed", selected.len());
        self.pool = selected.clone();
        self.participants = selected;
        self.set_phase(SessionPhase::SelectingCaptains);
        Ok(())
    }

    /// Name the two captains: `a` leads side 1, `b` leads side 2. Both leave
    /// the pool together.
    pub fn confirm_captains(&mut self, a: &ParticipantId, b: &ParticipantId) -> Result<(), DraftError> {
        if self.phase != SessionPhase::SelectingCaptains {
            return Err(self.locked("confirm_captains"));
        }
        if a == b {
            return Err(DraftError::InvalidCaptainSelection {
                reason: "captains must be two different participants".into(),
            });
        }
        let captain_a = self.confirmed_participant(a)?;
        let captain_b = self.confirmed_participant(b)?;

        self.pool.retain(|p| &p.id != a && &p.id != b);
        info!(
            "Captains confirmed: {} vs {}",
            captain_a.display_name, captain_b.display_name
        );
        self.captains = Some([captain_a, captain_b]);
        self.first_pick_side = None;
        self.set_phase(SessionPhase::DeterminingFirstPick);
        Ok(())
    }

    /// Flip for first pick. May be repeated until confirmed; each flip
    /// replaces the previous result.
    pub fn flip_coin(&mut self) -> Result<TurnSide, DraftError> {
        if self.phase != SessionPhase::DeterminingFirstPick {
            return Err(self.locked("flip_coin"));
        }
        let side = self.random.flip_coin();
        info!("Coin flip: {} picks first", side);
        self.first_pick_side = Some(side);
        self.events.push(DraftEvent::CoinFlipped {
            first_pick_side: side,
        });
        Ok(side)
    }

    /// Lock in the flip result and seat each captain on their team.
    pub fn confirm_first_pick(&mut self) -> Result<(), DraftError> {
        if self.phase != SessionPhase::DeterminingFirstPick {
            return Err(self.locked("confirm_first_pick"));
        }
        let side = self.first_pick_side.ok_or(DraftError::NoFlipResult)?;
        let Some([captain_a, captain_b]) = self.captains.clone() else {
            return Err(self.locked("confirm_first_pick"));
        };

        self.teams = Some([TeamRoster::new(captain_a), TeamRoster::new(captain_b)]);
        self.turn = Some(TurnState::new(side, 1, [1, 1]));
        self.set_phase(SessionPhase::Ready);
        Ok(())
    }

    /// Begin drafting. With nobody left to pick the draft completes at once.
    pub fn start_drafting(&mut self) -> Result<(), DraftError> {
        if self.phase != SessionPhase::Ready {
            return Err(self.locked("start_drafting"));
        }
        let Some(side) = self.first_pick_side else {
            return Err(DraftError::NoFlipResult);
        };

        self.set_phase(SessionPhase::Drafting);
        if self.pool.is_empty() {
            self.complete();
            return Ok(());
        }
        self.begin_turn(side, 1);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Drafting commands
    // -----------------------------------------------------------------------

    /// Move a pooled participant onto the active side.
    pub fn pick_player(&mut self, id: &ParticipantId) -> Result<(), DraftError> {
        self.ensure_open_turn("pick_player")?;
        let quota = self.current_quota().unwrap_or(0);
        let picks_made = self.turn.as_ref().map_or(0, |t| t.picks_made_this_turn);
        if picks_made >= quota {
            return Err(self.locked("pick_player"));
        }
        let idx = self
            .pool
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| DraftError::UnknownParticipant(id.clone()))?;

        let player = self.pool.remove(idx);
        let side = self.assign(player, false);
        if let Some(turn) = self.turn.as_ref() {
            info!(
                "{} picked {} ({}/{})",
                side, id, turn.picks_made_this_turn, quota
            );
        }
        self.settle_turn(TurnEndReason::QuotaReached);
        Ok(())
    }

    /// Hand a same-turn pick back to the pool.
    pub fn remove_player(&mut self, id: &ParticipantId) -> Result<(), DraftError> {
        self.ensure_open_turn("remove_player")?;
        let (Some(turn), Some(teams)) = (self.turn.as_mut(), self.teams.as_mut()) else {
            return Err(DraftError::UnknownParticipant(id.clone()));
        };
        let Some(pos) = turn.picked_this_turn.iter().position(|p| p == id) else {
            return Err(DraftError::UnknownParticipant(id.clone()));
        };
        let Some(player) = teams[turn.side.index()].remove_pick(id) else {
            return Err(DraftError::UnknownParticipant(id.clone()));
        };

        turn.picked_this_turn.remove(pos);
        turn.picks_made_this_turn -= 1;
        let side = turn.side;
        info!("{} returned {} to the pool", side, id);
        self.pool.push(player.clone());
        self.events.push(DraftEvent::PlayerReturned {
            side,
            participant: player,
        });
        Ok(())
    }

    /// Confirm the turn is done. The pending timer expiry for this turn is
    /// suppressed; calling again, or after the quota already closed the
    /// turn, changes nothing.
    pub fn complete_turn_manually(&mut self) -> Result<(), DraftError> {
        if self.phase != SessionPhase::Drafting {
            return Err(self.locked("complete_turn_manually"));
        }
        let quota = self.current_quota().unwrap_or(0);
        let Some(turn) = self.turn.as_ref() else {
            return Err(self.locked("complete_turn_manually"));
        };
        if turn.picks_made_this_turn < quota {
            return Err(DraftError::QuotaNotMet {
                picks_made: turn.picks_made_this_turn,
                quota,
            });
        }

        self.timer.cancel();
        if turn.is_awaiting_advance {
            debug!("Turn {} already complete", turn.turn_number);
            return Ok(());
        }
        self.settle_turn(TurnEndReason::QuotaReached);
        Ok(())
    }

    /// Fill the active side's outstanding picks at random.
    ///
    /// Runs at most once per turn: a second expiry, an expiry after the
    /// operator completed the turn, or an expiry while awaiting advance is a
    /// no-op.
    pub fn handle_timer_expiry(&mut self) -> Result<(), DraftError> {
        if self.phase != SessionPhase::Drafting {
            return Err(self.locked("handle_timer_expiry"));
        }
        let quota = self.current_quota().unwrap_or(0);
        let Some(turn) = self.turn.as_ref() else {
            return Err(self.locked("handle_timer_expiry"));
        };
        if turn.is_awaiting_advance {
            debug!("Timer expiry ignored: turn {} awaiting advance", turn.turn_number);
            return Ok(());
        }
        let needed = quota.saturating_sub(turn.picks_made_this_turn);
        let side = turn.side;
        if !self.timer.claim_expiry() {
            debug!("Timer expiry ignored: already handled");
            return Ok(());
        }
        if needed == 0 {
            return Ok(());
        }

        let pool = std::mem::take(&mut self.pool);
        let (drawn, remaining) = self.random.sample_without_replacement(pool, needed);
        self.pool = remaining;
        let auto_picked = drawn.len();
        warn!("Timer expired for {}: auto-picking {} player(s)", side, auto_picked);
        for player in drawn {
            self.assign(player, true);
        }
        self.events.push(DraftEvent::TimerExpired { side, auto_picked });
        self.settle_turn(TurnEndReason::TimerExpired);
        Ok(())
    }

    /// Hand the turn to the other side.
    pub fn proceed_to_next_turn(&mut self) -> Result<(), DraftError> {
        let awaiting = self.turn.as_ref().is_some_and(|t| t.is_awaiting_advance);
        if self.phase != SessionPhase::Drafting || !awaiting {
            return Err(self.locked("proceed_to_next_turn"));
        }
        self.advance_turn();
        Ok(())
    }

    /// Go back to `Ready`: every drafted player returns to the pool and both
    /// teams shrink to their captain. Destructive; callers confirm upstream.
    pub fn reset_to_ready(&mut self) -> Result<(), DraftError> {
        if !matches!(self.phase, SessionPhase::Drafting | SessionPhase::Completed) {
            return Err(self.locked("reset_to_ready"));
        }
        let (Some(side), Some([captain_a, captain_b])) = (self.first_pick_side, self.captains.clone())
        else {
            return Err(self.locked("reset_to_ready"));
        };

        self.teams = Some([TeamRoster::new(captain_a.clone()), TeamRoster::new(captain_b.clone())]);
        self.pool = self
            .participants
            .iter()
            .filter(|p| p.id != captain_a.id && p.id != captain_b.id)
            .cloned()
            .collect();
        self.turn = Some(TurnState::new(side, 1, [1, 1]));
        self.timer.cancel();
        self.transition.cancel();
        self.result = None;
        info!("Draft rolled back to ready; {} players back in the pool", self.pool.len());
        self.set_phase(SessionPhase::Ready);
        Ok(())
    }

    /// Discard everything and return to `Setup`. Settings are kept.
    pub fn reset(&mut self) {
        self.timer.cancel();
        self.transition.cancel();
        self.available.clear();
        self.participants.clear();
        self.pool.clear();
        self.captains = None;
        self.teams = None;
        self.first_pick_side = None;
        self.turn = None;
        self.result = None;
        info!("Draft session reset");
        if self.phase != SessionPhase::Setup {
            self.set_phase(SessionPhase::Setup);
        }
    }

    // -----------------------------------------------------------------------
    // Clock
    // -----------------------------------------------------------------------

    /// Advance the turn timer or the advance countdown by one second.
    pub fn tick(&mut self) {
        if self.phase != SessionPhase::Drafting {
            return;
        }
        let awaiting = self.turn.as_ref().is_some_and(|t| t.is_awaiting_advance);
        if awaiting {
            if self.transition.tick() {
                debug!("Advance countdown finished");
                self.advance_turn();
            }
        } else if self.timer.tick() {
            if let Err(e) = self.handle_timer_expiry() {
                warn!("Timer expiry rejected: {}", e);
            }
        }
    }

    /// Whether a countdown is running and ticks are needed.
    pub fn needs_clock(&self) -> bool {
        self.phase == SessionPhase::Drafting
            && (self.timer.is_running() || self.transition.is_counting_down())
    }

    /// Changes whenever a countdown is (re)armed.
    pub fn clock_epoch(&self) -> u64 {
        self.clock_epoch
    }

    // -----------------------------------------------------------------------
    // Observation
    // -----------------------------------------------------------------------

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn settings(&self) -> &PickSettings {
        &self.settings
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn pool(&self) -> &[Participant] {
        &self.pool
    }

    pub fn captains(&self) -> Option<&[Participant; 2]> {
        self.captains.as_ref()
    }

    pub fn team(&self, side: TurnSide) -> Option<&TeamRoster> {
        self.teams.as_ref().map(|t| &t[side.index()])
    }

    pub fn turn(&self) -> Option<&TurnState> {
        self.turn.as_ref()
    }

    pub fn first_pick_side(&self) -> Option<TurnSide> {
        self.first_pick_side
    }

    /// Picks owed on the current turn.
    pub fn current_quota(&self) -> Option<usize> {
        let turn = self.turn.as_ref()?;
        let first = self.first_pick_side?;
        Some(quota_for(turn.side, first, turn.sizes_at_start, &self.settings))
    }

    /// The finished teams, once the draft is complete.
    pub fn result(&self) -> Result<DraftResult, DraftError> {
        match (&self.phase, &self.result) {
            (SessionPhase::Completed, Some(result)) => Ok(result.clone()),
            _ => Err(DraftError::DraftNotComplete),
        }
    }

    /// Drain the events raised since the last call.
    pub fn take_events(&mut self) -> Vec<DraftEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> DraftSnapshot {
        let turn = self.turn.as_ref().map(|t| TurnSnapshot {
            side: t.side,
            turn_number: t.turn_number,
            picks_made_this_turn: t.picks_made_this_turn,
            quota: self.current_quota().unwrap_or(0),
            is_awaiting_advance: t.is_awaiting_advance,
            remaining_timer_secs: self.timer.remaining_secs(),
            advance_countdown_secs: self.transition.remaining_secs(),
        });
        let (team_a, team_b) = match &self.teams {
            Some([a, b]) => (a.members().to_vec(), b.members().to_vec()),
            None => (Vec::new(), Vec::new()),
        };
        let participants = if self.participants.is_empty() {
            self.available.clone()
        } else {
            self.participants.clone()
        };

        DraftSnapshot {
            phase: self.phase,
            participants,
            pool: self.pool.clone(),
            captains: self.captains.clone(),
            team_a,
            team_b,
            turn,
            first_pick_side: self.first_pick_side,
        }
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn set_phase(&mut self, to: SessionPhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        info!("Draft phase {:?} -> {:?}", from, to);
        self.phase = to;
        self.events.push(DraftEvent::PhaseChanged { from, to });
    }

    fn locked(&self, command: &'static str) -> DraftError {
        DraftError::TurnLocked {
            command,
            phase: self.phase,
            awaiting_advance: self.turn.as_ref().is_some_and(|t| t.is_awaiting_advance),
        }
    }

    fn ensure_open_turn(&self, command: &'static str) -> Result<(), DraftError> {
        match (&self.phase, &self.turn) {
            (SessionPhase::Drafting, Some(turn)) if !turn.is_awaiting_advance => Ok(()),
            _ => Err(self.locked(command)),
        }
    }

    fn confirmed_participant(&self, id: &ParticipantId) -> Result<Participant, DraftError> {
        self.participants
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| DraftError::InvalidCaptainSelection {
                reason: format!("{id} is not a confirmed participant"),
            })
    }

    fn team_sizes(&self) -> TeamSizes {
        match &self.teams {
            Some([a, b]) => [a.len(), b.len()],
            None => [1, 1],
        }
    }

    /// Put a player on the active side and count the pick.
    fn assign(&mut self, player: Participant, automatic: bool) -> TurnSide {
        let (Some(turn), Some(teams)) = (self.turn.as_mut(), self.teams.as_mut()) else {
            warn!("Assignment of {} without an active turn", player.id);
            self.pool.push(player);
            return TurnSide::Side1;
        };
        let side = turn.side;
        turn.picks_made_this_turn += 1;
        turn.picked_this_turn.push(player.id.clone());
        teams[side.index()].push(player.clone());
        self.events.push(DraftEvent::PlayerPicked {
            side,
            participant: player,
            automatic,
        });
        side
    }

    /// Decide what follows a turn starting or a pick landing: completion,
    /// the end-of-pool sweep, awaiting advance, or nothing.
    fn settle_turn(&mut self, reason: TurnEndReason) {
        let quota = self.current_quota().unwrap_or(0);
        let Some(turn) = self.turn.as_ref() else {
            return;
        };
        let side = turn.side;
        let needed = quota.saturating_sub(turn.picks_made_this_turn);

        if self.pool.is_empty() {
            if needed == 0 {
                self.events.push(DraftEvent::TurnCompleted { side, reason });
            }
            self.complete();
            return;
        }

        if needed > 0 && self.pool.len() <= needed {
            // Too few players left for another full cycle: the active side
            // takes them all, even past its nominal quota.
            let swept = std::mem::take(&mut self.pool);
            info!("{} takes the last {} player(s)", side, swept.len());
            for player in swept {
                self.assign(player, true);
            }
            if let Some(turn) = self.turn.as_mut() {
                turn.picks_made_this_turn = turn.picks_made_this_turn.min(quota);
            }
            self.complete();
            return;
        }

        if needed == 0 {
            if let Some(turn) = self.turn.as_mut() {
                turn.is_awaiting_advance = true;
            }
            self.timer.cancel();
            self.events.push(DraftEvent::TurnCompleted { side, reason });
            self.await_advance();
        }
    }

    fn await_advance(&mut self) {
        match self.transition.begin(&self.settings) {
            AdvanceDecision::Immediate => self.advance_turn(),
            AdvanceDecision::Countdown(secs) => {
                debug!("Advancing in {}s", secs);
                self.clock_epoch += 1;
            }
            AdvanceDecision::Manual => {
                debug!("Waiting for operator to advance");
            }
        }
    }

    fn advance_turn(&mut self) {
        let Some(turn) = self.turn.as_ref() else {
            return;
        };
        let next = turn.side.other();
        let number = turn.turn_number + 1;
        self.begin_turn(next, number);
    }

    fn begin_turn(&mut self, side: TurnSide, turn_number: u32) {
        self.transition.cancel();
        self.turn = Some(TurnState::new(side, turn_number, self.team_sizes()));
        if self.settings.timer_enabled {
            self.timer.start(self.settings.timer_duration_secs);
            self.clock_epoch += 1;
        } else {
            self.timer.reset();
        }
        let quota = self.current_quota().unwrap_or(0);
        info!("Turn {}: {} owes {} pick(s)", turn_number, side, quota);
        self.events.push(DraftEvent::TurnStarted {
            side,
            turn_number,
            quota,
        });
        // A turn that opens with no more players than it owes ends the draft.
        self.settle_turn(TurnEndReason::QuotaReached);
    }

    fn complete(&mut self) {
        self.timer.cancel();
        self.transition.cancel();
        if let Some(turn) = self.turn.as_mut() {
            turn.is_awaiting_advance = false;
        }
        let (Some(captains), Some([team_a, team_b])) = (&self.captains, &self.teams) else {
            warn!("Draft completed without captains or teams");
            return;
        };
        let result = DraftResult {
            captains: captains.clone(),
            team_a: team_a.members().to_vec(),
            team_b: team_b.members().to_vec(),
            completed_at: Utc::now(),
        };
        info!(
            "Draft complete: team A {} players, team B {} players",
            result.team_a.len(),
            result.team_b.len()
        );
        self.result = Some(result.clone());
        self.set_phase(SessionPhase::Completed);
        self.events.push(DraftEvent::DraftCompleted(result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(ids: &[&str]) -> Vec<Participant> {
        ids.iter()
            .map(|id| Participant::new(*id, id.to_uppercase()))
            .collect()
    }

    fn ids(ids: &[&str]) -> Vec<ParticipantId> {
        ids.iter().map(|id| ParticipantId::from(*id)).collect()
    }

    fn pid(id: &str) -> ParticipantId {
        ParticipantId::from(id)
    }

    /// No timer, no auto-advance: every transition is explicit.
    fn manual_settings(first: usize, regular: usize) -> PickSettings {
        PickSettings {
            timer_enabled: false,
            timer_duration_secs: 30,
            first_turn_pick_count: first,
            regular_turn_pick_count: regular,
            auto_advance_enabled: false,
            auto_advance_delay_secs: 0,
        }
    }

    /// A session in `Ready` with captains `a` and `b` and `first` picking first.
    fn ready_session(names: &[&str], settings: PickSettings, first: TurnSide) -> DraftSession {
        let mut session = DraftSession::with_random(settings, RandomSelector::seeded(11)).unwrap();
        session.set_participants(roster(names)).unwrap();
        session.confirm_participants(&ids(names)).unwrap();
        session.confirm_captains(&pid("a"), &pid("b")).unwrap();
        let mut flipped = session.flip_coin().unwrap();
        for _ in 0..64 {
            if flipped == first {
                break;
            }
            flipped = session.flip_coin().unwrap();
        }
        assert_eq!(flipped, first, "seeded coin never landed on {first}");
        session.confirm_first_pick().unwrap();
        session
    }

    fn drafting_session(names: &[&str], settings: PickSettings, first: TurnSide) -> DraftSession {
        let mut session = ready_session(names, settings, first);
        session.start_drafting().unwrap();
        session
    }

    fn team_ids(session: &DraftSession, side: TurnSide) -> Vec<String> {
        session
            .team(side)
            .unwrap()
            .members()
            .iter()
            .map(|p| p.id.0.clone())
            .collect()
    }

    fn pool_ids(session: &DraftSession) -> Vec<String> {
        let mut v: Vec<String> = session.pool().iter().map(|p| p.id.0.clone()).collect();
        v.sort();
        v
    }

    fn assert_conserved(session: &DraftSession) {
        let a = session.team(TurnSide::Side1).map_or(0, |t| t.len());
        let b = session.team(TurnSide::Side2).map_or(0, |t| t.len());
        assert_eq!(
            session.pool().len() + a + b,
            session.participants().len(),
            "pool + teams must account for every participant"
        );
    }

    // -----------------------------------------------------------------------
    // Tests: setup phases
    // -----------------------------------------------------------------------

    #[test]
    fn new_session_starts_in_setup() {
        let session = DraftSession::new(PickSettings::default()).unwrap();
        assert_eq!(session.phase(), SessionPhase::Setup);
        assert!(session.snapshot().turn.is_none());
    }

    #[test]
    fn new_session_rejects_invalid_settings() {
        let settings = PickSettings {
            regular_turn_pick_count: 0,
            ..PickSettings::default()
        };
        assert!(matches!(
            DraftSession::new(settings),
            Err(DraftError::InvalidSettings { .. })
        ));
    }

    #[test]
    fn set_participants_requires_two() {
        let mut session = DraftSession::new(PickSettings::default()).unwrap();
        let err = session.set_participants(roster(&["a"])).unwrap_err();
        assert_eq!(err, DraftError::InsufficientParticipants { count: 1 });
        assert_eq!(session.phase(), SessionPhase::Setup);
    }

    #[test]
    fn set_participants_drops_duplicate_ids() {
        let mut session = DraftSession::new(PickSettings::default()).unwrap();
        let err = session
            .set_participants(roster(&["a", "a"]))
            .unwrap_err();
        assert_eq!(err, DraftError::InsufficientParticipants { count: 1 });

        session.set_participants(roster(&["a", "b", "a"])).unwrap();
        assert_eq!(session.snapshot().participants.len(), 2);
        assert_eq!(session.phase(), SessionPhase::SelectingParticipants);
    }

    #[test]
    fn confirm_participants_builds_pool_from_selection() {
        let mut session = DraftSession::new(PickSettings::default()).unwrap();
        session
            .set_participants(roster(&["a", "b", "c", "d"]))
            .unwrap();
        session.confirm_participants(&ids(&["a", "b", "d"])).unwrap();

        assert_eq!(session.phase(), SessionPhase::SelectingCaptains);
        assert_eq!(session.participants().len(), 3);
        assert_eq!(pool_ids(&session), vec!["a", "b", "d"]);
    }

    #[test]
    fn confirm_participants_rejects_unknown_id() {
        let mut session = DraftSession::new(PickSettings::default()).unwrap();
        session.set_participants(roster(&["a", "b", "c"])).unwrap();
        let err = session
            .confirm_participants(&ids(&["a", "zed"]))
            .unwrap_err();
        assert_eq!(err, DraftError::UnknownParticipant(pid("zed")));
        assert_eq!(session.phase(), SessionPhase::SelectingParticipants);
        assert!(session.pool().is_empty());
    }

    #[test]
    fn confirm_participants_requires_two_distinct() {
        let mut session = DraftSession::new(PickSettings::default()).unwrap();
        session.set_participants(roster(&["a", "b", "c"])).unwrap();
        let err = session
            .confirm_participants(&ids(&["a", "a"]))
            .unwrap_err();
        assert_eq!(err, DraftError::InsufficientParticipants { count: 1 });
    }

    #[test]
    fn confirm_captains_rejects_same_participant() {
        let mut session = DraftSession::new(PickSettings::default()).unwrap();
        session.set_participants(roster(&["a", "b", "c"])).unwrap();
        session.confirm_participants(&ids(&["a", "b", "c"])).unwrap();

        let err = session.confirm_captains(&pid("a"), &pid("a")).unwrap_err();
        assert!(matches!(err, DraftError::InvalidCaptainSelection { .. }));
        assert_eq!(session.pool().len(), 3);
    }

    #[test]
    fn confirm_captains_rejects_unconfirmed_participant() {
        let mut session = DraftSession::new(PickSettings::default()).unwrap();
        session.set_participants(roster(&["a", "b", "c"])).unwrap();
        session.confirm_participants(&ids(&["a", "b"])).unwrap();

        let err = session.confirm_captains(&pid("a"), &pid("c")).unwrap_err();
        assert!(matches!(err, DraftError::InvalidCaptainSelection { .. }));
        assert_eq!(session.phase(), SessionPhase::SelectingCaptains);
        assert_eq!(session.pool().len(), 2);
    }

    #[test]
    fn confirm_captains_removes_both_from_pool() {
        let mut session = DraftSession::new(PickSettings::default()).unwrap();
        session.set_participants(roster(&["a", "b", "c", "d"])).unwrap();
        session
            .confirm_participants(&ids(&["a", "b", "c", "d"]))
            .unwrap();
        session.confirm_captains(&pid("a"), &pid("b")).unwrap();

        assert_eq!(session.phase(), SessionPhase::DeterminingFirstPick);
        assert_eq!(pool_ids(&session), vec!["c", "d"]);
        let captains = session.captains().unwrap();
        assert_eq!(captains[0].id, pid("a"));
        assert_eq!(captains[1].id, pid("b"));
    }

    #[test]
    fn confirm_first_pick_requires_flip() {
        let mut session = DraftSession::new(PickSettings::default()).unwrap();
        session.set_participants(roster(&["a", "b", "c"])).unwrap();
        session.confirm_participants(&ids(&["a", "b", "c"])).unwrap();
        session.confirm_captains(&pid("a"), &pid("b")).unwrap();

        assert_eq!(session.confirm_first_pick(), Err(DraftError::NoFlipResult));
        assert_eq!(session.phase(), SessionPhase::DeterminingFirstPick);
    }

    #[test]
    fn reflipping_overwrites_result() {
        let mut session = DraftSession::with_random(PickSettings::default(), RandomSelector::seeded(5)).unwrap();
        session.set_participants(roster(&["a", "b", "c"])).unwrap();
        session.confirm_participants(&ids(&["a", "b", "c"])).unwrap();
        session.confirm_captains(&pid("a"), &pid("b")).unwrap();

        for _ in 0..10 {
            let side = session.flip_coin().unwrap();
            assert_eq!(session.first_pick_side(), Some(side));
        }
        let last = session.first_pick_side().unwrap();
        session.confirm_first_pick().unwrap();
        assert_eq!(session.turn().unwrap().side, last);
    }

    #[test]
    fn confirm_first_pick_seats_captains() {
        let session = ready_session(&["a", "b", "c", "d"], manual_settings(1, 2), TurnSide::Side2);
        assert_eq!(session.phase(), SessionPhase::Ready);
        assert_eq!(team_ids(&session, TurnSide::Side1), vec!["a"]);
        assert_eq!(team_ids(&session, TurnSide::Side2), vec!["b"]);
        assert_eq!(session.turn().unwrap().side, TurnSide::Side2);
    }

    #[test]
    fn commands_out_of_phase_are_locked() {
        let mut session = ready_session(&["a", "b", "c", "d"], manual_settings(1, 2), TurnSide::Side1);
        let before = session.snapshot();

        assert!(matches!(
            session.pick_player(&pid("c")),
            Err(DraftError::TurnLocked { command: "pick_player", .. })
        ));
        assert!(matches!(
            session.flip_coin(),
            Err(DraftError::TurnLocked { .. })
        ));
        assert!(matches!(
            session.proceed_to_next_turn(),
            Err(DraftError::TurnLocked { .. })
        ));
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn update_settings_locked_once_drafting() {
        let mut session = ready_session(&["a", "b", "c", "d"], manual_settings(1, 2), TurnSide::Side1);
        session.update_settings(manual_settings(2, 2)).unwrap();
        assert_eq!(session.current_quota(), Some(2));

        session.start_drafting().unwrap();
        assert!(matches!(
            session.update_settings(manual_settings(1, 1)),
            Err(DraftError::TurnLocked { .. })
        ));
        assert_eq!(session.settings().first_turn_pick_count, 2);
    }

    #[test]
    fn start_with_only_captains_completes_immediately() {
        let mut session = ready_session(&["a", "b"], manual_settings(1, 2), TurnSide::Side1);
        session.start_drafting().unwrap();
        assert_eq!(session.phase(), SessionPhase::Completed);
        let result = session.result().unwrap();
        assert_eq!(result.team_a.len(), 1);
        assert_eq!(result.team_b.len(), 1);
    }

    // -----------------------------------------------------------------------
    // Tests: picking and quotas
    // -----------------------------------------------------------------------

    #[test]
    fn first_turn_takes_one_then_two() {
        let names = ["a", "b", "c", "d", "e", "f", "g", "h"];
        let mut session = drafting_session(&names, manual_settings(1, 2), TurnSide::Side1);

        assert_eq!(session.current_quota(), Some(1));
        session.pick_player(&pid("c")).unwrap();
        assert!(session.turn().unwrap().is_awaiting_advance);
        assert!(matches!(
            session.pick_player(&pid("d")),
            Err(DraftError::TurnLocked { .. })
        ));

        session.proceed_to_next_turn().unwrap();
        assert_eq!(session.turn().unwrap().side, TurnSide::Side2);
        assert_eq!(session.current_quota(), Some(2));
        session.pick_player(&pid("d")).unwrap();
        assert!(!session.turn().unwrap().is_awaiting_advance);
        session.pick_player(&pid("e")).unwrap();
        assert!(session.turn().unwrap().is_awaiting_advance);

        session.proceed_to_next_turn().unwrap();
        assert_eq!(session.turn().unwrap().side, TurnSide::Side1);
        assert_eq!(session.current_quota(), Some(2));
        assert_conserved(&session);
    }

    #[test]
    fn picking_unknown_participant_changes_nothing() {
        let mut session = drafting_session(&["a", "b", "c", "d"], manual_settings(1, 2), TurnSide::Side1);
        let before = session.snapshot();

        assert_eq!(
            session.pick_player(&pid("zed")),
            Err(DraftError::UnknownParticipant(pid("zed")))
        );
        // Captains are not in the pool.
        assert_eq!(
            session.pick_player(&pid("b")),
            Err(DraftError::UnknownParticipant(pid("b")))
        );
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn opening_turn_owing_whole_pool_sweeps_it() {
        // Pool of 3 with 3 owed: nothing is left to alternate over.
        let mut session = ready_session(&["a", "b", "c", "d", "e"], manual_settings(3, 2), TurnSide::Side1);
        session.take_events();

        session.start_drafting().unwrap();

        assert_eq!(session.phase(), SessionPhase::Completed);
        assert!(session.pool().is_empty());
        assert_eq!(team_ids(&session, TurnSide::Side1).len(), 4);
        assert_eq!(team_ids(&session, TurnSide::Side2), vec!["b"]);
        let events = session.take_events();
        let automatic = events
            .iter()
            .filter(|e| matches!(e, DraftEvent::PlayerPicked { automatic: true, .. }))
            .count();
        assert_eq!(automatic, 3);
        assert!(!events
            .iter()
            .any(|e| matches!(e, DraftEvent::TurnCompleted { .. })));
        assert!(events
            .iter()
            .any(|e| matches!(e, DraftEvent::DraftCompleted(_))));
        assert!(!session.turn().unwrap().is_awaiting_advance);
        assert!(!session.needs_clock());
    }

    #[test]
    fn last_player_is_swept_when_next_turn_starts() {
        let mut session = drafting_session(&["a", "b", "c", "d"], manual_settings(1, 1), TurnSide::Side2);
        session.pick_player(&pid("c")).unwrap();
        assert_eq!(session.phase(), SessionPhase::Drafting);

        session.proceed_to_next_turn().unwrap();

        assert_eq!(session.phase(), SessionPhase::Completed);
        assert_eq!(team_ids(&session, TurnSide::Side2), vec!["b", "c"]);
        assert_eq!(team_ids(&session, TurnSide::Side1), vec!["a", "d"]);
        assert_eq!(session.turn().unwrap().picks_made_this_turn, 1);
    }

    #[test]
    fn turn_owing_more_than_pool_sweeps_past_quota() {
        let names = ["a", "b", "c", "d", "e", "f"];
        let mut session = drafting_session(&names, manual_settings(1, 2), TurnSide::Side1);
        session.pick_player(&pid("c")).unwrap();
        session.proceed_to_next_turn().unwrap();
        session.pick_player(&pid("d")).unwrap();
        session.pick_player(&pid("e")).unwrap();
        session.proceed_to_next_turn().unwrap();

        // Only f remains for a side owing two.
        assert_eq!(session.phase(), SessionPhase::Completed);
        assert_eq!(team_ids(&session, TurnSide::Side1), vec!["a", "c", "f"]);
        assert_eq!(team_ids(&session, TurnSide::Side2), vec!["b", "d", "e"]);
        assert_conserved(&session);
    }

    // -----------------------------------------------------------------------
    // Tests: removing picks
    // -----------------------------------------------------------------------

    #[test]
    fn remove_returns_same_turn_pick() {
        let names = ["a", "b", "c", "d", "e", "f"];
        let mut session = drafting_session(&names, manual_settings(2, 2), TurnSide::Side1);
        session.pick_player(&pid("c")).unwrap();
        assert_eq!(session.turn().unwrap().picks_made_this_turn, 1);

        session.remove_player(&pid("c")).unwrap();
        assert_eq!(session.turn().unwrap().picks_made_this_turn, 0);
        assert_eq!(team_ids(&session, TurnSide::Side1), vec!["a"]);
        assert_eq!(pool_ids(&session), vec!["c", "d", "e", "f"]);
        assert_conserved(&session);
    }

    #[test]
    fn remove_rejects_captain_and_earlier_picks() {
        let names = ["a", "b", "c", "d", "e", "f", "g", "h", "i"];
        let mut session = drafting_session(&names, manual_settings(1, 2), TurnSide::Side1);
        session.pick_player(&pid("c")).unwrap();
        session.proceed_to_next_turn().unwrap();
        session.pick_player(&pid("d")).unwrap();
        session.pick_player(&pid("e")).unwrap();
        session.proceed_to_next_turn().unwrap();
        session.pick_player(&pid("f")).unwrap();

        assert_eq!(
            session.remove_player(&pid("a")),
            Err(DraftError::UnknownParticipant(pid("a")))
        );
        assert_eq!(
            session.remove_player(&pid("c")),
            Err(DraftError::UnknownParticipant(pid("c")))
        );
        assert_eq!(
            session.remove_player(&pid("d")),
            Err(DraftError::UnknownParticipant(pid("d")))
        );
        session.remove_player(&pid("f")).unwrap();
        assert_eq!(team_ids(&session, TurnSide::Side1), vec!["a", "c"]);
    }

    #[test]
    fn remove_locked_while_awaiting_advance() {
        let mut session = drafting_session(&["a", "b", "c", "d", "e"], manual_settings(1, 2), TurnSide::Side1);
        session.pick_player(&pid("c")).unwrap();
        assert!(matches!(
            session.remove_player(&pid("c")),
            Err(DraftError::TurnLocked { .. })
        ));
    }

    // -----------------------------------------------------------------------
    // Tests: manual completion, timer expiry, and the single-fire guard
    // -----------------------------------------------------------------------

    #[test]
    fn complete_turn_requires_quota() {
        let mut session = drafting_session(&["a", "b", "c", "d", "e", "f"], manual_settings(2, 2), TurnSide::Side1);
        session.pick_player(&pid("c")).unwrap();
        assert_eq!(
            session.complete_turn_manually(),
            Err(DraftError::QuotaNotMet {
                picks_made: 1,
                quota: 2
            })
        );
    }

    #[test]
    fn manual_completion_then_expiry_fires_once() {
        let settings = PickSettings {
            timer_enabled: true,
            timer_duration_secs: 5,
            ..manual_settings(1, 2)
        };
        let mut session = drafting_session(&["a", "b", "c", "d", "e", "f"], settings, TurnSide::Side1);
        session.pick_player(&pid("c")).unwrap();
        session.take_events();

        session.complete_turn_manually().unwrap();
        session.handle_timer_expiry().unwrap();
        for _ in 0..10 {
            session.tick();
        }

        let events = session.take_events();
        assert!(events.is_empty(), "unexpected events: {events:?}");
        assert_eq!(pool_ids(&session), vec!["d", "e", "f"]);
        assert_eq!(team_ids(&session, TurnSide::Side1), vec!["a", "c"]);
        assert!(session.turn().unwrap().is_awaiting_advance);
    }

    #[test]
    fn expiry_fills_outstanding_picks() {
        let names = ["a", "b", "c", "d", "e", "f", "g"];
        let mut session = drafting_session(&names, manual_settings(2, 2), TurnSide::Side2);

        session.handle_timer_expiry().unwrap();

        assert_eq!(session.pool().len(), 3);
        assert_eq!(session.team(TurnSide::Side2).unwrap().len(), 3);
        assert_eq!(session.turn().unwrap().picks_made_this_turn, 2);
        assert!(session.turn().unwrap().is_awaiting_advance);
        assert_conserved(&session);
    }

    #[test]
    fn expiry_after_partial_pick_fills_remainder() {
        let names = ["a", "b", "c", "d", "e", "f", "g"];
        let mut session = drafting_session(&names, manual_settings(2, 2), TurnSide::Side1);
        session.pick_player(&pid("c")).unwrap();

        session.handle_timer_expiry().unwrap();

        let team = team_ids(&session, TurnSide::Side1);
        assert_eq!(team.len(), 3);
        assert_eq!(&team[..2], &["a", "c"]);
        assert_eq!(session.pool().len(), 3);
    }

    #[test]
    fn second_expiry_is_noop() {
        let names = ["a", "b", "c", "d", "e", "f", "g", "h"];
        let mut session = drafting_session(&names, manual_settings(1, 2), TurnSide::Side1);
        session.handle_timer_expiry().unwrap();
        let after_first = session.snapshot();

        session.handle_timer_expiry().unwrap();
        assert_eq!(session.snapshot(), after_first);
    }

    #[test]
    fn expiry_outside_drafting_is_locked() {
        let mut session = ready_session(&["a", "b", "c"], manual_settings(1, 2), TurnSide::Side1);
        assert!(matches!(
            session.handle_timer_expiry(),
            Err(DraftError::TurnLocked { .. })
        ));
    }

    #[test]
    fn ticking_timer_auto_picks_on_expiry() {
        let settings = PickSettings {
            timer_enabled: true,
            timer_duration_secs: 3,
            ..manual_settings(1, 2)
        };
        let mut session = drafting_session(&["a", "b", "c", "d", "e"], settings, TurnSide::Side1);
        assert!(session.needs_clock());

        session.tick();
        session.tick();
        assert_eq!(session.snapshot().turn.unwrap().remaining_timer_secs, 1);
        assert_eq!(session.pool().len(), 3);

        session.tick();
        assert_eq!(session.pool().len(), 2);
        assert!(session.turn().unwrap().is_awaiting_advance);
        assert!(!session.needs_clock());
        let events = session.take_events();
        assert!(events.iter().any(|e| matches!(
            e,
            DraftEvent::TimerExpired {
                side: TurnSide::Side1,
                auto_picked: 1
            }
        )));
    }

    #[test]
    fn short_pool_completes_before_timer_runs() {
        let settings = PickSettings {
            timer_enabled: true,
            timer_duration_secs: 5,
            ..manual_settings(1, 4)
        };
        let names = ["a", "b", "c", "d", "e"];
        let mut session = drafting_session(&names, settings, TurnSide::Side1);
        session.pick_player(&pid("c")).unwrap();
        session.proceed_to_next_turn().unwrap();

        // Side 2 owes 4 but only 2 remain: no countdown is left pending.
        assert_eq!(session.phase(), SessionPhase::Completed);
        assert_eq!(session.team(TurnSide::Side2).unwrap().len(), 3);
        assert!(!session.needs_clock());
        assert!(matches!(
            session.handle_timer_expiry(),
            Err(DraftError::TurnLocked { .. })
        ));
        assert_conserved(&session);
    }

    // -----------------------------------------------------------------------
    // Tests: turn advancement
    // -----------------------------------------------------------------------

    #[test]
    fn proceed_requires_awaiting_advance() {
        let mut session = drafting_session(&["a", "b", "c", "d"], manual_settings(1, 2), TurnSide::Side1);
        assert!(matches!(
            session.proceed_to_next_turn(),
            Err(DraftError::TurnLocked {
                command: "proceed_to_next_turn",
                awaiting_advance: false,
                ..
            })
        ));
    }

    #[test]
    fn proceed_resets_turn_and_timer() {
        let settings = PickSettings {
            timer_enabled: true,
            timer_duration_secs: 10,
            ..manual_settings(1, 2)
        };
        let mut session = drafting_session(&["a", "b", "c", "d", "e", "f"], settings, TurnSide::Side1);
        session.tick();
        session.tick();
        session.pick_player(&pid("c")).unwrap();
        let epoch = session.clock_epoch();

        session.proceed_to_next_turn().unwrap();
        let turn = session.snapshot().turn.unwrap();
        assert_eq!(turn.side, TurnSide::Side2);
        assert_eq!(turn.turn_number, 2);
        assert_eq!(turn.picks_made_this_turn, 0);
        assert!(!turn.is_awaiting_advance);
        assert_eq!(turn.remaining_timer_secs, 10);
        assert!(session.clock_epoch() > epoch);
    }

    #[test]
    fn zero_delay_advances_immediately() {
        let settings = PickSettings {
            auto_advance_enabled: true,
            auto_advance_delay_secs: 0,
            ..manual_settings(1, 2)
        };
        let mut session = drafting_session(&["a", "b", "c", "d", "e", "f"], settings, TurnSide::Side1);
        session.pick_player(&pid("c")).unwrap();

        assert_eq!(session.phase(), SessionPhase::Drafting);
        let turn = session.turn().unwrap();
        assert_eq!(turn.side, TurnSide::Side2);
        assert!(!turn.is_awaiting_advance);
    }

    #[test]
    fn countdown_advances_after_delay() {
        let settings = PickSettings {
            auto_advance_enabled: true,
            auto_advance_delay_secs: 2,
            ..manual_settings(1, 2)
        };
        let mut session = drafting_session(&["a", "b", "c", "d", "e", "f"], settings, TurnSide::Side1);
        session.pick_player(&pid("c")).unwrap();
        assert_eq!(session.snapshot().turn.unwrap().advance_countdown_secs, 2);
        assert!(session.needs_clock());

        session.tick();
        assert_eq!(session.turn().unwrap().side, TurnSide::Side1);
        session.tick();
        assert_eq!(session.turn().unwrap().side, TurnSide::Side2);
        assert_eq!(session.snapshot().turn.unwrap().advance_countdown_secs, 0);
    }

    #[test]
    fn operator_can_advance_during_countdown() {
        let settings = PickSettings {
            auto_advance_enabled: true,
            auto_advance_delay_secs: 5,
            ..manual_settings(1, 2)
        };
        let mut session = drafting_session(&["a", "b", "c", "d", "e", "f"], settings, TurnSide::Side1);
        session.pick_player(&pid("c")).unwrap();
        session.proceed_to_next_turn().unwrap();
        assert_eq!(session.turn().unwrap().side, TurnSide::Side2);

        // The stale countdown must not advance the new turn.
        for _ in 0..6 {
            session.tick();
        }
        assert_eq!(session.turn().unwrap().side, TurnSide::Side2);
    }

    // -----------------------------------------------------------------------
    // Tests: go back and reset
    // -----------------------------------------------------------------------

    #[test]
    fn go_back_restores_captain_only_teams() {
        let names = ["a", "b", "c", "d", "e", "f", "g"];
        let mut session = drafting_session(&names, manual_settings(1, 2), TurnSide::Side1);
        session.pick_player(&pid("c")).unwrap();
        session.proceed_to_next_turn().unwrap();
        session.pick_player(&pid("d")).unwrap();

        session.reset_to_ready().unwrap();

        assert_eq!(session.phase(), SessionPhase::Ready);
        assert_eq!(team_ids(&session, TurnSide::Side1), vec!["a"]);
        assert_eq!(team_ids(&session, TurnSide::Side2), vec!["b"]);
        assert_eq!(pool_ids(&session), vec!["c", "d", "e", "f", "g"]);
        let turn = session.turn().unwrap();
        assert_eq!(turn.side, TurnSide::Side1);
        assert_eq!(turn.picks_made_this_turn, 0);
        assert!(!session.needs_clock());

        // Drafting can start over with the opening quota.
        session.start_drafting().unwrap();
        assert_eq!(session.current_quota(), Some(1));
    }

    #[test]
    fn go_back_after_completion_clears_result() {
        let mut session = drafting_session(&["a", "b", "c"], manual_settings(1, 2), TurnSide::Side2);
        assert_eq!(team_ids(&session, TurnSide::Side2), vec!["b", "c"]);
        assert!(session.result().is_ok());

        session.reset_to_ready().unwrap();
        assert_eq!(session.result(), Err(DraftError::DraftNotComplete));
        assert_eq!(pool_ids(&session), vec!["c"]);
    }

    #[test]
    fn go_back_before_drafting_is_locked() {
        let mut session = ready_session(&["a", "b", "c"], manual_settings(1, 2), TurnSide::Side1);
        assert!(matches!(
            session.reset_to_ready(),
            Err(DraftError::TurnLocked { .. })
        ));
    }

    #[test]
    fn reset_discards_everything() {
        let mut session = drafting_session(&["a", "b", "c", "d"], manual_settings(1, 2), TurnSide::Side1);
        session.pick_player(&pid("c")).unwrap();

        session.reset();

        assert_eq!(session.phase(), SessionPhase::Setup);
        let snap = session.snapshot();
        assert!(snap.participants.is_empty());
        assert!(snap.pool.is_empty());
        assert!(snap.captains.is_none());
        assert!(snap.team_a.is_empty());
        assert!(snap.turn.is_none());
        assert!(snap.first_pick_side.is_none());
        assert_eq!(session.settings(), &manual_settings(1, 2));
    }

    #[test]
    fn result_unavailable_until_complete() {
        let session = drafting_session(&["a", "b", "c", "d"], manual_settings(1, 2), TurnSide::Side1);
        assert_eq!(session.result(), Err(DraftError::DraftNotComplete));
    }

    #[test]
    fn events_record_phase_changes() {
        let mut session = DraftSession::new(manual_settings(1, 2)).unwrap();
        session.set_participants(roster(&["a", "b"])).unwrap();
        let events = session.take_events();
        assert_eq!(
            events,
            vec![DraftEvent::PhaseChanged {
                from: SessionPhase::Setup,
                to: SessionPhase::SelectingParticipants
            }]
        );
        assert!(session.take_events().is_empty());
    }
}
