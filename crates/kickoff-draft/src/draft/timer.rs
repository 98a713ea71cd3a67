// Per-turn countdown with a single-fire expiry guard.

use serde::{Deserialize, Serialize};

/// Lifecycle of one turn's countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerState {
    Idle,
    Running,
    Expired,
    Cancelled,
}

/// A whole-second countdown driven by external ticks.
///
/// Expiry is reported as a return value from [`TurnTimer::tick`] rather than
/// through a stored callback; the owner dispatches it. Whoever reacts to an
/// expiry must first win [`TurnTimer::claim_expiry`], which succeeds at most
/// once per [`TurnTimer::start`] and never after [`TurnTimer::cancel`]. That
/// makes "operator completed the turn" and "timer ran out" mutually
/// exclusive no matter which arrives first.
#[derive(Debug, Clone)]
pub struct TurnTimer {
    state: TimerState,
    remaining_secs: u32,
    expiry_claimed: bool,
}

impl TurnTimer {
    pub fn new() -> Self {
        TurnTimer {
            state: TimerState::Idle,
            remaining_secs: 0,
            expiry_claimed: false,
        }
    }

    /// Arm the countdown for a fresh turn.
    pub fn start(&mut self, duration_secs: u32) {
        self.state = TimerState::Running;
        self.remaining_secs = duration_secs;
        self.expiry_claimed = false;
    }

    /// Stop the countdown and suppress any expiry that has not been claimed.
    pub fn cancel(&mut self) {
        if self.state != TimerState::Idle {
            self.state = TimerState::Cancelled;
        }
        self.expiry_claimed = true;
    }

    /// Return to `Idle` for a turn that runs without a countdown. The expiry
    /// guard is re-opened so a manually triggered timeout is still honoured
    /// once.
    pub fn reset(&mut self) {
        self.state = TimerState::Idle;
        self.remaining_secs = 0;
        self.expiry_claimed = false;
    }

    /// Advance one second. Returns `true` only on the tick that reaches zero;
    /// ticks outside `Running` are ignored.
    pub fn tick(&mut self) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.state = TimerState::Expired;
            return true;
        }
        false
    }

    /// Take the right to act on this turn's expiry. Succeeds at most once
    /// per start and never after a cancel.
    pub fn claim_expiry(&mut self) -> bool {
        if self.expiry_claimed || self.state == TimerState::Cancelled {
            return false;
        }
        self.expiry_claimed = true;
        true
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }
}

impl Default for TurnTimer {
    fn default() -> Self {
        Self::new()
    }
}
