// Hand-over between turns: immediate, after a countdown, or on command.

use super::settings::PickSettings;

/// What should happen once a turn starts awaiting advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceDecision {
    /// Advance right away.
    Immediate,
    /// Advance when the countdown reaches zero.
    Countdown(u32),
    /// Wait for the operator.
    Manual,
}

/// Drives the advance countdown between turns.
#[derive(Debug, Clone, Default)]
pub struct TurnTransitionController {
    countdown: Option<u32>,
}

impl TurnTransitionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called when a turn enters awaiting-advance.
    pub fn begin(&mut self, settings: &PickSettings) -> AdvanceDecision {
        self.countdown = None;
        if !settings.auto_advance_enabled {
            return AdvanceDecision::Manual;
        }
        if settings.auto_advance_delay_secs == 0 {
            return AdvanceDecision::Immediate;
        }
        self.countdown = Some(settings.auto_advance_delay_secs);
        AdvanceDecision::Countdown(settings.auto_advance_delay_secs)
    }

    /// Advance one second. Returns `true` when the countdown reaches zero;
    /// the countdown is then cleared so it fires only once.
    pub fn tick(&mut self) -> bool {
        match self.countdown {
            Some(secs) if secs <= 1 => {
                self.countdown = None;
                true
            }
            Some(secs) => {
                self.countdown = Some(secs - 1);
                false
            }
            None => false,
        }
    }

    pub fn cancel(&mut self) {
        self.countdown = None;
    }

    pub fn is_counting_down(&self) -> bool {
        self.countdown.is_some()
    }

    /// Seconds until automatic advance, zero when no countdown runs.
    pub fn remaining_secs(&self) -> u32 {
        self.countdown.unwrap_or(0)
    }
}
