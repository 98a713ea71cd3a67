// Pick settings: timer, quotas, and turn advancement.

use serde::{Deserialize, Serialize};

use crate::error::DraftError;

/// How a draft is paced. Configured during setup and frozen once drafting
/// starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickSettings {
    /// Whether each turn runs against a countdown.
    pub timer_enabled: bool,
    /// Length of the per-turn countdown in seconds.
    pub timer_duration_secs: u32,
    /// Picks owed on the very first turn of the draft.
    pub first_turn_pick_count: usize,
    /// Picks owed on every other turn.
    pub regular_turn_pick_count: usize,
    /// Whether a completed turn hands over to the other side on its own.
    pub auto_advance_enabled: bool,
    /// Delay before an automatic hand-over. Zero hands over immediately.
    pub auto_advance_delay_secs: u32,
}

impl Default for PickSettings {
    fn default() -> Self {
        PickSettings {
            timer_enabled: true,
            timer_duration_secs: 60,
            first_turn_pick_count: 1,
            regular_turn_pick_count: 2,
            auto_advance_enabled: true,
            auto_advance_delay_secs: 3,
        }
    }
}

impl PickSettings {
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.timer_duration_secs == 0 {
            return Err(DraftError::InvalidSettings {
                field: "timer_duration_secs".into(),
                message: "must be greater than 0".into(),
            });
        }

        let counts: &[(&str, usize)] = &[
            ("first_turn_pick_count", self.first_turn_pick_count),
            ("regular_turn_pick_count", self.regular_turn_pick_count),
        ];
        for (name, val) in counts {
            if *val == 0 {
                return Err(DraftError::InvalidSettings {
                    field: name.to_string(),
                    message: "must be at least 1".into(),
                });
            }
        }

        Ok(())
    }
}
