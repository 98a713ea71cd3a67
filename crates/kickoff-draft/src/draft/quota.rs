// How many picks the active side owes on the current turn.

use super::participant::TurnSide;
use super::settings::PickSettings;

/// Roster sizes (captain included) captured when a turn began, indexed by
/// [`TurnSide::index`].
pub type TeamSizes = [usize; 2];

/// Whether this is the very first turn of the draft.
///
/// Identified structurally rather than by a counter: the side that won the
/// coin flip is active, its roster holds at most its captain plus one pick,
/// and the other roster holds only its captain.
pub fn is_first_turn(side: TurnSide, first_pick_side: TurnSide, sizes_at_start: TeamSizes) -> bool {
    side == first_pick_side
        && sizes_at_start[side.index()] <= 2
        && sizes_at_start[side.other().index()] == 1
}

/// Picks owed by `side` on a turn that began with `sizes_at_start`.
pub fn quota_for(
    side: TurnSide,
    first_pick_side: TurnSide,
    sizes_at_start: TeamSizes,
    settings: &PickSettings,
) -> usize {
    if is_first_turn(side, first_pick_side, sizes_at_start) {
        settings.first_turn_pick_count
    } else {
        settings.regular_turn_pick_count
    }
}
