use std::ops::RangeInclusive;

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 6;

/// Lower bound for a user-chosen round count.
pub const MIN_ROUNDS: u32 = 5;
/// Upper bound used when the player count has no default round count.
const FALLBACK_MAX_ROUNDS: u32 = 10;

// The 60-card deck is dealt out completely in the last round:
// 3 players → 20 rounds, 4 → 15, 5 → 12, 6 and more → 10.
pub fn rounds_for_count(player_count: usize) -> u32 {
    match player_count {
        3 => 20,
        4 => 15,
        5 => 12,
        n if n >= 6 => 10,
        _ => 0,
    }
}

/// Allowed band for overriding the default round count at setup time.
pub fn round_bounds(player_count: usize) -> RangeInclusive<u32> {
    match rounds_for_count(player_count) {
        0 => MIN_ROUNDS..=FALLBACK_MAX_ROUNDS,
        default => MIN_ROUNDS..=default * 2,
    }
}

/// Seat that opens round `round_no` (1-based).
///
/// Round 1 → seat 0
/// Round 2 → seat 1 (mod player_count)
///
/// Only the presentation order rotates; the seating itself never changes.
#[inline]
pub fn start_player_index(round_no: u32, player_count: usize) -> usize {
    debug_assert!(round_no >= 1, "round_no is 1-based and must be >= 1");
    if player_count == 0 {
        return 0;
    }
    round_no.saturating_sub(1) as usize % player_count
}

/// Every player holds `round_no` cards in round `round_no`, which bounds both
/// bids and tricks taken.
pub fn valid_trick_range(round_no: u32) -> RangeInclusive<u32> {
    0..=round_no
}
