//! Read-only views derived from a [`GameState`] for display.

use crate::domain::state::GameState;

/// One line of the standings table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing<'a> {
    pub seat: usize,
    pub name: &'a str,
    pub total: i32,
}

/// Seats holding the highest score after the final round.
///
/// The final round is `total_rounds - 1` (0-based); a player without a score
/// there counts as 0. Ties return every co-winner in seat order.
pub fn winners(state: &GameState) -> Vec<usize> {
    let final_idx = state.total_rounds.saturating_sub(1) as usize;
    let finals: Vec<i32> = state
        .players
        .iter()
        .map(|p| p.points_through(final_idx))
        .collect();

    let Some(best) = finals.iter().copied().max() else {
        return Vec::new();
    };
    finals
        .iter()
        .enumerate()
        .filter(|(_, &score)| score == best)
        .map(|(seat, _)| seat)
        .collect()
}

pub fn winner_names(state: &GameState) -> Vec<&str> {
    winners(state)
        .into_iter()
        .map(|seat| state.players[seat].name.as_str())
        .collect()
}

/// Players ordered by latest total, highest first; seat order breaks ties.
pub fn standings(state: &GameState) -> Vec<Standing<'_>> {
    let mut rows: Vec<Standing<'_>> = state
        .players
        .iter()
        .enumerate()
        .map(|(seat, p)| Standing {
            seat,
            name: p.name.as_str(),
            total: p.total(),
        })
        .collect();
    rows.sort_by(|a, b| b.total.cmp(&a.total).then(a.seat.cmp(&b.seat)));
    rows
}

/// Rounds for which every player has a score.
pub fn completed_rounds(state: &GameState) -> usize {
    if state.players.is_empty() {
        return 0;
    }
    (0..state.total_rounds as usize)
        .take_while(|&r| state.players.iter().all(|p| p.points.is_set(r)))
        .count()
}
