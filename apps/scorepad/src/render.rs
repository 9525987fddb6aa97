//! Plain-text views of a game for the terminal.

use std::fmt::Write;

use crate::domain::scoreboard::{completed_rounds, standings, winner_names};
use crate::domain::state::{GameState, Overlay};
use crate::services::round_entry::{RoundOrder, RoundOutcome};

/// Full scoreboard: per-round cumulative points, the open round's bids and
/// the current standings.
pub fn scoreboard(state: &GameState) -> String {
    let mut out = String::new();
    if !state.game_started {
        out.push_str("No game in progress. Start one with `scorepad new <names>...`.\n");
        return out;
    }

    let width = state
        .players
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(6);

    if state.is_game_over() {
        let _ = writeln!(out, "Game over after {} rounds", state.total_rounds);
    } else {
        let _ = writeln!(
            out,
            "Round {} of {} ({})",
            state.current_round,
            state.total_rounds,
            phase_label(state.overlay)
        );
    }
    if state.use_anniversary_rules {
        out.push_str("Anniversary rules: cloud enabled\n");
    }

    let played = completed_rounds(state);
    let _ = write!(out, "{:<width$}", "");
    for r in 1..=played {
        let _ = write!(out, " {r:>5}");
    }
    out.push('\n');
    for p in &state.players {
        let _ = write!(out, "{:<width$}", p.name);
        for r in 0..played {
            let cloud = if p.wolke_used.value_at(r).unwrap_or(false) {
                "*"
            } else {
                " "
            };
            let _ = write!(out, " {:>4}{cloud}", p.points_through(r));
        }
        out.push('\n');
    }

    if !state.is_game_over() {
        let _ = writeln!(out, "\nOrder this round: {}", order_names(state).join(", "));
        if state.overlay == Overlay::Result {
            let round_idx = state.round_index();
            let bids: Vec<String> = RoundOrder::for_state(state)
                .seats()
                .map(|seat| {
                    let p = &state.players[seat];
                    match p.predictions.value_at(round_idx) {
                        Some(bid) => format!("{} {bid}", p.name),
                        None => format!("{} -", p.name),
                    }
                })
                .collect();
            let _ = writeln!(out, "Bids: {}", bids.join(", "));
        }
    }

    out.push_str("\nStandings:\n");
    for (rank, row) in standings(state).iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {:<width$} {:>5}", rank + 1, row.name, row.total);
    }
    if state.is_game_over() {
        let _ = writeln!(out, "\nWinner: {}", winner_names(state).join(" & "));
    }
    out
}

/// Names in the order input is expected for the current round.
pub fn order_names(state: &GameState) -> Vec<&str> {
    RoundOrder::for_state(state)
        .seats()
        .map(|seat| state.players[seat].name.as_str())
        .collect()
}

/// One-line summary of a closed round.
pub fn round_summary(state: &GameState, outcome: &RoundOutcome) -> String {
    let deltas: Vec<String> = state
        .players
        .iter()
        .zip(&outcome.deltas)
        .map(|(p, d)| format!("{} {d:+}", p.name))
        .collect();
    format!("Round {}: {}", outcome.round_no, deltas.join(", "))
}

fn phase_label(overlay: Overlay) -> &'static str {
    match overlay {
        Overlay::Prediction | Overlay::None => "waiting for bids",
        Overlay::Result => "waiting for tricks",
    }
}
