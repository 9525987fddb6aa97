use crate::domain::state::{Player, ResultMeta};

/// Flat bonus for hitting the bid exactly.
pub const EXACT_BONUS: i32 = 20;
/// Earned per trick on an exact bid, lost per trick of deviation otherwise.
pub const POINTS_PER_TRICK: i32 = 10;

/// Points for a single round. No floor: misses can push a total below zero.
pub fn round_points(prediction: u32, tricks: u32) -> i32 {
    if prediction == tricks {
        EXACT_BONUS + POINTS_PER_TRICK * tricks as i32
    } else {
        -(POINTS_PER_TRICK * prediction.abs_diff(tricks) as i32)
    }
}

/// Tricks that count for the cloud holder in the anniversary edition.
///
/// Off by exactly one → the bid counts as met.
/// Anything else → scored as one trick over the bid.
pub fn cloud_adjusted_tricks(prediction: u32, raw_tricks: u32) -> u32 {
    if prediction.abs_diff(raw_tricks) == 1 {
        prediction
    } else {
        prediction + 1
    }
}

/// Record `tricks` for `player` in `round_idx` and return the round's delta.
///
/// A missing bid scores as a bid of 0; a missing previous total counts as 0.
pub fn record_result(
    player: &mut Player,
    round_idx: usize,
    tricks: u32,
    meta: Option<ResultMeta>,
) -> i32 {
    let prediction = player.predictions.value_at(round_idx).unwrap_or(0);
    let last_cumulative = match round_idx {
        0 => 0,
        r => player.points_through(r - 1),
    };
    let delta = round_points(prediction, tricks);

    player.results.set(round_idx, tricks);
    player
        .wolke_used
        .set(round_idx, meta.is_some_and(|m| m.wolke_used));
    player.received_results.set(
        round_idx,
        meta.map_or(tricks, |m| m.received_tricks),
    );
    player.points.set(round_idx, last_cumulative + delta);
    delta
}
