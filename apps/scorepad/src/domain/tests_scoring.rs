use crate::domain::scoring::{cloud_adjusted_tricks, record_result, round_points};
use crate::domain::state::{Player, ResultMeta};

#[test]
fn exact_bid_earns_bonus_plus_ten_per_trick() {
    assert_eq!(round_points(3, 3), 50);
    assert_eq!(round_points(0, 0), 20);
    assert_eq!(round_points(4, 4), 60);
}

#[test]
fn miss_costs_ten_per_trick_of_deviation() {
    assert_eq!(round_points(3, 5), -20);
    assert_eq!(round_points(5, 3), -20);
    assert_eq!(round_points(0, 1), -10);
}

#[test]
fn cloud_off_by_one_counts_as_exact() {
    assert_eq!(cloud_adjusted_tricks(4, 5), 4);
    assert_eq!(cloud_adjusted_tricks(4, 3), 4);
    assert_eq!(round_points(4, cloud_adjusted_tricks(4, 5)), 60);
}

#[test]
fn cloud_other_deviation_scores_one_over_bid() {
    assert_eq!(cloud_adjusted_tricks(4, 7), 5);
    assert_eq!(cloud_adjusted_tricks(4, 4), 5);
    assert_eq!(cloud_adjusted_tricks(4, 1), 5);
    assert_eq!(round_points(4, cloud_adjusted_tricks(4, 7)), -10);
}

#[test]
fn record_result_accumulates_points() {
    let mut p = Player::new("Ada");
    p.predictions.set(0, 3);
    assert_eq!(record_result(&mut p, 0, 3, None), 50);
    p.predictions.set(1, 3);
    assert_eq!(record_result(&mut p, 1, 5, None), -20);

    assert_eq!(p.points.value_at(0), Some(50));
    assert_eq!(p.points.value_at(1), Some(30));
    assert_eq!(p.round_delta(1), Some(-20));
}

#[test]
fn record_result_without_bid_scores_against_zero() {
    let mut p = Player::new("Ada");
    assert_eq!(record_result(&mut p, 0, 2, None), -20);
    assert_eq!(p.points.value_at(0), Some(-20));
}

#[test]
fn record_result_without_meta_stores_value_as_received() {
    let mut p = Player::new("Ada");
    p.predictions.set(0, 1);
    record_result(&mut p, 0, 1, None);
    assert_eq!(p.wolke_used.value_at(0), Some(false));
    assert_eq!(p.received_results.value_at(0), Some(1));
    assert_eq!(p.results.value_at(0), Some(1));
}

#[test]
fn record_result_keeps_raw_tricks_from_meta() {
    let mut p = Player::new("Ada");
    p.predictions.set(0, 4);
    let meta = ResultMeta {
        wolke_used: true,
        received_tricks: 5,
    };
    assert_eq!(record_result(&mut p, 0, 4, Some(meta)), 60);
    assert_eq!(p.results.value_at(0), Some(4));
    assert_eq!(p.received_results.value_at(0), Some(5));
    assert_eq!(p.wolke_used.value_at(0), Some(true));
}

#[test]
fn rescoring_a_round_replaces_it() {
    let mut p = Player::new("Ada");
    p.predictions.set(0, 2);
    record_result(&mut p, 0, 0, None);
    record_result(&mut p, 0, 2, None);
    assert_eq!(p.points.value_at(0), Some(40));
    assert_eq!(p.points.len(), 1);
}
