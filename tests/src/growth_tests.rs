use luckywheel_abi::{Direction, GrowthReason, Label};
use luckywheel_core::{WheelConfig, level_for};

use crate::fixture::WheelFixture;

#[test]
fn every_balance_move_is_logged() {
    let mut fx = WheelFixture::with_balance(100);
    fx.bet(Label::Twenty, 1).unwrap();
    fx.spin_to(Label::Twenty).unwrap();

    let entries: std::vec::Vec<_> = fx.engine.growth_log().iter().copied().collect();
    assert_eq!(entries.len(), 2);

    let bet = entries[0];
    assert_eq!(bet.reason, Some(GrowthReason::BetPlaced(Label::Twenty)));
    assert_eq!((bet.previous_balance, bet.balance), (100, 90));
    assert_eq!((bet.previous_level, bet.level), (2, 1));
    assert_eq!(bet.direction, Direction::Decrease);
    assert!(bet.level_changed());

    let win = entries[1];
    assert_eq!(win.reason, Some(GrowthReason::RoundWon(Label::Twenty)));
    assert_eq!((win.previous_balance, win.balance), (90, 300));
    assert_eq!((win.previous_level, win.level), (1, 4));
    assert_eq!(win.direction, Direction::Increase);
}

#[test]
fn losses_log_only_the_bets() {
    let mut fx = WheelFixture::with_balance(100);
    fx.lose_rounds(1);
    assert_eq!(fx.engine.growth_log().len(), 1);
}

#[test]
fn refund_is_logged() {
    let mut fx = WheelFixture::with_balance(100);
    fx.bet(Label::Three, 2).unwrap();
    fx.engine.reset_bets().unwrap();
    let latest = fx.engine.growth_log().latest().unwrap();
    assert_eq!(latest.reason, Some(GrowthReason::BetsRefunded));
    assert_eq!(latest.balance, 100);
}

#[test]
fn level_tops_out_at_ten() {
    assert_eq!(level_for(0), 1);
    assert_eq!(level_for(99), 1);
    assert_eq!(level_for(100), 2);
    assert_eq!(level_for(950), 10);
    assert_eq!(level_for(u64::MAX), 10);

    let mut fx = WheelFixture::with_balance(5_000);
    assert_eq!(fx.engine.level(), 10);
    fx.engine.set_balance(50).unwrap();
    assert_eq!(fx.engine.level(), 1);
    let latest = fx.engine.growth_log().latest().unwrap();
    assert_eq!(latest.reason, Some(GrowthReason::Adjusted));
    assert_eq!((latest.previous_level, latest.level), (10, 1));
}

#[test]
fn growth_log_evicts_oldest_past_capacity() {
    let mut fx = WheelFixture::with_config(WheelConfig {
        growth_log_capacity: 3,
        ..WheelConfig::default()
    });
    fx.bet(Label::One, 5).unwrap();

    let log = fx.engine.growth_log();
    assert_eq!(log.len(), 3);
    assert_eq!(log.evicted(), 2);
    let balances: std::vec::Vec<u64> = log.iter().map(|entry| entry.balance).collect();
    assert_eq!(balances, [70, 60, 50]);
}

#[test]
fn zero_capacity_keeps_everything() {
    let mut fx = WheelFixture::with_config(WheelConfig {
        starting_balance: 100_000,
        growth_log_capacity: 0,
        ..WheelConfig::default()
    });
    fx.bet(Label::One, 1_500).unwrap();
    assert_eq!(fx.engine.growth_log().len(), 1_500);
    assert_eq!(fx.engine.growth_log().evicted(), 0);
}
