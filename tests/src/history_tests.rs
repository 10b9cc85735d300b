use luckywheel_abi::{HISTORY_CAPACITY, Label};

use crate::fixture::WheelFixture;

#[test]
fn history_is_newest_first() {
    let mut fx = WheelFixture::with_balance(1_000);
    fx.play(Label::One, Label::One).unwrap();
    fx.play(Label::One, Label::Three).unwrap();
    fx.play(Label::One, Label::Twenty).unwrap();

    let outcomes: std::vec::Vec<Label> = fx
        .engine
        .history()
        .iter()
        .map(|record| record.result.outcome)
        .collect();
    assert_eq!(outcomes, [Label::Twenty, Label::Three, Label::One]);

    let stamps: std::vec::Vec<u64> = fx
        .engine
        .history()
        .iter()
        .map(|record| record.timestamp_ms)
        .collect();
    assert!(stamps.windows(2).all(|pair| pair[0] > pair[1]));
}

#[test]
fn history_caps_at_fifty_and_drops_oldest() {
    let mut fx = WheelFixture::with_balance(100_000);
    let rounds = HISTORY_CAPACITY + 5;
    for round in 0..rounds {
        fx.play(Label::One, Label::ALL[round % Label::ALL.len()]).unwrap();
    }

    let history = fx.engine.history();
    assert_eq!(history.len(), HISTORY_CAPACITY);
    for age in 0..HISTORY_CAPACITY {
        let round = rounds - 1 - age;
        let record = history.get(age).unwrap();
        assert_eq!(record.result.outcome, Label::ALL[round % Label::ALL.len()]);
    }
    assert!(history.get(HISTORY_CAPACITY).is_none());
}

#[test]
fn clear_history_keeps_balance_and_streak() {
    let mut fx = WheelFixture::with_balance(500);
    fx.win_rounds(3);
    let balance = fx.engine.balance();

    fx.engine.clear_history();
    assert!(fx.engine.history().is_empty());
    assert_eq!(fx.engine.balance(), balance);
    assert_eq!(fx.engine.win_streak(), 3);

    fx.play(Label::Five, Label::Five).unwrap();
    assert_eq!(fx.engine.history().len(), 1);
}
