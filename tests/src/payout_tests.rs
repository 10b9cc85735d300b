use luckywheel_abi::{BetMap, Label};
use luckywheel_core::payout::calculate;

use crate::fixture::WheelFixture;

/// Generates one engine test and one calculator test per streak tier: a single
/// unit on "5" after `$streak` straight wins must pay `$expected`.
macro_rules! streak_tier_case {
    ($($streak:literal => $expected:literal),* $(,)?) => {
        paste::paste! {
            $(
                #[test]
                fn [<streak_ $streak _pays_ $expected>]() {
                    let mut fx = WheelFixture::with_balance(10_000);
                    fx.win_rounds($streak);
                    assert_eq!(fx.engine.win_streak(), $streak);

                    let result = fx.play(Label::Five, Label::Five).unwrap();
                    assert_eq!(result.win_amount, $expected);
                    assert_eq!(fx.engine.win_streak(), $streak + 1);
                }

                #[test]
                fn [<calculator_streak_ $streak _pays_ $expected>]() {
                    let bets = BetMap::from_units(&[(Label::Five, 1)]);
                    let payout = calculate(&bets, Label::Five, $streak, 10);
                    assert!(payout.is_win);
                    assert_eq!(payout.win_amount, $expected);
                }
            )*
        }
    };
}

streak_tier_case! {
    0 => 60,
    2 => 60,
    3 => 70,
    5 => 70,
    6 => 110,
    8 => 110,
    9 => 210,
    12 => 210,
}

#[test]
fn loss_costs_whole_stake_regardless_of_streak() {
    let bets = BetMap::from_units(&[(Label::One, 2), (Label::Three, 1), (Label::Twenty, 4)]);
    for streak in [0, 3, 6, 9, 40] {
        let payout = calculate(&bets, Label::Ten, streak, 10);
        assert!(!payout.is_win);
        assert_eq!(payout.win_amount, -70);
    }
}

#[test]
fn win_sign_tracks_outcome_coverage() {
    let bets = BetMap::from_units(&[(Label::Three, 1), (Label::Ten, 2)]);
    for outcome in Label::ALL {
        let payout = calculate(&bets, outcome, 0, 10);
        assert_eq!(payout.is_win, bets.units(outcome) > 0);
        assert_eq!(payout.win_amount >= 0, payout.is_win);
    }
}

#[test]
fn only_the_outcome_label_pays() {
    let mut fx = WheelFixture::with_balance(100);
    fx.bet(Label::One, 1).unwrap();
    fx.bet(Label::Three, 2).unwrap();
    assert_eq!(fx.engine.balance(), 70);

    let result = fx.spin_to(Label::Three).unwrap();
    // 20 staked on "3": 20 back plus 20 * 3.
    assert_eq!(result.win_amount, 80);
    assert_eq!(fx.engine.balance(), 150);
}
