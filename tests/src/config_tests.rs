use luckywheel_abi::{GameError, Label};
use luckywheel_core::config_from_cmdline;

use crate::fixture::WheelFixture;

#[test]
fn cmdline_config_drives_engine() {
    let config = config_from_cmdline(Some("wheel.balance=40 wheel.stake=20 wheel.seed=9"));
    let mut fx = WheelFixture::with_config(config);
    fx.bet(Label::Three, 2).unwrap();
    assert_eq!(fx.engine.balance(), 0);
    assert_eq!(fx.engine.total_staked(), 40);
    assert_eq!(
        fx.engine.place_bet(Label::Three),
        Err(GameError::InsufficientBalance {
            balance: 0,
            required: 20
        })
    );

    let result = fx.spin_to(Label::Three).unwrap();
    assert_eq!(result.win_amount, 40 + 40 * 3);
    assert_eq!(fx.engine.balance(), 160);
}

#[test]
fn cmdline_spin_shape_reaches_planner() {
    let config = config_from_cmdline(Some(
        "wheel.spins=2 wheel.offset=0 wheel.duration=1500ms wheel.seed=1",
    ));
    let mut fx = WheelFixture::with_config(config);
    fx.bet(Label::One, 1).unwrap();
    let plan = fx.engine.spin().unwrap();
    assert_eq!(plan.duration_ms, 1500);
    assert_eq!(plan.travel(), 720.0);
}
