use core::sync::atomic::{AtomicU64, Ordering};

use luckywheel_abi::{GameResult, Label, RoundResult};
use luckywheel_core::{FixedSpinPlanner, RoundEngine, WheelConfig};

/// Full turns every scripted spin makes before landing.
pub const FIXTURE_FULL_SPINS: u32 = 6;
pub const FIXTURE_SPIN_MS: u32 = 250;

static FIXTURE_TICKS: AtomicU64 = AtomicU64::new(1);

/// Monotonic fake clock; each read advances by one millisecond.
pub fn fixture_clock() -> u64 {
    FIXTURE_TICKS.fetch_add(1, Ordering::Relaxed)
}

pub struct WheelFixture {
    pub engine: RoundEngine,
}

impl WheelFixture {
    /// Engine with the default config, a fixed seed and the fixture clock.
    pub fn new() -> Self {
        Self::with_config(WheelConfig {
            rng_seed: Some(0x5EED),
            ..WheelConfig::default()
        })
    }

    pub fn with_balance(balance: u64) -> Self {
        Self::with_config(WheelConfig {
            starting_balance: balance,
            rng_seed: Some(0x5EED),
            ..WheelConfig::default()
        })
    }

    pub fn with_config(config: WheelConfig) -> Self {
        Self {
            engine: RoundEngine::new(config).with_clock(fixture_clock),
        }
    }

    /// Place `units` bets on `label`.
    pub fn bet(&mut self, label: Label, units: u32) -> GameResult {
        for _ in 0..units {
            self.engine.place_bet(label)?;
        }
        Ok(())
    }

    /// Spin and report a landing on the first sector carrying `label`.
    pub fn spin_to(&mut self, label: Label) -> GameResult<RoundResult> {
        let mut planner = FixedSpinPlanner::landing_on(
            self.engine.sectors(),
            label,
            FIXTURE_FULL_SPINS,
            FIXTURE_SPIN_MS,
        )
        .unwrap_or_else(|| panic!("no sector carries {}", label));
        let plan = self.engine.spin_with(&mut planner)?;
        self.engine.on_spin_complete(plan.final_angle)
    }

    /// One full round: bet once on `bet`, land on `landing`.
    pub fn play(&mut self, bet: Label, landing: Label) -> GameResult<RoundResult> {
        self.bet(bet, 1)?;
        self.spin_to(landing)
    }

    /// Win `rounds` rounds in a row with a single unit on "1".
    pub fn win_rounds(&mut self, rounds: u32) {
        for _ in 0..rounds {
            let result = self.play(Label::One, Label::One);
            assert!(matches!(result, Ok(RoundResult { is_win: true, .. })));
        }
    }

    /// Lose `rounds` rounds in a row with a single unit on "20".
    pub fn lose_rounds(&mut self, rounds: u32) {
        for _ in 0..rounds {
            let result = self.play(Label::Twenty, Label::One);
            assert!(matches!(result, Ok(RoundResult { is_win: false, .. })));
        }
    }
}

impl Default for WheelFixture {
    fn default() -> Self {
        Self::new()
    }
}
