//! Payout calculation with win-streak bonuses.
//!
//! Pure: the result depends only on the bet map, the outcome, the streak the
//! player carried into the round and the unit stake.

use luckywheel_abi::{BetMap, Label};

/// Streak that earns +1 on the base multiplier.
pub const ADDITIVE_STREAK: u32 = 3;
/// Streak that doubles the base multiplier.
pub const DOUBLE_STREAK: u32 = 6;
/// Streak that quadruples the base multiplier.
pub const QUADRUPLE_STREAK: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakBonus {
    None,
    /// Added to the base multiplier
    Additive(u32),
    /// Multiplies the base multiplier
    Multiplicative(u32),
}

impl StreakBonus {
    /// Highest tier reached by `streak`.
    pub fn for_streak(streak: u32) -> Self {
        if streak >= QUADRUPLE_STREAK {
            Self::Multiplicative(4)
        } else if streak >= DOUBLE_STREAK {
            Self::Multiplicative(2)
        } else if streak >= ADDITIVE_STREAK {
            Self::Additive(1)
        } else {
            Self::None
        }
    }

    pub fn apply(self, base: u32) -> u32 {
        match self {
            Self::None => base,
            Self::Additive(bonus) => base.saturating_add(bonus),
            Self::Multiplicative(factor) => base.saturating_mul(factor),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payout {
    pub outcome: Label,
    pub stake_on_outcome: u64,
    pub total_staked: u64,
    pub is_win: bool,
    pub bonus: StreakBonus,
    /// 0 on a loss
    pub effective_multiplier: u32,
    /// Stake returned plus profit on a win; `-total_staked` on a loss
    pub win_amount: i64,
}

impl Payout {
    /// Amount to credit back to the balance. Stakes were taken when the bets
    /// were placed, so a loss credits nothing.
    pub fn credit(&self) -> u64 {
        if self.is_win {
            self.win_amount.unsigned_abs()
        } else {
            0
        }
    }
}

fn to_signed(amount: u64) -> i64 {
    i64::try_from(amount).unwrap_or(i64::MAX)
}

pub fn calculate(bets: &BetMap, outcome: Label, streak: u32, unit_stake: u64) -> Payout {
    let stake_on_outcome = bets.stake_on(outcome, unit_stake);
    let total_staked = bets.total_staked(unit_stake);
    let bonus = StreakBonus::for_streak(streak);

    if stake_on_outcome == 0 {
        return Payout {
            outcome,
            stake_on_outcome,
            total_staked,
            is_win: false,
            bonus,
            effective_multiplier: 0,
            win_amount: -to_signed(total_staked),
        };
    }

    let effective_multiplier = bonus.apply(outcome.multiplier());
    let winnings =
        stake_on_outcome.saturating_add(stake_on_outcome.saturating_mul(effective_multiplier as u64));

    Payout {
        outcome,
        stake_on_outcome,
        total_staked,
        is_win: true,
        bonus,
        effective_multiplier,
        win_amount: to_signed(winnings),
    }
}
