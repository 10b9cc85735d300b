//! Round lifecycle, results and ledger records.

use core::fmt;

use crate::bet::BetMap;
use crate::label::{Label, LabelSet};

/// Phase of the betting round.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundPhase {
    /// No bet has been placed since the engine was created
    #[default]
    Idle = 0,
    /// Bets may be placed, cleared, or a spin requested
    AcceptingBets = 1,
    /// The wheel is turning; betting is locked
    Spinning = 2,
    /// The spin landed and the round is being settled. Transient: settlement
    /// runs inside one `on_spin_complete` call, which leaves the engine in
    /// `AcceptingBets`, so callers never observe this phase.
    Resolved = 3,
}

impl RoundPhase {
    #[inline]
    pub fn is_spinning(self) -> bool {
        matches!(self, Self::Spinning)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AcceptingBets => "accepting-bets",
            Self::Spinning => "spinning",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settled outcome of one spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub outcome: Label,
    /// Index of the sector under the pointer
    pub sector_index: usize,
    pub total_staked: u64,
    pub is_win: bool,
    /// Credited amount on a win (stake returned plus profit), or the negated
    /// total stake on a loss
    pub win_amount: i64,
    /// Multiplier applied after the streak bonus; 0 on a loss
    pub effective_multiplier: u32,
    pub bets: BetMap,
}

impl RoundResult {
    /// Labels that carried a bet this round.
    pub fn labels_bet(&self) -> LabelSet {
        self.bets.active_labels()
    }
}

/// A [`RoundResult`] stamped with the time it was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryRecord {
    pub timestamp_ms: u64,
    pub result: RoundResult,
}

impl Default for RoundResult {
    fn default() -> Self {
        Self {
            outcome: Label::One,
            sector_index: 0,
            total_staked: 0,
            is_win: false,
            win_amount: 0,
            effective_multiplier: 0,
            bets: BetMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

/// Why a balance changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthReason {
    BetPlaced(Label),
    BetsRefunded,
    RoundWon(Label),
    Adjusted,
}

impl fmt::Display for GrowthReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BetPlaced(label) => write!(f, "bet placed on {}", label),
            Self::BetsRefunded => write!(f, "bets refunded"),
            Self::RoundWon(label) => write!(f, "won on {}", label),
            Self::Adjusted => write!(f, "balance adjusted"),
        }
    }
}

/// One balance or level change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthEntry {
    pub balance: u64,
    pub previous_balance: u64,
    pub level: u32,
    pub previous_level: u32,
    pub direction: Direction,
    pub reason: Option<GrowthReason>,
}

impl GrowthEntry {
    #[inline]
    pub fn level_changed(&self) -> bool {
        self.level != self.previous_level
    }
}
