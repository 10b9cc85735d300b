//! Game ledger: balance, streaks, betting history and growth log.
//!
//! The ledger is owned by [`RoundEngine`](crate::engine::RoundEngine). Mutators
//! are `pub(crate)`; hosts only get read access.

use alloc::collections::VecDeque;

use luckywheel_abi::{
    Direction, GameError, GameResult, GrowthEntry, GrowthReason, HISTORY_CAPACITY, HistoryRecord,
};
use luckywheel_lib::RingBuffer;

pub const MAX_LEVEL: u32 = 10;
/// Balance needed per level.
pub const LEVEL_STEP: u64 = 100;

/// Player level for a balance: `min(10, balance / 100 + 1)`.
pub fn level_for(balance: u64) -> u32 {
    let level = (balance / LEVEL_STEP).saturating_add(1);
    level.min(MAX_LEVEL as u64) as u32
}

/// Newest-first betting history, 50 rounds deep.
pub type History = RingBuffer<HistoryRecord, HISTORY_CAPACITY>;

/// Chronological record of balance changes.
#[derive(Debug, Clone, Default)]
pub struct GrowthLog {
    entries: VecDeque<GrowthEntry>,
    /// 0 = unbounded
    capacity: usize,
    evicted: u64,
}

impl GrowthLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
            evicted: 0,
        }
    }

    fn push(&mut self, entry: GrowthEntry) {
        if self.capacity != 0 && self.entries.len() >= self.capacity {
            self.entries.pop_front();
            self.evicted += 1;
        }
        self.entries.push_back(entry);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries dropped to stay within capacity.
    #[inline]
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    /// Oldest-first iterator.
    pub fn iter(&self) -> impl Iterator<Item = &GrowthEntry> + '_ {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&GrowthEntry> {
        self.entries.back()
    }
}

#[derive(Debug, Clone)]
pub struct GameLedger {
    balance: u64,
    win_streak: u32,
    best_win_streak: u32,
    history: History,
    growth_log: GrowthLog,
}

impl GameLedger {
    pub(crate) fn new(balance: u64, growth_log_capacity: usize) -> Self {
        Self {
            balance,
            win_streak: 0,
            best_win_streak: 0,
            history: History::new(),
            growth_log: GrowthLog::with_capacity(growth_log_capacity),
        }
    }

    #[inline]
    pub fn balance(&self) -> u64 {
        self.balance
    }

    #[inline]
    pub fn level(&self) -> u32 {
        level_for(self.balance)
    }

    #[inline]
    pub fn win_streak(&self) -> u32 {
        self.win_streak
    }

    #[inline]
    pub fn best_win_streak(&self) -> u32 {
        self.best_win_streak
    }

    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[inline]
    pub fn growth_log(&self) -> &GrowthLog {
        &self.growth_log
    }

    /// Move the balance to `balance`, logging the change. Returns the growth
    /// entry, or `None` when the balance did not move.
    pub(crate) fn set_balance(
        &mut self,
        balance: u64,
        reason: Option<GrowthReason>,
    ) -> Option<GrowthEntry> {
        let previous_balance = self.balance;
        if balance == previous_balance {
            return None;
        }
        self.balance = balance;

        let entry = GrowthEntry {
            balance,
            previous_balance,
            level: level_for(balance),
            previous_level: level_for(previous_balance),
            direction: if balance > previous_balance {
                Direction::Increase
            } else {
                Direction::Decrease
            },
            reason,
        };
        self.growth_log.push(entry);
        Some(entry)
    }

    pub(crate) fn credit(&mut self, amount: u64, reason: GrowthReason) -> Option<GrowthEntry> {
        self.set_balance(self.balance.saturating_add(amount), Some(reason))
    }

    pub(crate) fn debit(&mut self, amount: u64, reason: GrowthReason) -> GameResult<Option<GrowthEntry>> {
        if self.balance < amount {
            return Err(GameError::InsufficientBalance {
                balance: self.balance,
                required: amount,
            });
        }
        Ok(self.set_balance(self.balance - amount, Some(reason)))
    }

    pub(crate) fn record_win(&mut self) {
        self.win_streak = self.win_streak.saturating_add(1);
        self.best_win_streak = self.best_win_streak.max(self.win_streak);
    }

    pub(crate) fn record_loss(&mut self) {
        self.win_streak = 0;
    }

    pub(crate) fn push_history(&mut self, record: HistoryRecord) -> Option<HistoryRecord> {
        self.history.push_overwrite(record)
    }

    pub(crate) fn clear_history(&mut self) {
        self.history.reset();
    }
}
