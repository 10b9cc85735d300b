//! Lucky Wheel engine/presentation boundary types
//!
//! This crate provides the canonical definitions for every value that crosses
//! between the round engine and whatever renders it (wheel animation, bet
//! buttons, history list).

#![no_std]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod bet;
pub mod error;
pub mod label;
pub mod round;

/// Currency cost of a single bet unit.
pub const DEFAULT_UNIT_STAKE: u64 = 10;

/// Number of rounds kept in the betting history.
pub const HISTORY_CAPACITY: usize = 50;

pub use bet::BetMap;
pub use error::{GameError, GameResult};
pub use label::{LABEL_COUNT, Label, LabelSet};
pub use round::{Direction, GrowthEntry, GrowthReason, HistoryRecord, RoundPhase, RoundResult};
