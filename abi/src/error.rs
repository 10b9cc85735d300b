//! Error type shared by every engine operation.

use core::fmt;

/// Rejection reasons for engine operations.
///
/// All of these are synchronous precondition failures: the engine state is
/// untouched when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A bet was attempted with less than one unit stake on hand.
    InsufficientBalance { balance: u64, required: u64 },
    /// A spin was requested with nothing staked.
    NoBetsPlaced,
    /// A mutating call arrived while the wheel is spinning.
    RoundInProgress,
    /// A spin completion arrived with no spin in flight.
    NoSpinInFlight,
    /// Text does not name a label of the alphabet.
    InvalidLabel,
    /// A sector table needs at least one sector.
    EmptySectorTable,
}

impl GameError {
    /// True for errors the player can fix (top up, place a bet, wait).
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            Self::InsufficientBalance { .. } | Self::NoBetsPlaced | Self::RoundInProgress
        )
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientBalance { balance, required } => {
                write!(f, "insufficient balance: have {}, need {}", balance, required)
            }
            Self::NoBetsPlaced => write!(f, "no bets placed"),
            Self::RoundInProgress => write!(f, "round in progress"),
            Self::NoSpinInFlight => write!(f, "no spin in flight"),
            Self::InvalidLabel => write!(f, "unknown sector label"),
            Self::EmptySectorTable => write!(f, "sector table is empty"),
        }
    }
}

/// Convenience result type for engine operations.
pub type GameResult<T = ()> = Result<T, GameError>;
