//! Cross-crate scenario tests for the wheel engine.
//!
//! [`WheelFixture`] drives a [`RoundEngine`](luckywheel_core::RoundEngine)
//! through whole rounds with scripted landings, so the scenario modules read
//! as sequences of player actions.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod fixture;

pub use fixture::{WheelFixture, fixture_clock};

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod growth_tests;
#[cfg(test)]
mod history_tests;
#[cfg(test)]
mod payout_tests;
