#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod config;
pub mod engine;
pub mod handle;
pub mod ledger;
pub mod payout;
pub mod resolver;
pub mod sectors;
pub mod spin_plan;

pub use config::{WheelConfig, config_from_cmdline};
pub use engine::{RoundEngine, WheelEvent, WheelReply};
pub use handle::SharedWheel;
pub use ledger::{GameLedger, GrowthLog, History, level_for};
pub use payout::{Payout, StreakBonus};
pub use resolver::{Landing, normalize_angle, resolve};
pub use sectors::{STANDARD_SECTORS, SectorTable};
pub use spin_plan::{FixedSpinPlanner, RandomSpinPlanner, SpinPlan, SpinPlanner};
