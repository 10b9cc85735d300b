//! Spin planning: where the wheel will stop and how long it takes to get
//! there. The presentation layer animates the plan and reports the angle it
//! actually stopped at; only that reported angle decides the round.

use luckywheel_abi::Label;
use luckywheel_lib::{Lfsr64, random_next};

use crate::config::WheelConfig;
use crate::resolver::{FULL_TURN_DEG, normalize_angle};
use crate::sectors::SectorTable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    /// Rotation at the moment the spin starts
    pub start_angle: f64,
    /// Absolute rotation the animation should end on
    pub final_angle: f64,
    pub duration_ms: u32,
}

impl SpinPlan {
    /// Total degrees travelled.
    #[inline]
    pub fn travel(&self) -> f64 {
        self.final_angle - self.start_angle
    }
}

/// Source of spin plans.
pub trait SpinPlanner: Send {
    fn plan(&mut self, start_angle: f64) -> SpinPlan;
}

/// Turns the wheel a random number of full spins plus a random offset.
#[derive(Debug, Clone)]
pub struct RandomSpinPlanner {
    rng: Lfsr64,
    min_full_spins: u32,
    max_full_spins: u32,
    max_offset_deg: f64,
    duration_ms: u32,
}

impl RandomSpinPlanner {
    pub fn from_config(config: &WheelConfig) -> Self {
        let seed = config.rng_seed.unwrap_or_else(random_next);
        Self {
            rng: Lfsr64::with_seed(seed),
            min_full_spins: config.min_full_spins,
            max_full_spins: config.max_full_spins.max(config.min_full_spins),
            max_offset_deg: config.max_offset_deg,
            duration_ms: config.spin_duration_ms,
        }
    }
}

impl SpinPlanner for RandomSpinPlanner {
    fn plan(&mut self, start_angle: f64) -> SpinPlan {
        let span = (self.max_full_spins - self.min_full_spins) as u64 + 1;
        let full_spins = self.min_full_spins as u64 + self.rng.next_below(span);
        let offset = self.rng.next_unit_f64() * self.max_offset_deg;
        SpinPlan {
            start_angle,
            final_angle: start_angle + full_spins as f64 * FULL_TURN_DEG + offset,
            duration_ms: self.duration_ms,
        }
    }
}

/// Always stops at the same wheel rotation, after a fixed number of turns.
/// Used for demos, attract loops and scripted rounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSpinPlanner {
    rotation: f64,
    full_spins: u32,
    duration_ms: u32,
}

impl FixedSpinPlanner {
    pub fn new(rotation: f64, full_spins: u32, duration_ms: u32) -> Self {
        Self {
            rotation: normalize_angle(rotation),
            full_spins,
            duration_ms,
        }
    }

    /// Planner that lands on the first sector carrying `label`, or `None` if
    /// the table has no such sector.
    pub fn landing_on(table: &SectorTable, label: Label, full_spins: u32, duration_ms: u32) -> Option<Self> {
        let index = table.first_index_of(label)?;
        Some(Self::new(table.landing_rotation(index), full_spins, duration_ms))
    }
}

impl SpinPlanner for FixedSpinPlanner {
    fn plan(&mut self, start_angle: f64) -> SpinPlan {
        let delta = normalize_angle(self.rotation - normalize_angle(start_angle));
        SpinPlan {
            start_angle,
            final_angle: start_angle + self.full_spins as f64 * FULL_TURN_DEG + delta,
            duration_ms: self.duration_ms,
        }
    }
}
