//! Rotation-to-outcome resolution.
//!
//! The wheel turns under a pointer fixed at the top (angle 0), so the sector
//! selected is found at the complement of the wheel's rotation. Sector
//! intervals are half-open and lower-inclusive: an angle exactly on a
//! boundary belongs to the sector that starts there.

use luckywheel_abi::Label;

use crate::sectors::SectorTable;

pub const FULL_TURN_DEG: f64 = 360.0;

/// Sector under the pointer after a spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landing {
    pub index: usize,
    pub label: Label,
}

/// Fold any rotation into `[0, 360)`. Non-finite input folds to 0.
pub fn normalize_angle(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let mut angle = degrees % FULL_TURN_DEG;
    if angle < 0.0 {
        angle += FULL_TURN_DEG;
    }
    // A tiny negative remainder can round up to exactly 360.
    if angle >= FULL_TURN_DEG {
        angle -= FULL_TURN_DEG;
    }
    angle
}

/// Angle of the wheel under the pointer, measured on the wheel.
pub fn pointer_angle(degrees: f64) -> f64 {
    (FULL_TURN_DEG - normalize_angle(degrees)) % FULL_TURN_DEG
}

/// Index of the sector under the pointer for a wheel of `sector_count`
/// equal sectors.
pub fn sector_index(degrees: f64, sector_count: usize) -> usize {
    if sector_count == 0 {
        return 0;
    }
    let sector_angle = FULL_TURN_DEG / sector_count as f64;
    // pointer_angle is never negative, so truncation is floor.
    let index = (pointer_angle(degrees) / sector_angle) as usize;
    index.min(sector_count - 1)
}

pub fn resolve(table: &SectorTable, degrees: f64) -> Landing {
    let index = sector_index(degrees, table.sector_count());
    let sectors = table.sectors();
    Landing {
        index,
        label: sectors[index.min(sectors.len().saturating_sub(1))],
    }
}
