//! Sector table: the ordered labels painted around the wheel.
//!
//! There is no separate probability table. A label's odds are its share of
//! the sequence, so changing the odds means changing the sequence.

use alloc::boxed::Box;

use luckywheel_abi::{GameError, GameResult, Label, LabelSet};

use crate::resolver::FULL_TURN_DEG;

/// The stock 20-sector wheel, clockwise from the top.
pub const STANDARD_SECTORS: [Label; 20] = [
    Label::One,
    Label::Three,
    Label::Five,
    Label::One,
    Label::Three,
    Label::One,
    Label::Ten,
    Label::One,
    Label::Three,
    Label::Five,
    Label::One,
    Label::Three,
    Label::One,
    Label::Five,
    Label::One,
    Label::Three,
    Label::Ten,
    Label::One,
    Label::Three,
    Label::Twenty,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorTable {
    sectors: Box<[Label]>,
}

impl Default for SectorTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl SectorTable {
    pub fn standard() -> Self {
        Self {
            sectors: Box::new(STANDARD_SECTORS),
        }
    }

    pub fn new(sectors: &[Label]) -> GameResult<Self> {
        if sectors.is_empty() {
            return Err(GameError::EmptySectorTable);
        }
        Ok(Self {
            sectors: sectors.into(),
        })
    }

    #[inline]
    pub fn sectors(&self) -> &[Label] {
        &self.sectors
    }

    #[inline]
    pub fn sector_count(&self) -> usize {
        self.sectors.len()
    }

    /// Width of one sector in degrees.
    #[inline]
    pub fn sector_angle(&self) -> f64 {
        FULL_TURN_DEG / self.sector_count() as f64
    }

    /// Angle at which sector `index` starts.
    #[inline]
    pub fn angle_of_sector(&self, index: usize) -> f64 {
        index as f64 * self.sector_angle()
    }

    #[inline]
    pub fn label_at(&self, index: usize) -> Option<Label> {
        self.sectors.get(index).copied()
    }

    /// Number of sectors carrying `label`.
    pub fn weight_of(&self, label: Label) -> usize {
        self.sectors.iter().filter(|&&l| l == label).count()
    }

    /// Chance that a uniformly random rotation lands on `label`.
    pub fn probability_of(&self, label: Label) -> f64 {
        self.weight_of(label) as f64 / self.sector_count() as f64
    }

    /// Distinct labels present on the wheel.
    pub fn labels(&self) -> LabelSet {
        self.sectors
            .iter()
            .fold(LabelSet::empty(), |set, label| set | label.bit())
    }

    pub fn first_index_of(&self, label: Label) -> Option<usize> {
        self.sectors.iter().position(|&l| l == label)
    }

    /// Wheel rotation in `[0, 360)` that puts the middle of sector `index`
    /// under the pointer.
    pub fn landing_rotation(&self, index: usize) -> f64 {
        let pointer = self.angle_of_sector(index) + self.sector_angle() / 2.0;
        (FULL_TURN_DEG - pointer) % FULL_TURN_DEG
    }
}
