//! Per-round bet map.

use crate::label::{LABEL_COUNT, Label, LabelSet};

/// Bet units placed on each label for the current round.
///
/// Every label of the alphabet always has a slot, so a lookup never misses;
/// an untouched label simply holds zero units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct BetMap {
    units: [u32; LABEL_COUNT],
}

impl BetMap {
    pub const fn new() -> Self {
        Self {
            units: [0; LABEL_COUNT],
        }
    }

    /// Build a map from `(label, units)` pairs. Repeated labels accumulate.
    pub fn from_units(pairs: &[(Label, u32)]) -> Self {
        let mut map = Self::new();
        for &(label, units) in pairs {
            let slot = &mut map.units[label.index()];
            *slot = slot.saturating_add(units);
        }
        map
    }

    #[inline]
    pub fn units(&self, label: Label) -> u32 {
        self.units[label.index()]
    }

    #[inline]
    pub fn add_unit(&mut self, label: Label) {
        let slot = &mut self.units[label.index()];
        *slot = slot.saturating_add(1);
    }

    pub fn total_units(&self) -> u64 {
        self.units.iter().map(|&u| u as u64).sum()
    }

    /// Currency staked on `label` at `unit_stake` per unit.
    #[inline]
    pub fn stake_on(&self, label: Label, unit_stake: u64) -> u64 {
        self.units(label) as u64 * unit_stake
    }

    /// Currency staked across all labels.
    #[inline]
    pub fn total_staked(&self, unit_stake: u64) -> u64 {
        self.total_units() * unit_stake
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.iter().all(|&u| u == 0)
    }

    pub fn clear(&mut self) {
        self.units = [0; LABEL_COUNT];
    }

    /// `(label, units)` for every label, zero entries included.
    pub fn iter(&self) -> impl Iterator<Item = (Label, u32)> + '_ {
        Label::ALL.into_iter().map(move |l| (l, self.units[l.index()]))
    }

    pub fn active_labels(&self) -> LabelSet {
        self.iter()
            .filter(|&(_, units)| units > 0)
            .fold(LabelSet::empty(), |set, (label, _)| set | label.bit())
    }
}
