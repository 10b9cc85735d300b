//! Sector labels (payout denominations).

use bitflags::bitflags;
use core::fmt;
use core::str::FromStr;

use crate::error::GameError;

/// Number of distinct labels in the alphabet.
pub const LABEL_COUNT: usize = 5;

/// Payout denomination painted on a wheel sector.
///
/// The numeric value of a label is its base payout multiplier.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Label {
    #[default]
    One = 0,
    Three = 1,
    Five = 2,
    Ten = 3,
    Twenty = 4,
}

impl Label {
    /// Canonical alphabet in bet panel order.
    pub const ALL: [Label; LABEL_COUNT] =
        [Label::One, Label::Three, Label::Five, Label::Ten, Label::Twenty];

    #[inline]
    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            0 => Some(Self::One),
            1 => Some(Self::Three),
            2 => Some(Self::Five),
            3 => Some(Self::Ten),
            4 => Some(Self::Twenty),
            _ => None,
        }
    }

    /// Position of this label in [`Label::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Base payout multiplier.
    #[inline]
    pub const fn multiplier(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Three => 3,
            Self::Five => 5,
            Self::Ten => 10,
            Self::Twenty => 20,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Three => "3",
            Self::Five => "5",
            Self::Ten => "10",
            Self::Twenty => "20",
        }
    }

    /// Sector fill color, 0xRRGGBBAA.
    pub const fn color(self) -> u32 {
        match self {
            Self::One => 0xE8B3_34FF,
            Self::Three => 0x6BBB_56FF,
            Self::Five => 0x4C83_B5FF,
            Self::Ten => 0xBD65_A0FF,
            Self::Twenty => 0xC75A_38FF,
        }
    }

    #[inline]
    pub const fn bit(self) -> LabelSet {
        LabelSet::from_bits_truncate(1 << self as u8)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::One),
            "3" => Ok(Self::Three),
            "5" => Ok(Self::Five),
            "10" => Ok(Self::Ten),
            "20" => Ok(Self::Twenty),
            _ => Err(GameError::InvalidLabel),
        }
    }
}

bitflags! {
    /// Set of labels, e.g. the labels that carry at least one bet unit.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct LabelSet: u8 {
        const ONE    = 1 << 0;
        const THREE  = 1 << 1;
        const FIVE   = 1 << 2;
        const TEN    = 1 << 3;
        const TWENTY = 1 << 4;
    }
}

impl LabelSet {
    #[inline]
    pub fn contains_label(&self, label: Label) -> bool {
        self.contains(label.bit())
    }

    /// Labels in the set, in alphabet order.
    pub fn labels(self) -> impl Iterator<Item = Label> {
        Label::ALL.into_iter().filter(move |l| self.contains(l.bit()))
    }
}

impl From<Label> for LabelSet {
    fn from(label: Label) -> Self {
        label.bit()
    }
}
