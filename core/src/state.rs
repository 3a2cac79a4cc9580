//! The four crisp Belnap states a fuzzy value can be dominated by.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// A crisp Belnap truth state.
///
/// Uses `#[repr(u8)]` with discriminants encoding `(refuted << 1) | confirmed`:
///
/// | confirmed | refuted | bits   | variant    |
/// |-----------|---------|--------|------------|
/// | 0         | 0       | `0b00` | `Unknown`  |
/// | 1         | 0       | `0b01` | `True`     |
/// | 0         | 1       | `0b10` | `False`    |
/// | 1         | 1       | `0b11` | `Conflict` |
///
/// Labels are lower-case: `"true"`, `"false"`, `"unknown"`, `"conflict"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum State {
    Unknown = 0b00,
    True = 0b01,
    False = 0b10,
    Conflict = 0b11,
}

const FROM_BITS: [State; 4] = [
    State::Unknown,  // 0b00
    State::True,     // 0b01
    State::False,    // 0b10
    State::Conflict, // 0b11
];

impl State {
    /// Tie-break order for dominant-state classification, highest first.
    ///
    /// Ambiguity and contradiction win ties over a crisp answer.
    pub const PRIORITY: [State; 4] = [State::Conflict, State::Unknown, State::True, State::False];

    #[inline]
    const fn from_bits(confirmed: u8, refuted: u8) -> State {
        FROM_BITS[(refuted << 1 | confirmed) as usize]
    }

    #[inline]
    const fn confirmed(self) -> u8 {
        self as u8 & 1
    }

    #[inline]
    const fn refuted(self) -> u8 {
        self as u8 >> 1
    }

    /// `¬self ∨ rhs`
    #[must_use]
    pub fn implies(self, rhs: Self) -> Self {
        (!self) | rhs
    }
}

impl std::ops::Not for State {
    type Output = Self;

    fn not(self) -> Self {
        State::from_bits(self.refuted(), self.confirmed())
    }
}

impl std::ops::BitAnd for State {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        State::from_bits(
            self.confirmed() & rhs.confirmed(),
            self.refuted() | rhs.refuted(),
        )
    }
}

impl std::ops::BitOr for State {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        State::from_bits(
            self.confirmed() | rhs.confirmed(),
            self.refuted() & rhs.refuted(),
        )
    }
}
