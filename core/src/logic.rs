//! Negation, conjunction, disjunction, implication and bi-implication.
//!
//! Conjunction pairs the product t-norm on `T` with the probabilistic s-norm
//! on `F`; disjunction is its De Morgan dual. Implication and bi-implication
//! are derived from those, never computed from their own formulas.

use crate::{
    norm::{s_norm, t_norm},
    value::FuzzyValue,
};

impl FuzzyValue {
    /// Negation: swaps confirmation and refutation.
    #[inline]
    #[must_use]
    pub const fn not(&self) -> FuzzyValue {
        FuzzyValue::from_parts(self.f(), self.t())
    }

    /// Conjunction: both must confirm, either may refute.
    #[must_use]
    pub fn and(&self, other: &FuzzyValue) -> FuzzyValue {
        FuzzyValue::from_parts(t_norm(self.t(), other.t()), s_norm(self.f(), other.f()))
    }

    /// Disjunction: either may confirm, both must refute.
    #[must_use]
    pub fn or(&self, other: &FuzzyValue) -> FuzzyValue {
        FuzzyValue::from_parts(s_norm(self.t(), other.t()), t_norm(self.f(), other.f()))
    }

    /// `¬self ∨ other`
    #[must_use]
    pub fn implies(&self, other: &FuzzyValue) -> FuzzyValue {
        self.not().or(other)
    }

    /// `(self → other) ∧ (other → self)`
    #[must_use]
    pub fn iff(&self, other: &FuzzyValue) -> FuzzyValue {
        self.implies(other).and(&other.implies(self))
    }
}

impl std::ops::Not for FuzzyValue {
    type Output = FuzzyValue;

    fn not(self) -> FuzzyValue {
        FuzzyValue::not(&self)
    }
}

impl std::ops::Not for &FuzzyValue {
    type Output = FuzzyValue;

    fn not(self) -> FuzzyValue {
        FuzzyValue::not(self)
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $inherent:ident) => {
        impl std::ops::$trait for &FuzzyValue {
            type Output = FuzzyValue;

            fn $method(self, rhs: Self) -> FuzzyValue {
                FuzzyValue::$inherent(self, rhs)
            }
        }

        impl std::ops::$trait<&FuzzyValue> for FuzzyValue {
            type Output = FuzzyValue;

            fn $method(self, rhs: &FuzzyValue) -> FuzzyValue {
                FuzzyValue::$inherent(&self, rhs)
            }
        }

        impl std::ops::$trait<FuzzyValue> for &FuzzyValue {
            type Output = FuzzyValue;

            fn $method(self, rhs: FuzzyValue) -> FuzzyValue {
                FuzzyValue::$inherent(self, &rhs)
            }
        }

        impl std::ops::$trait for FuzzyValue {
            type Output = FuzzyValue;

            fn $method(self, rhs: Self) -> FuzzyValue {
                FuzzyValue::$inherent(&self, &rhs)
            }
        }
    };
}

pub(crate) use impl_binop;

impl_binop!(BitAnd, bitand, and);
impl_binop!(BitOr, bitor, or);
