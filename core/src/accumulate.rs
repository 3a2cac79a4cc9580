//! Evidence accumulation.
//!
//! Independent pieces of evidence about the same proposition are combined
//! with the probabilistic sum on both channels, so each new confirmation
//! pushes `T` towards 1 and each new refutation pushes `F` towards 1.
//! `UNKNOWN` is the neutral element and the operator is commutative and
//! associative, so a sequence may be folded in any order.

use std::{borrow::Borrow, iter::Sum};

use crate::{logic::impl_binop, norm::s_norm, value::FuzzyValue};

impl FuzzyValue {
    #[must_use]
    pub fn accumulate(&self, other: &FuzzyValue) -> FuzzyValue {
        FuzzyValue::from_parts(s_norm(self.t(), other.t()), s_norm(self.f(), other.f()))
    }

    /// Rebinds `self` to `self ⊕ other`. `other` is left untouched.
    pub fn accumulate_assign(&mut self, other: &FuzzyValue) {
        *self = self.accumulate(other);
    }

    /// Folds a sequence of evidence starting from `UNKNOWN`.
    ///
    /// An empty sequence yields `UNKNOWN`. The result is the same as
    /// repeated pairwise [`FuzzyValue::accumulate`].
    pub fn accumulate_all<I>(values: I) -> FuzzyValue
    where
        I: IntoIterator,
        I::Item: Borrow<FuzzyValue>,
    {
        let mut count = 0_usize;
        let result = values.into_iter().fold(FuzzyValue::UNKNOWN, |acc, v| {
            count += 1;
            acc.accumulate(v.borrow())
        });
        tracing::trace!(count, %result, "accumulated evidence");
        result
    }
}

impl_binop!(Add, add, accumulate);

impl std::ops::AddAssign for FuzzyValue {
    fn add_assign(&mut self, rhs: FuzzyValue) {
        self.accumulate_assign(&rhs);
    }
}

impl std::ops::AddAssign<&FuzzyValue> for FuzzyValue {
    fn add_assign(&mut self, rhs: &FuzzyValue) {
        self.accumulate_assign(rhs);
    }
}

impl Sum for FuzzyValue {
    fn sum<I: Iterator<Item = FuzzyValue>>(iter: I) -> FuzzyValue {
        FuzzyValue::accumulate_all(iter)
    }
}

impl<'a> Sum<&'a FuzzyValue> for FuzzyValue {
    fn sum<I: Iterator<Item = &'a FuzzyValue>>(iter: I) -> FuzzyValue {
        FuzzyValue::accumulate_all(iter)
    }
}
