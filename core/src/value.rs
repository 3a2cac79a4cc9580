
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::Error, norm, state::State};

/// Tolerance used by [`FuzzyValue::approx_eq`].
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// A four-valued fuzzy truth value.
///
/// A proposition is held as a pair `(T, F)`: `T` is the degree to which it is
/// confirmed, `F` the degree to which it is refuted. Both lie in `[0, 1]` and
/// are independent of each other, so there is no `T + F = 1` constraint. The
/// corners of the unit square are the four Belnap states:
///
/// | `(T, F)` | state      |
/// |----------|------------|
/// | `(1, 0)` | `TRUE`     |
/// | `(0, 1)` | `FALSE`    |
/// | `(0, 0)` | `UNKNOWN`  |
/// | `(1, 1)` | `CONFLICT` |
///
/// Values are immutable. Every operator returns a new value; `+=` rebinds the
/// left-hand side to a fresh one. `PartialEq` compares exactly; use
/// [`FuzzyValue::approx_eq`] for results of floating-point arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Raw"))]
pub struct FuzzyValue {
    t: f64,
    f: f64,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct Raw {
    t: f64,
    f: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<Raw> for FuzzyValue {
    type Error = Error;

    fn try_from(raw: Raw) -> Result<Self, Error> {
        FuzzyValue::new(raw.t, raw.f)
    }
}

impl FuzzyValue {
    pub const TRUE: FuzzyValue = FuzzyValue { t: 1.0, f: 0.0 };
    pub const FALSE: FuzzyValue = FuzzyValue { t: 0.0, f: 1.0 };
    pub const UNKNOWN: FuzzyValue = FuzzyValue { t: 0.0, f: 0.0 };
    pub const CONFLICT: FuzzyValue = FuzzyValue { t: 1.0, f: 1.0 };

    /// Creates a value from a confirmation degree `t` and a refutation degree
    /// `f`.
    ///
    /// Out-of-range input is rejected, never clamped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if either component is outside `[0, 1]` or
    /// is not finite.
    pub fn new(t: f64, f: f64) -> Result<FuzzyValue, Error> {
        let t = check("T", t)?;
        let f = check("F", f)?;
        Ok(FuzzyValue { t, f })
    }

    /// Builds a value from components already known to lie in `[0, 1]`.
    #[inline]
    pub(crate) const fn from_parts(t: f64, f: f64) -> FuzzyValue {
        FuzzyValue { t, f }
    }

    #[must_use]
    pub const fn from_crisp(value: bool) -> FuzzyValue {
        if value {
            FuzzyValue::TRUE
        } else {
            FuzzyValue::FALSE
        }
    }

    /// Creates `(p, 1 - p)`, a value with complementary confirmation and
    /// refutation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `p` is outside `[0, 1]` or is not finite.
    pub fn from_probability(p: f64) -> Result<FuzzyValue, Error> {
        let p = check("probability", p)?;
        Ok(FuzzyValue::from_parts(p, norm::complement(p)))
    }

    /// Confirmation degree `T`.
    #[inline]
    #[must_use]
    pub const fn t(&self) -> f64 {
        self.t
    }

    /// Refutation degree `F`.
    #[inline]
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }

    #[inline]
    #[must_use]
    pub const fn confirmation(&self) -> f64 {
        self.t
    }

    #[inline]
    #[must_use]
    pub const fn refutation(&self) -> f64 {
        self.f
    }

    #[must_use]
    pub const fn as_tuple(&self) -> (f64, f64) {
        (self.t, self.f)
    }

    /// Compares both components within [`DEFAULT_TOLERANCE`].
    #[must_use]
    pub fn approx_eq(&self, other: &FuzzyValue) -> bool {
        self.approx_eq_within(other, DEFAULT_TOLERANCE)
    }

    #[must_use]
    pub fn approx_eq_within(&self, other: &FuzzyValue, tolerance: f64) -> bool {
        (self.t - other.t).abs() <= tolerance && (self.f - other.f).abs() <= tolerance
    }
}

/// Rejects anything that is not a finite number in `[0, 1]`. A negative zero
/// comes back as `+0.0`.
pub(crate) fn check(what: &'static str, value: f64) -> Result<f64, Error> {
    if norm::in_unit(value) {
        Ok(value + 0.0)
    } else {
        tracing::debug!(what, value, "rejected out-of-domain component");
        Err(Error::domain(what, value))
    }
}

impl Default for FuzzyValue {
    fn default() -> Self {
        FuzzyValue::UNKNOWN
    }
}

impl From<bool> for FuzzyValue {
    fn from(value: bool) -> Self {
        FuzzyValue::from_crisp(value)
    }
}

impl From<State> for FuzzyValue {
    fn from(state: State) -> Self {
        match state {
            State::True => FuzzyValue::TRUE,
            State::False => FuzzyValue::FALSE,
            State::Unknown => FuzzyValue::UNKNOWN,
            State::Conflict => FuzzyValue::CONFLICT,
        }
    }
}

impl TryFrom<(f64, f64)> for FuzzyValue {
    type Error = Error;

    fn try_from((t, f): (f64, f64)) -> Result<Self, Error> {
        FuzzyValue::new(t, f)
    }
}

impl From<FuzzyValue> for (f64, f64) {
    fn from(value: FuzzyValue) -> Self {
        value.as_tuple()
    }
}

/// Renders as `(T=0.80, F=0.20)`; the alternate form `{:#}` appends the
/// dominant state, e.g. `(T=0.80, F=0.20) [true]`.
impl fmt::Display for FuzzyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(T={:.2}, F={:.2})", self.t, self.f)?;
        if f.alternate() {
            write!(f, " [{}]", self.dominant_state())?;
        }
        Ok(())
    }
}
