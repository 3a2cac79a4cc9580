//! Scaling by a scalar and component-wise arithmetic.
//!
//! A result that would leave `[0, 1]` is rejected, not clamped.

use crate::{
    error::Error,
    value::{check, FuzzyValue},
};

fn check_scalar(k: f64) -> Result<f64, Error> {
    if k.is_finite() && k >= 0.0 {
        Ok(k)
    } else {
        tracing::debug!(k, "rejected scalar");
        Err(Error::domain("scalar", k))
    }
}

impl FuzzyValue {
    /// Multiplies both components by `k`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] if `k` is negative or not finite, or if a
    /// scaled component would exceed 1.
    pub fn scale(&self, k: f64) -> Result<FuzzyValue, Error> {
        let k = check_scalar(k)?;
        FuzzyValue::new(self.t() * k, self.f() * k)
    }

    /// Divides both components by `k`; the same as scaling by `1 / k`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `k` is zero, and [`Error::Domain`]
    /// if `k` is negative or not finite or a result component would exceed 1.
    pub fn divide(&self, k: f64) -> Result<FuzzyValue, Error> {
        let k = check_scalar(k)?;
        if k == 0.0 {
            return Err(Error::DivisionByZero);
        }
        // Divide directly: `1 / k` overflows for subnormal `k`.
        FuzzyValue::new(self.t() / k, self.f() / k)
    }

    /// Component-wise product `(Tx·Ty, Fx·Fy)`.
    #[must_use]
    pub fn product(&self, other: &FuzzyValue) -> FuzzyValue {
        FuzzyValue::from_parts(self.t() * other.t(), self.f() * other.f())
    }

    /// Component-wise quotient `(Tx/Ty, Fx/Fy)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if a component of `other` is zero,
    /// and [`Error::Domain`] if a result component would exceed 1.
    pub fn quotient(&self, other: &FuzzyValue) -> Result<FuzzyValue, Error> {
        if other.t() == 0.0 || other.f() == 0.0 {
            return Err(Error::DivisionByZero);
        }
        let t = check("T", self.t() / other.t())?;
        let f = check("F", self.f() / other.f())?;
        Ok(FuzzyValue::from_parts(t, f))
    }
}
