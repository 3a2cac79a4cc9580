//! Scalar building blocks shared by every operator.

/// Product t-norm.
#[inline]
#[must_use]
pub(crate) fn t_norm(a: f64, b: f64) -> f64 {
    a * b
}

/// Probabilistic s-norm.
///
/// The exact result always lies in `[max(a, b), 1]`. Rounding of
/// `a + b - a·b` can land one ulp outside that range, so it is clamped back.
#[inline]
#[must_use]
pub(crate) fn s_norm(a: f64, b: f64) -> f64 {
    (a + b - a * b).clamp(a.max(b), 1.0)
}

#[inline]
#[must_use]
pub(crate) fn complement(a: f64) -> f64 {
    1.0 - a
}

/// Returns `true` if `x` is a finite number in `[0, 1]`.
#[inline]
#[must_use]
pub(crate) fn in_unit(x: f64) -> bool {
    (0.0..=1.0).contains(&x)
}
