//! Tolerance level for comparing floats.

use std::cmp::Ordering;

use crate::real::Real;
use crate::traits::{ApproxEq, ApproxOrd};

/// Allowed difference under which two values compare as equal.
///
/// A tolerance has an `absolute` and a `relative` component; two values
/// compare equal when their difference is within **either** bound:
///
/// - the `absolute` component is a fixed magnitude, which governs behavior
///   near zero where relative comparison degenerates;
/// - the `relative` component scales with the larger magnitude of the two
///   operands, so the bound tracks the operands' exponent.
///
/// Formally, `a` and `b` compare equal when
///
/// ```text
/// |a - b| <= max(absolute, relative * max(|a|, |b|))
/// ```
///
/// Exact equality always counts as approximate equality, so equal infinities
/// compare equal. NaN compares unequal to everything, including itself.
///
/// # Which tolerance do I use?
///
/// [`Tolerance::default()`] is a good place to start: it compares using
/// about half the precision of the scalar type, which absorbs the error of
/// modest chains of arithmetic.
///
/// - If values that **should be distinct compare equal**, use
///   [`Tolerance::absolute()`] or [`Tolerance::relative()`] with a
///   **smaller** bound.
/// - If values that **should be equivalent compare distinct**, use a
///   **larger** bound.
///
/// Prefer [`Tolerance::absolute()`] when your values cluster around a known
/// scale, and [`Tolerance::relative()`] when they span many orders of
/// magnitude.
///
/// # Validity
///
/// The absolute component must be non-negative and finite, and the relative
/// component must be in `0.0..=1.0`. Constructors `assert!` this: a negative
/// tolerance is a bug in the caller, not a comparison that returns `false`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerance<T> {
    absolute: T,
    relative: T,
}

impl<T: Real> Default for Tolerance<T> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<T: Real> Tolerance<T> {
    /// Default tolerance, equivalent to
    /// `Tolerance::relative(T::DEFAULT_RELATIVE)`: relative comparison at
    /// the square root of the machine epsilon.
    pub const DEFAULT: Self = Self {
        absolute: T::DEFAULT_ABSOLUTE,
        relative: T::DEFAULT_RELATIVE,
    };

    /// Constructs a tolerance with both an absolute and a relative
    /// component.
    ///
    /// # Panics
    ///
    /// Panics if `absolute` is negative or not finite, or if `relative` is
    /// outside `0.0..=1.0`.
    pub fn new(absolute: T, relative: T) -> Self {
        assert!(
            absolute >= T::ZERO && absolute.is_finite(),
            "absolute tolerance must be non-negative and finite; got {absolute:?}",
        );
        assert!(
            relative >= T::ZERO && relative <= T::ONE,
            "relative tolerance must be in 0.0..=1.0; got {relative:?}",
        );
        Self { absolute, relative }
    }

    /// Constructs a purely absolute tolerance: `a` and `b` compare equal
    /// when `|a - b| <= tol`.
    ///
    /// # Panics
    ///
    /// Panics if `tol` is negative or not finite.
    pub fn absolute(tol: T) -> Self {
        Self::new(tol, T::ZERO)
    }

    /// Constructs a relative tolerance: `a` and `b` compare equal when
    /// `|a - b| <= tol * max(|a|, |b|)`.
    ///
    /// Also admits an absolute component of `tol * T::MIN_POSITIVE`, so
    /// that values a fraction of the smallest normal magnitude apart
    /// compare equal even when one of them is zero.
    ///
    /// # Panics
    ///
    /// Panics if `tol` is outside `0.0..=1.0`.
    pub fn relative(tol: T) -> Self {
        assert!(
            tol >= T::ZERO && tol <= T::ONE,
            "relative tolerance must be in 0.0..=1.0; got {tol:?}",
        );
        Self {
            absolute: tol * T::MIN_POSITIVE,
            relative: tol,
        }
    }

    /// Compares two scalars for approximate equality.
    pub(crate) fn scalar_eq(self, a: T, b: T) -> bool {
        if a == b {
            return true; // covers equal infinities
        }
        let delta = (a - b).magnitude();
        let scale = a.magnitude().max(b.magnitude());
        let bound = self.absolute.max(scale * self.relative);
        // NaN operands and overflowing differences land here as non-finite.
        delta.is_finite() && delta <= bound
    }

    /// Compares `a` and `b` using `ApproxEq::approx_eq()`.
    pub fn eq<V: ApproxEq<Scalar = T>>(self, a: V, b: V) -> bool {
        a.approx_eq(&b, self)
    }
    /// Compares `a` and `b` using `ApproxEq::approx_eq()` and returns
    /// whether they differ.
    pub fn ne<V: ApproxEq<Scalar = T>>(self, a: V, b: V) -> bool {
        !self.eq(a, b)
    }
    /// Compares `a` and `b` using `ApproxOrd::approx_cmp()`.
    pub fn cmp<V: ApproxOrd<Scalar = T>>(self, a: V, b: V) -> Ordering {
        a.approx_cmp(&b, self)
    }
    /// Returns whether `a < b`, with approximately-equal values considered
    /// equal.
    pub fn lt<V: ApproxOrd<Scalar = T>>(self, a: V, b: V) -> bool {
        self.cmp(a, b) == Ordering::Less
    }
    /// Returns whether `a > b`, with approximately-equal values considered
    /// equal.
    pub fn gt<V: ApproxOrd<Scalar = T>>(self, a: V, b: V) -> bool {
        self.cmp(a, b) == Ordering::Greater
    }
    /// Returns whether `a < b` or the two are approximately equal.
    pub fn lt_eq<V: ApproxOrd<Scalar = T>>(self, a: V, b: V) -> bool {
        self.cmp(a, b) != Ordering::Greater
    }
    /// Returns whether `a > b` or the two are approximately equal.
    pub fn gt_eq<V: ApproxOrd<Scalar = T>>(self, a: V, b: V) -> bool {
        self.cmp(a, b) != Ordering::Less
    }
}
