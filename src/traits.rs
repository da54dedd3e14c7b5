//! Common traits related to approximate equality.

use std::cmp::Ordering;
use std::fmt;

use crate::real::Real;
use crate::tolerance::Tolerance;

/// Trait for types that can be approximately compared for equality with
/// each other.
pub trait ApproxEq: fmt::Debug {
    /// Scalar type whose tolerance governs the comparison.
    type Scalar: Real;

    /// Returns whether `self` and `other` are approximately equal according
    /// to the tolerance.
    fn approx_eq(&self, other: &Self, tol: Tolerance<Self::Scalar>) -> bool;
}
impl ApproxEq for f64 {
    type Scalar = f64;

    fn approx_eq(&self, other: &Self, tol: Tolerance<f64>) -> bool {
        tol.scalar_eq(*self, *other)
    }
}
impl ApproxEq for f32 {
    type Scalar = f32;

    fn approx_eq(&self, other: &Self, tol: Tolerance<f32>) -> bool {
        tol.scalar_eq(*self, *other)
    }
}
impl<T: ApproxEq> ApproxEq for [T] {
    type Scalar = T::Scalar;

    fn approx_eq(&self, other: &Self, tol: Tolerance<T::Scalar>) -> bool {
        self.len() == other.len() && std::iter::zip(self, other).all(|(a, b)| a.approx_eq(b, tol))
    }
}
impl<T: ApproxEq, const N: usize> ApproxEq for [T; N] {
    type Scalar = T::Scalar;

    fn approx_eq(&self, other: &Self, tol: Tolerance<T::Scalar>) -> bool {
        <[T]>::approx_eq(self, other, tol)
    }
}
impl<T: ApproxEq> ApproxEq for Vec<T> {
    type Scalar = T::Scalar;

    fn approx_eq(&self, other: &Self, tol: Tolerance<T::Scalar>) -> bool {
        <[T]>::approx_eq(self, other, tol)
    }
}
impl<T: ApproxEq> ApproxEq for Box<T> {
    type Scalar = T::Scalar;

    fn approx_eq(&self, other: &Self, tol: Tolerance<T::Scalar>) -> bool {
        T::approx_eq(self, other, tol)
    }
}
impl<T: ApproxEq + ?Sized> ApproxEq for &T {
    type Scalar = T::Scalar;

    fn approx_eq(&self, other: &Self, tol: Tolerance<T::Scalar>) -> bool {
        T::approx_eq(self, other, tol)
    }
}

/// Trait for types that can be approximately ordered with each other.
///
/// Approximately-equal values are [`Ordering::Equal`]; everything else
/// falls back to a total order, so NaN sorts to the extremes rather than
/// poisoning the comparison.
pub trait ApproxOrd: ApproxEq {
    /// Returns the ordering relation between `self` and `other` according
    /// to the tolerance.
    fn approx_cmp(&self, other: &Self, tol: Tolerance<Self::Scalar>) -> Ordering;
}
impl ApproxOrd for f64 {
    fn approx_cmp(&self, other: &Self, tol: Tolerance<f64>) -> Ordering {
        match self.approx_eq(other, tol) {
            true => Ordering::Equal,
            false => self.total_cmp(other),
        }
    }
}
impl ApproxOrd for f32 {
    fn approx_cmp(&self, other: &Self, tol: Tolerance<f32>) -> Ordering {
        match self.approx_eq(other, tol) {
            true => Ordering::Equal,
            false => self.total_cmp(other),
        }
    }
}
impl<T: ApproxOrd> ApproxOrd for [T] {
    fn approx_cmp(&self, other: &Self, tol: Tolerance<T::Scalar>) -> Ordering {
        std::iter::zip(self, other)
            .map(|(a, b)| a.approx_cmp(b, tol))
            .find(|&ord| ord != Ordering::Equal)
            .unwrap_or_else(|| self.len().cmp(&other.len()))
    }
}
impl<T: ApproxOrd, const N: usize> ApproxOrd for [T; N] {
    fn approx_cmp(&self, other: &Self, tol: Tolerance<T::Scalar>) -> Ordering {
        <[T]>::approx_cmp(self, other, tol)
    }
}
impl<T: ApproxOrd> ApproxOrd for Vec<T> {
    fn approx_cmp(&self, other: &Self, tol: Tolerance<T::Scalar>) -> Ordering {
        <[T]>::approx_cmp(self, other, tol)
    }
}
impl<T: ApproxOrd> ApproxOrd for Box<T> {
    fn approx_cmp(&self, other: &Self, tol: Tolerance<T::Scalar>) -> Ordering {
        T::approx_cmp(self, other, tol)
    }
}
impl<T: ApproxOrd + ?Sized> ApproxOrd for &T {
    fn approx_cmp(&self, other: &Self, tol: Tolerance<T::Scalar>) -> Ordering {
        T::approx_cmp(self, other, tol)
    }
}
