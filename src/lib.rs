//! Relaxed floating-point comparisons.
//!
//! [`Tolerance`] is the basic struct used by everything in this crate: an
//! absolute plus a relative allowance under which two floats compare equal.
//!
//! The [`relaxed!`] macro rewrites a relaxed-comparison expression into the
//! expanded tolerance comparison at compile time.
//!
//! For implementing approximate comparison on your own types, see
//! [`ApproxEq`] and [`ApproxOrd`]. For adding new scalar types, see
//! [`Real`].
//!
//! # Example
//!
//! ```
//! # use relaxed::*;
//! assert_ne!(0.1 + 0.2, 0.3_f64);
//! assert!(relaxed!(0.1 + 0.2 == 0.3));
//! assert!(relaxed!(1.0, 1.0000001, 0.001));
//! assert!(Tolerance::absolute(0.5).eq(1.0, 1.2));
//! ```
//!
//! # NaN and infinities
//!
//! NaN never compares approximately equal to anything, including itself.
//! Equal infinities compare equal; an infinity is never approximately equal
//! to any finite value. See [`Tolerance`] for the exact comparison rule.

pub mod real;
pub mod tolerance;
pub mod traits;

pub use real::Real;
pub use tolerance::Tolerance;
pub use traits::*;

pub use relaxed_macros::relaxed;
