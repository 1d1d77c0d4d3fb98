#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::many_single_char_names)]
#![no_std]

//! Cubic bézier math on top of euclid.
//!
//! This crate is reexported in [speedpunk](../speedpunk/index.html).
//!
//! # Overview.
//!
//! This crate implements the differential geometry needed to draw curvature
//! combs along an outline:
//!
//! - position of a cubic bézier curve at a parameter `t`,
//! - first derivative (the unnormalized tangent) and second derivative,
//! - unsigned curvature `κ = |x′y″ − y′x″| / (x′² + y′²)^1.5`,
//! - line segments, used for the degenerate "straight" cubics whose handles
//!   sit on their endpoints.
//!
//! # Degenerate inputs
//!
//! Curvature is defined as `0` wherever the first derivative vanishes (straight
//! curves have no bending, and cusps have no defined tangent). None of the
//! functions of this crate ever produce `NaN` or an infinite value from finite
//! inputs.

#[cfg(any(test, feature = "std"))]
extern crate std;

// Reexport dependencies.
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod cubic_bezier;
mod line;

#[doc(inline)]
pub use crate::cubic_bezier::CubicBezierSegment;
#[doc(inline)]
pub use crate::line::LineSegment;

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use num_traits::{Float, NumCast};

    use core::fmt::{Debug, Display};
    use core::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float + NumCast + Sized + Display + Debug + AddAssign + SubAssign + MulAssign + DivAssign
    {
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;
        const THREE: Self;
        const SIX: Self;

        /// Exponent of the curvature denominator `(x′² + y′²)^1.5`.
        const ONE_AND_HALF: Self;
    }

    impl Scalar for f32 {
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const SIX: Self = 6.0;
        const ONE_AND_HALF: Self = 1.5;
    }

    impl Scalar for f64 {
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const SIX: Self = 6.0;
        const ONE_AND_HALF: Self = 1.5;
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Alias for `euclid::default::Vector2D`.
pub use euclid::default::Vector2D as Vector;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector<S>(x: S, y: S) -> Vector<S> {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}

/// Returns the left-hand unit normal of `v`, `(-v.y, v.x) / |v|`.
///
/// Returns `None` when `v` has zero length.
#[inline]
pub fn unit_normal<S: Scalar>(v: Vector<S>) -> Option<Vector<S>> {
    let length = v.length();
    if length == S::ZERO || !length.is_finite() {
        return None;
    }

    Some(vector(-v.y / length, v.x / length))
}

#[test]
fn unit_normal_of_axes() {
    assert_eq!(unit_normal(vector(2.0, 0.0)), Some(vector(-0.0, 1.0)));
    assert_eq!(unit_normal(vector(0.0, -3.0)), Some(vector(1.0, 0.0)));
    assert_eq!(unit_normal::<f64>(vector(0.0, 0.0)), None);
}
