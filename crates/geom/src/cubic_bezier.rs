use crate::scalar::Scalar;
use crate::{unit_normal, LineSegment, Point, Vector};

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl1: Point<S>,
    pub ctrl2: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> CubicBezierSegment<S> {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from * one_t3
            + self.ctrl1.to_vector() * S::THREE * one_t2 * t
            + self.ctrl2.to_vector() * S::THREE * one_t * t2
            + self.to.to_vector() * t3
    }

    /// Sample the curve's derivative at t (expecting t between 0 and 1).
    ///
    /// This is the unnormalized tangent of the curve.
    pub fn derivative(&self, t: S) -> Vector<S> {
        let one_t = S::ONE - t;
        (self.ctrl1 - self.from) * (S::THREE * one_t * one_t)
            + (self.ctrl2 - self.ctrl1) * (S::SIX * one_t * t)
            + (self.to - self.ctrl2) * (S::THREE * t * t)
    }

    /// Sample the curve's second derivative at t (expecting t between 0 and 1).
    ///
    /// `P″(t) = 6 * ((1 - t) * (from - 2 * ctrl1 + ctrl2) + t * (ctrl1 - 2 * ctrl2 + to))`
    pub fn second_derivative(&self, t: S) -> Vector<S> {
        let a = self.from.to_vector() - self.ctrl1.to_vector() * S::TWO + self.ctrl2.to_vector();
        let b = self.ctrl1.to_vector() - self.ctrl2.to_vector() * S::TWO + self.to.to_vector();

        (a * (S::ONE - t) + b * t) * S::SIX
    }

    /// Unsigned curvature of the curve at t.
    ///
    /// Returns zero where the derivative vanishes or when the computation
    /// would not produce a finite value.
    pub fn curvature(&self, t: S) -> S {
        let d = self.derivative(t);
        let dd = self.second_derivative(t);

        let denominator = d.square_length().powf(S::ONE_AND_HALF);
        if denominator == S::ZERO {
            return S::ZERO;
        }

        let k = d.cross(dd).abs() / denominator;
        if k.is_finite() {
            k
        } else {
            S::ZERO
        }
    }

    /// Unit normal at t, the derivative rotated by 90° counter-clockwise.
    ///
    /// Returns `None` where the derivative vanishes.
    #[inline]
    pub fn normal(&self, t: S) -> Option<Vector<S>> {
        unit_normal(self.derivative(t))
    }

    /// Returns true if both control points sit exactly on their endpoints.
    ///
    /// Such a curve is a line segment. The comparison is exact on purpose: a
    /// handle pulled out by any amount makes a curve.
    #[inline]
    pub fn is_straight(&self) -> bool {
        self.ctrl1 == self.from && self.ctrl2 == self.to
    }

    /// Returns the line segment between the endpoints of this curve.
    #[inline]
    pub fn baseline(&self) -> LineSegment<S> {
        LineSegment {
            from: self.from,
            to: self.to,
        }
    }

    /// Returns a curve covering the same points in the opposite direction.
    #[inline]
    pub fn flip(&self) -> Self {
        CubicBezierSegment {
            from: self.to,
            ctrl1: self.ctrl2,
            ctrl2: self.ctrl1,
            to: self.from,
        }
    }
}

#[cfg(test)]
use crate::point;

#[cfg(test)]
fn quarter_circle(radius: f64) -> CubicBezierSegment<f64> {
    // Standard circle approximation constant.
    let k = 0.552_284_749_830_793_4 * radius;
    CubicBezierSegment {
        from: point(radius, 0.0),
        ctrl1: point(radius, k),
        ctrl2: point(k, radius),
        to: point(0.0, radius),
    }
}

#[test]
fn sample_endpoints() {
    let c = quarter_circle(10.0);
    assert_eq!(c.sample(0.0), c.from);
    assert_eq!(c.sample(1.0), c.to);
}

#[test]
fn derivative_at_endpoints() {
    let c = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(1.0, 0.0),
        ctrl2: point(2.0, 1.0),
        to: point(2.0, 2.0),
    };

    assert_eq!(c.derivative(0.0), (c.ctrl1 - c.from) * 3.0);
    assert_eq!(c.derivative(1.0), (c.to - c.ctrl2) * 3.0);
}

#[test]
fn second_derivative_matches_finite_differences() {
    let c = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(3.0, 7.0),
        ctrl2: point(9.0, -4.0),
        to: point(12.0, 2.0),
    };

    let h = 1e-5;
    for &t in &[0.1, 0.35, 0.5, 0.8] {
        let expected = (c.derivative(t + h) - c.derivative(t - h)) / (2.0 * h);
        let actual = c.second_derivative(t);
        assert!((expected - actual).length() < 1e-4, "{:?} != {:?}", expected, actual);
    }
}

#[test]
fn curvature_of_circle_approximation() {
    let radius = 50.0;
    let c = quarter_circle(radius);
    for i in 0..=20 {
        let t = i as f64 / 20.0;
        let k = c.curvature(t);
        // The cubic approximation of a circle deviates from the true radius by
        // less than 0.03%, the curvature error stays within a few percent.
        assert!((k * radius - 1.0).abs() < 0.05, "t = {}, k = {}", t, k);
    }
}

#[test]
fn curvature_of_straight_curve_is_zero() {
    let c = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(0.0, 0.0),
        ctrl2: point(10.0, 0.0),
        to: point(10.0, 0.0),
    };

    assert!(c.is_straight());
    assert_eq!(c.curvature(0.5), 0.0);
}

#[test]
fn curvature_of_degenerate_curve_is_zero() {
    let p = point(3.0, 4.0);
    let c = CubicBezierSegment {
        from: p,
        ctrl1: p,
        ctrl2: p,
        to: p,
    };

    for &t in &[0.0, 0.5, 1.0] {
        let k: f64 = c.curvature(t);
        assert_eq!(k, 0.0);
        assert!(!k.is_nan());
    }
    assert_eq!(c.normal(0.5), None);
}

#[test]
fn curvature_with_retracted_handle() {
    // ctrl2 == to: the derivative vanishes at t = 1.
    let c = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(5.0, 5.0),
        ctrl2: point(10.0, 0.0),
        to: point(10.0, 0.0),
    };

    assert!(!c.is_straight());
    assert_eq!(c.curvature(1.0), 0.0);
    assert!(c.curvature(0.5) > 0.0);
}

#[test]
fn curvature_is_non_negative_both_ways() {
    let c = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(1.0, 3.0),
        ctrl2: point(4.0, -3.0),
        to: point(5.0, 0.0),
    };
    let flipped = c.flip();

    for i in 0..=10 {
        let t = i as f64 / 10.0;
        let k = c.curvature(t);
        assert!(k >= 0.0 && k.is_finite());
        assert!((k - flipped.curvature(1.0 - t)).abs() < 1e-9);
    }
}

#[test]
fn normal_is_unit_length() {
    let c = quarter_circle(3.0);
    for i in 0..=10 {
        let n = c.normal(i as f64 / 10.0).unwrap();
        assert!((n.length() - 1.0).abs() < 1e-12);
    }
}
