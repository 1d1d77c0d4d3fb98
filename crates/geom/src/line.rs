use crate::scalar::Scalar;
use crate::{unit_normal, Point, Vector};

/// A linear segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment<S> {
    pub from: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> LineSegment<S> {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        self.from.lerp(self.to, t)
    }

    #[inline]
    pub fn to_vector(&self) -> Vector<S> {
        self.to - self.from
    }

    #[inline]
    pub fn length(&self) -> S {
        self.to_vector().length()
    }

    /// Unit normal of the segment, the direction rotated by 90° counter-clockwise.
    ///
    /// Returns `None` if the segment has zero length.
    #[inline]
    pub fn normal(&self) -> Option<Vector<S>> {
        unit_normal(self.to_vector())
    }

    /// Returns an inverted version of this segment where the beginning and the end
    /// points are swapped.
    #[inline]
    pub fn flip(&self) -> Self {
        LineSegment {
            from: self.to,
            to: self.from,
        }
    }

    /// Signed area contribution of this segment to the shoelace sum.
    ///
    /// Summing this over the edges of a closed polygon gives twice its signed area.
    #[inline]
    pub fn shoelace_term(&self) -> S {
        self.from.x * self.to.y - self.to.x * self.from.y
    }
}

#[cfg(test)]
use crate::{point, vector};

#[test]
fn sample_midpoint() {
    let l = LineSegment {
        from: point(0.0, 0.0),
        to: point(10.0, 4.0),
    };

    assert_eq!(l.sample(0.5), point(5.0, 2.0));
    assert_eq!(l.length(), (116.0f64).sqrt());
}

#[test]
fn normal_and_flip() {
    let l = LineSegment {
        from: point(0.0, 0.0),
        to: point(0.0, 5.0),
    };

    assert_eq!(l.normal(), Some(vector(-1.0, 0.0)));
    assert_eq!(l.flip().normal(), Some(vector(1.0, 0.0)));

    let empty = LineSegment {
        from: point(1.0, 1.0),
        to: point(1.0, 1.0),
    };
    assert_eq!(empty.normal(), None);
}
