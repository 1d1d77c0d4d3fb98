// Compute the winding of a closed outline.

use crate::geom::LineSegment;
use crate::path::Anchor;

/// The two possible orientations of a closed outline.
///
/// Positive winding corresponds to a non-negative signed area, the positive
/// orientation in trigonometry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Winding {
    Positive,
    Negative,
}

impl Winding {
    /// `1.0` for positive winding, `-1.0` for negative winding.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Winding::Positive => 1.0,
            Winding::Negative => -1.0,
        }
    }
}

/// Compute the winding of a closed sequence of anchors.
///
/// Only anchor positions are considered, handles are ignored. The signed area is
/// computed with the shoelace formula, a zero area counts as positive.
pub fn compute_winding(anchors: &[Anchor]) -> Winding {
    let n = anchors.len();
    let mut double_area = 0.0;
    for i in 0..n {
        let edge = LineSegment {
            from: anchors[i].position,
            to: anchors[(i + 1) % n].position,
        };
        double_area += edge.shoelace_term();
    }

    if double_area >= 0.0 {
        Winding::Positive
    } else {
        Winding::Negative
    }
}

#[cfg(test)]
use crate::{math::point, Path};

#[test]
fn square_winding() {
    let square = [
        Anchor::corner(point(0.0, 0.0)),
        Anchor::corner(point(1.0, 0.0)),
        Anchor::corner(point(1.0, 1.0)),
        Anchor::corner(point(0.0, 1.0)),
    ];

    assert_eq!(compute_winding(&square), Winding::Positive);

    let mut reversed = square;
    reversed.reverse();
    assert_eq!(compute_winding(&reversed), Winding::Negative);
}

#[test]
fn degenerate_winding() {
    assert_eq!(compute_winding(&[]), Winding::Positive);

    let flat = [
        Anchor::corner(point(0.0, 0.0)),
        Anchor::corner(point(5.0, 0.0)),
    ];
    assert_eq!(compute_winding(&flat), Winding::Positive);
}

#[test]
fn open_paths_are_positive() {
    let anchors = vec![
        Anchor::corner(point(0.0, 1.0)),
        Anchor::corner(point(1.0, 1.0)),
        Anchor::corner(point(1.0, 0.0)),
    ];
    let closed = Path::new(anchors.clone(), true);
    let open = Path::new(anchors, false);

    assert_eq!(closed.winding(), Winding::Negative);
    assert_eq!(closed.reversed().winding(), Winding::Positive);
    assert_eq!(open.winding(), Winding::Positive);
    assert_eq!(open.reversed().winding(), Winding::Positive);
}
