//! Anchors, paths and compound paths.

use crate::builder::PathBuilder;
use crate::geom::CubicBezierSegment;
use crate::math::Point;
use crate::winding::{compute_winding, Winding};

use std::iter::FusedIterator;

/// A point on an outline together with its two bézier handles.
///
/// A handle that sits exactly on the anchor's position is retracted.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Anchor {
    /// Handle controlling the segment that ends at this anchor.
    pub incoming: Point,
    pub position: Point,
    /// Handle controlling the segment that starts at this anchor.
    pub outgoing: Point,
}

impl Anchor {
    #[inline]
    pub fn new(incoming: Point, position: Point, outgoing: Point) -> Self {
        Anchor {
            incoming,
            position,
            outgoing,
        }
    }

    /// An anchor with both handles retracted.
    #[inline]
    pub fn corner(position: Point) -> Self {
        Anchor {
            incoming: position,
            position,
            outgoing: position,
        }
    }

    /// Swaps the incoming and outgoing handles.
    #[inline]
    pub fn flipped(&self) -> Self {
        Anchor {
            incoming: self.outgoing,
            position: self.position,
            outgoing: self.incoming,
        }
    }
}

/// A simple (single contour) outline.
///
/// The segment between the last and the first anchor only exists if the path
/// is closed.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    pub anchors: Vec<Anchor>,
    pub closed: bool,
}

impl Path {
    #[inline]
    pub fn new(anchors: Vec<Anchor>, closed: bool) -> Self {
        Path { anchors, closed }
    }

    /// Creates a path builder.
    #[inline]
    pub fn builder() -> PathBuilder {
        PathBuilder::new()
    }

    #[inline]
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Number of bézier segments in this path.
    ///
    /// Paths with less than two anchors have no segment.
    pub fn num_segments(&self) -> usize {
        let n = self.anchors.len();
        if n < 2 {
            0
        } else if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Returns the segment starting at anchor `index`.
    pub fn segment(&self, index: usize) -> Option<PathSegment> {
        if index >= self.num_segments() {
            return None;
        }

        let n = self.anchors.len();
        let from = &self.anchors[index];
        let to = &self.anchors[(index + 1) % n];

        Some(PathSegment {
            index,
            curve: CubicBezierSegment {
                from: from.position,
                ctrl1: from.outgoing,
                ctrl2: to.incoming,
                to: to.position,
            },
        })
    }

    /// Index of the segment that ends where segment `index` starts.
    ///
    /// Wraps around on closed paths, returns `None` at the start of open paths.
    pub fn previous_segment(&self, index: usize) -> Option<usize> {
        let n = self.num_segments();
        if index >= n {
            return None;
        }

        if index > 0 {
            Some(index - 1)
        } else if self.closed {
            Some(n - 1)
        } else {
            None
        }
    }

    /// Index of the segment that starts where segment `index` ends.
    ///
    /// Wraps around on closed paths, returns `None` at the end of open paths.
    pub fn next_segment(&self, index: usize) -> Option<usize> {
        let n = self.num_segments();
        if index >= n {
            return None;
        }

        if index + 1 < n {
            Some(index + 1)
        } else if self.closed {
            Some(0)
        } else {
            None
        }
    }

    /// Iterates over the segments of this path in traversal order.
    #[inline]
    pub fn segments(&self) -> Segments {
        Segments {
            path: self,
            index: 0,
        }
    }

    /// The winding of this path.
    ///
    /// Open paths have no orientation and are always considered positive.
    pub fn winding(&self) -> Winding {
        if self.closed {
            compute_winding(&self.anchors)
        } else {
            Winding::Positive
        }
    }

    /// Returns the same outline traversed in the opposite direction.
    pub fn reversed(&self) -> Path {
        Path {
            anchors: self.anchors.iter().rev().map(Anchor::flipped).collect(),
            closed: self.closed,
        }
    }
}

/// One cubic bézier segment of a path.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PathSegment {
    /// Index of the anchor this segment starts at.
    pub index: usize,
    pub curve: CubicBezierSegment<f64>,
}

impl PathSegment {
    /// A segment is straight when both of its handles are retracted.
    #[inline]
    pub fn is_straight(&self) -> bool {
        self.curve.is_straight()
    }
}

/// Iterator over the segments of a `Path`.
#[derive(Clone)]
pub struct Segments<'l> {
    path: &'l Path,
    index: usize,
}

impl<'l> Iterator for Segments<'l> {
    type Item = PathSegment;

    fn next(&mut self) -> Option<PathSegment> {
        let segment = self.path.segment(self.index)?;
        self.index += 1;
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.path.num_segments().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<'l> ExactSizeIterator for Segments<'l> {}
impl<'l> FusedIterator for Segments<'l> {}

/// A group of simple paths selected and processed as one unit.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CompoundPath {
    pub paths: Vec<Path>,
}

impl CompoundPath {
    #[inline]
    pub fn new(paths: Vec<Path>) -> Self {
        CompoundPath { paths }
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<Path> {
        self.paths.iter()
    }
}

/// An item of a selection: either a simple path or a compound path.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathItem {
    Simple(Path),
    Compound(CompoundPath),
}

impl From<Path> for PathItem {
    fn from(path: Path) -> Self {
        PathItem::Simple(path)
    }
}

impl From<CompoundPath> for PathItem {
    fn from(compound: CompoundPath) -> Self {
        PathItem::Compound(compound)
    }
}

#[cfg(test)]
use crate::math::point;

#[cfg(test)]
fn triangle(closed: bool) -> Path {
    Path::new(
        vec![
            Anchor::corner(point(0.0, 0.0)),
            Anchor::corner(point(10.0, 0.0)),
            Anchor::new(point(10.0, 5.0), point(5.0, 10.0), point(5.0, 10.0)),
        ],
        closed,
    )
}

#[test]
fn segment_count() {
    assert_eq!(triangle(true).num_segments(), 3);
    assert_eq!(triangle(false).num_segments(), 2);
    assert_eq!(Path::new(vec![Anchor::corner(point(1.0, 1.0))], true).num_segments(), 0);
    assert_eq!(Path::default().segments().count(), 0);
}

#[test]
fn segments_use_handles() {
    let path = triangle(true);
    let segments: Vec<PathSegment> = path.segments().collect();

    assert_eq!(segments.len(), 3);
    assert!(segments[0].is_straight());
    assert!(!segments[1].is_straight());
    assert_eq!(segments[1].curve.ctrl2, point(10.0, 5.0));
    // The closing segment goes back to the first anchor.
    assert_eq!(segments[2].curve.from, point(5.0, 10.0));
    assert_eq!(segments[2].curve.to, point(0.0, 0.0));
    assert!(segments[2].is_straight());
}

#[test]
fn neighbors() {
    let closed = triangle(true);
    assert_eq!(closed.previous_segment(0), Some(2));
    assert_eq!(closed.next_segment(2), Some(0));
    assert_eq!(closed.next_segment(0), Some(1));

    let open = triangle(false);
    assert_eq!(open.previous_segment(0), None);
    assert_eq!(open.previous_segment(1), Some(0));
    assert_eq!(open.next_segment(1), None);
    assert_eq!(open.next_segment(5), None);
}

#[test]
fn reversed_path() {
    let path = triangle(false);
    let reversed = path.reversed();

    assert_eq!(reversed.anchors[0].position, point(5.0, 10.0));
    assert_eq!(reversed.anchors[0].outgoing, point(10.0, 5.0));

    let forward: Vec<_> = path.segments().map(|s| s.curve).collect();
    let backward: Vec<_> = reversed.segments().map(|s| s.curve.flip()).collect();
    assert_eq!(forward.len(), backward.len());
    assert_eq!(forward[0], backward[1]);
    assert_eq!(forward[1], backward[0]);
}
