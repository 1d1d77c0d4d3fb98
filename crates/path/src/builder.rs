//! Path building utilities.
//!
//! ## Example
//!
//! ```
//! use speedpunk_path::{Path, math::point};
//!
//! let mut builder = Path::builder();
//!
//! // All sub-paths *must* be contained in a begin/end pair.
//! builder.begin(point(0.0, 0.0));
//! builder.line_to(point(1.0, 0.0));
//! builder.cubic_bezier_to(point(2.0, 0.0), point(2.0, 1.0), point(1.0, 1.0));
//! builder.end(false);
//!
//! builder.begin(point(10.0, 0.0));
//! builder.cubic_bezier_to(point(12.0, 2.0), point(11.0, 2.0), point(5.0, 0.0));
//! builder.close(); // close() is equivalent to end(true).
//!
//! let compound = builder.build();
//! assert_eq!(compound.paths.len(), 2);
//! ```

use crate::math::Point;
use crate::path::{Anchor, CompoundPath, Path};

/// Builds a `CompoundPath`, one `Path` per sub-path.
///
/// Segments are described the way SVG path data describes them and are
/// converted into anchors with incoming and outgoing handles.
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    paths: Vec<Path>,
    anchors: Vec<Anchor>,
    in_sub_path: bool,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new sub-path at `at`.
    ///
    /// If a sub-path is in progress it is ended without closing it.
    pub fn begin(&mut self, at: Point) {
        if self.in_sub_path {
            self.end(false);
        }

        self.anchors.push(Anchor::corner(at));
        self.in_sub_path = true;
    }

    /// Adds a straight segment to `to`.
    pub fn line_to(&mut self, to: Point) {
        if !self.in_sub_path {
            self.begin(to);
            return;
        }

        self.anchors.push(Anchor::corner(to));
    }

    /// Adds a cubic bézier segment to `to`.
    pub fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        if !self.in_sub_path {
            self.begin(to);
            return;
        }

        if let Some(last) = self.anchors.last_mut() {
            last.outgoing = ctrl1;
        }
        self.anchors.push(Anchor::new(ctrl2, to, to));
    }

    /// Ends the current sub-path.
    ///
    /// When closing a sub-path whose last anchor lands exactly on the first one,
    /// the two anchors are merged and the last segment becomes the closing segment.
    /// A sub-path is never merged below two anchors, so a single curve looping
    /// back onto its start keeps its segment.
    pub fn end(&mut self, close: bool) {
        if !self.in_sub_path {
            return;
        }
        self.in_sub_path = false;

        let mut anchors = std::mem::take(&mut self.anchors);
        if close && anchors.len() > 2 {
            let last = anchors[anchors.len() - 1];
            if last.position == anchors[0].position {
                anchors[0].incoming = last.incoming;
                anchors.pop();
            }
        }

        self.paths.push(Path::new(anchors, close));
    }

    /// Equivalent to `end(true)`.
    #[inline]
    pub fn close(&mut self) {
        self.end(true);
    }

    /// Ends any pending sub-path and returns the built paths.
    pub fn build(mut self) -> CompoundPath {
        self.end(false);
        CompoundPath::new(self.paths)
    }
}

#[cfg(test)]
use crate::math::point;

#[test]
fn open_and_closed_sub_paths() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(10.0, 0.0));
    builder.end(false);

    builder.begin(point(0.0, 0.0));
    builder.line_to(point(10.0, 0.0));
    builder.line_to(point(10.0, 10.0));
    builder.close();

    let compound = builder.build();
    assert_eq!(compound.paths.len(), 2);
    assert!(!compound.paths[0].closed);
    assert_eq!(compound.paths[0].num_segments(), 1);
    assert!(compound.paths[1].closed);
    assert_eq!(compound.paths[1].num_segments(), 3);
}

#[test]
fn cubic_handles() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.cubic_bezier_to(point(1.0, 2.0), point(3.0, 2.0), point(4.0, 0.0));
    let compound = builder.build();

    let path = &compound.paths[0];
    assert_eq!(path.anchors[0].outgoing, point(1.0, 2.0));
    assert_eq!(path.anchors[1].incoming, point(3.0, 2.0));
    assert_eq!(path.anchors[1].outgoing, point(4.0, 0.0));

    let segment = path.segment(0).unwrap();
    assert!(!segment.is_straight());
}

#[test]
fn closing_on_first_anchor_merges() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.cubic_bezier_to(point(5.0, -5.0), point(10.0, -5.0), point(10.0, 0.0));
    builder.cubic_bezier_to(point(10.0, 5.0), point(0.0, 5.0), point(0.0, 0.0));
    builder.close();
    let compound = builder.build();

    let path = &compound.paths[0];
    assert_eq!(path.len(), 2);
    assert_eq!(path.anchors[0].incoming, point(0.0, 5.0));
    assert_eq!(path.num_segments(), 2);
    assert_eq!(path.segment(1).unwrap().curve.ctrl1, point(10.0, 5.0));
}

#[test]
fn begin_ends_pending_sub_path() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(1.0, 0.0));
    builder.begin(point(5.0, 5.0));
    builder.line_to(point(6.0, 5.0));
    let compound = builder.build();

    assert_eq!(compound.paths.len(), 2);
    assert!(compound.paths.iter().all(|p| !p.closed && p.len() == 2));
}

#[test]
fn single_curve_loop_keeps_its_segment() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.cubic_bezier_to(point(50.0, 50.0), point(-50.0, 50.0), point(0.0, 0.0));
    builder.close();
    let compound = builder.build();

    let path = &compound.paths[0];
    assert!(path.closed);
    assert_eq!(path.len(), 2);
    assert_eq!(path.num_segments(), 2);

    let curve = path.segment(0).unwrap().curve;
    assert_eq!(curve.ctrl1, point(50.0, 50.0));
    assert_eq!(curve.ctrl2, point(-50.0, 50.0));
    assert!(!curve.is_straight());
}
