//! Sampling of comb positions and raw comb lengths along a path.
//!
//! Curved segments are sampled at a fixed parametric step and their comb length
//! is the curvature at each sample scaled by the magnitude factor.
//!
//! Straight segments have no curvature of their own. Instead they receive evenly
//! spaced ticks whose length is inferred from the curved segments on either side:
//! the smaller of the curvature at the end of the previous segment and at the
//! start of the next one. A straight segment with no curved neighbor produces
//! no tick at all.

use crate::error::DegenerateSegment;
use crate::options::CombOptions;
use crate::path::math::{Point, Vector};
use crate::path::{Path, PathSegment, Winding};

use log::{debug, trace};

/// Whether a sample measures curvature or is inferred from neighboring curves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum SampleKind {
    Curved,
    Straight,
}

/// A point along a path where a comb tick originates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Sample {
    pub position: Point,
    /// Unit length, perpendicular to the local tangent.
    pub normal: Vector,
    /// Comb length before smoothing.
    pub length: f64,
    pub kind: SampleKind,
    /// Winding of the path the sample belongs to.
    pub winding: Winding,
}

impl Sample {
    #[inline]
    pub fn is_straight(&self) -> bool {
        self.kind == SampleKind::Straight
    }
}

/// The parameter values at which curved segments are sampled: `0, step, 2 * step, …`
/// up to and including `1` when `step` divides it.
pub fn sample_parameters(step: f64) -> impl Iterator<Item = f64> {
    // The epsilon absorbs the rounding of 1 / step so that steps like 0.05 reach t = 1.
    let count = (1.0 / step + 1e-9).floor() as usize;
    (0..=count).map(move |i| (i as f64 * step).min(1.0))
}

/// Number of interior ticks on a straight segment of a given length.
pub fn straight_tick_count(length: f64, tick_spacing: f64) -> usize {
    let ticks = (length / tick_spacing).round() - 1.0;
    if ticks > 1.0 {
        ticks as usize
    } else {
        1
    }
}

/// Comb length for the ticks of the straight segment at `index`, or `None`
/// if neither neighbor is curved.
pub fn straight_tick_length(path: &Path, index: usize, magnitude_scale: f64) -> Option<f64> {
    let curved = |i: usize| path.segment(i).filter(|s| !s.is_straight());

    let before = path
        .previous_segment(index)
        .and_then(curved)
        .map(|s| s.curve.curvature(1.0));
    let after = path
        .next_segment(index)
        .and_then(curved)
        .map(|s| s.curve.curvature(0.0));

    let curvature = match (before, after) {
        (Some(a), Some(b)) => a.min(b),
        (Some(k), None) | (None, Some(k)) => k,
        (None, None) => return None,
    };

    Some(curvature * magnitude_scale)
}

/// Generates the samples of a single path in traversal order.
///
/// `path_index` is only used to identify degenerate segments.
/// Samples are appended to `output`; the degenerate segments that were skipped
/// are returned.
pub fn sample_path(
    path: &Path,
    path_index: usize,
    options: &CombOptions,
    output: &mut Vec<Sample>,
) -> Vec<DegenerateSegment> {
    let winding = path.winding();
    let mut skipped = Vec::new();

    for segment in path.segments() {
        let produced = if segment.is_straight() {
            sample_straight_segment(path, &segment, winding, options, output)
        } else {
            sample_curved_segment(&segment, winding, options, output)
        };

        if produced.is_none() {
            let degenerate = DegenerateSegment {
                path: path_index,
                segment: segment.index,
            };
            debug!("{degenerate}");
            skipped.push(degenerate);
        }
    }

    skipped
}

// Returns `None` if the segment has zero length.
fn sample_straight_segment(
    path: &Path,
    segment: &PathSegment,
    winding: Winding,
    options: &CombOptions,
    output: &mut Vec<Sample>,
) -> Option<usize> {
    let line = segment.curve.baseline();
    let normal = line.normal()?;

    let length = match straight_tick_length(path, segment.index, options.magnitude_scale) {
        Some(length) => length,
        None => {
            trace!("straight segment {} has no curved neighbor", segment.index);
            return Some(0);
        }
    };

    let ticks = straight_tick_count(line.length(), options.tick_spacing);
    for j in 1..=ticks {
        let r = j as f64 / (ticks + 1) as f64;
        output.push(Sample {
            position: line.sample(r),
            normal,
            length,
            kind: SampleKind::Straight,
            winding,
        });
    }

    Some(ticks)
}

// Returns `None` if the curve has no tangent at any of the sampled parameters.
fn sample_curved_segment(
    segment: &PathSegment,
    winding: Winding,
    options: &CombOptions,
    output: &mut Vec<Sample>,
) -> Option<usize> {
    let curve = &segment.curve;
    let mut produced = 0;
    for t in sample_parameters(options.step) {
        let normal = match curve.normal(t) {
            Some(normal) => normal,
            None => {
                trace!("no tangent at t = {t} on segment {}", segment.index);
                continue;
            }
        };

        output.push(Sample {
            position: curve.sample(t),
            normal,
            length: curve.curvature(t) * options.magnitude_scale,
            kind: SampleKind::Curved,
            winding,
        });
        produced += 1;
    }

    if produced == 0 {
        return None;
    }

    Some(produced)
}

#[cfg(test)]
use crate::path::{math::point, Anchor};

#[cfg(test)]
fn line(from: Point, to: Point) -> Path {
    Path::new(vec![Anchor::corner(from), Anchor::corner(to)], false)
}

#[test]
fn parameters() {
    let ts: Vec<f64> = sample_parameters(0.25).collect();
    assert_eq!(ts, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

    let ts: Vec<f64> = sample_parameters(0.05).collect();
    assert_eq!(ts.len(), 21);
    assert_eq!(*ts.last().unwrap(), 1.0);

    let ts: Vec<f64> = sample_parameters(0.3).collect();
    assert_eq!(ts.len(), 4);
    assert!(ts.iter().all(|t| *t <= 1.0));

    let ts: Vec<f64> = sample_parameters(2.0).collect();
    assert_eq!(ts, vec![0.0]);
}

#[test]
fn tick_counts() {
    assert_eq!(straight_tick_count(10.0, 5.0), 1);
    assert_eq!(straight_tick_count(100.0, 12.0), 7);
    assert_eq!(straight_tick_count(1.0, 12.0), 1);
    assert_eq!(straight_tick_count(60.0, 10.0), 5);
}

#[test]
fn lone_straight_segment_has_no_samples() {
    let path = line(point(0.0, 0.0), point(10.0, 0.0));
    let options = CombOptions::DEFAULT.with_tick_spacing(5.0);

    let mut samples = Vec::new();
    let skipped = sample_path(&path, 0, &options, &mut samples);

    assert!(samples.is_empty());
    assert!(skipped.is_empty());
}

#[test]
fn zero_length_segment_is_degenerate() {
    let path = line(point(3.0, 3.0), point(3.0, 3.0));
    let mut samples = Vec::new();
    let skipped = sample_path(&path, 7, &CombOptions::DEFAULT, &mut samples);

    assert!(samples.is_empty());
    assert_eq!(skipped, vec![DegenerateSegment { path: 7, segment: 0 }]);
}

#[test]
fn curved_segment_samples() {
    let path = Path::new(
        vec![
            Anchor::new(point(0.0, 0.0), point(0.0, 0.0), point(0.0, 10.0)),
            Anchor::new(point(10.0, 10.0), point(10.0, 0.0), point(10.0, 0.0)),
        ],
        false,
    );
    let options = CombOptions::DEFAULT.with_step(0.25);

    let mut samples = Vec::new();
    sample_path(&path, 0, &options, &mut samples);

    assert_eq!(samples.len(), 5);
    assert_eq!(samples[0].position, point(0.0, 0.0));
    assert_eq!(samples[4].position, point(10.0, 0.0));
    for s in &samples {
        assert_eq!(s.kind, SampleKind::Curved);
        assert_eq!(s.winding, Winding::Positive);
        assert!((s.normal.length() - 1.0).abs() < 1e-12);
        assert!(s.length >= 0.0 && s.length.is_finite());
    }
    // Symmetric arch: same bending at both ends.
    assert!((samples[0].length - samples[4].length).abs() < 1e-9);
}

#[test]
fn straight_segment_between_curves() {
    // curve, line, curve: the line borrows the smaller end curvature.
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.cubic_bezier_to(point(0.0, 5.0), point(5.0, 10.0), point(10.0, 10.0));
    builder.line_to(point(40.0, 10.0));
    builder.cubic_bezier_to(point(60.0, 10.0), point(70.0, 0.0), point(70.0, -20.0));
    let compound = builder.build();
    let path = &compound.paths[0];

    let options = CombOptions::DEFAULT.with_tick_spacing(10.0);
    let expected = path
        .segment(0)
        .unwrap()
        .curve
        .curvature(1.0)
        .min(path.segment(2).unwrap().curve.curvature(0.0))
        * options.magnitude_scale;
    assert_eq!(straight_tick_length(path, 1, options.magnitude_scale), Some(expected));

    let mut samples = Vec::new();
    sample_path(path, 0, &options, &mut samples);

    let straight: Vec<&Sample> = samples.iter().filter(|s| s.is_straight()).collect();
    // 30 units long with a spacing of 10: round(3) - 1 = 2 ticks.
    assert_eq!(straight.len(), 2);
    assert!((straight[0].position - point(20.0, 10.0)).length() < 1e-9);
    assert!((straight[1].position - point(30.0, 10.0)).length() < 1e-9);
    assert!(straight.iter().all(|s| s.length == expected));

    // Samples keep the traversal order: curve, line, curve.
    let first_straight = samples.iter().position(|s| s.is_straight()).unwrap();
    assert_eq!(first_straight, 21);
    assert_eq!(samples.len(), 21 + 2 + 21);
}

#[test]
fn straight_neighbors_do_not_count() {
    // Two straight segments followed by a curve: the first line has no curved
    // neighbor on an open path, the second borrows from the curve.
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(20.0, 0.0));
    builder.line_to(point(40.0, 0.0));
    builder.cubic_bezier_to(point(50.0, 0.0), point(60.0, 10.0), point(60.0, 20.0));
    let compound = builder.build();
    let path = &compound.paths[0];

    assert_eq!(straight_tick_length(path, 0, 200.0), None);
    assert!(straight_tick_length(path, 1, 200.0).unwrap() > 0.0);
}

#[test]
fn closed_path_wraps_neighbors() {
    // A "D" shape: the straight back borrows from the arc on both sides.
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(0.0, 20.0));
    builder.cubic_bezier_to(point(15.0, 20.0), point(15.0, 0.0), point(0.0, 0.0));
    builder.close();
    let compound = builder.build();
    let path = &compound.paths[0];

    assert_eq!(path.num_segments(), 2);
    let k = straight_tick_length(path, 0, 1.0).unwrap();
    let arc = path.segment(1).unwrap().curve;
    assert_eq!(k, arc.curvature(1.0).min(arc.curvature(0.0)));
}
