//! Conversion of smoothed samples into draw instructions.

use crate::color::Rgb;
use crate::options::{CombDirection, CombOptions};
use crate::path::math::Point;
use crate::sampler::Sample;

use arrayvec::ArrayVec;
use std::fmt;

/// Stroke width factor of curvature ticks, relative to the base stroke width.
pub const CURVED_WIDTH_FACTOR: f64 = 0.7;
/// Stroke width factor of straight segment ticks.
pub const STRAIGHT_WIDTH_FACTOR: f64 = 0.5;
/// Opacity (in percent) of straight segment ticks.
pub const STRAIGHT_OPACITY: f64 = 30.0;
/// Color of straight segment ticks.
pub const STRAIGHT_COLOR: Rgb = Rgb::gray(60);

/// A single comb tick: a line from `origin` to `endpoint`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct DrawInstruction {
    pub origin: Point,
    pub endpoint: Point,
    pub stroke_width: f64,
    /// In percent.
    pub opacity: f64,
    pub color: Rgb,
}

/// One instruction per line:
/// `origin.x origin.y endpoint.x endpoint.y width opacity r g b`.
impl fmt::Display for DrawInstruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {} {}",
            self.origin.x,
            self.origin.y,
            self.endpoint.x,
            self.endpoint.y,
            self.stroke_width,
            self.opacity,
            self.color.r,
            self.color.g,
            self.color.b,
        )
    }
}

/// Stroke attributes shared by the ticks of a sample.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickStyle {
    pub stroke_width: f64,
    pub opacity: f64,
    pub color: Rgb,
}

impl TickStyle {
    /// Style of the ticks inferred along straight segments.
    pub fn straight(options: &CombOptions) -> Self {
        TickStyle {
            stroke_width: STRAIGHT_WIDTH_FACTOR * options.stroke_width,
            opacity: STRAIGHT_OPACITY,
            color: STRAIGHT_COLOR,
        }
    }

    /// Style of a measured curvature tick of a given smoothed length.
    pub fn curved(length: f64, options: &CombOptions) -> Self {
        TickStyle {
            stroke_width: CURVED_WIDTH_FACTOR * options.stroke_width,
            opacity: options.opacity,
            color: options
                .color_map
                .comb_color(length, options.magnitude_scale, options.gamma),
        }
    }
}

/// Builds the tick of `sample` on a given side of its normal.
///
/// `side` is `1.0` or `-1.0`.
#[inline]
pub fn tick(sample: &Sample, length: f64, side: f64, style: &TickStyle) -> DrawInstruction {
    DrawInstruction {
        origin: sample.position,
        endpoint: sample.position + sample.normal * (length * side),
        stroke_width: style.stroke_width,
        opacity: style.opacity,
        color: style.color,
    }
}

/// The sides of the normal a sample's ticks are drawn on.
///
/// Straight samples always get a single tick on the positive side. Curved
/// samples follow the comb direction relative to the winding of their path.
pub fn tick_sides(sample: &Sample, direction: CombDirection) -> ArrayVec<f64, 2> {
    let mut sides = ArrayVec::new();
    if sample.is_straight() {
        sides.push(1.0);
        return sides;
    }

    let sign = sample.winding.sign();
    match direction {
        CombDirection::Inner => sides.push(-sign),
        CombDirection::Outer => sides.push(sign),
        CombDirection::Both => {
            sides.push(sign);
            sides.push(-sign);
        }
    }

    sides
}

/// The one or two draw instructions of a sample with its smoothed length.
pub fn sample_ticks(
    sample: &Sample,
    length: f64,
    options: &CombOptions,
) -> ArrayVec<DrawInstruction, 2> {
    let style = if sample.is_straight() {
        TickStyle::straight(options)
    } else {
        TickStyle::curved(length, options)
    };

    tick_sides(sample, options.direction)
        .iter()
        .map(|side| tick(sample, length, *side, &style))
        .collect()
}

/// Appends the draw instructions of a path's samples to `output`.
///
/// `smoothed` holds the smoothed length of each sample.
pub fn render_samples(
    samples: &[Sample],
    smoothed: &[f64],
    options: &CombOptions,
    output: &mut Vec<DrawInstruction>,
) {
    debug_assert_eq!(samples.len(), smoothed.len());
    for (sample, length) in samples.iter().zip(smoothed) {
        output.extend(sample_ticks(sample, *length, options));
    }
}

#[cfg(test)]
use crate::path::{
    math::{point, vector},
    Winding,
};
#[cfg(test)]
use crate::sampler::SampleKind;

#[cfg(test)]
fn curved_sample(winding: Winding) -> Sample {
    Sample {
        position: point(10.0, 10.0),
        normal: vector(0.0, 1.0),
        length: 50.0,
        kind: SampleKind::Curved,
        winding,
    }
}

#[test]
fn curved_ticks_per_direction() {
    let sample = curved_sample(Winding::Positive);
    for &(direction, count) in &[
        (CombDirection::Inner, 1),
        (CombDirection::Outer, 1),
        (CombDirection::Both, 2),
    ] {
        let options = CombOptions::DEFAULT.with_direction(direction);
        assert_eq!(sample_ticks(&sample, 20.0, &options).len(), count);
    }
}

#[test]
fn sides_follow_winding() {
    let positive = curved_sample(Winding::Positive);
    let negative = curved_sample(Winding::Negative);

    assert_eq!(tick_sides(&positive, CombDirection::Inner).as_slice(), &[-1.0]);
    assert_eq!(tick_sides(&positive, CombDirection::Outer).as_slice(), &[1.0]);
    assert_eq!(tick_sides(&negative, CombDirection::Inner).as_slice(), &[1.0]);
    assert_eq!(tick_sides(&negative, CombDirection::Outer).as_slice(), &[-1.0]);
    assert_eq!(tick_sides(&negative, CombDirection::Both).as_slice(), &[-1.0, 1.0]);

    let options = CombOptions::DEFAULT.with_direction(CombDirection::Outer);
    let ticks = sample_ticks(&positive, 20.0, &options);
    assert_eq!(ticks[0].origin, point(10.0, 10.0));
    assert_eq!(ticks[0].endpoint, point(10.0, 30.0));
}

#[test]
fn curved_tick_style() {
    let options = CombOptions::DEFAULT
        .with_stroke_width(2.0)
        .with_opacity(55.0);
    let ticks = sample_ticks(&curved_sample(Winding::Positive), 200.0, &options);

    assert_eq!(ticks[0].stroke_width, 0.7 * 2.0);
    assert_eq!(ticks[0].opacity, 55.0);
    // Saturated: the end of the rainbow.
    assert_eq!(ticks[0].color, Rgb::new(255, 0, 0));
}

#[test]
fn straight_tick_style() {
    let sample = Sample {
        kind: SampleKind::Straight,
        ..curved_sample(Winding::Negative)
    };
    let options = CombOptions::DEFAULT
        .with_direction(CombDirection::Both)
        .with_stroke_width(2.0);
    let ticks = sample_ticks(&sample, 5.0, &options);

    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].endpoint, point(10.0, 15.0));
    assert_eq!(ticks[0].stroke_width, 1.0);
    assert_eq!(ticks[0].opacity, 30.0);
    assert_eq!(ticks[0].color, Rgb::gray(60));
}

#[test]
fn record_format() {
    let instruction = DrawInstruction {
        origin: point(1.0, 2.5),
        endpoint: point(3.0, -4.0),
        stroke_width: 0.7,
        opacity: 70.0,
        color: Rgb::new(255, 128, 0),
    };

    assert_eq!(instruction.to_string(), "1 2.5 3 -4 0.7 70 255 128 0");
}
