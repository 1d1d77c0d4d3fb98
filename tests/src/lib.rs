//! Shared outlines for the integration tests and benchmarks.

use speedpunk::path::math::{point, Point};
use speedpunk::path::{Anchor, Path};

#[cfg(test)]
use speedpunk::comb::sampler::{sample_path, straight_tick_count};
#[cfg(test)]
use speedpunk::comb::smooth::smooth_samples;
#[cfg(test)]
use speedpunk::comb::{
    draw_combs, generate, CombDirection, CombError, CombOptions, DrawInstruction, InvalidInput,
    LayerPosition, LayerSettings, SampleKind,
};
#[cfg(test)]
use speedpunk::extra::{parse_path_data, SvgWriter};
#[cfg(test)]
use speedpunk::path::{CompoundPath, Winding};

/// Handle length of a cubic quarter circle, relative to the radius.
pub const CIRCLE_KAPPA: f64 = 0.552_284_749_8;

/// A circle made of four quarter arcs, counter-clockwise in a y-up frame.
pub fn circle(center: Point, radius: f64) -> Path {
    let h = radius * CIRCLE_KAPPA;
    let (x, y) = (center.x, center.y);

    Path::new(
        vec![
            Anchor::new(point(x + radius, y - h), point(x + radius, y), point(x + radius, y + h)),
            Anchor::new(point(x + h, y + radius), point(x, y + radius), point(x - h, y + radius)),
            Anchor::new(point(x - radius, y + h), point(x - radius, y), point(x - radius, y - h)),
            Anchor::new(point(x - h, y - radius), point(x, y - radius), point(x + h, y - radius)),
        ],
        true,
    )
}

/// A stadium-like glyph outline mixing curves and straight segments.
pub const GLYPH: &str = "M 100 0 L 300 0 C 355 0 400 45 400 100 C 400 155 355 200 300 200 \
                         L 100 200 C 45 200 0 155 0 100 C 0 45 45 0 100 0 Z \
                         M 120 60 L 280 60 S 340 100 280 140 L 120 140 S 60 100 120 60 Z";

#[cfg(test)]
fn options(step: f64) -> CombOptions {
    CombOptions::DEFAULT.with_step(step)
}

#[cfg(test)]
fn curved_lengths(path: &Path, options: &CombOptions) -> Vec<f64> {
    let mut samples = Vec::new();
    sample_path(path, 0, options, &mut samples);
    samples
        .iter()
        .filter(|sample| sample.kind == SampleKind::Curved)
        .map(|sample| sample.length)
        .collect()
}

#[test]
fn circle_curvature_is_nearly_constant() {
    let circle = circle(point(0.0, 0.0), 100.0);
    let options = options(0.25).with_magnitude_scale(200.0);

    let lengths = curved_lengths(&circle, &options);
    assert_eq!(lengths.len(), 20);

    // 200 / 100
    for length in &lengths {
        assert!((length - 2.0).abs() < 0.1, "{}", length);
    }

    let mut samples = Vec::new();
    sample_path(&circle, 0, &options, &mut samples);
    for smoothed in smooth_samples(&samples) {
        assert!((smoothed - 2.0).abs() < 0.1, "{}", smoothed);
    }
}

#[test]
fn circle_orientation() {
    let circle = circle(point(10.0, 10.0), 50.0);
    assert_eq!(circle.winding(), Winding::Positive);
    assert_eq!(circle.reversed().winding(), Winding::Negative);

    // The comb side relative to the center does not depend on the anchor order.
    let options = options(0.25);
    for path in &[circle.clone(), circle.reversed()] {
        let inner = generate(path, &options).unwrap();
        for tick in &inner.instructions {
            assert!(distance_gain(tick, point(10.0, 10.0)) > 0.0);
        }

        let outer = generate(path, &options.with_direction(CombDirection::Outer)).unwrap();
        for tick in &outer.instructions {
            assert!(distance_gain(tick, point(10.0, 10.0)) < 0.0);
        }
    }
}

#[cfg(test)]
fn distance_gain(tick: &DrawInstruction, center: Point) -> f64 {
    (tick.endpoint - center).length() - (tick.origin - center).length()
}

#[test]
fn smoothing_stays_within_each_path() {
    let small = circle(point(0.0, 0.0), 20.0);
    let large = circle(point(100.0, 0.0), 80.0);
    let options = options(0.1);

    let alone_small = generate(&small, &options).unwrap().instructions;
    let alone_large = generate(&large, &options).unwrap().instructions;

    let compound = CompoundPath::new(vec![small, large]);
    let together = generate(&compound, &options).unwrap().instructions;

    assert_eq!(together.len(), alone_small.len() + alone_large.len());
    assert_eq!(&together[..alone_small.len()], &alone_small[..]);
    assert_eq!(&together[alone_small.len()..], &alone_large[..]);

    // 200 / 80, not pulled towards the 200 / 20 of the previous path.
    for tick in &together[alone_small.len()..alone_small.len() + 3] {
        let length = (tick.endpoint - tick.origin).length();
        assert!((length - 2.5).abs() < 0.125, "{}", length);
    }
}

#[test]
fn instructions_per_sample() {
    let circle = circle(point(0.0, 0.0), 30.0);

    let count = |direction| {
        generate(&circle, &options(0.1).with_direction(direction))
            .unwrap()
            .instructions
            .len()
    };

    // 11 samples per quarter arc.
    assert_eq!(count(CombDirection::Inner), 44);
    assert_eq!(count(CombDirection::Outer), 44);
    assert_eq!(count(CombDirection::Both), 88);
}

#[test]
fn lone_straight_segment() {
    let line = Path::new(
        vec![Anchor::corner(point(0.0, 0.0)), Anchor::corner(point(10.0, 0.0))],
        false,
    );

    let output = generate(&line, &options(0.05).with_tick_spacing(5.0)).unwrap();
    assert!(output.instructions.is_empty());
    assert_eq!(output.summary.paths, 0);
    assert_eq!(output.summary.degenerate_segments, 0);
    assert_eq!(output.summary.to_string(), "OK: 0 combs");
}

#[test]
fn straight_tick_at_midpoint() {
    assert_eq!(straight_tick_count(10.0, 5.0), 1);

    // A 10 units line followed by a curve.
    let outline = parse_path_data("M 0 0 L 10 0 C 10 10 20 10 20 0").unwrap();
    let path = &outline.paths[0];
    let options = options(0.05).with_tick_spacing(5.0);

    let output = generate(path, &options).unwrap();
    let straight: Vec<&DrawInstruction> = output
        .instructions
        .iter()
        .filter(|tick| tick.opacity == 30.0)
        .collect();

    assert_eq!(straight.len(), 1);
    assert!((straight[0].origin - point(5.0, 0.0)).length() < 1e-9);
}

#[test]
fn path_data_to_svg() {
    let outline = parse_path_data(GLYPH).unwrap();
    assert_eq!(outline.paths.len(), 2);

    let layer = LayerSettings {
        position: LayerPosition::Bottom,
        lock: true,
    };
    let mut writer = SvgWriter::with_outline(GLYPH);
    let summary = draw_combs(&outline, &options(0.1), &layer, &mut writer).unwrap();

    assert_eq!(summary.paths, 2);
    assert_eq!(writer.num_lines(), summary.instructions);

    let document = writer.finish();
    assert_eq!(document.matches("<line ").count(), summary.instructions);
    assert!(document.find("<g ").unwrap() < document.find("<path ").unwrap());
    assert!(document.contains("data-locked=\"true\""));
}

#[test]
fn empty_input() {
    let outline = parse_path_data("").unwrap();
    assert_eq!(
        generate(&outline, &CombOptions::DEFAULT),
        Err(CombError::InvalidInput(InvalidInput::NoPaths))
    );
}
