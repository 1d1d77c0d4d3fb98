#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]

//! Curvature combs for cubic bézier outlines.
//!
//! This crate is reexported in [speedpunk](../speedpunk/index.html).
//!
//! # Overview
//!
//! A curvature comb visualizes how sharply an outline bends: at regular
//! intervals along each segment a short tick is drawn perpendicular to the
//! curve, its length proportional to the local curvature. Ticks are colored
//! with a gradient so that tight spots stand out.
//!
//! Comb generation runs in four stages for every path:
//!
//! 1. [sampling](sampler/index.html): curved segments are sampled at a fixed
//!    parametric step; straight segments get evenly spaced ticks whose length
//!    is inferred from the curved segments around them,
//! 2. [smoothing](smooth/index.html): a 5 point moving average over the
//!    samples of the path,
//! 3. [coloring](color/index.html): the smoothed length, normalized and
//!    gamma corrected, indexes a color map,
//! 4. [rendering](render/index.html): each sample becomes one or two
//!    `DrawInstruction`s depending on the comb direction.
//!
//! # Example
//!
//! ```
//! use speedpunk_comb::{generate, CombDirection, CombOptions};
//! use speedpunk_comb::path::{math::point, Path};
//!
//! let mut builder = Path::builder();
//! builder.begin(point(0.0, 0.0));
//! builder.cubic_bezier_to(point(0.0, 50.0), point(50.0, 100.0), point(100.0, 100.0));
//! let outline = builder.build();
//!
//! let options = CombOptions::DEFAULT.with_direction(CombDirection::Both);
//! let output = generate(&outline, &options).unwrap();
//!
//! assert_eq!(output.summary.instructions, output.instructions.len());
//! for tick in &output.instructions {
//!     println!("{tick}");
//! }
//! ```
//!
//! # Errors
//!
//! Options and input are validated before anything is computed. A run either
//! fails with a `CombError` or produces the complete list of instructions.
//! Degenerate segments (no length, no tangent) are not errors: they are
//! skipped and counted in the `CombSummary`.

pub extern crate speedpunk_path as path;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod color;
mod error;
pub mod options;
pub mod render;
pub mod sampler;
mod sink;
pub mod smooth;

pub use crate::color::{ColorMap, Rgb};
pub use crate::error::*;
pub use crate::options::{CombDirection, CombOptions, LayerPosition, LayerSettings};
pub use crate::render::DrawInstruction;
pub use crate::sampler::{Sample, SampleKind};
pub use crate::sink::{CombSummary, DrawSink};

use crate::path::{Path, PathSource};
use log::{debug, warn};

/// The result of a comb generation run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CombOutput {
    pub instructions: Vec<DrawInstruction>,
    pub summary: CombSummary,
}

/// Generates curvature combs.
///
/// Keeps its sample buffers around so that they can be reused from one run to
/// the next.
#[derive(Default)]
pub struct CombGenerator {
    samples: Vec<Sample>,
    smoothed: Vec<f64>,
}

impl CombGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates the combs of every path of `source` and appends their draw
    /// instructions to `output`, path after path in source order.
    ///
    /// Nothing is appended if the options or the input are invalid.
    pub fn generate<Source: PathSource + ?Sized>(
        &mut self,
        source: &Source,
        options: &CombOptions,
        output: &mut Vec<DrawInstruction>,
    ) -> Result<CombSummary, CombError> {
        options.validate()?;
        check_input(source)?;

        let start = output.len();
        let mut summary = CombSummary::default();
        let mut path_index = 0;

        source.for_each_path(&mut |path: &Path| {
            let index = path_index;
            path_index += 1;

            if path.len() < 2 {
                warn!(
                    "Ignoring path {} with {} anchor(s).",
                    index,
                    path.len()
                );
                return;
            }

            self.samples.clear();
            let skipped = sampler::sample_path(path, index, options, &mut self.samples);
            summary.degenerate_segments += skipped.len();

            self.smoothed = smooth::smooth_samples(&self.samples);
            render::render_samples(&self.samples, &self.smoothed, options, output);

            debug!(
                "path {}: {} segment(s), {:?} winding, {} sample(s)",
                index,
                path.num_segments(),
                path.winding(),
                self.samples.len()
            );

            if !self.samples.is_empty() {
                summary.paths += 1;
            }
            summary.samples += self.samples.len();
        });

        summary.instructions = output.len() - start;
        debug!("{summary}");

        Ok(summary)
    }
}

/// Generates the draw instructions of every path of `source`.
pub fn generate<Source: PathSource + ?Sized>(
    source: &Source,
    options: &CombOptions,
) -> Result<CombOutput, CombError> {
    let mut instructions = Vec::new();
    let summary = CombGenerator::new().generate(source, options, &mut instructions)?;

    Ok(CombOutput {
        instructions,
        summary,
    })
}

/// Generates the combs of `source` and hands them to `sink`.
///
/// All instructions are computed before the sink is called, so a failing run
/// never leaves partial output behind.
pub fn draw_combs<Source: PathSource + ?Sized>(
    source: &Source,
    options: &CombOptions,
    layer: &LayerSettings,
    sink: &mut dyn DrawSink,
) -> Result<CombSummary, CombError> {
    let output = generate(source, options)?;

    sink.begin(layer);
    for instruction in &output.instructions {
        sink.draw(instruction);
    }
    sink.end(&output.summary);

    Ok(output.summary)
}

// The input must contain at least one path with two anchors or more.
fn check_input<Source: PathSource + ?Sized>(source: &Source) -> Result<(), InvalidInput> {
    let mut count = 0;
    let mut usable = false;
    let mut first_short = None;
    source.for_each_path(&mut |path: &Path| {
        if path.len() >= 2 {
            usable = true;
        } else if first_short.is_none() {
            first_short = Some(InvalidInput::NotEnoughAnchors {
                path: count,
                anchors: path.len(),
            });
        }
        count += 1;
    });

    if count == 0 {
        return Err(InvalidInput::NoPaths);
    }

    match first_short {
        Some(err) if !usable => Err(err),
        _ => Ok(()),
    }
}

#[cfg(test)]
use crate::path::{math::point, Anchor, CompoundPath};

#[cfg(test)]
fn arch() -> Path {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.cubic_bezier_to(point(0.0, 40.0), point(40.0, 40.0), point(40.0, 0.0));
    builder.line_to(point(80.0, 0.0));
    let mut compound = builder.build();
    compound.paths.remove(0)
}

#[test]
fn no_paths() {
    let empty: Vec<Path> = Vec::new();
    assert_eq!(
        generate(&empty, &CombOptions::DEFAULT),
        Err(CombError::InvalidInput(InvalidInput::NoPaths))
    );
}

#[test]
fn only_short_paths() {
    let paths = vec![
        Path::new(vec![Anchor::corner(point(0.0, 0.0))], true),
        Path::default(),
    ];
    assert_eq!(
        generate(&paths, &CombOptions::DEFAULT),
        Err(CombError::InvalidInput(InvalidInput::NotEnoughAnchors {
            path: 0,
            anchors: 1
        }))
    );
}

#[test]
fn short_paths_are_skipped() {
    let paths = vec![Path::new(vec![Anchor::corner(point(0.0, 0.0))], true), arch()];
    let output = generate(&paths, &CombOptions::DEFAULT).unwrap();

    assert_eq!(output.summary.paths, 1);
    assert!(!output.instructions.is_empty());
}

#[test]
fn invalid_options_produce_nothing() {
    let mut output = Vec::new();
    let result = CombGenerator::new().generate(
        &arch(),
        &CombOptions::DEFAULT.with_step(-1.0),
        &mut output,
    );

    assert_eq!(
        result,
        Err(CombError::InvalidParameter(InvalidParameter::Step(-1.0)))
    );
    assert!(output.is_empty());
}

#[test]
fn summary_counts() {
    let options = CombOptions::DEFAULT
        .with_step(0.25)
        .with_direction(CombDirection::Both)
        .with_tick_spacing(10.0);
    let output = generate(&arch(), &options).unwrap();

    // 5 curve samples with two ticks each, the 40 units line gets 3 single ticks.
    assert_eq!(output.summary.samples, 8);
    assert_eq!(output.summary.instructions, 13);
    assert_eq!(output.instructions.len(), 13);
    assert_eq!(output.summary.to_string(), "OK: 13 combs");
}

#[test]
fn generator_reuse_appends() {
    let options = CombOptions::DEFAULT.with_step(0.25);
    let compound = CompoundPath::new(vec![arch(), arch()]);

    let mut generator = CombGenerator::new();
    let mut output = Vec::new();
    let first = generator.generate(&arch(), &options, &mut output).unwrap();
    let second = generator.generate(&compound, &options, &mut output).unwrap();

    assert_eq!(second.instructions, 2 * first.instructions);
    assert_eq!(output.len(), 3 * first.instructions);
    assert_eq!(second.paths, 2);
}

#[test]
fn single_curve_loop() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.cubic_bezier_to(point(50.0, 50.0), point(-50.0, 50.0), point(0.0, 0.0));
    builder.close();
    let teardrop = builder.build();

    let output = generate(&teardrop, &CombOptions::DEFAULT).unwrap();
    assert_eq!(output.summary.paths, 1);
    assert_eq!(output.instructions.len(), 21);
    // The closing segment has no length.
    assert_eq!(output.summary.degenerate_segments, 1);
}

#[test]
fn sink_receives_everything() {
    struct Recorder {
        began: Option<LayerSettings>,
        drawn: Vec<DrawInstruction>,
        ended: Option<CombSummary>,
    }

    impl DrawSink for Recorder {
        fn begin(&mut self, layer: &LayerSettings) {
            self.began = Some(*layer);
        }
        fn draw(&mut self, instruction: &DrawInstruction) {
            self.drawn.push(*instruction);
        }
        fn end(&mut self, summary: &CombSummary) {
            self.ended = Some(*summary);
        }
    }

    let mut recorder = Recorder {
        began: None,
        drawn: Vec::new(),
        ended: None,
    };
    let layer = LayerSettings {
        position: LayerPosition::Bottom,
        lock: true,
    };

    let summary = draw_combs(&arch(), &CombOptions::DEFAULT, &layer, &mut recorder).unwrap();
    assert_eq!(recorder.began, Some(layer));
    assert_eq!(recorder.drawn.len(), summary.instructions);
    assert_eq!(recorder.ended, Some(summary));

    let mut failing = Recorder {
        began: None,
        drawn: Vec::new(),
        ended: None,
    };
    let options = CombOptions::DEFAULT.with_tick_spacing(0.0);
    assert!(draw_combs(&arch(), &options, &layer, &mut failing).is_err());
    assert_eq!(failing.began, None);
    assert!(failing.drawn.is_empty());
}
