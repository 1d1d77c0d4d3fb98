//! Writes curvature combs as an SVG document.
//!
//! Every `DrawInstruction` becomes a `<line>` element. The lines are grouped in
//! one `<g>` layer which is placed above or below the source outline depending
//! on the `LayerSettings` handed to `DrawSink::begin`.
//!
//! ```
//! use speedpunk_extra::comb::{draw_combs, CombOptions, LayerSettings};
//! use speedpunk_extra::{parse_path_data, SvgWriter};
//!
//! let data = "M 0 0 C 0 50 50 100 100 100";
//! let outline = parse_path_data(data).unwrap();
//!
//! let mut writer = SvgWriter::with_outline(data);
//! draw_combs(&outline, &CombOptions::DEFAULT, &LayerSettings::DEFAULT, &mut writer).unwrap();
//!
//! let document = writer.finish();
//! assert!(document.starts_with("<svg"));
//! ```

use crate::comb::{CombSummary, DrawInstruction, DrawSink, LayerPosition, LayerSettings};
use log::debug;

pub const COMB_LAYER_ID: &str = "speedpunk-combs";
pub const OUTLINE_STROKE: &str = "#000000";

/// A `DrawSink` that accumulates an SVG document.
#[derive(Clone, Debug, Default)]
pub struct SvgWriter {
    outline: Option<String>,
    layer: LayerSettings,
    lines: Vec<String>,
    summary: Option<CombSummary>,
}

impl SvgWriter {
    /// A writer producing a document with the combs only.
    pub fn new() -> Self {
        Self::default()
    }

    /// A writer that also draws the source outline, given as SVG path data.
    pub fn with_outline(data: impl Into<String>) -> Self {
        SvgWriter {
            outline: Some(data.into()),
            ..Self::default()
        }
    }

    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    /// Assembles the document.
    pub fn finish(&self) -> String {
        let mut document = String::from("<svg xmlns=\"http://www.w3.org/2000/svg\" overflow=\"visible\">\n");

        if let Some(summary) = &self.summary {
            document.push_str(&format!("  <!-- {summary} -->\n"));
        }

        let outline = self.outline.as_ref().map(|data| {
            format!(
                "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1\"/>\n",
                escape(data),
                OUTLINE_STROKE
            )
        });

        if self.layer.position == LayerPosition::Top {
            if let Some(outline) = &outline {
                document.push_str(outline);
            }
        }

        document.push_str(&format!("  <g id=\"{COMB_LAYER_ID}\""));
        if self.layer.lock {
            document.push_str(" data-locked=\"true\"");
        }
        document.push_str(">\n");
        for line in &self.lines {
            document.push_str("    ");
            document.push_str(line);
            document.push('\n');
        }
        document.push_str("  </g>\n");

        if self.layer.position == LayerPosition::Bottom {
            if let Some(outline) = &outline {
                document.push_str(outline);
            }
        }

        document.push_str("</svg>\n");

        document
    }
}

impl DrawSink for SvgWriter {
    fn begin(&mut self, layer: &LayerSettings) {
        self.layer = *layer;
        self.lines.clear();
        self.summary = None;
    }

    fn draw(&mut self, instruction: &DrawInstruction) {
        self.lines.push(line_element(instruction));
    }

    fn end(&mut self, summary: &CombSummary) {
        debug!("svg: {} line(s) in the comb layer", self.lines.len());
        self.summary = Some(*summary);
    }
}

fn line_element(instruction: &DrawInstruction) -> String {
    format!(
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\" stroke-opacity=\"{}\" stroke-linecap=\"round\"/>",
        instruction.origin.x,
        instruction.origin.y,
        instruction.endpoint.x,
        instruction.endpoint.y,
        instruction.color,
        instruction.stroke_width,
        instruction.opacity / 100.0,
    )
}

fn escape(data: &str) -> String {
    data.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
use crate::comb::Rgb;
#[cfg(test)]
use crate::math::point;

#[cfg(test)]
fn instruction() -> DrawInstruction {
    DrawInstruction {
        origin: point(1.0, 2.0),
        endpoint: point(1.0, 12.5),
        stroke_width: 0.7,
        opacity: 70.0,
        color: Rgb::new(255, 0, 16),
    }
}

#[test]
fn line_elements() {
    assert_eq!(
        line_element(&instruction()),
        "<line x1=\"1\" y1=\"2\" x2=\"1\" y2=\"12.5\" stroke=\"#ff0010\" stroke-width=\"0.7\" stroke-opacity=\"0.7\" stroke-linecap=\"round\"/>"
    );
}

#[test]
fn layer_position() {
    let mut below = SvgWriter::with_outline("M 0 0 L 1 1");
    below.begin(&LayerSettings {
        position: LayerPosition::Bottom,
        lock: false,
    });
    below.draw(&instruction());
    let document = below.finish();
    let group = document.find("<g ").unwrap();
    let outline = document.find("<path ").unwrap();
    assert!(group < outline);
    assert!(!document.contains("data-locked"));

    let mut above = SvgWriter::with_outline("M 0 0 L 1 1");
    above.begin(&LayerSettings {
        position: LayerPosition::Top,
        lock: true,
    });
    above.draw(&instruction());
    let document = above.finish();
    let group = document.find("<g ").unwrap();
    let outline = document.find("<path ").unwrap();
    assert!(outline < group);
    assert!(document.contains("<g id=\"speedpunk-combs\" data-locked=\"true\">"));
}

#[test]
fn summary_comment() {
    let mut writer = SvgWriter::new();
    writer.begin(&LayerSettings::DEFAULT);
    writer.draw(&instruction());
    writer.draw(&instruction());
    writer.end(&CombSummary {
        paths: 1,
        samples: 2,
        instructions: 2,
        degenerate_segments: 0,
    });

    let document = writer.finish();
    assert_eq!(writer.num_lines(), 2);
    assert!(document.contains("<!-- OK: 2 combs -->"));
    assert!(!document.contains("<path "));
    assert!(document.trim_end().ends_with("</svg>"));
}

#[test]
fn outline_is_escaped() {
    let writer = SvgWriter::with_outline("M 0 0 \"L\" 1 1");
    assert!(writer.finish().contains("d=\"M 0 0 &quot;L&quot; 1 1\""));
}
