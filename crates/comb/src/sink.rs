//! The interface through which draw instructions are handed to a host.

use crate::options::LayerSettings;
use crate::render::DrawInstruction;

use std::fmt;

/// Statistics of a comb generation run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CombSummary {
    /// Paths that contributed samples.
    pub paths: usize,
    pub samples: usize,
    pub instructions: usize,
    /// Segments skipped because they have no length or tangent.
    pub degenerate_segments: usize,
}

impl fmt::Display for CombSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "OK: {} combs", self.instructions)
    }
}

/// Realizes draw instructions, typically as strokes in a host document.
///
/// A run calls `begin` once, `draw` for each instruction in order, then `end`.
/// Nothing is called if the run fails.
pub trait DrawSink {
    fn begin(&mut self, _layer: &LayerSettings) {}

    fn draw(&mut self, instruction: &DrawInstruction);

    fn end(&mut self, _summary: &CombSummary) {}
}

impl DrawSink for Vec<DrawInstruction> {
    fn draw(&mut self, instruction: &DrawInstruction) {
        self.push(*instruction);
    }
}

impl<'l, T: DrawSink + ?Sized> DrawSink for &'l mut T {
    fn begin(&mut self, layer: &LayerSettings) {
        (**self).begin(layer);
    }

    fn draw(&mut self, instruction: &DrawInstruction) {
        (**self).draw(instruction);
    }

    fn end(&mut self, summary: &CombSummary) {
        (**self).end(summary);
    }
}
