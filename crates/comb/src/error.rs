use thiserror::Error;

/// A parameter of `CombOptions` is out of its valid range.
#[derive(Error, Copy, Clone, Debug, PartialEq)]
pub enum InvalidParameter {
    #[error("Sampling step must be positive, got {0}.")]
    Step(f64),
    #[error("Magnitude scale must be positive, got {0}.")]
    MagnitudeScale(f64),
    #[error("Tick spacing must be positive, got {0}.")]
    TickSpacing(f64),
    #[error("Gamma must be positive, got {0}.")]
    Gamma(f64),
    #[error("Stroke width must be positive, got {0}.")]
    StrokeWidth(f64),
    #[error("Opacity must be between 0 and 100, got {0}.")]
    Opacity(f64),
}

/// The outlines handed over cannot produce any comb.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("No path to analyze.")]
    NoPaths,
    #[error("Path {path} has {anchors} anchor(s), at least 2 are needed.")]
    NotEnoughAnchors { path: usize, anchors: usize },
}

/// The comb generator's error enumeration.
///
/// These are reported before any draw instruction is emitted.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum CombError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] InvalidParameter),
}

/// A segment that cannot be sampled: it has no length or no tangent anywhere.
///
/// Not fatal, the segment is skipped and processing continues.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
#[error("Segment {segment} of path {path} is degenerate.")]
pub struct DegenerateSegment {
    pub path: usize,
    pub segment: usize,
}

/// A string does not name a variant of one of the option enums.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("Unknown {kind} {value:?}.")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        ParseEnumError {
            kind,
            value: value.to_string(),
        }
    }
}

#[test]
fn error_messages() {
    let err: CombError = InvalidParameter::Step(-0.5).into();
    assert_eq!(
        err.to_string(),
        "Invalid parameter: Sampling step must be positive, got -0.5."
    );

    let err: CombError = InvalidInput::NotEnoughAnchors { path: 3, anchors: 1 }.into();
    assert_eq!(
        err.to_string(),
        "Invalid input: Path 3 has 1 anchor(s), at least 2 are needed."
    );
}
