//! Parameters of a comb generation run.

use crate::color::ColorMap;
use crate::error::{InvalidParameter, ParseEnumError};

use std::str::FromStr;

/// Which side of a curve the combs are drawn on.
///
/// The side is relative to the winding of the path the sample belongs to, so
/// combs point consistently inward or outward along a closed contour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum CombDirection {
    Inner,
    Outer,
    Both,
}

impl CombDirection {
    pub fn name(self) -> &'static str {
        match self {
            CombDirection::Inner => "inner",
            CombDirection::Outer => "outer",
            CombDirection::Both => "both",
        }
    }
}

impl FromStr for CombDirection {
    type Err = ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inner" => Ok(CombDirection::Inner),
            "outer" => Ok(CombDirection::Outer),
            "both" => Ok(CombDirection::Both),
            _ => Err(ParseEnumError::new("comb direction", s)),
        }
    }
}

/// Where the host places the layer holding the combs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum LayerPosition {
    /// In front of the artwork.
    Top,
    /// Behind the artwork.
    Bottom,
}

impl FromStr for LayerPosition {
    type Err = ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(LayerPosition::Top),
            "bottom" => Ok(LayerPosition::Bottom),
            _ => Err(ParseEnumError::new("layer position", s)),
        }
    }
}

/// Host-side settings of the layer receiving the draw instructions.
///
/// The comb computation does not look at these, they are forwarded to the
/// `DrawSink` when a run starts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LayerSettings {
    /// Default value: `LayerPosition::Top`.
    pub position: LayerPosition,
    /// Lock the layer once the combs are drawn.
    ///
    /// Default value: `false`.
    pub lock: bool,
}

impl LayerSettings {
    pub const DEFAULT: Self = LayerSettings {
        position: LayerPosition::Top,
        lock: false,
    };
}

impl Default for LayerSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Parameters for comb generation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CombOptions {
    /// Parametric distance between two samples of a curved segment.
    ///
    /// Must be positive.
    /// Default value: `CombOptions::DEFAULT_STEP`.
    pub step: f64,

    /// Factor converting curvature into comb length. A smoothed comb length equal
    /// to this value saturates the color map.
    ///
    /// Must be positive.
    /// Default value: `CombOptions::DEFAULT_MAGNITUDE_SCALE`.
    pub magnitude_scale: f64,

    /// Opacity of the curvature ticks, in percent.
    ///
    /// Must be between 0 and 100.
    /// Default value: `CombOptions::DEFAULT_OPACITY`.
    pub opacity: f64,

    /// Default value: `CombDirection::Inner`.
    pub direction: CombDirection,

    /// Exponent applied to the normalized comb length before the color lookup.
    ///
    /// Values above one give more color resolution to gentle curves.
    /// Must be positive.
    /// Default value: `CombOptions::DEFAULT_GAMMA`.
    pub gamma: f64,

    /// Base stroke width of the ticks.
    ///
    /// Must be positive.
    /// Default value: `CombOptions::DEFAULT_STROKE_WIDTH`.
    pub stroke_width: f64,

    /// Approximate distance between two ticks along a straight segment.
    ///
    /// Must be positive.
    /// Default value: `CombOptions::DEFAULT_TICK_SPACING`.
    pub tick_spacing: f64,

    /// Default value: `ColorMap::Rainbow`.
    pub color_map: ColorMap,
}

impl CombOptions {
    pub const DEFAULT_STEP: f64 = 0.05;
    pub const DEFAULT_MAGNITUDE_SCALE: f64 = 200.0;
    pub const DEFAULT_OPACITY: f64 = 70.0;
    pub const DEFAULT_DIRECTION: CombDirection = CombDirection::Inner;
    pub const DEFAULT_GAMMA: f64 = 1.4;
    pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;
    pub const DEFAULT_TICK_SPACING: f64 = 12.0;
    pub const DEFAULT_COLOR_MAP: ColorMap = ColorMap::Rainbow;

    pub const DEFAULT: Self = CombOptions {
        step: Self::DEFAULT_STEP,
        magnitude_scale: Self::DEFAULT_MAGNITUDE_SCALE,
        opacity: Self::DEFAULT_OPACITY,
        direction: Self::DEFAULT_DIRECTION,
        gamma: Self::DEFAULT_GAMMA,
        stroke_width: Self::DEFAULT_STROKE_WIDTH,
        tick_spacing: Self::DEFAULT_TICK_SPACING,
        color_map: Self::DEFAULT_COLOR_MAP,
    };

    #[inline]
    pub const fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    #[inline]
    pub const fn with_magnitude_scale(mut self, scale: f64) -> Self {
        self.magnitude_scale = scale;
        self
    }

    #[inline]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    #[inline]
    pub const fn with_direction(mut self, direction: CombDirection) -> Self {
        self.direction = direction;
        self
    }

    #[inline]
    pub const fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    #[inline]
    pub const fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    #[inline]
    pub const fn with_tick_spacing(mut self, spacing: f64) -> Self {
        self.tick_spacing = spacing;
        self
    }

    #[inline]
    pub const fn with_color_map(mut self, color_map: ColorMap) -> Self {
        self.color_map = color_map;
        self
    }

    /// Checks every parameter, reporting the first invalid one.
    ///
    /// Invalid values are never replaced by defaults.
    pub fn validate(&self) -> Result<(), InvalidParameter> {
        fn positive(v: f64) -> bool {
            v.is_finite() && v > 0.0
        }

        if !positive(self.step) {
            return Err(InvalidParameter::Step(self.step));
        }
        if !positive(self.magnitude_scale) {
            return Err(InvalidParameter::MagnitudeScale(self.magnitude_scale));
        }
        if !positive(self.tick_spacing) {
            return Err(InvalidParameter::TickSpacing(self.tick_spacing));
        }
        if !positive(self.gamma) {
            return Err(InvalidParameter::Gamma(self.gamma));
        }
        if !positive(self.stroke_width) {
            return Err(InvalidParameter::StrokeWidth(self.stroke_width));
        }
        if !(0.0..=100.0).contains(&self.opacity) {
            return Err(InvalidParameter::Opacity(self.opacity));
        }

        Ok(())
    }
}

impl Default for CombOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[test]
fn default_options_are_valid() {
    let options = CombOptions::default();
    assert_eq!(options.validate(), Ok(()));
    assert_eq!(options.step, 0.05);
    assert_eq!(options.magnitude_scale, 200.0);
    assert_eq!(options.opacity, 70.0);
    assert_eq!(options.gamma, 1.4);
    assert_eq!(options.tick_spacing, 12.0);
    assert_eq!(options.color_map, ColorMap::Rainbow);
}

#[test]
fn invalid_parameters() {
    let options = CombOptions::DEFAULT;
    assert_eq!(
        options.with_step(0.0).validate(),
        Err(InvalidParameter::Step(0.0))
    );
    assert_eq!(
        options.with_magnitude_scale(-1.0).validate(),
        Err(InvalidParameter::MagnitudeScale(-1.0))
    );
    assert_eq!(
        options.with_tick_spacing(0.0).validate(),
        Err(InvalidParameter::TickSpacing(0.0))
    );
    assert_eq!(
        options.with_opacity(101.0).validate(),
        Err(InvalidParameter::Opacity(101.0))
    );
    assert!(options.with_gamma(f64::NAN).validate().is_err());
    assert!(options.with_stroke_width(f64::INFINITY).validate().is_err());
}

#[test]
fn parse_enums() {
    assert_eq!("both".parse::<CombDirection>(), Ok(CombDirection::Both));
    assert_eq!("Outer".parse::<CombDirection>(), Ok(CombDirection::Outer));
    assert!("sideways".parse::<CombDirection>().is_err());
    assert_eq!("bottom".parse::<LayerPosition>(), Ok(LayerPosition::Bottom));
    assert!("middle".parse::<LayerPosition>().is_err());
}
