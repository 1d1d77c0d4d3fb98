//! Color maps turning a normalized comb length into a color.
//!
//! Every map takes a scalar in `[0, 1]` and returns real valued, unclamped
//! channels. `Rgb::from_channels` rounds and clamps them into valid 8-bit
//! values; nothing in this module fails or produces an out of range channel,
//! whatever the input.

use crate::error::ParseEnumError;

use std::fmt;
use std::str::FromStr;

/// An 8-bit RGB color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    #[inline]
    pub const fn gray(value: u8) -> Self {
        Rgb {
            r: value,
            g: value,
            b: value,
        }
    }

    /// Rounds and clamps real valued channels.
    #[inline]
    pub fn from_channels(channels: [f64; 3]) -> Self {
        Rgb {
            r: clamp_channel(channels[0]),
            g: clamp_channel(channels[1]),
            b: clamp_channel(channels[2]),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Rounds a channel to the nearest integer in `[0, 255]`.
///
/// `NaN` and negative values map to zero.
#[inline]
pub fn clamp_channel(value: f64) -> u8 {
    let value = value.round();
    if value.is_nan() || value < 0.0 {
        0
    } else if value > 255.0 {
        255
    } else {
        value as u8
    }
}

const VIRIDIS: &[[f64; 3]] = &[
    [68.0, 1.0, 84.0],
    [59.0, 82.0, 139.0],
    [32.0, 145.0, 140.0],
    [94.0, 201.0, 97.0],
    [253.0, 231.0, 37.0],
];

const MAGMA: &[[f64; 3]] = &[
    [0.0, 0.0, 4.0],
    [77.0, 5.0, 113.0],
    [130.0, 32.0, 129.0],
    [185.0, 55.0, 119.0],
    [236.0, 109.0, 79.0],
    [252.0, 253.0, 191.0],
];

const GRAY_YELLOW_RED: &[[f64; 3]] = &[
    [85.0, 85.0, 85.0],
    [255.0, 214.0, 51.0],
    [255.0, 0.0, 0.0],
];

const GREEN_YELLOW_RED: &[[f64; 3]] = &[
    [0.0, 153.0, 102.0],
    [255.0, 255.0, 102.0],
    [255.0, 0.0, 0.0],
];

const BLACK_PURPLE_YELLOW_RED: &[[f64; 3]] = &[
    [0.0, 0.0, 0.0],
    [106.0, 0.0, 168.0],
    [249.0, 221.0, 29.0],
    [255.0, 0.0, 0.0],
];

/// The built-in color maps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum ColorMap {
    /// HSV hue sweep from blue (240°) down to red (0°).
    Rainbow,
    Viridis,
    Magma,
    /// Black to orange-ish white, `(255t, 200t, 60t)`.
    Heat,
    /// Gray to yellow to red.
    Gray,
    /// Green to yellow to red.
    GreenYellowRed,
    /// Black to purple to yellow to red.
    BlackPurpleYellowRed,
}

impl ColorMap {
    pub const ALL: [ColorMap; 7] = [
        ColorMap::Rainbow,
        ColorMap::Viridis,
        ColorMap::Magma,
        ColorMap::Heat,
        ColorMap::Gray,
        ColorMap::GreenYellowRed,
        ColorMap::BlackPurpleYellowRed,
    ];

    /// The registry name of this map.
    pub fn name(self) -> &'static str {
        match self {
            ColorMap::Rainbow => "rainbow",
            ColorMap::Viridis => "viridis",
            ColorMap::Magma => "magma",
            ColorMap::Heat => "heat",
            ColorMap::Gray => "gray",
            ColorMap::GreenYellowRed => "gyr",
            ColorMap::BlackPurpleYellowRed => "purp",
        }
    }

    /// Looks a map up by name.
    ///
    /// Accepts the registry names as well as the spelled out gradient names
    /// (`"green-yellow-red"`, `"black-purple-yellow-red"`, `"gray-yellow-red"`).
    pub fn lookup(name: &str) -> Option<ColorMap> {
        let name = name.trim().to_ascii_lowercase();
        let map = match name.as_str() {
            "rainbow" => ColorMap::Rainbow,
            "viridis" => ColorMap::Viridis,
            "magma" => ColorMap::Magma,
            "heat" => ColorMap::Heat,
            "gray" | "grey" | "gray-yellow-red" => ColorMap::Gray,
            "gyr" | "green-yellow-red" => ColorMap::GreenYellowRed,
            "purp" | "black-purple-yellow-red" => ColorMap::BlackPurpleYellowRed,
            _ => return None,
        };

        Some(map)
    }

    /// Like `lookup`, falling back to `Rainbow` for unknown names.
    pub fn from_name(name: &str) -> ColorMap {
        Self::lookup(name).unwrap_or(ColorMap::Rainbow)
    }

    /// Evaluates the map at `t`, without clamping the resulting channels.
    ///
    /// `t` is clamped to `[0, 1]`, `NaN` counts as zero.
    pub fn sample(self, t: f64) -> [f64; 3] {
        let t = if t.is_nan() { 0.0 } else { t.max(0.0).min(1.0) };
        match self {
            ColorMap::Rainbow => hsv_to_rgb((1.0 - t) * 240.0, 1.0, 1.0),
            ColorMap::Heat => [255.0 * t, 200.0 * t, 60.0 * t],
            ColorMap::Viridis => piecewise_linear(VIRIDIS, t),
            ColorMap::Magma => piecewise_linear(MAGMA, t),
            ColorMap::Gray => piecewise_linear(GRAY_YELLOW_RED, t),
            ColorMap::GreenYellowRed => piecewise_linear(GREEN_YELLOW_RED, t),
            ColorMap::BlackPurpleYellowRed => piecewise_linear(BLACK_PURPLE_YELLOW_RED, t),
        }
    }

    /// Evaluates the map at `t` and converts the result into a valid color.
    #[inline]
    pub fn color(self, t: f64) -> Rgb {
        Rgb::from_channels(self.sample(t))
    }

    /// Color of a comb of a given length.
    ///
    /// The length is normalized by `magnitude_scale`, saturated at one and raised
    /// to `gamma` before the lookup.
    pub fn comb_color(self, length: f64, magnitude_scale: f64, gamma: f64) -> Rgb {
        let t = (length / magnitude_scale).min(1.0).powf(gamma);
        self.color(t)
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        ColorMap::Rainbow
    }
}

impl FromStr for ColorMap {
    type Err = ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| ParseEnumError::new("color map", s))
    }
}

impl fmt::Display for ColorMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn piecewise_linear(table: &[[f64; 3]], t: f64) -> [f64; 3] {
    let n = table.len() - 1;
    let x = t * n as f64;
    let i = (x.floor() as usize).min(n);
    let f = x - i as f64;
    let a = table[i];
    let b = table[(i + 1).min(n)];

    [
        a[0] + (b[0] - a[0]) * f,
        a[1] + (b[1] - a[1]) * f,
        a[2] + (b[2] - a[2]) * f,
    ]
}

/// Converts a hue in degrees, saturation and value into `[0, 255]` channels.
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [f64; 3] {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [(r + m) * 255.0, (g + m) * 255.0, (b + m) * 255.0]
}

#[test]
fn clamp_channels() {
    assert_eq!(clamp_channel(-12.0), 0);
    assert_eq!(clamp_channel(0.49), 0);
    assert_eq!(clamp_channel(127.5), 128);
    assert_eq!(clamp_channel(254.6), 255);
    assert_eq!(clamp_channel(1e9), 255);
    assert_eq!(clamp_channel(f64::NAN), 0);
    assert_eq!(clamp_channel(f64::INFINITY), 255);
    assert_eq!(clamp_channel(f64::NEG_INFINITY), 0);
}

#[test]
fn rainbow_endpoints() {
    assert_eq!(ColorMap::Rainbow.color(0.0), Rgb::new(0, 0, 255));
    assert_eq!(ColorMap::Rainbow.color(0.5), Rgb::new(0, 255, 0));
    assert_eq!(ColorMap::Rainbow.color(1.0), Rgb::new(255, 0, 0));
}

#[test]
fn table_endpoints() {
    assert_eq!(ColorMap::Viridis.color(0.0), Rgb::new(68, 1, 84));
    assert_eq!(ColorMap::Viridis.color(1.0), Rgb::new(253, 231, 37));
    assert_eq!(ColorMap::Magma.color(1.0), Rgb::new(252, 253, 191));
    assert_eq!(ColorMap::Gray.color(0.0), Rgb::gray(85));
    assert_eq!(ColorMap::GreenYellowRed.color(0.5), Rgb::new(255, 255, 102));
    assert_eq!(ColorMap::BlackPurpleYellowRed.color(1.0), Rgb::new(255, 0, 0));
    assert_eq!(ColorMap::Heat.color(1.0), Rgb::new(255, 200, 60));
}

#[test]
fn interpolation() {
    // Halfway between the first two viridis entries.
    assert_eq!(ColorMap::Viridis.sample(0.125), [63.5, 41.5, 111.5]);
}

#[test]
fn any_input_gives_a_valid_color() {
    let inputs = [
        -1.0,
        0.0,
        0.3,
        1.0,
        7.5,
        f64::NAN,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::MIN_POSITIVE,
    ];
    for map in &ColorMap::ALL {
        for &t in &inputs {
            let channels = map.sample(t);
            assert!(channels.iter().all(|c| c.is_finite()), "{} {}", map, t);
            // Colors are u8, the interesting part is that this never panics.
            let _ = map.color(t);
            let _ = map.comb_color(t * 100.0, 200.0, 1.4);
        }
    }
}

#[test]
fn gamma_curve() {
    // Saturated lengths always map to the end of the gradient.
    assert_eq!(ColorMap::Heat.comb_color(400.0, 200.0, 1.4), Rgb::new(255, 200, 60));
    // Half the magnitude with gamma 2 reads the map at 0.25.
    assert_eq!(ColorMap::Heat.comb_color(100.0, 200.0, 2.0), ColorMap::Heat.color(0.25));
    assert_eq!(ColorMap::Heat.comb_color(0.0, 200.0, 1.4), Rgb::gray(0));
}

#[test]
fn names() {
    for map in &ColorMap::ALL {
        assert_eq!(ColorMap::lookup(map.name()), Some(*map));
    }
    assert_eq!(ColorMap::lookup("green-yellow-red"), Some(ColorMap::GreenYellowRed));
    assert_eq!(ColorMap::lookup("plasma"), None);
    assert_eq!(ColorMap::from_name("plasma"), ColorMap::Rainbow);
    assert_eq!(ColorMap::from_name(""), ColorMap::Rainbow);
    assert_eq!("Magma".parse::<ColorMap>(), Ok(ColorMap::Magma));
    assert!("plasma".parse::<ColorMap>().is_err());
}
