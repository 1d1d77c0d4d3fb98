#![deny(bare_trait_objects)]

//! Input and output formats around speedpunk curvature combs.
//!
//! - [parser](parser/index.html) reads SVG path data into a `CompoundPath`,
//! - [svg](svg/index.html) writes the combs of an outline as an SVG document.

pub extern crate speedpunk_comb as comb;

pub use comb::path;
pub use comb::path::math;

pub mod parser;
pub mod svg;

pub use crate::parser::{parse_path_data, ParseError, PathParser, Source};
pub use crate::svg::SvgWriter;
