#![deny(bare_trait_objects)]

//! Curvature combs for cubic bézier outlines.
//!
//! # Crates
//!
//! This meta-crate (`speedpunk`) reexports the following sub-crates for convenience:
//!
//! * **speedpunk_geom** - Cubic bézier segments, their derivatives and curvature.
//! * **speedpunk_path** - Outlines made of anchors with incoming and outgoing handles.
//! * **speedpunk_comb** - Sampling, smoothing, coloring and rendering of curvature combs.
//! * **speedpunk_extra** - SVG path data parsing and SVG output.
//!
//! Each `speedpunk_<name>` crate is reexported as a `<name>` module in `speedpunk`. For example:
//!
//! ```ignore
//! extern crate speedpunk_comb;
//! use speedpunk_comb::CombOptions;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! extern crate speedpunk;
//! use speedpunk::comb::CombOptions;
//! ```
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! When using the main crate `speedpunk`, `speedpunk_extra` is disabled by default.
//! It can be added with the feature flag `extra`.
//!
//! # Examples
//!
//! ## Combing a circle
//!
//! ```
//! use speedpunk::comb::{generate, CombDirection, CombOptions};
//! use speedpunk::math::point;
//! use speedpunk::path::{Anchor, Path};
//!
//! // A circle of radius 100 made of four quarter arcs.
//! let h = 55.228;
//! let circle = Path::new(
//!     vec![
//!         Anchor::new(point(100.0, -h), point(100.0, 0.0), point(100.0, h)),
//!         Anchor::new(point(h, 100.0), point(0.0, 100.0), point(-h, 100.0)),
//!         Anchor::new(point(-100.0, h), point(-100.0, 0.0), point(-100.0, -h)),
//!         Anchor::new(point(-h, -100.0), point(0.0, -100.0), point(h, -100.0)),
//!     ],
//!     true,
//! );
//!
//! let options = CombOptions::DEFAULT
//!     .with_step(0.25)
//!     .with_direction(CombDirection::Both);
//!
//! let output = generate(&circle, &options).unwrap();
//!
//! // Five samples per arc, two ticks per sample.
//! assert_eq!(output.instructions.len(), 40);
//! println!("{}", output.summary);
//! ```

pub extern crate speedpunk_comb;
#[cfg(feature = "extra")]
pub extern crate speedpunk_extra;
pub extern crate speedpunk_geom;
pub extern crate speedpunk_path;

pub use speedpunk_comb as comb;
#[cfg(feature = "extra")]
pub use speedpunk_extra as extra;
pub use speedpunk_geom as geom;
pub use speedpunk_path as path;

pub use speedpunk_path::math;
