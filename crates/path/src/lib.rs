#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! Data structures to describe vector outlines made of cubic bézier curves.
//!
//! Outlines are described the way drawing applications expose them: a sequence
//! of anchors, each carrying its incoming and outgoing handles. Two consecutive
//! anchors define one cubic bézier segment.
//!
//! This crate is reexported in [speedpunk](../speedpunk/index.html).
//!
//! # Examples
//!
//! ```
//! use speedpunk_path::Path;
//! use speedpunk_path::math::point;
//!
//! let mut builder = Path::builder();
//! builder.begin(point(0.0, 0.0));
//! builder.line_to(point(10.0, 0.0));
//! builder.cubic_bezier_to(point(15.0, 0.0), point(15.0, 10.0), point(10.0, 10.0));
//! builder.close();
//!
//! let compound = builder.build();
//! let path = &compound.paths[0];
//!
//! for segment in path.segments() {
//!     println!("{} straight: {}", segment.index, segment.is_straight());
//! }
//! ```

pub use speedpunk_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod builder;
pub mod path;
pub mod source;
pub mod winding;

#[doc(inline)]
pub use crate::builder::PathBuilder;
#[doc(inline)]
pub use crate::path::{Anchor, CompoundPath, Path, PathItem, PathSegment, Segments};
#[doc(inline)]
pub use crate::source::PathSource;
#[doc(inline)]
pub use crate::winding::{compute_winding, Winding};

pub mod math {
    //! f64 version of the speedpunk_geom types used everywhere. Most other speedpunk
    //! crates reexport them.

    use crate::geom::euclid;

    /// Alias for ```euclid::default::Point2D<f64>```.
    pub type Point = euclid::default::Point2D<f64>;

    /// Alias for ```euclid::default::Vector2D<f64>```.
    pub type Vector = euclid::default::Vector2D<f64>;

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }
}
