//!
//! # curve_sum_field
//!
//! `curve_sum_field` maps a pair of mathematical curves onto a pixel view and measures them there.
//!
//! The central type is `CurveField`: it owns the world ranges shown on the plane, the view box they are
//! drawn into and a set of named curves. Each curve is sampled once per pixel column into a `SampledPath`
//! (values that are undefined or fall outside the visible y-range break the path into separate segments)
//! and the path geometry is then walked at sub-pixel resolution to build a `HeightLookup`. Heights read
//! back from the lookup always agree with the line that was drawn, which is what makes it possible to
//! stack the heights of two curves on top of each other and land exactly on their sum.
//!
//! Rendering is expressed as `flo_canvas` drawing instructions. `FieldPrimitives` adds grid, curve and
//! overlay primitives to any `GraphicsContext`, so a field can be rendered into a window, an offscreen
//! target or just a `Vec<Draw>`.
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod error;
mod range;
mod curve;
mod render;
mod mapping;
mod settings;
mod view_box;
mod sum_point;
mod curve_field;
mod sampled_path;
mod height_lookup;

pub use self::error::*;
pub use self::range::*;
pub use self::curve::*;
pub use self::render::*;
pub use self::mapping::*;
pub use self::settings::*;
pub use self::view_box::*;
pub use self::sum_point::*;
pub use self::curve_field::*;
pub use self::sampled_path::*;
pub use self::height_lookup::*;

pub use flo_canvas as canvas;
pub use flo_curves::geo::{Coordinate2D, Coord2};
