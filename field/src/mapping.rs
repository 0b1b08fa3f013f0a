use crate::error::*;
use crate::range::*;
use crate::view_box::*;

use flo_curves::geo::{Coord2};

use std::ops::{RangeInclusive};

///
/// Maps a value linearly from a world range onto a view range
///
/// The view range can run in either direction (`view_min` greater than `view_max` flips the axis), but the world
/// range must not be empty: a degenerate world range is reported as an error instead of producing NaN or infinity.
///
pub fn world_to_view(value: f64, world_min: f64, world_max: f64, view_min: f64, view_max: f64) -> Result<f64, FieldError> {
    if world_max == world_min {
        Err(FieldError::DegenerateRange { value: world_min })
    } else {
        Ok(map_linear(value, world_min, world_max, view_min, view_max))
    }
}

#[inline]
fn map_linear(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

///
/// Converts between world coordinates and view (pixel) coordinates for one exercise
///
/// World x increases to the right, as does view x. World y increases upwards but view y increases downwards, so
/// the y mapping is inverted: the bottom of the world range maps to the bottom edge of the drawable area.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CoordinateMapper {
    x_range:    WorldRange,
    y_range:    WorldRange,
    view_box:   ViewBox,
}

impl CoordinateMapper {
    ///
    /// Creates a coordinate mapper, checking that the ranges and the view box can be mapped between
    ///
    pub fn new(x_range: WorldRange, y_range: WorldRange, view_box: ViewBox) -> Result<CoordinateMapper, FieldError> {
        x_range.validate()?;
        y_range.validate()?;

        if !(view_box.drawable_width() > 0.0) || !(view_box.drawable_height() > 0.0) {
            return Err(FieldError::EmptyViewBox { width: view_box.width, height: view_box.height });
        }

        Ok(CoordinateMapper { x_range, y_range, view_box })
    }

    #[inline] pub fn x_range(&self) -> WorldRange  { self.x_range }
    #[inline] pub fn y_range(&self) -> WorldRange  { self.y_range }
    #[inline] pub fn view_box(&self) -> ViewBox    { self.view_box }

    #[inline]
    pub fn world_to_view_x(&self, world_x: f64) -> f64 {
        map_linear(world_x, self.x_range.min(), self.x_range.max(), self.view_box.left(), self.view_box.right())
    }

    #[inline]
    pub fn world_to_view_y(&self, world_y: f64) -> f64 {
        map_linear(world_y, self.y_range.min(), self.y_range.max(), self.view_box.bottom(), self.view_box.top())
    }

    #[inline]
    pub fn view_to_world_x(&self, view_x: f64) -> f64 {
        map_linear(view_x, self.view_box.left(), self.view_box.right(), self.x_range.min(), self.x_range.max())
    }

    #[inline]
    pub fn view_to_world_y(&self, view_y: f64) -> f64 {
        map_linear(view_y, self.view_box.bottom(), self.view_box.top(), self.y_range.min(), self.y_range.max())
    }

    ///
    /// Maps a world point to a view point
    ///
    #[inline]
    pub fn world_to_view_point(&self, world_x: f64, world_y: f64) -> Coord2 {
        Coord2(self.world_to_view_x(world_x), self.world_to_view_y(world_y))
    }

    ///
    /// The pixel columns across the drawable width, counted from the left margin
    ///
    pub fn columns(&self) -> RangeInclusive<u32> {
        0..=(self.view_box.drawable_width().floor() as u32)
    }

    ///
    /// The world x coordinate of a pixel column (column 0 is the left edge of the drawable area)
    ///
    #[inline]
    pub fn column_to_world_x(&self, column: u32) -> f64 {
        map_linear(column as f64, 0.0, self.view_box.drawable_width(), self.x_range.min(), self.x_range.max())
    }

    ///
    /// The position of the world origin in view coordinates (this can be outside the drawable area)
    ///
    pub fn origin(&self) -> Coord2 {
        self.world_to_view_point(0.0, 0.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn mapper() -> CoordinateMapper {
        CoordinateMapper::new(WorldRange::new(-5.0, 5.0).unwrap(), WorldRange::new(-5.0, 5.0).unwrap(), ViewBox::default()).unwrap()
    }

    #[test]
    fn map_to_view_range() {
        assert!(world_to_view(5.0, 0.0, 10.0, 100.0, 200.0) == Ok(150.0));
        assert!(world_to_view(0.0, 0.0, 10.0, 200.0, 100.0) == Ok(200.0));
    }

    #[test]
    fn degenerate_world_range_is_an_error() {
        assert!(world_to_view(1.0, 2.0, 2.0, 0.0, 100.0) == Err(FieldError::DegenerateRange { value: 2.0 }));
    }

    #[test]
    fn empty_view_box_is_an_error() {
        let mut view_box    = ViewBox::default();
        view_box.width      = 100.0;

        let mapper = CoordinateMapper::new(WorldRange::new(-5.0, 5.0).unwrap(), WorldRange::new(-5.0, 5.0).unwrap(), view_box);
        assert!(mapper == Err(FieldError::EmptyViewBox { width: 100.0, height: 600.0 }), "{:?}", mapper);
    }

    #[test]
    fn x_edges_match_margins() {
        let mapper = mapper();

        assert!(mapper.world_to_view_x(-5.0) == 50.0);
        assert!(mapper.world_to_view_x(5.0) == 750.0);
    }

    #[test]
    fn y_edges_are_inverted() {
        let mapper = mapper();

        assert!(mapper.world_to_view_y(-5.0) == 550.0);
        assert!(mapper.world_to_view_y(5.0) == 50.0);
    }

    #[test]
    fn origin_is_centered() {
        let origin = mapper().origin();

        assert!(origin == Coord2(400.0, 300.0), "{:?}", origin);
    }

    #[test]
    fn columns_cover_drawable_width() {
        let mapper  = mapper();
        let columns = mapper.columns();

        assert!(*columns.start() == 0);
        assert!(*columns.end() == 700);
        assert!(mapper.column_to_world_x(0) == -5.0);
        assert!(mapper.column_to_world_x(350) == 0.0);
        assert!(mapper.column_to_world_x(700) == 5.0);
    }
}
