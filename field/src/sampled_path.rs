use crate::mapping::*;

use flo_curves::geo::{Coord2, Coordinate};

use std::mem;

///
/// A curve that has been sampled once per pixel column and converted to view coordinates
///
/// The path is split into segments wherever the curve is undefined, not finite or outside of the visible y-range.
/// Nothing should be drawn between two segments: the gap is where an asymptote or an excursion off the plane is.
/// Every segment contains at least one point and has one point for each pixel column it covers.
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SampledPath {
    segments: Vec<Vec<Coord2>>,
}

impl SampledPath {
    ///
    /// Samples a function across every pixel column of a mapper
    ///
    pub fn sample<TFn>(mapper: &CoordinateMapper, function: TFn) -> SampledPath
    where
        TFn: Fn(f64) -> f64,
    {
        let y_range             = mapper.y_range();
        let mut segments        = vec![];
        let mut current_segment = vec![];

        for column in mapper.columns() {
            let world_x = mapper.column_to_world_x(column);
            let world_y = function(world_x);

            if world_y.is_finite() && y_range.contains(world_y) {
                current_segment.push(mapper.world_to_view_point(world_x, world_y));
            } else if !current_segment.is_empty() {
                // Break the path here
                segments.push(mem::take(&mut current_segment));
            }
        }

        if !current_segment.is_empty() {
            segments.push(current_segment);
        }

        SampledPath { segments }
    }

    ///
    /// The segments of this path, in order from left to right
    ///
    #[inline]
    pub fn segments(&self) -> &[Vec<Coord2>] {
        &self.segments
    }

    ///
    /// True if no part of the curve was visible
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    ///
    /// The total number of samples in all segments
    ///
    pub fn sample_count(&self) -> usize {
        self.segments.iter().map(|segment| segment.len()).sum()
    }

    ///
    /// The length of the path (the gaps between segments do not count towards this)
    ///
    pub fn length(&self) -> f64 {
        self.segments.iter()
            .flat_map(|segment| segment.windows(2))
            .map(|line| line[0].distance_to(&line[1]))
            .sum()
    }
}
