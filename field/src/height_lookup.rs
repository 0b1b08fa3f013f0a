use crate::sampled_path::*;

use flo_curves::bezier::*;
use flo_curves::line::{line_to_bezier};
use flo_curves::geo::{Coord2, Coordinate2D};

use std::collections::{HashMap};

///
/// Maps whole pixel columns to the view y position of a drawn path
///
/// The lookup is built from the geometry of a `SampledPath` rather than from the function it was sampled from, so a
/// height read from here lines up with the line that is drawn on screen. Columns where the path has a gap have no
/// entry.
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct HeightLookup {
    heights: HashMap<i64, f64>,
}

impl HeightLookup {
    ///
    /// Builds a lookup by walking a path, recording a point every `step` pixels of path length
    ///
    /// Each point's x coordinate is snapped to the nearest pixel column. Where several points snap to the same column,
    /// the last one along the path is the one that's kept.
    ///
    pub fn from_path(path: &SampledPath, step: f64, max_error: f64) -> HeightLookup {
        let mut heights = HashMap::new();

        for segment in path.segments() {
            let mut points = segment.iter().copied();

            let mut last_point = match points.next() {
                Some(start) => start,
                None        => { continue; }
            };
            record_point(&mut heights, last_point);

            for next_point in points {
                // Each piece of the path is a straight line: walk it as a bezier curve the same way the renderer sees it
                let line: Curve<Coord2> = line_to_bezier(&(last_point, next_point));

                for section in walk_curve_evenly(&line, step, max_error) {
                    record_point(&mut heights, section.end_point());
                }

                last_point = next_point;
            }
        }

        HeightLookup { heights }
    }

    ///
    /// Returns the view y position of the path at a view x position, or None if the path does not cover that column
    ///
    pub fn height_at(&self, view_x: f64) -> Option<f64> {
        if !view_x.is_finite() {
            return None;
        }

        self.heights.get(&(view_x.round() as i64)).copied()
    }

    ///
    /// The number of columns that have a height
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}

#[inline]
fn record_point(heights: &mut HashMap<i64, f64>, point: Coord2) {
    heights.insert(point.x().round() as i64, point.y());
}
