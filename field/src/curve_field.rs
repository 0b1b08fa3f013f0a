use crate::curve::*;
use crate::error::*;
use crate::range::*;
use crate::mapping::*;
use crate::settings::*;
use crate::sum_point::*;
use crate::sampled_path::*;
use crate::height_lookup::*;

use log::{debug};

///
/// A curve along with the path it was sampled to and the height lookup for that path
///
#[derive(Clone, Debug)]
struct PreparedCurve {
    curve:  Curve,
    path:   SampledPath,
    lookup: HeightLookup,
}

///
/// A coordinate plane with a set of named curves sampled onto it
///
/// Curves are sampled when they are added and the results are kept until the field is dropped: a new field is
/// created whenever the world ranges change.
///
#[derive(Clone, Debug)]
pub struct CurveField {
    mapper:     CoordinateMapper,
    settings:   FieldSettings,
    curves:     Vec<PreparedCurve>,
}

impl CurveField {
    ///
    /// Creates a new, empty curve field
    ///
    pub fn new(x_range: WorldRange, y_range: WorldRange, settings: FieldSettings) -> Result<CurveField, FieldError> {
        settings.check()?;
        let mapper = CoordinateMapper::new(x_range, y_range, settings.view_box)?;

        Ok(CurveField {
            mapper:     mapper,
            settings:   settings,
            curves:     vec![],
        })
    }

    ///
    /// Samples a curve and adds it to this field (replacing any existing curve with the same id)
    ///
    pub fn add_curve(&mut self, curve: Curve) {
        let path    = SampledPath::sample(&self.mapper, |x| curve.evaluate(x));
        let lookup  = HeightLookup::from_path(&path, self.settings.lookup_step, self.settings.lookup_max_error);

        debug!("Sampled curve '{}': {} segments, {} samples, {} lookup columns", curve.id(), path.segments().len(), path.sample_count(), lookup.len());

        let prepared = PreparedCurve { curve, path, lookup };

        if let Some(existing) = self.curves.iter_mut().find(|existing| existing.curve.id() == prepared.curve.id()) {
            *existing = prepared;
        } else {
            self.curves.push(prepared);
        }
    }

    ///
    /// The mapper used to convert between world and view coordinates for this field
    ///
    #[inline]
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    #[inline]
    pub fn settings(&self) -> &FieldSettings {
        &self.settings
    }

    ///
    /// The curves in this field, in the order they were added, along with their sampled paths
    ///
    pub fn curves(&self) -> impl '_ + Iterator<Item=(&Curve, &SampledPath)> {
        self.curves.iter().map(|prepared| (&prepared.curve, &prepared.path))
    }

    fn prepared(&self, curve_id: &str) -> Result<&PreparedCurve, FieldError> {
        self.curves.iter()
            .find(|prepared| prepared.curve.id() == curve_id)
            .ok_or_else(|| FieldError::UnknownCurve(curve_id.to_string()))
    }

    ///
    /// Retrieves the definition of a curve
    ///
    pub fn curve(&self, curve_id: &str) -> Result<&Curve, FieldError> {
        Ok(&self.prepared(curve_id)?.curve)
    }

    ///
    /// Retrieves the sampled path for a curve
    ///
    pub fn path(&self, curve_id: &str) -> Result<&SampledPath, FieldError> {
        Ok(&self.prepared(curve_id)?.path)
    }

    ///
    /// The view y position of a curve at a view x position
    ///
    /// This is `None` if the curve isn't drawn at that position (because it's undefined there or off the plane): callers
    /// should skip drawing anything for that position rather than using a default value.
    ///
    pub fn height_at(&self, curve_id: &str, view_x: f64) -> Result<Option<f64>, FieldError> {
        Ok(self.prepared(curve_id)?.lookup.height_at(view_x))
    }

    ///
    /// The height of a curve at a world x position, measured from its drawn path and converted back to world units
    ///
    pub fn world_height_at(&self, curve_id: &str, world_x: f64) -> Result<Option<f64>, FieldError> {
        let view_x = self.mapper.world_to_view_x(world_x);

        Ok(self.height_at(curve_id, view_x)?
            .map(|view_y| self.mapper.view_to_world_y(view_y)))
    }

    ///
    /// Adds two curves together at a world x position
    ///
    /// The heights of both curves are read from their drawn paths and stacked on top of each other in view space, so the
    /// result lands where the two measured heights would visually add up to. Returns `None` if either curve is not
    /// drawn at this position.
    ///
    pub fn sum_point(&self, first_id: &str, second_id: &str, world_x: f64) -> Result<Option<SumPoint>, FieldError> {
        let view_x  = self.mapper.world_to_view_x(world_x);
        let y1      = self.height_at(first_id, view_x)?;
        let y2      = self.height_at(second_id, view_x)?;

        let (y1, y2) = match (y1, y2) {
            (Some(y1), Some(y2))    => (y1, y2),
            _                       => {
                debug!("No sum point for '{}' + '{}' at x = {}: {} not defined there", first_id, second_id, world_x,
                    if y1.is_none() { first_id } else { second_id });
                return Ok(None);
            }
        };

        let origin_y    = self.mapper.origin().1;
        let mapper      = &self.mapper;
        let point       = SumPoint::from_view_heights(view_x, y1, y2, origin_y)
            .with_world_heights(|view_y| mapper.view_to_world_y(view_y));

        Ok(Some(point))
    }
}
