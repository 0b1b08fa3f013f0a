use crate::error::*;

use std::ops::{RangeInclusive};

///
/// The part of an axis that is visible on the plane, in world (mathematical) units
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct WorldRange {
    min: f64,
    max: f64,
}

impl WorldRange {
    ///
    /// Creates a new world range, checking that it can be mapped onto a view
    ///
    pub fn new(min: f64, max: f64) -> Result<WorldRange, FieldError> {
        let range = WorldRange { min, max };
        range.validate()?;

        Ok(range)
    }

    ///
    /// Creates a world range without checking it
    ///
    /// The range is still checked when a `CoordinateMapper` is created from it, so a bad range fails when the
    /// field is set up rather than here.
    ///
    #[inline]
    pub const fn new_unchecked(min: f64, max: f64) -> WorldRange {
        WorldRange { min, max }
    }

    ///
    /// Checks that this range can be used for mapping (ranges that were deserialized skip the check in `new()`)
    ///
    pub fn validate(&self) -> Result<(), FieldError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            Err(FieldError::NonFiniteRange { min: self.min, max: self.max })
        } else if self.min == self.max {
            Err(FieldError::DegenerateRange { value: self.min })
        } else if self.min > self.max {
            Err(FieldError::InvertedRange { min: self.min, max: self.max })
        } else {
            Ok(())
        }
    }

    #[inline] pub fn min(&self) -> f64     { self.min }
    #[inline] pub fn max(&self) -> f64     { self.max }
    #[inline] pub fn span(&self) -> f64    { self.max - self.min }

    ///
    /// True if a value lies within this range (both ends are included)
    ///
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    ///
    /// The whole numbers that lie within this range (used for grid lines)
    ///
    pub fn whole_numbers(&self) -> RangeInclusive<i64> {
        (self.min.ceil() as i64)..=(self.max.floor() as i64)
    }
}
