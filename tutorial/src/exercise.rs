use crate::error::*;
use crate::surface::*;

use curve_sum_field::*;

///
/// Identifies one of the three curves in an exercise
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CurveRole {
    /// The first of the curves being added
    First,

    /// The second of the curves being added
    Second,

    /// The sum of the first and second curves
    Sum,
}

///
/// What a tutorial step shows on the curve field
///
/// x positions are in world coordinates.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum StepAction {
    /// Draws attention to the two curves being added
    HighlightSources,

    /// Draws a vertical reference line at an x position
    ShowVerticalLine(f64),

    /// Shows the height of one curve above the x axis
    ShowHeight { curve: CurveRole, x: f64 },

    /// Shows the heights of both source curves at once
    ShowHeights(f64),

    /// Shows both heights stacked on top of each other, the resulting point and the calculation
    ShowSumPoint(f64),

    /// Adds the sum point for every tick in turn, then moves on to the next step
    AnimateAllTicks,

    /// Reveals the sum curve
    DrawFinalCurve,

    /// Shows the explanation only
    Nothing,
}

///
/// A single step in an exercise
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TutorialStep {
    /// Text explaining this step (formulas are delimited with `$`)
    pub explanation:    String,
    pub action:         StepAction,
}

impl TutorialStep {
    pub fn new(explanation: impl Into<String>, action: StepAction) -> TutorialStep {
        TutorialStep {
            explanation:    explanation.into(),
            action:         action,
        }
    }
}

///
/// A hand-authored exercise: two curves, their sum and the steps that explain how the sum is built
///
#[derive(Clone, Debug)]
pub struct Exercise {
    pub id:         String,
    pub title:      String,

    pub first:      Curve,
    pub second:     Curve,
    pub sum:        Curve,

    pub x_range:    WorldRange,
    pub y_range:    WorldRange,

    /// The x positions visited by the tick animation, in order
    pub ticks:      Vec<f64>,

    pub steps:      Vec<TutorialStep>,
}

impl Exercise {
    ///
    /// Retrieves one of the curves in this exercise
    ///
    pub fn curve(&self, role: CurveRole) -> &Curve {
        match role {
            CurveRole::First    => &self.first,
            CurveRole::Second   => &self.second,
            CurveRole::Sum      => &self.sum,
        }
    }

    ///
    /// Creates the curve field for this exercise, sampling all three curves
    ///
    pub fn build_field(&self, settings: FieldSettings) -> Result<CurveField, TutorialError> {
        let mut field = CurveField::new(self.x_range, self.y_range, settings)?;

        field.add_curve(self.first.clone());
        field.add_curve(self.second.clone());
        field.add_curve(self.sum.clone());

        Ok(field)
    }

    ///
    /// The legend for this exercise: the two source curves followed by the sum
    ///
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        [&self.first, &self.second, &self.sum].iter()
            .map(|curve| LegendEntry { label: curve.label().to_string(), color: curve.color() })
            .collect()
    }
}
