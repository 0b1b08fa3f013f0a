use curve_sum_field::*;

use std::time::{Duration};

///
/// Timings and sizes used by the tutorial
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorialSettings {
    /// Settings for the curve field that each exercise is drawn on
    pub field: FieldSettings,

    /// Time the explanation panel stays faded out before the text for a new step is shown
    pub explanation_fade_ms: u64,

    /// Time between the points of the tick animation
    pub tick_delay_ms: u64,

    /// Radius of the point showing the sum at a single position
    pub sum_point_radius: f32,

    /// Radius of the points left behind by the tick animation
    pub persistent_point_radius: f32,

    #[serde(skip)]
    pub style: FieldStyle,
}

impl Default for TutorialSettings {
    fn default() -> TutorialSettings {
        TutorialSettings {
            field:                      FieldSettings::default(),
            explanation_fade_ms:        300,
            tick_delay_ms:              300,
            sum_point_radius:           8.0,
            persistent_point_radius:    6.0,
            style:                      FieldStyle::default(),
        }
    }
}

impl TutorialSettings {
    #[inline]
    pub fn explanation_fade(&self) -> Duration {
        Duration::from_millis(self.explanation_fade_ms)
    }

    #[inline]
    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.tick_delay_ms)
    }
}
