use crate::error::*;
use crate::view_box::*;

///
/// Settings that control how curves are sampled and measured
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    /// The pixel surface that curves are drawn on
    pub view_box: ViewBox,

    /// Distance along the drawn path between the points that are recorded in the height lookup
    pub lookup_step: f64,

    /// Maximum error allowed when walking the path for the height lookup
    pub lookup_max_error: f64,
}

impl Default for FieldSettings {
    fn default() -> FieldSettings {
        FieldSettings {
            view_box:           ViewBox::default(),
            lookup_step:        0.25,
            lookup_max_error:   0.01,
        }
    }
}

impl FieldSettings {
    ///
    /// Checks that the lookup settings will make progress along a path
    ///
    pub fn check(&self) -> Result<(), FieldError> {
        let step_ok         = self.lookup_step.is_finite() && self.lookup_step > 0.0;
        let max_error_ok    = self.lookup_max_error.is_finite() && self.lookup_max_error > 0.0;

        if step_ok && max_error_ok {
            Ok(())
        } else {
            Err(FieldError::InvalidLookup { step: self.lookup_step, max_error: self.lookup_max_error })
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_settings_use_defaults() {
        let settings: FieldSettings = serde_json::from_str(r#"{ "lookup_step": 0.5 }"#).unwrap();

        assert!(settings.lookup_step == 0.5);
        assert!(settings.lookup_max_error == 0.01);
        assert!(settings.view_box == ViewBox::default());
    }

    #[test]
    fn default_lookup_is_valid() {
        assert!(FieldSettings::default().check().is_ok());
    }

    #[test]
    fn lookup_must_move_forward() {
        let mut settings = FieldSettings::default();

        settings.lookup_step = 0.0;
        assert!(settings.check().is_err());

        settings.lookup_step = -1.0;
        assert!(settings.check().is_err());

        settings.lookup_step        = 0.25;
        settings.lookup_max_error   = f64::NAN;
        assert!(settings.check().is_err());
    }

    #[test]
    fn custom_view_box() {
        let settings: FieldSettings = serde_json::from_str(r#"{
            "view_box": { "width": 400, "height": 300, "margin": { "top": 10, "right": 10, "bottom": 10, "left": 10 } }
        }"#).unwrap();

        assert!(settings.view_box.drawable_width() == 380.0);
        assert!(settings.view_box.drawable_height() == 280.0);
        assert!(settings.lookup_step == 0.25);
    }
}
