use curve_sum_tutorial::*;

///
/// Trait implemented by objects that can provide the properties of a tutorial window
///
pub trait TutorialWindowProperties {
    ///
    /// The title of the window
    ///
    fn title(&self) -> String;

    ///
    /// Timings and sizes for the tutorial
    ///
    fn settings(&self) -> TutorialSettings;

    ///
    /// The exercises offered in the window (the keys 1 to 9 load them in order)
    ///
    fn exercises(&self) -> Vec<Exercise>;
}

///
/// '()' can be used to create a window with the standard exercises and settings
///
impl TutorialWindowProperties for () {
    fn title(&self) -> String                   { "Suma de curvas".to_string() }
    fn settings(&self) -> TutorialSettings      { TutorialSettings::default() }
    fn exercises(&self) -> Vec<Exercise>        { exercise_catalog() }
}

///
/// A string can be used to set just the window title
///
impl<'a> TutorialWindowProperties for &'a str {
    fn title(&self) -> String                   { self.to_string() }
    fn settings(&self) -> TutorialSettings      { TutorialSettings::default() }
    fn exercises(&self) -> Vec<Exercise>        { exercise_catalog() }
}

///
/// The window properties struct makes it possible to supply custom settings or a different set of exercises
///
#[derive(Clone, Debug)]
pub struct WindowProperties {
    pub title:      String,
    pub settings:   TutorialSettings,
    pub exercises:  Vec<Exercise>,
}

impl WindowProperties {
    ///
    /// Creates a copy of an object implementing the TutorialWindowProperties trait
    ///
    pub fn from<T: TutorialWindowProperties>(properties: &T) -> WindowProperties {
        WindowProperties {
            title:      properties.title(),
            settings:   properties.settings(),
            exercises:  properties.exercises(),
        }
    }
}

impl TutorialWindowProperties for WindowProperties {
    fn title(&self) -> String                   { self.title.clone() }
    fn settings(&self) -> TutorialSettings      { self.settings.clone() }
    fn exercises(&self) -> Vec<Exercise>        { self.exercises.clone() }
}
