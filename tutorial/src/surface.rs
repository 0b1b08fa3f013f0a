use crate::error::*;

use curve_sum_field::canvas::*;

use log::{error};

///
/// Something that can receive drawing instructions for the curve field
///
pub trait DrawingSurface {
    fn send_drawing(&mut self, drawing: Vec<Draw>);
}

impl DrawingSurface for Vec<Draw> {
    fn send_drawing(&mut self, drawing: Vec<Draw>) {
        self.extend(drawing);
    }
}

impl DrawingSurface for Canvas {
    fn send_drawing(&mut self, drawing: Vec<Draw>) {
        self.write(drawing);
    }
}

///
/// The panel that shows the explanation for the current step
///
pub trait ExplanationPanel {
    ///
    /// Sets how visible the panel is (0.0 is hidden, 1.0 is fully visible)
    ///
    fn set_opacity(&mut self, opacity: f32);

    ///
    /// Replaces the text in the panel. Formulas in the text are delimited with `$`
    ///
    fn set_content(&mut self, text: &str);

    ///
    /// Called after new content has been set, for panels that need to typeset the formulas in it
    ///
    fn typeset(&mut self) { }
}

///
/// Shows the numeric result of adding the two curves at a point
///
pub trait CalculationDisplay {
    fn show(&mut self, calculation: &str);
    fn hide(&mut self);
}

///
/// The controls used to move through the tutorial
///
pub trait NavigationControls {
    /// Shows or hides the step navigation (it's hidden until an exercise is loaded)
    fn set_visible(&mut self, visible: bool);

    fn set_prev_enabled(&mut self, enabled: bool);
    fn set_next_enabled(&mut self, enabled: bool);

    /// Marks which exercise is currently loaded
    fn set_active_exercise(&mut self, exercise_id: Option<&str>);
}

///
/// An entry in the legend for the current exercise
///
#[derive(Clone, PartialEq, Debug)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

///
/// Lists the curves in the current exercise
///
pub trait Legend {
    fn set_entries(&mut self, entries: &[LegendEntry]);
}

///
/// The parts of the user interface that the tutorial drives
///
pub struct TutorialSurface {
    pub drawing:        Box<dyn DrawingSurface>,
    pub explanation:    Box<dyn ExplanationPanel>,
    pub calculation:    Box<dyn CalculationDisplay>,
    pub navigation:     Box<dyn NavigationControls>,
    pub legend:         Box<dyn Legend>,
}

///
/// Collects the parts of a tutorial surface, checking that nothing is missing before the tutorial starts
///
#[derive(Default)]
pub struct TutorialSurfaceBuilder {
    drawing:        Option<Box<dyn DrawingSurface>>,
    explanation:    Option<Box<dyn ExplanationPanel>>,
    calculation:    Option<Box<dyn CalculationDisplay>>,
    navigation:     Option<Box<dyn NavigationControls>>,
    legend:         Option<Box<dyn Legend>>,
}

impl TutorialSurfaceBuilder {
    pub fn new() -> TutorialSurfaceBuilder {
        TutorialSurfaceBuilder::default()
    }

    pub fn with_drawing(mut self, drawing: impl 'static + DrawingSurface) -> Self {
        self.drawing = Some(Box::new(drawing));
        self
    }

    pub fn with_explanation(mut self, explanation: impl 'static + ExplanationPanel) -> Self {
        self.explanation = Some(Box::new(explanation));
        self
    }

    pub fn with_calculation(mut self, calculation: impl 'static + CalculationDisplay) -> Self {
        self.calculation = Some(Box::new(calculation));
        self
    }

    pub fn with_navigation(mut self, navigation: impl 'static + NavigationControls) -> Self {
        self.navigation = Some(Box::new(navigation));
        self
    }

    pub fn with_legend(mut self, legend: impl 'static + Legend) -> Self {
        self.legend = Some(Box::new(legend));
        self
    }

    ///
    /// Creates the surface, or reports the first part that was never supplied
    ///
    pub fn build(self) -> Result<TutorialSurface, TutorialError> {
        Ok(TutorialSurface {
            drawing:        required(self.drawing, "drawing")?,
            explanation:    required(self.explanation, "explanation")?,
            calculation:    required(self.calculation, "calculation")?,
            navigation:     required(self.navigation, "navigation")?,
            legend:         required(self.legend, "legend")?,
        })
    }
}

fn required<T>(part: Option<T>, name: &'static str) -> Result<T, TutorialError> {
    part.ok_or_else(|| {
        error!("Cannot start the tutorial: the '{}' surface element is missing", name);
        TutorialError::MissingElement(name)
    })
}
