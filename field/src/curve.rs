use flo_canvas::{Color};

use std::fmt;
use std::sync::*;

///
/// A real-valued function of world x
///
pub type CurveFunction = Arc<dyn Send + Sync + Fn(f64) -> f64>;

///
/// A named curve that can be drawn on a curve field
///
/// The function can return NaN or infinity for values of x where it is undefined: those points are left out of the
/// sampled path.
///
#[derive(Clone)]
pub struct Curve {
    id:         String,
    function:   CurveFunction,
    color:      Color,
    label:      String,
}

impl Curve {
    ///
    /// Creates a new curve
    ///
    pub fn new<TFn>(id: impl Into<String>, function: TFn, color: Color, label: impl Into<String>) -> Curve
    where
        TFn: 'static + Send + Sync + Fn(f64) -> f64,
    {
        Curve {
            id:         id.into(),
            function:   Arc::new(function),
            color:      color,
            label:      label.into(),
        }
    }

    #[inline] pub fn id(&self) -> &str         { &self.id }
    #[inline] pub fn label(&self) -> &str      { &self.label }
    #[inline] pub fn color(&self) -> Color     { self.color }

    ///
    /// Evaluates this curve at a world x position
    ///
    #[inline]
    pub fn evaluate(&self, world_x: f64) -> f64 {
        (self.function)(world_x)
    }
}

impl fmt::Debug for Curve {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Curve")
            .field("id", &self.id)
            .field("color", &self.color)
            .field("label", &self.label)
            .finish()
    }
}
