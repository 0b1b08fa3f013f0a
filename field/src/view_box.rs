///
/// Space left around the drawable part of a view box, in pixels
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct ViewMargin {
    pub top:    f64,
    pub right:  f64,
    pub bottom: f64,
    pub left:   f64,
}

///
/// The pixel dimensions of the surface that a curve field is drawn on
///
/// The same view box is used for every exercise: only the world ranges change.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct ViewBox {
    pub width:  f64,
    pub height: f64,
    pub margin: ViewMargin,
}

impl Default for ViewMargin {
    fn default() -> ViewMargin {
        ViewMargin {
            top:    50.0,
            right:  50.0,
            bottom: 50.0,
            left:   50.0,
        }
    }
}

impl Default for ViewBox {
    fn default() -> ViewBox {
        ViewBox {
            width:  800.0,
            height: 600.0,
            margin: ViewMargin::default(),
        }
    }
}

impl ViewBox {
    /// Width of the area inside the margins
    #[inline] pub fn drawable_width(&self) -> f64     { self.width - self.margin.left - self.margin.right }

    /// Height of the area inside the margins
    #[inline] pub fn drawable_height(&self) -> f64    { self.height - self.margin.top - self.margin.bottom }

    #[inline] pub fn left(&self) -> f64               { self.margin.left }
    #[inline] pub fn right(&self) -> f64              { self.width - self.margin.right }
    #[inline] pub fn top(&self) -> f64                { self.margin.top }
    #[inline] pub fn bottom(&self) -> f64             { self.height - self.margin.bottom }
}
