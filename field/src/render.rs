use crate::mapping::*;
use crate::view_box::*;
use crate::sampled_path::*;

use flo_canvas::*;
use flo_curves::geo::{Coordinate2D};

/// Layer containing the grid lines, axes and tick labels
pub const GRID_LAYER: LayerId          = LayerId(0);

/// Layer containing the curves
pub const CURVE_LAYER: LayerId         = LayerId(1);

/// Layer containing points that stay on screen for the whole of a tutorial step
pub const PERSISTENT_LAYER: LayerId    = LayerId(2);

/// Layer containing guides and measurements that are replaced as the tutorial moves on
pub const OVERLAY_LAYER: LayerId       = LayerId(3);

///
/// How prominently a curve is drawn
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CurveEmphasis {
    Normal,
    Highlighted,
    Faded,
    Hidden,
}

///
/// Colours and sizes used when rendering a curve field
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FieldStyle {
    pub background:     Color,
    pub grid_color:     Color,
    pub axis_color:     Color,
    pub guide_color:    Color,
    pub label_color:    Color,

    /// Font used for the tick labels (labels are left out if this is `None`)
    pub label_font:     Option<FontId>,
    pub label_size:     f32,

    pub curve_width:    f32,
    pub height_width:   f32,
}

impl Default for FieldStyle {
    fn default() -> FieldStyle {
        FieldStyle {
            background:     Color::Rgba(1.0, 1.0, 1.0, 1.0),
            grid_color:     Color::Rgba(0.88, 0.88, 0.9, 1.0),
            axis_color:     Color::Rgba(0.2, 0.2, 0.25, 1.0),
            guide_color:    Color::Rgba(0.45, 0.45, 0.5, 1.0),
            label_color:    Color::Rgba(0.35, 0.35, 0.4, 1.0),

            label_font:     None,
            label_size:     12.0,

            curve_width:    3.0,
            height_width:   4.0,
        }
    }
}

///
/// Converts a view position (y runs downwards) to a canvas position (y runs upwards)
///
#[inline]
fn canvas_point(view_box: &ViewBox, view_x: f64, view_y: f64) -> (f32, f32) {
    (view_x as f32, (view_box.height - view_y) as f32)
}

///
/// Returns a color with its alpha value replaced
///
fn with_alpha(color: Color, alpha: f32) -> Color {
    let (r, g, b, _) = color.to_rgba_components();
    Color::Rgba(r, g, b, alpha)
}

///
/// FieldPrimitives adds the primitives needed to draw a curve field to a graphics context
///
/// All coordinates passed in are view coordinates: the primitives take care of flipping them into the canvas
/// coordinate scheme.
///
pub trait FieldPrimitives : GraphicsContext {
    ///
    /// Sets up the canvas so that the whole view box is visible
    ///
    fn field_viewport(&mut self, view_box: &ViewBox) {
        self.canvas_height(view_box.height as f32);
        self.center_region(0.0, 0.0, view_box.width as f32, view_box.height as f32);
    }

    ///
    /// Selects and clears a layer, ready to draw a new version of its contents
    ///
    fn restart_layer(&mut self, layer: LayerId, view_box: &ViewBox) {
        self.layer(layer);
        self.clear_layer();
        self.field_viewport(view_box);
    }

    ///
    /// Draws the grid lines, axes and (if a font is available) the tick labels for a coordinate mapper
    ///
    fn field_grid(&mut self, mapper: &CoordinateMapper, style: &FieldStyle) {
        let view_box    = mapper.view_box();
        let origin      = mapper.origin();

        // Grid lines at every whole number
        self.new_dash_pattern();
        self.line_width(1.0);
        self.stroke_color(style.grid_color);
        self.new_path();

        for x in mapper.x_range().whole_numbers() {
            let view_x = mapper.world_to_view_x(x as f64);
            self.field_line(&view_box, (view_x, view_box.top()), (view_x, view_box.bottom()));
        }

        for y in mapper.y_range().whole_numbers() {
            let view_y = mapper.world_to_view_y(y as f64);
            self.field_line(&view_box, (view_box.left(), view_y), (view_box.right(), view_y));
        }

        self.stroke();

        // Axes through the origin
        self.line_width(2.0);
        self.stroke_color(style.axis_color);
        self.new_path();
        self.field_line(&view_box, (view_box.left(), origin.y()), (view_box.right(), origin.y()));
        self.field_line(&view_box, (origin.x(), view_box.top()), (origin.x(), view_box.bottom()));
        self.stroke();

        // Tick labels (the origin is left unlabelled)
        if let Some(font) = style.label_font {
            self.fill_color(style.label_color);
            self.set_font_size(font, style.label_size);

            for x in mapper.x_range().whole_numbers().filter(|x| *x != 0) {
                let (label_x, label_y) = canvas_point(&view_box, mapper.world_to_view_x(x as f64), origin.y() + 15.0);

                self.begin_line_layout(label_x, label_y, TextAlignment::Center);
                self.layout_text(font, x.to_string());
                self.draw_text_layout();
            }

            for y in mapper.y_range().whole_numbers().filter(|y| *y != 0) {
                let (label_x, label_y) = canvas_point(&view_box, origin.x() - 8.0, mapper.world_to_view_y(y as f64));

                self.begin_line_layout(label_x, label_y, TextAlignment::Right);
                self.layout_text(font, y.to_string());
                self.draw_text_layout();
            }
        }
    }

    ///
    /// Adds a straight line between two view positions to the current path
    ///
    fn field_line(&mut self, view_box: &ViewBox, from: (f64, f64), to: (f64, f64)) {
        let (x1, y1) = canvas_point(view_box, from.0, from.1);
        let (x2, y2) = canvas_point(view_box, to.0, to.1);

        self.move_to(x1, y1);
        self.line_to(x2, y2);
    }

    ///
    /// Adds a sampled path to the current path, starting a new subpath at the start of every segment
    ///
    fn sampled_path(&mut self, view_box: &ViewBox, path: &SampledPath) {
        for segment in path.segments() {
            let mut points = segment.iter();

            if let Some(start) = points.next() {
                let (x, y) = canvas_point(view_box, start.x(), start.y());
                self.move_to(x, y);

                for point in points {
                    let (x, y) = canvas_point(view_box, point.x(), point.y());
                    self.line_to(x, y);
                }
            }
        }
    }

    ///
    /// Strokes a sampled curve with the specified emphasis
    ///
    fn field_curve(&mut self, view_box: &ViewBox, path: &SampledPath, color: Color, emphasis: CurveEmphasis, style: &FieldStyle) {
        let (width, alpha) = match emphasis {
            CurveEmphasis::Normal       => (style.curve_width, 1.0),
            CurveEmphasis::Highlighted  => (style.curve_width * 1.75, 1.0),
            CurveEmphasis::Faded        => (style.curve_width * 0.75, 0.25),
            CurveEmphasis::Hidden       => { return; }
        };

        if path.is_empty() {
            return;
        }

        self.new_dash_pattern();
        self.line_join(LineJoin::Round);
        self.line_cap(LineCap::Round);
        self.line_width(width);
        self.stroke_color(with_alpha(color, alpha));

        self.new_path();
        self.sampled_path(view_box, path);
        self.stroke();
    }

    ///
    /// Draws a dashed vertical guide line across the whole drawable area
    ///
    fn vertical_guide(&mut self, view_box: &ViewBox, view_x: f64, style: &FieldStyle) {
        self.new_dash_pattern();
        self.dash_length(6.0);
        self.dash_length(4.0);

        self.line_width(1.5);
        self.stroke_color(style.guide_color);
        self.new_path();
        self.field_line(view_box, (view_x, view_box.top()), (view_x, view_box.bottom()));
        self.stroke();

        self.new_dash_pattern();
    }

    ///
    /// Draws a line showing the height of a curve above (or below) the x axis
    ///
    fn height_line(&mut self, view_box: &ViewBox, view_x: f64, origin_y: f64, view_y: f64, color: Color, style: &FieldStyle) {
        self.new_dash_pattern();
        self.line_cap(LineCap::Butt);
        self.line_width(style.height_width);
        self.stroke_color(color);
        self.new_path();
        self.field_line(view_box, (view_x, origin_y), (view_x, view_y));
        self.stroke();
    }

    ///
    /// Draws a filled circle at a view position
    ///
    fn point_marker(&mut self, view_box: &ViewBox, view_x: f64, view_y: f64, radius: f32, color: Color) {
        let (x, y) = canvas_point(view_box, view_x, view_y);

        self.new_path();
        for d in draw_circle(x, y, radius) {
            self.draw(d);
        }
        self.fill_color(color);
        self.fill();
    }
}

///
/// All graphics contexts can draw curve fields
///
impl<T> FieldPrimitives for T
where T: GraphicsContext {

}

///
/// The dynamic graphics context object can also draw curve fields
///
impl<'a> FieldPrimitives for dyn 'a+GraphicsContext {

}
