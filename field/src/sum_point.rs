///
/// Where the two source curves and their sum are at one x position, in view coordinates
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct SumPointView {
    /// The view x position that was measured
    pub x:          f64,

    /// View y position of the first curve
    pub y1:         f64,

    /// View y position of the second curve
    pub y2:         f64,

    /// View y position of the sum, found by stacking the two heights above the x axis
    pub sum_y:      f64,

    /// View y position of the x axis
    pub origin_y:   f64,
}

///
/// The heights of the two source curves and their sum, converted back to world units
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct SumPointWorld {
    pub y1:     f64,
    pub y2:     f64,
    pub sum_y:  f64,
}

///
/// The result of adding two curves together at a single x position
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct SumPoint {
    pub view:   SumPointView,
    pub world:  SumPointWorld,
}

impl SumPoint {
    ///
    /// Combines two measured view heights into a sum point
    ///
    /// Each curve's height is its signed pixel distance from the x axis: the sum is those two distances added together
    /// and measured from the axis again.
    ///
    pub fn from_view_heights(view_x: f64, y1: f64, y2: f64, origin_y: f64) -> SumPoint {
        let sum_y = origin_y - (origin_y - y1) - (origin_y - y2);

        SumPoint {
            view: SumPointView { x: view_x, y1, y2, sum_y, origin_y },
            world: SumPointWorld { y1: 0.0, y2: 0.0, sum_y: 0.0 },
        }
    }

    ///
    /// Fills in the world heights for this point using a function that maps view y positions to world y positions
    ///
    pub fn with_world_heights(self, view_to_world_y: impl Fn(f64) -> f64) -> SumPoint {
        SumPoint {
            view:   self.view,
            world:  SumPointWorld {
                y1:     view_to_world_y(self.view.y1),
                y2:     view_to_world_y(self.view.y2),
                sum_y:  view_to_world_y(self.view.sum_y),
            },
        }
    }

    ///
    /// A description of the sum for displaying to the user, with each value rounded to one decimal place
    ///
    pub fn calculation(&self) -> String {
        format!("{:.1} + {:.1} = {:.1}", self.world.y1, self.world.y2, self.world.sum_y)
    }
}
