//!
//! # curve_sum_tutorial
//!
//! A guided tutorial that shows how the sum of two curves is built up, one point at a time.
//!
//! Each `Exercise` pairs two curves with their sum and a list of `TutorialStep`s. The steps carry an
//! explanation (with formulas delimited by `$`) and a `StepAction` describing what to show on the curve
//! field: a reference line, the height of a curve, the two heights stacked into a sum point, an animation
//! across a set of ticks or the finished sum curve. `exercise_catalog()` supplies the three standard
//! exercises.
//!
//! `CurveSumTutorial` drives a `TutorialSurface`: the drawing surface for the field, the explanation
//! panel, the calculation display, the navigation controls and the legend. It never blocks or spawns
//! anything: animations are expressed as `TimerRequest`s for the host to run, and stale timers are
//! ignored when they come back.
//!

#[macro_use]
extern crate serde_derive;

mod error;
mod timer;
mod catalog;
mod surface;
mod settings;
mod exercise;
mod tutorial;
mod sequencer;

pub use self::error::*;
pub use self::timer::*;
pub use self::catalog::*;
pub use self::surface::*;
pub use self::settings::*;
pub use self::exercise::*;
pub use self::tutorial::*;
pub use self::sequencer::*;
