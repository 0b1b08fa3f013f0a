//!
//! # curve_sum_draw
//!
//! `curve_sum_draw` shows the curve sum tutorial in a window using `flo_draw`.
//!
//! Call `show_curve_sum_window(())` from `main()` to open a window with the standard exercises. The window shows
//! the curve field; the explanation for each step, the calculation for the sum point and the legend are written
//! to the terminal. Keys `1` to `9` load an exercise, `→` or `N` move to the next step, `←` or `P` move back and
//! `R` returns to the first step.
//!
//! The tutorial itself never waits: it asks for timers with `take_timer_requests()` and the window runs them
//! alongside the event stream, passing each ticket back to `timer_fired()` once its delay has elapsed.
//!

mod terminal_panel;
mod tutorial_window;
mod window_properties;

pub use self::terminal_panel::*;
pub use self::tutorial_window::*;
pub use self::window_properties::*;

pub use curve_sum_tutorial as tutorial;
