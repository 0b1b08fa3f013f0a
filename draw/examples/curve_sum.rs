use curve_sum_draw::*;

///
/// Opens the curve sum tutorial with the standard exercises
///
/// Run with `RUST_LOG=debug` to see the timers and the steps as they change.
///
pub fn main() {
    env_logger::init();

    show_curve_sum_window(());
}
