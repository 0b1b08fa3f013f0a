use curve_sum_draw::*;
use curve_sum_draw::tutorial::*;

///
/// Opens the tutorial with slower animations, which is easier to follow when presenting
///
pub fn main() {
    env_logger::init();

    let mut properties                      = WindowProperties::from(&"Suma de curvas (lento)");
    properties.settings.tick_delay_ms       = 900;
    properties.settings.explanation_fade_ms = 600;
    properties.exercises.retain(|exercise| exercise.id != "ej1");

    show_curve_sum_window(properties);
}
