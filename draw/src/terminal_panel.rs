use curve_sum_tutorial::*;

use log::{trace};

use std::sync::*;

///
/// The text-based parts of the tutorial (explanation, calculation, navigation and legend), written to the terminal
///
/// The window only shows the curve field, so the text that goes alongside it is printed instead. The panel is a
/// cheap handle: clones share the same state so one panel can be used for every part of the surface.
///
#[derive(Clone, Default)]
pub struct TerminalPanel {
    state: Arc<Mutex<TerminalPanelState>>,
}

#[derive(Default)]
struct TerminalPanelState {
    visible:            bool,
    prev_enabled:       bool,
    next_enabled:       bool,
    active_exercise:    Option<String>,
}

impl TerminalPanel {
    pub fn new() -> TerminalPanel {
        TerminalPanel::default()
    }

    fn with_state<TResult>(&self, action: impl FnOnce(&mut TerminalPanelState) -> TResult) -> TResult {
        let mut state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        action(&mut state)
    }
}

///
/// Formats the navigation hint shown after each explanation
///
pub fn navigation_hint(prev_enabled: bool, next_enabled: bool) -> String {
    let prev = if prev_enabled { "[←/P] anterior" } else { "" };
    let next = if next_enabled { "[→/N] siguiente" } else { "" };

    [prev, next, "[R] reiniciar", "[1-3] ejercicio"].iter()
        .filter(|part| !part.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join("   ")
}

///
/// Formats a legend entry with the colour of its curve as a hex value
///
pub fn legend_line(entry: &LegendEntry) -> String {
    let (r, g, b, _) = entry.color.to_rgba_components();
    let channel      = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;

    format!("  #{:02x}{:02x}{:02x}  {}", channel(r), channel(g), channel(b), entry.label)
}

impl ExplanationPanel for TerminalPanel {
    fn set_opacity(&mut self, opacity: f32) {
        trace!("Explanation opacity {}", opacity);
    }

    fn set_content(&mut self, text: &str) {
        println!();
        println!("{}", text);
    }
}

impl CalculationDisplay for TerminalPanel {
    fn show(&mut self, calculation: &str) {
        println!("  = {}", calculation);
    }

    fn hide(&mut self) { }
}

impl NavigationControls for TerminalPanel {
    fn set_visible(&mut self, visible: bool) {
        self.with_state(|state| state.visible = visible);
    }

    fn set_prev_enabled(&mut self, enabled: bool) {
        self.with_state(|state| state.prev_enabled = enabled);
    }

    fn set_next_enabled(&mut self, enabled: bool) {
        let (visible, prev_enabled) = self.with_state(|state| {
            state.next_enabled = enabled;
            (state.visible, state.prev_enabled)
        });

        // The tutorial updates 'next' last, so this is when the hint is up to date
        if visible {
            println!("  {}", navigation_hint(prev_enabled, enabled));
        }
    }

    fn set_active_exercise(&mut self, exercise_id: Option<&str>) {
        self.with_state(|state| state.active_exercise = exercise_id.map(|id| id.to_string()));
    }
}

impl Legend for TerminalPanel {
    fn set_entries(&mut self, entries: &[LegendEntry]) {
        if entries.is_empty() {
            return;
        }

        let active = self.with_state(|state| state.active_exercise.clone());
        println!();
        println!("{}", active.unwrap_or_default());
        for entry in entries {
            println!("{}", legend_line(entry));
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use flo_draw::canvas::*;

    #[test]
    fn hint_at_first_step() {
        assert!(navigation_hint(false, true) == "[→/N] siguiente   [R] reiniciar   [1-3] ejercicio");
    }

    #[test]
    fn hint_in_the_middle() {
        assert!(navigation_hint(true, true).starts_with("[←/P] anterior   [→/N] siguiente"));
    }

    #[test]
    fn legend_colour() {
        let entry = LegendEntry { label: "f(x) = 1/x".to_string(), color: Color::Rgba(1.0, 0.0, 0.5, 1.0) };

        assert!(legend_line(&entry) == "  #ff0080  f(x) = 1/x", "{}", legend_line(&entry));
    }
}
