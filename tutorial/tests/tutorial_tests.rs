use curve_sum_tutorial::*;
use curve_sum_field::*;
use curve_sum_field::canvas::*;

use std::rc::*;
use std::cell::*;
use std::time::{Duration};

///
/// Everything the tutorial has done to its surface
///
#[derive(Default)]
struct Recording {
    drawing:            Vec<Draw>,
    explanation:        String,
    opacity:            f32,
    typeset_count:      usize,
    calculation:        Option<String>,
    navigation_visible: bool,
    prev_enabled:       bool,
    next_enabled:       bool,
    active_exercise:    Option<String>,
    legend:             Vec<LegendEntry>,
}

#[derive(Clone)]
struct Recorder(Rc<RefCell<Recording>>);

impl DrawingSurface for Recorder {
    fn send_drawing(&mut self, drawing: Vec<Draw>) { self.0.borrow_mut().drawing.extend(drawing); }
}

impl ExplanationPanel for Recorder {
    fn set_opacity(&mut self, opacity: f32)     { self.0.borrow_mut().opacity = opacity; }
    fn set_content(&mut self, text: &str)       { self.0.borrow_mut().explanation = text.to_string(); }
    fn typeset(&mut self)                       { self.0.borrow_mut().typeset_count += 1; }
}

impl CalculationDisplay for Recorder {
    fn show(&mut self, calculation: &str)       { self.0.borrow_mut().calculation = Some(calculation.to_string()); }
    fn hide(&mut self)                          { self.0.borrow_mut().calculation = None; }
}

impl NavigationControls for Recorder {
    fn set_visible(&mut self, visible: bool)                    { self.0.borrow_mut().navigation_visible = visible; }
    fn set_prev_enabled(&mut self, enabled: bool)               { self.0.borrow_mut().prev_enabled = enabled; }
    fn set_next_enabled(&mut self, enabled: bool)               { self.0.borrow_mut().next_enabled = enabled; }
    fn set_active_exercise(&mut self, exercise_id: Option<&str>) { self.0.borrow_mut().active_exercise = exercise_id.map(|id| id.to_string()); }
}

impl Legend for Recorder {
    fn set_entries(&mut self, entries: &[LegendEntry])          { self.0.borrow_mut().legend = entries.to_vec(); }
}

fn tutorial_with(exercises: Vec<Exercise>) -> (CurveSumTutorial, Rc<RefCell<Recording>>) {
    tutorial_with_settings(exercises, TutorialSettings::default())
}

fn tutorial_with_settings(exercises: Vec<Exercise>, settings: TutorialSettings) -> (CurveSumTutorial, Rc<RefCell<Recording>>) {
    let recording   = Rc::new(RefCell::new(Recording::default()));
    let recorder    = Recorder(Rc::clone(&recording));

    let surface     = TutorialSurfaceBuilder::new()
        .with_drawing(recorder.clone())
        .with_explanation(recorder.clone())
        .with_calculation(recorder.clone())
        .with_navigation(recorder.clone())
        .with_legend(recorder)
        .build()
        .unwrap();

    (CurveSumTutorial::new(exercises, settings, surface), recording)
}

fn tutorial() -> (CurveSumTutorial, Rc<RefCell<Recording>>) {
    tutorial_with(exercise_catalog())
}

///
/// Fires every timer the tutorial has asked for so far, returning how many there were
///
fn fire_timers(tutorial: &mut CurveSumTutorial) -> usize {
    let requests = tutorial.take_timer_requests();

    for request in requests.iter() {
        tutorial.timer_fired(request.ticket);
    }

    requests.len()
}

fn go_to_step(tutorial: &mut CurveSumTutorial, step: usize) {
    tutorial.reset();
    for _ in 0..step {
        assert!(tutorial.next_step());
    }
}

fn count_fills(drawing: &[Draw]) -> usize {
    drawing.iter().filter(|draw| **draw == Draw::Fill).count()
}

#[test]
fn placeholder_before_loading() {
    let (mut tutorial, recording) = tutorial();

    assert!(tutorial.state() == SequencerState::NoExerciseLoaded);
    assert!(recording.borrow().explanation == PLACEHOLDER_TEXT);
    assert!(!recording.borrow().navigation_visible);
    assert!(recording.borrow().legend.is_empty());

    assert!(!tutorial.next_step());
    assert!(!tutorial.prev_step());
    assert!(!tutorial.reset());
    assert!(tutorial.take_timer_requests().is_empty());
}

#[test]
fn load_starts_at_first_step() {
    let (mut tutorial, recording) = tutorial();
    tutorial.load_exercise("ej1").unwrap();

    assert!(tutorial.state() == SequencerState::Step(0));
    assert!(tutorial.current_exercise().map(|exercise| exercise.id.as_str()) == Some("ej1"));

    let recording = recording.borrow();
    assert!(recording.navigation_visible);
    assert!(!recording.prev_enabled);
    assert!(recording.next_enabled);
    assert!(recording.active_exercise.as_deref() == Some("ej1"));
    assert!(recording.legend.len() == 3);
    assert!(recording.legend[2].label == "h(x) = f(x) + g(x) = 0");
    assert!(!recording.drawing.is_empty());
}

#[test]
fn explanation_appears_after_fade() {
    let (mut tutorial, recording) = tutorial();
    tutorial.load_exercise("ej2").unwrap();

    assert!(recording.borrow().opacity == 0.0);

    let requests = tutorial.take_timer_requests();
    assert!(requests.len() == 1, "{:?}", requests);
    assert!(requests[0].ticket.kind() == TimerKind::RevealExplanation);
    assert!(requests[0].delay == Duration::from_millis(300));

    tutorial.timer_fired(requests[0].ticket);

    let recording   = recording.borrow();
    let first_step  = &tutorial.exercises()[1].steps[0];
    assert!(recording.explanation == first_step.explanation);
    assert!(recording.opacity == 1.0);
    assert!(recording.typeset_count == 1);
}

#[test]
fn prev_at_first_step_does_nothing() {
    let (mut tutorial, _recording) = tutorial();
    tutorial.load_exercise("ej1").unwrap();

    assert!(!tutorial.prev_step());
    assert!(tutorial.state() == SequencerState::Step(0));
}

#[test]
fn next_at_last_step_does_nothing() {
    let (mut tutorial, recording) = tutorial();
    tutorial.load_exercise("ej3").unwrap();

    go_to_step(&mut tutorial, 9);
    assert!(tutorial.state() == SequencerState::Step(9));
    assert!(!recording.borrow().next_enabled);
    assert!(recording.borrow().prev_enabled);

    assert!(!tutorial.next_step());
    assert!(tutorial.state() == SequencerState::Step(9));
}

#[test]
fn reset_returns_to_first_step() {
    let (mut tutorial, _recording) = tutorial();
    tutorial.load_exercise("ej1").unwrap();

    go_to_step(&mut tutorial, 3);
    assert!(tutorial.reset());
    assert!(tutorial.state() == SequencerState::Step(0));
}

#[test]
fn load_resets_to_first_step() {
    let (mut tutorial, _recording) = tutorial();
    tutorial.load_exercise("ej1").unwrap();
    go_to_step(&mut tutorial, 4);

    tutorial.load_exercise("ej2").unwrap();
    assert!(tutorial.state() == SequencerState::Step(0));
    assert!(tutorial.current_exercise().map(|exercise| exercise.id.as_str()) == Some("ej2"));
}

#[test]
fn load_cancels_pending_timers() {
    let (mut tutorial, recording) = tutorial();
    tutorial.load_exercise("ej1").unwrap();

    // Step 5 animates the ticks
    go_to_step(&mut tutorial, 5);
    let old_requests = tutorial.take_timer_requests();
    assert!(old_requests.iter().any(|request| matches!(request.ticket.kind(), TimerKind::AnimationTick(_))));

    tutorial.load_exercise("ej2").unwrap();
    tutorial.take_timer_requests();

    let drawing_len = recording.borrow().drawing.len();
    let explanation = recording.borrow().explanation.clone();

    for request in old_requests {
        tutorial.timer_fired(request.ticket);
    }

    assert!(tutorial.state() == SequencerState::Step(0));
    assert!(recording.borrow().drawing.len() == drawing_len);
    assert!(recording.borrow().explanation == explanation);
}

#[test_log::test]
fn stale_tick_after_navigating_away() {
    let (mut tutorial, recording) = tutorial();
    tutorial.load_exercise("ej1").unwrap();

    go_to_step(&mut tutorial, 5);
    let old_requests = tutorial.take_timer_requests();

    assert!(tutorial.prev_step());
    let drawing_len = recording.borrow().drawing.len();

    for request in old_requests {
        tutorial.timer_fired(request.ticket);
    }

    // Nothing is drawn and the animation does not carry on to the next step
    assert!(tutorial.state() == SequencerState::Step(4));
    assert!(recording.borrow().drawing.len() == drawing_len);
}

#[test]
fn tick_animation_adds_a_point_per_tick_then_advances() {
    let (mut tutorial, recording) = tutorial();
    tutorial.load_exercise("ej1").unwrap();
    go_to_step(&mut tutorial, 4);
    tutorial.take_timer_requests();

    let drawing_start = recording.borrow().drawing.len();
    assert!(tutorial.next_step());

    // The first point is drawn straight away
    assert!(count_fills(&recording.borrow().drawing[drawing_start..]) == 1);

    let mut rounds = 0;
    while tutorial.state() == SequencerState::Step(5) {
        assert!(fire_timers(&mut tutorial) > 0, "Animation stalled");

        rounds += 1;
        assert!(rounds < 20, "Animation never finished");
    }

    // 5 ticks, then the final curve is revealed
    assert!(tutorial.state() == SequencerState::Step(6));
    assert!(count_fills(&recording.borrow().drawing[drawing_start..]) == 5);
}

#[test]
fn tick_animation_on_the_hyperbola() {
    let (mut tutorial, recording) = tutorial();
    tutorial.load_exercise("ej2").unwrap();
    go_to_step(&mut tutorial, 4);
    tutorial.take_timer_requests();

    let drawing_start = recording.borrow().drawing.len();
    assert!(tutorial.next_step());

    for _ in 0..20 {
        if tutorial.state() != SequencerState::Step(5) { break; }
        fire_timers(&mut tutorial);
    }

    assert!(tutorial.state() == SequencerState::Step(6));
    assert!(count_fills(&recording.borrow().drawing[drawing_start..]) == 8);
}

#[test]
fn sum_point_shows_calculation() {
    let (mut tutorial, recording) = tutorial();
    tutorial.load_exercise("ej2").unwrap();

    go_to_step(&mut tutorial, 4);
    assert!(recording.borrow().calculation.as_deref() == Some("0.5 + 2.0 = 2.5"), "{:?}", recording.borrow().calculation);

    // Moving on clears the calculation
    tutorial.next_step();
    assert!(recording.borrow().calculation.is_none());
}

#[test]
fn cancellation_point_lies_on_the_axis() {
    let (mut tutorial, recording) = tutorial();
    tutorial.load_exercise("ej3").unwrap();

    go_to_step(&mut tutorial, 6);
    let calculation = recording.borrow().calculation.clone().unwrap();

    assert!(calculation.starts_with("1.0 + -1.0 = "), "{}", calculation);
}

#[test]
fn sum_curve_hidden_until_final_step() {
    let sum_stroke = |drawing: &[Draw]| drawing.iter().any(|draw| *draw == Draw::StrokeColor(SUM_CURVE_COLOR));

    let (mut tutorial, recording) = tutorial();
    tutorial.load_exercise("ej1").unwrap();
    assert!(!sum_stroke(&recording.borrow().drawing));

    go_to_step(&mut tutorial, 5);
    let drawing_start = recording.borrow().drawing.len();
    tutorial.take_timer_requests();
    assert!(tutorial.next_step());

    assert!(tutorial.state() == SequencerState::Step(6));
    assert!(sum_stroke(&recording.borrow().drawing[drawing_start..]));
}

#[test]
fn unknown_exercise() {
    let (mut tutorial, _recording) = tutorial();
    tutorial.load_exercise("ej1").unwrap();

    assert!(tutorial.load_exercise("ej9") == Err(TutorialError::UnknownExercise("ej9".to_string())));
    assert!(tutorial.current_exercise().map(|exercise| exercise.id.as_str()) == Some("ej1"));
}

#[test]
fn degenerate_range_fails_on_load() {
    let mut exercise    = exercise_catalog().remove(0);
    exercise.id         = "flat".to_string();
    exercise.y_range    = WorldRange::new_unchecked(2.0, 2.0);

    let (mut tutorial, _recording) = tutorial_with(vec![exercise]);

    let result = tutorial.load_exercise("flat");
    assert!(result == Err(TutorialError::Field(FieldError::DegenerateRange { value: 2.0 })), "{:?}", result);
    assert!(tutorial.state() == SequencerState::NoExerciseLoaded);
}

#[test]
fn zero_lookup_step_fails_on_load() {
    let settings: TutorialSettings = serde_json::from_str(r#"{ "field": { "lookup_step": 0 } }"#).unwrap();
    let (mut tutorial, _recording) = tutorial_with_settings(exercise_catalog(), settings);

    let result = tutorial.load_exercise("ej1");
    assert!(matches!(result, Err(TutorialError::Field(FieldError::InvalidLookup { .. }))), "{:?}", result);
    assert!(tutorial.state() == SequencerState::NoExerciseLoaded);
}

#[test]
fn empty_exercise_fails_on_load() {
    let mut exercise    = exercise_catalog().remove(0);
    exercise.id         = "empty".to_string();
    exercise.steps      = vec![];

    let (mut tutorial, _recording) = tutorial_with(vec![exercise]);

    assert!(tutorial.load_exercise("empty") == Err(TutorialError::EmptyExercise("empty".to_string())));
}

#[test_log::test]
fn missing_surface_element() {
    let recording   = Rc::new(RefCell::new(Recording::default()));
    let recorder    = Recorder(Rc::clone(&recording));

    let surface     = TutorialSurfaceBuilder::new()
        .with_drawing(recorder.clone())
        .with_explanation(recorder.clone())
        .with_calculation(recorder.clone())
        .with_legend(recorder)
        .build();

    assert!(matches!(surface, Err(TutorialError::MissingElement("navigation"))));
}

#[test]
fn field_matches_the_exercise() {
    let (mut tutorial, _recording) = tutorial();
    tutorial.load_exercise("ej2").unwrap();

    let field   = tutorial.field().unwrap();
    let view_x  = field.mapper().world_to_view_x(0.0);

    assert!(field.height_at("f1", view_x).unwrap().is_none());
    assert!(field.height_at("f2", view_x).unwrap().is_some());
    assert!(field.curves().count() == 3);
}
