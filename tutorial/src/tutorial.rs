use crate::error::*;
use crate::timer::*;
use crate::surface::*;
use crate::settings::*;
use crate::exercise::*;
use crate::sequencer::*;

use curve_sum_field::*;
use curve_sum_field::canvas::*;

use log::{debug, info, warn};

/// Text shown in the explanation panel before an exercise has been chosen
pub const PLACEHOLDER_TEXT: &str = "Selecciona un ejercicio para comenzar.";

///
/// How each curve of the current exercise is drawn
///
#[derive(Clone, Copy, PartialEq, Debug)]
struct CurveEmphases {
    first:  CurveEmphasis,
    second: CurveEmphasis,
    sum:    CurveEmphasis,
}

impl Default for CurveEmphases {
    fn default() -> CurveEmphases {
        CurveEmphases {
            first:  CurveEmphasis::Normal,
            second: CurveEmphasis::Normal,
            sum:    CurveEmphasis::Hidden,
        }
    }
}

impl CurveEmphases {
    fn get(&self, role: CurveRole) -> CurveEmphasis {
        match role {
            CurveRole::First    => self.first,
            CurveRole::Second   => self.second,
            CurveRole::Sum      => self.sum,
        }
    }

    ///
    /// Highlights one curve, fading out the other source curve (the sum curve is left alone)
    ///
    fn highlight(&mut self, role: CurveRole) {
        match role {
            CurveRole::First    => { self.first = CurveEmphasis::Highlighted; self.second = CurveEmphasis::Faded; }
            CurveRole::Second   => { self.first = CurveEmphasis::Faded; self.second = CurveEmphasis::Highlighted; }
            CurveRole::Sum      => { self.sum = CurveEmphasis::Highlighted; }
        }
    }
}

///
/// Everything that belongs to the exercise that's currently loaded
///
/// A new session replaces the old one whenever an exercise is loaded, so nothing from a previous exercise survives.
///
struct Session {
    exercise:   Exercise,
    field:      CurveField,
    sequencer:  StepSequencer,
    emphasis:   CurveEmphases,
}

impl Session {
    fn current_step(&self) -> Option<&TutorialStep> {
        self.sequencer.current_step()
            .and_then(|step| self.exercise.steps.get(step))
    }

    ///
    /// Draws the whole field: grid and curves
    ///
    fn draw_field(&self, gc: &mut dyn GraphicsContext, style: &FieldStyle) {
        let view_box = self.field.mapper().view_box();

        gc.clear_canvas(style.background);
        gc.restart_layer(GRID_LAYER, &view_box);
        gc.field_grid(self.field.mapper(), style);

        self.draw_curves(gc, style);

        gc.restart_layer(PERSISTENT_LAYER, &view_box);
        gc.restart_layer(OVERLAY_LAYER, &view_box);
    }

    ///
    /// Redraws the curves with their current emphasis
    ///
    fn draw_curves(&self, gc: &mut dyn GraphicsContext, style: &FieldStyle) {
        let view_box = self.field.mapper().view_box();

        gc.restart_layer(CURVE_LAYER, &view_box);

        for role in [CurveRole::First, CurveRole::Second, CurveRole::Sum] {
            let curve = self.exercise.curve(role);

            if let Ok(path) = self.field.path(curve.id()) {
                gc.field_curve(&view_box, path, curve.color(), self.emphasis.get(role), style);
            }
        }
    }

    ///
    /// Removes everything that was added by the previous step
    ///
    fn clear_step(&mut self, gc: &mut dyn GraphicsContext, style: &FieldStyle) {
        let view_box = self.field.mapper().view_box();

        gc.restart_layer(OVERLAY_LAYER, &view_box);
        gc.restart_layer(PERSISTENT_LAYER, &view_box);

        self.emphasis = CurveEmphases::default();
        self.draw_curves(gc, style);
    }

    fn draw_vertical_line(&self, gc: &mut dyn GraphicsContext, world_x: f64, style: &FieldStyle) {
        let mapper = self.field.mapper();

        gc.layer(OVERLAY_LAYER);
        gc.vertical_guide(&mapper.view_box(), mapper.world_to_view_x(world_x), style);
    }

    ///
    /// Draws the height of a curve above the x axis, if the curve is defined at that point
    ///
    fn draw_height(&self, gc: &mut dyn GraphicsContext, role: CurveRole, world_x: f64, style: &FieldStyle) {
        let mapper  = self.field.mapper();
        let curve   = self.exercise.curve(role);
        let view_x  = mapper.world_to_view_x(world_x);

        match self.field.height_at(curve.id(), view_x) {
            Ok(Some(view_y)) => {
                gc.layer(OVERLAY_LAYER);
                gc.height_line(&mapper.view_box(), view_x, mapper.origin().y(), view_y, curve.color(), style);
            }

            Ok(None)    => { debug!("'{}' is not drawn at x = {}: no height to show", curve.id(), world_x); }
            Err(err)    => { warn!("Could not measure '{}': {}", curve.id(), err); }
        }
    }

    ///
    /// Adds the two source curves at a point
    ///
    fn sum_point(&self, world_x: f64) -> Option<SumPoint> {
        match self.field.sum_point(self.exercise.first.id(), self.exercise.second.id(), world_x) {
            Ok(point)   => point,
            Err(err)    => {
                warn!("Could not add the curves at x = {}: {}", world_x, err);
                None
            }
        }
    }

    fn draw_point(&self, gc: &mut dyn GraphicsContext, layer: LayerId, point: &SumPoint, radius: f32) {
        gc.layer(layer);
        gc.point_marker(&self.field.mapper().view_box(), point.view.x, point.view.sum_y, radius, self.exercise.sum.color());
    }
}

///
/// Walks the user through building the sum of two curves, one step at a time
///
/// The tutorial never waits for anything itself: animations request timers, which the host collects with
/// `take_timer_requests()` and hands back to `timer_fired()` once they have elapsed. Moving to a different step or
/// exercise cancels every pending timer, so a late callback from a step the user has left does nothing.
///
pub struct CurveSumTutorial {
    exercises:  Vec<Exercise>,
    settings:   TutorialSettings,
    surface:    TutorialSurface,
    timer:      AnimationTimer,
    session:    Option<Session>,
}

impl CurveSumTutorial {
    ///
    /// Creates a tutorial that offers a set of exercises, waiting for one to be chosen
    ///
    pub fn new(exercises: Vec<Exercise>, settings: TutorialSettings, surface: TutorialSurface) -> CurveSumTutorial {
        let mut tutorial = CurveSumTutorial {
            exercises:  exercises,
            settings:   settings,
            surface:    surface,
            timer:      AnimationTimer::new(),
            session:    None,
        };

        tutorial.surface.explanation.set_content(PLACEHOLDER_TEXT);
        tutorial.surface.explanation.set_opacity(1.0);
        tutorial.surface.calculation.hide();
        tutorial.surface.navigation.set_visible(false);
        tutorial.surface.navigation.set_active_exercise(None);
        tutorial.surface.legend.set_entries(&[]);

        tutorial
    }

    #[inline]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    #[inline]
    pub fn settings(&self) -> &TutorialSettings {
        &self.settings
    }

    ///
    /// The current step of the tutorial
    ///
    pub fn state(&self) -> SequencerState {
        self.session.as_ref()
            .map(|session| session.sequencer.state())
            .unwrap_or(SequencerState::NoExerciseLoaded)
    }

    pub fn current_exercise(&self) -> Option<&Exercise> {
        self.session.as_ref().map(|session| &session.exercise)
    }

    ///
    /// The curve field for the current exercise
    ///
    pub fn field(&self) -> Option<&CurveField> {
        self.session.as_ref().map(|session| &session.field)
    }

    pub fn can_next(&self) -> bool {
        self.session.as_ref().map(|session| session.sequencer.can_next()).unwrap_or(false)
    }

    pub fn can_prev(&self) -> bool {
        self.session.as_ref().map(|session| session.sequencer.can_prev()).unwrap_or(false)
    }

    ///
    /// Loads an exercise and shows its first step
    ///
    /// The curves are sampled here, so a badly configured exercise fails at this point. The exercise that was
    /// loaded before is left in place if this returns an error.
    ///
    pub fn load_exercise(&mut self, exercise_id: &str) -> Result<(), TutorialError> {
        let exercise = self.exercises.iter()
            .find(|exercise| exercise.id == exercise_id)
            .ok_or_else(|| TutorialError::UnknownExercise(exercise_id.to_string()))?;

        if exercise.steps.is_empty() {
            return Err(TutorialError::EmptyExercise(exercise_id.to_string()));
        }

        let field           = exercise.build_field(self.settings.field)?;
        let mut sequencer   = StepSequencer::new();
        sequencer.load(exercise.steps.len());

        info!("Loaded exercise '{}' ({} steps)", exercise.title, exercise.steps.len());

        self.timer.cancel();
        self.session = Some(Session {
            exercise:   exercise.clone(),
            field:      field,
            sequencer:  sequencer,
            emphasis:   CurveEmphases::default(),
        });

        if let Some(session) = self.session.as_ref() {
            let mut drawing: Vec<Draw> = vec![];
            session.draw_field(&mut drawing, &self.settings.style);
            self.surface.drawing.send_drawing(drawing);

            self.surface.navigation.set_active_exercise(Some(session.exercise.id.as_str()));
            self.surface.navigation.set_visible(true);
            self.surface.legend.set_entries(&session.exercise.legend_entries());
        }

        self.show_step();

        Ok(())
    }

    ///
    /// Moves to the next step, returning false if there isn't one
    ///
    pub fn next_step(&mut self) -> bool {
        let moved = self.session.as_mut().map(|session| session.sequencer.next()).unwrap_or(false);
        if moved { self.show_step(); }

        moved
    }

    ///
    /// Moves to the previous step, returning false if there isn't one
    ///
    pub fn prev_step(&mut self) -> bool {
        let moved = self.session.as_mut().map(|session| session.sequencer.prev()).unwrap_or(false);
        if moved { self.show_step(); }

        moved
    }

    ///
    /// Goes back to the first step of the current exercise, returning false if no exercise is loaded
    ///
    pub fn reset(&mut self) -> bool {
        let reset = self.session.as_mut().map(|session| session.sequencer.reset()).unwrap_or(false);
        if reset { self.show_step(); }

        reset
    }

    ///
    /// Retrieves the timers that the host should start
    ///
    pub fn take_timer_requests(&mut self) -> Vec<TimerRequest> {
        self.timer.take_requests()
    }

    ///
    /// Called by the host when a timer requested by the tutorial has elapsed
    ///
    pub fn timer_fired(&mut self, ticket: TimerTicket) {
        match self.timer.fire(ticket) {
            None                                => { debug!("Ignoring stale timer {:?}", ticket); }
            Some(TimerKind::RevealExplanation)  => { self.reveal_explanation(); }
            Some(TimerKind::AnimationTick(idx)) => { self.animate_tick(idx); }
        }
    }

    ///
    /// Shows the sequencer's current step, replacing whatever the previous step put on the surface
    ///
    fn show_step(&mut self) {
        self.timer.cancel();

        let session = match self.session.as_mut() {
            Some(session)   => session,
            None            => { return; }
        };

        let action = match session.current_step() {
            Some(step)  => step.action,
            None        => { return; }
        };

        debug!("Showing step {:?} of '{}': {:?}", session.sequencer.current_step(), session.exercise.id, action);

        // Clear the previous step
        let style       = &self.settings.style;
        let mut drawing: Vec<Draw> = vec![];
        session.clear_step(&mut drawing, style);
        self.surface.calculation.hide();

        // The explanation fades out and the new text appears once it's hidden
        self.surface.explanation.set_opacity(0.0);
        self.timer.schedule(TimerKind::RevealExplanation, self.settings.explanation_fade());

        match action {
            StepAction::HighlightSources => {
                session.emphasis.first  = CurveEmphasis::Highlighted;
                session.emphasis.second = CurveEmphasis::Highlighted;
                session.draw_curves(&mut drawing, style);
            }

            StepAction::ShowVerticalLine(x) => {
                session.draw_vertical_line(&mut drawing, x, style);
            }

            StepAction::ShowHeight { curve, x } => {
                session.emphasis.highlight(curve);
                session.draw_curves(&mut drawing, style);
                session.draw_vertical_line(&mut drawing, x, style);
                session.draw_height(&mut drawing, curve, x, style);
            }

            StepAction::ShowHeights(x) | StepAction::ShowSumPoint(x) => {
                session.emphasis.first  = CurveEmphasis::Highlighted;
                session.emphasis.second = CurveEmphasis::Highlighted;
                session.draw_curves(&mut drawing, style);
                session.draw_vertical_line(&mut drawing, x, style);
                session.draw_height(&mut drawing, CurveRole::First, x, style);
                session.draw_height(&mut drawing, CurveRole::Second, x, style);

                if let StepAction::ShowSumPoint(_) = action {
                    if let Some(point) = session.sum_point(x) {
                        session.draw_point(&mut drawing, OVERLAY_LAYER, &point, self.settings.sum_point_radius);
                        self.surface.calculation.show(&point.calculation());
                    }
                }
            }

            StepAction::AnimateAllTicks => {
                session.emphasis.first  = CurveEmphasis::Faded;
                session.emphasis.second = CurveEmphasis::Faded;
                session.draw_curves(&mut drawing, style);
            }

            StepAction::DrawFinalCurve => {
                session.emphasis.first  = CurveEmphasis::Faded;
                session.emphasis.second = CurveEmphasis::Faded;
                session.emphasis.sum    = CurveEmphasis::Normal;
                session.draw_curves(&mut drawing, style);
            }

            StepAction::Nothing => { }
        }

        let can_prev = session.sequencer.can_prev();
        let can_next = session.sequencer.can_next();

        self.surface.drawing.send_drawing(drawing);
        self.surface.navigation.set_prev_enabled(can_prev);
        self.surface.navigation.set_next_enabled(can_next);

        // The first point of the tick animation appears straight away
        if action == StepAction::AnimateAllTicks {
            self.animate_tick(0);
        }
    }

    ///
    /// Shows the explanation for the current step once the panel has faded out
    ///
    fn reveal_explanation(&mut self) {
        if let Some(step) = self.session.as_ref().and_then(|session| session.current_step()) {
            self.surface.explanation.set_content(&step.explanation);
            self.surface.explanation.typeset();
            self.surface.explanation.set_opacity(1.0);
        }
    }

    ///
    /// Adds the sum point for a tick, or moves on to the next step once every tick has been shown
    ///
    fn animate_tick(&mut self, tick_index: usize) {
        let tick = match self.session.as_ref() {
            Some(session)   => session.exercise.ticks.get(tick_index).copied(),
            None            => { return; }
        };

        let world_x = match tick {
            Some(world_x)   => world_x,
            None            => {
                debug!("Tick animation finished after {} ticks", tick_index);
                self.next_step();
                return;
            }
        };

        if let Some(session) = self.session.as_ref() {
            if let Some(point) = session.sum_point(world_x) {
                let mut drawing: Vec<Draw> = vec![];
                session.draw_point(&mut drawing, PERSISTENT_LAYER, &point, self.settings.persistent_point_radius);
                self.surface.drawing.send_drawing(drawing);
            }
        }

        self.timer.schedule(TimerKind::AnimationTick(tick_index + 1), self.settings.tick_delay());
    }
}
