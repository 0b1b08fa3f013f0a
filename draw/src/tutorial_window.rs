use crate::terminal_panel::*;
use crate::window_properties::*;

use curve_sum_tutorial::*;

use flo_draw::*;

use futures::prelude::*;
use futures::executor;
use futures::stream::{FuturesUnordered};
use futures_timer::{Delay};

use log::{error, info};

///
/// Something the user asked the tutorial to do
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TutorialCommand {
    LoadExercise(usize),
    NextStep,
    PrevStep,
    Reset,
}

///
/// Maps a key to the tutorial command it triggers
///
pub fn key_command(key: Key) -> Option<TutorialCommand> {
    match key {
        Key::Key1                   => Some(TutorialCommand::LoadExercise(0)),
        Key::Key2                   => Some(TutorialCommand::LoadExercise(1)),
        Key::Key3                   => Some(TutorialCommand::LoadExercise(2)),
        Key::Key4                   => Some(TutorialCommand::LoadExercise(3)),
        Key::Key5                   => Some(TutorialCommand::LoadExercise(4)),
        Key::Key6                   => Some(TutorialCommand::LoadExercise(5)),
        Key::Key7                   => Some(TutorialCommand::LoadExercise(6)),
        Key::Key8                   => Some(TutorialCommand::LoadExercise(7)),
        Key::Key9                   => Some(TutorialCommand::LoadExercise(8)),

        Key::KeyRight | Key::KeyN   => Some(TutorialCommand::NextStep),
        Key::KeyLeft | Key::KeyP    => Some(TutorialCommand::PrevStep),
        Key::KeyR                   => Some(TutorialCommand::Reset),

        _                           => None,
    }
}

///
/// Carries out a command on a tutorial
///
pub fn apply_command(tutorial: &mut CurveSumTutorial, command: TutorialCommand) {
    match command {
        TutorialCommand::LoadExercise(idx) => {
            let exercise_id = tutorial.exercises().get(idx).map(|exercise| exercise.id.clone());

            if let Some(exercise_id) = exercise_id {
                if let Err(err) = tutorial.load_exercise(&exercise_id) {
                    error!("Could not load exercise '{}': {}", exercise_id, err);
                }
            }
        }

        TutorialCommand::NextStep   => { tutorial.next_step(); }
        TutorialCommand::PrevStep   => { tutorial.prev_step(); }
        TutorialCommand::Reset      => { tutorial.reset(); }
    }
}

///
/// Opens a window showing the curve sum tutorial and runs it until the window is closed
///
/// The explanation for each step is written to the terminal. This needs to be called from within `with_2d_graphics()`
/// (or use `show_curve_sum_window()` which does that for you).
///
pub fn run_curve_sum_window(properties: impl TutorialWindowProperties) {
    let title               = properties.title();
    let (canvas, events)    = create_canvas_window_with_events(title.as_str());
    let panel               = TerminalPanel::new();

    let surface = TutorialSurfaceBuilder::new()
        .with_drawing(canvas)
        .with_explanation(panel.clone())
        .with_calculation(panel.clone())
        .with_navigation(panel.clone())
        .with_legend(panel)
        .build();

    let surface = match surface {
        Ok(surface) => surface,
        Err(err)    => { error!("Could not start the tutorial: {}", err); return; }
    };

    let mut tutorial = CurveSumTutorial::new(properties.exercises(), properties.settings(), surface);
    info!("Tutorial window '{}' ready with {} exercises", title, tutorial.exercises().len());

    executor::block_on(async move {
        let mut events  = Box::pin(events).fuse();
        let mut timers  = FuturesUnordered::new();

        loop {
            // Start any timers the tutorial has asked for since the last event
            for request in tutorial.take_timer_requests() {
                let ticket = request.ticket;
                timers.push(Delay::new(request.delay).map(move |_| ticket));
            }

            futures::select! {
                event = events.next() => {
                    match event {
                        Some(DrawEvent::KeyDown(_, Some(key)))  => {
                            if let Some(command) = key_command(key) {
                                apply_command(&mut tutorial, command);
                            }
                        }

                        Some(DrawEvent::Closed) | None          => { break; }
                        Some(_)                                 => { /* Other events are ignored */ }
                    }
                }

                ticket = timers.select_next_some() => {
                    tutorial.timer_fired(ticket);
                }

                complete => { break; }
            }
        }
    });
}

///
/// Shows the curve sum tutorial in a window, taking over the main thread until it's closed
///
pub fn show_curve_sum_window<TProperties>(properties: TProperties)
where
    TProperties: 'static + Send + TutorialWindowProperties,
{
    with_2d_graphics(move || run_curve_sum_window(properties));
}
