///
/// Where the step sequencer is in the tutorial
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum SequencerState {
    /// No exercise has been chosen yet
    NoExerciseLoaded,

    /// Showing a step of the current exercise
    Step(usize),
}

///
/// Tracks the current step through an exercise
///
/// Moving past either end of the exercise does nothing: the functions that move the sequencer return whether or not
/// the step actually changed.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StepSequencer {
    step_count: usize,
    current:    Option<usize>,
}

impl Default for StepSequencer {
    fn default() -> StepSequencer {
        StepSequencer::new()
    }
}

impl StepSequencer {
    ///
    /// Creates a sequencer with no exercise loaded
    ///
    pub fn new() -> StepSequencer {
        StepSequencer {
            step_count: 0,
            current:    None,
        }
    }

    ///
    /// Starts a new exercise with the specified number of steps, moving to the first step
    ///
    /// An exercise with no steps leaves the sequencer with nothing loaded.
    ///
    pub fn load(&mut self, step_count: usize) {
        self.step_count = step_count;
        self.current    = if step_count > 0 { Some(0) } else { None };
    }

    pub fn state(&self) -> SequencerState {
        match self.current {
            None        => SequencerState::NoExerciseLoaded,
            Some(step)  => SequencerState::Step(step),
        }
    }

    #[inline]
    pub fn current_step(&self) -> Option<usize> {
        self.current
    }

    #[inline]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    ///
    /// True if there's a step after the current one
    ///
    pub fn can_next(&self) -> bool {
        match self.current {
            Some(step)  => step + 1 < self.step_count,
            None        => false,
        }
    }

    ///
    /// True if there's a step before the current one
    ///
    pub fn can_prev(&self) -> bool {
        match self.current {
            Some(step)  => step > 0,
            None        => false,
        }
    }

    ///
    /// Moves to the next step, returning true if the step changed
    ///
    pub fn next(&mut self) -> bool {
        if self.can_next() {
            self.current = self.current.map(|step| step + 1);
            true
        } else {
            false
        }
    }

    ///
    /// Moves to the previous step, returning true if the step changed
    ///
    pub fn prev(&mut self) -> bool {
        if self.can_prev() {
            self.current = self.current.map(|step| step - 1);
            true
        } else {
            false
        }
    }

    ///
    /// Moves back to the first step, returning true if an exercise is loaded
    ///
    /// The step is shown again even if it was already the first one.
    ///
    pub fn reset(&mut self) -> bool {
        if self.current.is_some() {
            self.current = Some(0);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn nothing_loaded() {
        let mut sequencer = StepSequencer::new();

        assert!(sequencer.state() == SequencerState::NoExerciseLoaded);
        assert!(!sequencer.next());
        assert!(!sequencer.prev());
        assert!(!sequencer.reset());
        assert!(sequencer.state() == SequencerState::NoExerciseLoaded);
    }

    #[test]
    fn load_starts_at_first_step() {
        let mut sequencer = StepSequencer::new();
        sequencer.load(8);

        assert!(sequencer.state() == SequencerState::Step(0));
        assert!(!sequencer.can_prev());
        assert!(sequencer.can_next());
    }

    #[test]
    fn prev_at_first_step_does_nothing() {
        let mut sequencer = StepSequencer::new();
        sequencer.load(8);

        assert!(!sequencer.prev());
        assert!(sequencer.state() == SequencerState::Step(0));
    }

    #[test]
    fn next_at_last_step_does_nothing() {
        let mut sequencer = StepSequencer::new();
        sequencer.load(3);

        assert!(sequencer.next());
        assert!(sequencer.next());
        assert!(!sequencer.can_next());
        assert!(!sequencer.next());
        assert!(sequencer.state() == SequencerState::Step(2));
    }

    #[test]
    fn reset_returns_to_start() {
        let mut sequencer = StepSequencer::new();
        sequencer.load(5);
        sequencer.next();
        sequencer.next();

        assert!(sequencer.reset());
        assert!(sequencer.state() == SequencerState::Step(0));
    }

    #[test]
    fn reload_returns_to_start() {
        let mut sequencer = StepSequencer::new();
        sequencer.load(5);
        sequencer.next();
        sequencer.load(10);

        assert!(sequencer.state() == SequencerState::Step(0));
        assert!(sequencer.step_count() == 10);
    }

    #[test]
    fn single_step_exercise() {
        let mut sequencer = StepSequencer::new();
        sequencer.load(1);

        assert!(!sequencer.can_next());
        assert!(!sequencer.can_prev());
    }

    #[test]
    fn empty_exercise_loads_nothing() {
        let mut sequencer = StepSequencer::new();
        sequencer.load(0);

        assert!(sequencer.state() == SequencerState::NoExerciseLoaded);
    }
}
