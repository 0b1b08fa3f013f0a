use std::time::{Duration};

///
/// What should happen when a timer fires
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TimerKind {
    /// The explanation panel has finished fading out and the new text can be shown
    RevealExplanation,

    /// The next point of the tick animation should be added (after the last tick, this moves to the next step)
    AnimationTick(usize),
}

///
/// Identifies a timer that was started by an `AnimationTimer`
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TimerTicket {
    generation: u64,
    id:         u64,
    kind:       TimerKind,
}

impl TimerTicket {
    #[inline] pub fn kind(&self) -> TimerKind      { self.kind }
    #[inline] pub fn generation(&self) -> u64      { self.generation }
}

///
/// A request for the host to call back after a delay
///
/// The host should pass the ticket back to the tutorial once the delay has elapsed. Tickets that have been cancelled
/// in the meantime are ignored, so the host never needs to cancel anything itself.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimerRequest {
    pub ticket: TimerTicket,
    pub delay:  Duration,
}

///
/// Issues timer tickets and detects when a ticket has been superseded
///
/// Every ticket records the generation it was issued in. Cancelling moves on to a new generation, so anything from
/// before the cancellation is recognised as stale when it eventually fires.
///
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct AnimationTimer {
    generation: u64,
    next_id:    u64,
    pending:    Vec<TimerTicket>,
    requests:   Vec<TimerRequest>,
}

impl AnimationTimer {
    pub fn new() -> AnimationTimer {
        AnimationTimer::default()
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    ///
    /// Starts a new timer, returning its ticket
    ///
    pub fn schedule(&mut self, kind: TimerKind, delay: Duration) -> TimerTicket {
        let ticket = TimerTicket {
            generation: self.generation,
            id:         self.next_id,
            kind:       kind,
        };
        self.next_id += 1;

        self.pending.push(ticket);
        self.requests.push(TimerRequest { ticket, delay });

        ticket
    }

    ///
    /// Cancels every timer that's currently pending
    ///
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending.clear();
        self.requests.clear();
    }

    ///
    /// True if there are timers that have not fired or been cancelled
    ///
    #[inline]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    ///
    /// Marks a timer as fired, returning what it was for or `None` if it's stale or has already fired
    ///
    pub fn fire(&mut self, ticket: TimerTicket) -> Option<TimerKind> {
        if ticket.generation != self.generation {
            return None;
        }

        let index = self.pending.iter().position(|pending| *pending == ticket)?;
        self.pending.remove(index);

        Some(ticket.kind)
    }

    ///
    /// Takes the timers that have been started since the last time this was called, so the host can run them
    ///
    pub fn take_requests(&mut self) -> Vec<TimerRequest> {
        std::mem::take(&mut self.requests)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fire_scheduled_timer() {
        let mut timer   = AnimationTimer::new();
        let ticket      = timer.schedule(TimerKind::AnimationTick(1), Duration::from_millis(300));

        assert!(timer.fire(ticket) == Some(TimerKind::AnimationTick(1)));
        assert!(!timer.has_pending());
    }

    #[test]
    fn timers_fire_once() {
        let mut timer   = AnimationTimer::new();
        let ticket      = timer.schedule(TimerKind::RevealExplanation, Duration::from_millis(300));

        assert!(timer.fire(ticket).is_some());
        assert!(timer.fire(ticket).is_none());
    }

    #[test]
    fn cancelled_timers_are_stale() {
        let mut timer   = AnimationTimer::new();
        let ticket      = timer.schedule(TimerKind::AnimationTick(3), Duration::from_millis(300));

        timer.cancel();

        assert!(timer.fire(ticket).is_none());
        assert!(timer.generation() == 1);
    }

    #[test]
    fn new_timers_after_cancel_still_fire() {
        let mut timer   = AnimationTimer::new();
        let old_ticket  = timer.schedule(TimerKind::AnimationTick(3), Duration::from_millis(300));

        timer.cancel();
        let new_ticket  = timer.schedule(TimerKind::AnimationTick(3), Duration::from_millis(300));

        assert!(old_ticket != new_ticket);
        assert!(timer.fire(old_ticket).is_none());
        assert!(timer.fire(new_ticket) == Some(TimerKind::AnimationTick(3)));
    }

    #[test]
    fn requests_are_taken_once() {
        let mut timer = AnimationTimer::new();
        timer.schedule(TimerKind::RevealExplanation, Duration::from_millis(300));
        timer.schedule(TimerKind::AnimationTick(0), Duration::from_millis(100));

        let requests = timer.take_requests();
        assert!(requests.len() == 2);
        assert!(requests[1].delay == Duration::from_millis(100));
        assert!(timer.take_requests().is_empty());
        assert!(timer.has_pending());
    }

    #[test]
    fn cancel_drops_untaken_requests() {
        let mut timer = AnimationTimer::new();
        timer.schedule(TimerKind::RevealExplanation, Duration::from_millis(300));
        timer.cancel();

        assert!(timer.take_requests().is_empty());
    }
}
