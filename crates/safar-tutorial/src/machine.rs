use crate::TutorialStep;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    SelectingFlow,
    Running,
}

/// How a close request ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Finish on the last step; the completion callback ran.
    Finished,
    /// Any other close; the callback was dropped and the host should route to help.
    Dismissed,
    /// Nothing was open.
    NotOpen,
}

pub type OnFinish = Box<dyn FnOnce()>;

/// Guided-tour state: idle → selecting-flow → running(i) → idle.
///
/// The machine only tracks where the tour is. Step side effects belong to the
/// host: whenever an operation returns `Some(step)`, that step just became
/// active and the host should (re)establish its screen.
pub struct Tutorial {
    phase: Phase,
    index: usize,
    steps: Vec<TutorialStep>,
    on_finish: Option<OnFinish>,
}

impl Default for Tutorial {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Tutorial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tutorial")
            .field("phase", &self.phase)
            .field("index", &self.index)
            .field("steps", &self.steps.len())
            .field("on_finish", &self.on_finish.is_some())
            .finish()
    }
}

impl Tutorial {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            index: 0,
            steps: Vec::new(),
            on_finish: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn current_step(&self) -> Option<&TutorialStep> {
        if self.is_running() {
            self.steps.get(self.index)
        } else {
            None
        }
    }

    pub fn is_last_step(&self) -> bool {
        self.is_running() && self.index + 1 == self.steps.len()
    }

    /// Shows the flow picker, abandoning any running tour.
    pub fn show_selection_screen(&mut self) {
        self.reset();
        self.phase = Phase::SelectingFlow;
        log::debug!("tutorial: selecting flow");
    }

    /// Starts at step 0. An empty step list leaves the machine idle.
    pub fn start(&mut self, steps: Vec<TutorialStep>, on_finish: OnFinish) -> Option<&TutorialStep> {
        self.reset();
        if steps.is_empty() {
            log::warn!("tutorial: refusing to start an empty flow");
            return None;
        }
        log::debug!("tutorial: start, {} steps", steps.len());
        self.steps = steps;
        self.on_finish = Some(on_finish);
        self.phase = Phase::Running;
        self.steps.first()
    }

    /// Advances one step; `None` (and no change) on the last step.
    pub fn next(&mut self) -> Option<&TutorialStep> {
        if !self.is_running() || self.index + 1 >= self.steps.len() {
            return None;
        }
        self.index += 1;
        log::debug!("tutorial: step {}/{}", self.index + 1, self.steps.len());
        self.steps.get(self.index)
    }

    /// Goes back one step; `None` (and no change) on the first step.
    pub fn previous(&mut self) -> Option<&TutorialStep> {
        if !self.is_running() || self.index == 0 {
            return None;
        }
        self.index -= 1;
        log::debug!("tutorial: step {}/{}", self.index + 1, self.steps.len());
        self.steps.get(self.index)
    }

    /// Closes the tour or the flow picker.
    ///
    /// Only `finishing` on the last step runs the completion callback. Every
    /// other close drops it.
    pub fn close(&mut self, finishing: bool) -> CloseOutcome {
        match self.phase {
            Phase::Idle => CloseOutcome::NotOpen,
            Phase::SelectingFlow => {
                self.reset();
                CloseOutcome::Dismissed
            }
            Phase::Running => {
                let finished = finishing && self.is_last_step();
                let callback = self.on_finish.take();
                self.reset();
                if finished {
                    log::debug!("tutorial: finished");
                    if let Some(cb) = callback {
                        cb();
                    }
                    CloseOutcome::Finished
                } else {
                    log::debug!("tutorial: dismissed");
                    CloseOutcome::Dismissed
                }
            }
        }
    }

    fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.index = 0;
        self.steps.clear();
        self.on_finish = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Flow;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting() -> (Rc<Cell<u32>>, OnFinish) {
        let calls = Rc::new(Cell::new(0));
        let cb = {
            let calls = calls.clone();
            Box::new(move || calls.set(calls.get() + 1)) as OnFinish
        };
        (calls, cb)
    }

    #[test]
    fn next_past_last_is_noop() {
        let mut t = Tutorial::new();
        let (_, cb) = counting();
        t.start(Flow::Ride.steps(), cb);
        for _ in 0..9 {
            assert!(t.next().is_some());
        }
        assert_eq!(t.index(), 9);
        assert!(t.next().is_none());
        assert_eq!(t.index(), 9);
        assert!(t.is_last_step());
    }

    #[test]
    fn previous_before_first_is_noop() {
        let mut t = Tutorial::new();
        let (_, cb) = counting();
        t.start(Flow::Shops.steps(), cb);
        assert!(t.previous().is_none());
        assert_eq!(t.index(), 0);
        t.next();
        assert_eq!(t.previous().map(|s| s.id), Some(crate::StepId::ShopsWelcome));
    }

    #[test]
    fn finish_on_last_step_calls_back_exactly_once() {
        let mut t = Tutorial::new();
        let (calls, cb) = counting();
        t.start(Flow::Delivery.steps(), cb);
        while t.next().is_some() {}
        assert_eq!(t.close(true), CloseOutcome::Finished);
        assert_eq!(t.close(true), CloseOutcome::NotOpen);
        assert_eq!(calls.get(), 1);
        assert_eq!(t.phase(), Phase::Idle);
    }

    #[test]
    fn plain_close_never_calls_back() {
        let mut t = Tutorial::new();
        let (calls, cb) = counting();
        t.start(Flow::Ride.steps(), cb);
        while t.next().is_some() {}
        assert_eq!(t.close(false), CloseOutcome::Dismissed);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn finishing_before_last_step_is_a_dismissal() {
        let mut t = Tutorial::new();
        let (calls, cb) = counting();
        t.start(Flow::Ride.steps(), cb);
        t.next();
        assert_eq!(t.close(true), CloseOutcome::Dismissed);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn selection_screen_drops_running_tour() {
        let mut t = Tutorial::new();
        let (calls, cb) = counting();
        t.start(Flow::Ride.steps(), cb);
        t.show_selection_screen();
        assert_eq!(t.phase(), Phase::SelectingFlow);
        assert!(t.current_step().is_none());
        assert_eq!(t.close(true), CloseOutcome::Dismissed);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn empty_flow_does_not_start() {
        let mut t = Tutorial::new();
        let (_, cb) = counting();
        assert!(t.start(Vec::new(), cb).is_none());
        assert_eq!(t.phase(), Phase::Idle);
    }
}
