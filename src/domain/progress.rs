use std::collections::BTreeSet;

use crate::domain::step::Step;

/// Immutable view of the wizard state handed to change listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub current: Step,
    pub completed: Vec<Step>,
    pub progress: usize,
}

type Listener = Box<dyn Fn(&ProgressSnapshot)>;

/// Wizard state machine: current step plus the set of completed steps.
///
/// All operations are total. Out-of-range step numbers clamp (navigation) or
/// are ignored (completion); nothing here can fail.
pub struct Progress {
    current: Step,
    completed: BTreeSet<Step>,
    listeners: Vec<Listener>,
}

impl Default for Progress {
    fn default() -> Self {
        Self { current: Step::FIRST, completed: BTreeSet::new(), listeners: Vec::new() }
    }
}

impl Progress {
    /// Reconstruct state from persisted values.
    ///
    /// Tolerant of bad input: `current` is clamped into range and completed
    /// numbers that name no step are dropped.
    pub fn from_parts(current: u8, done: &[u8]) -> Self {
        let mut progress = Self::default();
        progress.current = clamp_step(current);
        progress.completed = done.iter().copied().filter_map(Step::from_number).collect();
        progress
    }

    /// The step the wizard is currently on.
    pub fn current(&self) -> Step {
        self.current
    }

    /// Jump to a step, clamping out-of-range numbers to the nearest end.
    pub fn go_to(&mut self, number: u8) {
        self.current = clamp_step(number);
        self.notify();
    }

    /// Advance to the next step (clamped at the last).
    pub fn next(&mut self) {
        self.go_to(self.current.number().saturating_add(1));
    }

    /// Go back to the previous step (clamped at the first).
    pub fn previous(&mut self) {
        self.go_to(self.current.number().saturating_sub(1));
    }

    /// Mark a step completed. Idempotent; out-of-range numbers are ignored.
    pub fn mark_done(&mut self, number: u8) {
        if let Some(step) = Step::from_number(number)
            && self.completed.insert(step)
        {
            self.notify();
        }
    }

    /// Clear a step's completed mark. No-op if it was not marked.
    pub fn unmark_done(&mut self, number: u8) {
        if let Some(step) = Step::from_number(number)
            && self.completed.remove(&step)
        {
            self.notify();
        }
    }

    pub fn is_done(&self, number: u8) -> bool {
        Step::from_number(number).is_some_and(|step| self.completed.contains(&step))
    }

    pub fn is_current(&self, number: u8) -> bool {
        self.current.number() == number
    }

    /// Number of completed steps.
    pub fn progress_count(&self) -> usize {
        self.completed.len()
    }

    /// Completed step numbers in ascending order, for persistence.
    pub fn completed_numbers(&self) -> Vec<u8> {
        self.completed.iter().map(Step::number).collect()
    }

    /// Subscribe to state changes. Listeners fire after every mutation that
    /// actually changed the state.
    pub fn on_change(&mut self, listener: impl Fn(&ProgressSnapshot) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Current state as a snapshot.
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            current: self.current,
            completed: self.completed.iter().copied().collect(),
            progress: self.completed.len(),
        }
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        for listener in &self.listeners {
            listener(&snapshot);
        }
    }
}

fn clamp_step(number: u8) -> Step {
    let clamped = number.clamp(Step::FIRST.number(), Step::LAST.number());
    Step::from_number(clamped).unwrap_or(Step::FIRST)
}
