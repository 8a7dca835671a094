//! Status command - reports the wizard's current step and completion state.

use crate::app::AppContext;
use crate::domain::{AppError, Step};
use crate::ports::ProgressStore;

/// Per-step line of a status report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepStatus {
    pub step: Step,
    pub done: bool,
    pub current: bool,
}

/// Snapshot of wizard progress for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub current: Step,
    pub steps: Vec<StepStatus>,
    pub completed: usize,
}

/// Execute the status command.
pub fn execute<S: ProgressStore>(ctx: &AppContext<S>) -> Result<StatusReport, AppError> {
    let progress = ctx.store().load()?;

    let steps = Step::ALL
        .iter()
        .map(|&step| StepStatus {
            step,
            done: progress.is_done(step.number()),
            current: progress.is_current(step.number()),
        })
        .collect();

    Ok(StatusReport { current: progress.current(), steps, completed: progress.progress_count() })
}
