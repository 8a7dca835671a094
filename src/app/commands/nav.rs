//! Navigation commands - goto, next, prev.

use crate::app::AppContext;
use crate::domain::{AppError, Step};
use crate::ports::ProgressStore;

/// Jump to a step. Out-of-range numbers clamp to the nearest end.
pub fn goto<S: ProgressStore>(ctx: &AppContext<S>, step: u8) -> Result<Step, AppError> {
    let mut progress = ctx.store().load()?;
    progress.go_to(step);
    ctx.store().save(&progress)?;
    Ok(progress.current())
}

/// Advance to the next step (clamped at the last).
pub fn next<S: ProgressStore>(ctx: &AppContext<S>) -> Result<Step, AppError> {
    let mut progress = ctx.store().load()?;
    progress.next();
    ctx.store().save(&progress)?;
    Ok(progress.current())
}

/// Go back to the previous step (clamped at the first).
pub fn previous<S: ProgressStore>(ctx: &AppContext<S>) -> Result<Step, AppError> {
    let mut progress = ctx.store().load()?;
    progress.previous();
    ctx.store().save(&progress)?;
    Ok(progress.current())
}
