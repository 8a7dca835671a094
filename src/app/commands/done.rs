//! Completion commands - mark and unmark steps as done.

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::ProgressStore;

/// Mark a step completed. Idempotent; out-of-range numbers are ignored
/// silently. Returns the completed count after the mutation.
pub fn mark<S: ProgressStore>(ctx: &AppContext<S>, step: u8) -> Result<usize, AppError> {
    let mut progress = ctx.store().load()?;
    progress.mark_done(step);
    ctx.store().save(&progress)?;
    Ok(progress.progress_count())
}

/// Clear a step's completed mark. Returns the completed count after the
/// mutation.
pub fn unmark<S: ProgressStore>(ctx: &AppContext<S>, step: u8) -> Result<usize, AppError> {
    let mut progress = ctx.store().load()?;
    progress.unmark_done(step);
    ctx.store().save(&progress)?;
    Ok(progress.progress_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::FilesystemProgressStore;
    use tempfile::tempdir;

    fn ctx_in(dir: &std::path::Path) -> AppContext<FilesystemProgressStore> {
        AppContext::new(FilesystemProgressStore::new(dir.join("progress.json")))
    }

    #[test]
    fn mark_twice_then_unmark_leaves_nothing_done() {
        let temp = tempdir().unwrap();
        let ctx = ctx_in(temp.path());

        assert_eq!(mark(&ctx, 1).unwrap(), 1);
        assert_eq!(mark(&ctx, 1).unwrap(), 1);
        assert_eq!(unmark(&ctx, 1).unwrap(), 0);
    }

    #[test]
    fn out_of_range_mark_is_a_silent_no_op() {
        let temp = tempdir().unwrap();
        let ctx = ctx_in(temp.path());

        assert_eq!(mark(&ctx, 42).unwrap(), 0);
    }

    #[test]
    fn marks_persist_across_invocations() {
        let temp = tempdir().unwrap();

        mark(&ctx_in(temp.path()), 2).unwrap();
        mark(&ctx_in(temp.path()), 5).unwrap();

        let report = crate::app::commands::status::execute(&ctx_in(temp.path())).unwrap();
        assert_eq!(report.completed, 2);
    }
}
