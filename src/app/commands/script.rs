//! Script command - composes the onboarding script and hands it to its
//! destination (stdout, clipboard, or an executable file).

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::{AppError, ScriptComposer};
use crate::ports::{ClipboardWriter, ProgressStore};

/// What to compose: one step's script or the full run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptScope {
    /// A single step, self-contained via inline defaults.
    Step(u8),
    /// All five steps in ascending order, with the completion trailer.
    All,
}

/// Destination options for the composed script.
#[derive(Debug, Clone, Default)]
pub struct ScriptRequest {
    pub copy: bool,
    pub out: Option<PathBuf>,
}

/// Execute the script command.
///
/// Composition is pure and independent of wizard progress; the context is
/// only consulted by callers that resolve "the current step" before building
/// the scope. Returns the composed text.
pub fn execute<S: ProgressStore>(
    _ctx: &AppContext<S>,
    scope: ScriptScope,
    request: &ScriptRequest,
    clipboard: &mut dyn ClipboardWriter,
) -> Result<String, AppError> {
    let text = match scope {
        ScriptScope::Step(number) => ScriptComposer::compose_step(number),
        ScriptScope::All => ScriptComposer::compose_all(),
    };

    if let Some(path) = &request.out {
        write_executable(path, &text)?;
    }
    if request.copy {
        clipboard.write_text(&text)?;
    }

    Ok(text)
}

/// Resolve the scope for a request that named neither a step nor `--all`:
/// the wizard's current step.
pub fn current_scope<S: ProgressStore>(ctx: &AppContext<S>) -> Result<ScriptScope, AppError> {
    let progress = ctx.store().load()?;
    Ok(ScriptScope::Step(progress.current().number()))
}

fn write_executable(path: &Path, text: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, text)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(path, perms)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::NoopClipboard;
    use crate::services::FilesystemProgressStore;
    use tempfile::tempdir;

    fn ctx_in(dir: &std::path::Path) -> AppContext<FilesystemProgressStore> {
        AppContext::new(FilesystemProgressStore::new(dir.join("progress.json")))
    }

    #[test]
    fn step_scope_composes_that_step_only() {
        let temp = tempdir().unwrap();
        let ctx = ctx_in(temp.path());

        let text = execute(
            &ctx,
            ScriptScope::Step(2),
            &ScriptRequest::default(),
            &mut NoopClipboard,
        )
        .unwrap();

        assert!(text.contains("# Step 2: Blind Listing"));
        assert!(!text.contains("# Step 1: Identity"));
    }

    #[test]
    fn scope_ignores_completed_steps() {
        let temp = tempdir().unwrap();
        let ctx = ctx_in(temp.path());
        crate::app::commands::done::mark(&ctx, 1).unwrap();
        crate::app::commands::done::mark(&ctx, 2).unwrap();

        let text =
            execute(&ctx, ScriptScope::All, &ScriptRequest::default(), &mut NoopClipboard).unwrap();

        for n in 1..=5 {
            assert!(text.contains(&format!("# Step {n}:")));
        }
    }

    #[test]
    fn out_file_is_written_executable() {
        let temp = tempdir().unwrap();
        let ctx = ctx_in(temp.path());
        let out = temp.path().join("onboard.sh");

        let request = ScriptRequest { copy: false, out: Some(out.clone()) };
        execute(&ctx, ScriptScope::All, &request, &mut NoopClipboard).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        assert!(content.starts_with("#!/usr/bin/env bash"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&out).unwrap().permissions().mode();
            assert!(mode & 0o111 != 0, "onboard.sh should be executable");
        }
    }

    #[test]
    fn current_scope_tracks_navigation() {
        let temp = tempdir().unwrap();
        let ctx = ctx_in(temp.path());
        crate::app::commands::nav::goto(&ctx, 3).unwrap();

        assert_eq!(current_scope(&ctx).unwrap(), ScriptScope::Step(3));
    }
}
