//! pn-onboard: walk an operator through Privateness network onboarding and
//! emit ready-to-run shell scripts for the selected step or the full run.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::PathBuf;

use app::{
    AppContext,
    commands::{done, nav, script, status},
};
use ports::{NoopClipboard, ProgressStore};
use services::{ArboardClipboard, FilesystemProgressStore};

pub use app::commands::script::{ScriptRequest, ScriptScope};
pub use app::commands::status::{StatusReport, StepStatus};
pub use domain::{AppError, Progress, ProgressSnapshot, ScriptComposer, Step, TOTAL_STEPS};

fn context() -> Result<AppContext<FilesystemProgressStore>, AppError> {
    Ok(AppContext::new(FilesystemProgressStore::default_location()?))
}

/// Print the wizard's progress and return the report.
pub fn status() -> Result<StatusReport, AppError> {
    let ctx = context()?;
    let report = status::execute(&ctx)?;

    println!("Step {} of {}: {}", report.current.number(), TOTAL_STEPS, report.current.title());
    for line in &report.steps {
        let mark = if line.done { "x" } else { " " };
        let cursor = if line.current { ">" } else { " " };
        println!("{cursor} [{mark}] {}. {}", line.step.number(), line.step.title());
    }
    println!("Completed: {}/{}", report.completed, TOTAL_STEPS);
    Ok(report)
}

/// Jump to a step (clamped into range) and report the new position.
pub fn goto(step: u8) -> Result<Step, AppError> {
    let ctx = context()?;
    let current = nav::goto(&ctx, step)?;
    println!("Now at step {}: {}", current.number(), current.title());
    Ok(current)
}

/// Advance to the next step.
pub fn next() -> Result<Step, AppError> {
    let ctx = context()?;
    let current = nav::next(&ctx)?;
    println!("Now at step {}: {}", current.number(), current.title());
    Ok(current)
}

/// Go back to the previous step.
pub fn previous() -> Result<Step, AppError> {
    let ctx = context()?;
    let current = nav::previous(&ctx)?;
    println!("Now at step {}: {}", current.number(), current.title());
    Ok(current)
}

/// Mark a step completed.
pub fn done(step: Option<u8>) -> Result<usize, AppError> {
    let ctx = context()?;
    let step = match step {
        Some(n) => n,
        None => ctx.store().load()?.current().number(),
    };
    let completed = done::mark(&ctx, step)?;
    println!("✅ Completed: {completed}/{TOTAL_STEPS}");
    Ok(completed)
}

/// Clear a step's completed mark.
pub fn undone(step: Option<u8>) -> Result<usize, AppError> {
    let ctx = context()?;
    let step = match step {
        Some(n) => n,
        None => ctx.store().load()?.current().number(),
    };
    let completed = done::unmark(&ctx, step)?;
    println!("✅ Completed: {completed}/{TOTAL_STEPS}");
    Ok(completed)
}

/// Compose the onboarding script for one step (or all steps) and hand it to
/// its destination.
///
/// With no destination flags the script is printed to stdout. `--copy` goes
/// through the system clipboard; `out` writes an executable file.
pub fn script(
    step: Option<u8>,
    all: bool,
    copy: bool,
    out: Option<PathBuf>,
) -> Result<String, AppError> {
    let ctx = context()?;

    let scope = if all {
        ScriptScope::All
    } else {
        match step {
            Some(n) => ScriptScope::Step(n),
            None => script::current_scope(&ctx)?,
        }
    };
    let request = ScriptRequest { copy, out };

    // The system clipboard is only touched when asked for.
    let text = if request.copy {
        let mut clipboard = ArboardClipboard::new()?;
        script::execute(&ctx, scope, &request, &mut clipboard)?
    } else {
        script::execute(&ctx, scope, &request, &mut NoopClipboard)?
    };

    match (&request.out, request.copy) {
        (Some(path), _) => println!("✅ Wrote script to {}", path.display()),
        (None, true) => println!("✅ Script copied to clipboard"),
        (None, false) => print!("{text}"),
    }
    Ok(text)
}
