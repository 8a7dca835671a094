use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dialoguer::Select;
use pn_onboard::{AppError, Step};

#[derive(Parser)]
#[command(name = "pn-onboard")]
#[command(version)]
#[command(
    about = "Walk through Privateness network onboarding and emit per-step shell scripts",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show wizard progress
    #[clap(visible_alias = "st")]
    Status,
    /// Jump to a step (prompts interactively when omitted)
    #[clap(visible_alias = "g")]
    Goto {
        /// Step number (1-5)
        step: Option<u8>,
    },
    /// Advance to the next step
    #[clap(visible_alias = "n")]
    Next,
    /// Go back to the previous step
    #[clap(visible_alias = "p")]
    Prev,
    /// Mark a step completed (defaults to the current step)
    #[clap(visible_alias = "d")]
    Done {
        /// Step number (1-5)
        step: Option<u8>,
    },
    /// Clear a step's completed mark (defaults to the current step)
    Undone {
        /// Step number (1-5)
        step: Option<u8>,
    },
    /// Emit the shell script for a step, or the full run
    #[clap(visible_alias = "s")]
    Script {
        /// Step number (1-5); defaults to the current step
        step: Option<u8>,
        /// Compose all five steps with the completion trailer
        #[arg(long, conflicts_with = "step")]
        all: bool,
        /// Copy the script to the system clipboard
        #[arg(long)]
        copy: bool,
        /// Write the script to a file (made executable)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn prompt_step() -> Result<u8, AppError> {
    let items: Vec<String> =
        Step::ALL.iter().map(|s| format!("{}. {}", s.number(), s.title())).collect();
    let selection = Select::new()
        .with_prompt("Step")
        .items(&items)
        .default(0)
        .interact()
        .map_err(|e| AppError::Configuration(e.to_string()))?;
    Ok(Step::ALL[selection].number())
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Status => pn_onboard::status().map(|_| ()),
        Commands::Goto { step } => {
            let step = step.map(Ok).unwrap_or_else(prompt_step);
            step.and_then(|n| pn_onboard::goto(n).map(|_| ()))
        }
        Commands::Next => pn_onboard::next().map(|_| ()),
        Commands::Prev => pn_onboard::previous().map(|_| ()),
        Commands::Done { step } => pn_onboard::done(step).map(|_| ()),
        Commands::Undone { step } => pn_onboard::undone(step).map(|_| ()),
        Commands::Script { step, all, copy, out } => {
            pn_onboard::script(step, all, copy, out).map(|_| ())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
