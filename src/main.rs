use clap::Parser;
use std::io::{self, Write};

use opaque_facade::{expects, Facade};

mod cli;
mod error;
mod logging;
mod report;

use cli::{Cli, Commands};
use error::{DemoError, DemoResult, MAX_ACTIONS};
use report::{write_summary, RunSummary};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> DemoResult<()> {
    logging::init(cli.log_level)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Run {
            init,
            actions,
            json,
        } => {
            let mut facade = Facade::new(init);
            drive(&mut facade, actions)?;
            write_summary(&mut out, &RunSummary::of(&facade, actions), json)?;
        }
        Commands::Isolate {
            first,
            second,
            actions,
            json,
        } => {
            let mut driven = Facade::new(first);
            let idle = Facade::new(second);
            drive(&mut driven, actions)?;
            write_summary(&mut out, &RunSummary::of(&driven, actions), json)?;
            write_summary(&mut out, &RunSummary::of(&idle, 0), json)?;
        }
        Commands::Check { value } => {
            expects!(value > 0, "check was given {}", value);
            writeln!(out, "precondition `value > 0` holds for {}", value)?;
        }
    }

    Ok(())
}

fn drive(facade: &mut Facade, actions: u64) -> DemoResult<()> {
    if actions > MAX_ACTIONS {
        return Err(DemoError::InvalidCount {
            requested: actions,
            limit: MAX_ACTIONS,
        });
    }

    for _ in 0..actions {
        facade.perform_action();
    }
    tracing::info!(facade = %facade.id(), actions, "actions performed");
    Ok(())
}
