//! Career planner CLI
//!
//! Command-line interface for planning a career as years, months, days and
//! tasks. One command runs against the saved plan and exits.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands, ShowArgs};
use career_core::PlanStoreBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let store = PlanStoreBuilder::new()
        .with_database_path(database_file)
        .remember_expansion(true)
        .build()
        .context("Failed to initialize plan store")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(store, renderer);

    info!("Career planner started");

    match command {
        Some(Show(args)) => cli.show(&args),
        Some(Stats) => cli.stats(),
        Some(On(args)) => cli.tasks_on(&args),
        Some(Plan { command }) => cli.handle_plan_command(command),
        Some(Year { command }) => cli.handle_year_command(command),
        Some(Month { command }) => cli.handle_month_command(command),
        Some(Day { command }) => cli.handle_day_command(command),
        Some(Task { command }) => cli.handle_task_command(command),
        None => cli.show(&ShowArgs::default()),
    }
}
