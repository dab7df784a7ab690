use anyhow::Result;
use colored::Colorize;

use wbc_stats::cli::Command;
use wbc_stats::{handle_completions, handle_predict, handle_render, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port, data_dir } => handle_serve(*port, data_dir.clone()),
        Command::Render { page, key, kind, data_dir } => {
            handle_render(page, key.as_deref(), kind.as_deref(), data_dir.clone())
        }
        Command::Predict { team_a, team_b, data_dir } => handle_predict(team_a, team_b, data_dir.clone()),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
