//! CodeInsight CLI - repository digest explorer
//!
//! Usage: codeinsight <COMMAND> <INPUT>
//!
//! Commands:
//!   files   List the files detected in a digest
//!   tree    Show the directory tree with selection markers
//!   filter  Print the digest limited to the selected files
//!   select  Pick files interactively
//!   show    Print the summary and file tree text
//!   repos   List ingested repositories

mod cli;
mod commands;
mod logging;
mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::Destination;
use ui::context::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error::print_error(&err, json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let loaded = codeinsight::config::discover(cli.config.as_deref(), &cwd)?;
    let config = loaded.config;

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
    logging::init(cli.verbose, config.output.verbosity, ui.color);
    for (path, error) in &loaded.skipped {
        tracing::warn!(path = %path.display(), %error, "skipped unreadable config");
    }

    if let Some(path) = &loaded.path {
        if !cli.json {
            ui::output::print_config_warnings(path, &loaded.warnings, ui.unicode, ui.color);
        }
    }

    match &cli.command {
        Commands::Files { input } => commands::cmd_files(input, &ui, &config),
        Commands::Tree { input, selection } => commands::cmd_tree(input, selection, &ui, &config),
        Commands::Filter {
            input,
            selection,
            output,
            copy,
        } => {
            let dest = Destination::new(output.as_deref(), *copy);
            commands::cmd_filter(input, selection, dest, &ui, &config)
        }
        Commands::Select {
            input,
            output,
            copy,
        } => {
            let dest = Destination::new(output.as_deref(), *copy);
            commands::cmd_select(input, dest, &ui, &config)
        }
        Commands::Show { input } => commands::cmd_show(input, &ui, &config),
        Commands::Repos { dir, latest } => {
            commands::cmd_repos(dir.as_deref(), *latest, &ui, &config)
        }
    }
}
