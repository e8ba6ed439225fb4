//! Opener CLI - opener authoring and rotation review
//!
//! Usage: opener <COMMAND>
//!
//! Commands:
//!   compare  Compare recorded actions against an opener
//!   search   Search the action catalog by name
//!   groups   List configured action groups

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use opener::config::Config;
use opener::logging;
use opener::presentation::{Cli, Commands};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::ErrorEvent;
use crate::ui::output::print_config_warnings;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;
    let command = command_name(&cli.command);

    if let Err(err) = run(cli) {
        if json {
            let _ = emit_event(&ErrorEvent::new(command, format!("{:#}", err)));
        } else {
            eprintln!("Error: {:#}", err);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let project_root = std::env::current_dir()?;
    let (config, warnings) = Config::resolve(cli.config.as_deref(), &project_root)?;

    let verbosity = logging::effective_verbosity(cli.verbose, config.output.verbosity);
    logging::init(verbosity, cli.verbose);

    let ui = UiContext::new(cli.json, cli.color, &config);
    print_config_warnings(&warnings, &ui);

    match cli.command {
        Commands::Compare {
            opener,
            used,
            catalog,
            strict,
        } => commands::compare::cmd_compare(
            &config,
            &ui,
            &opener,
            &used,
            catalog.as_deref(),
            strict,
        ),
        Commands::Search {
            query,
            job,
            catalog,
        } => commands::search::cmd_search(&config, &ui, &query, &job, catalog.as_deref()),
        Commands::Groups => commands::groups::cmd_groups(&config, &ui),
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Compare { .. } => "compare",
        Commands::Search { .. } => "search",
        Commands::Groups => "groups",
    }
}
