mod api;
mod calendar;
mod cli;
mod config;
mod predict;
mod report_helpers;
mod results;
mod standings;
mod store;

use clap::Parser;

use cli::{Cli, Commands};
use standings::EntityClass;

fn main() {
    let cli = Cli::parse();

    let config = match config::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Standings {
            common,
            constructors,
        } => standings::run(
            &config,
            EntityClass::from_flag(constructors),
            common.season,
            common.json,
        ),
        Commands::Calendar { common } => calendar::run(&config, common.season, common.json),
        Commands::Results {
            common,
            round,
            sprint,
            qualifying,
        } => results::run(
            &config,
            common.season,
            round,
            results::Session::from_flags(sprint, qualifying),
            common.json,
        ),
        Commands::Predict {
            common,
            constructors,
            round,
            total_rounds,
            refresh,
        } => predict::run(
            &config,
            EntityClass::from_flag(constructors),
            common.season,
            round,
            total_rounds,
            refresh,
            common.json,
        ),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
