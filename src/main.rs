//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use franchise_dash::{
    cli::{Commands, FranchiseDash, GetCmd},
    commands::{
        ranks::handle_ranks, snapshot::handle_snapshot, teams::handle_teams,
        trend::handle_rank_trend,
    },
};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let app = FranchiseDash::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Snapshot {
                filters,
                json,
                verbose,
            } => handle_snapshot(filters, json, verbose)?,

            GetCmd::Ranks {
                filters,
                json,
                verbose,
            } => handle_ranks(filters, json, verbose)?,

            GetCmd::RankTrend {
                filters,
                json,
                verbose,
            } => handle_rank_trend(filters, json, verbose)?,

            GetCmd::Teams {
                data_file,
                divisions,
                json,
                verbose,
            } => handle_teams(data_file, divisions, json, verbose)?,
        },
    }

    Ok(())
}
