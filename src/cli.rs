//! CLI argument definitions for the `pw` command.
//!
//! Defines all subcommands, their arguments, and long help text
//! using the `clap` derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "pw", version, about = "Formula 1 stats from the command line")]
pub struct Cli {
    /// Path to a pitwall.toml config file (default: ./pitwall.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Common arguments shared by all data commands.
#[derive(Args)]
pub struct CommonArgs {
    /// Season year (default: the current year)
    #[arg(long)]
    pub season: Option<i32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the championship standings table
    Standings {
        #[command(flatten)]
        common: CommonArgs,

        /// Show constructor standings instead of driver standings
        #[arg(long)]
        constructors: bool,
    },

    /// Show the season race calendar and round progress
    #[command(long_about = "\
Show the season race calendar and round progress.

Lists every round with its circuit, locality, and date, marking races
already run. The completed-round count shown here is derived from race
dates. predict starts from the same derivation but applies [season]
config keys and its --round / --total-rounds flags on top, so the two
can differ when an override is set.")]
    Calendar {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Show classified results for one race weekend
    Results {
        #[command(flatten)]
        common: CommonArgs,

        /// Round number (default: the latest completed race)
        #[arg(long)]
        round: Option<u32>,

        /// Show sprint results instead of the grand prix
        #[arg(long)]
        sprint: bool,

        /// Show qualifying results instead of the grand prix
        #[arg(long, conflicts_with = "sprint")]
        qualifying: bool,
    },

    /// Project end-of-season points, title probabilities, and form trends
    #[command(long_about = "\
Project end-of-season points, title probabilities, and form trends.

For each driver (or constructor with --constructors) the projection
blends current-season pace with a weighted historical average:

  pace       = current_points / current_round
  history    = recent_avg * 0.7 + older_avg * 0.3
               (recent = last 3 seasons; no history at all falls back
                to the entity's current points)
  per_race   = min((pace * w_pace + history / total_rounds * w_hist)
               * team_multiplier, per_race_cap)
  predicted  = clamp(current + per_race * remaining_rounds,
               current, theoretical_maximum)

Driver totals are then reconciled per team so no two teammates project
past what one car winning and one finishing second every round could
score. The title probability anchors the points leader at 70 and decays
everyone else by their gap to the lead, capped at 40 for non-leaders.

Team multipliers and every weight above live in pitwall.toml and can be
tuned without recompiling. Rounds are derived from the fetched calendar;
--round / --total-rounds override them.

The last generated prediction is cached under ~/.pitwall/ and reused for
the same race; pass --refresh to recompute.")]
    Predict {
        #[command(flatten)]
        common: CommonArgs,

        /// Project constructor standings instead of drivers
        #[arg(long)]
        constructors: bool,

        /// Override the derived current round
        #[arg(long)]
        round: Option<u32>,

        /// Override the derived total number of rounds
        #[arg(long)]
        total_rounds: Option<u32>,

        /// Recompute even if a cached prediction exists for this race
        #[arg(long)]
        refresh: bool,
    },
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
