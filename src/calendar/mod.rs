//! Season calendar and round derivation.
//!
//! Rounds are derived from the fetched calendar (races dated before today
//! count as completed) instead of being compiled in, so the projection's
//! remaining-rounds arithmetic does not silently go stale as the season
//! progresses. Config and CLI values act as explicit overrides only.

mod report;

use std::error::Error;

use chrono::{Datelike, NaiveDate, Utc};

use crate::api::ApiClient;
use crate::api::models::Race;
use crate::config::{self, Config};
use report::{print_json, print_report};

/// Progress through a season: completed rounds vs. the full calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rounds {
    pub current: u32,
    pub total: u32,
}

impl Rounds {
    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.current)
    }
}

/// The season to query: explicit flag, then config, then the current year.
pub fn season_year(config: &Config, explicit: Option<i32>) -> i32 {
    explicit
        .or(config.season.year)
        .unwrap_or_else(|| Utc::now().year())
}

/// Count completed vs. total races. A race with an unparsable date is
/// treated as not yet run.
pub fn derive_rounds(races: &[Race], today: NaiveDate) -> Rounds {
    let current = races
        .iter()
        .filter(|r| match NaiveDate::parse_from_str(&r.date, "%Y-%m-%d") {
            Ok(date) => date < today,
            Err(_) => {
                eprintln!("warning: round {}: unparsable date {:?}", r.round, r.date);
                false
            }
        })
        .count() as u32;

    Rounds {
        current,
        total: races.len() as u32,
    }
}

/// Resolve rounds for a season: derived from the calendar, with config and
/// explicit overrides applied on top. The calendar is only fetched when a
/// value is actually missing; a failed fetch falls back to the configured
/// constants.
pub fn resolve_rounds(
    client: &ApiClient,
    config: &Config,
    season: i32,
    round_override: Option<u32>,
    total_override: Option<u32>,
) -> Rounds {
    layer_overrides(
        round_override.or(config.season.current_round),
        total_override.or(config.season.total_rounds),
        || match client.season_races(season) {
            Ok(races) if !races.is_empty() => derive_rounds(&races, Utc::now().date_naive()),
            Ok(_) => {
                eprintln!("warning: empty calendar for {season}, using configured rounds");
                fallback_rounds(config)
            }
            Err(err) => {
                eprintln!("warning: calendar fetch failed ({err}), using configured rounds");
                fallback_rounds(config)
            }
        },
    )
}

/// Apply overrides on top of a lazily derived value, deriving only for the
/// rounds not covered by an override.
fn layer_overrides(
    current_override: Option<u32>,
    total_override: Option<u32>,
    derive: impl FnOnce() -> Rounds,
) -> Rounds {
    if let (Some(current), Some(total)) = (current_override, total_override) {
        return Rounds { current, total };
    }

    let derived = derive();
    Rounds {
        current: current_override.unwrap_or(derived.current),
        total: total_override.unwrap_or(derived.total),
    }
}

fn fallback_rounds(config: &Config) -> Rounds {
    Rounds {
        current: config
            .season
            .current_round
            .unwrap_or(config::FALLBACK_CURRENT_ROUND),
        total: config
            .season
            .total_rounds
            .unwrap_or(config::FALLBACK_TOTAL_ROUNDS),
    }
}

pub fn run(config: &Config, season: Option<i32>, json: bool) -> Result<(), Box<dyn Error>> {
    let season = season_year(config, season);
    let client = ApiClient::new(&config.api)?;

    let races = client.season_races(season)?;
    if races.is_empty() {
        return Err(format!("no calendar published for {season}").into());
    }

    let today = Utc::now().date_naive();
    let rounds = derive_rounds(&races, today);

    if json {
        print_json(&races, rounds, season, today)?;
    } else {
        print_report(&races, rounds, season, today);
    }

    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
