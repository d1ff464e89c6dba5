mod report;

use std::error::Error;

use chrono::Utc;

use crate::api::ApiClient;
use crate::api::models::Race;
use crate::calendar;
use crate::config::Config;
use report::{print_json, print_report};

/// Which session of a race weekend to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    Race,
    Sprint,
    Qualifying,
}

impl Session {
    pub fn from_flags(sprint: bool, qualifying: bool) -> Self {
        if sprint {
            Session::Sprint
        } else if qualifying {
            Session::Qualifying
        } else {
            Session::Race
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Session::Race => "race",
            Session::Sprint => "sprint",
            Session::Qualifying => "qualifying",
        }
    }
}

pub fn run(
    config: &Config,
    season: Option<i32>,
    round: Option<u32>,
    session: Session,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let season = calendar::season_year(config, season);
    let client = ApiClient::new(&config.api)?;

    let round = match round {
        Some(r) => r,
        None => latest_completed_round(&client, season)?,
    };

    let races = match session {
        Session::Race => client.race_results(season, round)?,
        Session::Sprint => client.sprint_results(season, round)?,
        Session::Qualifying => client.qualifying_results(season, round)?,
    };

    let race = races
        .into_iter()
        .find(|r| race_has_rows(r, session))
        .ok_or_else(|| {
            format!(
                "no {} results for {season} round {round}",
                session.as_str()
            )
        })?;

    if json {
        print_json(&race, session, season)?;
    } else {
        print_report(&race, session, season);
    }

    Ok(())
}

/// The most recent race already run this season.
fn latest_completed_round(client: &ApiClient, season: i32) -> Result<u32, Box<dyn Error>> {
    let races = client.season_races(season)?;
    let rounds = calendar::derive_rounds(&races, Utc::now().date_naive());
    if rounds.current == 0 {
        return Err(format!("no completed races in {season} yet; pass --round").into());
    }
    Ok(rounds.current)
}

fn race_has_rows(race: &Race, session: Session) -> bool {
    match session {
        Session::Race => !race.results.is_empty(),
        Session::Sprint => !race.sprint_results.is_empty(),
        Session::Qualifying => !race.qualifying_results.is_empty(),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
