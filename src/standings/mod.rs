pub mod normalize;
mod report;

use std::error::Error;

use crate::api::ApiClient;
use crate::calendar;
use crate::config::Config;
use normalize::SeasonStanding;
use report::{print_json, print_report};

/// The two subject classes standings and projections apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityClass {
    Drivers,
    Constructors,
}

impl EntityClass {
    pub fn from_flag(constructors: bool) -> Self {
        if constructors {
            EntityClass::Constructors
        } else {
            EntityClass::Drivers
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityClass::Drivers => "drivers",
            EntityClass::Constructors => "constructors",
        }
    }

    /// Table header label for the entity column.
    pub fn entity_label(&self) -> &'static str {
        match self {
            EntityClass::Drivers => "Driver",
            EntityClass::Constructors => "Constructor",
        }
    }
}

pub fn run(
    config: &Config,
    class: EntityClass,
    season: Option<i32>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let season = calendar::season_year(config, season);
    let client = ApiClient::new(&config.api)?;
    let rows = fetch_current(&client, class, season)?;

    if rows.is_empty() {
        return Err(format!("no {} standings published for {season}", class.as_str()).into());
    }

    if json {
        print_json(&rows, class, season)?;
    } else {
        print_report(&rows, class, season);
    }

    Ok(())
}

/// Fetch and normalize one season's standings, sorted by position.
pub fn fetch_current(
    client: &ApiClient,
    class: EntityClass,
    season: i32,
) -> Result<Vec<SeasonStanding>, Box<dyn Error>> {
    let mut rows = match class {
        EntityClass::Drivers => normalize::driver_rows(season, &client.driver_standings(season)?)?,
        EntityClass::Constructors => {
            normalize::constructor_rows(season, &client.constructor_standings(season)?)?
        }
    };
    rows.sort_by_key(|r| r.position);
    Ok(rows)
}
