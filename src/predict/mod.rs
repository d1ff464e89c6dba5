//! Championship prediction pipeline.
//!
//! Straight-line, synchronous, recomputed in full on every run:
//! normalize → project → reconcile-by-team → assign probability/trend →
//! sort → render. Missing or malformed historical seasons are skipped with
//! a warning and never abort the pipeline.

pub mod probability;
pub mod projection;
mod reconcile;
mod report;

use std::error::Error;

use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::calendar::{self, Rounds};
use crate::config::Config;
use crate::standings::normalize::{self, EntityPointsHistory, SeasonStanding};
use crate::standings::{self, EntityClass};
use crate::store::{CachedPrediction, Store};
use probability::Trend;
use report::{print_json, print_report};

/// One entity's projected season outcome. Created once per computation
/// cycle, immutable afterwards, discarded and recomputed on refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub entity_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_name: Option<String>,
    pub current_points: f64,
    pub predicted_points: f64,
    pub historical_average: f64,
    /// Championship probability, always within 0..=100.
    pub probability: u8,
    pub trend: Trend,
}

pub fn run(
    config: &Config,
    class: EntityClass,
    season: Option<i32>,
    round_override: Option<u32>,
    total_override: Option<u32>,
    refresh: bool,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let season = calendar::season_year(config, season);
    let client = ApiClient::new(&config.api)?;
    let rounds = calendar::resolve_rounds(&client, config, season, round_override, total_override);

    // Advisory cache: reuse the last prediction generated for this race.
    let mut store = match Store::open_default() {
        Ok(s) => Some(s),
        Err(err) => {
            eprintln!("warning: prediction cache unavailable: {err}");
            None
        }
    };

    if !refresh
        && let Some(cached) = store
            .as_ref()
            .and_then(|s| s.cached_prediction(season, rounds.current, class.as_str()))
    {
        let rounds = Rounds {
            current: cached.round,
            total: cached.total_rounds,
        };
        render(&cached.results, class, season, rounds, true, json)?;
        return Ok(());
    }

    let current = standings::fetch_current(&client, class, season)?;
    if current.is_empty() {
        return Err(format!("no {} standings published for {season}", class.as_str()).into());
    }

    let history = fetch_history(&client, class, season, config.scoring.history_seasons);
    let results = compute(&current, &history, rounds, class, config);

    if let Some(store) = store.as_mut()
        && let Err(err) = store.save_prediction(CachedPrediction {
            season,
            round: rounds.current,
            total_rounds: rounds.total,
            class: class.as_str().to_string(),
            results: results.clone(),
        })
    {
        eprintln!("warning: could not cache prediction: {err}");
    }

    render(&results, class, season, rounds, false, json)
}

/// The pure pipeline: project every entity, reconcile driver teams, sort by
/// current points, assign probabilities and trends.
pub fn compute(
    current: &[SeasonStanding],
    history: &EntityPointsHistory,
    rounds: Rounds,
    class: EntityClass,
    config: &Config,
) -> Vec<ProjectionResult> {
    let limits = projection::class_limits(class, &config.scoring);

    let mut results: Vec<ProjectionResult> = current
        .iter()
        .map(|row| {
            let entity_history = history
                .get(&row.entity_id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let multiplier = config.multipliers.for_team(row.team_name.as_deref());
            let p = projection::project(
                row,
                entity_history,
                rounds,
                multiplier,
                &limits,
                &config.scoring,
            );
            ProjectionResult {
                entity_id: row.entity_id.clone(),
                name: row.name.clone(),
                team_name: row.team_name.clone(),
                current_points: row.points,
                predicted_points: p.predicted_points,
                historical_average: p.historical_average,
                probability: 0,
                trend: Trend::Stable,
            }
        })
        .collect();

    // constructors are already whole teams; only driver pairs can overshoot
    if class == EntityClass::Drivers {
        reconcile::reconcile_team_totals(&mut results, rounds.total);
    }

    results.sort_by(|a, b| b.current_points.total_cmp(&a.current_points));
    probability::assign(&mut results, &config.probability, &config.multipliers);

    results
}

/// Fetch up to `history_seasons` prior seasons' standings. A season that
/// fails to fetch or parse is skipped; the others still count.
fn fetch_history(
    client: &ApiClient,
    class: EntityClass,
    season: i32,
    history_seasons: i32,
) -> EntityPointsHistory {
    let mut seasons: Vec<Vec<SeasonStanding>> = Vec::new();

    for year in (season - history_seasons.max(0))..season {
        let rows = match class {
            EntityClass::Drivers => client
                .driver_standings(year)
                .and_then(|raw| normalize::driver_rows(year, &raw)),
            EntityClass::Constructors => client
                .constructor_standings(year)
                .and_then(|raw| normalize::constructor_rows(year, &raw)),
        };
        match rows {
            Ok(rows) => seasons.push(rows),
            Err(err) => eprintln!("warning: skipping season {year}: {err}"),
        }
    }

    normalize::build_history(seasons)
}

fn render(
    results: &[ProjectionResult],
    class: EntityClass,
    season: i32,
    rounds: Rounds,
    cached: bool,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    if json {
        print_json(results, class, season, rounds, cached)
    } else {
        print_report(results, class, season, rounds, cached);
        Ok(())
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
