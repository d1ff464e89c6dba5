//! Client for the Ergast-compatible racing data API.
//!
//! All endpoints are read-only, idempotent GETs returning the `MRData`
//! envelope. Responses are paginated via `limit`/`offset`/`total` query
//! parameters; the endpoint wrappers loop until every page has been
//! collected.

pub mod models;

use std::error::Error;
use std::time::Duration;

use crate::config::ApiConfig;
use models::{ConstructorStanding, DriverStanding, Envelope, MrData, Race};

/// Page size requested from the API. Standings and calendar listings fit in
/// one page at this size; the loop exists for result listings that do not.
const PAGE_LIMIT: usize = 100;

pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, Box<dyn Error>> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Driver standings for one season, most recent snapshot.
    pub fn driver_standings(&self, season: i32) -> Result<Vec<DriverStanding>, Box<dyn Error>> {
        self.paged(&format!("{season}/driverstandings.json"), |mr| {
            first_standings_list(mr, |list| list.driver_standings)
        })
    }

    /// Constructor standings for one season, most recent snapshot.
    pub fn constructor_standings(
        &self,
        season: i32,
    ) -> Result<Vec<ConstructorStanding>, Box<dyn Error>> {
        self.paged(&format!("{season}/constructorstandings.json"), |mr| {
            first_standings_list(mr, |list| list.constructor_standings)
        })
    }

    /// The full race calendar for one season (no per-race results).
    pub fn season_races(&self, season: i32) -> Result<Vec<Race>, Box<dyn Error>> {
        self.paged(&format!("{season}/races.json"), race_rows)
    }

    /// Classified race results for one round.
    pub fn race_results(&self, season: i32, round: u32) -> Result<Vec<Race>, Box<dyn Error>> {
        self.paged(&format!("{season}/{round}/results.json"), race_rows)
    }

    /// Sprint results for one round (empty when the weekend had no sprint).
    pub fn sprint_results(&self, season: i32, round: u32) -> Result<Vec<Race>, Box<dyn Error>> {
        self.paged(&format!("{season}/{round}/sprint.json"), race_rows)
    }

    /// Qualifying results for one round.
    pub fn qualifying_results(&self, season: i32, round: u32) -> Result<Vec<Race>, Box<dyn Error>> {
        self.paged(&format!("{season}/{round}/qualifying.json"), race_rows)
    }

    /// Fetch every page of an endpoint, concatenating the extracted rows.
    fn paged<T>(
        &self,
        path: &str,
        extract: impl Fn(MrData) -> Vec<T>,
    ) -> Result<Vec<T>, Box<dyn Error>> {
        collect_pages(|offset| self.get(path, offset), extract)
    }

    fn get(&self, path: &str, offset: usize) -> Result<Envelope, Box<dyn Error>> {
        let url = endpoint_url(&self.base_url, path, PAGE_LIMIT, offset);
        let resp = self.http.get(&url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(format!("GET {url} failed with status {status}").into());
        }

        let envelope: Envelope = resp
            .json()
            .map_err(|e| format!("GET {url}: malformed response: {e}"))?;
        Ok(envelope)
    }
}

fn endpoint_url(base: &str, path: &str, limit: usize, offset: usize) -> String {
    format!("{base}/{path}?limit={limit}&offset={offset}")
}

/// Drive the pagination loop: request pages at `PAGE_LIMIT` strides until the
/// reported total is covered, concatenating the extracted rows in order.
fn collect_pages<T>(
    mut fetch: impl FnMut(usize) -> Result<Envelope, Box<dyn Error>>,
    extract: impl Fn(MrData) -> Vec<T>,
) -> Result<Vec<T>, Box<dyn Error>> {
    let mut rows: Vec<T> = Vec::new();
    let mut offset = 0;

    loop {
        let envelope = fetch(offset)?;
        let total = envelope.mr_data.total_records();
        rows.extend(extract(envelope.mr_data));

        offset += PAGE_LIMIT;
        if offset >= total {
            break;
        }
    }

    Ok(rows)
}

/// The standings endpoints return at most one `StandingsList` per season;
/// merging pages means concatenating the rows of each page's first list.
fn first_standings_list<T>(
    mr: MrData,
    rows: impl Fn(models::StandingsList) -> Vec<T>,
) -> Vec<T> {
    mr.standings_table
        .map(|t| t.standings_lists)
        .unwrap_or_default()
        .into_iter()
        .next()
        .map(rows)
        .unwrap_or_default()
}

fn race_rows(mr: MrData) -> Vec<Race> {
    mr.race_table.map(|t| t.races).unwrap_or_default()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
