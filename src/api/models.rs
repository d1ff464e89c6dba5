//! Serde models for the upstream API's `MRData` envelope.
//!
//! The API wraps every response in `MRData` with pagination fields and a
//! table keyed by query kind (`StandingsTable` for standings queries,
//! `RaceTable` for calendar/result queries). Numeric fields arrive as JSON
//! strings and are parsed on demand by the consumers.

use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Envelope {
    #[serde(rename = "MRData")]
    pub mr_data: MrData,
}

#[derive(Deserialize, Debug)]
pub struct MrData {
    #[allow(dead_code)]
    pub limit: String,
    #[allow(dead_code)]
    pub offset: String,
    pub total: String,
    #[serde(rename = "StandingsTable")]
    pub standings_table: Option<StandingsTable>,
    #[serde(rename = "RaceTable")]
    pub race_table: Option<RaceTable>,
}

impl MrData {
    /// Total record count across all pages, 0 when unparsable.
    pub fn total_records(&self) -> usize {
        self.total.parse().unwrap_or(0)
    }
}

#[derive(Deserialize, Debug)]
pub struct StandingsTable {
    #[serde(rename = "StandingsLists", default)]
    pub standings_lists: Vec<StandingsList>,
}

#[derive(Deserialize, Debug)]
pub struct StandingsList {
    #[allow(dead_code)]
    pub season: String,
    #[serde(rename = "DriverStandings", default)]
    pub driver_standings: Vec<DriverStanding>,
    #[serde(rename = "ConstructorStandings", default)]
    pub constructor_standings: Vec<ConstructorStanding>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DriverStanding {
    pub position: Option<String>,
    pub points: String,
    pub wins: String,
    #[serde(rename = "Driver")]
    pub driver: Driver,
    #[serde(rename = "Constructors", default)]
    pub constructors: Vec<Constructor>,
}

impl DriverStanding {
    /// Name of the team the driver is currently scoring for (the last
    /// listed constructor is the most recent one in a multi-team season).
    pub fn team_name(&self) -> Option<&str> {
        self.constructors.last().map(|c| c.name.as_str())
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ConstructorStanding {
    pub position: Option<String>,
    pub points: String,
    pub wins: String,
    #[serde(rename = "Constructor")]
    pub constructor: Constructor,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Driver {
    #[serde(rename = "driverId")]
    pub driver_id: String,
    #[serde(rename = "givenName")]
    pub given_name: String,
    #[serde(rename = "familyName")]
    pub family_name: String,
    #[allow(dead_code)]
    pub code: Option<String>,
    #[allow(dead_code)]
    pub nationality: Option<String>,
}

impl Driver {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Constructor {
    #[serde(rename = "constructorId")]
    pub constructor_id: String,
    pub name: String,
    #[allow(dead_code)]
    pub nationality: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct RaceTable {
    #[serde(rename = "Races", default)]
    pub races: Vec<Race>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Race {
    #[allow(dead_code)]
    pub season: String,
    pub round: String,
    #[serde(rename = "raceName")]
    pub race_name: String,
    pub date: String,
    #[allow(dead_code)]
    pub time: Option<String>,
    #[serde(rename = "Circuit")]
    pub circuit: Circuit,
    #[serde(rename = "Results", default)]
    pub results: Vec<SessionResult>,
    #[serde(rename = "SprintResults", default)]
    pub sprint_results: Vec<SessionResult>,
    #[serde(rename = "QualifyingResults", default)]
    pub qualifying_results: Vec<QualifyingResult>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Circuit {
    #[serde(rename = "circuitId")]
    #[allow(dead_code)]
    pub circuit_id: String,
    #[serde(rename = "circuitName")]
    pub circuit_name: String,
    #[serde(rename = "Location")]
    pub location: Location,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Location {
    pub locality: String,
    pub country: String,
}

/// One classified row of a race or sprint session.
#[derive(Deserialize, Debug, Clone)]
pub struct SessionResult {
    pub position: String,
    pub points: String,
    pub grid: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "Driver")]
    pub driver: Driver,
    #[serde(rename = "Constructor")]
    pub constructor: Constructor,
}

#[derive(Deserialize, Debug, Clone)]
pub struct QualifyingResult {
    pub position: String,
    #[serde(rename = "Driver")]
    pub driver: Driver,
    #[serde(rename = "Constructor")]
    pub constructor: Constructor,
    #[serde(rename = "Q1")]
    pub q1: Option<String>,
    #[serde(rename = "Q2")]
    pub q2: Option<String>,
    #[serde(rename = "Q3")]
    pub q3: Option<String>,
}

#[cfg(test)]
#[path = "models_test.rs"]
mod tests;
