//! Configuration loaded from `pitwall.toml`.
//!
//! Every heuristic constant the projection uses (pace/history weights,
//! per-race caps, team multipliers, probability anchors) lives here so the
//! numbers can be tuned without recompiling. All sections and keys are
//! optional; an absent file means pure defaults.

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Default config file name looked up in the working directory.
const DEFAULT_FILE: &str = "pitwall.toml";

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub season: SeasonConfig,
    pub scoring: ScoringConfig,
    /// Hand-curated per-team pace adjustment; unlisted teams get 1.0.
    pub multipliers: Multipliers,
    pub probability: ProbabilityConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.jolpi.ca/ergast/f1".to_string(),
            timeout_secs: 15,
        }
    }
}

/// Explicit season/round overrides. When unset, the season defaults to the
/// current year and rounds are derived from the fetched calendar; the
/// fallback constants only apply when the calendar itself cannot be fetched.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SeasonConfig {
    pub year: Option<i32>,
    pub current_round: Option<u32>,
    pub total_rounds: Option<u32>,
}

/// Last-resort round counts when the calendar fetch fails and no override
/// was given.
pub const FALLBACK_CURRENT_ROUND: u32 = 10;
pub const FALLBACK_TOTAL_ROUNDS: u32 = 24;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight of current-season per-race pace in the blended projection.
    pub w_pace: f64,
    /// Weight of the historical per-race average.
    pub w_hist: f64,
    /// Seasons within this many years of now count as "recent" history.
    pub recent_window_years: i32,
    pub recent_weight: f64,
    pub older_weight: f64,
    /// How many prior seasons to fetch for the historical average.
    pub history_seasons: i32,
    /// Per-race projection ceilings; roughly "wins most rounds" pace.
    pub driver_per_race_cap: f64,
    pub constructor_per_race_cap: f64,
    /// Absolute end-of-season ceilings, anchored on record totals.
    pub driver_points_ceiling: f64,
    pub constructor_points_ceiling: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            w_pace: 0.7,
            w_hist: 0.3,
            recent_window_years: 3,
            recent_weight: 0.7,
            older_weight: 0.3,
            history_seasons: 10,
            driver_per_race_cap: 22.0,
            constructor_per_race_cap: 40.0,
            driver_points_ceiling: 575.0,
            constructor_points_ceiling: 860.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(transparent)]
pub struct Multipliers(pub HashMap<String, f64>);

impl Default for Multipliers {
    fn default() -> Self {
        let mut table = HashMap::new();
        table.insert("McLaren".to_string(), 1.10);
        table.insert("Ferrari".to_string(), 1.05);
        table.insert("Mercedes".to_string(), 0.97);
        table.insert("Red Bull".to_string(), 0.95);
        Multipliers(table)
    }
}

impl Multipliers {
    /// Multiplier for a team, 1.0 when unlisted or unknown.
    pub fn for_team(&self, team: Option<&str>) -> f64 {
        team.and_then(|t| self.0.get(t)).copied().unwrap_or(1.0)
    }

    /// Whether the table marks this team as a front-runner (multiplier > 1).
    pub fn is_front_runner(&self, team: Option<&str>) -> bool {
        self.for_team(team) > 1.0
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ProbabilityConfig {
    /// Probability anchor for the points leader.
    pub leader_anchor: f64,
    /// Hard ceiling for the leader after bonuses.
    pub leader_max: f64,
    /// Base from which non-leaders decay with their gap to the lead.
    pub base: f64,
    /// Probability points lost per point of gap to the leader.
    pub decay: f64,
    pub floor: f64,
    /// Hard ceiling for anyone who is not leading the championship.
    pub non_leader_cap: f64,
    /// Bonus when the projected total clears this threshold.
    pub predicted_bonus: f64,
    pub predicted_bonus_threshold: f64,
    /// Bonus for teams the multiplier table marks as front-runners.
    pub front_runner_bonus: f64,
    /// Historical-average thresholds for the form trend label.
    pub trend_up: f64,
    pub trend_down: f64,
}

impl Default for ProbabilityConfig {
    fn default() -> Self {
        Self {
            leader_anchor: 70.0,
            leader_max: 95.0,
            base: 65.0,
            decay: 0.25,
            floor: 1.0,
            non_leader_cap: 40.0,
            predicted_bonus: 5.0,
            predicted_bonus_threshold: 400.0,
            front_runner_bonus: 3.0,
            trend_up: 150.0,
            trend_down: 60.0,
        }
    }
}

/// Load the config from an explicit path, from `./pitwall.toml` if present,
/// or fall back to compiled-in defaults.
pub fn load(path: Option<&Path>) -> Result<Config, Box<dyn Error>> {
    match path {
        Some(p) => {
            let text = fs::read_to_string(p)
                .map_err(|e| format!("cannot read config {}: {e}", p.display()))?;
            parse(&text).map_err(|e| format!("invalid config {}: {e}", p.display()).into())
        }
        None => {
            let default = Path::new(DEFAULT_FILE);
            if default.is_file() {
                let text = fs::read_to_string(default)?;
                parse(&text).map_err(|e| format!("invalid config {DEFAULT_FILE}: {e}").into())
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn parse(text: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(text)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
