//! Probability and trend assigner.
//!
//! The points leader is anchored high; everyone else decays with their gap
//! to the lead and is hard-capped below the leader's anchor. The trend label
//! is a plain threshold on the historical average. Deterministic throughout:
//! the same inputs always produce the same output.

use serde::{Deserialize, Serialize};

use super::ProjectionResult;
use crate::config::{Multipliers, ProbabilityConfig};

/// Three-way form label derived from the historical average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }
}

pub fn trend_for(historical_average: f64, config: &ProbabilityConfig) -> Trend {
    if historical_average > config.trend_up {
        Trend::Up
    } else if historical_average < config.trend_down {
        Trend::Down
    } else {
        Trend::Stable
    }
}

/// Assign a championship probability and trend to every entity.
/// `results` must already be sorted by current points, descending; the
/// entity at index 0 is treated as the leader.
pub fn assign(
    results: &mut [ProjectionResult],
    config: &ProbabilityConfig,
    multipliers: &Multipliers,
) {
    let leader_points = match results.first() {
        Some(leader) => leader.current_points,
        None => return,
    };

    for (i, r) in results.iter_mut().enumerate() {
        let mut bonus = 0.0;
        if r.predicted_points > config.predicted_bonus_threshold {
            bonus += config.predicted_bonus;
        }
        if multipliers.is_front_runner(r.team_name.as_deref()) {
            bonus += config.front_runner_bonus;
        }

        let raw = if i == 0 {
            (config.leader_anchor + bonus).min(config.leader_max)
        } else {
            let gap = leader_points - r.current_points;
            (config.base - gap * config.decay + bonus).clamp(config.floor, config.non_leader_cap)
        };

        r.probability = raw.round().clamp(0.0, 100.0) as u8;
        r.trend = trend_for(r.historical_average, config);
    }
}

#[cfg(test)]
#[path = "probability_test.rs"]
mod tests;
