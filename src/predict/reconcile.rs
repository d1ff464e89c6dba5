//! Team-total reconciler.
//!
//! Two teammates projected independently can sum past what one car winning
//! and the other finishing second every round could score. When a team's
//! driver projections exceed that maximum, each driver is rescaled
//! proportionally so the team total fits back under it.

use std::collections::HashMap;

use super::ProjectionResult;
use super::projection::{POINTS_FOR_SECOND, POINTS_FOR_WIN};

/// Most points a team's two cars can bank over a season (1-2 every round).
pub fn team_season_max(total_rounds: u32) -> f64 {
    total_rounds as f64 * (POINTS_FOR_WIN + POINTS_FOR_SECOND)
}

/// Rescale each team's drivers so their predicted sum stays within the
/// team's theoretical maximum. Inputs are non-negative and the scale factor
/// is <= 1 whenever rescaling triggers, so no value goes negative.
pub fn reconcile_team_totals(results: &mut [ProjectionResult], total_rounds: u32) {
    let team_max = team_season_max(total_rounds);

    let mut teams: HashMap<String, Vec<usize>> = HashMap::new();
    for (i, r) in results.iter().enumerate() {
        if let Some(team) = &r.team_name {
            teams.entry(team.clone()).or_default().push(i);
        }
    }

    for indices in teams.values() {
        let sum: f64 = indices.iter().map(|&i| results[i].predicted_points).sum();
        if sum <= team_max {
            continue;
        }
        let scale = team_max / sum;
        for &i in indices {
            results[i].predicted_points = (results[i].predicted_points * scale).round();
        }
    }
}

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod tests;
