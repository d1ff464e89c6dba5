//! Projection calculator: end-of-season point estimates per entity.
//!
//! Blends current-season per-race pace with a weighted historical average,
//! nudged by the configured team multiplier, capped per race, and clamped
//! against the theoretical per-class maximum. Pure arithmetic over already
//! validated numbers; division guards keep NaN/Infinity out.

use crate::calendar::Rounds;
use crate::config::ScoringConfig;
use crate::standings::EntityClass;
use crate::standings::normalize::SeasonStanding;

/// Points for winning a grand prix.
pub const POINTS_FOR_WIN: f64 = 25.0;
/// Points for finishing second.
pub const POINTS_FOR_SECOND: f64 = 18.0;

/// Per-class point limits used for clamping.
#[derive(Debug, Clone, Copy)]
pub struct ClassLimits {
    /// Most points one entity can take from a single round.
    pub points_per_round: f64,
    /// Cap on the blended per-race projection.
    pub per_race_cap: f64,
    /// Absolute end-of-season ceiling (configured historical record).
    pub points_ceiling: f64,
}

impl ClassLimits {
    /// Theoretical maximum for a season of `total_rounds` rounds.
    pub fn season_max(&self, total_rounds: u32) -> f64 {
        total_rounds as f64 * self.points_per_round
    }
}

pub fn class_limits(class: EntityClass, scoring: &ScoringConfig) -> ClassLimits {
    match class {
        EntityClass::Drivers => ClassLimits {
            points_per_round: POINTS_FOR_WIN,
            per_race_cap: scoring.driver_per_race_cap,
            points_ceiling: scoring.driver_points_ceiling,
        },
        // both cars score: a 1-2 finish every round is the ceiling
        EntityClass::Constructors => ClassLimits {
            points_per_round: POINTS_FOR_WIN + POINTS_FOR_SECOND,
            per_race_cap: scoring.constructor_per_race_cap,
            points_ceiling: scoring.constructor_points_ceiling,
        },
    }
}

/// Current-season points per completed round; 0 before the first race.
pub fn per_race_pace(points: f64, current_round: u32) -> f64 {
    if current_round == 0 {
        0.0
    } else {
        points / current_round as f64
    }
}

/// Weighted average of prior-season totals: recent seasons (within the
/// configured window) weigh more than older ones. An entity with no prior
/// seasons at all falls back to its current points, so rookies and new
/// teams are projected on pace alone rather than a phantom zero history.
pub fn historical_average(
    current_points: f64,
    history: &[SeasonStanding],
    season: i32,
    scoring: &ScoringConfig,
) -> f64 {
    let prior: Vec<&SeasonStanding> = history.iter().filter(|h| h.season < season).collect();
    if prior.is_empty() {
        return current_points;
    }

    let cutoff = season - scoring.recent_window_years;
    let (recent, older): (Vec<&SeasonStanding>, Vec<&SeasonStanding>) =
        prior.into_iter().partition(|h| h.season >= cutoff);

    mean_points(&recent) * scoring.recent_weight + mean_points(&older) * scoring.older_weight
}

fn mean_points(rows: &[&SeasonStanding]) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    rows.iter().map(|r| r.points).sum::<f64>() / rows.len() as f64
}

/// Outcome of projecting one entity.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub predicted_points: f64,
    pub historical_average: f64,
}

/// Project an entity's end-of-season total.
///
/// Guarantees: `predicted_points >= current points`, and never above the
/// smaller of the season's theoretical maximum and the configured ceiling.
pub fn project(
    current: &SeasonStanding,
    history: &[SeasonStanding],
    rounds: Rounds,
    multiplier: f64,
    limits: &ClassLimits,
    scoring: &ScoringConfig,
) -> Projection {
    let pace = per_race_pace(current.points, rounds.current);
    let hist = historical_average(current.points, history, current.season, scoring);

    let hist_per_race = hist / rounds.total.max(1) as f64;
    let blended = pace * scoring.w_pace + hist_per_race * scoring.w_hist;
    let per_race = (blended * multiplier).min(limits.per_race_cap);

    let ceiling = limits
        .season_max(rounds.total)
        .min(limits.points_ceiling)
        .max(current.points);
    let predicted = (current.points + (per_race * rounds.remaining() as f64).round())
        .clamp(current.points, ceiling);

    Projection {
        predicted_points: predicted,
        historical_average: hist,
    }
}

#[cfg(test)]
#[path = "projection_test.rs"]
mod tests;
