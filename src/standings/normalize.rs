//! Standings normalizer: raw API standings rows → uniform per-entity rows
//! and per-entity points histories.
//!
//! The upstream payload reports numbers as JSON strings; this module is
//! where they become typed values. A season whose payload fails to parse is
//! rejected as a whole so the caller can skip it and keep the other seasons.

use std::collections::HashMap;
use std::error::Error;

use crate::api::models::{ConstructorStanding, DriverStanding};

/// One entity's (driver or constructor) official position in one season.
/// Immutable once built; every refresh produces a fresh set.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonStanding {
    pub entity_id: String,
    pub name: String,
    pub team_name: Option<String>,
    pub points: f64,
    pub position: u32,
    pub wins: u32,
    pub season: i32,
}

/// Season standings per entity, keyed by stable entity id.
/// At most one entry per `(entity_id, season)` pair.
pub type EntityPointsHistory = HashMap<String, Vec<SeasonStanding>>;

/// Convert one season's driver standings payload. Any malformed numeric
/// field rejects the whole season.
pub fn driver_rows(
    season: i32,
    rows: &[DriverStanding],
) -> Result<Vec<SeasonStanding>, Box<dyn Error>> {
    rows.iter()
        .map(|r| {
            Ok(SeasonStanding {
                entity_id: r.driver.driver_id.clone(),
                name: r.driver.full_name(),
                team_name: r.team_name().map(String::from),
                points: parse_points(&r.points, &r.driver.driver_id)?,
                position: parse_position(r.position.as_deref(), &r.driver.driver_id)?,
                wins: parse_wins(&r.wins, &r.driver.driver_id)?,
                season,
            })
        })
        .collect()
}

/// Convert one season's constructor standings payload. The constructor is
/// its own team for reconciliation purposes.
pub fn constructor_rows(
    season: i32,
    rows: &[ConstructorStanding],
) -> Result<Vec<SeasonStanding>, Box<dyn Error>> {
    rows.iter()
        .map(|r| {
            let id = &r.constructor.constructor_id;
            Ok(SeasonStanding {
                entity_id: id.clone(),
                name: r.constructor.name.clone(),
                team_name: Some(r.constructor.name.clone()),
                points: parse_points(&r.points, id)?,
                position: parse_position(r.position.as_deref(), id)?,
                wins: parse_wins(&r.wins, id)?,
                season,
            })
        })
        .collect()
}

/// Aggregate per-season rows into a per-entity history, keeping the first
/// record seen for any `(entity_id, season)` pair.
pub fn build_history(
    seasons: impl IntoIterator<Item = Vec<SeasonStanding>>,
) -> EntityPointsHistory {
    let mut history: EntityPointsHistory = HashMap::new();

    for rows in seasons {
        for row in rows {
            let entries = history.entry(row.entity_id.clone()).or_default();
            if entries.iter().any(|e| e.season == row.season) {
                continue;
            }
            entries.push(row);
        }
    }

    history
}

fn parse_points(raw: &str, entity: &str) -> Result<f64, Box<dyn Error>> {
    let points: f64 = raw
        .parse()
        .map_err(|_| format!("{entity}: unparsable points {raw:?}"))?;
    if !points.is_finite() || points < 0.0 {
        return Err(format!("{entity}: points out of range: {raw:?}").into());
    }
    Ok(points)
}

fn parse_position(raw: Option<&str>, entity: &str) -> Result<u32, Box<dyn Error>> {
    let raw = raw.ok_or_else(|| format!("{entity}: missing position"))?;
    let position: u32 = raw
        .parse()
        .map_err(|_| format!("{entity}: unparsable position {raw:?}"))?;
    if position == 0 {
        return Err(format!("{entity}: position must be positive").into());
    }
    Ok(position)
}

fn parse_wins(raw: &str, entity: &str) -> Result<u32, Box<dyn Error>> {
    raw.parse()
        .map_err(|_| format!("{entity}: unparsable wins {raw:?}").into())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
