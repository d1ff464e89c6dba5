use serde::Serialize;

use super::ProjectionResult;
use crate::calendar::Rounds;
use crate::report_helpers::{self, format_points};
use crate::standings::EntityClass;

/// Print the projection table, best current points first.
pub fn print_report(
    results: &[ProjectionResult],
    class: EntityClass,
    season: i32,
    rounds: Rounds,
    cached: bool,
) {
    let name_width = report_helpers::name_width(results.iter().map(|r| r.name.as_str()), 10);
    let separator = report_helpers::separator(name_width + 62);

    println!(
        "{season} Championship Projection — after round {} of {}{}",
        rounds.current,
        rounds.total,
        if cached { " (cached)" } else { "" }
    );
    println!("{separator}");
    println!(
        " {:>3}  {:<name_width$}  {:<16}  {:>7}  {:>9}  {:>8}  {:<6}  {:>5}",
        "Pos",
        class.entity_label(),
        "Team",
        "Points",
        "Predicted",
        "HistAvg",
        "Trend",
        "Title"
    );
    println!("{separator}");

    for (i, r) in results.iter().enumerate() {
        println!(
            " {:>3}  {:<name_width$}  {:<16}  {:>7}  {:>9}  {:>8.1}  {:<6}  {:>4}%",
            i + 1,
            r.name,
            r.team_name.as_deref().unwrap_or("-"),
            format_points(r.current_points),
            format_points(r.predicted_points),
            r.historical_average,
            r.trend.as_str(),
            r.probability,
        );
    }

    println!("{separator}");
}

#[derive(Serialize)]
struct JsonPrediction<'a> {
    season: i32,
    class: &'static str,
    current_round: u32,
    total_rounds: u32,
    cached: bool,
    predictions: &'a [ProjectionResult],
}

/// Serialize the projections to pretty-printed JSON on stdout.
pub fn print_json(
    results: &[ProjectionResult],
    class: EntityClass,
    season: i32,
    rounds: Rounds,
    cached: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    report_helpers::print_json_stdout(&JsonPrediction {
        season,
        class: class.as_str(),
        current_round: rounds.current,
        total_rounds: rounds.total,
        cached,
        predictions: results,
    })
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
