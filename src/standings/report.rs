use serde::Serialize;

use super::EntityClass;
use super::normalize::SeasonStanding;
use crate::report_helpers::{self, format_points};

/// Print one season's standings as an aligned table.
pub fn print_report(rows: &[SeasonStanding], class: EntityClass, season: i32) {
    let name_width = report_helpers::name_width(rows.iter().map(|r| r.name.as_str()), 10);
    let separator = report_helpers::separator(name_width + 40);

    println!(
        "{season} {} Championship",
        match class {
            EntityClass::Drivers => "Drivers'",
            EntityClass::Constructors => "Constructors'",
        }
    );
    println!("{separator}");
    println!(
        " {:>3}  {:<name_width$}  {:<16}  {:>7}  {:>4}",
        "Pos",
        class.entity_label(),
        "Team",
        "Points",
        "Wins"
    );
    println!("{separator}");

    for row in rows {
        println!(
            " {:>3}  {:<name_width$}  {:<16}  {:>7}  {:>4}",
            row.position,
            row.name,
            row.team_name.as_deref().unwrap_or("-"),
            format_points(row.points),
            row.wins,
        );
    }

    println!("{separator}");
}

/// JSON-serializable representation of one standings row.
#[derive(Serialize)]
struct JsonStanding<'a> {
    position: u32,
    entity_id: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    team: Option<&'a str>,
    points: f64,
    wins: u32,
}

#[derive(Serialize)]
struct JsonStandingsTable<'a> {
    season: i32,
    class: &'static str,
    standings: Vec<JsonStanding<'a>>,
}

/// Serialize the standings to pretty-printed JSON on stdout.
pub fn print_json(
    rows: &[SeasonStanding],
    class: EntityClass,
    season: i32,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = JsonStandingsTable {
        season,
        class: class.as_str(),
        standings: rows
            .iter()
            .map(|r| JsonStanding {
                position: r.position,
                entity_id: &r.entity_id,
                name: &r.name,
                team: r.team_name.as_deref(),
                points: r.points,
                wins: r.wins,
            })
            .collect(),
    };
    report_helpers::print_json_stdout(&table)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
