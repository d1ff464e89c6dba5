use serde::Serialize;

use super::Session;
use crate::api::models::{QualifyingResult, Race, SessionResult};
use crate::report_helpers::{self, format_points};

fn session_title(session: Session) -> &'static str {
    match session {
        Session::Race => "Race",
        Session::Sprint => "Sprint",
        Session::Qualifying => "Qualifying",
    }
}

/// Print one session's classified results.
pub fn print_report(race: &Race, session: Session, season: i32) {
    println!(
        "{season} {} — {} ({}, {})",
        race.race_name,
        session_title(session),
        race.circuit.circuit_name,
        race.date
    );

    match session {
        Session::Qualifying => print_qualifying_rows(&race.qualifying_results),
        Session::Race => print_classified_rows(&race.results),
        Session::Sprint => print_classified_rows(&race.sprint_results),
    }
}

fn print_classified_rows(rows: &[SessionResult]) {
    let name_width =
        report_helpers::name_width(rows.iter().map(|r| r.driver.family_name.as_str()), 10) + 6;
    let separator = report_helpers::separator(name_width + 44);

    println!("{separator}");
    println!(
        " {:>3}  {:<name_width$}  {:<16}  {:>4}  {:>6}  {:<12}",
        "Pos", "Driver", "Team", "Grid", "Points", "Status"
    );
    println!("{separator}");

    for row in rows {
        println!(
            " {:>3}  {:<name_width$}  {:<16}  {:>4}  {:>6}  {:<12}",
            row.position,
            row.driver.full_name(),
            row.constructor.name,
            row.grid.as_deref().unwrap_or("-"),
            row.points
                .parse::<f64>()
                .map(format_points)
                .unwrap_or_else(|_| row.points.clone()),
            row.status.as_deref().unwrap_or(""),
        );
    }

    println!("{separator}");
}

fn print_qualifying_rows(rows: &[QualifyingResult]) {
    let name_width =
        report_helpers::name_width(rows.iter().map(|r| r.driver.family_name.as_str()), 10) + 6;
    let separator = report_helpers::separator(name_width + 54);

    println!("{separator}");
    println!(
        " {:>3}  {:<name_width$}  {:<16}  {:>9}  {:>9}  {:>9}",
        "Pos", "Driver", "Team", "Q1", "Q2", "Q3"
    );
    println!("{separator}");

    for row in rows {
        println!(
            " {:>3}  {:<name_width$}  {:<16}  {:>9}  {:>9}  {:>9}",
            row.position,
            row.driver.full_name(),
            row.constructor.name,
            row.q1.as_deref().unwrap_or("-"),
            row.q2.as_deref().unwrap_or("-"),
            row.q3.as_deref().unwrap_or("-"),
        );
    }

    println!("{separator}");
}

#[derive(Serialize)]
struct JsonClassifiedRow<'a> {
    position: &'a str,
    driver: String,
    team: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    grid: Option<&'a str>,
    points: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonQualifyingRow<'a> {
    position: &'a str,
    driver: String,
    team: &'a str,
    q1: Option<&'a str>,
    q2: Option<&'a str>,
    q3: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonRows<'a> {
    Classified(Vec<JsonClassifiedRow<'a>>),
    Qualifying(Vec<JsonQualifyingRow<'a>>),
}

#[derive(Serialize)]
struct JsonSession<'a> {
    season: i32,
    round: &'a str,
    race: &'a str,
    circuit: &'a str,
    date: &'a str,
    session: &'static str,
    results: JsonRows<'a>,
}

/// Serialize one session's results to pretty-printed JSON on stdout.
pub fn print_json(
    race: &Race,
    session: Session,
    season: i32,
) -> Result<(), Box<dyn std::error::Error>> {
    fn classified(rows: &[SessionResult]) -> JsonRows<'_> {
        JsonRows::Classified(
            rows.iter()
                .map(|r| JsonClassifiedRow {
                    position: &r.position,
                    driver: r.driver.full_name(),
                    team: &r.constructor.name,
                    grid: r.grid.as_deref(),
                    points: &r.points,
                    status: r.status.as_deref(),
                })
                .collect(),
        )
    }

    let results = match session {
        Session::Race => classified(&race.results),
        Session::Sprint => classified(&race.sprint_results),
        Session::Qualifying => JsonRows::Qualifying(
            race.qualifying_results
                .iter()
                .map(|r| JsonQualifyingRow {
                    position: &r.position,
                    driver: r.driver.full_name(),
                    team: &r.constructor.name,
                    q1: r.q1.as_deref(),
                    q2: r.q2.as_deref(),
                    q3: r.q3.as_deref(),
                })
                .collect(),
        ),
    };

    report_helpers::print_json_stdout(&JsonSession {
        season,
        round: &race.round,
        race: &race.race_name,
        circuit: &race.circuit.circuit_name,
        date: &race.date,
        session: session.as_str(),
        results,
    })
}
