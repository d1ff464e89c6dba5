use chrono::NaiveDate;
use serde::Serialize;

use super::Rounds;
use crate::api::models::Race;
use crate::report_helpers;

fn is_completed(race: &Race, today: NaiveDate) -> bool {
    NaiveDate::parse_from_str(&race.date, "%Y-%m-%d").is_ok_and(|d| d < today)
}

/// Print the season calendar with completed races marked.
pub fn print_report(races: &[Race], rounds: Rounds, season: i32, today: NaiveDate) {
    let name_width = report_helpers::name_width(races.iter().map(|r| r.race_name.as_str()), 10);
    let separator = report_helpers::separator(name_width + 52);

    println!(
        "{season} Calendar — round {} of {} complete",
        rounds.current, rounds.total
    );
    println!("{separator}");
    println!(
        " {:>3}  {:<name_width$}  {:<22}  {:<12}  {:<4}",
        "Rnd", "Race", "Locality", "Date", "Run"
    );
    println!("{separator}");

    for race in races {
        println!(
            " {:>3}  {:<name_width$}  {:<22}  {:<12}  {:<4}",
            race.round,
            race.race_name,
            format!(
                "{}, {}",
                race.circuit.location.locality, race.circuit.location.country
            ),
            race.date,
            if is_completed(race, today) { "yes" } else { "" },
        );
    }

    println!("{separator}");
}

#[derive(Serialize)]
struct JsonRace<'a> {
    round: &'a str,
    name: &'a str,
    circuit: &'a str,
    locality: &'a str,
    country: &'a str,
    date: &'a str,
    completed: bool,
}

#[derive(Serialize)]
struct JsonCalendar<'a> {
    season: i32,
    current_round: u32,
    total_rounds: u32,
    races: Vec<JsonRace<'a>>,
}

/// Serialize the calendar to pretty-printed JSON on stdout.
pub fn print_json(
    races: &[Race],
    rounds: Rounds,
    season: i32,
    today: NaiveDate,
) -> Result<(), Box<dyn std::error::Error>> {
    let calendar = JsonCalendar {
        season,
        current_round: rounds.current,
        total_rounds: rounds.total,
        races: races
            .iter()
            .map(|r| JsonRace {
                round: &r.round,
                name: &r.race_name,
                circuit: &r.circuit.circuit_name,
                locality: &r.circuit.location.locality,
                country: &r.circuit.location.country,
                date: &r.date,
                completed: is_completed(r, today),
            })
            .collect(),
    };
    report_helpers::print_json_stdout(&calendar)
}
