use super::*;
use crate::api::models::{Circuit, Location};

fn race(round: u32, date: &str) -> Race {
    Race {
        season: "2024".to_string(),
        round: round.to_string(),
        race_name: format!("Round {round} Grand Prix"),
        date: date.to_string(),
        time: None,
        circuit: Circuit {
            circuit_id: "c".to_string(),
            circuit_name: "Circuit".to_string(),
            location: Location {
                locality: "Town".to_string(),
                country: "Country".to_string(),
            },
        },
        results: vec![],
        sprint_results: vec![],
        qualifying_results: vec![],
    }
}

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn derive_rounds_counts_past_races() {
    let races = vec![
        race(1, "2024-03-02"),
        race(2, "2024-03-09"),
        race(3, "2024-06-23"),
        race(4, "2024-11-24"),
    ];
    let rounds = derive_rounds(&races, day("2024-06-23"));
    // race day itself does not count as completed
    assert_eq!(rounds, Rounds { current: 2, total: 4 });
    assert_eq!(rounds.remaining(), 2);
}

#[test]
fn derive_rounds_all_future() {
    let races = vec![race(1, "2024-03-02"), race(2, "2024-03-09")];
    let rounds = derive_rounds(&races, day("2024-01-01"));
    assert_eq!(rounds, Rounds { current: 0, total: 2 });
}

#[test]
fn derive_rounds_all_past() {
    let races = vec![race(1, "2024-03-02"), race(2, "2024-03-09")];
    let rounds = derive_rounds(&races, day("2025-01-01"));
    assert_eq!(rounds, Rounds { current: 2, total: 2 });
    assert_eq!(rounds.remaining(), 0);
}

#[test]
fn derive_rounds_empty_calendar() {
    let rounds = derive_rounds(&[], day("2024-06-01"));
    assert_eq!(rounds, Rounds { current: 0, total: 0 });
}

#[test]
fn unparsable_date_counts_as_not_run() {
    let races = vec![race(1, "2024-03-02"), race(2, "soon")];
    let rounds = derive_rounds(&races, day("2024-12-31"));
    assert_eq!(rounds, Rounds { current: 1, total: 2 });
}

#[test]
fn season_year_prefers_explicit_then_config() {
    let mut config = crate::config::Config::default();
    assert_eq!(season_year(&config, Some(2021)), 2021);

    config.season.year = Some(2019);
    assert_eq!(season_year(&config, None), 2019);
    assert_eq!(season_year(&config, Some(2021)), 2021);

    config.season.year = None;
    let current = chrono::Utc::now().year();
    assert_eq!(season_year(&config, None), current);
}

#[test]
fn remaining_saturates() {
    let rounds = Rounds { current: 30, total: 24 };
    assert_eq!(rounds.remaining(), 0);
}

#[test]
fn fully_overridden_rounds_skip_derivation() {
    let rounds = layer_overrides(Some(12), Some(24), || {
        panic!("derivation must not run when both rounds are overridden")
    });
    assert_eq!(rounds, Rounds { current: 12, total: 24 });
}

#[test]
fn partial_override_still_derives_the_rest() {
    let derived = Rounds { current: 9, total: 22 };

    let rounds = layer_overrides(Some(12), None, || derived);
    assert_eq!(rounds, Rounds { current: 12, total: 22 });

    let rounds = layer_overrides(None, Some(24), || derived);
    assert_eq!(rounds, Rounds { current: 9, total: 24 });

    let rounds = layer_overrides(None, None, || derived);
    assert_eq!(rounds, derived);
}
