use super::*;
use crate::predict::probability::Trend;

fn result(id: &str, current: f64, predicted: f64, probability: u8) -> ProjectionResult {
    ProjectionResult {
        entity_id: id.to_string(),
        name: format!("Driver {id}"),
        team_name: Some("Team".to_string()),
        current_points: current,
        predicted_points: predicted,
        historical_average: 150.0,
        probability,
        trend: Trend::Stable,
    }
}

fn rounds() -> Rounds {
    Rounds {
        current: 10,
        total: 24,
    }
}

#[test]
fn print_report_does_not_panic() {
    let results = vec![result("a", 255.0, 480.0, 75), result("b", 171.5, 320.0, 38)];
    print_report(&results, EntityClass::Drivers, 2024, rounds(), false);
    print_report(&results, EntityClass::Constructors, 2024, rounds(), true);
    print_report(&[], EntityClass::Drivers, 2024, rounds(), false);
}

#[test]
fn json_shape() {
    let results = vec![result("a", 255.0, 480.0, 75)];
    let value = serde_json::to_value(JsonPrediction {
        season: 2024,
        class: EntityClass::Drivers.as_str(),
        current_round: 10,
        total_rounds: 24,
        cached: false,
        predictions: &results,
    })
    .unwrap();

    assert_eq!(value["season"], 2024);
    assert_eq!(value["class"], "drivers");
    assert_eq!(value["cached"], false);
    assert_eq!(value["predictions"][0]["entity_id"], "a");
    assert_eq!(value["predictions"][0]["probability"], 75);
    assert_eq!(value["predictions"][0]["trend"], "stable");
}
