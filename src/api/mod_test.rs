use super::*;

fn mr_data(json: &str) -> MrData {
    let env: Envelope = serde_json::from_str(json).unwrap();
    env.mr_data
}

#[test]
fn endpoint_url_shape() {
    assert_eq!(
        endpoint_url(
            "https://api.jolpi.ca/ergast/f1",
            "2024/driverstandings.json",
            100,
            0
        ),
        "https://api.jolpi.ca/ergast/f1/2024/driverstandings.json?limit=100&offset=0"
    );
    assert_eq!(
        endpoint_url("http://host/f1", "2024/races.json", 30, 60),
        "http://host/f1/2024/races.json?limit=30&offset=60"
    );
}

#[test]
fn first_standings_list_extracts_rows() {
    let mr = mr_data(
        r#"{ "MRData": {
          "limit": "100", "offset": "0", "total": "1",
          "StandingsTable": { "StandingsLists": [
            { "season": "2024", "DriverStandings": [
              { "position": "1", "points": "100", "wins": "3",
                "Driver": { "driverId": "x", "givenName": "A", "familyName": "B" } }
            ] }
          ] }
        } }"#,
    );
    let rows = first_standings_list(mr, |l| l.driver_standings);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].driver.driver_id, "x");
}

#[test]
fn first_standings_list_empty_table() {
    let mr = mr_data(r#"{ "MRData": { "limit": "100", "offset": "0", "total": "0" } }"#);
    let rows = first_standings_list(mr, |l| l.driver_standings);
    assert!(rows.is_empty());
}

#[test]
fn race_rows_empty_when_no_race_table() {
    let mr = mr_data(r#"{ "MRData": { "limit": "100", "offset": "0", "total": "0" } }"#);
    assert!(race_rows(mr).is_empty());
}

fn race_page(total: usize, race_names: &[&str]) -> Envelope {
    let races: Vec<String> = race_names
        .iter()
        .map(|name| {
            format!(
                r#"{{ "season": "2024", "round": "1", "raceName": "{name}",
                      "date": "2024-03-02",
                      "Circuit": {{ "circuitId": "c", "circuitName": "C",
                                    "Location": {{ "locality": "L", "country": "X" }} }} }}"#
            )
        })
        .collect();
    serde_json::from_str(&format!(
        r#"{{ "MRData": {{ "limit": "100", "offset": "0", "total": "{total}",
              "RaceTable": {{ "Races": [{}] }} }} }}"#,
        races.join(",")
    ))
    .unwrap()
}

#[test]
fn collect_pages_concatenates_until_total_is_covered() {
    let mut offsets = Vec::new();
    let rows = collect_pages(
        |offset| {
            offsets.push(offset);
            Ok(match offset {
                0 => race_page(250, &["a"]),
                100 => race_page(250, &["b"]),
                200 => race_page(250, &["c"]),
                _ => panic!("requested offset past the reported total: {offset}"),
            })
        },
        race_rows,
    )
    .unwrap();

    assert_eq!(offsets, vec![0, 100, 200]);
    let names: Vec<&str> = rows.iter().map(|r| r.race_name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn collect_pages_stops_after_a_single_short_page() {
    let mut calls = 0;
    let rows = collect_pages(
        |_| {
            calls += 1;
            Ok(race_page(1, &["a"]))
        },
        race_rows,
    )
    .unwrap();
    assert_eq!(calls, 1);
    assert_eq!(rows.len(), 1);
}

#[test]
fn collect_pages_handles_an_empty_listing() {
    let mut calls = 0;
    let rows = collect_pages(
        |_| {
            calls += 1;
            Ok(race_page(0, &[]))
        },
        race_rows,
    )
    .unwrap();
    assert_eq!(calls, 1);
    assert!(rows.is_empty());
}

#[test]
fn collect_pages_propagates_fetch_errors() {
    let result = collect_pages(|_| Err("connection reset".into()), race_rows);
    assert!(result.is_err());
}
