//! CLI smoke tests for the offline commands

use assert_cmd::Command;
use predicates::prelude::*;

fn tripflow() -> Command {
    Command::cargo_bin("tripflow").expect("binary builds")
}

#[test]
fn dates_prints_inclusive_day_count_and_both_formats() {
    tripflow()
        .args(["dates", "2025-02-10", "2025-02-12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 days"))
        .stdout(predicate::str::contains("2025-02-10"))
        .stdout(predicate::str::contains("10-2-2025"));
}

#[test]
fn dates_rejects_unparseable_input() {
    tripflow()
        .args(["dates", "10-02-2025", "2025-02-12"])
        .assert()
        .failure();
}

#[test]
fn validate_names_the_failing_field() {
    let dir = tempfile::tempdir().unwrap();
    let draft = dir.path().join("draft.json");
    std::fs::write(
        &draft,
        serde_json::json!({
            "banner_image": "/tmp/banner.jpg",
            "trip_name": "Go",
            "travel_mode": "car",
            "visibility": "public",
            "from_date": "2025-02-10",
            "to_date": "2025-02-12",
            "days": [],
            "submitted": false
        })
        .to_string(),
    )
    .unwrap();

    tripflow()
        .args(["validate", draft.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("trip name"));
}

#[test]
fn validate_accepts_a_complete_draft() {
    let dir = tempfile::tempdir().unwrap();
    let banner = dir.path().join("banner.jpg");
    std::fs::write(&banner, b"jpeg bytes").unwrap();
    let draft = dir.path().join("draft.json");
    std::fs::write(
        &draft,
        serde_json::json!({
            "banner_image": banner.to_str().unwrap(),
            "trip_name": "Goa Trip",
            "travel_mode": "car",
            "visibility": "public",
            "location_from": {"latitude": 12.9716, "longitude": 77.5946},
            "location_to": {"latitude": 15.4909, "longitude": 73.8278},
            "from_date": "2025-02-10",
            "to_date": "2025-02-12",
            "days": [{
                "id": 1,
                "description": "Old Goa churches",
                "latitude": "15.5009",
                "longitude": "73.9116",
                "start_time": "09:00",
                "end_time": "18:00"
            }],
            "submitted": false
        })
        .to_string(),
    )
    .unwrap();

    tripflow()
        .args(["validate", draft.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("ready to submit"));
}
