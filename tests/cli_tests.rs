use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{rrs, serve, setup_test_db};

const PROXY_VARS: [&str; 6] = [
    "HTTP_PROXY",
    "http_proxy",
    "HTTPS_PROXY",
    "https_proxy",
    "ALL_PROXY",
    "all_proxy",
];

/// Command talking to a local test server, with proxies disabled.
fn rrs_local(api: &str, db: &str) -> assert_cmd::Command {
    let mut cmd = rrs();
    for var in PROXY_VARS {
        cmd.env_remove(var);
    }
    cmd.args(["--db", db, "--api", api]);
    cmd
}

#[test]
fn test_slots_for_wednesday() {
    rrs()
        .args(["slots", "2024-06-12"])
        .assert()
        .success()
        .stdout(contains("Mon–Thu 17:00–22:00"))
        .stdout(contains("17:00"))
        .stdout(contains("21:00"))
        .stdout(contains("21:30").not());
}

#[test]
fn test_slots_json_for_sunday() {
    rrs()
        .args(["slots", "2024-06-09", "--json"])
        .assert()
        .success()
        .stdout(contains(
            r#"["11:00","11:30","12:00","12:30","13:00","13:30","14:00"]"#,
        ));
}

#[test]
fn test_slots_invalid_date_fails() {
    rrs()
        .args(["slots", "2024-13-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format: 2024-13-01"));
}

#[test]
fn test_hours_label_and_week_table() {
    rrs()
        .args(["hours", "2024-06-15"])
        .assert()
        .success()
        .stdout(contains("Fri–Sat 17:00–23:00"));

    rrs()
        .args(["hours"])
        .assert()
        .success()
        .stdout(contains("Mon–Thu"))
        .stdout(contains("Fri–Sat"))
        .stdout(contains("Sun"))
        .stdout(contains("11:00"))
        .stdout(contains("15:00"));
}

#[test]
fn test_compose() {
    rrs()
        .args(["compose", "2024-06-10", "18:30"])
        .assert()
        .success()
        .stdout(contains("2024-06-10T18:30"));
}

#[test]
fn test_init_and_empty_log() {
    let db_path = setup_test_db("init_empty_log");

    rrs()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    rrs()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"));
}

#[test]
fn test_check_reports_availability_and_logs_it() {
    let db_path = setup_test_db("check_available");
    let (api, requests) = serve(vec![(
        200,
        r#"{"ok":true,"fullyBooked":false,"availableTables":7,"tableCount":30,"endTime":"2024-06-12T19:30:00"}"#,
    )]);

    rrs_local(&api, &db_path)
        .args(["check", "2024-06-12", "18:30", "--guests", "4"])
        .assert()
        .success()
        .stdout(contains("Available — 7 / 30 tables free. (Ends at 19:30, 60 min)"));

    let req = requests.recv().expect("request captured");
    assert!(req.request_line.starts_with("GET /api/reservations/availability?"));
    assert!(req.request_line.contains("timeSlot=2024-06-12T18%3A30"));
    assert!(req.request_line.contains("guests=4"));

    rrs()
        .args(["--db", &db_path, "log", "--print", "--operation", "check"])
        .assert()
        .success()
        .stdout(contains("(2024-06-12T18:30)"))
        .stdout(contains("Available — 7 / 30 tables free."));
}

#[test]
fn test_check_defaults_to_first_slot_without_guests() {
    let db_path = setup_test_db("check_first_slot");
    let (api, requests) = serve(vec![(
        200,
        r#"{"ok":true,"fullyBooked":true,"availableTables":0,"tableCount":30}"#,
    )]);

    rrs_local(&api, &db_path)
        .args(["check", "2024-06-09"])
        .assert()
        .success()
        .stdout(contains("Fully booked — 0 / 30 tables free."));

    let req = requests.recv().expect("request captured");
    assert!(req.request_line.contains("timeSlot=2024-06-09T11%3A00"));
    assert!(!req.request_line.contains("guests="));
}

#[test]
fn test_check_backend_error_is_a_message() {
    let db_path = setup_test_db("check_backend_error");
    let (api, _requests) = serve(vec![(400, r#"{"ok":false,"message":"Invalid timeSlot format."}"#)]);

    rrs_local(&api, &db_path)
        .args(["check", "2024-06-12", "17:00"])
        .assert()
        .success()
        .stderr(contains("Invalid timeSlot format."));
}

#[test]
fn test_check_undecodable_error_body_falls_back_to_message() {
    let db_path = setup_test_db("check_html_502");
    let (api, _requests) = serve(vec![(502, "<html>Bad Gateway</html>")]);

    rrs_local(&api, &db_path)
        .args(["check", "2024-06-12", "18:30"])
        .assert()
        .success()
        .stderr(contains("Could not check availability."));
}

#[test]
fn test_check_with_backend_down_still_succeeds() {
    let db_path = setup_test_db("check_backend_down");

    rrs_local("http://127.0.0.1:9", &db_path)
        .args(["check", "2024-06-12", "18:30"])
        .assert()
        .success()
        .stderr(contains("Could not check availability. ("));
}

#[test]
fn test_check_keeps_api_base_path_prefix() {
    let db_path = setup_test_db("check_prefix");
    let (api, requests) = serve(vec![(
        200,
        r#"{"ok":true,"fullyBooked":false,"availableTables":5,"tableCount":30,"endTime":"2024-06-12T19:30"}"#,
    )]);

    rrs_local(&format!("{api}/booking"), &db_path)
        .args(["check", "2024-06-12", "18:30"])
        .assert()
        .success();

    let req = requests.recv().expect("captured request");
    assert!(
        req.request_line
            .starts_with("GET /booking/api/reservations/availability?"),
        "unexpected request line: {}",
        req.request_line
    );
}

#[test]
fn test_non_http_api_base_is_rejected() {
    let db_path = setup_test_db("check_ftp");

    rrs_local("ftp://example.com", &db_path)
        .args(["check", "2024-06-12", "18:30"])
        .assert()
        .failure()
        .stderr(contains("not an http(s) URL"));
}

#[test]
fn test_check_rejects_time_outside_slots() {
    rrs()
        .args(["--api", "http://127.0.0.1:9", "check", "2024-06-09", "18:00"])
        .assert()
        .failure()
        .stderr(contains("18:00 is not a reservation slot on 2024-06-09"));
}

#[test]
fn test_reserve_success() {
    let db_path = setup_test_db("reserve_ok");
    let (api, requests) = serve(vec![(
        200,
        r#"{"ok":true,"message":"Reservation confirmed.","tableNumber":12,"timeSlot":"2024-06-14T20:00","guests":2}"#,
    )]);

    rrs_local(&api, &db_path)
        .args([
            "reserve",
            "2024-06-14",
            "20:00",
            "--guests",
            "2",
            "--name",
            " Ada ",
            "--email",
            "ADA@example.com",
        ])
        .assert()
        .success()
        .stdout(contains("Success. Reservation confirmed."))
        .stdout(contains("Table: 12"));

    let req = requests.recv().expect("request captured");
    assert!(req.request_line.starts_with("POST /api/reservations "));
    let body: serde_json::Value = serde_json::from_str(&req.body).expect("json body");
    assert_eq!(body["timeSlot"], "2024-06-14T20:00");
    assert_eq!(body["guests"], 2);
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["email"], "ada@example.com");
    assert!(body["phone"].is_null());

    rrs()
        .args(["--db", &db_path, "log", "--print", "--operation", "reserve"])
        .assert()
        .success()
        .stdout(contains("(2024-06-14T20:00)"))
        .stdout(contains("Success. Reservation confirmed. | Table: 12"));
}

#[test]
fn test_reserve_fully_booked_fails() {
    let db_path = setup_test_db("reserve_full");
    let (api, _requests) = serve(vec![(
        409,
        r#"{"ok":false,"message":"This time slot is fully booked. Please choose another time."}"#,
    )]);

    let assert = rrs_local(&api, &db_path)
        .args([
            "reserve",
            "2024-06-14",
            "20:00",
            "--guests",
            "2",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
        ])
        .assert()
        .failure()
        .stderr(contains("Error: Failed, not confirmed."))
        .stderr(contains("fully booked"));

    // the refusal is reported a single time
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert_eq!(stderr.matches("fully booked").count(), 1);
}

#[test]
fn test_reserve_invalid_email_never_calls_backend() {
    let db_path = setup_test_db("reserve_bad_email");

    rrs()
        .args([
            "--db",
            &db_path,
            "--api",
            "http://127.0.0.1:9",
            "reserve",
            "2024-06-14",
            "20:00",
            "--guests",
            "2",
            "--name",
            "Ada",
            "--email",
            "not-an-email",
        ])
        .assert()
        .failure()
        .stderr(contains("Email is invalid."));
}

#[test]
fn test_ping() {
    let db_path = setup_test_db("ping");
    let (api, _requests) = serve(vec![(200, r#"{"ok":true,"service":"cafe-fausse-api"}"#)]);

    rrs_local(&api, &db_path)
        .arg("ping")
        .assert()
        .success()
        .stdout(contains("cafe-fausse-api is up"));
}
