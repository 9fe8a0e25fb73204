use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_sheet, init_sheet_with_data, log_set, read_sheet, rsl, setup_test_sheet};

#[test]
fn test_init_creates_sheet_with_header() {
    let sheet = setup_test_sheet("init_creates_sheet");
    init_sheet(&sheet);

    let matrix = read_sheet(&sheet);
    assert_eq!(matrix.len(), 1);
    assert_eq!(matrix[0][0], "id");
    assert_eq!(matrix[0][1], "timestamp");
    assert_eq!(matrix[0][9], "updated_at");
}

#[test]
fn test_init_is_idempotent() {
    let sheet = setup_test_sheet("init_idempotent");
    init_sheet(&sheet);
    init_sheet(&sheet);
    assert_eq!(read_sheet(&sheet).len(), 1);
}

#[test]
fn test_log_appends_row_and_prints_id() {
    let sheet = setup_test_sheet("log_appends_row");
    init_sheet(&sheet);

    rsl()
        .args([
            "--sheet",
            &sheet,
            "--test",
            "log",
            "--day",
            "upper_a",
            "--exercise",
            "barbell_bench",
            "--weight",
            "100",
            "--reps",
            "5",
        ])
        .assert()
        .success()
        .stdout(contains("Logged 100 lb × 5").and(contains("New session started")));

    let matrix = read_sheet(&sheet);
    assert_eq!(matrix.len(), 2);
    let row = &matrix[1];
    assert!(!row[0].is_empty(), "generated id");
    assert_eq!(row[3], "upper_a");
    assert_eq!(row[4], "barbell_bench");
    assert_eq!(row[6], "100");
    assert_eq!(row[9], "", "updated_at empty until first edit");
}

#[test]
fn test_log_rejects_invalid_day_key() {
    let sheet = setup_test_sheet("log_invalid_day");
    init_sheet(&sheet);

    rsl()
        .args([
            "--sheet",
            &sheet,
            "--test",
            "log",
            "--day",
            "push_day",
            "--exercise",
            "barbell_bench",
            "--weight",
            "100",
            "--reps",
            "5",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid day key: push_day"));
}

#[test]
fn test_log_without_init_reports_store_unavailable() {
    let sheet = setup_test_sheet("log_no_init");

    rsl()
        .args([
            "--sheet",
            &sheet,
            "--test",
            "log",
            "--day",
            "upper_a",
            "--exercise",
            "barbell_bench",
            "--weight",
            "100",
            "--reps",
            "5",
        ])
        .assert()
        .failure()
        .stderr(contains("Error:").and(contains("Store unavailable")));
}

#[test]
fn test_history_shows_logged_sets_most_recent_first() {
    let sheet = setup_test_sheet("history_shows_sets");
    init_sheet_with_data(&sheet);

    rsl()
        .args(["--sheet", &sheet, "--test", "history", "barbell_bench"])
        .assert()
        .success()
        .stdout(
            contains("Barbell Bench — last 2 sets")
                .and(contains("100"))
                .and(contains("105")),
        );
}

#[test]
fn test_history_excludes_other_exercises() {
    let sheet = setup_test_sheet("history_filters");
    init_sheet_with_data(&sheet);

    rsl()
        .args(["--sheet", &sheet, "--test", "history", "hex_bar_deadlift"])
        .assert()
        .success()
        .stdout(
            contains("Hex Bar Deadlift — last 1 sets")
                .and(contains("225"))
                .and(contains("Barbell").not()),
        );
}

#[test]
fn test_history_empty_for_unknown_exercise() {
    let sheet = setup_test_sheet("history_empty");
    init_sheet(&sheet);

    rsl()
        .args(["--sheet", &sheet, "--test", "history", "goblet_squat"])
        .assert()
        .success()
        .stdout(contains("No sets logged for 'goblet_squat' yet."));
}

#[test]
fn test_sessions_groups_by_session_id() {
    let sheet = setup_test_sheet("sessions_groups");
    init_sheet_with_data(&sheet);

    rsl()
        .args(["--sheet", &sheet, "--test", "sessions"])
        .assert()
        .success()
        .stdout(
            contains("Barbell Bench")
                .and(contains("Hex Bar Deadlift"))
                .and(contains("100 lb × 5 | 105 lb × 5")),
        );
}

#[test]
fn test_sessions_empty_store() {
    let sheet = setup_test_sheet("sessions_empty");
    init_sheet(&sheet);

    rsl()
        .args(["--sheet", &sheet, "--test", "sessions"])
        .assert()
        .success()
        .stdout(contains("No sessions yet."));
}

#[test]
fn test_log_joining_existing_session_does_not_generate_new_one() {
    let sheet = setup_test_sheet("log_join_session");
    init_sheet(&sheet);
    log_set(&sheet, "upper_a", "barbell_bench", "100", "5", Some("sess-x"));

    rsl()
        .args([
            "--sheet",
            &sheet,
            "--test",
            "log",
            "--day",
            "upper_a",
            "--exercise",
            "barbell_bench",
            "--weight",
            "105",
            "--reps",
            "5",
            "--session",
            "sess-x",
        ])
        .assert()
        .success()
        .stdout(contains("New session started").not());

    let matrix = read_sheet(&sheet);
    assert_eq!(matrix[1][2], "sess-x");
    assert_eq!(matrix[2][2], "sess-x");
}

#[test]
fn test_days_lists_templates() {
    rsl()
        .args(["--test", "days"])
        .assert()
        .success()
        .stdout(contains("upper_a").and(contains("Lower B")));
}

#[test]
fn test_days_single_template_lists_exercises() {
    rsl()
        .args(["--test", "days", "lower_a"])
        .assert()
        .success()
        .stdout(contains("Hex Bar Deadlift").and(contains("rdl")));
}

#[test]
fn test_days_unknown_key_fails() {
    rsl()
        .args(["--test", "days", "push_day"])
        .assert()
        .failure()
        .stderr(contains("Invalid day key"));
}

#[test]
fn test_legacy_sheet_without_header_still_decodes() {
    let sheet = setup_test_sheet("legacy_sheet");
    // pre-id, pre-updated_at schema, no header row
    std::fs::write(
        &sheet,
        "2024-01-01T10:00:00Z,sess-legacy,upper_a,barbell_bench,kg,80,8,old school\n",
    )
    .unwrap();

    rsl()
        .args(["--sheet", &sheet, "--test", "history", "barbell_bench"])
        .assert()
        .success()
        .stdout(contains("80").and(contains("kg")));
}
