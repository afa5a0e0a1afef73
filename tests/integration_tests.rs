use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{rpr, rpr_seeded, temp_path};

#[test]
fn test_list_all_shows_totals_and_count() {
    rpr_seeded("list_all", 50, 7)
        .args(["list", "--all"])
        .assert()
        .success()
        .stdout(contains("TOTAL TIME WORKED").and(contains("Total 50")));
}

#[test]
fn test_list_paginates_with_filtered_total() {
    rpr_seeded("list_page", 100, 7)
        .args(["list", "--page", "2", "--page-size", "20"])
        .assert()
        .success()
        .stdout(contains("Total 100").and(contains("page 2 of")));
}

#[test]
fn test_list_rejects_unknown_page_size() {
    rpr_seeded("list_bad_page", 20, 7)
        .args(["list", "--page-size", "15"])
        .assert()
        .failure()
        .stderr(contains("Invalid page size"));
}

#[test]
fn test_list_search_without_match() {
    rpr_seeded("list_no_match", 20, 7)
        .args(["list", "--search", "zzz"])
        .assert()
        .success()
        .stdout(contains("No shifts match").and(contains("Total 0")));
}

#[test]
fn test_list_invalid_date_is_ignored() {
    rpr_seeded("list_bad_date", 30, 7)
        .args(["list", "--all", "--date", "13-45-2024"])
        .assert()
        .success()
        .stdout(contains("Ignoring --date").and(contains("Total 30")));
}

#[test]
fn test_list_range_needs_both_ends() {
    rpr_seeded("list_half_range", 30, 7)
        .args(["list", "--all", "--from", "01-01-2025"])
        .assert()
        .success()
        .stdout(contains("Total 30"));
}

#[test]
fn test_stats_both_by_default() {
    rpr_seeded("stats_both", 40, 3)
        .arg("stats")
        .assert()
        .success()
        .stdout(
            contains("The employee with the most hours worked is:")
                .and(contains("The most efficient employee is:")),
        );
}

#[test]
fn test_stats_only_most_hours() {
    rpr_seeded("stats_hours", 40, 3)
        .args(["stats", "--most-hours"])
        .assert()
        .success()
        .stdout(contains("most hours").and(contains("most efficient employee").not()));
}

#[test]
fn test_stats_empty_selection_never_prints_infinity() {
    rpr_seeded("stats_empty", 40, 3)
        .args(["stats", "--search", "nobody"])
        .assert()
        .success()
        .stdout(contains("No shifts match").and(contains("inf").not()));
}

#[test]
fn test_init_then_config_check() {
    let cfg = temp_path("init_check", "conf");

    rpr().args(["--config-file", &cfg, "init"]).assert().success();
    assert!(fs::metadata(&cfg).is_ok());

    rpr()
        .args(["--config-file", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("complete"));

    // second init refuses to overwrite
    rpr()
        .args(["--config-file", &cfg, "init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    rpr()
        .args(["--config-file", &cfg, "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_config_check_reports_missing_fields() {
    let cfg = temp_path("config_missing", "conf");
    fs::write(&cfg, "record_count: 25\n").unwrap();

    rpr()
        .args(["--config-file", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing field 'page_size'").and(contains("Missing field 'seed'")));
}

#[test]
fn test_config_record_count_is_used() {
    let cfg = temp_path("config_count", "conf");
    fs::write(&cfg, "record_count: 25\nseed: 4\n").unwrap();

    rpr()
        .args(["--config-file", &cfg, "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Total 25"));
}
