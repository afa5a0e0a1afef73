mod common;
use common::{alice_and_bob, rpr_seeded, temp_path};
use predicates::str::contains;
use rpayroll::core::calculator::filter::filter_records;
use rpayroll::core::generator::generate_records;
use rpayroll::export::csv::{CSV_HEADERS, to_csv_string, write_csv};
use rpayroll::export::{ExportFormat, default_export_path};
use rpayroll::models::{Filters, ShiftRecord};
use std::fs;
use std::path::PathBuf;

#[test]
fn test_csv_header_is_field_names() {
    let csv = to_csv_string(&alice_and_bob()).expect("csv");
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("employeeName,date,propertyName,checkIn,checkOut,timeWorked,noOfUnits,avgSecPerUnit")
    );
    assert_eq!(
        lines.next(),
        Some("Alice Smith,02-01-2025,Property A,9:00 AM,9:30 AM,30 min 0 sec,10,180.00")
    );
    assert_eq!(lines.count(), 1);
    assert_eq!(CSV_HEADERS.join(","), csv.lines().next().unwrap());
}

#[test]
fn test_csv_empty_selection_writes_header_only() {
    let csv = to_csv_string(&[]).expect("csv");
    assert_eq!(csv.lines().count(), 1);
}

#[test]
fn test_csv_quotes_embedded_separators() {
    let mut records = alice_and_bob();
    records[0].employee_name = "Smith, \"Ali\"".to_string();

    let mut buf = Vec::new();
    write_csv(&records, &mut buf).expect("csv");
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("\"Smith, \"\"Ali\"\"\""));

    let mut rdr = csv::Reader::from_reader(text.as_bytes());
    let parsed: Vec<ShiftRecord> = rdr.deserialize().map(|r| r.unwrap()).collect();
    assert_eq!(parsed, records);
}

#[test]
fn test_cli_export_csv_matches_filtered_records() {
    let out = temp_path("export_csv_filtered", "csv");

    rpr_seeded("export_csv_filtered", 80, 31)
        .args(["export", "--search", "alice", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let expected = filter_records(
        &generate_records(80, Some(31)),
        &Filters::default().with_search("alice"),
    );
    let content = fs::read_to_string(&out).expect("read exported csv");
    assert_eq!(content, to_csv_string(&expected).unwrap());
}

#[test]
fn test_cli_export_json() {
    let out = temp_path("export_json_all", "json");

    rpr_seeded("export_json_all", 10, 5)
        .args(["export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: Vec<ShiftRecord> = serde_json::from_str(&content).expect("valid json");
    assert_eq!(parsed, generate_records(10, Some(5)));
    assert!(content.contains("\"employeeName\""));
}

#[test]
fn test_cli_export_no_match_writes_header_only() {
    let out = temp_path("export_no_match", "csv");

    rpr_seeded("export_no_match", 30, 1)
        .args(["export", "--search", "nobody here", "--file", &out])
        .assert()
        .success()
        .stdout(contains("No records match"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn test_cli_export_refuses_overwrite_without_confirmation() {
    let out = temp_path("export_overwrite", "csv");
    fs::write(&out, "keep me").unwrap();

    rpr_seeded("export_overwrite", 10, 1)
        .args(["export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rpr_seeded("export_overwrite", 10, 1)
        .args(["export", "--file", &out])
        .write_stdin("y\n")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&out).unwrap().lines().count(), 11);
}

#[test]
fn test_default_export_path_follows_format() {
    assert_eq!(
        default_export_path("payroll_data.csv", &ExportFormat::Csv),
        PathBuf::from("payroll_data.csv")
    );
    assert_eq!(
        default_export_path("payroll_data.csv", &ExportFormat::Json),
        PathBuf::from("payroll_data.json")
    );
    assert_eq!(
        default_export_path("reports/pay", &ExportFormat::Json),
        PathBuf::from("reports/pay.json")
    );
}

#[test]
fn test_cli_export_json_without_file_uses_json_extension() {
    let dir = std::env::temp_dir().join("rpayroll_export_default_json");
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).unwrap();

    rpr_seeded("export_default_json", 5, 2)
        .current_dir(&dir)
        .args(["export", "--format", "json"])
        .assert()
        .success();

    assert!(!dir.join("payroll_data.csv").exists());
    let content = fs::read_to_string(dir.join("payroll_data.json")).expect("json export");
    let parsed: Vec<ShiftRecord> = serde_json::from_str(&content).expect("valid json");
    assert_eq!(parsed.len(), 5);
}
