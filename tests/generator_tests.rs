use rpayroll::core::generator::{
    MAX_UNITS, MAX_WORKED_SECS, MIN_UNITS, MIN_WORKED_SECS, generate, generate_records,
};
use rpayroll::models::Property;
use rpayroll::utils::date::{is_date_in_range, parse_date};
use rpayroll::utils::time::{fixed2, parse_clock};
use chrono::Timelike;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// "<m> min <s> sec" → total seconds.
fn label_secs(label: &str) -> u32 {
    let parts: Vec<&str> = label.split(' ').collect();
    assert_eq!(parts.len(), 4, "unexpected label {label}");
    assert_eq!(parts[1], "min");
    assert_eq!(parts[3], "sec");
    parts[0].parse::<u32>().unwrap() * 60 + parts[2].parse::<u32>().unwrap()
}

#[test]
fn test_generate_count_and_empty() {
    assert_eq!(generate_records(0, Some(1)).len(), 0);
    assert_eq!(generate_records(100, Some(1)).len(), 100);
}

#[test]
fn test_generate_same_seed_same_records() {
    assert_eq!(generate_records(50, Some(9)), generate_records(50, Some(9)));
    assert_ne!(generate_records(50, Some(9)), generate_records(50, Some(10)));
}

#[test]
fn test_generate_with_explicit_rng() {
    let mut rng = StdRng::seed_from_u64(77);
    let records = generate(25, &mut rng);
    assert_eq!(records.len(), 25);
}

#[test]
fn test_generated_fields_respect_bounds_and_formats() {
    let first_names = ["John", "Jane", "Alice", "Bob", "Charlie", "Diana"];
    let last_names = ["Doe", "Smith", "Johnson", "Williams", "Brown", "Jones"];

    for r in generate_records(500, Some(2024)) {
        // date
        assert_eq!(r.date.len(), 10);
        assert!(parse_date(&r.date).is_some());
        assert!(is_date_in_range(&r.date, "01-01-2023", "12-31-2025"));

        // names
        let (first, last) = r.employee_name.split_once(' ').expect("First Last");
        assert!(first_names.contains(&first));
        assert!(last_names.contains(&last));
        assert!(Property::from_name(&r.property_name).is_some());

        // units and worked time
        assert!((MIN_UNITS..=MAX_UNITS).contains(&r.no_of_units));
        let secs = label_secs(&r.time_worked);
        assert!((MIN_WORKED_SECS..=MAX_WORKED_SECS).contains(&secs));

        // derived average
        assert_eq!(
            r.avg_sec_per_unit,
            fixed2(f64::from(secs) / f64::from(r.no_of_units))
        );

        // check-out = check-in + worked time, wrapping midnight, minute precision
        let check_in = parse_clock(&r.check_in).expect("check-in label");
        let check_out = parse_clock(&r.check_out).expect("check-out label");
        let start = check_in.num_seconds_from_midnight();
        let expected = (start + secs) % 86_400 / 60;
        assert_eq!(check_out.num_seconds_from_midnight() / 60, expected);
        assert!((1..=12).contains(&r.check_in.split(':').next().unwrap().parse::<u32>().unwrap()));
    }
}

#[test]
fn test_generated_dates_cover_multiple_years() {
    let records = generate_records(300, Some(11));
    let years: std::collections::BTreeSet<i32> = records
        .iter()
        .filter_map(|r| parse_date(&r.date))
        .map(|d| chrono::Datelike::year(&d))
        .collect();
    assert!(years.len() >= 2);
    assert!(years.iter().all(|y| (2023..=2025).contains(y)));
}
