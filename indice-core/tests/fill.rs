use chrono::NaiveDate;
use indice_core::{SeriesFrame, SeriesName, SeriesValues, backfill, interpolate};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn two_column_frame() -> SeriesFrame {
    // "a" spans the whole index; "b" has a gap at 2020-01-11 and a missing
    // leading observation at 2020-01-01.
    let a: SeriesValues = [
        (d(2020, 1, 1), 1.0),
        (d(2020, 1, 11), 2.0),
        (d(2020, 1, 21), 3.0),
    ]
    .into_iter()
    .collect();
    let b: SeriesValues = [(d(2020, 1, 11), 10.0), (d(2020, 1, 21), 30.0)]
        .into_iter()
        .collect();
    SeriesFrame::from_columns([(SeriesName::from("a"), a), (SeriesName::from("b"), b)]).unwrap()
}

#[test]
fn interpolation_is_day_weighted() {
    let values: SeriesValues = [(d(2020, 1, 1), 0.0), (d(2020, 1, 5), 8.0)]
        .into_iter()
        .collect();
    let other: SeriesValues = [(d(2020, 1, 2), 1.0)].into_iter().collect();
    let f = SeriesFrame::from_columns([
        (SeriesName::from("x"), values),
        (SeriesName::from("marker"), other),
    ])
    .unwrap();
    let out = interpolate(&f);
    // One day into a four-day span from 0.0 to 8.0.
    assert_eq!(out.value(&SeriesName::from("x"), d(2020, 1, 2)), Some(2.0));
}

#[test]
fn interpolation_leaves_leading_gaps() {
    let f = two_column_frame();
    let out = interpolate(&f);
    let b = SeriesName::from("b");
    assert_eq!(out.value(&b, d(2020, 1, 1)), None);
    assert_eq!(out.value(&b, d(2020, 1, 11)), Some(10.0));
}

#[test]
fn interpolation_holds_the_last_value_over_trailing_gaps() {
    let long: SeriesValues = [(d(2020, 1, 1), 1.0), (d(2020, 1, 31), 4.0)]
        .into_iter()
        .collect();
    let short: SeriesValues = [(d(2020, 1, 1), 7.0)].into_iter().collect();
    let f = SeriesFrame::from_columns([
        (SeriesName::from("long"), long),
        (SeriesName::from("short"), short),
    ])
    .unwrap();
    let out = interpolate(&f);
    assert_eq!(out.value(&SeriesName::from("short"), d(2020, 1, 31)), Some(7.0));
}

#[test]
fn interpolation_over_a_dense_index_creates_period_rows() {
    use indice_core::interpolate_over;
    let values: SeriesValues = [(d(2020, 1, 1), 1.0), (d(2020, 3, 1), 3.0)]
        .into_iter()
        .collect();
    let f = SeriesFrame::from_columns([(SeriesName::from("x"), values)]).unwrap();
    let index = [d(2020, 1, 1), d(2020, 2, 1), d(2020, 3, 1)];
    let out = interpolate_over(&f, &index);
    let feb = out.value(&SeriesName::from("x"), d(2020, 2, 1)).unwrap();
    // 31 days into a 60-day span from 1.0 to 3.0.
    assert!((feb - (1.0 + 2.0 * 31.0 / 60.0)).abs() < 1e-12);
}

#[test]
fn backfill_propagates_the_first_known_value() {
    let f = two_column_frame();
    let out = backfill(&f);
    assert_eq!(out.value(&SeriesName::from("b"), d(2020, 1, 1)), Some(10.0));
}

#[test]
fn interpolate_then_backfill_leaves_no_gaps() {
    let f = two_column_frame();
    let out = backfill(&interpolate(&f));
    let index = out.dates();
    for (name, values) in out.columns() {
        for date in &index {
            assert!(
                values.contains_key(date),
                "column '{name}' still missing {date}"
            );
        }
    }
}
