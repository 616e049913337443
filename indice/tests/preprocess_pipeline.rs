use chrono::NaiveDate;
use indice::{
    ExtendOptions, Frequency, IndiceError, PreprocessOptions, parse_extend_method, preprocess,
    preprocess_targets,
};
use indice_core::{ExtendMethod, SeriesFrame, SeriesName, SeriesValues};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn n(name: &str) -> SeriesName {
    SeriesName::from(name)
}

fn single(name: &str, points: &[(NaiveDate, f64)]) -> SeriesFrame {
    let values: SeriesValues = points.iter().copied().collect();
    SeriesFrame::from_columns([(n(name), values)]).unwrap()
}

#[test]
fn empty_column_selection_yields_the_explicit_no_data_signal() {
    let frame = single("cpi", &[(d(2020, 1, 1), 100.0)]);
    let opts = PreprocessOptions {
        columns: Some(vec![]),
        ..Default::default()
    };
    assert!(preprocess(&frame, &opts).unwrap().is_none());
    assert!(
        preprocess_targets(&frame, &opts, &ExtendOptions::default())
            .unwrap()
            .is_none()
    );
}

#[test]
fn constant_extension_appends_copies_one_and_two_months_out() {
    let frame = single("cpi", &[(d(2020, 1, 1), 100.0), (d(2020, 2, 1), 101.0)]);
    let extend = ExtendOptions {
        periods: 2,
        method: Some(ExtendMethod::Constant),
    };
    let opts = PreprocessOptions {
        interpolate: false,
        ..Default::default()
    };
    let out = preprocess_targets(&frame, &opts, &extend).unwrap().unwrap();
    assert_eq!(out.row_count(), 4);
    assert_eq!(out.value(&n("cpi"), d(2020, 3, 1)), Some(101.0));
    assert_eq!(out.value(&n("cpi"), d(2020, 4, 1)), Some(101.0));
}

#[test]
fn projection_extension_continues_the_trend() {
    let frame = single("cpi", &[(d(2020, 1, 1), 10.0), (d(2020, 2, 1), 12.0)]);
    let extend = ExtendOptions {
        periods: 1,
        method: Some(ExtendMethod::Project),
    };
    let out = preprocess_targets(&frame, &PreprocessOptions::default(), &extend)
        .unwrap()
        .unwrap();
    assert_eq!(out.value(&n("cpi"), d(2020, 3, 1)), Some(14.0));
}

#[test]
fn projection_without_enough_history_fails_fast() {
    let frame = single("cpi", &[(d(2020, 1, 1), 10.0)]);
    let extend = ExtendOptions {
        periods: 1,
        method: Some(ExtendMethod::Project),
    };
    let err = preprocess_targets(&frame, &PreprocessOptions::default(), &extend).unwrap_err();
    assert!(matches!(err, IndiceError::InsufficientHistory { .. }));
}

#[test]
fn unknown_method_degrades_to_a_skip() {
    assert_eq!(parse_extend_method("project"), Some(ExtendMethod::Project));
    assert_eq!(parse_extend_method("linear-ish"), None);

    let frame = single("cpi", &[(d(2020, 1, 1), 100.0)]);
    let extend = ExtendOptions {
        periods: 3,
        method: parse_extend_method("linear-ish"),
    };
    let out = preprocess_targets(&frame, &PreprocessOptions::default(), &extend)
        .unwrap()
        .unwrap();
    // Extension skipped: no synthetic rows were appended.
    assert_eq!(out.row_count(), 1);
}

#[test]
fn resample_then_fill_leaves_no_gaps() {
    // "a" skips February and March entirely; "b" only has January and April.
    let a: SeriesValues = [
        (d(2020, 1, 10), 10.0),
        (d(2020, 1, 20), 30.0),
        (d(2020, 4, 5), 40.0),
    ]
    .into_iter()
    .collect();
    let b: SeriesValues = [(d(2020, 1, 15), 1.0), (d(2020, 4, 15), 4.0)]
        .into_iter()
        .collect();
    let frame =
        SeriesFrame::from_columns([(n("a"), a), (n("b"), b)]).unwrap();
    let opts = PreprocessOptions {
        resample: Some(Frequency::Monthly),
        ..Default::default()
    };
    let out = preprocess(&frame, &opts).unwrap().unwrap();

    let months = [d(2020, 1, 1), d(2020, 2, 1), d(2020, 3, 1), d(2020, 4, 1)];
    assert_eq!(out.row_count(), months.len());
    for (name, values) in out.columns() {
        for month in &months {
            assert!(values.contains_key(month), "'{name}' missing {month}");
        }
    }
    // January's mean for "a" uses only real observations.
    assert_eq!(out.value(&n("a"), d(2020, 1, 1)), Some(20.0));
}

#[test]
fn extension_runs_before_resampling() {
    let frame = single("cpi", &[(d(2020, 1, 10), 10.0), (d(2020, 1, 20), 30.0)]);
    let extend = ExtendOptions {
        periods: 1,
        method: Some(ExtendMethod::Constant),
    };
    let opts = PreprocessOptions {
        resample: Some(Frequency::Monthly),
        ..Default::default()
    };
    let out = preprocess_targets(&frame, &opts, &extend).unwrap().unwrap();
    // The synthetic row replicates the last real observation (Jan 20 ->
    // Feb 20), so February's bucket holds 30.0. Had resampling run first,
    // the synthetic row would carry January's mean of 20.0 instead.
    assert_eq!(out.value(&n("cpi"), d(2020, 1, 1)), Some(20.0));
    assert_eq!(out.value(&n("cpi"), d(2020, 2, 1)), Some(30.0));
}

#[test]
fn selection_is_last_and_keeps_request_order() {
    let a: SeriesValues = [(d(2020, 1, 1), 1.0)].into_iter().collect();
    let b: SeriesValues = [(d(2020, 1, 1), 2.0)].into_iter().collect();
    let frame =
        SeriesFrame::from_columns([(n("a"), a), (n("b"), b)]).unwrap();
    let opts = PreprocessOptions {
        columns: Some(vec![n("b"), n("a")]),
        ..Default::default()
    };
    let out = preprocess(&frame, &opts).unwrap().unwrap();
    let names: Vec<_> = out.names().map(SeriesName::as_str).collect();
    assert_eq!(names, vec!["b", "a"]);
}
