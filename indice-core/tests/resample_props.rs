use chrono::NaiveDate;
use indice_core::{Frequency, SeriesFrame, SeriesName, SeriesValues, resample_mean};
use proptest::prelude::*;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

fn arb_frame() -> impl Strategy<Value = SeriesFrame> {
    proptest::collection::btree_map(0u64..5_000, -1_000.0f64..1_000.0, 0..80).prop_map(|m| {
        let values: SeriesValues = m
            .into_iter()
            .map(|(offset, v)| (epoch() + chrono::Days::new(offset), v))
            .collect();
        SeriesFrame::from_columns([(SeriesName::from("x"), values)]).unwrap()
    })
}

fn arb_freq() -> impl Strategy<Value = Frequency> {
    prop::sample::select(vec![
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Quarterly,
        Frequency::Yearly,
    ])
}

proptest! {
    // Resampling already-bucket-aligned data is a no-op.
    #[test]
    fn resample_idempotent(frame in arb_frame(), freq in arb_freq()) {
        let once = resample_mean(&frame, freq);
        let twice = resample_mean(&once, freq);
        prop_assert_eq!(once, twice);
    }

    // Every output row sits at a bucket start, and the row count never grows.
    #[test]
    fn output_keys_are_bucket_starts(frame in arb_frame(), freq in arb_freq()) {
        let out = resample_mean(&frame, freq);
        prop_assert!(out.row_count() <= frame.row_count());
        for date in out.dates() {
            prop_assert_eq!(freq.bucket_start(date), date);
        }
    }
}
