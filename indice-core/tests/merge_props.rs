use chrono::NaiveDate;
use indice_core::{SeriesFrame, SeriesName, SeriesValues, extend_rows, join_columns};
use proptest::prelude::*;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

fn arb_values() -> impl Strategy<Value = SeriesValues> {
    proptest::collection::btree_map(0u64..3_000, -1_000.0f64..1_000.0, 0..40).prop_map(|m| {
        m.into_iter()
            .map(|(offset, v)| (epoch() + chrono::Days::new(offset), v))
            .collect()
    })
}

fn arb_frame(max_cols: usize) -> impl Strategy<Value = SeriesFrame> {
    proptest::collection::vec(arb_values(), 1..=max_cols).prop_map(|cols| {
        SeriesFrame::from_columns(
            cols.into_iter()
                .enumerate()
                .map(|(i, values)| (SeriesName::from(format!("s{i}")), values)),
        )
        .unwrap()
    })
}

proptest! {
    // Rows at or before the stored last date are untouched by row extension.
    #[test]
    fn extend_rows_preserves_history(store in arb_frame(3), increment in arb_frame(3)) {
        let merged = extend_rows(&store, &increment);
        let cutoff = store.last_date();
        for (name, values) in store.columns() {
            for (&date, &value) in values {
                prop_assert_eq!(merged.value(name, date), Some(value));
            }
            // No adopted observation may land at or before the cutoff.
            let merged_col = merged.column(name).unwrap();
            for (&date, _) in merged_col {
                if !values.contains_key(&date) {
                    prop_assert!(cutoff.is_none_or(|c| date > c));
                }
            }
        }
    }

    // Row extension with an empty increment is the identity.
    #[test]
    fn extend_rows_identity_on_empty_increment(store in arb_frame(3)) {
        let merged = extend_rows(&store, &SeriesFrame::empty());
        prop_assert_eq!(merged, store);
    }

    // A joined column only ever holds dates the store already had.
    #[test]
    fn join_columns_never_creates_rows(store in arb_frame(2), added in arb_frame(2)) {
        // Rename so the added columns are genuinely new.
        let added = SeriesFrame::from_columns(
            added
                .columns()
                .map(|(n, v)| (SeriesName::from(format!("new_{n}")), v.clone())),
        )
        .unwrap();
        let index = store.dates();
        let joined = join_columns(&store, &added);
        prop_assert_eq!(joined.dates(), index.clone());
        for (name, _) in added.columns() {
            if let Some(values) = joined.column(name) {
                for date in values.keys() {
                    prop_assert!(index.contains(date));
                }
            }
        }
    }
}
