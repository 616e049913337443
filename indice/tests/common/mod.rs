use std::sync::Arc;

use chrono::NaiveDate;
use indice::{Indice, SeriesName};
use indice_core::CsvStore;
use indice_mock::MockSource;

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

pub fn n(name: &str) -> SeriesName {
    SeriesName::from(name)
}

/// An orchestrator over the given mock and a store file inside `dir`.
pub fn indice_with(dir: &tempfile::TempDir, source: &Arc<MockSource>) -> Indice {
    Indice::builder()
        .with_source(Arc::clone(source) as Arc<dyn indice_core::SeriesSource>)
        .with_store(Arc::new(CsvStore::new(dir.path().join("store.csv"))))
        .build()
        .unwrap()
}
