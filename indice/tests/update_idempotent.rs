mod common;

use std::sync::Arc;

use common::{d, indice_with, n};
use indice_mock::MockSource;

#[tokio::test]
async fn repeated_updates_leave_the_store_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let source = Arc::new(
        MockSource::new()
            .with_series("gdp", [(d(2020, 1, 1), 1.25), (d(2020, 2, 1), 2.5)])
            .with_series("rates", [(d(2020, 1, 15), 0.75)]),
    );
    let indice = indice_with(&dir, &source);
    let path = dir.path().join("store.csv");

    let first = indice.update(&[n("gdp"), n("rates")], None).await.unwrap();
    let bytes_after_first = std::fs::read(&path).unwrap();

    let second = indice.update(&[n("gdp"), n("rates")], None).await.unwrap();
    let bytes_after_second = std::fs::read(&path).unwrap();

    assert_eq!(first.frame, second.frame);
    assert_eq!(bytes_after_first, bytes_after_second);
}

#[tokio::test]
async fn historical_bytes_survive_a_row_extension() {
    let dir = tempfile::tempdir().unwrap();
    let source =
        Arc::new(MockSource::new().with_series("gdp", [(d(2020, 1, 1), 1.25)]));
    let indice = indice_with(&dir, &source);
    let path = dir.path().join("store.csv");

    indice.update(&[n("gdp")], None).await.unwrap();
    let old = String::from_utf8(std::fs::read(&path).unwrap()).unwrap();

    source.publish("gdp", [(d(2020, 2, 1), 2.5)]).await;
    indice.update(&[n("gdp")], None).await.unwrap();
    let new = String::from_utf8(std::fs::read(&path).unwrap()).unwrap();

    // Same column set: the new file is the old file plus appended rows.
    assert!(new.starts_with(&old));
    assert!(new.len() > old.len());
}
