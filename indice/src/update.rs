//! Incremental reconciliation of a persisted store against its source.

use chrono::{Days, NaiveDate};

use indice_core::{
    DateRange, FetchFailure, IndiceError, SeriesFrame, SeriesName, extend_rows, join_columns,
};

use crate::core::Indice;

/// Outcome of one reconciliation run.
#[derive(Debug)]
pub struct UpdateReport {
    /// The requested columns in request order. A series that failed to
    /// fetch is absent here and reported in `warnings` instead.
    pub frame: SeriesFrame,
    /// Per-series fetch failures from both reconciliation axes.
    pub warnings: Vec<FetchFailure>,
}

impl Indice {
    /// Bring the persisted store up to date for `requested` and return the
    /// requested columns.
    ///
    /// Cold start (no store yet, or a store holding no rows): every
    /// requested series is fetched from `min_date` onward and the result
    /// becomes the store verbatim. Warm start: rows strictly after the
    /// stored history are fetched for the already-stored columns, then any
    /// newly requested columns are backfilled over the store's existing
    /// span and joined on its row index. The enlarged frame replaces the
    /// store in full; columns the store carries beyond `requested` are
    /// persisted but not returned. `min_date` only applies to cold starts.
    ///
    /// # Errors
    /// Returns `IndiceError::InvalidArg` for an empty request, and store
    /// or structural source errors as-is. Individual series failures do
    /// not error; see [`UpdateReport::warnings`].
    #[tracing::instrument(skip_all, fields(source = self.source.name(), requested = requested.len()))]
    pub async fn update(
        &self,
        requested: &[SeriesName],
        min_date: Option<NaiveDate>,
    ) -> Result<UpdateReport, IndiceError> {
        if requested.is_empty() {
            return Err(IndiceError::InvalidArg(
                "no series requested for update".into(),
            ));
        }
        let mut warnings = Vec::new();

        let stored = if self.store.exists() {
            Some(self.store.load()?)
        } else {
            None
        };
        let frame = match stored {
            Some(current) => match current.last_date() {
                Some(last) => {
                    self.reconcile_existing(current, last, requested, &mut warnings)
                        .await?
                }
                // A store file with columns but no rows re-enters the cold path.
                None => self.bootstrap(requested, min_date, &mut warnings).await?,
            },
            None => self.bootstrap(requested, min_date, &mut warnings).await?,
        };

        self.store.save(&frame)?;
        if !warnings.is_empty() {
            tracing::warn!(failed = warnings.len(), "some series failed to fetch");
        }
        Ok(UpdateReport {
            frame: frame.select(requested),
            warnings,
        })
    }

    /// Cold start: one unbounded-above fetch seeds the store verbatim.
    async fn bootstrap(
        &self,
        requested: &[SeriesName],
        min_date: Option<NaiveDate>,
        warnings: &mut Vec<FetchFailure>,
    ) -> Result<SeriesFrame, IndiceError> {
        tracing::info!(count = requested.len(), "seeding store from a full fetch");
        let report = self
            .source
            .fetch(
                requested,
                DateRange {
                    start: min_date,
                    end: None,
                },
            )
            .await?;
        warnings.extend(report.failures);
        Ok(report.frame)
    }

    /// Warm path: row extension for the stored columns, then column
    /// extension over the store's span for newly requested names.
    async fn reconcile_existing(
        &self,
        stored: SeriesFrame,
        last: NaiveDate,
        requested: &[SeriesName],
        warnings: &mut Vec<FetchFailure>,
    ) -> Result<SeriesFrame, IndiceError> {
        let stored_names: Vec<SeriesName> = stored.names().cloned().collect();
        let from = last
            .checked_add_days(Days::new(1))
            .ok_or_else(|| IndiceError::Data(format!("date overflow past stored {last}")))?;
        tracing::info!(%from, "fetching rows past the stored history");
        let increment = self
            .source
            .fetch(&stored_names, DateRange::since(from))
            .await?;
        warnings.extend(increment.failures);
        let frame = extend_rows(&stored, &increment.frame);

        let new_names: Vec<SeriesName> = requested
            .iter()
            .filter(|name| !frame.contains(name))
            .cloned()
            .collect();
        if new_names.is_empty() {
            return Ok(frame);
        }
        let (Some(first), Some(end)) = (frame.first_date(), frame.last_date()) else {
            return Ok(frame);
        };
        tracing::info!(
            count = new_names.len(),
            %first,
            %end,
            "backfilling newly requested columns over the stored span"
        );
        let added = self
            .source
            .fetch(&new_names, DateRange::between(first, end))
            .await?;
        warnings.extend(added.failures);
        Ok(join_columns(&frame, &added.frame))
    }
}
