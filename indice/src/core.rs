use std::sync::Arc;

use indice_core::{IndiceError, SeriesSource, SeriesStore};

/// Orchestrator binding one dataset's source to its persisted store.
///
/// A deployment typically holds two instances over disjoint namespaces:
/// one for explanatory indicators, one for target price-index categories.
pub struct Indice {
    pub(crate) source: Arc<dyn SeriesSource>,
    pub(crate) store: Arc<dyn SeriesStore>,
}

/// Builder for constructing an [`Indice`] orchestrator.
pub struct IndiceBuilder {
    source: Option<Arc<dyn SeriesSource>>,
    store: Option<Arc<dyn SeriesStore>>,
}

impl Default for IndiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IndiceBuilder {
    /// Create a new builder with no source or store bound.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            source: None,
            store: None,
        }
    }

    /// Bind the external source observations are fetched from.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn SeriesSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Bind the store the reconciled history is persisted to.
    ///
    /// The store is owned exclusively by this orchestrator between runs;
    /// concurrent writers race and must be serialized by the caller.
    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn SeriesStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Finalize the orchestrator.
    ///
    /// # Errors
    /// Returns `IndiceError::InvalidArg` if no source or no store was bound.
    pub fn build(self) -> Result<Indice, IndiceError> {
        let source = self
            .source
            .ok_or_else(|| IndiceError::InvalidArg("no series source configured".into()))?;
        let store = self
            .store
            .ok_or_else(|| IndiceError::InvalidArg("no series store configured".into()))?;
        Ok(Indice { source, store })
    }
}

impl Indice {
    /// Begin building an orchestrator.
    #[must_use]
    pub const fn builder() -> IndiceBuilder {
        IndiceBuilder::new()
    }
}
