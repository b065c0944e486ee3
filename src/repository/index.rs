//! Item index trait
//!
//! Decouples ingestion and recipe scanning from the storage backend.

use anyhow::Result;

use crate::model::CanonicalItem;

use super::filter::{Field, ItemFilter};
use super::progress::ProgressReporter;

/// Queryable store of canonical items keyed by item id
#[allow(async_fn_in_trait)]
pub trait ItemIndex {
    /// Upsert items by id
    async fn store_items(&self, items: &[CanonicalItem], progress: &dyn ProgressReporter) -> Result<()>;

    async fn get_item(&self, id: &str) -> Result<Option<CanonicalItem>>;

    /// Items matching `filter` in ascending (x, y) order
    async fn query(&self, filter: &ItemFilter, limit: Option<usize>) -> Result<Vec<CanonicalItem>>;

    /// Remove every item matching `filter`, returns the number removed
    async fn delete_matching(&self, filter: &ItemFilter) -> Result<u64>;

    /// Unix time in seconds of the last `replace_tab` for this tab
    async fn last_synced(&self, tab_index: u32) -> Result<Option<u64>>;

    /// Replace the contents of one tab.
    ///
    /// Default implementation is NOT atomic: a reader may observe the tab
    /// empty between the delete and the store. Database-backed indexes should
    /// override this to do it in one transaction.
    async fn replace_tab(
        &self,
        tab_index: u32,
        items: &[CanonicalItem],
        progress: &dyn ProgressReporter,
    ) -> Result<()> {
        self.delete_matching(&ItemFilter::eq(Field::TabIndex, tab_index)).await?;
        self.store_items(items, progress).await
    }
}
