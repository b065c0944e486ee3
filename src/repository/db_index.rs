//! Database implementation of ItemIndex

use anyhow::Result;

use crate::model::CanonicalItem;

use super::database::Database;
use super::filter::ItemFilter;
use super::index::ItemIndex;
use super::progress::ProgressReporter;

impl ItemIndex for Database {
    async fn store_items(&self, items: &[CanonicalItem], progress: &dyn ProgressReporter) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }

        let pb = progress.start("Indexing", items.len() as u64);
        self.save_items_with_callback(items, |n| pb.inc(n as u64)).await?;
        pb.finish();
        Ok(())
    }

    async fn get_item(&self, id: &str) -> Result<Option<CanonicalItem>> {
        self.find_item(id).await
    }

    async fn query(&self, filter: &ItemFilter, limit: Option<usize>) -> Result<Vec<CanonicalItem>> {
        self.query_items(filter, limit).await
    }

    async fn delete_matching(&self, filter: &ItemFilter) -> Result<u64> {
        self.delete_items(filter).await
    }

    async fn last_synced(&self, tab_index: u32) -> Result<Option<u64>> {
        self.tab_synced_at(tab_index).await
    }

    async fn replace_tab(
        &self,
        tab_index: u32,
        items: &[CanonicalItem],
        progress: &dyn ProgressReporter,
    ) -> Result<()> {
        let pb = progress.start("Indexing", items.len() as u64);
        self.replace_tab_with_callback(tab_index, items, |n| pb.inc(n as u64)).await?;
        pb.finish();
        Ok(())
    }
}
