//! Stash ingestion
//!
//! Fetches a tab from a [`StashSource`], normalizes it and swaps it into the
//! index. [`run_server`] repeats that on a fixed interval.

use std::future::Future;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use crate::client::{ApiError, PoeClient};
use crate::normalize::{normalize_batch, RawItem};
use crate::repository::{ItemIndex, ProgressReporter};

/// Where raw stash items come from
#[allow(async_fn_in_trait)]
pub trait StashSource {
    async fn fetch_tab(&self, tab_index: u32) -> Result<Vec<RawItem>, ApiError>;
}

impl StashSource for PoeClient {
    async fn fetch_tab(&self, tab_index: u32) -> Result<Vec<RawItem>, ApiError> {
        Ok(self.get_stash_items(tab_index).await?.items)
    }
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Index(#[from] anyhow::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Raw items returned by the source
    pub fetched: usize,
    /// Items now in the index for the tab
    pub indexed: usize,
    /// Items that failed normalization
    pub skipped: usize,
}

pub struct Ingestor<'a, S: StashSource, I: ItemIndex> {
    source: &'a S,
    index: &'a I,
    tab_index: u32,
}

impl<'a, S: StashSource, I: ItemIndex> Ingestor<'a, S, I> {
    pub fn new(source: &'a S, index: &'a I, tab_index: u32) -> Self {
        Self { source, index, tab_index }
    }

    /// Fetch the tab and replace its contents in the index
    pub async fn ingest_tab(&self, progress: &dyn ProgressReporter) -> Result<IngestReport, IngestError> {
        let start = Instant::now();
        let raw = self.source.fetch_tab(self.tab_index).await?;
        let (items, skipped) = normalize_batch(&raw, self.tab_index);

        if let Some(previous) = self.index.last_synced(self.tab_index).await? {
            debug!(tab = self.tab_index, previous, "tab synced before");
        }
        self.index.replace_tab(self.tab_index, &items, progress).await?;

        let report = IngestReport { fetched: raw.len(), indexed: items.len(), skipped };
        info!(
            tab = self.tab_index,
            fetched = report.fetched,
            indexed = report.indexed,
            skipped = report.skipped,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "ingested stash tab"
        );
        Ok(report)
    }
}

/// Ingest the tab every `interval` until `shutdown` resolves.
///
/// API failures are logged and retried on the next tick. An index failure
/// ends the loop with an error.
pub async fn run_server<S, I>(
    ingestor: &Ingestor<'_, S, I>,
    interval: Duration,
    progress: &dyn ProgressReporter,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<()>
where
    S: StashSource,
    I: ItemIndex,
{
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(shutdown);

    info!(tab = ingestor.tab_index, interval_secs = interval.as_secs_f64(), "stash server started");
    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("stash server stopping");
                return Ok(());
            }
            _ = ticker.tick() => {}
        }

        match ingestor.ingest_tab(progress).await {
            Ok(_) => {}
            Err(IngestError::Api(err)) if err.is_retryable() => {
                warn!(error = %err, "fetch failed, retrying next tick");
            }
            Err(IngestError::Api(err)) => {
                error!(error = %err, "fetch failed");
            }
            Err(IngestError::Index(err)) => {
                error!(error = %err, "failed to update index");
                return Err(err.context("Failed to index stash items"));
            }
        }
    }
}
