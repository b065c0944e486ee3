// Ingestion integration tests
// Feeds canned stash payloads through the ingestor into an in-memory index

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::anyhow;
use stashvision::client::ApiError;
use stashvision::ingest::{run_server, IngestError, IngestReport, Ingestor, StashSource};
use stashvision::model::{CanonicalItem, ItemClass};
use stashvision::normalize::RawItem;
use stashvision::repository::{Field, ItemFilter, ItemIndex, NoopProgress, ProgressReporter};
use tokio::sync::Notify;

/// Returns queued responses in order, then repeats the last one
struct FakeSource {
    responses: Mutex<Vec<Result<Vec<RawItem>, ApiError>>>,
    calls: AtomicUsize,
    done: Arc<Notify>,
    notify_after: usize,
}

impl FakeSource {
    fn new(responses: Vec<Result<Vec<RawItem>, ApiError>>) -> Self {
        let notify_after = responses.len();
        Self {
            responses: Mutex::new(responses),
            calls: AtomicUsize::new(0),
            done: Arc::new(Notify::new()),
            notify_after,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl StashSource for FakeSource {
    async fn fetch_tab(&self, _tab_index: u32) -> Result<Vec<RawItem>, ApiError> {
        let calls = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if calls >= self.notify_after {
            self.done.notify_one();
        }
        let mut responses = self.responses.lock().unwrap();
        if responses.len() > 1 {
            responses.remove(0)
        } else {
            responses[0].clone()
        }
    }
}

/// Index whose writes always fail
struct BrokenIndex;

impl ItemIndex for BrokenIndex {
    async fn store_items(&self, _items: &[CanonicalItem], _progress: &dyn ProgressReporter) -> anyhow::Result<()> {
        Err(anyhow!("disk full"))
    }

    async fn get_item(&self, _id: &str) -> anyhow::Result<Option<CanonicalItem>> {
        Ok(None)
    }

    async fn query(&self, _filter: &ItemFilter, _limit: Option<usize>) -> anyhow::Result<Vec<CanonicalItem>> {
        Ok(Vec::new())
    }

    async fn delete_matching(&self, _filter: &ItemFilter) -> anyhow::Result<u64> {
        Err(anyhow!("disk full"))
    }

    async fn last_synced(&self, _tab_index: u32) -> anyhow::Result<Option<u64>> {
        Ok(None)
    }
}

fn stash_tab() -> Vec<RawItem> {
    vec![
        common::raw_item("helm", "Superior Hubris Circlet", 2, 70, 0),
        common::raw_item("ring", "Two-Stone Ring", 2, 68, 2),
        common::raw_item("map", "Strand Map", 0, 70, 4),
        common::raw_item("bad-frame", "Leather Belt", 42, 70, 5),
    ]
}

#[tokio::test]
async fn test_ingest_tab_normalizes_and_indexes() {
    let db = common::create_test_db().await;
    let source = FakeSource::new(vec![Ok(stash_tab())]);

    assert_eq!(db.last_synced(2).await.unwrap(), None);
    let report = Ingestor::new(&source, &db, 2).ingest_tab(&NoopProgress).await.unwrap();
    assert_eq!(report, IngestReport { fetched: 4, indexed: 2, skipped: 2 });
    assert!(db.last_synced(2).await.unwrap().is_some());

    let helm = db.get_item("helm").await.unwrap().unwrap();
    assert_eq!(helm.class, ItemClass::Helmet);
    assert_eq!(helm.tab_index, 2);
    assert_eq!(helm.type_line, "Superior Hubris Circlet");
}

#[tokio::test]
async fn test_reingest_replaces_the_tab() {
    let db = common::create_test_db().await;
    let other_tab = common::in_tab(common::armour_set("other", 70, 0), 5);
    db.store_items(&other_tab, &NoopProgress).await.unwrap();

    let source = FakeSource::new(vec![
        Ok(stash_tab()),
        Ok(vec![common::raw_item("boots", "Bronzescale Boots", 2, 75, 1)]),
    ]);
    let ingestor = Ingestor::new(&source, &db, 2);
    ingestor.ingest_tab(&NoopProgress).await.unwrap();
    ingestor.ingest_tab(&NoopProgress).await.unwrap();

    let tab = db.query(&ItemFilter::eq(Field::TabIndex, 2u32), None).await.unwrap();
    let ids: Vec<_> = tab.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["boots"]);
    assert_eq!(db.query(&ItemFilter::eq(Field::TabIndex, 5u32), None).await.unwrap().len(), 8);
}

#[tokio::test]
async fn test_api_error_leaves_index_untouched() {
    let db = common::create_test_db().await;
    let source = FakeSource::new(vec![Ok(stash_tab()), Err(ApiError::SessionInvalid("expired".into()))]);
    let ingestor = Ingestor::new(&source, &db, 0);

    ingestor.ingest_tab(&NoopProgress).await.unwrap();
    let err = ingestor.ingest_tab(&NoopProgress).await.unwrap_err();
    assert!(matches!(err, IngestError::Api(ApiError::SessionInvalid(_))));
    assert_eq!(db.count_items().await.unwrap(), 2);
}

#[tokio::test]
async fn test_server_survives_api_errors() {
    let db = common::create_test_db().await;
    let source = FakeSource::new(vec![
        Err(ApiError::RateLimited),
        Err(ApiError::Transient("connection reset".into())),
        Ok(stash_tab()),
    ]);
    let done = source.done.clone();
    let ingestor = Ingestor::new(&source, &db, 0);

    run_server(&ingestor, Duration::from_millis(5), &NoopProgress, async move { done.notified().await })
        .await
        .unwrap();

    assert!(source.calls() >= 3);
    assert_eq!(db.count_items().await.unwrap(), 2);
}

#[tokio::test]
async fn test_server_stops_on_index_error() {
    let source = FakeSource::new(vec![Ok(stash_tab())]);
    let ingestor = Ingestor::new(&source, &BrokenIndex, 0);

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        run_server(&ingestor, Duration::from_millis(5), &NoopProgress, std::future::pending()),
    )
    .await
    .expect("server loop should end on its own");
    assert!(result.is_err());
    assert_eq!(source.calls(), 1);
}
