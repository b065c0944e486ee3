use anyhow::{Context, Result};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, QueryBuilder, Row, Sqlite, Transaction};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

use crate::model::CanonicalItem;

use super::filter::{Field, ItemFilter};
use super::SCHEMA_VERSION;

const BATCH_SIZE: usize = 500;
const SCHEMA_VERSION_KEY: &str = "schema_version";

/// SQLite-backed item index
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open (or create) the index at `db_path`; `:memory:` for a throwaway index
    pub async fn new(db_path: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}?mode=rwc", db_path))?
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
            .pragma("temp_store", "MEMORY");

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .context("Failed to connect to item index")?;

        Ok(Self { pool })
    }

    /// Initialize database schema, returns true if schema was rebuilt
    pub async fn init_schema(&self) -> Result<bool> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS metadata (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )"
        ).execute(&self.pool).await?;

        let stored_version = self.get_metadata(SCHEMA_VERSION_KEY).await?;

        let needs_rebuild = stored_version.as_deref() != Some(SCHEMA_VERSION);

        if needs_rebuild {
            if let Some(old) = &stored_version {
                info!(old = %old, new = SCHEMA_VERSION, "schema version changed, rebuilding index");
            }
            sqlx::query("DROP TABLE IF EXISTS items").execute(&self.pool).await?;
            sqlx::query("DELETE FROM metadata").execute(&self.pool).await?;
        }

        // One column per filterable field, the full record in `payload`
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS items (
                id TEXT PRIMARY KEY,
                tab_index INTEGER NOT NULL,
                class TEXT NOT NULL,
                rarity TEXT NOT NULL,
                identified INTEGER NOT NULL,
                corrupted INTEGER NOT NULL,
                verified INTEGER NOT NULL,
                item_level INTEGER NOT NULL,
                sockets INTEGER NOT NULL,
                links INTEGER NOT NULL,
                name TEXT NOT NULL,
                type_line TEXT NOT NULL,
                x INTEGER NOT NULL,
                y INTEGER NOT NULL,
                payload BLOB NOT NULL
            )"
        ).execute(&self.pool).await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_items_tab ON items (tab_index)")
            .execute(&self.pool)
            .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_items_recipe ON items (rarity, identified, item_level)")
            .execute(&self.pool)
            .await?;

        if needs_rebuild {
            self.set_metadata(SCHEMA_VERSION_KEY, SCHEMA_VERSION).await?;
        }

        Ok(needs_rebuild)
    }

    /// Get metadata value by key
    pub async fn get_metadata(&self, key: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT value FROM metadata WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|row| row.get("value")))
    }

    /// Set metadata value
    pub async fn set_metadata(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query("INSERT OR REPLACE INTO metadata (key, value) VALUES (?, ?)")
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Upsert items by id, reporting progress per batch
    pub async fn save_items_with_callback<F>(&self, items: &[CanonicalItem], mut on_progress: F) -> Result<()>
    where
        F: FnMut(usize),
    {
        let mut tx = self.pool.begin().await?;
        Self::save_items_in_tx(&mut tx, items, &mut on_progress).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Replace every item of one tab in a single transaction.
    /// Returns the number of rows removed.
    pub async fn replace_tab_with_callback<F>(
        &self,
        tab_index: u32,
        items: &[CanonicalItem],
        mut on_progress: F,
    ) -> Result<u64>
    where
        F: FnMut(usize),
    {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM items WHERE tab_index = ?")
            .bind(i64::from(tab_index))
            .execute(&mut *tx)
            .await?
            .rows_affected();
        Self::save_items_in_tx(&mut tx, items, &mut on_progress).await?;

        let synced_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        sqlx::query("INSERT OR REPLACE INTO metadata (key, value) VALUES (?, ?)")
            .bind(tab_synced_key(tab_index))
            .bind(synced_at.to_string())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        debug!(tab = tab_index, removed, stored = items.len(), "replaced tab");
        Ok(removed)
    }

    /// Unix time in seconds of the last tab replace, if the tab was ever synced
    pub async fn tab_synced_at(&self, tab_index: u32) -> Result<Option<u64>> {
        self.get_metadata(&tab_synced_key(tab_index))
            .await?
            .map(|value| value.parse::<u64>().with_context(|| format!("Corrupt sync time {value:?} for tab {tab_index}")))
            .transpose()
    }

    pub async fn find_item(&self, id: &str) -> Result<Option<CanonicalItem>> {
        let row = sqlx::query("SELECT payload FROM items WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|row| decode_payload(row.get("payload"))).transpose()
    }

    /// Items matching `filter`, ordered by grid position (x, then y)
    pub async fn query_items(&self, filter: &ItemFilter, limit: Option<usize>) -> Result<Vec<CanonicalItem>> {
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT payload FROM items WHERE ");
        filter.push_sql(&mut qb);
        qb.push(" ORDER BY ")
            .push(Field::X.column())
            .push(", ")
            .push(Field::Y.column())
            .push(", id");
        if let Some(limit) = limit {
            qb.push(" LIMIT ").push_bind(limit as i64);
        }

        let rows = qb.build().fetch_all(&self.pool).await?;
        rows.into_iter()
            .map(|row| decode_payload(row.get("payload")))
            .collect()
    }

    /// Delete items matching `filter`, returns the number removed
    pub async fn delete_items(&self, filter: &ItemFilter) -> Result<u64> {
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("DELETE FROM items WHERE ");
        filter.push_sql(&mut qb);
        let result = qb.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    pub async fn count_items(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }

    async fn save_items_in_tx<F>(
        tx: &mut Transaction<'_, Sqlite>,
        items: &[CanonicalItem],
        on_progress: &mut F,
    ) -> Result<()>
    where
        F: FnMut(usize),
    {
        for chunk in items.chunks(BATCH_SIZE) {
            let payloads = chunk
                .iter()
                .map(|item| serde_json::to_vec(item).with_context(|| format!("Failed to encode item {}", item.id)))
                .collect::<Result<Vec<_>>>()?;

            let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(
                "INSERT INTO items (id, tab_index, class, rarity, identified, corrupted, verified, \
                 item_level, sockets, links, name, type_line, x, y, payload) "
            );
            qb.push_values(chunk.iter().zip(payloads), |mut row, (item, payload)| {
                row.push_bind(item.id.as_str())
                    .push_bind(i64::from(item.tab_index))
                    .push_bind(item.class.name())
                    .push_bind(item.rarity.name())
                    .push_bind(item.identified)
                    .push_bind(item.corrupted)
                    .push_bind(item.verified)
                    .push_bind(i64::from(item.item_level))
                    .push_bind(i64::from(item.sockets))
                    .push_bind(i64::from(item.links))
                    .push_bind(item.name.as_str())
                    .push_bind(item.type_line.as_str())
                    .push_bind(i64::from(item.x))
                    .push_bind(i64::from(item.y))
                    .push_bind(payload);
            });
            qb.push(
                " ON CONFLICT(id) DO UPDATE SET \
                    tab_index = excluded.tab_index, \
                    class = excluded.class, \
                    rarity = excluded.rarity, \
                    identified = excluded.identified, \
                    corrupted = excluded.corrupted, \
                    verified = excluded.verified, \
                    item_level = excluded.item_level, \
                    sockets = excluded.sockets, \
                    links = excluded.links, \
                    name = excluded.name, \
                    type_line = excluded.type_line, \
                    x = excluded.x, \
                    y = excluded.y, \
                    payload = excluded.payload"
            );
            qb.build().execute(&mut **tx).await?;

            on_progress(chunk.len());
        }

        Ok(())
    }
}

fn tab_synced_key(tab_index: u32) -> String {
    format!("tab_synced:{tab_index}")
}

fn decode_payload(payload: Vec<u8>) -> Result<CanonicalItem> {
    serde_json::from_slice(&payload).context("Corrupt item payload in index")
}
