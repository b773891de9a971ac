//! Database layer — migrations, queries, and cursor management.

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tracing::info;

use crate::errors::Result;
use crate::events::{DonorSummary, EventRecord, LedgerEvent, LedgerStats};

/// Establish a SQLite connection pool and run pending migrations.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool> {
    // Make sure the file is created if it doesn't exist yet.
    let url = if database_url.starts_with("sqlite:") {
        database_url.to_string()
    } else {
        format!("sqlite:{database_url}")
    };

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Database migrations applied successfully");
    Ok(pool)
}

// ─────────────────────────────────────────────────────────
// Cursor helpers
// ─────────────────────────────────────────────────────────

/// Read the last-seen ledger from the cursor row.
/// Returns `0` when no cursor has been persisted yet.
pub async fn get_last_ledger(pool: &SqlitePool) -> Result<i64> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT last_ledger FROM indexer_cursor WHERE id = 1")
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|(v,)| v).unwrap_or(0))
}

/// Persist the last-seen ledger (and optionally a pagination cursor string).
pub async fn save_cursor(
    pool: &SqlitePool,
    last_ledger: i64,
    last_cursor: Option<&str>,
) -> Result<()> {
    sqlx::query("UPDATE indexer_cursor SET last_ledger = ?1, last_cursor = ?2 WHERE id = 1")
        .bind(last_ledger)
        .bind(last_cursor)
        .execute(pool)
        .await?;
    Ok(())
}

/// Read back the raw cursor string (used to resume pagination mid-ledger).
pub async fn get_cursor_string(pool: &SqlitePool) -> Result<Option<String>> {
    let row: Option<(Option<String>,)> =
        sqlx::query_as("SELECT last_cursor FROM indexer_cursor WHERE id = 1")
            .fetch_optional(pool)
            .await?;
    Ok(row.and_then(|(v,)| v))
}

// ─────────────────────────────────────────────────────────
// Event writes
// ─────────────────────────────────────────────────────────

/// Persist a batch of decoded events.  Events that share the same
/// `(ledger, tx_hash, event_type, donor)` tuple are silently ignored
/// to make the indexer idempotent.
pub async fn insert_events(pool: &SqlitePool, events: &[LedgerEvent]) -> Result<usize> {
    let mut count = 0usize;
    for ev in events {
        let rows_affected = sqlx::query(
            r#"
            INSERT OR IGNORE INTO events
                (event_type, donor, amount, ledger, timestamp, contract_id, tx_hash)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&ev.event_type)
        .bind(&ev.donor)
        .bind(&ev.amount)
        .bind(ev.ledger)
        .bind(ev.timestamp)
        .bind(&ev.contract_id)
        .bind(&ev.tx_hash)
        .execute(pool)
        .await?
        .rows_affected();

        count += rows_affected as usize;
    }
    Ok(count)
}

// ─────────────────────────────────────────────────────────
// Event reads
// ─────────────────────────────────────────────────────────

/// Fetch all donation events, ordered by ledger ascending.
pub async fn get_all_donations(pool: &SqlitePool) -> Result<Vec<EventRecord>> {
    let rows = sqlx::query_as::<_, EventRecord>(
        r#"
        SELECT id, event_type, donor, amount, ledger, timestamp,
               contract_id, tx_hash, created_at
        FROM   events
        WHERE  event_type = 'donation_received'
        ORDER  BY ledger ASC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Fetch all donation events from one donor, ordered by ledger ascending.
pub async fn get_donations_for_donor(pool: &SqlitePool, donor: &str) -> Result<Vec<EventRecord>> {
    let rows = sqlx::query_as::<_, EventRecord>(
        r#"
        SELECT id, event_type, donor, amount, ledger, timestamp,
               contract_id, tx_hash, created_at
        FROM   events
        WHERE  event_type = 'donation_received'
        AND    donor = ?1
        ORDER  BY ledger ASC, id ASC
        "#,
    )
    .bind(donor)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

// ─────────────────────────────────────────────────────────
// Aggregates
// ─────────────────────────────────────────────────────────

/// Roll up donations per donor, in first-seen order.
pub async fn get_donor_summaries(pool: &SqlitePool) -> Result<Vec<DonorSummary>> {
    let rows = sqlx::query_as::<_, DonorSummary>(
        r#"
        SELECT donor,
               CAST(SUM(CAST(amount AS INTEGER)) AS INTEGER) AS total_donated,
               COUNT(*)                                      AS donation_count,
               MIN(ledger)                                   AS first_ledger
        FROM   events
        WHERE  event_type = 'donation_received'
        AND    donor IS NOT NULL
        AND    amount IS NOT NULL
        GROUP  BY donor
        ORDER  BY MIN(id) ASC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Ledger-wide totals across every indexed donation.
pub async fn get_stats(pool: &SqlitePool) -> Result<LedgerStats> {
    let stats = sqlx::query_as::<_, LedgerStats>(
        r#"
        SELECT CAST(COALESCE(SUM(CAST(amount AS INTEGER)), 0) AS INTEGER) AS total_donations,
               COUNT(DISTINCT donor)                                      AS total_donors
        FROM   events
        WHERE  event_type = 'donation_received'
        AND    donor IS NOT NULL
        "#,
    )
    .fetch_one(pool)
    .await?;
    Ok(stats)
}
