//! Background task that tails the Soroban RPC for ledger events and writes
//! the decoded donation history to the database.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use sqlx::SqlitePool;
use tracing::{error, info};

use crate::config::Config;
use crate::db;
use crate::errors::Result;
use crate::rpc;

pub struct IndexerState {
    pub pool: SqlitePool,
    pub config: Config,
    pub client: Client,
}

/// Spawn the indexer loop as a background [`tokio`] task.
pub async fn run(state: Arc<IndexerState>) {
    info!(
        "Donation indexer starting — contract: {}",
        state.config.contract_id
    );

    // Resume where the last run stopped; a fresh database starts at the
    // configured ledger.
    let mut current_ledger = match db::get_last_ledger(&state.pool).await {
        Ok(last) if last > 0 => last as u32,
        _ => state.config.start_ledger,
    };
    let mut cursor = db::get_cursor_string(&state.pool).await.unwrap_or(None);

    info!("Resuming from ledger {current_ledger}");

    loop {
        match poll_once(&state, current_ledger, cursor.as_deref()).await {
            Ok((next_ledger, next_cursor)) => {
                current_ledger = next_ledger;
                cursor = next_cursor;
            }
            Err(e) => {
                error!("Indexer poll error: {e}");
            }
        }

        tokio::time::sleep(Duration::from_secs(state.config.poll_interval_secs)).await;
    }
}

/// Perform a single poll iteration.
///
/// Returns `(next_start_ledger, next_cursor)`.
async fn poll_once(
    state: &IndexerState,
    start_ledger: u32,
    cursor: Option<&str>,
) -> Result<(u32, Option<String>)> {
    let (raw_events, next_cursor, latest_ledger) = rpc::fetch_events(
        &state.client,
        &state.config.rpc_url,
        &state.config.contract_id,
        start_ledger,
        cursor,
        state.config.events_per_page,
    )
    .await?;

    if !raw_events.is_empty() {
        let decoded = rpc::decode_events(&raw_events, &state.config.contract_id);
        let inserted = db::insert_events(&state.pool, &decoded).await?;
        info!(
            "Polled {} raw events → {} new records stored",
            raw_events.len(),
            inserted
        );
    }

    // A pagination cursor means the current ledger range is not exhausted:
    // keep start_ledger put and let the cursor drive the next page.
    // Otherwise jump forward to the newest ledger the RPC has seen.
    let next_ledger = latest_ledger
        .map(|l| (l as u32).max(start_ledger))
        .unwrap_or(start_ledger);

    // Persist the position so restarts are deterministic.
    db::save_cursor(&state.pool, next_ledger as i64, next_cursor.as_deref()).await?;

    Ok((next_ledger, next_cursor))
}
