//! Background task that polls the Soroban RPC and writes decoded CrowdFund
//! events to the database.

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

/// Poll forever, resuming from the persisted cursor.
pub async fn run(state: Arc<IndexerState>) {
    info!("Indexer starting — contract: {}", state.config.contract_id);

    let (last_ledger, mut cursor) = db::load_cursor(&state.pool).await.unwrap_or_else(|e| {
        error!("Could not read cursor, starting fresh: {e}");
        (0, None)
    });
    let mut current_ledger = resume_ledger(last_ledger, state.config.start_ledger);

    info!("Resuming from ledger {current_ledger}");

    loop {
        match poll_once(&state, current_ledger, cursor.as_deref()).await {
            Ok((next_ledger, next_cursor)) => {
                current_ledger = next_ledger;
                cursor = next_cursor;
            }
            Err(e) => error!("Indexer poll error: {e}"),
        }

        tokio::time::sleep(Duration::from_secs(state.config.poll_interval_secs)).await;
    }
}

fn resume_ledger(saved: i64, configured: u32) -> u32 {
    if saved > 0 {
        u32::try_from(saved).unwrap_or(u32::MAX)
    } else {
        configured
    }
}

/// One poll iteration. Returns `(next_start_ledger, next_cursor)`.
async fn poll_once(
    state: &IndexerState,
    start_ledger: u32,
    cursor: Option<&str>,
) -> Result<(u32, Option<String>)> {
    let config = &state.config;
    let page = rpc::fetch_events(
        &state.client,
        &config.rpc_url,
        &config.contract_id,
        start_ledger,
        cursor,
        config.events_per_page,
    )
    .await?;

    if !page.events.is_empty() {
        let decoded = rpc::decode_events(&page.events, &config.contract_id);
        let inserted = db::insert_events(&state.pool, &decoded).await?;
        info!(
            "Polled {} raw events → {} new records stored",
            page.events.len(),
            inserted
        );
    }

    let next_ledger = next_ledger(start_ledger, page.latest_ledger);
    db::save_cursor(&state.pool, i64::from(next_ledger), page.cursor.as_deref()).await?;

    Ok((next_ledger, page.cursor))
}

/// Never move the start ledger backwards.
fn next_ledger(start_ledger: u32, latest: Option<u64>) -> u32 {
    latest
        .map(|l| u32::try_from(l).unwrap_or(u32::MAX).max(start_ledger))
        .unwrap_or(start_ledger)
}
