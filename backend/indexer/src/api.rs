//! Axum REST API handlers.
//!
//! The read endpoints mirror the contract's query entry points, rebuilt from
//! the indexed event history: `/donors` is the roster with cumulative
//! balances, `/stats` the running aggregates.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db;
use crate::events::{DonorSummary, EventRecord, LedgerStats};

#[derive(Clone)]
pub struct ApiState {
    pub pool: SqlitePool,
}

// ─────────────────────────────────────────────────────────
// Response shapes
// ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct DonationsResponse {
    pub count: usize,
    pub donations: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct DonorDonationsResponse {
    pub donor: String,
    pub count: usize,
    pub donations: Vec<EventRecord>,
}

#[derive(Serialize)]
pub struct DonorsResponse {
    pub count: usize,
    pub donors: Vec<DonorSummary>,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub total_donations: i64,
    pub total_donors: i64,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ─────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `GET /donations`
///
/// Returns every indexed donation, oldest first.
pub async fn get_all_donations(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    match db::get_all_donations(&state.pool).await {
        Ok(donations) => {
            let count = donations.len();
            (
                StatusCode::OK,
                Json(serde_json::json!(DonationsResponse { count, donations })),
            )
                .into_response()
        }
        Err(e) => internal_error(e).into_response(),
    }
}

/// `GET /donors/:address/donations`
///
/// Returns all indexed donations from the given donor address.
pub async fn get_donor_donations(
    State(state): State<Arc<ApiState>>,
    Path(donor): Path<String>,
) -> impl IntoResponse {
    match db::get_donations_for_donor(&state.pool, &donor).await {
        Ok(donations) => {
            let count = donations.len();
            (
                StatusCode::OK,
                Json(serde_json::json!(DonorDonationsResponse {
                    donor,
                    count,
                    donations,
                })),
            )
                .into_response()
        }
        Err(e) => internal_error(e).into_response(),
    }
}

/// `GET /donors`
///
/// Returns the distinct donors in first-seen order, each with its cumulative
/// donated amount.
pub async fn get_donors(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    match db::get_donor_summaries(&state.pool).await {
        Ok(donors) => {
            let count = donors.len();
            (
                StatusCode::OK,
                Json(serde_json::json!(DonorsResponse { count, donors })),
            )
                .into_response()
        }
        Err(e) => internal_error(e).into_response(),
    }
}

/// `GET /stats`
///
/// Returns the ledger-wide aggregates: total donated and distinct donors.
pub async fn get_stats(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    match db::get_stats(&state.pool).await {
        Ok(LedgerStats {
            total_donations,
            total_donors,
        }) => (
            StatusCode::OK,
            Json(serde_json::json!(StatsResponse {
                total_donations,
                total_donors,
            })),
        )
            .into_response(),
        Err(e) => internal_error(e).into_response(),
    }
}

fn internal_error(e: crate::errors::IndexerError) -> impl IntoResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!(ErrorResponse {
            error: e.to_string()
        })),
    )
}
