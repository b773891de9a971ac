//! Canonical event types emitted by the donation ledger contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/donation_ledger/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the ledger contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// The ledger was initialised (`init` topic).
    LedgerInitialized,
    /// A donation was accepted (`donated` topic).
    DonationReceived,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "init" => Self::LedgerInitialized,
            "donated" => Self::DonationReceived,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LedgerInitialized => "ledger_initialized",
            Self::DonationReceived => "donation_received",
            Self::Unknown => "unknown",
        }
    }
}

/// A fully decoded ledger event, ready to be stored in the database.
///
/// `donor` and `amount` are only populated for donation events; the
/// initialisation event is stored as a bare genesis marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEvent {
    pub event_type: String,
    pub donor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_type: String,
    pub donor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}

/// Per-donor rollup computed from indexed donations, in first-seen order —
/// the off-chain mirror of the contract's roster and balance mapping.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct DonorSummary {
    pub donor: String,
    pub total_donated: i64,
    pub donation_count: i64,
    pub first_ledger: i64,
}

/// Ledger-wide aggregates computed from indexed donations — the off-chain
/// mirror of the contract's running totals.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct LedgerStats {
    pub total_donations: i64,
    pub total_donors: i64,
}
