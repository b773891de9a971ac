//! # Types
//!
//! Public data structures returned by the ledger's query entry points.

use soroban_sdk::{contracttype, Address, String};

/// One-read snapshot of the ledger: the immutable configuration written at
/// initialisation plus the live aggregates.
///
/// Reconstructed on demand from the individual storage entries; the ledger
/// never stores this struct as a whole.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerInfo {
    /// Address that initialised the ledger.
    pub owner: Address,
    /// Descriptive label the ledger collects for.
    pub cause: String,
    /// Asset contract donations are denominated in.
    pub token: Address,
    /// Running sum of all accepted donations.
    pub total_donations: i128,
    /// Number of distinct donors ever recorded.
    pub total_donors: u32,
}
