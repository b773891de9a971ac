//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the ledger:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key              | Type           | Description                          |
//! |------------------|----------------|--------------------------------------|
//! | `TotalDonations` | `i128`         | Running sum of accepted donations    |
//! | `Donors`         | `Vec<Address>` | Roster of distinct donors, in order  |
//! | `DonorCount`     | `u32`          | Distinct donors, equals roster length|
//! | `Cause`          | `String`       | Immutable descriptive label          |
//! | `Owner`          | `Address`      | Address that initialised the ledger  |
//! | `Token`          | `Address`      | Asset donations are denominated in   |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                | Type   | Description                          |
//! |--------------------|--------|--------------------------------------|
//! | `Balance(Address)` | `i128` | Cumulative amount given by one donor |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining. Balances live in the persistent tier because they grow without
//! bound with the donor population; everything the whole contract touches on
//! every call stays in instance storage.

use soroban_sdk::{contracttype, panic_with_error, Address, Env, String, Vec};

use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
///
/// `Balance` is the only persistent-tier key; the rest are instance-tier and
/// are extended together with the contract itself.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Cumulative amount donated by one donor (Persistent).
    Balance(Address),
    /// Running sum of all accepted donations (Instance).
    TotalDonations,
    /// Distinct donors ordered by first donation (Instance).
    Donors,
    /// Count of distinct donors (Instance).
    DonorCount,
    /// Descriptive label set at initialisation (Instance).
    Cause,
    /// Address that initialised the ledger (Instance).
    Owner,
    /// Asset contract donations are denominated in (Instance).
    Token,
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// True once `initialize` has recorded an owner.
pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

/// Panics with `NotInitialized` before `initialize` has run.
pub fn get_owner(env: &Env) -> Address {
    bump_instance(env);
    match env.storage().instance().get(&DataKey::Owner) {
        Some(owner) => owner,
        None => panic_with_error!(env, Error::NotInitialized),
    }
}

pub fn set_cause(env: &Env, cause: &String) {
    env.storage().instance().set(&DataKey::Cause, cause);
    bump_instance(env);
}

/// Panics with `NotInitialized` before `initialize` has run.
pub fn get_cause(env: &Env) -> String {
    bump_instance(env);
    match env.storage().instance().get(&DataKey::Cause) {
        Some(cause) => cause,
        None => panic_with_error!(env, Error::NotInitialized),
    }
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    bump_instance(env);
}

/// Panics with `NotInitialized` before `initialize` has run.
pub fn get_token(env: &Env) -> Address {
    bump_instance(env);
    match env.storage().instance().get(&DataKey::Token) {
        Some(token) => token,
        None => panic_with_error!(env, Error::NotInitialized),
    }
}

pub fn get_total_donations(env: &Env) -> i128 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::TotalDonations)
        .unwrap_or(0)
}

pub fn set_total_donations(env: &Env, total: i128) {
    env.storage()
        .instance()
        .set(&DataKey::TotalDonations, &total);
    bump_instance(env);
}

pub fn get_donor_count(env: &Env) -> u32 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::DonorCount)
        .unwrap_or(0)
}

pub fn get_donors(env: &Env) -> Vec<Address> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Donors)
        .unwrap_or_else(|| Vec::new(env))
}

/// Append a first-time donor to the roster and advance the distinct-donor
/// count, keeping the two in lock-step.
pub fn record_new_donor(env: &Env, donor: &Address) {
    let mut donors = get_donors(env);
    donors.push_back(donor.clone());
    env.storage().instance().set(&DataKey::Donors, &donors);

    let count = get_donor_count(env);
    env.storage()
        .instance()
        .set(&DataKey::DonorCount, &(count + 1));
    bump_instance(env);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Cumulative balance for `donor`; zero when the donor has never given.
pub fn get_balance(env: &Env, donor: &Address) -> i128 {
    let key = DataKey::Balance(donor.clone());
    match env.storage().persistent().get(&key) {
        Some(balance) => {
            bump_persistent(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn set_balance(env: &Env, donor: &Address, balance: i128) {
    let key = DataKey::Balance(donor.clone());
    env.storage().persistent().set(&key, &balance);
    bump_persistent(env, &key);
}
