//! # Donation Ledger Contract
//!
//! Root crate of the **Donation Ledger**. It exposes the single Soroban
//! contract [`DonationLedger`], which accepts bounded donations in one
//! configured asset and keeps an auditable record of who gave what:
//!
//! | Phase     | Entry Point(s)                                          |
//! |-----------|---------------------------------------------------------|
//! | Bootstrap | [`DonationLedger::initialize`]                          |
//! | Donating  | [`DonationLedger::donate`]                              |
//! | Queries   | `owner`, `cause`, `token`, `total_donations`, `total_donors`, `donor_amount`, `get_all_donors`, `get_info` |
//!
//! ## Architecture
//!
//! Storage access is fully delegated to [`storage`]; event emission to
//! [`events`]. This file contains **only** the public entry points and the
//! donation validation gate — no storage plumbing lives here directly.
//!
//! Every invocation commits or reverts as a whole, so a rejected donation
//! leaves no trace: no balance change, no roster entry, no event.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, token, Address, Env, String, Vec,
};

mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

pub use types::LedgerInfo;

/// Per-call donation ceiling, exclusive, in stroops (6 whole units of a
/// 7-decimal asset). A donation must be strictly below this to be accepted.
pub const MAX_DONATION: i128 = 60_000_000;

/// Strkey of the all-zero ed25519 public key. Donations claiming to come
/// from this address are rejected outright.
const ZERO_ADDRESS: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized     = 2,
    AddressZero        = 3,
    ZeroDonation       = 4,
    ExceedDonations    = 5,
}

#[contract]
pub struct DonationLedger;

#[contractimpl]
impl DonationLedger {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the ledger.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls panic with `Error::AlreadyInitialized`.
    ///
    /// - `owner` is recorded as the deployer and must sign the transaction.
    /// - `cause` is the immutable descriptive label the ledger collects for.
    /// - `token` is the asset contract donations are denominated in.
    pub fn initialize(env: Env, owner: Address, cause: String, token: Address) {
        owner.require_auth();

        if storage::has_owner(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }

        storage::set_owner(&env, &owner);
        storage::set_cause(&env, &cause);
        storage::set_token(&env, &token);

        events::ledger_initialized(&env, owner, cause, token);
    }

    // ─────────────────────────────────────────────────────────
    // Donating
    // ─────────────────────────────────────────────────────────

    /// Accept a donation of `amount` from `donor`.
    ///
    /// Validation, in order, each failing with its own error:
    /// 1. `donor` must not be the zero address (`Error::AddressZero`);
    /// 2. `amount` must be strictly positive (`Error::ZeroDonation`);
    /// 3. `amount` must be strictly below [`MAX_DONATION`]
    ///    (`Error::ExceedDonations`).
    ///
    /// On success, `amount` moves from `donor` to the contract, the donor's
    /// cumulative balance and the running total grow by `amount`, and a
    /// first-time donor is appended to the roster. Repeat donations never
    /// touch the roster or the distinct-donor count.
    pub fn donate(env: Env, donor: Address, amount: i128) {
        if donor == zero_address(&env) {
            panic_with_error!(&env, Error::AddressZero);
        }
        donor.require_auth();

        if amount <= 0 {
            panic_with_error!(&env, Error::ZeroDonation);
        }
        if amount >= MAX_DONATION {
            panic_with_error!(&env, Error::ExceedDonations);
        }

        // Pull the donation into the contract before touching the books.
        let token = storage::get_token(&env);
        token::Client::new(&env, &token).transfer(
            &donor,
            &env.current_contract_address(),
            &amount,
        );

        // There is no withdrawal path, so a zero prior balance identifies a
        // first-time donor without scanning the roster.
        let prior = storage::get_balance(&env, &donor);
        storage::set_balance(&env, &donor, prior + amount);
        if prior == 0 {
            storage::record_new_donor(&env, &donor);
        }

        storage::set_total_donations(&env, storage::get_total_donations(&env) + amount);

        events::donation_received(&env, donor, amount);
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// The address that initialised the ledger.
    pub fn owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    /// The descriptive label the ledger collects for.
    pub fn cause(env: Env) -> String {
        storage::get_cause(&env)
    }

    /// The asset contract donations are denominated in.
    pub fn token(env: Env) -> Address {
        storage::get_token(&env)
    }

    /// Running sum of all accepted donations.
    pub fn total_donations(env: Env) -> i128 {
        storage::get_total_donations(&env)
    }

    /// Number of distinct donors ever recorded.
    pub fn total_donors(env: Env) -> u32 {
        storage::get_donor_count(&env)
    }

    /// Cumulative amount donated by `donor`; zero for an unknown donor.
    pub fn donor_amount(env: Env, donor: Address) -> i128 {
        storage::get_balance(&env, &donor)
    }

    /// All distinct donors, ordered by first donation.
    pub fn get_all_donors(env: Env) -> Vec<Address> {
        storage::get_donors(&env)
    }

    /// Snapshot of the ledger's configuration and aggregates in one read.
    pub fn get_info(env: Env) -> LedgerInfo {
        LedgerInfo {
            owner: storage::get_owner(&env),
            cause: storage::get_cause(&env),
            token: storage::get_token(&env),
            total_donations: storage::get_total_donations(&env),
            total_donors: storage::get_donor_count(&env),
        }
    }
}

fn zero_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, ZERO_ADDRESS))
}
