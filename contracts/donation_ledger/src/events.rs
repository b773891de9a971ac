//! # Events
//!
//! Event payloads published by the ledger, plus the publish helpers the entry
//! points call. Topics are short symbols so off-chain consumers can filter
//! without decoding payloads:
//!
//! | Topic(s)             | Payload               | When                        |
//! |----------------------|-----------------------|-----------------------------|
//! | `("init",)`          | [`LedgerInitialized`] | Once, at `initialize`       |
//! | `("donated", donor)` | [`DonationReceived`]  | Once per accepted donation  |

use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

/// Payload of the one-time initialisation event.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerInitialized {
    pub owner: Address,
    pub cause: String,
    pub token: Address,
}

/// Payload emitted for every accepted donation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationReceived {
    pub donor: Address,
    pub amount: i128,
}

pub fn ledger_initialized(env: &Env, owner: Address, cause: String, token: Address) {
    env.events().publish(
        (symbol_short!("init"),),
        LedgerInitialized { owner, cause, token },
    );
}

pub fn donation_received(env: &Env, donor: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("donated"), donor.clone()),
        DonationReceived { donor, amount },
    );
}
