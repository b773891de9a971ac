extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token, vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{DonationReceived, LedgerInitialized};
use crate::{DonationLedger, DonationLedgerClient, Error};

fn setup() -> (Env, DonationLedgerClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(DonationLedger, ());
    let client = DonationLedgerClient::new(&env, &contract_id);
    (env, client)
}

fn create_token<'a>(env: &Env, admin: &Address) -> token::Client<'a> {
    let addr = env.register_stellar_asset_contract_v2(admin.clone());
    token::Client::new(env, &addr.address())
}

#[test]
fn test_initialized_event() {
    let (env, client) = setup();
    let owner = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let token = create_token(&env, &token_admin);
    let cause = String::from_str(&env, "Wild Life");

    client.initialize(&owner, &cause, &token.address);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("init"),)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![&env, symbol_short!("init").into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    // Data: LedgerInitialized struct
    let event_data: LedgerInitialized = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        LedgerInitialized {
            owner: owner.clone(),
            cause: cause.clone(),
            token: token.address.clone(),
        }
    );
}

#[test]
fn test_donation_received_event() {
    let (env, client) = setup();
    let owner = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let token = create_token(&env, &token_admin);
    let donor = Address::generate(&env);
    let amount = 500_000i128;

    client.initialize(&owner, &String::from_str(&env, "Wild Life"), &token.address);

    let token_sac = token::StellarAssetClient::new(&env, &token.address);
    token_sac.mint(&donor, &amount);

    client.donate(&donor, &amount);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("donated"), donor)
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("donated").into_val(&env),
        donor.clone().into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: DonationReceived struct
    let event_data: DonationReceived = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        DonationReceived {
            donor: donor.clone(),
            amount,
        }
    );
}

/// A rejected donation reverts as a whole, so it must not leave an event
/// behind. The amount checks run before any storage access, which lets this
/// test observe the rollback on a contract that emitted nothing yet.
#[test]
fn test_rejected_donation_emits_nothing() {
    let (env, client) = setup();
    let donor = Address::generate(&env);

    assert_eq!(client.try_donate(&donor, &0), Err(Ok(Error::ZeroDonation)));

    assert_eq!(env.events().all().len(), 0);
}
