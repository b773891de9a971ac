#![allow(dead_code)]

extern crate std;

use crate::types::LedgerInfo;
use crate::DonationLedgerClient;

/// INV-1: Total donations equal the sum of balances across the roster.
pub fn assert_totals_match_roster(client: &DonationLedgerClient) {
    let donors = client.get_all_donors();
    let mut sum: i128 = 0;
    for donor in donors.iter() {
        sum += client.donor_amount(&donor);
    }
    assert_eq!(
        client.total_donations(),
        sum,
        "INV-1 violated: total_donations {} != summed roster balances {}",
        client.total_donations(),
        sum
    );
}

/// INV-2: Donor count equals the roster length, and every roster member has
/// a positive balance.
pub fn assert_count_matches_roster(client: &DonationLedgerClient) {
    let donors = client.get_all_donors();
    assert_eq!(
        client.total_donors(),
        donors.len(),
        "INV-2 violated: total_donors {} != roster length {}",
        client.total_donors(),
        donors.len()
    );
    for donor in donors.iter() {
        assert!(
            client.donor_amount(&donor) > 0,
            "INV-2 violated: roster member with non-positive balance"
        );
    }
}

/// INV-3: Each donor appears at most once in the roster.
pub fn assert_roster_distinct(client: &DonationLedgerClient) {
    let donors = client.get_all_donors();
    for i in 0..donors.len() {
        for j in (i + 1)..donors.len() {
            assert_ne!(
                donors.get_unchecked(i),
                donors.get_unchecked(j),
                "INV-3 violated: roster positions {} and {} hold the same donor",
                i,
                j
            );
        }
    }
}

/// INV-4: Configuration written at initialisation never changes.
pub fn assert_config_immutable(original: &LedgerInfo, current: &LedgerInfo) {
    assert_eq!(
        original.owner, current.owner,
        "INV-4 violated: owner changed"
    );
    assert_eq!(
        original.cause, current.cause,
        "INV-4 violated: cause changed"
    );
    assert_eq!(
        original.token, current.token,
        "INV-4 violated: token changed"
    );
}

/// INV-5: Aggregates never decrease. There is no withdrawal path, so both the
/// running total and the distinct-donor count are monotone.
pub fn assert_aggregates_monotonic(
    total_before: i128,
    total_after: i128,
    donors_before: u32,
    donors_after: u32,
) {
    assert!(
        total_after >= total_before,
        "INV-5 violated: total_donations decreased from {} to {}",
        total_before,
        total_after
    );
    assert!(
        donors_after >= donors_before,
        "INV-5 violated: total_donors decreased from {} to {}",
        donors_before,
        donors_after
    );
}

/// Run every stateless ledger invariant against the current state.
pub fn assert_all_ledger_invariants(client: &DonationLedgerClient) {
    assert_totals_match_roster(client);
    assert_count_matches_roster(client);
    assert_roster_distinct(client);
}
