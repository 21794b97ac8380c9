#![allow(dead_code)]

extern crate std;

use soroban_sdk::Address;

use crate::{Campaign, CrowdFundClient};

/// INV-1: the per-backer entries of a campaign sum to its pledged aggregate.
///
/// `backers` must list every address that ever pledged to `id`.
pub fn assert_ledger_matches_aggregate(client: &CrowdFundClient, id: u64, backers: &[Address]) {
    let pledged = client.get_campaign(&id).map(|c| c.pledged).unwrap_or(0);
    let sum: i128 = backers
        .iter()
        .map(|backer| client.pledge_amount(&id, backer))
        .sum();
    assert_eq!(
        sum, pledged,
        "INV-1 violated: campaign {} entries sum to {} but aggregate is {}",
        id, sum, pledged
    );
}

/// INV-2: the pledged aggregate is never negative.
pub fn assert_pledged_non_negative(id: u64, campaign: &Campaign) {
    assert!(
        campaign.pledged >= 0,
        "INV-2 violated: campaign {} has negative aggregate ({})",
        id,
        campaign.pledged
    );
}

/// INV-3: goal is positive and the schedule is ordered.
pub fn assert_config_valid(id: u64, campaign: &Campaign) {
    assert!(
        campaign.goal > 0,
        "INV-3 violated: campaign {} has non-positive goal ({})",
        id,
        campaign.goal
    );
    assert!(
        campaign.end_time > campaign.start_time,
        "INV-3 violated: campaign {} ends at {} before starting at {}",
        id,
        campaign.end_time,
        campaign.start_time
    );
}

/// INV-4: creator, goal and schedule never change after launch.
pub fn assert_config_immutable(original: &Campaign, current: &Campaign) {
    assert_eq!(original.creator, current.creator, "INV-4 violated: creator changed");
    assert_eq!(original.goal, current.goal, "INV-4 violated: goal changed");
    assert_eq!(
        original.start_time, current.start_time,
        "INV-4 violated: start_time changed"
    );
    assert_eq!(
        original.end_time, current.end_time,
        "INV-4 violated: end_time changed"
    );
}

/// INV-5: the escrow holds at least the sum of all live aggregates.
pub fn assert_escrow_covers_aggregates(client: &CrowdFundClient) {
    let held: i128 = (0..client.next_id())
        .filter_map(|id| client.get_campaign(&id))
        .map(|c| c.pledged)
        .sum();
    let balance = client.escrow_balance();
    assert!(
        balance >= held,
        "INV-5 violated: escrow holds {} but campaigns account for {}",
        balance,
        held
    );
}

/// Run every invariant that needs no history.
pub fn assert_all_campaign_invariants(client: &CrowdFundClient, backers: &[Address]) {
    for id in 0..client.next_id() {
        if let Some(campaign) = client.get_campaign(&id) {
            assert_pledged_non_negative(id, &campaign);
            assert_config_valid(id, &campaign);
        }
        assert_ledger_matches_aggregate(client, id, backers);
    }
    assert_escrow_covers_aggregates(client);
}
