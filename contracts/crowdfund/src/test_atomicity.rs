extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env,
};

use crate::invariants::assert_ledger_matches_aggregate;
use crate::mock_token::{MockToken, MockTokenClient};
use crate::{CrowdFund, CrowdFundClient};

const DAY: u64 = 86_400;

struct Fixture {
    env: Env,
    client: CrowdFundClient<'static>,
    token: MockTokenClient<'static>,
    creator: Address,
    backer: Address,
    id: u64,
}

/// Escrow backed by the switchable mock token, with one active campaign
/// (goal 30) and a backer holding 100.
fn fixture() -> Fixture {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1_000);

    let token_id = env.register(MockToken, ());
    let token = MockTokenClient::new(&env, &token_id);
    let contract_id = env.register(CrowdFund, (token_id.clone(),));
    let client = CrowdFundClient::new(&env, &contract_id);

    let creator = Address::generate(&env);
    let backer = Address::generate(&env);
    token.mint(&backer, &100);

    let id = client.launch(&creator, &30, &(1_000 + DAY), &(1_000 + 3 * DAY));
    env.ledger().set_timestamp(1_000 + DAY);

    Fixture {
        env,
        client,
        token,
        creator,
        backer,
        id,
    }
}

fn end_campaign(f: &Fixture) {
    f.env.ledger().set_timestamp(1_000 + 3 * DAY);
}

#[test]
fn test_failed_pledge_transfer_leaves_no_trace() {
    let f = fixture();
    f.token.set_failing(&true);

    assert!(f.client.try_pledge(&f.id, &f.backer, &10).is_err());

    assert_eq!(f.client.get_campaign(&f.id).unwrap().pledged, 0);
    assert_eq!(f.client.pledge_amount(&f.id, &f.backer), 0);
    assert_eq!(f.token.balance(&f.backer), 100);
}

#[test]
fn test_failed_unpledge_transfer_rolls_back_ledger() {
    let f = fixture();
    f.client.pledge(&f.id, &f.backer, &10);
    f.token.set_failing(&true);

    assert!(f.client.try_unpledge(&f.id, &f.backer).is_err());

    assert_eq!(f.client.get_campaign(&f.id).unwrap().pledged, 10);
    assert_eq!(f.client.pledge_amount(&f.id, &f.backer), 10);
    assert_eq!(f.token.balance(&f.client.address), 10);
    assert_ledger_matches_aggregate(&f.client, f.id, &[f.backer.clone()]);

    f.token.set_failing(&false);
    f.client.unpledge(&f.id, &f.backer);
    assert_eq!(f.token.balance(&f.backer), 100);
}

#[test]
fn test_failed_claim_transfer_keeps_aggregate() {
    let f = fixture();
    f.client.pledge(&f.id, &f.backer, &30);
    end_campaign(&f);
    f.token.set_failing(&true);

    assert!(f.client.try_claim(&f.id, &f.creator).is_err());
    assert_eq!(f.client.get_campaign(&f.id).unwrap().pledged, 30);
    assert_eq!(f.client.pledge_amount(&f.id, &f.backer), 30);

    // Still claimable once custody recovers.
    f.token.set_failing(&false);
    f.client.claim(&f.id, &f.creator);
    assert_eq!(f.token.balance(&f.creator), 30);
}

#[test]
fn test_failed_refund_transfer_keeps_entry() {
    let f = fixture();
    f.client.pledge(&f.id, &f.backer, &12);
    end_campaign(&f);
    f.token.set_failing(&true);

    assert!(f.client.try_refund(&f.id, &f.backer).is_err());
    assert_eq!(f.client.pledge_amount(&f.id, &f.backer), 12);
    assert_eq!(f.client.get_campaign(&f.id).unwrap().pledged, 12);

    f.token.set_failing(&false);
    f.client.refund(&f.id, &f.backer);
    assert_eq!(f.token.balance(&f.backer), 100);
    assert_eq!(f.client.escrow_balance(), 0);
}

#[test]
fn test_zero_value_withdrawals_skip_custody() {
    let f = fixture();
    f.token.set_failing(&true);

    // Nothing pledged: the token is never called, so a broken token is irrelevant.
    f.client.unpledge(&f.id, &f.backer);
    end_campaign(&f);
    f.client.refund(&f.id, &f.backer);
    assert_eq!(f.client.get_campaign(&f.id).unwrap().pledged, 0);
}
