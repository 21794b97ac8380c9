extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, Symbol, TryIntoVal, Val,
};

use crate::events::{Pledged, Refunded, Unpledged};
use crate::{Campaign, CrowdFund, CrowdFundClient};

const DAY: u64 = 86_400;

fn setup() -> (Env, CrowdFundClient<'static>, token::Client<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(10_000);
    let token_admin = Address::generate(&env);
    let addr = env.register_stellar_asset_contract_v2(token_admin);
    let token = token::Client::new(&env, &addr.address());
    let contract_id = env.register(CrowdFund, (token.address.clone(),));
    let client = CrowdFundClient::new(&env, &contract_id);
    (env, client, token)
}

fn funded_backer(env: &Env, token: &token::Client) -> Address {
    let backer = Address::generate(env);
    token::StellarAssetClient::new(env, &token.address).mint(&backer, &1_000);
    backer
}

/// Return the data of the most recent event, after checking it came from the
/// escrow with topics `(kind, id)`.
fn last_event(env: &Env, client: &CrowdFundClient, kind: Symbol, id: u64) -> Val {
    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![env, kind.into_val(env), id.into_val(env)];
    assert_eq!(last_event.1, expected_topics);
    last_event.2
}

#[test]
fn test_launched_event() {
    let (env, client, _) = setup();
    let creator = Address::generate(&env);

    let id = client.launch(&creator, &30, &(10_000 + DAY), &(10_000 + 3 * DAY));

    let data: Campaign = last_event(&env, &client, symbol_short!("launched"), id)
        .try_into_val(&env)
        .unwrap();
    assert_eq!(
        data,
        Campaign {
            creator,
            goal: 30,
            start_time: 10_000 + DAY,
            end_time: 10_000 + 3 * DAY,
            pledged: 0,
        }
    );
    assert_eq!(client.get_campaign(&id), Some(data));
}

#[test]
fn test_pledged_and_unpledged_events() {
    let (env, client, token) = setup();
    let creator = Address::generate(&env);
    let backer = funded_backer(&env, &token);
    let id = client.launch(&creator, &30, &(10_000 + DAY), &(10_000 + 3 * DAY));
    env.ledger().set_timestamp(10_000 + DAY);

    client.pledge(&id, &backer, &10);
    client.pledge(&id, &backer, &5);
    let data: Pledged = last_event(&env, &client, symbol_short!("pledged"), id)
        .try_into_val(&env)
        .unwrap();
    assert_eq!(
        data,
        Pledged {
            backer: backer.clone(),
            campaign_id: id,
            amount: 5,
            total: 15,
        }
    );

    client.unpledge(&id, &backer);
    let data: Unpledged = last_event(&env, &client, symbol_short!("unpledged"), id)
        .try_into_val(&env)
        .unwrap();
    assert_eq!(
        data,
        Unpledged {
            backer,
            campaign_id: id,
            amount: 15,
            remaining: 0,
        }
    );
}

#[test]
fn test_claimed_event_carries_snapshot_before_payout() {
    let (env, client, token) = setup();
    let creator = Address::generate(&env);
    let backer = funded_backer(&env, &token);
    let id = client.launch(&creator, &30, &(10_000 + DAY), &(10_000 + 3 * DAY));
    env.ledger().set_timestamp(10_000 + DAY);
    client.pledge(&id, &backer, &30);
    env.ledger().set_timestamp(10_000 + 3 * DAY);

    client.claim(&id, &creator);

    let data: Campaign = last_event(&env, &client, symbol_short!("claimed"), id)
        .try_into_val(&env)
        .unwrap();
    assert_eq!(data.creator, creator);
    assert_eq!(data.pledged, 30);
    assert_eq!(client.get_campaign(&id).unwrap().pledged, 0);
}

#[test]
fn test_refunded_event() {
    let (env, client, token) = setup();
    let creator = Address::generate(&env);
    let backer = funded_backer(&env, &token);
    let id = client.launch(&creator, &30, &(10_000 + DAY), &(10_000 + 3 * DAY));
    env.ledger().set_timestamp(10_000 + DAY);
    client.pledge(&id, &backer, &20);
    env.ledger().set_timestamp(10_000 + 3 * DAY);

    client.refund(&id, &backer);

    let data: Refunded = last_event(&env, &client, symbol_short!("refunded"), id)
        .try_into_val(&env)
        .unwrap();
    assert_eq!(
        data,
        Refunded {
            backer: backer.clone(),
            campaign_id: id,
            amount: 20,
        }
    );
    assert_eq!(token.balance(&backer), 1_000);
}

#[test]
fn test_cancelled_event_carries_snapshot_before_removal() {
    let (env, client, _) = setup();
    let creator = Address::generate(&env);
    let id = client.launch(&creator, &30, &(10_000 + DAY), &(10_000 + 3 * DAY));
    let launched = client.get_campaign(&id).unwrap();

    client.cancel(&id, &creator);

    let data: Campaign = last_event(&env, &client, symbol_short!("cancelled"), id)
        .try_into_val(&env)
        .unwrap();
    assert_eq!(data, launched);
    assert_eq!(client.get_campaign(&id), None);
}
