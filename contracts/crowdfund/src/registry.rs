//! Campaign registry: identifier assignment, campaign records and the
//! pledged aggregate.
//!
//! The aggregate helpers never validate against user input. Callers in
//! [`crate::lifecycle`] check balances first, so an underflow or overflow
//! here is a broken invariant and aborts the invocation.

use soroban_sdk::{Address, Env};

use crate::storage::{
    get_and_increment_id, load_campaign_config, load_pledged, remove_campaign,
    save_campaign_config, save_pledged,
};
use crate::types::{Campaign, CampaignConfig};
use crate::Error;

/// Validate the launch parameters and store a new campaign.
///
/// Returns the assigned id. Ids form a dense sequence starting at 0 and are
/// never handed out twice, even after `clear`.
pub fn create(
    env: &Env,
    creator: &Address,
    goal: i128,
    start_time: u64,
    end_time: u64,
    now: u64,
) -> Result<u64, Error> {
    if goal <= 0 {
        return Err(Error::InvalidGoal);
    }
    if start_time <= now || end_time <= start_time {
        return Err(Error::InvalidTimes);
    }

    let id = get_and_increment_id(env);
    let config = CampaignConfig {
        creator: creator.clone(),
        goal,
        start_time,
        end_time,
    };
    save_campaign_config(env, id, &config);
    Ok(id)
}

/// Load the campaign snapshot, or `None` for ids never launched or cancelled.
pub fn get(env: &Env, id: u64) -> Option<Campaign> {
    let config = load_campaign_config(env, id)?;
    Some(Campaign::from_parts(config, load_pledged(env, id)))
}

/// Returns the new aggregate.
pub fn add_pledged(env: &Env, id: u64, delta: i128) -> i128 {
    let pledged = load_pledged(env, id)
        .checked_add(delta)
        .expect("pledged aggregate overflow");
    save_pledged(env, id, pledged);
    pledged
}

/// Returns the new aggregate.
pub fn sub_pledged(env: &Env, id: u64, delta: i128) -> i128 {
    let current = load_pledged(env, id);
    if delta > current {
        panic!("pledged aggregate underflow");
    }
    let pledged = current - delta;
    save_pledged(env, id, pledged);
    pledged
}

/// Drop the campaign record. Later reads of `id` behave as if it never existed.
pub fn clear(env: &Env, id: u64) {
    remove_campaign(env, id);
}
