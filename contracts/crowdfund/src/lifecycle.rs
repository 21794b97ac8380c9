//! Campaign lifecycle: validation and transitions for the six operations.
//!
//! Each operation validates completely before touching storage. Value moves
//! only through [`Asset`]:
//!
//! - `pledge` pulls funds in **before** any write, so a failed transfer leaves
//!   nothing behind.
//! - `unpledge`, `claim` and `refund` finalize the registry and ledger
//!   **before** paying out, so the token contract never observes a stale
//!   aggregate.
//!
//! Events are published last.

use soroban_sdk::{Address, Env};

use crate::asset::Asset;
use crate::events;
use crate::ledger;
use crate::registry;
use crate::types::{Campaign, CampaignStatus};
use crate::Error;

pub fn launch(
    env: &Env,
    creator: &Address,
    goal: i128,
    start_time: u64,
    end_time: u64,
    now: u64,
) -> Result<u64, Error> {
    let id = registry::create(env, creator, goal, start_time, end_time, now)?;
    let campaign = Campaign {
        creator: creator.clone(),
        goal,
        start_time,
        end_time,
        pledged: 0,
    };
    events::launched(env, id, &campaign);
    Ok(id)
}

pub fn pledge(
    env: &Env,
    asset: &impl Asset,
    id: u64,
    backer: &Address,
    amount: i128,
    now: u64,
) -> Result<(), Error> {
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    let campaign = load(env, id)?;
    if campaign.status_at(now) != CampaignStatus::Active {
        return Err(Error::InvalidCampaign);
    }

    asset.transfer_in(backer, amount);

    registry::add_pledged(env, id, amount);
    let total = ledger::add(env, id, backer, amount);

    events::pledged(env, backer, id, amount, total);
    Ok(())
}

/// Withdraw the backer's whole pledge while the campaign has not ended.
pub fn unpledge(
    env: &Env,
    asset: &impl Asset,
    id: u64,
    backer: &Address,
    now: u64,
) -> Result<(), Error> {
    let campaign = load(env, id)?;
    if campaign.status_at(now) == CampaignStatus::Ended {
        return Err(Error::InvalidCampaign);
    }

    let amount = outstanding(env, id, &campaign, backer);
    ledger::sub(env, id, backer, amount)?;
    registry::sub_pledged(env, id, amount);

    asset.transfer_out(backer, amount);

    events::unpledged(env, backer, id, amount);
    Ok(())
}

/// Pay the whole aggregate to the creator of an ended, successful campaign.
///
/// Zeroing the aggregate is what prevents a second claim: the next attempt
/// sees `0 < goal` and fails with `InvalidGoal`.
pub fn claim(
    env: &Env,
    asset: &impl Asset,
    id: u64,
    caller: &Address,
    now: u64,
) -> Result<(), Error> {
    let campaign = load_as_creator(env, id, caller)?;
    if !campaign.goal_met() {
        return Err(Error::InvalidGoal);
    }
    if campaign.status_at(now) != CampaignStatus::Ended {
        return Err(Error::InvalidCampaign);
    }

    registry::sub_pledged(env, id, campaign.pledged);

    asset.transfer_out(caller, campaign.pledged);

    events::claimed(env, id, &campaign);
    Ok(())
}

/// Return the backer's own contribution from an ended campaign that missed its goal.
pub fn refund(
    env: &Env,
    asset: &impl Asset,
    id: u64,
    backer: &Address,
    now: u64,
) -> Result<(), Error> {
    let campaign = load(env, id)?;
    if campaign.status_at(now) != CampaignStatus::Ended {
        return Err(Error::InvalidCampaign);
    }
    if campaign.goal_met() {
        return Err(Error::InvalidGoal);
    }

    let amount = outstanding(env, id, &campaign, backer);
    ledger::clear(env, id, backer);
    registry::sub_pledged(env, id, amount);

    asset.transfer_out(backer, amount);

    events::refunded(env, backer, id, amount);
    Ok(())
}

/// Remove a campaign that has not started yet.
///
/// Pledging is impossible before `start_time`, so no funds are held and
/// nothing needs to be returned.
pub fn cancel(env: &Env, id: u64, caller: &Address, now: u64) -> Result<(), Error> {
    let campaign = load_as_creator(env, id, caller)?;
    if campaign.status_at(now) != CampaignStatus::Scheduled {
        return Err(Error::StartedCampaign);
    }

    registry::clear(env, id);

    events::cancelled(env, id, &campaign);
    Ok(())
}

/// The backer's committed amount as the escrow currently honours it.
pub fn pledge_of(env: &Env, id: u64, backer: &Address) -> i128 {
    match registry::get(env, id) {
        Some(campaign) => outstanding(env, id, &campaign, backer),
        None => 0,
    }
}

fn load(env: &Env, id: u64) -> Result<Campaign, Error> {
    registry::get(env, id).ok_or(Error::InvalidCampaign)
}

/// Load a campaign on behalf of its creator.
///
/// A missing campaign has no creator, so no caller can match it.
fn load_as_creator(env: &Env, id: u64, caller: &Address) -> Result<Campaign, Error> {
    match registry::get(env, id) {
        Some(campaign) if campaign.creator == *caller => Ok(campaign),
        _ => Err(Error::InvalidMsgSender),
    }
}

/// A zero aggregate means every entry is zero: either nothing is pledged, or
/// a claim paid the entries out to the creator without visiting each one.
fn outstanding(env: &Env, id: u64, campaign: &Campaign, backer: &Address) -> i128 {
    if campaign.pledged == 0 {
        0
    } else {
        ledger::amount_of(env, id, backer)
    }
}
