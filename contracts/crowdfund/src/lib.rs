//! # CrowdFund Contract
//!
//! All-or-nothing crowdfunding escrow. Anyone may launch a time-boxed
//! campaign; backers pledge a single token into escrow while it is active and
//! may withdraw before it ends. At the end the creator claims everything if
//! the goal was met, otherwise each backer takes their own contribution back.
//!
//! | Phase      | Entry Point(s)                                         |
//! |------------|--------------------------------------------------------|
//! | Deployment | `__constructor`                                        |
//! | Scheduling | [`CrowdFund::launch`], [`CrowdFund::cancel`]           |
//! | Funding    | [`CrowdFund::pledge`], [`CrowdFund::unpledge`]         |
//! | Resolution | [`CrowdFund::claim`], [`CrowdFund::refund`]            |
//! | Queries    | `get_campaign`, `pledge_amount`, `status`, `next_id`, `token`, `escrow_balance` |
//!
//! ## Architecture
//!
//! Transition rules live in [`lifecycle`], campaign records in [`registry`],
//! per-backer amounts in `ledger` and token movement behind [`asset::Asset`].
//! This file contains only the public entry points and authorization.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env};

pub mod asset;
pub mod events;
mod ledger;
pub mod lifecycle;
pub mod registry;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod mock_token;
#[cfg(test)]
mod test_atomicity;
#[cfg(test)]
mod test_events;

use asset::{Asset, TokenAsset};
pub use types::{Campaign, CampaignConfig, CampaignStatus};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Goal is not positive, or the goal condition for claim/refund is not satisfied.
    InvalidGoal      = 1,
    /// Start is not in the future, or end is not after start.
    InvalidTimes     = 2,
    /// Pledge amount is not positive.
    InvalidAmount    = 3,
    /// Pledge, unpledge or refund on an unknown or cancelled campaign, or an
    /// operation outside its time window.
    InvalidCampaign  = 4,
    /// Caller is not the campaign creator. A campaign that does not exist has
    /// no creator, so claim and cancel on it fail this way too.
    InvalidMsgSender = 5,
    /// Cancel attempted once the campaign has started.
    StartedCampaign  = 6,
}

#[contract]
pub struct CrowdFund;

#[contractimpl]
impl CrowdFund {
    /// Bind the escrow to the token contract it will hold.
    pub fn __constructor(env: Env, token: Address) {
        storage::set_token(&env, &token);
    }

    pub fn token(env: Env) -> Address {
        storage::get_token(&env)
    }

    /// Open a campaign for `goal` units between `start_time` and `end_time`.
    ///
    /// `start_time` must lie strictly in the future and `end_time` strictly
    /// after it. Returns the new campaign id.
    pub fn launch(
        env: Env,
        creator: Address,
        goal: i128,
        start_time: u64,
        end_time: u64,
    ) -> Result<u64, Error> {
        creator.require_auth();
        let now = env.ledger().timestamp();
        lifecycle::launch(&env, &creator, goal, start_time, end_time, now)
    }

    /// Commit `amount` from `backer` to an active campaign.
    pub fn pledge(env: Env, id: u64, backer: Address, amount: i128) -> Result<(), Error> {
        backer.require_auth();
        let now = env.ledger().timestamp();
        lifecycle::pledge(&env, &TokenAsset::load(&env), id, &backer, amount, now)
    }

    /// Withdraw the backer's entire pledge before the campaign ends.
    pub fn unpledge(env: Env, id: u64, backer: Address) -> Result<(), Error> {
        backer.require_auth();
        let now = env.ledger().timestamp();
        lifecycle::unpledge(&env, &TokenAsset::load(&env), id, &backer, now)
    }

    /// Pay out a successful, ended campaign to its creator.
    pub fn claim(env: Env, id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let now = env.ledger().timestamp();
        lifecycle::claim(&env, &TokenAsset::load(&env), id, &caller, now)
    }

    /// Return a backer's contribution from an ended campaign that missed its goal.
    pub fn refund(env: Env, id: u64, backer: Address) -> Result<(), Error> {
        backer.require_auth();
        let now = env.ledger().timestamp();
        lifecycle::refund(&env, &TokenAsset::load(&env), id, &backer, now)
    }

    /// Remove a campaign that has not started yet. Its id is not reused.
    pub fn cancel(env: Env, id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let now = env.ledger().timestamp();
        lifecycle::cancel(&env, id, &caller, now)
    }

    /// `None` for ids that were never launched or have been cancelled.
    pub fn get_campaign(env: Env, id: u64) -> Option<Campaign> {
        registry::get(&env, id)
    }

    pub fn pledge_amount(env: Env, id: u64, backer: Address) -> i128 {
        lifecycle::pledge_of(&env, id, &backer)
    }

    pub fn status(env: Env, id: u64) -> Option<CampaignStatus> {
        let now = env.ledger().timestamp();
        registry::get(&env, id).map(|campaign| campaign.status_at(now))
    }

    pub fn next_id(env: Env) -> u64 {
        storage::get_next_id(&env)
    }

    /// Total token balance held by the escrow across all campaigns.
    pub fn escrow_balance(env: Env) -> i128 {
        TokenAsset::load(&env).balance_of(&env.current_contract_address())
    }
}
