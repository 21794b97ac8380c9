//! Pledge ledger: the amount each backer currently has committed to each
//! campaign.
//!
//! No aggregate lives here. Every change to a campaign's pledged total in
//! [`crate::registry`] is paired with exactly one change in this ledger, so
//! the per-backer entries of a campaign sum to its aggregate.

use soroban_sdk::{Address, Env};

use crate::storage::{load_pledge, save_pledge};
use crate::Error;

pub fn amount_of(env: &Env, id: u64, backer: &Address) -> i128 {
    load_pledge(env, id, backer)
}

/// Returns the backer's new total.
pub fn add(env: &Env, id: u64, backer: &Address, delta: i128) -> i128 {
    let total = amount_of(env, id, backer)
        .checked_add(delta)
        .expect("pledge entry overflow");
    save_pledge(env, id, backer, total);
    total
}

/// Returns the backer's remaining amount.
pub fn sub(env: &Env, id: u64, backer: &Address, delta: i128) -> Result<i128, Error> {
    let current = amount_of(env, id, backer);
    if delta > current {
        return Err(Error::InvalidAmount);
    }
    let remaining = current - delta;
    save_pledge(env, id, backer, remaining);
    Ok(remaining)
}

pub fn clear(env: &Env, id: u64, backer: &Address) {
    save_pledge(env, id, backer, 0);
}
