//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the escrow.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key      | Type      | Description                          |
//! |----------|-----------|--------------------------------------|
//! | `Token`  | `Address` | Asset contract held in escrow        |
//! | `NextId` | `u64`     | Next campaign identifier to assign   |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                  | Type             | Description                      |
//! |----------------------|------------------|----------------------------------|
//! | `Campaign(id)`       | `CampaignConfig` | Immutable campaign parameters    |
//! | `Pledged(id)`        | `i128`           | Aggregate held for the campaign  |
//! | `Pledge(id, backer)` | `i128`           | One backer's committed amount    |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//! Entries holding zero are removed rather than stored.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::CampaignConfig;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Escrowed asset contract (Instance).
    Token,
    /// Campaign id counter (Instance).
    NextId,
    /// Immutable campaign config keyed by id (Persistent).
    Campaign(u64),
    /// Pledged aggregate keyed by id (Persistent).
    Pledged(u64),
    /// Per-backer pledge keyed by (id, backer) (Persistent).
    Pledge(u64, Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    bump_instance(env);
}

/// Retrieve the escrowed asset address.
/// Panics if the contract was deployed without one, which the constructor prevents.
pub fn get_token(env: &Env) -> Address {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .expect("token not set")
}

pub fn get_next_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::NextId)
        .unwrap_or(0)
}

/// Reads, increments and stores the campaign counter.
/// Returns the pre-increment value.
pub fn get_and_increment_id(env: &Env) -> u64 {
    bump_instance(env);
    let current = get_next_id(env);
    env.storage()
        .instance()
        .set(&DataKey::NextId, &(current + 1));
    current
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn read_persistent<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let value = env.storage().persistent().get::<DataKey, V>(key);
    if value.is_some() {
        bump_persistent(env, key);
    }
    value
}

/// Store `amount` under `key`, or drop the entry when it reaches zero.
fn write_amount(env: &Env, key: &DataKey, amount: i128) {
    if amount == 0 {
        env.storage().persistent().remove(key);
    } else {
        env.storage().persistent().set(key, &amount);
        bump_persistent(env, key);
    }
}

pub fn save_campaign_config(env: &Env, id: u64, config: &CampaignConfig) {
    let key = DataKey::Campaign(id);
    env.storage().persistent().set(&key, config);
    bump_persistent(env, &key);
}

pub fn load_campaign_config(env: &Env, id: u64) -> Option<CampaignConfig> {
    read_persistent(env, &DataKey::Campaign(id))
}

pub fn load_pledged(env: &Env, id: u64) -> i128 {
    read_persistent(env, &DataKey::Pledged(id)).unwrap_or(0)
}

pub fn save_pledged(env: &Env, id: u64, pledged: i128) {
    write_amount(env, &DataKey::Pledged(id), pledged);
}

/// Remove every campaign-level entry for `id`.
pub fn remove_campaign(env: &Env, id: u64) {
    env.storage().persistent().remove(&DataKey::Campaign(id));
    env.storage().persistent().remove(&DataKey::Pledged(id));
}

pub fn load_pledge(env: &Env, id: u64, backer: &Address) -> i128 {
    read_persistent(env, &DataKey::Pledge(id, backer.clone())).unwrap_or(0)
}

pub fn save_pledge(env: &Env, id: u64, backer: &Address, amount: i128) {
    write_amount(env, &DataKey::Pledge(id, backer.clone()), amount);
}
