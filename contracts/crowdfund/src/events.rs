//! Contract events.
//!
//! Every event is published with the topic pair `(kind, campaign_id)`:
//!
//! | Topic       | Data                        |
//! |-------------|-----------------------------|
//! | `launched`  | [`Campaign`] snapshot       |
//! | `pledged`   | [`Pledged`]                 |
//! | `unpledged` | [`Unpledged`]               |
//! | `claimed`   | [`Campaign`] before zeroing |
//! | `refunded`  | [`Refunded`]                |
//! | `cancelled` | [`Campaign`] before removal |

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::types::Campaign;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pledged {
    pub backer: Address,
    pub campaign_id: u64,
    pub amount: i128,
    /// Backer's committed amount after this pledge.
    pub total: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Unpledged {
    pub backer: Address,
    pub campaign_id: u64,
    pub amount: i128,
    /// Always zero: unpledging withdraws the whole entry.
    pub remaining: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Refunded {
    pub backer: Address,
    pub campaign_id: u64,
    pub amount: i128,
}

fn publish_snapshot(env: &Env, topic: Symbol, id: u64, campaign: &Campaign) {
    env.events().publish((topic, id), campaign.clone());
}

pub fn launched(env: &Env, id: u64, campaign: &Campaign) {
    publish_snapshot(env, symbol_short!("launched"), id, campaign);
}

pub fn pledged(env: &Env, backer: &Address, id: u64, amount: i128, total: i128) {
    env.events().publish(
        (symbol_short!("pledged"), id),
        Pledged {
            backer: backer.clone(),
            campaign_id: id,
            amount,
            total,
        },
    );
}

pub fn unpledged(env: &Env, backer: &Address, id: u64, amount: i128) {
    env.events().publish(
        (symbol_short!("unpledged"), id),
        Unpledged {
            backer: backer.clone(),
            campaign_id: id,
            amount,
            remaining: 0,
        },
    );
}

pub fn claimed(env: &Env, id: u64, campaign: &Campaign) {
    publish_snapshot(env, symbol_short!("claimed"), id, campaign);
}

pub fn refunded(env: &Env, backer: &Address, id: u64, amount: i128) {
    env.events().publish(
        (symbol_short!("refunded"), id),
        Refunded {
            backer: backer.clone(),
            campaign_id: id,
            amount,
        },
    );
}

pub fn cancelled(env: &Env, id: u64, campaign: &Campaign) {
    publish_snapshot(env, symbol_short!("cancelled"), id, campaign);
}
