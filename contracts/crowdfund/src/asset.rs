//! Asset custody capability.
//!
//! The lifecycle logic only ever moves value through [`Asset`], so any
//! conforming custody implementation can stand behind the escrow. The
//! deployed contract uses [`TokenAsset`], a SEP-41 token client bound to the
//! token address passed to the constructor.
//!
//! A failed transfer panics inside the token contract, which aborts the whole
//! invocation and rolls back every write made before it.

use soroban_sdk::{token, Address, Env};

use crate::storage::get_token;

pub trait Asset {
    /// Move `amount` from `from` into escrow custody.
    fn transfer_in(&self, from: &Address, amount: i128);
    /// Move `amount` out of escrow custody to `to`.
    fn transfer_out(&self, to: &Address, amount: i128);
    fn balance_of(&self, holder: &Address) -> i128;
}

pub struct TokenAsset<'a> {
    env: &'a Env,
    client: token::Client<'a>,
}

impl<'a> TokenAsset<'a> {
    /// Bind to the token stored at construction.
    pub fn load(env: &'a Env) -> Self {
        let address = get_token(env);
        TokenAsset {
            env,
            client: token::Client::new(env, &address),
        }
    }
}

impl Asset for TokenAsset<'_> {
    fn transfer_in(&self, from: &Address, amount: i128) {
        if amount == 0 {
            return;
        }
        self.client
            .transfer(from, &self.env.current_contract_address(), &amount);
    }

    fn transfer_out(&self, to: &Address, amount: i128) {
        if amount == 0 {
            return;
        }
        self.client
            .transfer(&self.env.current_contract_address(), to, &amount);
    }

    fn balance_of(&self, holder: &Address) -> i128 {
        self.client.balance(holder)
    }
}
