//! Minimal token contract for failure injection.
//!
//! Implements the `transfer` / `balance` subset of the token interface that
//! [`crate::asset::TokenAsset`] calls. `set_failing(true)` makes every
//! transfer abort, which lets tests fail the custody step of an operation
//! after its local writes have been staged.

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

#[contracttype]
#[derive(Clone)]
enum MockKey {
    Balance(Address),
    Failing,
}

#[contract]
pub struct MockToken;

#[contractimpl]
impl MockToken {
    pub fn mint(env: Env, to: Address, amount: i128) {
        let balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .instance()
            .set(&MockKey::Balance(to), &(balance + amount));
    }

    pub fn set_failing(env: Env, failing: bool) {
        env.storage().instance().set(&MockKey::Failing, &failing);
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        let failing: bool = env
            .storage()
            .instance()
            .get(&MockKey::Failing)
            .unwrap_or(false);
        if failing {
            panic!("transfer rejected");
        }
        let from_balance = Self::balance(env.clone(), from.clone());
        if from_balance < amount {
            panic!("insufficient balance");
        }
        let to_balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .instance()
            .set(&MockKey::Balance(from), &(from_balance - amount));
        env.storage()
            .instance()
            .set(&MockKey::Balance(to), &(to_balance + amount));
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .instance()
            .get(&MockKey::Balance(id))
            .unwrap_or(0)
    }
}
