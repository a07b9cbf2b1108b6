#![no_std]
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, String, Symbol, Vec};

mod access;
mod events;
mod interface;
mod minting;
mod payment;
mod tokens;
mod types;

pub use crate::interface::NftMintingTrait;
pub use crate::types::{Config, Error, MAX_PER_TX, MAX_PER_WALLET, MAX_SUPPLY};

use crate::access::AccessManager;
use crate::minting::MintManager;
use crate::payment::PaymentManager;
use crate::tokens::TokenManager;
use crate::types::DataKey;

contractmeta!(key = "Description", val = "Capped, pausable NFT minting ledger");

#[contract]
pub struct NftMintingContract;

fn load_config(env: &Env) -> Result<Config, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

#[contractimpl]
impl NftMintingTrait for NftMintingContract {
    fn initialize(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        base_uri: String,
        payment_token: Address,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Owner) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();
        env.storage().instance().set(
            &DataKey::Config,
            &Config {
                name,
                symbol,
                base_uri,
                payment_token,
            },
        );

        // Initialize managers
        AccessManager::init(&env, &owner);
        PaymentManager::init(&env);
        MintManager::init(&env);

        env.events().publish((Symbol::new(&env, "init"),), (owner,));
        Ok(())
    }

    fn mint(
        env: Env,
        payer: Address,
        to: Address,
        quantity: u32,
        metadata_uris: Vec<String>,
        payment: i128,
    ) -> Result<Vec<u32>, Error> {
        payer.require_auth();
        MintManager::mint(&env, &payer, &to, quantity, &metadata_uris, payment)
    }

    fn owner_mint(
        env: Env,
        caller: Address,
        to: Address,
        quantity: u32,
        metadata_uris: Vec<String>,
    ) -> Result<Vec<u32>, Error> {
        MintManager::owner_mint(&env, &caller, &to, quantity, &metadata_uris)
    }

    fn set_mint_price(env: Env, caller: Address, new_price: i128) -> Result<(), Error> {
        PaymentManager::set_mint_price(&env, &caller, new_price)
    }

    fn pause(env: Env, caller: Address) -> Result<(), Error> {
        AccessManager::pause(&env, &caller)
    }

    fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        AccessManager::unpause(&env, &caller)
    }

    fn withdraw(env: Env, caller: Address) -> Result<i128, Error> {
        PaymentManager::withdraw(&env, &caller)
    }

    fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        AccessManager::transfer_ownership(&env, &caller, &new_owner)
    }

    fn set_base_uri(env: Env, caller: Address, base_uri: String) -> Result<(), Error> {
        AccessManager::verify_owner(&env, &caller)?;

        let mut config = load_config(&env)?;
        config.base_uri = base_uri;
        env.storage().instance().set(&DataKey::Config, &config);
        Ok(())
    }

    fn transfer(env: Env, from: Address, to: Address, token_id: u32) -> Result<(), Error> {
        TokenManager::transfer(&env, &from, &to, token_id)
    }

    fn calculate_cost(env: Env, quantity: u32) -> Result<i128, Error> {
        PaymentManager::calculate_cost(&env, quantity)
    }

    fn can_mint(env: Env, wallet: Address, quantity: u32) -> bool {
        MintManager::can_mint(&env, &wallet, quantity)
    }

    fn name(env: Env) -> Result<String, Error> {
        Ok(load_config(&env)?.name)
    }

    fn symbol(env: Env) -> Result<String, Error> {
        Ok(load_config(&env)?.symbol)
    }

    fn base_uri(env: Env) -> Result<String, Error> {
        Ok(load_config(&env)?.base_uri)
    }

    fn owner(env: Env) -> Result<Address, Error> {
        AccessManager::get_owner(&env)
    }

    fn payment_token(env: Env) -> Result<Address, Error> {
        PaymentManager::get_payment_token(&env)
    }

    fn mint_price(env: Env) -> Result<i128, Error> {
        PaymentManager::get_mint_price(&env)
    }

    fn paused(env: Env) -> bool {
        AccessManager::is_paused(&env)
    }

    fn total_supply(env: Env) -> u32 {
        TokenManager::total_supply(&env)
    }

    fn max_supply(_env: Env) -> u32 {
        MAX_SUPPLY
    }

    fn max_per_wallet(_env: Env) -> u32 {
        MAX_PER_WALLET
    }

    fn max_per_tx(_env: Env) -> u32 {
        MAX_PER_TX
    }

    fn remaining_supply(env: Env) -> u32 {
        MintManager::remaining_supply(&env)
    }

    fn minted_count(env: Env, wallet: Address) -> u32 {
        MintManager::minted_count(&env, &wallet)
    }

    fn collected_balance(env: Env) -> Result<i128, Error> {
        PaymentManager::collected_balance(&env)
    }

    fn token_uri(env: Env, token_id: u32) -> Result<String, Error> {
        TokenManager::token_uri(&env, token_id)
    }

    fn owner_of(env: Env, token_id: u32) -> Result<Address, Error> {
        TokenManager::owner_of(&env, token_id)
    }

    fn balance_of(env: Env, owner: Address) -> u32 {
        TokenManager::balance_of(&env, &owner)
    }

    fn tokens_of_owner(env: Env, owner: Address) -> Vec<u32> {
        TokenManager::tokens_of_owner(&env, &owner)
    }

    fn token_of_owner_by_index(env: Env, owner: Address, index: u32) -> Result<u32, Error> {
        TokenManager::token_of_owner_by_index(&env, &owner, index)
    }

    fn token_by_index(env: Env, index: u32) -> Result<u32, Error> {
        TokenManager::token_by_index(&env, index)
    }
}
