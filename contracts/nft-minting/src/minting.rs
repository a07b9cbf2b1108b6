use crate::access::AccessManager;
use crate::events::{NftMinted, MINTED};
use crate::payment::PaymentManager;
use crate::tokens::TokenManager;
use crate::types::{DataKey, Error, MAX_PER_TX, MAX_PER_WALLET, MAX_SUPPLY};
use soroban_sdk::{log, Address, Env, String, Vec};

pub struct MintManager;

impl MintManager {
    /// Initialize supply tracking
    pub fn init(env: &Env) {
        env.storage().instance().set(&DataKey::TotalSupply, &0u32);
    }

    /// Tokens minted to `wallet` over the contract's lifetime
    pub fn minted_count(env: &Env, wallet: &Address) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::MintedCount(wallet.clone()))
            .unwrap_or(0)
    }

    pub fn remaining_supply(env: &Env) -> u32 {
        MAX_SUPPLY.saturating_sub(TokenManager::total_supply(env))
    }

    /// Check every mint limit, returning the first one violated
    pub fn check_limits(env: &Env, to: &Address, quantity: u32) -> Result<(), Error> {
        AccessManager::when_not_paused(env)?;

        if quantity == 0 || quantity > MAX_PER_TX {
            return Err(Error::InvalidQuantity);
        }

        if Self::minted_count(env, to) + quantity > MAX_PER_WALLET {
            return Err(Error::ExceedsMaxPerWallet);
        }

        if TokenManager::total_supply(env) + quantity > MAX_SUPPLY {
            return Err(Error::ExceedsMaxSupply);
        }

        Ok(())
    }

    pub fn can_mint(env: &Env, wallet: &Address, quantity: u32) -> bool {
        if AccessManager::get_owner(env).is_err() {
            return false;
        }
        Self::check_limits(env, wallet, quantity).is_ok()
    }

    /// Paid mint. `payer` covers the cost and receives any refund.
    pub fn mint(
        env: &Env,
        payer: &Address,
        to: &Address,
        quantity: u32,
        metadata_uris: &Vec<String>,
        payment: i128,
    ) -> Result<Vec<u32>, Error> {
        Self::check_request(env, to, quantity, metadata_uris)?;

        let cost = PaymentManager::calculate_cost(env, quantity)?;
        PaymentManager::collect(env, payer, payment, cost)?;

        Ok(Self::mint_tokens(env, to, metadata_uris))
    }

    /// Owner mint, exempt from payment only
    pub fn owner_mint(
        env: &Env,
        caller: &Address,
        to: &Address,
        quantity: u32,
        metadata_uris: &Vec<String>,
    ) -> Result<Vec<u32>, Error> {
        AccessManager::verify_owner(env, caller)?;
        Self::check_request(env, to, quantity, metadata_uris)?;

        Ok(Self::mint_tokens(env, to, metadata_uris))
    }

    fn check_request(
        env: &Env,
        to: &Address,
        quantity: u32,
        metadata_uris: &Vec<String>,
    ) -> Result<(), Error> {
        Self::check_limits(env, to, quantity)?;

        if metadata_uris.len() != quantity {
            return Err(Error::MetadataCountMismatch);
        }

        Ok(())
    }

    /// Create one token per URI. Callers must have run `check_request`.
    fn mint_tokens(env: &Env, to: &Address, metadata_uris: &Vec<String>) -> Vec<u32> {
        let mut next_id = TokenManager::total_supply(env);
        let mut minted = Vec::new(env);

        for metadata_uri in metadata_uris.iter() {
            TokenManager::create(env, next_id, to, &metadata_uri);

            env.events().publish(
                (MINTED, to.clone()),
                NftMinted {
                    to: to.clone(),
                    token_id: next_id,
                    metadata_uri,
                },
            );

            minted.push_back(next_id);
            next_id += 1;
        }

        let quantity = minted.len();
        env.storage()
            .persistent()
            .set(
                &DataKey::MintedCount(to.clone()),
                &(Self::minted_count(env, to) + quantity),
            );
        env.storage().instance().set(&DataKey::TotalSupply, &next_id);

        log!(env, "minted {} tokens to {}, supply now {}", quantity, to.clone(), next_id);

        minted
    }
}
