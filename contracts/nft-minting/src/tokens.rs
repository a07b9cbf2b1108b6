use crate::events::TRANSFER;
use crate::types::{DataKey, Error};
use soroban_sdk::{Address, Env, String, Vec};

/// Ownership records and ERC-721 style enumeration
pub struct TokenManager;

impl TokenManager {
    pub fn total_supply(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    /// Write a fresh token. Ids are never reused, so the slot must be empty.
    pub fn create(env: &Env, token_id: u32, owner: &Address, metadata_uri: &String) {
        env.storage()
            .persistent()
            .set(&DataKey::TokenOwner(token_id), owner);
        env.storage()
            .persistent()
            .set(&DataKey::TokenUri(token_id), metadata_uri);
        Self::add_to_owner(env, owner, token_id);
    }

    pub fn owner_of(env: &Env, token_id: u32) -> Result<Address, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::TokenOwner(token_id))
            .ok_or(Error::TokenNotFound)
    }

    pub fn token_uri(env: &Env, token_id: u32) -> Result<String, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::TokenUri(token_id))
            .ok_or(Error::TokenNotFound)
    }

    pub fn balance_of(env: &Env, owner: &Address) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::OwnerBalance(owner.clone()))
            .unwrap_or(0)
    }

    pub fn token_of_owner_by_index(env: &Env, owner: &Address, index: u32) -> Result<u32, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::OwnerToken(owner.clone(), index))
            .ok_or(Error::IndexOutOfBounds)
    }

    pub fn tokens_of_owner(env: &Env, owner: &Address) -> Vec<u32> {
        let mut tokens = Vec::new(env);
        for index in 0..Self::balance_of(env, owner) {
            if let Ok(token_id) = Self::token_of_owner_by_index(env, owner, index) {
                tokens.push_back(token_id);
            }
        }
        tokens
    }

    /// Ids are dense and zero-based, so the index is the id
    pub fn token_by_index(env: &Env, index: u32) -> Result<u32, Error> {
        if index >= Self::total_supply(env) {
            return Err(Error::IndexOutOfBounds);
        }
        Ok(index)
    }

    pub fn transfer(env: &Env, from: &Address, to: &Address, token_id: u32) -> Result<(), Error> {
        from.require_auth();

        let owner = Self::owner_of(env, token_id)?;
        if &owner != from {
            return Err(Error::NotTokenOwner);
        }

        if from != to {
            Self::remove_from_owner(env, from, token_id);
            Self::add_to_owner(env, to, token_id);
            env.storage()
                .persistent()
                .set(&DataKey::TokenOwner(token_id), to);
        }

        env.events()
            .publish((TRANSFER, from.clone(), to.clone()), token_id);
        Ok(())
    }

    /// Owned tokens live one per key, so no single entry grows with the balance
    fn add_to_owner(env: &Env, owner: &Address, token_id: u32) {
        let index = Self::balance_of(env, owner);
        let storage = env.storage().persistent();

        storage.set(&DataKey::OwnerToken(owner.clone(), index), &token_id);
        storage.set(&DataKey::OwnedTokenIndex(token_id), &index);
        storage.set(&DataKey::OwnerBalance(owner.clone()), &(index + 1));
    }

    /// Swap the last owned token into the vacated slot, then pop
    fn remove_from_owner(env: &Env, owner: &Address, token_id: u32) {
        let balance = Self::balance_of(env, owner);
        if balance == 0 {
            return;
        }
        let storage = env.storage().persistent();
        let last = balance - 1;

        let index: u32 = storage
            .get(&DataKey::OwnedTokenIndex(token_id))
            .unwrap_or(last);
        if index != last {
            if let Some(last_id) = storage.get::<_, u32>(&DataKey::OwnerToken(owner.clone(), last)) {
                storage.set(&DataKey::OwnerToken(owner.clone(), index), &last_id);
                storage.set(&DataKey::OwnedTokenIndex(last_id), &index);
            }
        }

        storage.remove(&DataKey::OwnerToken(owner.clone(), last));
        storage.remove(&DataKey::OwnedTokenIndex(token_id));
        storage.set(&DataKey::OwnerBalance(owner.clone()), &last);
    }
}
