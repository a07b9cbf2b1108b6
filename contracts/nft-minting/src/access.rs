use crate::events::{OwnershipTransferred, OWNER, PAUSED, UNPAUSED};
use crate::types::{DataKey, Error};
use soroban_sdk::{Address, Env};

pub struct AccessManager;

impl AccessManager {
    /// Store the initial owner and start unpaused
    pub fn init(env: &Env, owner: &Address) {
        env.storage().instance().set(&DataKey::Owner, owner);
        env.storage().instance().set(&DataKey::Paused, &false);
    }

    /// Get the contract owner
    pub fn get_owner(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }

    /// Authenticate `caller` and check it is the stored owner
    pub fn verify_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();

        let owner = Self::get_owner(env)?;
        if caller != &owner {
            return Err(Error::Unauthorized);
        }

        Ok(())
    }

    pub fn is_paused(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Paused)
            .unwrap_or(false)
    }

    /// Reject the call while minting is halted
    pub fn when_not_paused(env: &Env) -> Result<(), Error> {
        if Self::is_paused(env) {
            return Err(Error::ContractPaused);
        }
        Ok(())
    }

    pub fn pause(env: &Env, caller: &Address) -> Result<(), Error> {
        Self::verify_owner(env, caller)?;
        Self::when_not_paused(env)?;

        env.storage().instance().set(&DataKey::Paused, &true);
        env.events().publish((PAUSED,), caller.clone());
        Ok(())
    }

    pub fn unpause(env: &Env, caller: &Address) -> Result<(), Error> {
        Self::verify_owner(env, caller)?;
        if !Self::is_paused(env) {
            return Err(Error::ContractNotPaused);
        }

        env.storage().instance().set(&DataKey::Paused, &false);
        env.events().publish((UNPAUSED,), caller.clone());
        Ok(())
    }

    /// Hand the owner role to `new_owner`
    pub fn transfer_ownership(
        env: &Env,
        caller: &Address,
        new_owner: &Address,
    ) -> Result<(), Error> {
        Self::verify_owner(env, caller)?;

        env.storage().instance().set(&DataKey::Owner, new_owner);
        env.events().publish(
            (OWNER,),
            OwnershipTransferred {
                previous_owner: caller.clone(),
                new_owner: new_owner.clone(),
            },
        );
        Ok(())
    }
}
