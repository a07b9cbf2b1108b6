//! Interface of the NFT Minting Contract
//!
//! The contract sells a capped collection of tokens for a payment token,
//! limits how many tokens each wallet and each call may mint, and lets the
//! owner pause minting, reprice and collect the proceeds.

use crate::types::Error;
use soroban_sdk::{Address, Env, String, Vec};

pub trait NftMintingTrait {
    /// Initialize the collection
    ///
    /// # Arguments
    /// * `owner` - Address allowed to run administrative operations
    /// * `name` - Collection name
    /// * `symbol` - Collection symbol
    /// * `base_uri` - Gateway prefix the front end resolves metadata against
    /// * `payment_token` - Token contract mints are paid in
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the contract has already been initialized
    fn initialize(
        env: Env,
        owner: Address,
        name: String,
        symbol: String,
        base_uri: String,
        payment_token: Address,
    ) -> Result<(), Error>;

    /// Mint `quantity` tokens to `to`, paid for by `payer`
    ///
    /// `payment` is pulled from `payer` in full and anything above
    /// `calculate_cost(quantity)` is sent back.
    ///
    /// # Returns
    /// The IDs of the new tokens, in mint order
    ///
    /// # Errors
    /// * `ContractPaused` - If minting is paused
    /// * `InvalidQuantity` - If quantity is zero or above the per-call cap
    /// * `ExceedsMaxPerWallet` - If `to` would pass its lifetime allowance
    /// * `ExceedsMaxSupply` - If the collection would pass its cap
    /// * `MetadataCountMismatch` - If `metadata_uris.len() != quantity`
    /// * `InsufficientPayment` - If `payment` is below the cost
    /// * `TransferFailed` - If the payment token transfer fails
    fn mint(
        env: Env,
        payer: Address,
        to: Address,
        quantity: u32,
        metadata_uris: Vec<String>,
        payment: i128,
    ) -> Result<Vec<u32>, Error>;

    /// Mint without payment (Owner only)
    ///
    /// Pause, per-call, per-wallet and supply limits still apply.
    fn owner_mint(
        env: Env,
        caller: Address,
        to: Address,
        quantity: u32,
        metadata_uris: Vec<String>,
    ) -> Result<Vec<u32>, Error>;

    /// Replace the mint price (Owner only)
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller is not the owner
    /// * `InvalidPrice` - If the price is negative
    fn set_mint_price(env: Env, caller: Address, new_price: i128) -> Result<(), Error>;

    /// Halt minting (Owner only)
    fn pause(env: Env, caller: Address) -> Result<(), Error>;

    /// Resume minting (Owner only)
    fn unpause(env: Env, caller: Address) -> Result<(), Error>;

    /// Send the whole collected balance to the owner (Owner only)
    ///
    /// # Returns
    /// The amount withdrawn
    ///
    /// # Errors
    /// * `NothingToWithdraw` - If the contract holds no payment token
    /// * `TransferFailed` - If the transfer to the owner fails
    fn withdraw(env: Env, caller: Address) -> Result<i128, Error>;

    /// Hand the owner role to another address (Owner only)
    fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error>;

    /// Replace the collection base URI (Owner only)
    fn set_base_uri(env: Env, caller: Address, base_uri: String) -> Result<(), Error>;

    /// Move a token between wallets
    ///
    /// # Errors
    /// * `TokenNotFound` - If the token was never minted
    /// * `NotTokenOwner` - If `from` does not own the token
    fn transfer(env: Env, from: Address, to: Address, token_id: u32) -> Result<(), Error>;

    /// Cost of minting `quantity` tokens at the current price
    fn calculate_cost(env: Env, quantity: u32) -> Result<i128, Error>;

    /// Whether a mint of `quantity` to `wallet` would pass every limit right now
    fn can_mint(env: Env, wallet: Address, quantity: u32) -> bool;

    fn name(env: Env) -> Result<String, Error>;

    fn symbol(env: Env) -> Result<String, Error>;

    fn base_uri(env: Env) -> Result<String, Error>;

    fn owner(env: Env) -> Result<Address, Error>;

    fn payment_token(env: Env) -> Result<Address, Error>;

    fn mint_price(env: Env) -> Result<i128, Error>;

    fn paused(env: Env) -> bool;

    fn total_supply(env: Env) -> u32;

    fn max_supply(env: Env) -> u32;

    fn max_per_wallet(env: Env) -> u32;

    fn max_per_tx(env: Env) -> u32;

    fn remaining_supply(env: Env) -> u32;

    fn minted_count(env: Env, wallet: Address) -> u32;

    fn collected_balance(env: Env) -> Result<i128, Error>;

    fn token_uri(env: Env, token_id: u32) -> Result<String, Error>;

    fn owner_of(env: Env, token_id: u32) -> Result<Address, Error>;

    fn balance_of(env: Env, owner: Address) -> u32;

    fn tokens_of_owner(env: Env, owner: Address) -> Vec<u32>;

    fn token_of_owner_by_index(env: Env, owner: Address, index: u32) -> Result<u32, Error>;

    fn token_by_index(env: Env, index: u32) -> Result<u32, Error>;
}
