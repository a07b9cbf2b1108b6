use soroban_sdk::{contracterror, contracttype, Address, String};

/// Hard cap on the number of tokens the collection can ever hold
pub const MAX_SUPPLY: u32 = 10_000;
/// Lifetime mint allowance of a single wallet
pub const MAX_PER_WALLET: u32 = 5;
/// Largest quantity accepted by a single mint call
pub const MAX_PER_TX: u32 = 3;
/// Price per token set at initialization (0.01 of a 7-decimal asset)
pub const DEFAULT_MINT_PRICE: i128 = 100_000;

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,                     // Contract owner
    Config,                    // Collection configuration
    MintPrice,                 // Price per token
    Paused,                    // Pause flag
    TotalSupply,               // Tokens minted so far, also the next token id
    MintedCount(Address),      // Wallet -> tokens minted to it
    TokenOwner(u32),           // Token ID -> current owner
    TokenUri(u32),             // Token ID -> metadata URI
    OwnerBalance(Address),     // Owner -> number of tokens held
    OwnerToken(Address, u32),  // (Owner, index) -> token ID
    OwnedTokenIndex(u32),      // Token ID -> index in its owner's list
}

/// Collection level settings fixed at initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
    pub payment_token: Address,
}

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,         // Contract not initialized
    AlreadyInitialized = 2,     // Contract already setup
    Unauthorized = 3,           // Caller is not the owner
    ContractPaused = 4,         // Minting is paused
    ContractNotPaused = 5,      // Unpause while running
    InvalidQuantity = 6,        // Zero or above MAX_PER_TX
    ExceedsMaxPerWallet = 7,    // Wallet allowance exhausted
    ExceedsMaxSupply = 8,       // Collection sold out
    InsufficientPayment = 9,    // Payment below cost
    MetadataCountMismatch = 10, // URI count differs from quantity
    TransferFailed = 11,        // Payment token transfer failed
    NothingToWithdraw = 12,     // No collected balance
    InvalidPrice = 13,          // Negative mint price
    TokenNotFound = 14,         // Token ID never minted
    NotTokenOwner = 15,         // Sender does not own the token
    IndexOutOfBounds = 16,      // Enumeration index past the end
    ArithmeticOverflow = 17,    // Cost does not fit in i128
}
