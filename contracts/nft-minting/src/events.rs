use soroban_sdk::{contracttype, symbol_short, Address, String, Symbol};

// Topic for each token created by mint or owner_mint.
pub const MINTED: Symbol = symbol_short!("minted");

// Topic for excess payment returned to the payer.
pub const REFUND: Symbol = symbol_short!("refund");

pub const PRICE: Symbol = symbol_short!("price");

pub const PAUSED: Symbol = symbol_short!("paused");

pub const UNPAUSED: Symbol = symbol_short!("unpaused");

pub const WITHDRAW: Symbol = symbol_short!("withdraw");

pub const TRANSFER: Symbol = symbol_short!("transfer");

// Topic for ownership handover.
pub const OWNER: Symbol = symbol_short!("owner");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NftMinted {
    pub to: Address,
    pub token_id: u32,
    pub metadata_uri: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentRefunded {
    pub payer: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintPriceUpdated {
    pub old_price: i128,
    pub new_price: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub owner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    pub previous_owner: Address,
    pub new_owner: Address,
}
