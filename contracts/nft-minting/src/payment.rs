use crate::access::AccessManager;
use crate::events::{FundsWithdrawn, MintPriceUpdated, PaymentRefunded, PRICE, REFUND, WITHDRAW};
use crate::types::{Config, DataKey, Error, DEFAULT_MINT_PRICE};
use soroban_sdk::token::Client as TokenClient;
use soroban_sdk::{log, Address, Env};

pub struct PaymentManager;

impl PaymentManager {
    /// Initialize the mint price
    pub fn init(env: &Env) {
        env.storage()
            .instance()
            .set(&DataKey::MintPrice, &DEFAULT_MINT_PRICE);
    }

    pub fn get_mint_price(env: &Env) -> Result<i128, Error> {
        env.storage()
            .instance()
            .get(&DataKey::MintPrice)
            .ok_or(Error::NotInitialized)
    }

    pub fn get_payment_token(env: &Env) -> Result<Address, Error> {
        let config: Config = env
            .storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(Error::NotInitialized)?;
        Ok(config.payment_token)
    }

    /// Price of `quantity` tokens at the current mint price
    pub fn calculate_cost(env: &Env, quantity: u32) -> Result<i128, Error> {
        if quantity == 0 {
            return Err(Error::InvalidQuantity);
        }

        let price = Self::get_mint_price(env)?;
        price
            .checked_mul(quantity as i128)
            .ok_or(Error::ArithmeticOverflow)
    }

    pub fn set_mint_price(env: &Env, caller: &Address, new_price: i128) -> Result<(), Error> {
        AccessManager::verify_owner(env, caller)?;

        if new_price < 0 {
            return Err(Error::InvalidPrice);
        }

        let old_price = Self::get_mint_price(env)?;
        env.storage().instance().set(&DataKey::MintPrice, &new_price);

        env.events().publish(
            (PRICE,),
            MintPriceUpdated {
                old_price,
                new_price,
            },
        );
        Ok(())
    }

    /// Pull `payment` from `payer`, then hand back whatever exceeds `cost`
    pub fn collect(env: &Env, payer: &Address, payment: i128, cost: i128) -> Result<(), Error> {
        if payment < cost {
            return Err(Error::InsufficientPayment);
        }
        if payment == 0 {
            return Ok(());
        }

        let token = TokenClient::new(env, &Self::get_payment_token(env)?);
        let contract = env.current_contract_address();

        match token.try_transfer(payer, &contract, &payment) {
            Ok(Ok(())) => {}
            _ => return Err(Error::TransferFailed),
        }

        let refund = payment - cost;
        if refund > 0 {
            match token.try_transfer(&contract, payer, &refund) {
                Ok(Ok(())) => {}
                _ => return Err(Error::TransferFailed),
            }

            env.events().publish(
                (REFUND, payer.clone()),
                PaymentRefunded {
                    payer: payer.clone(),
                    amount: refund,
                },
            );
        }

        Ok(())
    }

    /// Payment token held by the contract
    pub fn collected_balance(env: &Env) -> Result<i128, Error> {
        let token = TokenClient::new(env, &Self::get_payment_token(env)?);
        Ok(token.balance(&env.current_contract_address()))
    }

    /// Send the whole collected balance to the owner
    pub fn withdraw(env: &Env, caller: &Address) -> Result<i128, Error> {
        AccessManager::verify_owner(env, caller)?;

        let token = TokenClient::new(env, &Self::get_payment_token(env)?);
        let contract = env.current_contract_address();
        let balance = token.balance(&contract);
        if balance <= 0 {
            return Err(Error::NothingToWithdraw);
        }

        match token.try_transfer(&contract, caller, &balance) {
            Ok(Ok(())) => {}
            _ => return Err(Error::TransferFailed),
        }

        log!(env, "withdrew {} to owner {}", balance, caller.clone());

        env.events().publish(
            (WITHDRAW, caller.clone()),
            FundsWithdrawn {
                owner: caller.clone(),
                amount: balance,
            },
        );
        Ok(balance)
    }
}
