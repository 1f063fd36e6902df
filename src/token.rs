//! CEP-18 fungible token core
//!
//! `FungibleToken` holds balances and allowances and exposes the standard entry
//! points. Contracts that issue their own token embed it as a `SubModule` and
//! drive supply through [`FungibleToken::mint_to`] and [`FungibleToken::burn_from`].
use odra::prelude::*;
use odra::casper_types::U256;
use crate::events::{Transfer, Approval};
use crate::errors::{MathError, TokenError};

/// CEP-18 token storage and logic
#[odra::module]
pub struct FungibleToken {
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Token decimals
    decimals: Var<u8>,
    /// Total supply of tokens
    total_supply: Var<U256>,
    /// Balance mapping: owner -> balance
    balances: Mapping<Address, U256>,
    /// Allowance mapping: owner -> spender -> amount
    allowances: Mapping<(Address, Address), U256>,
}

#[odra::module]
impl FungibleToken {
    /// Initialize the token metadata
    pub fn init(&mut self, name: String, symbol: String, decimals: u8) {
        self.name.set(name);
        self.symbol.set(symbol);
        self.decimals.set(decimals);
        self.total_supply.set(U256::zero());
    }

    pub fn name(&self) -> String {
        self.name.get_or_default()
    }

    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    pub fn decimals(&self) -> u8 {
        self.decimals.get_or_default()
    }

    pub fn total_supply(&self) -> U256 {
        self.total_supply.get_or_default()
    }

    pub fn balance_of(&self, owner: Address) -> U256 {
        self.balances.get(&owner).unwrap_or_default()
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or_default()
    }

    /// Transfer tokens from the caller to `to`
    pub fn transfer(&mut self, to: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        self.transfer_internal(caller, to, amount);
        true
    }

    /// Set the caller's allowance for `spender`, replacing any previous value
    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        self.approve_internal(caller, spender, amount);
        true
    }

    /// Transfer tokens on behalf of `from`. The allowance is checked before the balance.
    pub fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool {
        let caller = self.env().caller();
        self.spend_allowance(from, caller, amount);
        self.transfer_internal(from, to, amount);
        true
    }

    pub fn increase_allowance(&mut self, spender: Address, by: U256) -> bool {
        let caller = self.env().caller();
        let new_allowance = self
            .allowance(caller, spender)
            .checked_add(by)
            .unwrap_or_revert_with(&self.env(), MathError::Overflow);
        self.approve_internal(caller, spender, new_allowance);
        true
    }

    pub fn decrease_allowance(&mut self, spender: Address, by: U256) -> bool {
        let caller = self.env().caller();
        let current = self.allowance(caller, spender);
        if current < by {
            self.env().revert(TokenError::InsufficientAllowance);
        }
        self.approve_internal(caller, spender, current - by);
        true
    }

    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(TokenError::InsufficientBalance);
        }

        self.balances.set(&from, from_balance - amount);
        let to_balance = self.balance_of(to);
        self.balances.set(&to, to_balance + amount);

        self.env().emit_event(Transfer {
            from: Some(from),
            to: Some(to),
            value: amount,
        });
    }

    fn approve_internal(&mut self, owner: Address, spender: Address, amount: U256) {
        self.allowances.set(&(owner, spender), amount);

        self.env().emit_event(Approval {
            owner,
            spender,
            value: amount,
        });
    }
}

impl FungibleToken {
    /// Create `amount` new tokens for `to`
    pub fn mint_to(&mut self, to: Address, amount: U256) {
        let new_supply = self
            .total_supply()
            .checked_add(amount)
            .unwrap_or_revert_with(&self.env(), MathError::Overflow);
        self.total_supply.set(new_supply);

        let current_balance = self.balance_of(to);
        self.balances.set(&to, current_balance + amount);

        self.env().emit_event(Transfer {
            from: None,
            to: Some(to),
            value: amount,
        });
    }

    /// Destroy `amount` tokens held by `from`
    pub fn burn_from(&mut self, from: Address, amount: U256) {
        let current_balance = self.balance_of(from);
        if current_balance < amount {
            self.env().revert(TokenError::InsufficientBalance);
        }

        self.balances.set(&from, current_balance - amount);
        let current_supply = self.total_supply();
        self.total_supply.set(current_supply - amount);

        self.env().emit_event(Transfer {
            from: Some(from),
            to: None,
            value: amount,
        });
    }

    /// Consume `amount` of the allowance `owner` gave to `spender`
    pub fn spend_allowance(&mut self, owner: Address, spender: Address, amount: U256) {
        let current_allowance = self.allowance(owner, spender);
        if current_allowance < amount {
            self.env().revert(TokenError::InsufficientAllowance);
        }
        self.approve_internal(owner, spender, current_allowance - amount);
    }
}

/// External token interface for interacting with CEP-18 tokens
#[odra::external_contract]
pub trait Cep18Token {
    /// Get the balance of an address
    fn balance_of(&self, owner: Address) -> U256;

    /// Transfer tokens
    fn transfer(&mut self, to: Address, amount: U256) -> bool;

    /// Transfer tokens from another address
    fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool;

    /// Approve a spender
    fn approve(&mut self, spender: Address, amount: U256) -> bool;

    /// Get allowance
    fn allowance(&self, owner: Address, spender: Address) -> U256;

    /// Get total supply
    fn total_supply(&self) -> U256;

    /// Get token decimals
    fn decimals(&self) -> u8;
}
