//! CEP-4626 vault over a single CEP-18 asset
//!
//! Shares are a CEP-18 token embedded in the vault, so the vault contract is
//! itself the share token. `total_assets` is the vault's live asset balance:
//! assets sent to the vault directly raise the share price for every holder.

use odra::prelude::*;
use odra::casper_types::U256;
use odra::ContractRef;
use super::errors::VaultError;
use super::events::{Deposit, Withdraw};
use crate::errors::MathError;
use crate::math::{self, Rounding};
use crate::token::{Cep18TokenContractRef, FungibleToken};

/// Tokenized vault with virtual-offset share accounting
#[odra::module]
pub struct Vault {
    /// Share token
    shares: SubModule<FungibleToken>,
    /// Underlying CEP-18 asset
    asset: Var<Address>,
    /// Extra share decimals over the asset decimals
    decimals_offset: Var<u8>,
    /// Global bound for `deposit` and `mint`, unbounded when `None`
    max_deposit_and_mint: Var<Option<U256>>,
}

#[odra::module]
impl Vault {
    /// Initialize the vault. Share decimals are the asset decimals plus `decimals_offset`.
    pub fn init(
        &mut self,
        asset: Address,
        decimals_offset: u8,
        name: String,
        symbol: String,
        max_deposit_and_mint: Option<U256>,
    ) {
        let asset_decimals = Cep18TokenContractRef::new(self.env(), asset).decimals();
        let decimals = asset_decimals
            .checked_add(decimals_offset)
            .unwrap_or_revert_with(&self.env(), MathError::Overflow);

        self.asset.set(asset);
        self.decimals_offset.set(decimals_offset);
        self.max_deposit_and_mint.set(max_deposit_and_mint);
        self.shares.init(name, symbol, decimals);
    }

    // ========================================
    // CEP-18 share token
    // ========================================

    pub fn name(&self) -> String {
        self.shares.name()
    }

    pub fn symbol(&self) -> String {
        self.shares.symbol()
    }

    pub fn decimals(&self) -> u8 {
        self.shares.decimals()
    }

    pub fn total_supply(&self) -> U256 {
        self.shares.total_supply()
    }

    pub fn balance_of(&self, owner: Address) -> U256 {
        self.shares.balance_of(owner)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.shares.allowance(owner, spender)
    }

    pub fn transfer(&mut self, to: Address, amount: U256) -> bool {
        self.shares.transfer(to, amount)
    }

    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        self.shares.approve(spender, amount)
    }

    pub fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool {
        self.shares.transfer_from(from, to, amount)
    }

    pub fn increase_allowance(&mut self, spender: Address, by: U256) -> bool {
        self.shares.increase_allowance(spender, by)
    }

    pub fn decrease_allowance(&mut self, spender: Address, by: U256) -> bool {
        self.shares.decrease_allowance(spender, by)
    }

    // ========================================
    // Vault accounting
    // ========================================

    /// Address of the underlying asset
    pub fn asset(&self) -> Address {
        self.asset.get_or_revert_with(VaultError::InvalidConfiguration)
    }

    pub fn decimals_offset(&self) -> u8 {
        self.decimals_offset.get_or_default()
    }

    /// Assets held by the vault, including direct donations
    pub fn total_assets(&self) -> U256 {
        let vault = self.env().self_address();
        Cep18TokenContractRef::new(self.env(), self.asset()).balance_of(vault)
    }

    /// Shares the vault would issue for `assets`, rounded down
    pub fn convert_to_shares(&self, assets: U256) -> U256 {
        self.to_shares(assets, Rounding::Down)
    }

    /// Assets the vault would pay for `shares`, rounded down
    pub fn convert_to_assets(&self, shares: U256) -> U256 {
        self.to_assets(shares, Rounding::Down)
    }

    pub fn max_deposit(&self, _receiver: Address) -> U256 {
        self.max_deposit_and_mint.get().flatten().unwrap_or(U256::MAX)
    }

    pub fn max_mint(&self, _receiver: Address) -> U256 {
        self.max_deposit_and_mint.get().flatten().unwrap_or(U256::MAX)
    }

    /// Assets `owner` could take out by burning its whole balance
    pub fn max_withdraw(&self, owner: Address) -> U256 {
        self.to_assets(self.balance_of(owner), Rounding::Down)
    }

    pub fn max_redeem(&self, owner: Address) -> U256 {
        self.balance_of(owner)
    }

    pub fn preview_deposit(&self, assets: U256) -> U256 {
        self.to_shares(assets, Rounding::Down)
    }

    /// Assets required to mint exactly `shares`, rounded up
    pub fn preview_mint(&self, shares: U256) -> U256 {
        self.to_assets(shares, Rounding::Up)
    }

    /// Shares burned to withdraw exactly `assets`, rounded up
    pub fn preview_withdraw(&self, assets: U256) -> U256 {
        self.to_shares(assets, Rounding::Up)
    }

    pub fn preview_redeem(&self, shares: U256) -> U256 {
        self.to_assets(shares, Rounding::Down)
    }

    // ========================================
    // Vault operations
    // ========================================

    /// Deposit `assets` from the caller and mint the shares to `receiver`.
    /// Requires the caller to have approved the vault on the asset token.
    pub fn deposit(&mut self, assets: U256, receiver: Address) -> U256 {
        if assets > self.max_deposit(receiver) {
            self.env().revert(VaultError::MaxDeposit);
        }
        let shares = self.preview_deposit(assets);
        self.deposit_internal(receiver, assets, shares);
        shares
    }

    /// Mint exactly `shares` to `receiver`, pulling the required assets from the caller
    pub fn mint(&mut self, shares: U256, receiver: Address) -> U256 {
        if shares > self.max_mint(receiver) {
            self.env().revert(VaultError::MaxMint);
        }
        let assets = self.preview_mint(shares);
        self.deposit_internal(receiver, assets, shares);
        assets
    }

    /// Send exactly `assets` to `receiver`, burning shares of `owner`.
    /// A caller other than `owner` spends its share allowance.
    pub fn withdraw(&mut self, assets: U256, receiver: Address, owner: Address) -> U256 {
        if assets > self.max_withdraw(owner) {
            self.env().revert(VaultError::MaxWithdraw);
        }
        let shares = self.preview_withdraw(assets);
        self.withdraw_internal(receiver, owner, assets, shares);
        shares
    }

    /// Burn exactly `shares` of `owner` and send the assets to `receiver`
    pub fn redeem(&mut self, shares: U256, receiver: Address, owner: Address) -> U256 {
        if shares > self.max_redeem(owner) {
            self.env().revert(VaultError::MaxRedeem);
        }
        let assets = self.preview_redeem(shares);
        self.withdraw_internal(receiver, owner, assets, shares);
        assets
    }
}

impl Vault {
    fn to_shares(&self, assets: U256, rounding: Rounding) -> U256 {
        math::convert_to_shares(
            assets,
            self.total_assets(),
            self.total_supply(),
            self.decimals_offset(),
            rounding,
        )
        .unwrap_or_revert(&self.env())
    }

    fn to_assets(&self, shares: U256, rounding: Rounding) -> U256 {
        math::convert_to_assets(
            shares,
            self.total_assets(),
            self.total_supply(),
            self.decimals_offset(),
            rounding,
        )
        .unwrap_or_revert(&self.env())
    }

    fn deposit_internal(&mut self, receiver: Address, assets: U256, shares: U256) {
        let caller = self.env().caller();
        let vault = self.env().self_address();
        Cep18TokenContractRef::new(self.env(), self.asset()).transfer_from(caller, vault, assets);
        self.shares.mint_to(receiver, shares);

        self.env().emit_event(Deposit {
            sender: caller,
            owner: receiver,
            assets,
            shares,
        });
    }

    fn withdraw_internal(&mut self, receiver: Address, owner: Address, assets: U256, shares: U256) {
        let caller = self.env().caller();
        if caller != owner {
            self.shares.spend_allowance(owner, caller, shares);
        }
        self.shares.burn_from(owner, shares);
        Cep18TokenContractRef::new(self.env(), self.asset()).transfer(receiver, assets);

        self.env().emit_event(Withdraw {
            sender: caller,
            receiver,
            owner,
            assets,
            shares,
        });
    }
}
