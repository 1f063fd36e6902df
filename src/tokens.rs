//! Deployable CEP-18 token with role-gated minting
//!
//! Used as the underlying asset for vaults and vesting, and as a faucet token
//! on test networks.
use odra::prelude::*;
use odra::casper_types::U256;
use crate::access::{AccessControl, Role};
use crate::token::FungibleToken;

/// Role allowed to mint new supply
pub const MINTER_ROLE: Role = 1;

#[odra::module]
pub struct MintableToken {
    token: SubModule<FungibleToken>,
    access: SubModule<AccessControl>,
}

#[odra::module]
impl MintableToken {
    /// The deployer becomes admin and minter
    pub fn init(&mut self, name: String, symbol: String, decimals: u8) {
        let caller = self.env().caller();
        self.token.init(name, symbol, decimals);
        self.access.init(caller);
        self.access.grant(MINTER_ROLE, caller, Some(caller));
    }

    pub fn name(&self) -> String { self.token.name() }
    pub fn symbol(&self) -> String { self.token.symbol() }
    pub fn decimals(&self) -> u8 { self.token.decimals() }
    pub fn total_supply(&self) -> U256 { self.token.total_supply() }
    pub fn balance_of(&self, owner: Address) -> U256 { self.token.balance_of(owner) }
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 { self.token.allowance(owner, spender) }

    pub fn transfer(&mut self, to: Address, amount: U256) -> bool {
        self.token.transfer(to, amount)
    }

    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        self.token.approve(spender, amount)
    }

    pub fn transfer_from(&mut self, from: Address, to: Address, amount: U256) -> bool {
        self.token.transfer_from(from, to, amount)
    }

    pub fn increase_allowance(&mut self, spender: Address, by: U256) -> bool {
        self.token.increase_allowance(spender, by)
    }

    pub fn decrease_allowance(&mut self, spender: Address, by: U256) -> bool {
        self.token.decrease_allowance(spender, by)
    }

    /// Mint new tokens. Requires [`MINTER_ROLE`].
    pub fn mint(&mut self, to: Address, amount: U256) {
        self.access.assert_role(MINTER_ROLE, self.env().caller());
        self.token.mint_to(to, amount);
    }

    /// Burn tokens held by the caller
    pub fn burn(&mut self, amount: U256) {
        let caller = self.env().caller();
        self.token.burn_from(caller, amount);
    }

    // ========================================
    // Role management
    // ========================================

    pub fn has_role(&self, role: Role, account: Address) -> bool {
        self.access.has_role(role, account)
    }

    pub fn get_role_admin(&self, role: Role) -> Role {
        self.access.get_role_admin(role)
    }

    pub fn grant_role(&mut self, role: Role, account: Address) {
        self.access.grant_role(role, account)
    }

    pub fn revoke_role(&mut self, role: Role, account: Address) {
        self.access.revoke_role(role, account)
    }

    pub fn renounce_role(&mut self, role: Role, account: Address) {
        self.access.renounce_role(role, account)
    }

    pub fn set_role_admin(&mut self, role: Role, new_admin: Role) {
        self.access.set_role_admin(role, new_admin)
    }
}
