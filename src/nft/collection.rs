use odra::prelude::*;
use odra::casper_types::U256;
use super::events::{Approval, Transfer};
use crate::access::Ownable;
use crate::errors::{MathError, NftError};

/// NFT collection with `U256` token ids
#[odra::module]
pub struct Nft {
    name: Var<String>,
    symbol: Var<String>,
    total_supply: Var<u64>,
    /// id -> owner, `None` after burning
    owners: Mapping<U256, Option<Address>>,
    /// owner -> number of tokens held
    balances: Mapping<Address, u32>,
    /// (owner, operator) -> approved for every token of owner
    operators: Mapping<(Address, Address), bool>,
    /// (id, operator) -> generation + 1 of the token when the approval was given
    token_approvals: Mapping<(U256, Address), u64>,
    /// id -> number of times the token moved; a move invalidates per-token approvals
    generations: Mapping<U256, u64>,
    ownable: SubModule<Ownable>,
}

#[odra::module]
impl Nft {
    pub fn init(&mut self, name: String, symbol: String) {
        self.name.set(name);
        self.symbol.set(symbol);
        self.total_supply.set(0);
        let caller = self.env().caller();
        self.ownable.init(caller);
    }

    pub fn name(&self) -> String {
        self.name.get_or_default()
    }

    pub fn symbol(&self) -> String {
        self.symbol.get_or_default()
    }

    pub fn total_supply(&self) -> u64 {
        self.total_supply.get_or_default()
    }

    pub fn balance_of(&self, owner: Address) -> u32 {
        self.balances.get(&owner).unwrap_or_default()
    }

    pub fn owner_of(&self, id: U256) -> Option<Address> {
        self.owners.get(&id).flatten()
    }

    /// Whether `operator` may move token `id` of `owner`, or every token of `owner` when `id` is `None`
    pub fn allowance(&self, owner: Address, operator: Address, id: Option<U256>) -> bool {
        if self.operators.get(&(owner, operator)).unwrap_or_default() {
            return true;
        }
        match id {
            Some(id) => {
                self.owner_of(id) == Some(owner)
                    && self.token_approvals.get(&(id, operator)).unwrap_or_default()
                        == self.generation(id) + 1
            }
            None => false,
        }
    }

    /// Approve or disapprove `operator` for one token of the caller, or for all of them
    pub fn approve(&mut self, operator: Address, id: Option<U256>, approved: bool) {
        let caller = self.env().caller();
        match id {
            Some(id) => {
                let owner = self
                    .owner_of(id)
                    .unwrap_or_revert_with(&self.env(), NftError::TokenNotExists);
                if owner == operator {
                    self.env().revert(NftError::SelfApprove);
                }
                if owner != caller {
                    self.env().revert(NftError::NotApproved);
                }
                let marker = if approved { self.generation(id) + 1 } else { 0 };
                self.token_approvals.set(&(id, operator), marker);
            }
            None => self.operators.set(&(caller, operator), approved),
        }

        self.env().emit_event(Approval {
            owner: caller,
            operator,
            id,
            approved,
        });
    }

    /// Move token `id` to `to`. Caller must own it or be approved for it.
    pub fn transfer(&mut self, to: Address, id: U256) {
        let owner = self
            .owner_of(id)
            .unwrap_or_revert_with(&self.env(), NftError::TokenNotExists);
        let caller = self.env().caller();
        if caller != owner && !self.allowance(owner, caller, Some(id)) {
            self.env().revert(NftError::NotApproved);
        }
        self.update(Some(owner), Some(to), id);
    }

    /// Mint token `id` to `to`. Collection owner only.
    pub fn mint(&mut self, to: Address, id: U256) {
        self.ownable.assert_owner();
        self.update(None, Some(to), id);
    }

    /// Burn token `id`. Caller must own it or be approved for it.
    pub fn burn(&mut self, id: U256) {
        let owner = self
            .owner_of(id)
            .unwrap_or_revert_with(&self.env(), NftError::TokenNotExists);
        let caller = self.env().caller();
        if caller != owner && !self.allowance(owner, caller, Some(id)) {
            self.env().revert(NftError::NotApproved);
        }
        self.update(Some(owner), None, id);
    }

    // ========================================
    // Ownership of the collection
    // ========================================

    pub fn owner(&self) -> Option<Address> {
        self.ownable.owner()
    }

    pub fn transfer_ownership(&mut self, new_owner: Address) {
        self.ownable.transfer_ownership(new_owner);
    }

    pub fn renounce_ownership(&mut self) {
        self.ownable.renounce_ownership();
    }
}

impl Nft {
    fn generation(&self, id: U256) -> u64 {
        self.generations.get(&id).unwrap_or_default()
    }

    fn update(&mut self, from: Option<Address>, to: Option<Address>, id: U256) {
        if let Some(from) = from {
            self.remove_token_owner(from, id);
        }
        if let Some(to) = to {
            self.insert_token_owner(to, id);
        }
        let generation = self.generation(id) + 1;
        self.generations.set(&id, generation);

        self.env().emit_event(Transfer { from, to, id });
    }

    fn insert_token_owner(&mut self, to: Address, id: U256) {
        if self.owner_of(id).is_some() {
            self.env().revert(NftError::TokenExists);
        }
        self.owners.set(&id, Some(to));

        let balance = self
            .balance_of(to)
            .checked_add(1)
            .unwrap_or_revert_with(&self.env(), MathError::Overflow);
        self.balances.set(&to, balance);

        let supply = self
            .total_supply()
            .checked_add(1)
            .unwrap_or_revert_with(&self.env(), MathError::Overflow);
        self.total_supply.set(supply);
    }

    fn remove_token_owner(&mut self, from: Address, id: U256) {
        match self.owner_of(id) {
            Some(owner) if owner != from => self.env().revert(NftError::NotApproved),
            Some(_) => {}
            None => self.env().revert(NftError::TokenNotExists),
        }
        self.owners.set(&id, None);
        let balance = self.balance_of(from);
        self.balances.set(&from, balance.saturating_sub(1));
        let supply = self.total_supply();
        self.total_supply.set(supply.saturating_sub(1));
    }
}
