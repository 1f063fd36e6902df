//! Single-owner access control
use odra::prelude::*;
use super::errors::OwnableError;
use super::events::OwnershipTransferred;

/// Tracks one owner account. After renouncing, no one is the owner.
#[odra::module]
pub struct Ownable {
    owner: Var<Option<Address>>,
}

#[odra::module]
impl Ownable {
    pub fn init(&mut self, owner: Address) {
        self.set_owner(Some(owner));
    }

    /// Current owner, `None` once ownership was renounced
    pub fn owner(&self) -> Option<Address> {
        self.owner.get().flatten()
    }

    pub fn transfer_ownership(&mut self, new_owner: Address) {
        self.assert_owner();
        self.set_owner(Some(new_owner));
    }

    pub fn renounce_ownership(&mut self) {
        self.assert_owner();
        self.set_owner(None);
    }
}

impl Ownable {
    /// Reverts unless the caller is the owner
    pub fn assert_owner(&self) {
        if self.owner() != Some(self.env().caller()) {
            self.env().revert(OwnableError::CallerIsNotOwner);
        }
    }

    fn set_owner(&mut self, new: Option<Address>) {
        self.owner.set(new);
        self.env().emit_event(OwnershipTransferred { new });
    }
}
