//! Role-based access control
//!
//! Roles are plain `u32` identifiers. Every role is administered by another
//! role, and [`DEFAULT_ADMIN_ROLE`] administers all roles until told otherwise.
use odra::prelude::*;
use super::errors::AccessControlError;
use super::events::{RoleAdminChanged, RoleGranted, RoleRevoked};

pub type Role = u32;

/// Admin of every role that has no explicit admin
pub const DEFAULT_ADMIN_ROLE: Role = 0;

#[odra::module]
pub struct AccessControl {
    /// (role, account) -> membership
    members: Mapping<(Role, Address), bool>,
    /// role -> admin role
    admins: Mapping<Role, Role>,
}

#[odra::module]
impl AccessControl {
    /// Grants [`DEFAULT_ADMIN_ROLE`] to `admin`
    pub fn init(&mut self, admin: Address) {
        self.grant(DEFAULT_ADMIN_ROLE, admin, None);
    }

    pub fn has_role(&self, role: Role, account: Address) -> bool {
        self.members.get(&(role, account)).unwrap_or_default()
    }

    pub fn get_role_admin(&self, role: Role) -> Role {
        self.admins.get(&role).unwrap_or(DEFAULT_ADMIN_ROLE)
    }

    /// Grant `role` to `account`. Caller must hold the admin role of `role`.
    pub fn grant_role(&mut self, role: Role, account: Address) {
        let caller = self.env().caller();
        self.assert_role(self.get_role_admin(role), caller);
        if self.has_role(role, account) {
            self.env().revert(AccessControlError::RoleRedundant);
        }
        self.grant(role, account, Some(caller));
    }

    /// Revoke `role` from `account`. Caller must hold the admin role of `role`.
    pub fn revoke_role(&mut self, role: Role, account: Address) {
        let caller = self.env().caller();
        self.assert_role(self.get_role_admin(role), caller);
        self.assert_role(role, account);
        self.revoke(role, account, caller);
    }

    /// Drop a role held by the caller. `account` must be the caller.
    pub fn renounce_role(&mut self, role: Role, account: Address) {
        let caller = self.env().caller();
        if caller != account {
            self.env().revert(AccessControlError::InvalidCaller);
        }
        self.assert_role(role, account);
        self.revoke(role, account, caller);
    }

    pub fn set_role_admin(&mut self, role: Role, new_admin: Role) {
        let previous = self.get_role_admin(role);
        self.assert_role(previous, self.env().caller());
        self.admins.set(&role, new_admin);
        self.env().emit_event(RoleAdminChanged {
            role,
            previous,
            new: new_admin,
        });
    }
}

impl AccessControl {
    /// Reverts with `MissingRole` unless `account` holds `role`
    pub fn assert_role(&self, role: Role, account: Address) {
        if !self.has_role(role, account) {
            self.env().revert(AccessControlError::MissingRole);
        }
    }

    /// Grant without checking the caller, for setting up roles in a constructor
    pub fn grant(&mut self, role: Role, account: Address, grantor: Option<Address>) {
        self.members.set(&(role, account), true);
        self.env().emit_event(RoleGranted {
            role,
            grantee: account,
            grantor,
        });
    }

    fn revoke(&mut self, role: Role, account: Address, sender: Address) {
        self.members.set(&(role, account), false);
        self.env().emit_event(RoleRevoked {
            role,
            account,
            sender,
        });
    }
}
