//! Events for access management

use odra::prelude::*;

/// Ownership moved to `new`, or was renounced when `new` is `None`
#[odra::event]
pub struct OwnershipTransferred {
    pub new: Option<Address>,
}

/// Event emitted when a role is granted
#[odra::event]
pub struct RoleGranted {
    /// Role identifier
    pub role: u32,
    /// Account receiving the role
    pub grantee: Address,
    /// Account granting the role, `None` at initialization
    pub grantor: Option<Address>,
}

/// Event emitted when a role is revoked or renounced
#[odra::event]
pub struct RoleRevoked {
    /// Role identifier
    pub role: u32,
    /// Account losing the role
    pub account: Address,
    /// Account that performed the revocation
    pub sender: Address,
}

/// Event emitted when the admin role of `role` changes
#[odra::event]
pub struct RoleAdminChanged {
    pub role: u32,
    pub previous: u32,
    pub new: u32,
}
