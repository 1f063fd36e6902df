//! Error types for access management

use odra::prelude::*;

#[odra::odra_error]
pub enum OwnableError {
    /// Caller is not the current owner
    CallerIsNotOwner = 200,
}

#[odra::odra_error]
pub enum AccessControlError {
    /// Caller may only act on its own account
    InvalidCaller = 210,
    /// Account does not hold the required role
    MissingRole = 211,
    /// Account already holds the role
    RoleRedundant = 212,
}
