//! Error types for vesting contracts
use odra::prelude::*;

/// Errors raised by [`crate::vesting::Vesting`]
#[odra::odra_error]
pub enum VestingError {
    /// Attached value does not match the vested amount
    InvalidAmountPaid = 400,
    /// Native amount does not fit into motes
    AmountTooLarge = 401,
    /// No pending schedule under this id
    ScheduleNotFound = 402,
}
