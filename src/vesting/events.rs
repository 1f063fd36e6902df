//! Events for vesting contracts
use odra::prelude::*;
use odra::casper_types::U256;
use super::schedule::VestingSchedule;

/// Event emitted when a new vesting schedule is created
#[odra::event]
pub struct VestingScheduled {
    /// Account that funded the schedule
    pub creator: Address,
    /// Locked asset, `None` for native CSPR
    pub asset: Option<Address>,
    /// Account the tokens vest to
    pub receiver: Address,
    pub amount: U256,
    pub schedule: VestingSchedule,
}

/// Event emitted on every release, including empty ones
#[odra::event]
pub struct TokenReleased {
    /// Account that triggered the release
    pub caller: Address,
    /// Receiver of the released tokens
    pub to: Address,
    pub asset: Option<Address>,
    pub amount: U256,
}

/// Event emitted when a schedule provider changes its durations
#[odra::event]
pub struct DurationsChanged {
    pub waiting_duration: u64,
    pub vesting_duration: u64,
}
