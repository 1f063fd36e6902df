//! General vesting
//!
//! Locks native CSPR or CEP-18 tokens for a receiver and releases them linearly
//! over a schedule. Schedules for the same `(receiver, asset)` pair form a
//! queue that anyone may release.

pub mod vesting;
pub mod schedule;
pub mod provider;
pub mod events;
pub mod errors;

pub use vesting::Vesting;
pub use schedule::{VestingData, VestingSchedule};
pub use provider::{ScheduleProvider, VestingTimeProviderContractRef};
pub use events::*;
pub use errors::VestingError;
