//! Externally supplied vesting durations
use odra::prelude::*;
use crate::access::Ownable;
use super::events::DurationsChanged;

/// Interface read by external vesting schedules
#[odra::external_contract]
pub trait VestingTimeProvider {
    /// `(waiting_duration, vesting_duration)` in milliseconds
    fn waiting_and_vesting_durations(&self) -> (u64, u64);
}

/// Owner-configured [`VestingTimeProvider`].
///
/// Changing the durations moves every external schedule that points here,
/// including ones that already started.
#[odra::module]
pub struct ScheduleProvider {
    waiting_duration: Var<u64>,
    vesting_duration: Var<u64>,
    ownable: SubModule<Ownable>,
}

#[odra::module]
impl ScheduleProvider {
    pub fn init(&mut self, waiting_duration: u64, vesting_duration: u64) {
        let caller = self.env().caller();
        self.ownable.init(caller);
        self.store(waiting_duration, vesting_duration);
    }

    pub fn waiting_and_vesting_durations(&self) -> (u64, u64) {
        (
            self.waiting_duration.get_or_default(),
            self.vesting_duration.get_or_default(),
        )
    }

    /// Replace both durations. Owner only.
    pub fn set_durations(&mut self, waiting_duration: u64, vesting_duration: u64) {
        self.ownable.assert_owner();
        self.store(waiting_duration, vesting_duration);
    }

    pub fn owner(&self) -> Option<Address> {
        self.ownable.owner()
    }

    pub fn transfer_ownership(&mut self, new_owner: Address) {
        self.ownable.transfer_ownership(new_owner)
    }

    pub fn renounce_ownership(&mut self) {
        self.ownable.renounce_ownership()
    }
}

impl ScheduleProvider {
    fn store(&mut self, waiting_duration: u64, vesting_duration: u64) {
        self.waiting_duration.set(waiting_duration);
        self.vesting_duration.set(vesting_duration);
        self.env().emit_event(DurationsChanged { waiting_duration, vesting_duration });
    }
}
