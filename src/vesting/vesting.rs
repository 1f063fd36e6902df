//! Vesting release engine
//!
//! Vests are stored per `(receiver, asset)` under increasing ids. Ids below
//! the pending cursor are fully released, and finished vests above it are
//! hidden and skipped. Once every vest of a pair is released the pair starts
//! over at id 0.
use odra::prelude::*;
use odra::casper_types::{U256, U512};
use odra::ContractRef;
use super::errors::VestingError;
use super::events::{TokenReleased, VestingScheduled};
use super::provider::VestingTimeProviderContractRef;
use super::schedule::{self, VestingData, VestingSchedule};
use crate::errors::MathError;
use crate::token::Cep18TokenContractRef;

/// Holds native CSPR and CEP-18 tokens until their schedules release them
#[odra::module]
pub struct Vesting {
    /// (receiver, asset, id) -> vest
    schedules: Mapping<(Address, Option<Address>, u32), VestingData>,
    /// Id the next vest of a pair gets
    next_ids: Mapping<(Address, Option<Address>), u32>,
    /// Lowest id of a pair that is not fully released
    first_pending: Mapping<(Address, Option<Address>), u32>,
}

#[odra::module]
impl Vesting {
    /// Lock `amount` of `asset` for `receiver` and return the vest id.
    ///
    /// Native vests (`asset = None`) must attach exactly `amount` motes. Token
    /// vests attach nothing and pull `amount` from the caller, which needs an
    /// allowance for this contract.
    #[odra(payable)]
    pub fn create_vest(
        &mut self,
        receiver: Address,
        asset: Option<Address>,
        amount: U256,
        schedule: VestingSchedule,
    ) -> u32 {
        let caller = self.env().caller();
        let attached = self.env().attached_value();
        match asset {
            None => {
                if attached != self.to_motes(amount) {
                    self.env().revert(VestingError::InvalidAmountPaid);
                }
            }
            Some(token) => {
                if !attached.is_zero() {
                    self.env().revert(VestingError::InvalidAmountPaid);
                }
                let vesting = self.env().self_address();
                Cep18TokenContractRef::new(self.env(), token).transfer_from(caller, vesting, amount);
            }
        }

        // reject a provider that cannot answer before it sits in a queue
        self.durations(&schedule);

        let key = (receiver, asset);
        let id = self.next_id_vest_of(receiver, asset);
        let next_id = id
            .checked_add(1)
            .unwrap_or_revert_with(&self.env(), MathError::Overflow);
        self.schedules.set(
            &(receiver, asset, id),
            VestingData {
                creation_time: self.env().get_block_time(),
                schedule: schedule.clone(),
                amount,
                released: U256::zero(),
            },
        );
        self.next_ids.set(&key, next_id);

        self.env().emit_event(VestingScheduled {
            creator: caller,
            asset,
            receiver,
            amount,
            schedule,
        });
        id
    }

    /// Release everything vested so far to `receiver`. Anyone may call it.
    pub fn release(&mut self, receiver: Address, asset: Option<Address>) -> U256 {
        let (first, next) = self.pending_range(receiver, asset);
        let mut total = U256::zero();
        for id in first..next {
            let amount = self.collect(receiver, asset, id);
            total = total
                .checked_add(amount)
                .unwrap_or_revert_with(&self.env(), MathError::Overflow);
        }
        self.advance_cursor(receiver, asset);
        self.pay_out(receiver, asset, total);
        total
    }

    /// Release a single pending vest
    pub fn release_by_vest_id(&mut self, receiver: Address, asset: Option<Address>, id: u32) -> U256 {
        if self.vesting_schedule_of(receiver, asset, id).is_none() {
            self.env().revert(VestingError::ScheduleNotFound);
        }
        let amount = self.collect(receiver, asset, id);
        self.advance_cursor(receiver, asset);
        self.pay_out(receiver, asset, amount);
        amount
    }

    /// Amount [`Vesting::release`] would pay out right now
    pub fn releasable_amount(&self, receiver: Address, asset: Option<Address>) -> U256 {
        let (first, next) = self.pending_range(receiver, asset);
        let mut total = U256::zero();
        for id in first..next {
            if let Some(data) = self.vesting_schedule_of(receiver, asset, id) {
                total = total
                    .checked_add(self.releasable(&data))
                    .unwrap_or_revert_with(&self.env(), MathError::Overflow);
            }
        }
        total
    }

    /// Vest under `id`, `None` once it is fully released
    pub fn vesting_schedule_of(
        &self,
        receiver: Address,
        asset: Option<Address>,
        id: u32,
    ) -> Option<VestingData> {
        let (first, next) = self.pending_range(receiver, asset);
        if id < first || id >= next {
            return None;
        }
        self.schedules
            .get(&(receiver, asset, id))
            .filter(|data| !data.is_completed())
    }

    /// Id the next vest for the pair will get
    pub fn next_id_vest_of(&self, receiver: Address, asset: Option<Address>) -> u32 {
        self.next_ids.get(&(receiver, asset)).unwrap_or_default()
    }
}

impl Vesting {
    fn pending_range(&self, receiver: Address, asset: Option<Address>) -> (u32, u32) {
        let first = self.first_pending.get(&(receiver, asset)).unwrap_or_default();
        (first, self.next_id_vest_of(receiver, asset))
    }

    fn durations(&self, schedule: &VestingSchedule) -> (u64, u64) {
        match schedule {
            VestingSchedule::Constant(waiting, vesting) => (*waiting, *vesting),
            VestingSchedule::External(provider) => {
                VestingTimeProviderContractRef::new(self.env(), *provider).waiting_and_vesting_durations()
            }
        }
    }

    fn releasable(&self, data: &VestingData) -> U256 {
        let (waiting, vesting) = self.durations(&data.schedule);
        schedule::releasable_at(data, waiting, vesting, self.env().get_block_time())
            .unwrap_or_revert(&self.env())
    }

    /// Marks the releasable part of one vest as released and returns it.
    /// Finished vests are skipped without consulting their schedule.
    fn collect(&mut self, receiver: Address, asset: Option<Address>, id: u32) -> U256 {
        let Some(mut data) = self.vesting_schedule_of(receiver, asset, id) else {
            return U256::zero();
        };
        let amount = self.releasable(&data);
        data.released = data
            .released
            .checked_add(amount)
            .unwrap_or_revert_with(&self.env(), MathError::Overflow);
        self.schedules.set(&(receiver, asset, id), data);
        amount
    }

    /// Moves the cursor past fully released vests at the front of the queue
    fn advance_cursor(&mut self, receiver: Address, asset: Option<Address>) {
        let key = (receiver, asset);
        let (mut first, next) = self.pending_range(receiver, asset);
        while first < next {
            match self.schedules.get(&(receiver, asset, first)) {
                Some(data) if !data.is_completed() => break,
                _ => first += 1,
            }
        }
        if first == next {
            self.first_pending.set(&key, 0);
            self.next_ids.set(&key, 0);
        } else {
            self.first_pending.set(&key, first);
        }
    }

    fn pay_out(&mut self, to: Address, asset: Option<Address>, amount: U256) {
        match asset {
            None => {
                if !amount.is_zero() {
                    let motes = self.to_motes(amount);
                    self.env().transfer_tokens(&to, &motes);
                }
            }
            Some(token) => {
                Cep18TokenContractRef::new(self.env(), token).transfer(to, amount);
            }
        }

        self.env().emit_event(TokenReleased {
            caller: self.env().caller(),
            to,
            asset,
            amount,
        });
    }

    fn to_motes(&self, amount: U256) -> U512 {
        if amount > U256::from(u128::MAX) {
            self.env().revert(VestingError::AmountTooLarge);
        }
        U512::from(amount.as_u128())
    }
}
