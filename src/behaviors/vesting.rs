//! Vesting behavior
//!
//! Account 1 funds vests, account 3 receives them and the other accounts
//! trigger releases. Durations double as amounts, so one unit vests per
//! millisecond.
use odra::casper_types::{U256, U512};
use odra::host::{Deployer, HostEnv, HostRef, NoArgs};
use odra::prelude::*;
use crate::errors::TokenError;
use crate::events::Transfer;
use crate::tokens::{MintableToken, MintableTokenHostRef, MintableTokenInitArgs};
use crate::vesting::provider::ScheduleProviderInitArgs;
use crate::vesting::vesting::VestingHostRef;
use crate::vesting::{
    ScheduleProvider, TokenReleased, Vesting, VestingData, VestingError, VestingSchedule,
    VestingScheduled,
};

const DAY: u64 = 86_400_000;

pub fn days(n: u64) -> u64 {
    n * DAY
}

pub struct VestingFixture {
    pub env: HostEnv,
    pub vesting: VestingHostRef,
    pub asset: MintableTokenHostRef,
    pub vesting_address: Address,
    pub asset_address: Address,
    pub creator: Address,
    pub receiver: Address,
}

/// Deploys a vesting contract and a token asset, both by account 0
pub fn setup() -> VestingFixture {
    let env = odra_test::env();
    env.set_caller(env.get_account(0));
    let asset = MintableToken::deploy(
        &env,
        MintableTokenInitArgs {
            name: String::from("Vested Token"),
            symbol: String::from("VST"),
            decimals: 18,
        },
    );
    let vesting = Vesting::deploy(&env, NoArgs);
    VestingFixture {
        asset_address: asset.address().clone(),
        vesting_address: vesting.address().clone(),
        creator: env.get_account(1),
        receiver: env.get_account(3),
        env,
        vesting,
        asset,
    }
}

impl VestingFixture {
    /// Mint `amount` to the creator and let the vesting contract pull it
    pub fn fund(&mut self, amount: U256) {
        self.env.set_caller(self.env.get_account(0));
        self.asset.mint(self.creator, amount);
        self.env.set_caller(self.creator);
        self.asset.approve(self.vesting_address, amount);
    }

    /// Create a token vest for the receiver, funded by the creator
    pub fn vest_tokens(&mut self, amount: U256, schedule: VestingSchedule) -> u32 {
        self.fund(amount);
        self.vesting
            .create_vest(self.receiver, Some(self.asset_address), amount, schedule)
    }

    /// Create a native vest for the receiver, paid by `payer`
    pub fn vest_native(&mut self, payer: Address, amount: u64, schedule: VestingSchedule) -> u32 {
        self.env.set_caller(payer);
        self.vesting
            .with_tokens(U512::from(amount))
            .create_vest(self.receiver, None, U256::from(amount), schedule)
    }

    pub fn time_to(&self, target: u64) {
        let now = self.env.block_time();
        assert!(target >= now, "cannot move time backwards");
        self.env.advance_block_time(target - now);
    }

    fn release_as(&mut self, caller: Address, asset: Option<Address>) -> U256 {
        self.env.set_caller(caller);
        self.vesting.release(self.receiver, asset)
    }

    fn expect_token_release(&self, caller: Address, amount: U256) {
        assert!(self.env.emitted_event(
            &self.asset,
            Transfer { from: Some(self.vesting_address), to: Some(self.receiver), value: amount }
        ));
        assert!(self.env.emitted_event(
            &self.vesting,
            TokenReleased { caller, to: self.receiver, asset: Some(self.asset_address), amount }
        ));
    }

    fn expect_native_release(&self, caller: Address, amount: U256) {
        assert!(self.env.emitted_event(
            &self.vesting,
            TokenReleased { caller, to: self.receiver, asset: None, amount }
        ));
    }
}

pub fn token_creation_failures(f: &mut VestingFixture) {
    let amount = U256::from(100);
    let schedule = VestingSchedule::Constant(0, 100);
    let asset = Some(f.asset_address);

    f.env.set_caller(f.creator);
    assert_eq!(
        f.vesting.try_create_vest(f.receiver, asset, amount, schedule.clone()),
        Err(TokenError::InsufficientAllowance.into())
    );

    f.asset.increase_allowance(f.vesting_address, amount);
    assert_eq!(
        f.vesting.try_create_vest(f.receiver, asset, amount, schedule.clone()),
        Err(TokenError::InsufficientBalance.into())
    );

    // token vests take no native value
    f.fund(amount);
    assert_eq!(
        f.vesting
            .with_tokens(U512::one())
            .try_create_vest(f.receiver, asset, amount, schedule),
        Err(VestingError::InvalidAmountPaid.into())
    );
    assert_eq!(f.vesting.next_id_vest_of(f.receiver, asset), 0);
    assert_eq!(f.asset.balance_of(f.vesting_address), U256::zero());
}

pub fn token_creation(f: &mut VestingFixture) {
    let amount = U256::from(100);
    let schedule = VestingSchedule::Constant(0, 100);
    let asset = Some(f.asset_address);

    let id = f.vest_tokens(amount, schedule.clone());
    assert_eq!(id, 0);
    assert_eq!(f.asset.balance_of(f.creator), U256::zero());
    assert_eq!(f.asset.balance_of(f.vesting_address), amount);
    assert!(f.env.emitted_event(
        &f.asset,
        Transfer { from: Some(f.creator), to: Some(f.vesting_address), value: amount }
    ));
    assert!(f.env.emitted_event(
        &f.vesting,
        VestingScheduled {
            creator: f.creator,
            asset,
            receiver: f.receiver,
            amount,
            schedule: schedule.clone(),
        }
    ));
    assert_eq!(
        f.vesting.vesting_schedule_of(f.receiver, asset, 0),
        Some(VestingData {
            creation_time: f.env.block_time(),
            schedule,
            amount,
            released: U256::zero(),
        })
    );
    assert_eq!(f.vesting.vesting_schedule_of(f.receiver, asset, 1), None);
    assert_eq!(f.vesting.next_id_vest_of(f.receiver, asset), 1);
    // queues are kept per asset
    assert_eq!(f.vesting.next_id_vest_of(f.receiver, None), 0);
}

pub fn native_creation(f: &mut VestingFixture) {
    let amount = 10_000_000u64;
    let schedule = VestingSchedule::Constant(0, amount);
    let creator = f.creator;
    f.env.set_caller(creator);

    for paid in [amount - 1, amount + 1] {
        assert_eq!(
            f.vesting.with_tokens(U512::from(paid)).try_create_vest(
                f.receiver,
                None,
                U256::from(amount),
                schedule.clone()
            ),
            Err(VestingError::InvalidAmountPaid.into())
        );
    }
    assert_eq!(
        f.vesting.try_create_vest(
            f.receiver,
            None,
            U256::from(u128::MAX) + U256::one(),
            schedule.clone()
        ),
        Err(VestingError::AmountTooLarge.into())
    );
    assert_eq!(f.env.balance_of(&f.vesting_address), U512::zero());

    assert_eq!(f.vest_native(creator, amount, schedule.clone()), 0);
    assert_eq!(f.env.balance_of(&f.vesting_address), U512::from(amount));
    assert!(f.env.emitted_event(
        &f.vesting,
        VestingScheduled {
            creator,
            asset: None,
            receiver: f.receiver,
            amount: U256::from(amount),
            schedule,
        }
    ));
    assert_eq!(f.vesting.next_id_vest_of(f.receiver, None), 1);
}

/// Three days of waiting, then six days of linear release
pub fn partial_release(f: &mut VestingFixture) {
    let amount = days(6);
    let schedule = VestingSchedule::Constant(days(3), days(6));
    let asset = Some(f.asset_address);
    let bob = f.env.get_account(2);

    f.vest_tokens(U256::from(amount), schedule.clone());
    let created = f.env.block_time();
    let start = created + days(3);

    f.time_to(start - 1);
    assert_eq!(f.vesting.releasable_amount(f.receiver, asset), U256::zero());
    assert_eq!(f.release_as(bob, asset), U256::zero());
    f.expect_token_release(bob, U256::zero());
    assert_eq!(f.asset.balance_of(f.receiver), U256::zero());

    f.time_to(start + 2);
    assert_eq!(f.release_as(bob, asset), U256::one());
    f.expect_token_release(bob, U256::one());
    assert_eq!(
        f.vesting.vesting_schedule_of(f.receiver, asset, 0),
        Some(VestingData {
            creation_time: created,
            schedule: schedule.clone(),
            amount: U256::from(amount),
            released: U256::one(),
        })
    );

    f.time_to(start + 2 + days(1));
    assert_eq!(f.vesting.releasable_amount(f.receiver, asset), U256::from(days(1)));
    assert_eq!(f.release_as(bob, asset), U256::from(days(1)));
    f.expect_token_release(bob, U256::from(days(1)));
    assert_eq!(f.asset.balance_of(bob), U256::zero());
    assert_eq!(
        f.vesting.vesting_schedule_of(f.receiver, asset, 0).map(|v| v.released),
        Some(U256::from(1 + days(1)))
    );

    f.time_to(start + days(6) + 1);
    let rest = U256::from(amount - 1 - days(1));
    assert_eq!(f.release_as(bob, asset), rest);
    f.expect_token_release(bob, rest);
    assert_eq!(f.vesting.vesting_schedule_of(f.receiver, asset, 0), None);
    assert_eq!(f.vesting.next_id_vest_of(f.receiver, asset), 0);
    assert_eq!(f.asset.balance_of(f.receiver), U256::from(amount));
    assert_eq!(f.asset.balance_of(f.vesting_address), U256::zero());
}

pub fn permissionless_release(f: &mut VestingFixture) {
    let amount = U256::from(100);
    let asset = Some(f.asset_address);
    let receiver = f.receiver;
    let [alice, bob] = [f.env.get_account(1), f.env.get_account(2)];

    f.vest_tokens(amount, VestingSchedule::Constant(0, 100));
    f.vest_native(alice, 10_000_000, VestingSchedule::Constant(0, 10_000_000));
    f.time_to(f.env.block_time() + 10_000_001);

    let receiver_before = f.env.balance_of(&receiver);
    assert_eq!(f.release_as(bob, asset), amount);
    f.expect_token_release(bob, amount);
    assert_eq!(f.asset.balance_of(receiver), amount);

    assert_eq!(f.release_as(bob, None), U256::from(10_000_000));
    f.expect_native_release(bob, U256::from(10_000_000));
    assert_eq!(f.env.balance_of(&receiver), receiver_before + U512::from(10_000_000));
    assert_eq!(f.env.balance_of(&f.vesting_address), U512::zero());

    // nothing left, but every caller still gets an empty release
    for caller in [receiver, alice, bob] {
        assert_eq!(f.release_as(caller, asset), U256::zero());
        f.expect_token_release(caller, U256::zero());
        assert_eq!(f.release_as(caller, None), U256::zero());
        f.expect_native_release(caller, U256::zero());
    }
}

pub fn release_by_vest_id(f: &mut VestingFixture) {
    let asset = Some(f.asset_address);
    let bob = f.env.get_account(2);

    assert_eq!(f.vest_tokens(U256::from(100), VestingSchedule::Constant(0, days(10))), 0);
    assert_eq!(f.vest_tokens(U256::from(50), VestingSchedule::Constant(0, 0)), 1);
    f.time_to(f.env.block_time() + 1);

    f.env.set_caller(bob);
    assert_eq!(
        f.vesting.try_release_by_vest_id(f.receiver, asset, 2),
        Err(VestingError::ScheduleNotFound.into())
    );
    assert_eq!(f.vesting.release_by_vest_id(f.receiver, asset, 1), U256::from(50));
    f.expect_token_release(bob, U256::from(50));
    // a finished vest is gone even while an earlier one is pending
    assert_eq!(f.vesting.vesting_schedule_of(f.receiver, asset, 1), None);
    assert_eq!(
        f.vesting.try_release_by_vest_id(f.receiver, asset, 1),
        Err(VestingError::ScheduleNotFound.into())
    );
    assert_eq!(f.vesting.releasable_amount(f.receiver, asset), U256::zero());
    assert_eq!(f.vesting.next_id_vest_of(f.receiver, asset), 2);

    f.time_to(f.env.block_time() + days(10));
    assert_eq!(f.vesting.release_by_vest_id(f.receiver, asset, 0), U256::from(100));
    assert_eq!(f.vesting.next_id_vest_of(f.receiver, asset), 0);
    assert_eq!(f.vesting.vesting_schedule_of(f.receiver, asset, 1), None);
    assert_eq!(
        f.vesting.try_release_by_vest_id(f.receiver, asset, 0),
        Err(VestingError::ScheduleNotFound.into())
    );
    assert_eq!(f.asset.balance_of(f.receiver), U256::from(150));
}

/// Vests that third parties add to a queue cannot stop its releases
pub fn foreign_vests_do_not_block_release(f: &mut VestingFixture) {
    let stranger = f.env.get_account(5);
    let amount = 10_000_000u64;

    assert_eq!(f.vest_native(f.creator, amount, VestingSchedule::Constant(0, amount)), 0);
    assert_eq!(f.vest_native(stranger, 0, VestingSchedule::Constant(u64::MAX, 0)), 1);
    assert_eq!(f.vest_native(stranger, 1, VestingSchedule::Constant(u64::MAX, u64::MAX)), 2);
    f.time_to(f.env.block_time() + amount + 1);

    assert_eq!(f.vesting.releasable_amount(f.receiver, None), U256::from(amount));
    assert_eq!(f.release_as(stranger, None), U256::from(amount));
    f.expect_native_release(stranger, U256::from(amount));
    assert_eq!(f.vesting.vesting_schedule_of(f.receiver, None, 0), None);
    assert_eq!(f.vesting.vesting_schedule_of(f.receiver, None, 1), None);
    assert!(f.vesting.vesting_schedule_of(f.receiver, None, 2).is_some());
    assert_eq!(f.release_as(f.receiver, None), U256::zero());

    // a provider that cannot answer never enters the queue
    f.env.set_caller(stranger);
    assert!(f
        .vesting
        .try_create_vest(f.receiver, None, U256::zero(), VestingSchedule::External(f.asset_address))
        .is_err());
    assert_eq!(f.vesting.next_id_vest_of(f.receiver, None), 3);
}

/// Five native vests at different stages, released by a third party
pub fn multiple_native_schedules(f: &mut VestingFixture) {
    let funder = f.env.get_account(2);
    let releaser = f.env.get_account(4);
    let base = f.env.block_time();
    let created = base + days(1);
    let first_action = base + days(365);
    // (waiting, vesting) relative to `created`; amounts equal the vesting duration
    let schedules = [
        (days(365 - 9 - 1), days(6)),  // overdue at the first action
        (days(365 - 6 - 1), days(9)),  // running at the first action
        (days(365 + 1 - 1), days(5)),  // not started
        (days(365 + 3 - 1), days(6)),  // not started
        (days(365 + 18 - 1), days(46)), // not started
    ];
    let total: u64 = schedules.iter().map(|(_, vesting)| vesting).sum();
    let receiver_before = f.env.balance_of(&f.receiver);

    f.time_to(created);
    for (waiting, vesting) in schedules {
        f.vest_native(funder, vesting, VestingSchedule::Constant(waiting, vesting));
    }
    f.time_to(first_action);

    assert_eq!(f.vesting.releasable_amount(f.receiver, None), U256::from(days(12) - 1));
    assert_eq!(f.vesting.next_id_vest_of(f.receiver, None), 5);
    assert_eq!(f.vesting.vesting_schedule_of(f.receiver, None, 5), None);
    for (id, (waiting, vesting)) in schedules.into_iter().enumerate() {
        assert_eq!(
            f.vesting.vesting_schedule_of(f.receiver, None, id as u32),
            Some(VestingData {
                creation_time: created,
                schedule: VestingSchedule::Constant(waiting, vesting),
                amount: U256::from(vesting),
                released: U256::zero(),
            })
        );
    }
    assert_eq!(f.release_as(releaser, None), U256::from(days(12) - 1));
    f.expect_native_release(releaser, U256::from(days(12) - 1));
    assert_eq!(f.vesting.vesting_schedule_of(f.receiver, None, 0), None);

    // one day after the second vest ended
    let (waiting, vesting) = schedules[1];
    f.time_to(created + waiting + vesting + days(1));
    assert_eq!(f.release_as(releaser, None), U256::from(days(7) - 1));
    f.expect_native_release(releaser, U256::from(days(7) - 1));
    assert_eq!(f.vesting.next_id_vest_of(f.receiver, None), 5);
    assert_eq!(f.vesting.vesting_schedule_of(f.receiver, None, 1), None);
    for id in 2..5 {
        assert!(f.vesting.vesting_schedule_of(f.receiver, None, id).is_some());
    }

    // past the last end
    let (waiting, vesting) = schedules[4];
    f.time_to(created + waiting + vesting + 1);
    assert_eq!(f.release_as(releaser, None), U256::from(days(53) + 2));
    f.expect_native_release(releaser, U256::from(days(53) + 2));
    for id in 0..5 {
        assert_eq!(f.vesting.vesting_schedule_of(f.receiver, None, id), None);
    }
    assert_eq!(f.vesting.next_id_vest_of(f.receiver, None), 0);
    assert_eq!(f.release_as(releaser, None), U256::zero());
    assert_eq!(f.env.balance_of(&f.vesting_address), U512::zero());
    assert_eq!(f.env.balance_of(&f.receiver), receiver_before + U512::from(total));
}

/// Durations read from a provider follow its updates
pub fn external_schedule(f: &mut VestingFixture) {
    let amount = days(10);
    let owner = f.env.get_account(0);
    f.env.set_caller(owner);
    let mut provider = ScheduleProvider::deploy(
        &f.env,
        ScheduleProviderInitArgs { waiting_duration: 0, vesting_duration: days(10) },
    );
    let schedule = VestingSchedule::External(provider.address().clone());

    f.vest_native(f.creator, amount, schedule.clone());
    assert!(f.env.emitted_event(
        &f.vesting,
        VestingScheduled {
            creator: f.creator,
            asset: None,
            receiver: f.receiver,
            amount: U256::from(amount),
            schedule,
        }
    ));

    f.time_to(f.env.block_time() + days(5));
    assert_eq!(f.vesting.releasable_amount(f.receiver, None), U256::from(days(5) - 1));

    f.env.set_caller(owner);
    provider.set_durations(0, days(4));
    assert_eq!(f.vesting.releasable_amount(f.receiver, None), U256::from(amount));

    provider.set_durations(days(30), days(1));
    assert_eq!(f.vesting.releasable_amount(f.receiver, None), U256::zero());
    assert_eq!(f.release_as(owner, None), U256::zero());

    provider.set_durations(0, 0);
    assert_eq!(f.release_as(owner, None), U256::from(amount));
    assert_eq!(f.vesting.next_id_vest_of(f.receiver, None), 0);
}
