//! Vesting schedules and the linear release curve
//!
//! A schedule starts `waiting_duration` milliseconds after the vest was created
//! and releases linearly over the following `vesting_duration` milliseconds.
//! Durations are either fixed at creation or read from a
//! [`super::provider::VestingTimeProvider`] every time the vest is evaluated.
use odra::prelude::*;
use odra::casper_types::U256;
use crate::errors::MathError;

/// Timing of a vest
#[odra::odra_type]
pub enum VestingSchedule {
    /// `(waiting_duration, vesting_duration)` fixed at creation, in ms
    Constant(u64, u64),
    /// Both durations read from a [`super::provider::VestingTimeProvider`] on every evaluation
    External(Address),
}

/// A single vest
#[odra::odra_type]
pub struct VestingData {
    /// Block time of creation, in ms
    pub creation_time: u64,
    pub schedule: VestingSchedule,
    /// Total amount locked
    pub amount: U256,
    /// Amount already paid out
    pub released: U256,
}

impl VestingData {
    /// Whether nothing is left to release
    pub fn is_completed(&self) -> bool {
        self.released >= self.amount
    }
}

/// Amount of `data` that can be released at `now` for the given durations.
///
/// The linear part holds back one unit until the schedule ends. Times saturate
/// at `u64::MAX`.
pub fn releasable_at(
    data: &VestingData,
    waiting_duration: u64,
    vesting_duration: u64,
    now: u64,
) -> Result<U256, MathError> {
    // a schedule ending past the clock range simply never ends
    let start = data.creation_time.saturating_add(waiting_duration);
    let end = start.saturating_add(vesting_duration);
    let remaining = data.amount.checked_sub(data.released).ok_or(MathError::Underflow)?;

    if now >= end {
        return Ok(remaining);
    }
    if now <= start {
        return Ok(U256::zero());
    }

    let vested = data
        .amount
        .checked_mul(U256::from(now - start))
        .ok_or(MathError::Overflow)?
        / U256::from(end - start);
    Ok(vested.saturating_sub(U256::one()).saturating_sub(data.released))
}
