//! Checked share/asset conversion math for tokenized vaults
//!
//! Every conversion adds virtual liquidity to both sides of the ratio: one unit
//! of assets and `10^offset` units of shares. This keeps an empty vault well
//! defined and makes donation-based share price manipulation unprofitable.
use odra::casper_types::U256;
use crate::errors::MathError;

/// Virtual assets added to the real total in every conversion
pub const VIRTUAL_ASSETS: u64 = 1;

/// Direction of the integer division remainder
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    /// Truncate towards zero
    Down,
    /// Round away from zero when there is a remainder
    Up,
}

/// Computes `x * y / denominator` with the given rounding, failing on overflow
pub fn mul_div(x: U256, y: U256, denominator: U256, rounding: Rounding) -> Result<U256, MathError> {
    if denominator.is_zero() {
        return Err(MathError::DivByZero);
    }
    let product = x.checked_mul(y).ok_or(MathError::Overflow)?;
    let quotient = product / denominator;
    match rounding {
        Rounding::Up if !(product % denominator).is_zero() => {
            quotient.checked_add(U256::one()).ok_or(MathError::Overflow)
        }
        _ => Ok(quotient),
    }
}

/// Virtual shares for a given decimals offset, `10^offset`
pub fn virtual_shares(decimals_offset: u8) -> Result<U256, MathError> {
    U256::from(10u8)
        .checked_pow(U256::from(decimals_offset))
        .ok_or(MathError::Overflow)
}

/// `assets * (total_supply + 10^offset) / (total_assets + 1)`
pub fn convert_to_shares(
    assets: U256,
    total_assets: U256,
    total_supply: U256,
    decimals_offset: u8,
    rounding: Rounding,
) -> Result<U256, MathError> {
    let effective_shares = total_supply
        .checked_add(virtual_shares(decimals_offset)?)
        .ok_or(MathError::Overflow)?;
    let effective_assets = total_assets
        .checked_add(U256::from(VIRTUAL_ASSETS))
        .ok_or(MathError::Overflow)?;
    mul_div(assets, effective_shares, effective_assets, rounding)
}

/// `shares * (total_assets + 1) / (total_supply + 10^offset)`
pub fn convert_to_assets(
    shares: U256,
    total_assets: U256,
    total_supply: U256,
    decimals_offset: u8,
    rounding: Rounding,
) -> Result<U256, MathError> {
    let effective_shares = total_supply
        .checked_add(virtual_shares(decimals_offset)?)
        .ok_or(MathError::Overflow)?;
    let effective_assets = total_assets
        .checked_add(U256::from(VIRTUAL_ASSETS))
        .ok_or(MathError::Overflow)?;
    mul_div(shares, effective_assets, effective_shares, rounding)
}
