//! Events for CEP-4626 Tokenized Vaults

use odra::prelude::*;
use odra::casper_types::U256;

/// Event emitted by `deposit` and `mint`
#[odra::event]
pub struct Deposit {
    /// Account that paid the assets
    pub sender: Address,
    /// Account credited with the shares
    pub owner: Address,
    /// Assets moved into the vault
    pub assets: U256,
    /// Shares minted
    pub shares: U256,
}

/// Event emitted by `withdraw` and `redeem`
#[odra::event]
pub struct Withdraw {
    /// Account that called the vault
    pub sender: Address,
    /// Account that received the assets
    pub receiver: Address,
    /// Account whose shares were burned
    pub owner: Address,
    /// Assets moved out of the vault
    pub assets: U256,
    /// Shares burned
    pub shares: U256,
}
