//! Error types for CEP-4626 vaults

use odra::prelude::*;

#[odra::odra_error]
pub enum VaultError {
    /// Deposit above `max_deposit`
    MaxDeposit = 300,
    /// Mint above `max_mint`
    MaxMint = 301,
    /// Withdraw above `max_withdraw`
    MaxWithdraw = 302,
    /// Redeem above `max_redeem`
    MaxRedeem = 303,
    /// Vault was not initialized with an asset
    InvalidConfiguration = 304,
}
