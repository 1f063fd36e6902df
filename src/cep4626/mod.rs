//! CEP-4626: Tokenized Vault Standard for Casper
//!
//! A vault holds a single CEP-18 asset and issues CEP-18 shares for it.
//! Share prices come from [`crate::math`], which adds virtual liquidity to
//! every conversion and rounds each operation in the vault's favour.

pub mod vault;
pub mod events;
pub mod errors;

pub use vault::Vault;
pub use events::*;
pub use errors::VaultError;
