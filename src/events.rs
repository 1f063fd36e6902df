//! Events emitted by CEP-18 tokens
use odra::prelude::*;
use odra::casper_types::U256;

/// Event emitted when tokens move, are minted or are burned
#[odra::event]
pub struct Transfer {
    /// Sender, `None` when minting
    pub from: Option<Address>,
    /// Recipient, `None` when burning
    pub to: Option<Address>,
    /// Amount transferred
    pub value: U256,
}

/// Event emitted when an allowance is set
#[odra::event]
pub struct Approval {
    /// Owner address
    pub owner: Address,
    /// Spender address
    pub spender: Address,
    /// New allowance
    pub value: U256,
}
