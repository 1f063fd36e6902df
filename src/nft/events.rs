//! Events for the NFT collection

use odra::prelude::*;
use odra::casper_types::U256;

/// Event emitted when a token changes hands, is minted or is burned
#[odra::event]
pub struct Transfer {
    /// Previous owner, `None` when minting
    pub from: Option<Address>,
    /// New owner, `None` when burning
    pub to: Option<Address>,
    /// Token id
    pub id: U256,
}

/// Event emitted on every approve call, granting or revoking
#[odra::event]
pub struct Approval {
    /// Account granting or revoking
    pub owner: Address,
    /// Account being approved or disapproved
    pub operator: Address,
    /// Token id, `None` for an approval over all tokens of `owner`
    pub id: Option<U256>,
    /// Approval status
    pub approved: bool,
}
