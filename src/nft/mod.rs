//! Non-fungible token collection
//!
//! Ownership, per-token and operator approvals, owner-gated minting.

pub mod collection;
pub mod events;

pub use collection::Nft;
pub use events::*;
