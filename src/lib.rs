#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]
extern crate alloc;

// CEP-18 tokens
pub mod token;
pub mod tokens;
pub mod errors;
pub mod events;
pub mod math;

// Ownership and roles
pub mod access;

// CEP-78 style NFT collection
pub mod nft;

// CEP-4626: Tokenized Vault Standard
pub mod cep4626;

// Native and CEP-18 vesting
pub mod vesting;
