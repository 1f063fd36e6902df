//! Error definitions shared by the token standards
use odra::prelude::*;

/// Arithmetic failures. Checked math never wraps, it reverts with one of these.
#[odra::odra_error]
#[derive(Debug)]
pub enum MathError {
    /// Result does not fit into the integer type
    Overflow = 1,

    /// Result would be negative
    Underflow = 2,

    /// Division by zero
    DivByZero = 3,
}

/// Custom errors for CEP-18 tokens
#[odra::odra_error]
pub enum TokenError {
    /// Insufficient allowance for transfer
    InsufficientAllowance = 100,

    /// Insufficient balance for operation
    InsufficientBalance = 101,
}

/// Custom errors for the NFT contract
#[odra::odra_error]
pub enum NftError {
    /// Owner tried to approve themselves
    SelfApprove = 110,

    /// Caller is neither the owner nor an approved operator
    NotApproved = 111,

    /// Token id is already minted
    TokenExists = 112,

    /// Token id was never minted or has been burned
    TokenNotExists = 113,
}
