//! Error taxonomy for the swap and its token collaborators.
//!
//! Every [`SwapError`] aborts the whole call with no partial state. The
//! `Display` text of each leaf is the reason a caller sees when an
//! invocation is rejected.

use thiserror::Error;

use crate::types::{Address, Amount};

pub type Result<T> = std::result::Result<T, SwapError>;

/// Rejected creation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Sell and buy tokens must be different")]
    SameToken,

    #[error("Amounts must be greater than zero")]
    ZeroAmount,
}

/// Missing pre-authorization on a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllowanceError {
    #[error("Insufficient allowance")]
    InsufficientAllowance,
}

/// Operation not valid for the order's current state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("Order does not exist")]
    OrderNotFound(u64),

    #[error("Order already fulfilled")]
    AlreadyFulfilled(u64),
}

/// A settlement leg could not move funds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("Transfer failed")]
    TransferFailed,

    #[error("Unknown token {0}")]
    UnknownToken(Address),
}

/// Top-level swap error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwapError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Allowance(#[from] AllowanceError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Transfer(#[from] TransferError),

    /// SSZ encoding failed while committing state
    #[error("Encoding: {0}")]
    Encoding(String),
}

/// Failure reported by a fungible token implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("insufficient balance: have {available}, need {required}")]
    InsufficientBalance { available: Amount, required: Amount },

    #[error("insufficient allowance: have {available}, need {required}")]
    InsufficientAllowance { available: Amount, required: Amount },

    #[error("amount overflow")]
    Overflow,

    #[error("unknown token {0}")]
    UnknownToken(Address),
}

impl From<TokenError> for SwapError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InsufficientAllowance { .. } => {
                SwapError::Allowance(AllowanceError::InsufficientAllowance)
            }
            TokenError::UnknownToken(token) => {
                SwapError::Transfer(TransferError::UnknownToken(token))
            }
            TokenError::InsufficientBalance { .. } | TokenError::Overflow => {
                SwapError::Transfer(TransferError::TransferFailed)
            }
        }
    }
}
