//! Fungible-token collaborators.
//!
//! The swap never holds funds. It only needs two capabilities from the
//! outside world:
//!
//! - [`FungibleToken`]: per-asset balances, allowances and transfers
//! - [`TokenLedger`]: the host that resolves a token identity to its
//!   implementation and can undo a partially applied call
//!
//! [`Erc20Token`] and [`InMemoryLedger`] are in-process implementations of
//! both, used by the demo binary, the benchmarks and the test-suite.
//!
//! ## Caller identity
//!
//! On a ledger the caller of a token method is implicit. Here it is passed
//! explicitly as `caller`: for `transfer_from` the caller is the spender
//! whose allowance gets consumed.

mod erc20;
mod ledger;

pub use erc20::Erc20Token;
pub use ledger::InMemoryLedger;

use crate::error::TokenError;
use crate::types::{Address, Amount};

/// A fungible asset.
pub trait FungibleToken {
    /// Balance held by `account`
    fn balance_of(&self, account: Address) -> Amount;

    /// Amount `spender` may still move on behalf of `owner`
    fn allowance(&self, owner: Address, spender: Address) -> Amount;

    /// `caller` authorizes `spender` to move up to `amount` of its funds
    fn approve(&mut self, caller: Address, spender: Address, amount: Amount)
        -> Result<(), TokenError>;

    /// Move `amount` from `caller` to `to`
    fn transfer(&mut self, caller: Address, to: Address, amount: Amount) -> Result<(), TokenError>;

    /// Move `amount` from `from` to `to`, consuming `caller`'s allowance
    fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TokenError>;
}

/// Host environment holding every token the swap may touch.
///
/// The host provides the all-or-nothing guarantee: a caller takes a
/// [`TokenLedger::checkpoint`] before a multi-step operation and hands it
/// back to [`TokenLedger::rollback`] if any step fails.
pub trait TokenLedger {
    /// Opaque snapshot of ledger state
    type Checkpoint;

    /// Resolve a token identity
    fn token(&self, id: Address) -> Option<&dyn FungibleToken>;

    /// Resolve a token identity for mutation
    fn token_mut(&mut self, id: Address) -> Option<&mut dyn FungibleToken>;

    /// Capture the current state
    fn checkpoint(&self) -> Self::Checkpoint;

    /// Restore the state captured by `checkpoint`
    fn rollback(&mut self, checkpoint: Self::Checkpoint);

    /// Allowance lookup on `token`
    fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<Amount, TokenError> {
        self.token(token)
            .map(|t| t.allowance(owner, spender))
            .ok_or(TokenError::UnknownToken(token))
    }

    /// Balance lookup on `token`
    fn balance_of(&self, token: Address, account: Address) -> Result<Amount, TokenError> {
        self.token(token)
            .map(|t| t.balance_of(account))
            .ok_or(TokenError::UnknownToken(token))
    }

    /// `transfer_from` on `token`
    fn transfer_from(
        &mut self,
        token: Address,
        caller: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        self.token_mut(token)
            .ok_or(TokenError::UnknownToken(token))?
            .transfer_from(caller, from, to, amount)
    }
}
