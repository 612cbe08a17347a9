//! In-memory ERC-20 style token.
//!
//! Balances and allowances live in hash maps keyed by identity. Every
//! mutating method checks all of its preconditions before touching state,
//! so a failed call leaves the token unchanged.

use std::collections::HashMap;

use tracing::trace;

use crate::error::TokenError;
use crate::token::FungibleToken;
use crate::types::{Address, Amount};

/// A fungible token with ERC-20 semantics.
///
/// An allowance of `Amount::MAX` is treated as unlimited and is not
/// decremented by `transfer_from`.
///
/// ## Example
///
/// ```
/// use order_swap::token::{Erc20Token, FungibleToken};
/// use order_swap::types::Address;
///
/// let alice = Address::derive(b"alice");
/// let bob = Address::derive(b"bob");
///
/// let mut token = Erc20Token::new("Mock20Token", "MTK", 18);
/// token.mint(alice, 100).unwrap();
/// token.transfer(alice, bob, 40).unwrap();
///
/// assert_eq!(token.balance_of(alice), 60);
/// assert_eq!(token.balance_of(bob), 40);
/// ```
#[derive(Debug, Clone)]
pub struct Erc20Token {
    name: String,
    symbol: String,
    decimals: u32,
    total_supply: Amount,
    balances: HashMap<Address, Amount>,
    /// (owner, spender) -> remaining allowance
    allowances: HashMap<(Address, Address), Amount>,
}

impl Erc20Token {
    /// Create a token with zero supply
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, decimals: u32) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
            total_supply: 0,
            balances: HashMap::new(),
            allowances: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// Create `amount` new units owned by `to`
    pub fn mint(&mut self, to: Address, amount: Amount) -> Result<(), TokenError> {
        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        // Individual balances never exceed total supply, so this cannot overflow.
        *self.balances.entry(to).or_insert(0) += amount;
        self.total_supply = supply;
        Ok(())
    }

    /// Move funds between two accounts after checking the balance.
    fn move_balance(&mut self, from: Address, to: Address, amount: Amount) -> Result<(), TokenError> {
        let available = self.balance_of(from);
        if available < amount {
            return Err(TokenError::InsufficientBalance {
                available,
                required: amount,
            });
        }
        if from == to {
            return Ok(());
        }
        self.balances.insert(from, available - amount);
        *self.balances.entry(to).or_insert(0) += amount;
        Ok(())
    }
}

impl FungibleToken for Erc20Token {
    fn balance_of(&self, account: Address) -> Amount {
        self.balances.get(&account).copied().unwrap_or(0)
    }

    fn allowance(&self, owner: Address, spender: Address) -> Amount {
        self.allowances.get(&(owner, spender)).copied().unwrap_or(0)
    }

    fn approve(&mut self, caller: Address, spender: Address, amount: Amount) -> Result<(), TokenError> {
        trace!(token = %self.symbol, owner = %caller, %spender, amount, "approve");
        self.allowances.insert((caller, spender), amount);
        Ok(())
    }

    fn transfer(&mut self, caller: Address, to: Address, amount: Amount) -> Result<(), TokenError> {
        trace!(token = %self.symbol, from = %caller, %to, amount, "transfer");
        self.move_balance(caller, to, amount)
    }

    fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        let allowed = self.allowance(from, caller);
        if allowed < amount {
            return Err(TokenError::InsufficientAllowance {
                available: allowed,
                required: amount,
            });
        }

        trace!(token = %self.symbol, spender = %caller, %from, %to, amount, "transfer_from");
        self.move_balance(from, to, amount)?;

        if allowed != Amount::MAX {
            self.allowances.insert((from, caller), allowed - amount);
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
