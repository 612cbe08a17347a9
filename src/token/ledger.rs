//! In-memory host ledger.
//!
//! Holds every deployed [`Erc20Token`] keyed by its identity. Checkpoints
//! are full snapshots of the token map, which is enough for the handful of
//! tokens a swap touches per call.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::TokenError;
use crate::token::{Erc20Token, FungibleToken, TokenLedger};
use crate::types::{Address, Amount};

/// Token registry with snapshot rollback.
///
/// ## Example
///
/// ```
/// use order_swap::token::{Erc20Token, InMemoryLedger, TokenLedger};
/// use order_swap::types::Address;
///
/// let mut ledger = InMemoryLedger::new();
/// let mtk = ledger.deploy(Address::derive(b"MTK"), Erc20Token::new("Mock20Token", "MTK", 18));
///
/// let alice = Address::derive(b"alice");
/// ledger.mint(mtk, alice, 1_000).unwrap();
///
/// let checkpoint = ledger.checkpoint();
/// ledger.mint(mtk, alice, 1).unwrap();
/// ledger.rollback(checkpoint);
///
/// assert_eq!(ledger.balance_of(mtk, alice).unwrap(), 1_000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    tokens: BTreeMap<Address, Erc20Token>,
}

impl InMemoryLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `token` under `id`, replacing any previous token there.
    ///
    /// Returns `id` for convenient chaining.
    pub fn deploy(&mut self, id: Address, token: Erc20Token) -> Address {
        debug!(token = %id, symbol = token.symbol(), "deploy token");
        self.tokens.insert(id, token);
        id
    }

    /// Concrete token by identity
    pub fn erc20(&self, id: Address) -> Option<&Erc20Token> {
        self.tokens.get(&id)
    }

    /// Mint on a deployed token
    pub fn mint(&mut self, token: Address, to: Address, amount: Amount) -> Result<(), TokenError> {
        self.tokens
            .get_mut(&token)
            .ok_or(TokenError::UnknownToken(token))?
            .mint(to, amount)
    }

    /// `approve` on a deployed token
    pub fn approve(
        &mut self,
        token: Address,
        caller: Address,
        spender: Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        self.token_mut(token)
            .ok_or(TokenError::UnknownToken(token))?
            .approve(caller, spender, amount)
    }

    /// `transfer` on a deployed token
    pub fn transfer(
        &mut self,
        token: Address,
        caller: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        self.token_mut(token)
            .ok_or(TokenError::UnknownToken(token))?
            .transfer(caller, to, amount)
    }

    /// Number of deployed tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl TokenLedger for InMemoryLedger {
    type Checkpoint = BTreeMap<Address, Erc20Token>;

    fn token(&self, id: Address) -> Option<&dyn FungibleToken> {
        self.tokens.get(&id).map(|t| t as &dyn FungibleToken)
    }

    fn token_mut(&mut self, id: Address) -> Option<&mut dyn FungibleToken> {
        self.tokens.get_mut(&id).map(|t| t as &mut dyn FungibleToken)
    }

    fn checkpoint(&self) -> Self::Checkpoint {
        self.tokens.clone()
    }

    fn rollback(&mut self, checkpoint: Self::Checkpoint) {
        self.tokens = checkpoint;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
