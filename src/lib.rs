//! # order-swap
//!
//! Peer-to-peer order-based token swap.
//!
//! A maker posts an intent to trade a fixed amount of one fungible token for
//! a fixed amount of another. Any filler may later execute that trade in a
//! single atomic step.
//!
//! ## Architecture
//!
//! - **Types**: Core data structures (Address, Order, SwapEvent)
//! - **Book**: Append-only order registry with slab storage
//! - **Engine**: Validation, settlement and the swap entry points
//! - **Token**: Fungible-token and host-ledger interfaces
//!
//! ## Design Principles
//!
//! 1. **Deferred settlement**: allowance is checked at creation, funds move
//!    at fulfillment; the swap never holds custody
//! 2. **Atomicity**: every call runs to completion or reverts entirely
//! 3. **Determinism**: SSZ-encoded orders hash to a reproducible state root
//! 4. **Synchronous Execution**: no async, no locks; `&mut self` serializes
//!    calls

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Address, Order, SwapEvent
pub mod types;

/// Order registry: slab-backed, append-only
pub mod book;

/// Swap engine: validator, executor, owner guard, entry points
pub mod engine;

/// Token collaborators: FungibleToken, TokenLedger, in-memory implementations
pub mod token;

/// Error taxonomy
pub mod error;

/// Runtime configuration
pub mod config;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use book::OrderStore;
pub use config::SwapConfig;
pub use engine::{AccessGuard, OrderSwap, OrderValidator, SwapExecutor};
pub use error::{Result, SwapError, TokenError};
pub use token::{Erc20Token, FungibleToken, InMemoryLedger, TokenLedger};
pub use types::{Address, Amount, Order, OrderParams, SwapEvent};
