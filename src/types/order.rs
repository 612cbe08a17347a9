//! Order types for the swap registry.
//!
//! ## SSZ Serialization
//!
//! `Order` derives `SimpleSerialize` from ssz_rs for deterministic encoding.
//! Identities are stored as raw `[u8; 20]` fields so the container stays
//! fixed-size; use the typed accessors ([`Order::maker`] etc.) to read them.
//!
//! ## Lifecycle
//!
//! An order is created once (by `create_order`), mutated exactly once (the
//! `fulfilled` flag flips on settlement) and never deleted.

use ssz_rs::prelude::*;

use crate::types::{Address, Amount};

// ============================================================================
// OrderParams
// ============================================================================

/// Creation parameters supplied by a maker.
///
/// These are the untrusted inputs to `create_order`; they are only turned
/// into an [`Order`] after validation succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderParams {
    /// Asset the maker gives up
    pub sell_token: Address,
    /// Asset the maker wants in return
    pub buy_token: Address,
    /// Quantity of `sell_token`, smallest unit
    pub sell_amount: Amount,
    /// Quantity of `buy_token`, smallest unit
    pub buy_amount: Amount,
}

impl OrderParams {
    /// Create a parameter set
    pub fn new(
        sell_token: Address,
        buy_token: Address,
        sell_amount: Amount,
        buy_amount: Amount,
    ) -> Self {
        Self {
            sell_token,
            buy_token,
            sell_amount,
            buy_amount,
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A recorded swap intent.
///
/// ## SSZ Layout
///
/// Fixed-size container, 101 bytes:
/// id (8) + maker (20) + sell_token (20) + buy_token (20)
/// + sell_amount (16) + buy_amount (16) + fulfilled (1)
///
/// ## Example
///
/// ```
/// use order_swap::types::{Address, Order, OrderParams};
///
/// let maker = Address::derive(b"maker");
/// let params = OrderParams::new(
///     Address::derive(b"MTK"),
///     Address::derive(b"LW3"),
///     1_000_000_000_000_000_000,
///     2_000_000_000_000_000_000,
/// );
///
/// let order = Order::new(0, maker, &params);
/// assert_eq!(order.maker(), maker);
/// assert!(!order.fulfilled);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct Order {
    /// Registry identifier (the order count at creation time)
    pub id: u64,

    /// Creator identity, raw bytes
    pub maker_raw: [u8; 20],

    /// Sold asset identity, raw bytes
    pub sell_token_raw: [u8; 20],

    /// Bought asset identity, raw bytes
    pub buy_token_raw: [u8; 20],

    /// Quantity of the sold asset
    pub sell_amount: u128,

    /// Quantity of the bought asset
    pub buy_amount: u128,

    /// Set once, on successful settlement
    pub fulfilled: bool,
}

impl Order {
    /// Build an unfulfilled order from validated parameters
    pub fn new(id: u64, maker: Address, params: &OrderParams) -> Self {
        Self {
            id,
            maker_raw: maker.0,
            sell_token_raw: params.sell_token.0,
            buy_token_raw: params.buy_token.0,
            sell_amount: params.sell_amount,
            buy_amount: params.buy_amount,
            fulfilled: false,
        }
    }

    /// Identity of the order's creator
    #[inline]
    pub fn maker(&self) -> Address {
        Address(self.maker_raw)
    }

    /// Asset the maker sells
    #[inline]
    pub fn sell_token(&self) -> Address {
        Address(self.sell_token_raw)
    }

    /// Asset the maker buys
    #[inline]
    pub fn buy_token(&self) -> Address {
        Address(self.buy_token_raw)
    }

    /// Whether the order can still be settled
    #[inline]
    pub fn is_open(&self) -> bool {
        !self.fulfilled
    }

    /// Creation parameters this order was built from
    pub fn params(&self) -> OrderParams {
        OrderParams::new(
            self.sell_token(),
            self.buy_token(),
            self.sell_amount,
            self.buy_amount,
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
