//! Emitted records for external indexers.
//!
//! Records are observable side effects only; nothing inside the swap reads
//! them back. Both record types are SSZ containers so an indexer can hash
//! or persist them deterministically.

use ssz_rs::prelude::*;

use crate::types::{Address, Amount, Order};

/// Emitted when an order is admitted to the registry.
///
/// ## SSZ Layout
///
/// id (8) + maker (20) + sell_token (20) + buy_token (20)
/// + sell_amount (16) + buy_amount (16) = 100 bytes
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct OrderCreated {
    pub id: u64,
    pub maker_raw: [u8; 20],
    pub sell_token_raw: [u8; 20],
    pub buy_token_raw: [u8; 20],
    pub sell_amount: u128,
    pub buy_amount: u128,
}

impl OrderCreated {
    /// Record describing a freshly stored order
    pub fn from_order(order: &Order) -> Self {
        Self {
            id: order.id,
            maker_raw: order.maker_raw,
            sell_token_raw: order.sell_token_raw,
            buy_token_raw: order.buy_token_raw,
            sell_amount: order.sell_amount,
            buy_amount: order.buy_amount,
        }
    }

    pub fn maker(&self) -> Address {
        Address(self.maker_raw)
    }

    pub fn sell_token(&self) -> Address {
        Address(self.sell_token_raw)
    }

    pub fn buy_token(&self) -> Address {
        Address(self.buy_token_raw)
    }
}

/// Emitted when an order settles.
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct OrderFulfilled {
    pub id: u64,
    pub filler_raw: [u8; 20],
}

impl OrderFulfilled {
    pub fn new(id: u64, filler: Address) -> Self {
        Self {
            id,
            filler_raw: filler.0,
        }
    }

    pub fn filler(&self) -> Address {
        Address(self.filler_raw)
    }
}

/// Any record the swap emits, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapEvent {
    OrderCreated(OrderCreated),
    OrderFulfilled(OrderFulfilled),
}

impl SwapEvent {
    /// Order the record refers to
    pub fn order_id(&self) -> u64 {
        match self {
            SwapEvent::OrderCreated(e) => e.id,
            SwapEvent::OrderFulfilled(e) => e.id,
        }
    }

    /// Stable record name, as an indexer would see it
    pub fn name(&self) -> &'static str {
        match self {
            SwapEvent::OrderCreated(_) => "OrderCreated",
            SwapEvent::OrderFulfilled(_) => "OrderFulfilled",
        }
    }

    /// Quantities moved by this record, if any (sell, buy)
    pub fn amounts(&self) -> Option<(Amount, Amount)> {
        match self {
            SwapEvent::OrderCreated(e) => Some((e.sell_amount, e.buy_amount)),
            SwapEvent::OrderFulfilled(_) => None,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
