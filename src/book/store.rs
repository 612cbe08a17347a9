//! Append-only order registry.
//!
//! ## Memory Model
//!
//! Orders live in a `Slab<Order>`. Slab keys are handed out densely from 0
//! and nothing is ever removed, so the slab key of an order is always its
//! id and `slab.len()` is the order count.
//!
//! ## State Root
//!
//! [`OrderStore::compute_state_root`] hashes the order count followed by
//! every order's SSZ encoding, in id order. Two stores with the same
//! history always produce the same root.

use sha2::{Digest, Sha256};
use slab::Slab;

use crate::error::{Result, StateError, SwapError};
use crate::types::{Address, Order, OrderParams};

/// Order registry keyed by a monotonically increasing id.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: Slab<Order>,
}

impl OrderStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            orders: Slab::new(),
        }
    }

    /// Create a store with pre-allocated capacity
    ///
    /// ```
    /// use order_swap::book::OrderStore;
    ///
    /// let store = OrderStore::with_capacity(1_000);
    /// assert!(store.capacity() >= 1_000);
    /// assert_eq!(store.order_count(), 0);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            orders: Slab::with_capacity(capacity),
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    #[inline]
    pub fn capacity(&self) -> usize {
        self.orders.capacity()
    }

    /// Number of orders ever created
    #[inline]
    pub fn order_count(&self) -> u64 {
        self.orders.len() as u64
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    // ========================================================================
    // Registry Operations
    // ========================================================================

    /// Store a new unfulfilled order and return its id.
    ///
    /// The id is the order count before the call.
    ///
    /// ```
    /// use order_swap::book::OrderStore;
    /// use order_swap::types::{Address, OrderParams};
    ///
    /// let mut store = OrderStore::new();
    /// let params = OrderParams::new(Address::derive(b"A"), Address::derive(b"B"), 1, 1);
    ///
    /// assert_eq!(store.append(Address::derive(b"maker"), &params), 0);
    /// assert_eq!(store.append(Address::derive(b"maker"), &params), 1);
    /// assert_eq!(store.order_count(), 2);
    /// ```
    pub fn append(&mut self, maker: Address, params: &OrderParams) -> u64 {
        let id = self.order_count();
        let entry = self.orders.vacant_entry();
        debug_assert_eq!(entry.key() as u64, id, "slab keys must track order ids");
        entry.insert(Order::new(id, maker, params));
        id
    }

    /// Look up an order by id
    pub fn get(&self, id: u64) -> Result<&Order> {
        usize::try_from(id)
            .ok()
            .and_then(|key| self.orders.get(key))
            .ok_or(SwapError::State(StateError::OrderNotFound(id)))
    }

    /// Whether an order with this id exists
    #[inline]
    pub fn contains(&self, id: u64) -> bool {
        id < self.order_count()
    }

    /// Flip an order's `fulfilled` flag.
    ///
    /// Callers guarantee this runs at most once per id; a second call is
    /// rejected with `AlreadyFulfilled` rather than silently accepted.
    pub fn mark_fulfilled(&mut self, id: u64) -> Result<()> {
        let order = self.get_mut(id)?;
        if order.fulfilled {
            return Err(StateError::AlreadyFulfilled(id).into());
        }
        order.fulfilled = true;
        Ok(())
    }

    /// Undo `mark_fulfilled` when the surrounding settlement aborts.
    pub(crate) fn revert_fulfilled(&mut self, id: u64) {
        if let Ok(order) = self.get_mut(id) {
            order.fulfilled = false;
        }
    }

    fn get_mut(&mut self, id: u64) -> Result<&mut Order> {
        usize::try_from(id)
            .ok()
            .and_then(|key| self.orders.get_mut(key))
            .ok_or(SwapError::State(StateError::OrderNotFound(id)))
    }

    /// Orders in id order
    pub fn iter(&self) -> impl Iterator<Item = &Order> + '_ {
        self.orders.iter().map(|(_, order)| order)
    }

    /// Number of orders still awaiting settlement
    pub fn open_count(&self) -> usize {
        self.iter().filter(|order| order.is_open()).count()
    }

    // ========================================================================
    // State Commitment
    // ========================================================================

    /// SHA-256 over the order count and every SSZ-encoded order
    pub fn compute_state_root(&self) -> Result<[u8; 32]> {
        let mut hasher = Sha256::new();
        hasher.update(self.order_count().to_le_bytes());

        for order in self.iter() {
            let bytes = ssz_rs::serialize(order)
                .map_err(|err| SwapError::Encoding(format!("{err:?}")))?;
            hasher.update(&bytes);
        }

        let mut root = [0u8; 32];
        root.copy_from_slice(&hasher.finalize());
        Ok(root)
    }

    /// State root as a hex string
    pub fn state_root_hex(&self) -> Result<String> {
        self.compute_state_root().map(hex::encode)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
