//! Two-sided atomic settlement.
//!
//! ## Settlement Order
//!
//! 1. Look up the order (`OrderNotFound` if absent)
//! 2. Reject it if already fulfilled (`AlreadyFulfilled`)
//! 3. Flip the `fulfilled` flag
//! 4. Under a ledger checkpoint, move both legs:
//!    - `sell_amount` of `sell_token`: maker -> filler
//!    - `buy_amount` of `buy_token`: filler -> maker
//! 5. Return the `OrderFulfilled` record
//!
//! The flag is flipped before any token code runs, so a nested call into
//! the same order id during a transfer sees it as already fulfilled. If
//! either leg fails, the ledger is rolled back to the checkpoint and the
//! flag is cleared: both legs settle or neither does.

use tracing::{debug, warn};

use crate::book::OrderStore;
use crate::error::{Result, StateError};
use crate::token::TokenLedger;
use crate::types::{Address, Order, OrderFulfilled};

/// Settles orders against a [`TokenLedger`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapExecutor;

impl SwapExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Settle order `id` for `filler`.
    ///
    /// `spender` is the swap's own identity; both legs consume allowances
    /// granted to it.
    pub fn fulfill<L: TokenLedger>(
        &self,
        store: &mut OrderStore,
        ledger: &mut L,
        spender: Address,
        id: u64,
        filler: Address,
    ) -> Result<OrderFulfilled> {
        let order = store.get(id)?.clone();
        if order.fulfilled {
            return Err(StateError::AlreadyFulfilled(id).into());
        }

        store.mark_fulfilled(id)?;

        let checkpoint = ledger.checkpoint();
        if let Err(err) = self.settle(ledger, spender, &order, filler) {
            warn!(order_id = id, %filler, error = %err, "settlement failed, rolling back");
            ledger.rollback(checkpoint);
            store.revert_fulfilled(id);
            return Err(err);
        }

        Ok(OrderFulfilled::new(id, filler))
    }

    /// Move both legs of `order`. Does not roll back on failure.
    fn settle<L: TokenLedger>(
        &self,
        ledger: &mut L,
        spender: Address,
        order: &Order,
        filler: Address,
    ) -> Result<()> {
        let maker = order.maker();

        debug!(order_id = order.id, token = %order.sell_token(), from = %maker, to = %filler, amount = order.sell_amount, "sell leg");
        ledger.transfer_from(order.sell_token(), spender, maker, filler, order.sell_amount)?;

        debug!(order_id = order.id, token = %order.buy_token(), from = %filler, to = %maker, amount = order.buy_amount, "buy leg");
        ledger.transfer_from(order.buy_token(), spender, filler, maker, order.buy_amount)?;

        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
