//! The swap entry points.
//!
//! [`OrderSwap`] owns all process-wide state: the order registry, the owner
//! record and the event log. It is created once and mutated only through
//! [`OrderSwap::create_order`] and [`OrderSwap::fulfill_order`]. Both take
//! `&mut self`, so calls are serialized and each one runs to completion or
//! leaves no trace.
//!
//! ## Example
//!
//! ```
//! use order_swap::engine::OrderSwap;
//! use order_swap::token::{Erc20Token, InMemoryLedger};
//! use order_swap::types::{Address, OrderParams};
//!
//! let deployer = Address::derive(b"deployer");
//! let filler = Address::derive(b"filler");
//! let mut swap = OrderSwap::new(Address::derive(b"swap"), deployer);
//!
//! let mut ledger = InMemoryLedger::new();
//! let mtk = ledger.deploy(Address::derive(b"MTK"), Erc20Token::new("Mock20Token", "MTK", 18));
//! let lw3 = ledger.deploy(Address::derive(b"LW3"), Erc20Token::new("LW3Token", "LW3", 18));
//! ledger.mint(mtk, deployer, 10).unwrap();
//! ledger.mint(lw3, filler, 10).unwrap();
//!
//! ledger.approve(mtk, deployer, swap.address(), 10).unwrap();
//! let id = swap.create_order(&ledger, deployer, OrderParams::new(mtk, lw3, 10, 5)).unwrap();
//!
//! ledger.approve(lw3, filler, swap.address(), 5).unwrap();
//! swap.fulfill_order(&mut ledger, filler, id).unwrap();
//!
//! assert!(swap.orders(id).unwrap().fulfilled);
//! ```

use tracing::{info, warn};

use crate::book::OrderStore;
use crate::config::SwapConfig;
use crate::engine::{AccessGuard, OrderValidator, SwapExecutor};
use crate::error::Result;
use crate::token::TokenLedger;
use crate::types::units::format_units;
use crate::types::{Address, Amount, Order, OrderCreated, OrderParams, SwapEvent};

/// Order-based token swap.
#[derive(Debug)]
pub struct OrderSwap {
    /// The swap's own identity; allowances must be granted to it
    address: Address,
    guard: AccessGuard,
    store: OrderStore,
    validator: OrderValidator,
    executor: SwapExecutor,
    events: Vec<SwapEvent>,
    display_decimals: u32,
}

impl OrderSwap {
    /// Initialize a swap at `address`, owned by `deployer`
    pub fn new(address: Address, deployer: Address) -> Self {
        Self::with_config(address, deployer, &SwapConfig::default())
    }

    /// Initialize with explicit pre-allocation and display settings
    pub fn with_config(address: Address, deployer: Address, config: &SwapConfig) -> Self {
        info!(swap = %address, owner = %deployer, "swap initialized");
        Self {
            address,
            guard: AccessGuard::new(deployer),
            store: OrderStore::with_capacity(config.order_capacity),
            validator: OrderValidator::new(),
            executor: SwapExecutor::new(),
            events: Vec::with_capacity(config.event_capacity),
            display_decimals: config.display_decimals,
        }
    }

    // ========================================================================
    // Entry Points
    // ========================================================================

    /// Admit a new order from `caller` and return its id.
    ///
    /// Checks the token pair, the amounts and `caller`'s allowance on the
    /// sell token (in that order). Nothing is stored or emitted on failure.
    pub fn create_order<L>(&mut self, ledger: &L, caller: Address, params: OrderParams) -> Result<u64>
    where
        L: TokenLedger + ?Sized,
    {
        if let Err(err) = self.validator.validate(ledger, &params, caller, self.address) {
            warn!(maker = %caller, error = %err, "create_order rejected");
            return Err(err);
        }

        let id = self.store.append(caller, &params);
        let order = self.store.get(id)?;

        info!(
            order_id = id,
            maker = %caller,
            sell_token = %params.sell_token,
            buy_token = %params.buy_token,
            sell_amount = %self.display(params.sell_amount),
            buy_amount = %self.display(params.buy_amount),
            "order created"
        );
        self.events.push(SwapEvent::OrderCreated(OrderCreated::from_order(order)));

        Ok(id)
    }

    /// Settle order `id` with `caller` as the filler.
    ///
    /// On failure the ledger and the order are left exactly as they were.
    pub fn fulfill_order<L: TokenLedger>(&mut self, ledger: &mut L, caller: Address, id: u64) -> Result<()> {
        let record = match self
            .executor
            .fulfill(&mut self.store, ledger, self.address, id, caller)
        {
            Ok(record) => record,
            Err(err) => {
                warn!(order_id = id, filler = %caller, error = %err, "fulfill_order rejected");
                return Err(err);
            }
        };

        info!(order_id = id, filler = %caller, "order fulfilled");
        self.events.push(SwapEvent::OrderFulfilled(record));
        Ok(())
    }

    // ========================================================================
    // Read Accessors
    // ========================================================================

    /// Borrow an order
    pub fn order(&self, id: u64) -> Result<&Order> {
        self.store.get(id)
    }

    /// Snapshot of an order
    pub fn orders(&self, id: u64) -> Result<Order> {
        self.store.get(id).cloned()
    }

    /// Number of orders ever created
    pub fn order_count(&self) -> u64 {
        self.store.order_count()
    }

    /// Administrative owner fixed at initialization
    pub fn owner(&self) -> Address {
        self.guard.owner()
    }

    /// Whether `identity` is the owner
    pub fn is_owner(&self, identity: Address) -> bool {
        self.guard.is_owner(identity)
    }

    /// The swap's own identity
    pub fn address(&self) -> Address {
        self.address
    }

    /// The order registry
    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    /// Records emitted so far, oldest first
    pub fn events(&self) -> &[SwapEvent] {
        &self.events
    }

    /// Take every emitted record, leaving the log empty
    pub fn drain_events(&mut self) -> Vec<SwapEvent> {
        std::mem::take(&mut self.events)
    }

    /// Commitment over the order registry
    pub fn state_root(&self) -> Result<[u8; 32]> {
        self.store.compute_state_root()
    }

    fn display(&self, amount: Amount) -> String {
        format_units(amount, self.display_decimals).unwrap_or_else(|| amount.to_string())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
