//! Swap engine.
//!
//! ## Components
//!
//! - [`OrderValidator`]: admission checks for new orders
//! - [`SwapExecutor`]: atomic two-leg settlement
//! - [`AccessGuard`]: owner fixed at initialization
//! - [`OrderSwap`]: entry points composing the above over an
//!   [`crate::book::OrderStore`]
//!
//! ## Control Flow
//!
//! ```text
//! create_order  -> validate -> store.append -> OrderCreated
//! fulfill_order -> store.get -> state check -> mark fulfilled
//!               -> settle (checkpointed) -> OrderFulfilled
//! ```
//!
//! ## Design Principles
//!
//! 1. **Deferred settlement**: creation checks authorization, funds move
//!    only at fulfillment
//! 2. **All-or-nothing**: a failed call leaves registry and ledger unchanged
//! 3. **Effects before interactions**: the fulfilled flag is set before any
//!    token transfer runs

pub mod executor;
pub mod guard;
pub mod swap;
pub mod validator;

pub use executor::SwapExecutor;
pub use guard::AccessGuard;
pub use swap::OrderSwap;
pub use validator::OrderValidator;
