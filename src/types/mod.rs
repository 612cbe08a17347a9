//! Core data types for the swap
//!
//! Registry entries and emitted records implement SSZ serialization for
//! deterministic encoding. Quantities are integers in each asset's smallest
//! unit.
//!
//! ## Types
//!
//! - [`Address`]: 20-byte account/contract identity
//! - [`Order`]: a recorded swap intent
//! - [`OrderParams`]: maker-supplied creation parameters
//! - [`SwapEvent`]: `OrderCreated` / `OrderFulfilled` records

mod address;
mod event;
mod order;
pub mod units;

pub use address::{Address, ADDRESS_LEN};
pub use event::{OrderCreated, OrderFulfilled, SwapEvent};
pub use order::{Order, OrderParams};

/// Token quantity in the asset's smallest unit
pub type Amount = u128;
