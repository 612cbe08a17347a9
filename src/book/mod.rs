//! Order registry.
//!
//! ## Architecture
//!
//! The registry is an arena keyed by order id:
//!
//! - **Slab-based storage**: O(1) append and lookup
//! - **Append-only**: no update or delete path besides the one-time
//!   `fulfilled` flip
//! - **Dense ids**: id `n` is the `n`-th order ever created
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Append | O(1) amortized |
//! | Get by id | O(1) |
//! | Mark fulfilled | O(1) |
//! | State root | O(n) |

pub mod store;

pub use store::OrderStore;
