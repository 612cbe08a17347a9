//! Administrative owner record.
//!
//! The owner is fixed when the swap is initialized and never changes. No
//! operation in this crate is gated on it; it is exposed for identity only.

use crate::types::Address;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessGuard {
    owner: Address,
}

impl AccessGuard {
    /// Record `owner` as the administrative identity
    pub fn new(owner: Address) -> Self {
        Self { owner }
    }

    #[inline]
    pub fn owner(&self) -> Address {
        self.owner
    }

    #[inline]
    pub fn is_owner(&self, identity: Address) -> bool {
        self.owner == identity
    }
}
